use autometrics::autometrics;
use lexdesk_core::model::admin::{Admin, AdminListQuery, GetAdminList};
use lexdesk_core::repository::admin_repository::AdminRepository;
use lexdesk_core::repository::error::DataLayerError;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::AdminId;

use super::AdminProvider;
use crate::common::fetch_page;
use crate::entity::admin;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl AdminRepository for AdminProvider {
    async fn create_admin(&self, request: Admin) -> Result<AdminId, DataLayerError> {
        let id = request.id;

        admin::Entity::insert(admin::ActiveModel::from(request))
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(id)
    }

    async fn get_admin(&self, id: &AdminId) -> Result<Option<Admin>, DataLayerError> {
        let admin = admin::Entity::find_by_id(id)
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(admin.map(Admin::from))
    }

    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>, DataLayerError> {
        let admin = admin::Entity::find()
            .filter(admin::Column::Email.eq(email))
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(admin.map(Admin::from))
    }

    async fn get_admin_list(&self, query: AdminListQuery) -> Result<GetAdminList, DataLayerError> {
        let mut select = admin::Entity::find()
            .order_by_asc(admin::Column::Name)
            .order_by_asc(admin::Column::Id);

        if let Some(role) = query.role {
            select = select.filter(admin::Column::Role.eq(admin::AdminRole::from(role)));
        }

        let page = fetch_page(select, &query.pagination, &self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(page.map(Admin::from))
    }
}
