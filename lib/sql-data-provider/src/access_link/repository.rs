use autometrics::autometrics;
use lexdesk_core::model::access_link::{AccessLink, AccessLinkStatus, TransitionCondition};
use lexdesk_core::repository::access_link_repository::AccessLinkRepository;
use lexdesk_core::repository::error::DataLayerError;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use shared_types::{AccessLinkId, CaseId};
use time::OffsetDateTime;

use super::AccessLinkProvider;
use crate::entity::access_link;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl AccessLinkRepository for AccessLinkProvider {
    async fn create_access_link(
        &self,
        request: AccessLink,
    ) -> Result<AccessLinkId, DataLayerError> {
        let id = request.id;

        access_link::Entity::insert(access_link::ActiveModel::from(request))
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(id)
    }

    async fn get_access_link(
        &self,
        id: &AccessLinkId,
    ) -> Result<Option<AccessLink>, DataLayerError> {
        let link = access_link::Entity::find_by_id(id)
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(link.map(AccessLink::from))
    }

    async fn get_access_link_list(
        &self,
        case_id: &CaseId,
    ) -> Result<Vec<AccessLink>, DataLayerError> {
        let links = access_link::Entity::find()
            .filter(access_link::Column::CaseId.eq(case_id))
            .order_by_desc(access_link::Column::CreatedDate)
            .all(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(links.into_iter().map(AccessLink::from).collect())
    }

    async fn transition_status(
        &self,
        id: &AccessLinkId,
        from: AccessLinkStatus,
        to: AccessLinkStatus,
        condition: Option<TransitionCondition>,
        now: OffsetDateTime,
    ) -> Result<bool, DataLayerError> {
        let mut update = access_link::Entity::update_many()
            .col_expr(
                access_link::Column::Status,
                Expr::value(access_link::AccessLinkStatus::from(to)),
            )
            .col_expr(access_link::Column::LastModified, Expr::value(now))
            .filter(access_link::Column::Id.eq(id))
            .filter(access_link::Column::Status.eq(access_link::AccessLinkStatus::from(from)));

        update = match condition {
            None => update,
            Some(TransitionCondition::NotExpiredAt(at)) => {
                update.filter(access_link::Column::ExpiresAt.gte(at))
            }
            Some(TransitionCondition::ExpiredAt(at)) => {
                update.filter(access_link::Column::ExpiresAt.lt(at))
            }
        };

        let result = update
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(result.rows_affected == 1)
    }

    async fn get_expired_active_ids(
        &self,
        now: OffsetDateTime,
        limit: u64,
    ) -> Result<Vec<AccessLinkId>, DataLayerError> {
        access_link::Entity::find()
            .select_only()
            .column(access_link::Column::Id)
            .filter(access_link::Column::Status.eq(access_link::AccessLinkStatus::Active))
            .filter(access_link::Column::ExpiresAt.lt(now))
            .order_by_asc(access_link::Column::ExpiresAt)
            .limit(limit)
            .into_tuple()
            .all(&self.db.tx())
            .await
            .map_err(to_data_layer_error)
    }

    async fn delete_terminal_before(&self, cutoff: OffsetDateTime) -> Result<u64, DataLayerError> {
        let result = access_link::Entity::delete_many()
            .filter(access_link::Column::Status.is_in([
                access_link::AccessLinkStatus::Expired,
                access_link::AccessLinkStatus::Used,
            ]))
            .filter(access_link::Column::LastModified.lt(cutoff))
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(result.rows_affected)
    }
}
