use shared_types::AdminId;

use super::error::DataLayerError;
use crate::model::admin::{Admin, AdminListQuery, GetAdminList};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create_admin(&self, request: Admin) -> Result<AdminId, DataLayerError>;

    async fn get_admin(&self, id: &AdminId) -> Result<Option<Admin>, DataLayerError>;

    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>, DataLayerError>;

    async fn get_admin_list(&self, query: AdminListQuery) -> Result<GetAdminList, DataLayerError>;
}
