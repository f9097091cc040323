use sql_data_provider::DbConn;
use sql_data_provider::test_utilities::{
    insert_admin_to_database, insert_case_to_database, insert_client_to_database,
    insert_super_admin_to_database, set_access_link_expiry,
};
use shared_types::{AccessLinkId, AdminId, CaseId, ClientId};
use time::OffsetDateTime;

pub struct DbClient {
    db: DbConn,
}

impl DbClient {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create_super_admin(&self, email: &str) -> AdminId {
        insert_super_admin_to_database(&self.db, email)
            .await
            .unwrap()
    }

    pub async fn create_advocate(&self, email: &str) -> AdminId {
        insert_admin_to_database(&self.db, email).await.unwrap()
    }

    pub async fn create_client(&self, owner_id: AdminId) -> ClientId {
        insert_client_to_database(&self.db, owner_id).await.unwrap()
    }

    pub async fn create_case(&self, owner_id: AdminId, client_id: ClientId) -> CaseId {
        insert_case_to_database(&self.db, owner_id, client_id)
            .await
            .unwrap()
    }

    pub async fn set_access_link_expiry(&self, id: AccessLinkId, expires_at: OffsetDateTime) {
        set_access_link_expiry(&self.db, id, expires_at)
            .await
            .unwrap()
    }
}
