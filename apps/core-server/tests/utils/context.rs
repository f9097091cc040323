use core_server::router::start_server;
use shared_types::AdminId;
use tokio::task::JoinHandle;

use super::api_clients::Client;
use super::db_clients::DbClient;
use crate::fixtures;

pub struct TestContext {
    pub db: DbClient,
    /// acting as the super-admin created with the context
    pub api: Client,
    pub super_admin_id: AdminId,
    base_url: String,
    _handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new() -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let config = fixtures::create_config();
        let db = fixtures::create_db(&config).await;
        let _handle = tokio::spawn({
            let db = db.clone();
            async move { start_server(listener, config, db).await }
        });

        let db = DbClient::new(db);
        let super_admin_id = db.create_super_admin("root@lexdesk.test").await;

        Self {
            api: Client::new(
                base_url.clone(),
                fixtures::AUTH_TOKEN.into(),
                Some(super_admin_id),
            ),
            db,
            super_admin_id,
            base_url,
            _handle,
        }
    }

    /// Context plus an advocate owning one client with one case
    pub async fn new_with_case() -> (Self, CaseSetup) {
        let context = Self::new().await;
        let advocate_id = context.db.create_advocate("advocate@lexdesk.test").await;
        let client_id = context.db.create_client(advocate_id).await;
        let case_id = context.db.create_case(advocate_id, client_id).await;

        (
            context,
            CaseSetup {
                advocate_id,
                client_id,
                case_id,
            },
        )
    }

    /// Back-office client acting as another admin
    pub fn api_as(&self, actor: AdminId) -> Client {
        Client::new(self.base_url.clone(), fixtures::AUTH_TOKEN.into(), Some(actor))
    }

    /// Client sending an arbitrary bearer token and optional actor header
    pub fn api_with_token(&self, token: &str, actor: Option<AdminId>) -> Client {
        Client::new(self.base_url.clone(), token.into(), actor)
    }
}

pub struct CaseSetup {
    pub advocate_id: AdminId,
    pub client_id: shared_types::ClientId,
    pub case_id: shared_types::CaseId,
}
