use serde_json::json;
use shared_types::AdminId;

use super::{HttpClient, Response};

pub struct AdminsApi {
    client: HttpClient,
}

impl AdminsApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, name: &str, email: &str, role: &str) -> Response {
        let body = json!({
            "name": name,
            "email": email,
            "role": role,
        });

        self.client.post("/api/admin/v1", body).await
    }

    pub async fn get(&self, id: &AdminId) -> Response {
        self.client.get(&format!("/api/admin/v1/{id}")).await
    }

    pub async fn list(&self, page: u32, page_size: u32) -> Response {
        self.client
            .get(&format!("/api/admin/v1?page={page}&pageSize={page_size}"))
            .await
    }
}
