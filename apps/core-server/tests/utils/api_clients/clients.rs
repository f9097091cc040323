use serde_json::json;
use shared_types::{AdminId, ClientId};

use super::{HttpClient, Response};

pub struct ClientsApi {
    client: HttpClient,
}

impl ClientsApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, name: &str, email: &str, owner_id: Option<AdminId>) -> Response {
        let body = json!({
            "name": name,
            "email": email,
            "ownerId": owner_id,
        });

        self.client.post("/api/client/v1", body).await
    }

    pub async fn get(&self, id: &ClientId) -> Response {
        self.client.get(&format!("/api/client/v1/{id}")).await
    }

    pub async fn list(&self) -> Response {
        self.client.get("/api/client/v1").await
    }
}
