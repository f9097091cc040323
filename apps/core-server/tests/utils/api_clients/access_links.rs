use serde_json::{Value, json};
use shared_types::{AccessLinkId, CaseId};

use super::{HttpClient, Response};

pub struct AccessLinksApi {
    client: HttpClient,
}

impl AccessLinksApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, case_id: &CaseId, expires_in_hours: u32) -> Response {
        let body = json!({
            "caseId": case_id,
            "title": "Signed witness statement",
            "description": "Please upload the signed statement",
            "expiresInHours": expires_in_hours,
            "contactEmail": "witness@example.com",
        });

        self.client.post("/api/access-link/v1", body).await
    }

    pub async fn get(&self, id: &AccessLinkId) -> Response {
        self.client.get(&format!("/api/access-link/v1/{id}")).await
    }

    pub async fn verify(&self, id: &AccessLinkId, pin: &str) -> Response {
        self.client
            .post(
                &format!("/public/access-link/v1/{id}/verify"),
                json!({ "pin": pin }),
            )
            .await
    }

    /// Must be called on a client carrying the capability token
    pub async fn submit(&self, body: Value) -> Response {
        self.client
            .post("/public/access-link/v1/submit", body)
            .await
    }
}
