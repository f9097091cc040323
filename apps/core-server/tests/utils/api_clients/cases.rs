use serde_json::{Value, json};
use shared_types::{CaseId, ClientId};

use super::{HttpClient, Response};

pub struct CasesApi {
    client: HttpClient,
}

impl CasesApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, client_id: &ClientId, title: &str, case_number: &str) -> Response {
        let body = json!({
            "clientId": client_id,
            "title": title,
            "caseNumber": case_number,
        });

        self.client.post("/api/case/v1", body).await
    }

    pub async fn get(&self, id: &CaseId) -> Response {
        self.client.get(&format!("/api/case/v1/{id}")).await
    }

    pub async fn create_hearing(&self, id: &CaseId, hearing_date: &str, title: &str) -> Response {
        let body = json!({
            "hearingDate": hearing_date,
            "title": title,
        });

        self.client
            .post(&format!("/api/case/v1/{id}/hearing"), body)
            .await
    }

    pub async fn list_hearings(&self, id: &CaseId) -> Response {
        self.client.get(&format!("/api/case/v1/{id}/hearing")).await
    }

    pub async fn create_comment(&self, id: &CaseId, body: Value) -> Response {
        self.client
            .post(&format!("/api/case/v1/{id}/comment"), body)
            .await
    }

    pub async fn list_comments(&self, id: &CaseId) -> Response {
        self.client.get(&format!("/api/case/v1/{id}/comment")).await
    }

    pub async fn list_access_links(&self, id: &CaseId) -> Response {
        self.client
            .get(&format!("/api/case/v1/{id}/access-link"))
            .await
    }
}
