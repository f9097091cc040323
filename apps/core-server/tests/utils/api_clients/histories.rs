use super::{HttpClient, Response};

pub struct HistoriesApi {
    client: HttpClient,
}

impl HistoriesApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, entity_id: impl std::fmt::Display) -> Response {
        self.client
            .get(&format!("/api/history/v1?entityId={entity_id}"))
            .await
    }
}
