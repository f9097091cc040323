use super::{HttpClient, Response};

pub struct OtherApi {
    client: HttpClient,
}

impl OtherApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn health(&self) -> Response {
        self.client.get("/health").await
    }

    pub async fn build_info(&self) -> Response {
        self.client.get("/build-info").await
    }

    pub async fn metrics(&self) -> Response {
        self.client.get("/metrics").await
    }
}
