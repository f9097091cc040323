use serde_json::{Value, json};
use shared_types::{ClientId, InvoiceId};

use super::{HttpClient, Response};

pub struct InvoicesApi {
    client: HttpClient,
}

impl InvoicesApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, client_id: &ClientId, amount: &str, due_date: &str) -> Response {
        let body = json!({
            "clientId": client_id,
            "amount": amount,
            "dueDate": due_date,
        });

        self.client.post("/api/invoice/v1", body).await
    }

    pub async fn get(&self, id: &InvoiceId) -> Response {
        self.client.get(&format!("/api/invoice/v1/{id}")).await
    }

    pub async fn list(&self, query: &str) -> Response {
        self.client.get(&format!("/api/invoice/v1?{query}")).await
    }

    pub async fn delete(&self, id: &InvoiceId) -> Response {
        self.client.delete(&format!("/api/invoice/v1/{id}")).await
    }

    pub async fn cancel(&self, id: &InvoiceId) -> Response {
        self.client
            .post(&format!("/api/invoice/v1/{id}/cancel"), None)
            .await
    }

    pub async fn add_payment(&self, id: &InvoiceId, amount: &str, mode: &str) -> Response {
        let body = json!({
            "amount": amount,
            "mode": mode,
        });

        self.client
            .post(&format!("/api/invoice/v1/{id}/payment"), body)
            .await
    }

    pub async fn list_payments(&self, id: &InvoiceId) -> Response {
        self.client
            .get(&format!("/api/invoice/v1/{id}/payment"))
            .await
    }

    pub async fn update_payment(&self, id: &InvoiceId, payment_id: &str, body: Value) -> Response {
        self.client
            .patch(&format!("/api/invoice/v1/{id}/payment/{payment_id}"), body)
            .await
    }

    pub async fn delete_payment(&self, id: &InvoiceId, payment_id: &str) -> Response {
        self.client
            .delete(&format!("/api/invoice/v1/{id}/payment/{payment_id}"))
            .await
    }
}
