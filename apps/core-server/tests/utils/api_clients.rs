use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared_types::AdminId;

use self::access_links::AccessLinksApi;
use self::admins::AdminsApi;
use self::cases::CasesApi;
use self::clients::ClientsApi;
use self::histories::HistoriesApi;
use self::invoices::InvoicesApi;
use self::other::OtherApi;
use self::tasks::TasksApi;

pub mod access_links;
pub mod admins;
pub mod cases;
pub mod clients;
pub mod histories;
pub mod invoices;
pub mod other;
pub mod tasks;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    token: String,
    actor: Option<AdminId>,
}

impl HttpClient {
    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{url}", self.base_url);

        let mut builder = http_client().request(method, url);
        if !self.token.is_empty() {
            builder = builder.bearer_auth(&self.token);
        }
        if let Some(actor) = self.actor {
            builder = builder.header("X-Actor-Id", actor.to_string());
        }
        builder
    }

    pub async fn get(&self, url: &str) -> Response {
        let resp = self
            .request(reqwest::Method::GET, url)
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post(&self, url: &str, body: impl Into<Option<Value>>) -> Response {
        let resp = self
            .request(reqwest::Method::POST, url)
            .json(&body.into())
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn patch(&self, url: &str, body: impl Into<Option<Value>>) -> Response {
        let resp = self
            .request(reqwest::Method::PATCH, url)
            .json(&body.into())
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn delete(&self, url: &str) -> Response {
        let resp = self
            .request(reqwest::Method::DELETE, url)
            .send()
            .await
            .unwrap();

        Response { resp }
    }
}

pub struct Response {
    resp: reqwest::Response,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.resp.status().into()
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.resp
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned)
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let full = self.resp.bytes().await.unwrap();
        serde_json::from_slice(&full).unwrap()
    }

    pub async fn json_value(self) -> Value {
        self.json().await
    }

    pub async fn text(self) -> String {
        self.resp.text().await.unwrap()
    }
}

pub struct Client {
    pub access_links: AccessLinksApi,
    pub admins: AdminsApi,
    pub cases: CasesApi,
    pub clients: ClientsApi,
    pub histories: HistoriesApi,
    pub invoices: InvoicesApi,
    pub other: OtherApi,
    pub tasks: TasksApi,
}

impl Client {
    pub fn new(base_url: String, token: String, actor: Option<AdminId>) -> Self {
        let client = HttpClient {
            base_url,
            token,
            actor,
        };

        Self {
            access_links: AccessLinksApi::new(client.clone()),
            admins: AdminsApi::new(client.clone()),
            cases: CasesApi::new(client.clone()),
            clients: ClientsApi::new(client.clone()),
            histories: HistoriesApi::new(client.clone()),
            invoices: InvoicesApi::new(client.clone()),
            other: OtherApi::new(client.clone()),
            tasks: TasksApi::new(client),
        }
    }
}
