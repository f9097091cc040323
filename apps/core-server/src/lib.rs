#![cfg_attr(feature = "strict", deny(warnings))]

use std::net::IpAddr;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

mod deserialize;
pub mod dto;
pub mod endpoint;
pub mod extractor;
pub mod metrics;
pub mod router;
pub mod scheduler;
pub mod build_info {
    use shadow_rs::shadow;

    shadow!(build);

    pub use build::*;
}
mod middleware;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub database_url: String,
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    /// bearer token of the back-office frontend
    pub auth_token: String,
    /// HMAC key of the capability tokens issued to counterparties
    #[serde(skip_serializing, deserialize_with = "deserialize::opt_secret_string")]
    pub capability_token_key: Option<SecretString>,
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    // when set to true hides the `cause` field in the error response
    pub hide_error_response_cause: bool,
    /// whether swagger and openapi endpoints are available
    pub enable_open_api: bool,
    /// whether configured tasks run periodically inside the server
    pub enable_task_scheduler: bool,
    /// super-admin created on startup when no admin with this e-mail exists
    pub bootstrap_admin: Option<BootstrapAdminConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapAdminConfig {
    pub name: String,
    pub email: String,
}
