use core_server::ServerConfig;
use lexdesk_core::config::core_config::AppConfig;
use secrecy::SecretString;
use sql_data_provider::DbConn;

pub const AUTH_TOKEN: &str = "test";

pub fn create_config() -> AppConfig<ServerConfig> {
    let root = std::env!("CARGO_MANIFEST_DIR");
    let base = std::fs::read_to_string(format!("{root}/../../config/config.yml")).unwrap();

    // keep PIN hashing cheap in tests
    let overrides = indoc::indoc! {"
        core:
          accessLink:
            hashRounds: 1000
    "};

    let mut app_config: AppConfig<ServerConfig> =
        AppConfig::from_yaml([base.as_str(), overrides]).unwrap();

    app_config.app = ServerConfig {
        database_url: "sqlite::memory:".into(),
        auth_token: AUTH_TOKEN.to_string(),
        capability_token_key: Some(SecretString::from(
            "integration-test-capability-key".to_string(),
        )),
        trace_level: Some("debug,hyper=error,sea_orm=info,sqlx::query=error".into()),
        hide_error_response_cause: false,
        enable_open_api: false,
        enable_task_scheduler: false,
        ..Default::default()
    };

    app_config
}

pub async fn create_db(config: &AppConfig<ServerConfig>) -> DbConn {
    sql_data_provider::db_conn(&config.app.database_url, true)
        .await
        .unwrap()
}
