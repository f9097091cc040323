use std::collections::BTreeMap;
use std::path::Path;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DurationSeconds, serde_as, skip_serializing_none};
use strum::{Display, EnumString};

use super::{ConfigParsingError, ConfigValidationError};

type Dict<K, V> = BTreeMap<K, V>;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoCustomConfig;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppCustomConfigSerdeDTO<Custom> {
    #[serde(default)]
    app: Custom,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    #[serde(default)]
    pub app: Custom,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    #[serde(default)]
    pub access_link: AccessLinkConfig,
    #[serde(default)]
    pub invoice: InvoiceConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub pdf: PdfConfig,
    #[serde(default)]
    pub task: TaskConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessLinkConfig {
    pub pin_length: usize,
    /// PBKDF2 iterations used for PIN hashes
    pub hash_rounds: u32,
    pub max_expires_in_hours: u32,
    /// Base of the presentation URL sent to the counterparty
    pub public_base_url: String,
}

impl Default for AccessLinkConfig {
    fn default() -> Self {
        Self {
            pin_length: 6,
            hash_rounds: 600_000,
            max_expires_in_hours: 720,
            public_base_url: "http://localhost:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceConfig {
    pub number_prefix: String,
    pub currency: String,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            number_prefix: "INV".to_string(),
            currency: "INR".to_string(),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationConfig {
    pub r#type: NotificationType,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(rename = "timeoutSeconds")]
    pub timeout: std::time::Duration,
    pub params: Option<Value>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            r#type: NotificationType::Log,
            timeout: std::time::Duration::from_secs(10),
            params: None,
        }
    }
}

#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    #[serde(rename = "LOG")]
    #[strum(serialize = "LOG")]
    Log,
    #[serde(rename = "HTTP")]
    #[strum(serialize = "HTTP")]
    Http,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PdfConfig {
    pub r#type: PdfRendererType,
    pub params: Option<Value>,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            r#type: PdfRendererType::None,
            params: None,
        }
    }
}

#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, Serialize, Deserialize)]
pub enum PdfRendererType {
    #[serde(rename = "NONE")]
    #[strum(serialize = "NONE")]
    None,
    #[serde(rename = "HTTP")]
    #[strum(serialize = "HTTP")]
    Http,
}

pub type TaskConfig = ConfigBlock<TaskType>;

#[derive(
    Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TaskType {
    #[serde(rename = "EXPIRE_ACCESS_LINKS")]
    #[strum(serialize = "EXPIRE_ACCESS_LINKS")]
    ExpireAccessLinks,
    #[serde(rename = "RETAIN_ACCESS_LINKS")]
    #[strum(serialize = "RETAIN_ACCESS_LINKS")]
    RetainAccessLinks,
    #[serde(rename = "INVOICE_REMINDER")]
    #[strum(serialize = "INVOICE_REMINDER")]
    InvoiceReminder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigBlock<T>(Dict<String, Fields<T>>);

impl<T> Default for ConfigBlock<T> {
    fn default() -> Self {
        Self(Dict::new())
    }
}

impl<T> ConfigBlock<T> {
    pub fn get_fields(&self, key: &str) -> Result<&Fields<T>, ConfigValidationError> {
        self.0
            .get(key)
            .ok_or_else(|| ConfigValidationError::EntryNotFound(key.to_owned()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Fields<T>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn insert(&mut self, key: impl Into<String>, fields: Fields<T>) {
        self.0.insert(key.into(), fields);
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fields<T> {
    pub r#type: T,
    pub enabled: Option<bool>,
    /// Period of the scheduled run, tasks without it only run on demand
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    #[serde(default, rename = "intervalSeconds")]
    pub interval: Option<std::time::Duration>,
    #[serde(default)]
    pub params: Option<Value>,
}

impl<T> Fields<T> {
    pub fn enabled(&self) -> bool {
        self.enabled != Some(false)
    }

    /// Deserializes the `params` object into a typed parameter struct
    pub fn deserialize_params<U: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<U, ConfigValidationError> {
        let params = self
            .params
            .clone()
            .ok_or_else(|| ConfigValidationError::MissingParams(key.to_owned()))?;

        serde_json::from_value(params).map_err(|source| {
            ConfigValidationError::FieldsDeserialization {
                key: key.to_owned(),
                source,
            }
        })
    }
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(s.as_ref()))
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: Serialize + DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::Yaml(Yaml::file(path)));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension().is_some_and(|ext| ext == "json") {
                inputs.push(InputFormat::Json(Json::file(path)));
                continue;
            }

            return Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported file or missing file extension: {}",
                path.as_ref().display()
            )));
        }

        AppConfig::parse(inputs)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let inputs = configs.into_iter().map(InputFormat::yaml_str);

        AppConfig::parse(inputs)
    }

    pub fn parse(
        inputs: impl IntoIterator<Item = InputFormat>,
    ) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("LEXDESK_").split("__").lowercase(false));
        }

        let core = figment
            .extract::<CoreConfig>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        let custom = figment
            .extract::<AppCustomConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;

        Ok(Self {
            core,
            app: custom.app,
        })
    }
}
