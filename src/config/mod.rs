use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};

use crate::service::types::{
    DEFAULT_ENDPOINT, DEFAULT_INPUT_FIELD, DEFAULT_PATH, DEFAULT_REPLY_FIELD,
};
use crate::service::{BaseUrl, HttpConfig, ServiceConfig};
use crate::widget::FailurePolicy;

const ENV_PREFIX: &str = "CHATWIDGET";

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Config file already exists at {0}")]
    AlreadyExists(PathBuf),

    #[error("Config directory not found")]
    NoConfigDir,
}

pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|h| h.join("Library/Application Support/chatwidget"))
    }

    #[cfg(target_os = "linux")]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
            .map(|c| c.join("chatwidget"))
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .map(|a| a.join("chatwidget"))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|h| h.join(".config/chatwidget"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub path: String,
    pub input_field: String,
    pub reply_field: String,
    pub failure_policy: FailurePolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    pub max_retries: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            path: DEFAULT_PATH.to_string(),
            input_field: DEFAULT_INPUT_FIELD.to_string(),
            reply_field: DEFAULT_REPLY_FIELD.to_string(),
            failure_policy: FailurePolicy::default(),
            timeout_secs: None,
            max_retries: 0,
            user_agent: None,
        }
    }
}

impl AppConfig {
    /// Config file (if any) layered under `CHATWIDGET_*` environment variables.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(Self::get_config_path().as_deref())
    }

    pub fn load_from(path: Option<&Path>) -> ConfigResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        Ok(builder.build()?.try_deserialize()?)
    }

    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        get_config_dir().map(|dir| dir.join("config.toml"))
    }

    pub fn init_default() -> ConfigResult<PathBuf> {
        let path = Self::get_config_path().ok_or(ConfigError::NoConfigDir)?;
        Self::init_at(&path)?;
        Ok(path)
    }

    /// Writes the commented template to `path`, refusing to overwrite.
    pub fn init_at(path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }

        fs::write(path, include_str!("config.template.toml"))?;
        Ok(())
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            base_url: BaseUrl::new(self.endpoint.clone()),
            path: self.path.clone(),
            input_field: self.input_field.clone(),
            reply_field: self.reply_field.clone(),
        }
    }

    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        let mut http = HttpConfig::new().with_max_retries(self.max_retries);
        if let Some(secs) = self.timeout_secs {
            http = http.with_timeout(Duration::from_secs(secs));
        }
        if let Some(ref ua) = self.user_agent {
            http = http.with_user_agent(ua.clone());
        }
        http
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:5000");
        assert_eq!(config.path, "/ask");
        assert_eq!(config.failure_policy, FailurePolicy::Silent);
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "endpoint = \"http://answers.test:8080\"\nfailure_policy = \"report\"\ntimeout_secs = 15\n",
        )
        .expect("Failed to write config");

        let config = AppConfig::load_from(Some(&path)).expect("Failed to load config");
        assert_eq!(config.endpoint, "http://answers.test:8080");
        assert_eq!(config.failure_policy, FailurePolicy::Report);
        assert_eq!(config.timeout_secs, Some(15));
        assert_eq!(config.path, "/ask");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("absent.toml");

        let config = AppConfig::load_from(Some(&path)).expect("Failed to load config");
        assert_eq!(config.reply_field, "response");
    }

    #[test]
    fn test_invalid_policy_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "failure_policy = \"loud\"\n").expect("Failed to write config");

        assert!(matches!(
            AppConfig::load_from(Some(&path)),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    fn test_init_template_loads_as_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("config.toml");

        AppConfig::init_at(&path).expect("Failed to init config");
        let config = AppConfig::load_from(Some(&path)).expect("Failed to load config");
        assert_eq!(config, AppConfig::default());

        assert!(matches!(
            AppConfig::init_at(&path),
            Err(ConfigError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_to_toml() {
        let config = AppConfig {
            timeout_secs: Some(10),
            ..AppConfig::default()
        };
        let toml = config.to_toml().expect("Failed to serialize");
        assert!(toml.contains("endpoint = \"http://127.0.0.1:5000\""));
        assert!(toml.contains("failure_policy = \"silent\""));
        assert!(toml.contains("timeout_secs = 10"));
        assert!(!toml.contains("user_agent"));
    }

    #[test]
    fn test_http_and_service_config() {
        let config = AppConfig {
            endpoint: "http://answers.test/".to_string(),
            timeout_secs: Some(5),
            max_retries: 2,
            ..AppConfig::default()
        };

        assert_eq!(config.service_config().url(), "http://answers.test/ask");
        let http = config.http_config();
        assert_eq!(http.timeout, Some(Duration::from_secs(5)));
        assert_eq!(http.max_retries, 2);
    }
}
