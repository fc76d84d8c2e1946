use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::{normalize_base_url, validate_config};

/// Configuration structure for the client and CLI.
/// Handles loading, saving, and managing settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the community Helldivers 2 API.
    #[serde(default = "default_community_url")]
    pub community_url: String,
    /// Base URL of the Diveharder API.
    #[serde(default = "default_diveharder_url")]
    pub diveharder_url: String,
    /// Client identity sent as `User-Agent` and `X-Super-Client`.
    #[serde(default = "constants::default_user_agent")]
    pub user_agent: String,
    /// Contact sent as `X-Super-Contact` (e-mail, Discord handle, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_contact: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_community_url() -> String {
    constants::OFFICIAL_COMMUNITY_URL.to_string()
}

fn default_diveharder_url() -> String {
    constants::OFFICIAL_DIVEHARDER_URL.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            community_url: default_community_url(),
            diveharder_url: default_diveharder_url(),
            user_agent: constants::default_user_agent(),
            user_contact: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to the official endpoints when no config file exists.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `DIVEHARDER_COMMUNITY_URL` - Override community API base URL
    /// - `DIVEHARDER_URL` - Override Diveharder API base URL
    /// - `DIVEHARDER_USER_AGENT` - Override client identity
    /// - `DIVEHARDER_USER_CONTACT` - Override contact header
    /// - `DIVEHARDER_LOG_FILE` - Override log file path
    /// - `DIVEHARDER_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `DIVEHARDER_*` environment variables on top of the current values.
    /// Unparseable timeouts are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(env_vars::COMMUNITY_URL) {
            self.community_url = url;
        }

        if let Ok(url) = std::env::var(env_vars::DIVEHARDER_URL) {
            self.diveharder_url = url;
        }

        if let Ok(user_agent) = std::env::var(env_vars::USER_AGENT) {
            self.user_agent = user_agent;
        }

        if let Ok(contact) = std::env::var(env_vars::USER_CONTACT) {
            self.user_contact = Some(contact);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let exists = Path::new(&config_path).exists();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !exists {
            println!("(Not created yet, showing defaults)");
        }
        println!("────────────────────────────────────");
        println!("Community API:");
        println!("{}", config.community_url);
        println!("────────────────────────────────────");
        println!("Diveharder API:");
        println!("{}", config.diveharder_url);
        println!("────────────────────────────────────");
        println!("Client:");
        println!("{}", config.user_agent);
        if let Some(contact) = &config.user_contact {
            println!("Contact: {contact}");
        }
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and normalizes both
    /// base URLs (scheme added when missing, trailing slashes removed).
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            community_url: normalize_base_url(&self.community_url),
            diveharder_url: normalize_base_url(&self.diveharder_url),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            for var in [
                env_vars::COMMUNITY_URL,
                env_vars::DIVEHARDER_URL,
                env_vars::USER_AGENT,
                env_vars::USER_CONTACT,
                env_vars::LOG_FILE,
                env_vars::HTTP_TIMEOUT,
            ] {
                std::env::remove_var(var);
            }
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
community_url = "https://community.example.com"
diveharder_url = "https://diveharder.example.com"
user_agent = "TestAgent/1.0"
user_contact = "dev@example.com"
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.community_url, "https://community.example.com");
        assert_eq!(config.diveharder_url, "https://diveharder.example.com");
        assert_eq!(config.user_agent, "TestAgent/1.0");
        assert_eq!(config.user_contact.as_deref(), Some("dev@example.com"));
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.http_timeout_seconds, DEFAULT_TIMEOUT);
    }

    const DEFAULT_TIMEOUT: u64 = constants::DEFAULT_HTTP_TIMEOUT_SECONDS;

    #[tokio::test]
    async fn test_config_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("empty.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.community_url, constants::OFFICIAL_COMMUNITY_URL);
        assert_eq!(config.diveharder_url, constants::OFFICIAL_DIVEHARDER_URL);
        assert!(config.user_agent.starts_with("DiveHarderAPIWrapper/"));
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config = Config {
            user_contact: Some("someone@example.com".to_string()),
            log_file_path: Some("/tmp/diveharder.log".to_string()),
            http_timeout_seconds: 12,
            ..Config::default()
        };

        config.save_to_path(&config_path_str).await.unwrap();
        let loaded = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_config_save_normalizes_urls() {
        let test_cases = vec![
            ("api.example.com", "https://api.example.com"),
            ("https://api.example.com/", "https://api.example.com"),
            ("http://localhost:9090", "http://localhost:9090"),
            ("localhost:9090//", "https://localhost:9090"),
        ];

        for (input, expected) in test_cases {
            let temp_dir = tempdir().unwrap();
            let config_path = temp_dir.path().join("test_config.toml");
            let config_path_str = config_path.to_string_lossy();

            let config = Config {
                community_url: input.to_string(),
                diveharder_url: input.to_string(),
                ..Config::default()
            };
            config.save_to_path(&config_path_str).await.unwrap();

            let loaded = Config::load_from_path(&config_path_str).await.unwrap();
            assert_eq!(loaded.community_url, expected, "input '{input}'");
            assert_eq!(loaded.diveharder_url, expected, "input '{input}'");
        }
    }

    #[tokio::test]
    async fn test_config_save_creates_nested_directories() {
        let temp_dir = tempdir().unwrap();
        let nested_path = temp_dir
            .path()
            .join("level1")
            .join("level2")
            .join("config.toml");

        Config::default()
            .save_to_path(&nested_path.to_string_lossy())
            .await
            .unwrap();

        assert!(nested_path.exists());
    }

    #[tokio::test]
    async fn test_config_without_optional_fields_serialization() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();

        assert!(!toml_string.contains("user_contact"));
        assert!(!toml_string.contains("log_file_path"));
        assert!(toml_string.contains("community_url"));
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("malformed.toml");
        tokio::fs::write(&config_path, "community_url = [not valid")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/diveharder/config.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[tokio::test]
    async fn test_config_with_extra_fields() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("extra.toml");
        let content = r#"
community_url = "https://api.example.com"
api_domain = "left over from something else"
"#;
        tokio::fs::write(&config_path, content).await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config.community_url, "https://api.example.com");
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::COMMUNITY_URL, "https://env-community.example.com");
            std::env::set_var(env_vars::DIVEHARDER_URL, "https://env-diveharder.example.com");
            std::env::set_var(env_vars::USER_CONTACT, "env@example.com");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "7");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.community_url, "https://env-community.example.com");
        assert_eq!(config.diveharder_url, "https://env-diveharder.example.com");
        assert_eq!(config.user_contact.as_deref(), Some("env@example.com"));
        assert_eq!(config.http_timeout_seconds, 7);
        assert_eq!(config.log_file_path, None);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_environment_invalid_timeout_is_ignored() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT, "soon");
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.http_timeout_seconds, DEFAULT_TIMEOUT);

        clear_env();
    }
}
