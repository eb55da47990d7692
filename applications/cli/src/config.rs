/// CLI configuration
use crate::error::{CliError, Result};
use playlister_client::StoreConfig;
use playlister_core::ActingUser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "playlister.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub service: ServiceSettings,

    #[serde(default)]
    pub user: UserSettings,

    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceSettings {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserSettings {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSettings {
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default file is optional.
    /// `PLAYLISTER_SECTION__KEY` variables override file values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("PLAYLISTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Ok(settings.build()?.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.service.url.trim().is_empty() {
            return Err(CliError::Config(
                "Store URL is required (set PLAYLISTER_SERVICE__URL)".to_string(),
            ));
        }

        if self.user.username.trim().is_empty() {
            return Err(CliError::Config(
                "Username is required (set PLAYLISTER_USER__USERNAME)".to_string(),
            ));
        }

        if self.user.email.trim().is_empty() {
            return Err(CliError::Config(
                "User email is required (set PLAYLISTER_USER__EMAIL)".to_string(),
            ));
        }

        Ok(())
    }

    /// The user edits are made on behalf of
    pub fn acting_user(&self) -> ActingUser {
        ActingUser::new(self.user.username.trim(), self.user.email.trim())
    }

    /// Connection settings for the store client
    pub fn store_config(&self) -> StoreConfig {
        match &self.service.access_token {
            Some(token) if !token.is_empty() => {
                StoreConfig::with_token(self.service.url.clone(), token.clone())
            }
            _ => StoreConfig::new(self.service.url.clone()),
        }
    }
}

fn default_url() -> String {
    "http://localhost:4000/store".to_string()
}

fn default_filter() -> String {
    "playlister=info".to_string()
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            access_token: None,
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}
