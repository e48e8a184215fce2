use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LogLevel, LoggingConfig,
    ServerConfig,
};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

const CONFIG_DIR_VAR: &str = "FOLIO_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".folio";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load the configuration: `config.toml` under the config dir when
    /// present, defaults otherwise, then `FOLIO_*` env overrides on top.
    ///
    /// Loading never validates; call `validate()` afterwards so every
    /// problem is reported from one place at startup.
    pub fn load() -> ConfigErrorResult<Self> {
        let dir = Self::config_dir()?;
        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|e| ConfigError::Io {
                path: dir.clone(),
                source: e,
            })?;
        }

        let file = dir.join(CONFIG_FILE_NAME);
        let mut config = if file.exists() {
            Self::from_toml_file(&file)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn from_toml_file(path: &Path) -> ConfigErrorResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&text).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// `$FOLIO_CONFIG_DIR` when set, `./.folio` otherwise.
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_VAR) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::load("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate every section. Run once at startup, before the server
    /// binds.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()
    }

    /// Absolute path of the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Startup summary. Secrets are reported as set or unset, never
    /// printed.
    pub fn log_summary(&self) {
        info!("Configuration:");
        info!("  listen on {}", self.bind_addr());
        info!("  database file {}", self.database.path);
        info!(
            "  jwt secret {}, session ttl {}s",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "NOT SET"
            },
            self.auth.token_ttl_secs
        );
        info!(
            "  easy auth base {}",
            self.auth.easy_auth_base_url.as_deref().unwrap_or("(none)")
        );
        info!(
            "  log level {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        if let Some(host) = env_var("FOLIO_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_var("FOLIO_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Some(secret) = env_var("FOLIO_JWT_SECRET") {
            self.auth.jwt_secret = Some(secret);
        }
        if let Some(base) = env_var("FOLIO_EASY_AUTH_BASE") {
            self.auth.easy_auth_base_url = Some(base);
        }
        if let Some(level) = env_var("FOLIO_LOG_LEVEL").and_then(|v| LogLevel::from_str(&v).ok()) {
            self.logging.level = level;
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
