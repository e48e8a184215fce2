use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file, relative to the config directory.
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}

impl DatabaseConfig {
    /// The database file must stay inside the config directory.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.path).is_absolute() {
            return Err(ConfigError::database(
                "database.path must be relative to the config directory",
            ));
        }
        if self.path.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(ConfigError::database("database.path cannot contain '..'"));
        }

        Ok(())
    }
}
