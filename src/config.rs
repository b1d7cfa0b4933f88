use crate::error::{BadEnvVarSnafu, RegistroResult};
use dotenvy::var;
use snafu::ResultExt;
use sqlx::sqlite::SqliteConnectOptions;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
}

impl RuntimeConfiguration {
    pub fn new() -> RegistroResult<Self> {
        Ok(Self {
            db_config: Arc::new(DbConfig::new()?),
        })
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }
}

#[derive(Debug)]
pub struct DbConfig {
    path: String,
}

impl DbConfig {
    pub fn new() -> RegistroResult<Self> {
        let get_env_var = |name| var(name).context(BadEnvVarSnafu { name });

        Ok(Self {
            path: get_env_var("DATABASE_PATH")?,
        })
    }

    pub fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
    }
}
