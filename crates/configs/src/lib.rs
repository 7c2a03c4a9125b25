use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

/// Business-policy knobs consumed by the service crate.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Patch semantics for restaurant updates:
    /// `"patch_provided"` (default) or `"overwrite_populated"` (legacy).
    #[serde(default = "default_update_policy")]
    pub update_policy: String,
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_update_policy() -> String { "patch_provided".to_string() }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { update_policy: default_update_policy() }
    }
}

/// Load from `CONFIG_PATH` (falls back to `config.toml`).
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.database.normalize_from_env();
        self.database.validate()?;
        self.service.validate()?;
        Ok(())
    }
}

impl DatabaseConfig {
    /// Build a config purely from the environment (used by tests and tools
    /// that run without a config file).
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        cfg.normalize_from_env();
        cfg
    }

    /// Fill the URL from `DATABASE_URL` when the file left it empty.
    pub fn normalize_from_env(&mut self) {
        if self.url.is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(anyhow!("database.url is empty and DATABASE_URL is not set"));
        }
        if self.max_connections == 0 {
            return Err(anyhow!("database.max_connections must be > 0"));
        }
        if self.min_connections > self.max_connections {
            return Err(anyhow!("database.min_connections exceeds max_connections"));
        }
        Ok(())
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        match self.update_policy.as_str() {
            "patch_provided" | "overwrite_populated" => Ok(()),
            other => Err(anyhow!("unknown service.update_policy: {}", other)),
        }
    }
}
