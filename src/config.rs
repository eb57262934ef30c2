use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

/// Process-wide configuration, read once from defaults and `CMS_*` env vars.
///
/// Nested keys use `__`, e.g. `CMS_STORAGE__UPLOAD_DIR=/srv/uploads`.
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| {
        eprintln!("invalid configuration, falling back to defaults: {e}");
        Config::default()
    })
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub basic: BasicConfig,
    pub storage: StorageConfig,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("CMS_").split("__"))
            .extract()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// API only; frontend assets come from the external dev server.
    Development,
    /// API plus the built frontend from `storage.static_dir`.
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    pub listen_port: u16,
    pub loglevel: String,
    pub mode: Mode,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_port: 5000,
            loglevel: "info".to_string(),
            mode: Mode::Development,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub database_url: String,
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
    pub io_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:data/cms.sqlite".to_string(),
            upload_dir: PathBuf::from("public/uploads"),
            static_dir: PathBuf::from("dist/public"),
            io_timeout_secs: 30,
            max_upload_bytes: 50 * 1024 * 1024,
        }
    }
}

impl StorageConfig {
    pub fn io_timeout(&self) -> Duration {
        Duration::from_secs(self.io_timeout_secs)
    }
}
