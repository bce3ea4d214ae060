use serde::Deserialize;
use std::env;
use std::path::PathBuf;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub features: FeatureFlags,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub static_dir: PathBuf,
}

// Where per-event ticket files live
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    pub hydrate_from_disk: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "event_tickets=debug,tower_http=debug".to_string()),
                static_dir: env::var("STATIC_DIR")
                    .unwrap_or_else(|_| "static".to_string())
                    .into(),
            },
            storage: StorageConfig {
                data_dir: env::var("DATA_DIR")
                    .unwrap_or_else(|_| "events".to_string())
                    .into(),
            },
            features: FeatureFlags {
                hydrate_from_disk: env::var("HYDRATE_FROM_DISK")
                    .unwrap_or_else(|_| "false".to_string())
                    .parse()
                    .expect("HYDRATE_FROM_DISK must be true or false"),
            },
        }
    }
}
