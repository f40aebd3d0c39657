use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub users_file: PathBuf,
    pub products_file: PathBuf,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .set_default("app_host", "127.0.0.1")?
        .set_default("app_port", 3030)?
        .set_default("storage.users_file", "users.json")?
        .set_default("storage.products_file", "product.json")?
        // configuration.yaml next to the binary is optional
        .add_source(config::File::with_name("configuration").required(false))
        // STOREFRONT_APP_PORT=8080, STOREFRONT_STORAGE__USERS_FILE=/data/users.json
        .add_source(
            config::Environment::with_prefix("STOREFRONT")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}
