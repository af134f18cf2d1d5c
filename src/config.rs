use std::env;

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let catalog_url =
            env::var("CATALOG_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        if catalog_url.trim().is_empty() {
            anyhow::bail!("CATALOG_URL must not be empty");
        }
        Ok(Self {
            catalog_url,
            host,
            port,
        })
    }
}
