use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the serialized classifier, relative to the working directory.
    pub model_path: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            model_path: std::env::var("MODEL_PATH")
                .unwrap_or_else(|_| "model.onnx".to_string())
                .trim()
                .to_string(),
            // Local interactive surface; only bind wider when explicitly asked.
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
        };

        if config.model_path.is_empty() {
            anyhow::bail!("MODEL_PATH cannot be empty");
        }
        if config.host.trim().is_empty() {
            anyhow::bail!("HOST cannot be empty");
        }

        // Log successful configuration load
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Model path: {}", config.model_path);
        tracing::debug!("Bind address: {}:{}", config.host, config.port);

        Ok(config)
    }
}
