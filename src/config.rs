use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use stockdash::api::DEFAULT_TICKER;
use stockdash::services::default_data_path;

const DEFAULT_PORT: u16 = 8501;

// YAML-serializable configuration structure
#[derive(Serialize, Deserialize, Debug)]
pub struct ConfigYaml {
    pub node_name: Option<String>,
    pub data_file: Option<PathBuf>,
    pub ticker: Option<String>,
    pub environment: Option<String>,
    pub port: Option<u16>,
}

// Holds application-wide settings
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub node_name: String,
    pub data_file: PathBuf,
    pub ticker: String,
    pub environment: String,
    pub port: u16,
}

impl AppConfig {
    // Load configuration from YAML file or environment variables
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(config_file) = env::var("CONFIG_FILE") {
            Self::from_yaml(&config_file)
        } else {
            Self::from_env()
        }
    }

    pub fn from_yaml(file_path: &str) -> anyhow::Result<Self> {
        let yaml_content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read config file {}", file_path))?;
        Self::from_yaml_str(&yaml_content)
    }

    pub fn from_yaml_str(yaml_content: &str) -> anyhow::Result<Self> {
        let yaml_config: ConfigYaml =
            serde_yaml::from_str(yaml_content).context("Failed to parse YAML config")?;

        Ok(Self {
            node_name: yaml_config
                .node_name
                .unwrap_or_else(|| "stock-dashboard".to_string()),
            data_file: yaml_config.data_file.unwrap_or_else(default_data_path),
            ticker: yaml_config.ticker.unwrap_or_else(|| DEFAULT_TICKER.to_string()),
            environment: yaml_config
                .environment
                .unwrap_or_else(|| "development".to_string()),
            port: yaml_config.port.unwrap_or(DEFAULT_PORT),
        })
    }

    // Load all configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{}'", value))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            node_name: env::var("NODE_NAME").unwrap_or_else(|_| "stock-dashboard".to_string()),
            data_file: env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_path()),
            ticker: env::var("TICKER").unwrap_or_else(|_| DEFAULT_TICKER.to_string()),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_with_all_fields() {
        let config = AppConfig::from_yaml_str(
            "node_name: dash-1\ndata_file: /data/googl.csv\nticker: GOOG\nenvironment: production\nport: 9000\n",
        )
        .unwrap();
        assert_eq!(config.node_name, "dash-1");
        assert_eq!(config.data_file, PathBuf::from("/data/googl.csv"));
        assert_eq!(config.ticker, "GOOG");
        assert_eq!(config.environment, "production");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_yaml_defaults() {
        let config = AppConfig::from_yaml_str("port: 8080\n").unwrap();
        assert_eq!(config.node_name, "stock-dashboard");
        assert_eq!(config.ticker, DEFAULT_TICKER);
        assert_eq!(config.port, 8080);
        assert!(config.data_file.ends_with("dados_tratados.csv"));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml_str("port: not-a-number\n").is_err());
    }
}
