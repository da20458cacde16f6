//! API server configuration.

use serde::Deserialize;

/// Which vendor adapter backs the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Gemini,
    #[default]
    #[serde(alias = "openrouter")]
    OpenRouter,
}

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Vendor behind the `TextGenerator` boundary (PSYCHE_PROVIDER env var).
    #[serde(default)]
    pub provider: ProviderKind,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl ApiConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(port) = std::env::var("PSYCHE_PORT")
            && let Ok(port) = port.parse()
        {
            config.port = port;
        }
        if let Ok(provider) = std::env::var("PSYCHE_PROVIDER") {
            match provider.to_lowercase().as_str() {
                "gemini" => config.provider = ProviderKind::Gemini,
                "openrouter" | "open_router" => config.provider = ProviderKind::OpenRouter,
                other => {
                    tracing::warn!(provider = other, "unknown PSYCHE_PROVIDER, using default");
                }
            }
        }
        config
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            provider: ProviderKind::default(),
        }
    }
}
