use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub webhooks: WebhookConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let include_targets = env::var("APP_LOG_TARGETS")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let webhooks = WebhookConfig {
            chat_endpoint: webhook_from_env("N8N_CHAT_WEBHOOK")?,
            form_endpoint: webhook_from_env("N8N_FORM_WEBHOOK")?,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                include_targets,
            },
            webhooks,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub include_targets: bool,
}

/// Outbound endpoints for the chat advisor and the assessment report pipeline.
///
/// Either may be absent; callers fall back to demo behavior instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookConfig {
    pub chat_endpoint: Option<String>,
    pub form_endpoint: Option<String>,
}

impl WebhookConfig {
    pub fn demo_mode(&self) -> bool {
        self.chat_endpoint.is_none() && self.form_endpoint.is_none()
    }
}

fn webhook_from_env(key: &'static str) -> Result<Option<String>, ConfigError> {
    let raw = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(None),
    };
    parse_webhook(key, &raw)
}

/// Blank values and the literal `undefined` left behind by frontend builds count as unset.
pub(crate) fn parse_webhook(key: &'static str, raw: &str) -> Result<Option<String>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "undefined" {
        return Ok(None);
    }

    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(ConfigError::InvalidWebhook {
            key,
            value: trimmed.to_string(),
        });
    }

    Ok(Some(trimmed.to_string()))
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidWebhook {
        key: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidWebhook { key, value } => {
                write!(f, "{key} must be an http(s) URL, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidWebhook { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
