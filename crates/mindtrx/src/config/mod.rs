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
    pub delivery: DeliveryConfig,
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

        let public_url = env::var("MINDTRX_PUBLIC_URL")
            .unwrap_or_else(|_| DeliveryConfig::DEFAULT_PUBLIC_URL.to_string());
        let public_url = public_url.trim().trim_end_matches('/').to_string();
        if !(public_url.starts_with("http://") || public_url.starts_with("https://")) {
            return Err(ConfigError::InvalidPublicUrl { value: public_url });
        }

        let smtp = SmtpConfig::from_env()?;

        let from_address = non_empty_var("MINDTRX_MAIL_FROM")
            .or_else(|| non_empty_var("SMTP_FROM"))
            .or_else(|| non_empty_var("SMTP_USER"))
            .unwrap_or_else(|| DeliveryConfig::DEFAULT_FROM_ADDRESS.to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            delivery: DeliveryConfig {
                public_url,
                from_address,
                smtp,
            },
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Settings used when rendering and sending result emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// Base URL that result links point at, without a trailing slash.
    pub public_url: String,
    pub from_address: String,
    /// Relay used for result emails; `None` leaves delivery disabled.
    pub smtp: Option<SmtpConfig>,
}

impl DeliveryConfig {
    pub const DEFAULT_PUBLIC_URL: &'static str = "https://mindtrx.app";
    pub const DEFAULT_FROM_ADDRESS: &'static str = "results@mindtrx.app";
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            public_url: Self::DEFAULT_PUBLIC_URL.to_string(),
            from_address: Self::DEFAULT_FROM_ADDRESS.to_string(),
            smtp: None,
        }
    }
}

/// SMTP relay settings, read from `SMTP_HOST`, `SMTP_PORT`, `SMTP_USER`, and `SMTP_PASS`.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub credentials: Option<SmtpCredentials>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct SmtpCredentials {
    pub username: String,
    pub password: String,
}

impl SmtpConfig {
    pub const DEFAULT_PORT: u16 = 587;
    pub const IMPLICIT_TLS_PORT: u16 = 465;

    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(host) = non_empty_var("SMTP_HOST") else {
            return Ok(None);
        };

        let port = match non_empty_var("SMTP_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidSmtpPort { value: raw })?,
            None => Self::DEFAULT_PORT,
        };

        let credentials = match (non_empty_var("SMTP_USER"), env::var("SMTP_PASS").ok()) {
            (Some(username), Some(password)) => Some(SmtpCredentials { username, password }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteSmtpCredentials),
        };

        Ok(Some(Self {
            host,
            port,
            credentials,
        }))
    }

    /// Port 465 speaks TLS from the first byte; anything else upgrades with STARTTLS.
    pub fn implicit_tls(&self) -> bool {
        self.port == Self::IMPLICIT_TLS_PORT
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field(
                "username",
                &self.credentials.as_ref().map(|c| c.username.as_str()),
            )
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPublicUrl { value: String },
    InvalidSmtpPort { value: String },
    IncompleteSmtpCredentials,
    InvalidSmtpRelay { host: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidPublicUrl { value } => {
                write!(
                    f,
                    "MINDTRX_PUBLIC_URL must start with http:// or https:// (got '{value}')"
                )
            }
            ConfigError::InvalidSmtpPort { value } => {
                write!(f, "SMTP_PORT must be a valid u16 (got '{value}')")
            }
            ConfigError::IncompleteSmtpCredentials => {
                write!(f, "SMTP_USER and SMTP_PASS must be set together")
            }
            ConfigError::InvalidSmtpRelay { host, reason } => {
                write!(f, "SMTP_HOST '{host}' cannot be used as a relay: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort
            | ConfigError::InvalidPublicUrl { .. }
            | ConfigError::InvalidSmtpPort { .. }
            | ConfigError::IncompleteSmtpCredentials
            | ConfigError::InvalidSmtpRelay { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("MINDTRX_PUBLIC_URL");
        env::remove_var("MINDTRX_MAIL_FROM");
        for key in ["SMTP_HOST", "SMTP_PORT", "SMTP_USER", "SMTP_PASS", "SMTP_FROM"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.delivery, DeliveryConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "thirty");
        let err = AppConfig::load().expect_err("port must be numeric");
        assert!(matches!(err, ConfigError::InvalidPort));
        reset_env();
    }

    #[test]
    fn trims_trailing_slash_from_public_url() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MINDTRX_PUBLIC_URL", "https://staging.mindtrx.app/");
        env::set_var("APP_ENV", "prod");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.delivery.public_url, "https://staging.mindtrx.app");
        reset_env();
    }

    #[test]
    fn rejects_public_url_without_scheme() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MINDTRX_PUBLIC_URL", "mindtrx.app");
        let err = AppConfig::load().expect_err("scheme is required");
        assert!(matches!(err, ConfigError::InvalidPublicUrl { .. }));
        reset_env();
    }

    #[test]
    fn smtp_stays_disabled_without_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SMTP_USER", "mailer@mindtrx.app");
        env::set_var("SMTP_PASS", "hunter2");
        let config = AppConfig::load().expect("config loads");
        assert!(config.delivery.smtp.is_none());
        assert_eq!(config.delivery.from_address, "mailer@mindtrx.app");
        reset_env();
    }

    #[test]
    fn smtp_reads_relay_settings() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SMTP_HOST", "smtp.mindtrx.app");
        env::set_var("SMTP_USER", "mailer@mindtrx.app");
        env::set_var("SMTP_PASS", "hunter2");
        env::set_var("SMTP_FROM", "MINDTRX <results@mindtrx.app>");
        let config = AppConfig::load().expect("config loads");

        let smtp = config.delivery.smtp.expect("smtp configured");
        assert_eq!(smtp.host, "smtp.mindtrx.app");
        assert_eq!(smtp.port, SmtpConfig::DEFAULT_PORT);
        assert!(!smtp.implicit_tls());
        let credentials = smtp.credentials.as_ref().expect("credentials");
        assert_eq!(credentials.username, "mailer@mindtrx.app");
        assert!(!format!("{smtp:?}").contains("hunter2"));
        assert_eq!(config.delivery.from_address, "MINDTRX <results@mindtrx.app>");
        reset_env();
    }

    #[test]
    fn smtp_port_465_uses_implicit_tls() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SMTP_HOST", "smtp.mindtrx.app");
        env::set_var("SMTP_PORT", "465");
        let config = AppConfig::load().expect("config loads");
        let smtp = config.delivery.smtp.expect("smtp configured");
        assert!(smtp.implicit_tls());
        assert!(smtp.credentials.is_none());
        reset_env();
    }

    #[test]
    fn smtp_rejects_bad_port_and_half_credentials() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SMTP_HOST", "smtp.mindtrx.app");
        env::set_var("SMTP_PORT", "smtp");
        let err = AppConfig::load().expect_err("port must be numeric");
        assert!(matches!(err, ConfigError::InvalidSmtpPort { .. }));

        env::remove_var("SMTP_PORT");
        env::set_var("SMTP_USER", "mailer@mindtrx.app");
        let err = AppConfig::load().expect_err("password required with user");
        assert!(matches!(err, ConfigError::IncompleteSmtpCredentials));
        reset_env();
    }

    #[test]
    fn explicit_sender_wins_over_smtp_identity() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MINDTRX_MAIL_FROM", "hello@mindtrx.app");
        env::set_var("SMTP_FROM", "results@mindtrx.app");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.delivery.from_address, "hello@mindtrx.app");
        reset_env();
    }
}
