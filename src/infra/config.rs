use std::net::{Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;

use crate::{domain::entities::email_provider::EmailProvider, infra::error::InfraError};

pub const DEFAULT_FROM_EMAIL: &str = "Konecbo <noreply@konecbo.com>";
pub const DEFAULT_LOG_ONLY_ADMIN_EMAIL: &str = "admin@example.com";

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Absent means the service runs without a waitlist store.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub email: EmailConfig,
}

/// Raw email settings. Which of them are required depends on the provider;
/// `infra::email_provider` checks that when building the sender.
#[derive(Default)]
pub struct EmailConfig {
    pub provider: EmailProvider,
    pub from_email: Option<String>,
    pub admin_email: Option<String>,
    pub resend_api_key: Option<SecretString>,
    pub smtp: SmtpConfig,
}

#[derive(Default)]
pub struct SmtpConfig {
    pub host: Option<String>,
    /// Kept as text so a malformed value is reported by the provider check.
    pub port: Option<String>,
    pub user: Option<String>,
    pub password: Option<SecretString>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from((Ipv4Addr::LOCALHOST, 3001)),
        );
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .map_err(|_| InfraError::InvalidConfig {
                    var: "CORS_ORIGIN",
                    reason: "must be a valid header value".into(),
                })?;
        let database_url = optional_env("DATABASE_URL");
        let database_max_connections: u32 = get_env_default("DATABASE_MAX_CONNECTIONS", 5);

        Ok(Self {
            bind_addr,
            cors_origin,
            database_url,
            database_max_connections,
            email: EmailConfig::from_env(),
        })
    }
}

impl EmailConfig {
    pub fn from_env() -> Self {
        Self {
            provider: EmailProvider::from_config(optional_env("EMAIL_PROVIDER").as_deref()),
            from_email: optional_env("FROM_EMAIL"),
            admin_email: optional_env("ADMIN_EMAIL"),
            resend_api_key: optional_env("RESEND_API_KEY").map(|k| SecretString::new(k.into())),
            smtp: SmtpConfig {
                host: optional_env("SMTP_HOST"),
                port: optional_env("SMTP_PORT"),
                user: optional_env("SMTP_USER"),
                password: optional_env("SMTP_PASSWORD").map(|p| SecretString::new(p.into())),
            },
        }
    }

    /// Sender address, defaulting to the Konecbo no-reply mailbox.
    pub fn sender(&self) -> String {
        self.from_email
            .clone()
            .unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string())
    }

    /// Where admin notifications go: `ADMIN_EMAIL`, else `FROM_EMAIL`.
    pub fn admin_recipient(&self) -> Option<String> {
        self.admin_email.clone().or_else(|| self.from_email.clone())
    }
}

/// Reads a variable, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
