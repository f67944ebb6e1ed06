// src/config.rs
use crate::infrastructure::notification::EmailSettings;
use crate::presentation::http::extractors::ClientIpSource;
use std::env;
use thiserror::Error;

const ADMIN_TOKEN_MIN_LEN: usize = 16;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    client_ip_source: ClientIpSource,
    admin_api_token: Option<String>,
    notify_email_to: Option<String>,
    email_api_url: Option<String>,
    email_api_key: Option<String>,
    email_from: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn default_email_from() -> String {
    "Directory <no-reply@localhost>".into()
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the ones that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr = non_empty_var("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let allowed_origins = non_empty_var("ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);

        let client_ip_source = match non_empty_var("CLIENT_IP_SOURCE") {
            Some(raw) => ClientIpSource::parse(&raw).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "CLIENT_IP_SOURCE must be first-forwarded, last-forwarded or peer, got {raw}"
                ))
            })?,
            None => ClientIpSource::default(),
        };

        let admin_api_token = non_empty_var("ADMIN_API_TOKEN");
        if admin_api_token
            .as_ref()
            .is_some_and(|t| t.len() < ADMIN_TOKEN_MIN_LEN)
        {
            return Err(ConfigError::Invalid(format!(
                "ADMIN_API_TOKEN must be at least {ADMIN_TOKEN_MIN_LEN} characters"
            )));
        }

        let email_api_url = non_empty_var("EMAIL_API_URL");
        if email_api_url
            .as_ref()
            .is_some_and(|u| !(u.starts_with("http://") || u.starts_with("https://")))
        {
            return Err(ConfigError::Invalid(
                "EMAIL_API_URL must be an http(s) URL".into(),
            ));
        }
        let email_api_key = non_empty_var("EMAIL_API_KEY");
        if email_api_url.is_some() && email_api_key.is_none() {
            return Err(ConfigError::Missing("EMAIL_API_KEY"));
        }

        Ok(Self {
            listen_addr,
            allowed_origins,
            client_ip_source,
            admin_api_token,
            notify_email_to: non_empty_var("NOTIFY_EMAIL_TO"),
            email_api_url,
            email_api_key,
            email_from: non_empty_var("EMAIL_FROM").unwrap_or_else(default_email_from),
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn client_ip_source(&self) -> ClientIpSource {
        self.client_ip_source
    }

    pub fn admin_api_token(&self) -> Option<&str> {
        self.admin_api_token.as_deref()
    }

    /// Settings for the HTTP email notifier, when an API endpoint, key and
    /// recipient are all configured.
    pub fn email_settings(&self) -> Option<EmailSettings> {
        Some(EmailSettings {
            api_url: self.email_api_url.clone()?,
            api_key: self.email_api_key.clone()?,
            from: self.email_from.clone(),
            to: self.notify_email_to.clone()?,
        })
    }
}
