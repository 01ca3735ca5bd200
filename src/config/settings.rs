//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    pub jwt_expiration_hours: i64,
    /// Allowed CORS origin for the web client, if any
    pub frontend_origin: Option<String>,
    /// Webhook receiving status-change notifications; notifications are a
    /// no-op when unset
    pub notif_webhook_url: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("frontend_origin", &self.frontend_origin)
            .field("notif_webhook_url", &self.notif_webhook_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if JWT_SECRET is not set or is too short (security requirement).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                // Development mode: use default but warn
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            } else {
                // Production mode: panic
                panic!("JWT_SECRET environment variable must be set in production");
            }
        });

        // Validate JWT secret length
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            panic!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            );
        }

        Self {
            database_url: database_url_from_env(),
            jwt_secret,
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
            frontend_origin: env::var("FRONTEND_ORIGIN").ok(),
            notif_webhook_url: env::var("NOTIF_WEBHOOK_URL").ok(),
        }
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

/// Build the connection URL from DB_* parts, with DATABASE_URL as an override.
fn database_url_from_env() -> String {
    if let Ok(url) = env::var("DATABASE_URL") {
        return url;
    }

    match (
        env::var("DB_HOST"),
        env::var("DB_USER"),
        env::var("DB_DATABASE"),
    ) {
        (Ok(host), Ok(user), Ok(database)) => {
            let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
            let password = env::var("DB_PASSWORD").unwrap_or_default();
            format!("postgres://{user}:{password}@{host}:{port}/{database}")
        }
        _ => DEFAULT_DATABASE_URL.to_string(),
    }
}
