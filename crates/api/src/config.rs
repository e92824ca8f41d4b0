use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Transactional email API settings for the contact form.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub api_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Credentials of the admin account created on first start.
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Seconds to wait for in-flight requests after a shutdown signal (default: `30`).
    pub shutdown_timeout_secs: u64,
    pub jwt: JwtConfig,
    /// Root directory for uploaded media (default: `./uploads`).
    pub upload_dir: PathBuf,
    /// Prefix for public media URLs (default: empty, i.e. same origin).
    pub public_base_url: String,
    /// Built static site served for page routes (default: `./site`).
    pub site_dir: PathBuf,
    pub email: EmailConfig,
    pub admin_bootstrap: Option<AdminBootstrap>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                          |
    /// |-------------------------|--------------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                        |
    /// | `PORT`                  | `3000`                                           |
    /// | `CORS_ORIGINS`          | `http://localhost:3000`                          |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                             |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                                             |
    /// | `UPLOAD_DIR`            | `./uploads`                                      |
    /// | `PUBLIC_BASE_URL`       | (empty)                                          |
    /// | `SITE_DIR`              | `./site`                                         |
    /// | `EMAILJS_API_URL`       | `https://api.emailjs.com/api/v1.0/email/send`    |
    /// | `EMAILJS_SERVICE_ID`    | `YOUR_SERVICE_ID`                                |
    /// | `EMAILJS_TEMPLATE_ID`   | `YOUR_TEMPLATE_ID`                               |
    /// | `EMAILJS_PUBLIC_KEY`    | `YOUR_PUBLIC_KEY`                                |
    /// | `ADMIN_EMAIL`           | unset (no bootstrap)                             |
    /// | `ADMIN_PASSWORD`        | unset (no bootstrap)                             |
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = env_or("SHUTDOWN_TIMEOUT_SECS", "30")
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let email = EmailConfig {
            api_url: env_or("EMAILJS_API_URL", "https://api.emailjs.com/api/v1.0/email/send"),
            service_id: env_or("EMAILJS_SERVICE_ID", "YOUR_SERVICE_ID"),
            template_id: env_or("EMAILJS_TEMPLATE_ID", "YOUR_TEMPLATE_ID"),
            public_key: env_or("EMAILJS_PUBLIC_KEY", "YOUR_PUBLIC_KEY"),
        };

        let admin_bootstrap = match (std::env::var("ADMIN_EMAIL"), std::env::var("ADMIN_PASSWORD")) {
            (Ok(email), Ok(password)) if !email.trim().is_empty() => Some(AdminBootstrap {
                email: email.trim().to_string(),
                password,
            }),
            _ => None,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            jwt: JwtConfig::from_env(),
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "./uploads")),
            public_base_url: env_or("PUBLIC_BASE_URL", "")
                .trim_end_matches('/')
                .to_string(),
            site_dir: PathBuf::from(env_or("SITE_DIR", "./site")),
            email,
            admin_bootstrap,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}
