use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub base_url: String,
    pub business_name: String,
    pub storage_backend: String,
    pub bookings_file: String,
    pub database_url: String,
    pub admin_username: String,
    pub admin_password: String,
    pub admin_phone: String,
    pub notify_webhook_url: Option<String>,
    pub notify_timeout_secs: u64,
    pub session_ttl_hours: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        Self {
            port,
            base_url: env::var("BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| format!("http://localhost:{port}")),
            business_name: env::var("BUSINESS_NAME").unwrap_or_else(|_| "NailsByOle".to_string()),
            storage_backend: env::var("STORAGE_BACKEND").unwrap_or_else(|_| "json".to_string()),
            bookings_file: env::var("BOOKINGS_FILE")
                .unwrap_or_else(|_| "bookings.json".to_string()),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "bookings.db".to_string()),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "changeme".to_string()),
            admin_phone: env::var("ADMIN_PHONE").unwrap_or_else(|_| "+27 69 840 4354".to_string()),
            notify_webhook_url: env::var("NOTIFY_WEBHOOK_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            notify_timeout_secs: env::var("NOTIFY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            session_ttl_hours: env::var("SESSION_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(12),
        }
    }
}
