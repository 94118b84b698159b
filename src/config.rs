use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub admin_token: String,
    pub mailgun_domain: String,
    pub mailgun_api_key: String,
    pub mail_from: String,
    pub admin_email: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "clinique.db".to_string()),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            mailgun_domain: env::var("MAILGUN_DOMAIN").unwrap_or_default(),
            mailgun_api_key: env::var("MAILGUN_API_KEY").unwrap_or_default(),
            mail_from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "Clinique Ivoire Dentaire <no-reply@clinique-ivoire.ci>".to_string()),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "contact@clinique-ivoire.ci".to_string()),
        }
    }
}
