use crate::error::NotifyError;

/// Service configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// Listen address, e.g. "0.0.0.0:8787".
    pub bind_addr: String,
    /// Email provider endpoint the dispatcher POSTs to.
    pub email_api_url: String,
    /// Bearer token for the email provider.
    pub email_api_key: String,
    /// From address on outgoing mail.
    pub from_address: String,
}

impl NotifyConfig {
    pub fn from_env() -> Result<NotifyConfig, NotifyError> {
        Ok(NotifyConfig {
            bind_addr: std::env::var("CHEMRISK_NOTIFY_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8787".to_string()),
            email_api_url: std::env::var("CHEMRISK_EMAIL_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com/emails".to_string()),
            email_api_key: std::env::var("CHEMRISK_EMAIL_API_KEY")
                .map_err(|_| NotifyError::MissingEnv("CHEMRISK_EMAIL_API_KEY"))?,
            from_address: std::env::var("CHEMRISK_EMAIL_FROM")
                .unwrap_or_else(|_| "ChemRisk AI <notifications@chemrisk.app>".to_string()),
        })
    }
}
