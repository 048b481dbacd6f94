use crate::config::NotifyConfig;
use crate::error::NotifyError;
use crate::templates::EmailMessage;
use async_trait::async_trait;
use serde::Serialize;

/// Delivery seam: the service renders templates, the sender talks to the
/// external email provider.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, message: &EmailMessage) -> Result<(), NotifyError>;
}

/// Sender backed by an HTTP email provider (Resend-style JSON API).
pub struct HttpEmailSender {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from_address: String,
}

#[derive(Serialize)]
struct DeliveryRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

impl HttpEmailSender {
    pub fn new(config: &NotifyConfig) -> HttpEmailSender {
        HttpEmailSender {
            client: reqwest::Client::new(),
            api_url: config.email_api_url.clone(),
            api_key: config.email_api_key.clone(),
            from_address: config.from_address.clone(),
        }
    }
}

#[async_trait]
impl EmailSender for HttpEmailSender {
    async fn send(&self, to: &str, message: &EmailMessage) -> Result<(), NotifyError> {
        let payload = DeliveryRequest {
            from: &self.from_address,
            to,
            subject: &message.subject,
            html: &message.html,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        response
            .error_for_status()
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        Ok(())
    }
}
