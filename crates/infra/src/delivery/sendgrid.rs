use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

use super::{DeliveryProvider, OutboundMessage, ProviderResponse, TransportError};

pub const DEFAULT_ENDPOINT: &str = "https://api.sendgrid.com/v3/mail/send";

/// SendGrid v3 mail-send client (plain-text content, one recipient).
#[derive(Clone)]
pub struct SendGridProvider {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for SendGridProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendGridProvider")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl SendGridProvider {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn payload(message: &OutboundMessage) -> serde_json::Value {
        json!({
            "personalizations": [
                { "to": [ { "email": message.to } ] }
            ],
            "from": {
                "email": message.from.email,
                "name": message.from.name,
            },
            "subject": message.subject,
            "content": [
                { "type": "text/plain", "value": message.body }
            ],
        })
    }
}

#[async_trait::async_trait]
impl DeliveryProvider for SendGridProvider {
    fn name(&self) -> &'static str {
        "sendgrid"
    }

    async fn send(&self, message: &OutboundMessage) -> Result<ProviderResponse, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&Self::payload(message))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            debug!(to = %message.to, status = status.as_u16(), "sendgrid accepted message");
        } else {
            warn!(to = %message.to, status = status.as_u16(), body = %body, "sendgrid refused message");
        }

        Ok(ProviderResponse::new(status.as_u16(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::Sender;

    fn message() -> OutboundMessage {
        OutboundMessage {
            from: Sender::new("stock@pharmacy.example", "Pharmacy"),
            to: "orders@acme.com".to_string(),
            subject: "Restocking quote request".to_string(),
            body: "Hello Acme,\n\n...".to_string(),
        }
    }

    #[test]
    fn payload_matches_mail_send_shape() {
        let payload = SendGridProvider::payload(&message());
        assert_eq!(
            payload,
            json!({
                "personalizations": [{ "to": [{ "email": "orders@acme.com" }] }],
                "from": { "email": "stock@pharmacy.example", "name": "Pharmacy" },
                "subject": "Restocking quote request",
                "content": [{ "type": "text/plain", "value": "Hello Acme,\n\n..." }],
            })
        );
    }

    #[test]
    fn debug_redacts_api_key() {
        let provider =
            SendGridProvider::new("SG.secret", DEFAULT_ENDPOINT, Duration::from_secs(5)).unwrap();
        let rendered = format!("{provider:?}");
        assert!(!rendered.contains("SG.secret"));
        assert!(rendered.contains("<redacted>"));
        assert_eq!(provider.endpoint(), DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        // Port 9 on loopback: nothing listens there in CI.
        let provider = SendGridProvider::new(
            "SG.key",
            "http://127.0.0.1:9/v3/mail/send",
            Duration::from_secs(2),
        )
        .unwrap();

        let err = provider.send(&message()).await.unwrap_err();
        assert!(matches!(err, TransportError::Http(_)));
    }
}
