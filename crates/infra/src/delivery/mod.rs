//! Outbound message delivery.
//!
//! A [`DeliveryProvider`] hands one fully-rendered message to an external
//! mail service and reports what the service answered. Interpreting that
//! answer (delivered vs rejected) is left to the dispatch gateway.

pub mod log_only;
pub mod recording;
pub mod sendgrid;

pub use log_only::LogOnlyProvider;
pub use recording::{RecordingProvider, ScriptedReply};
pub use sendgrid::SendGridProvider;

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

/// The address messages are sent from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sender {
    pub email: String,
    pub name: String,
}

impl Sender {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}

/// A message ready to hand to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub from: Sender,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// What the provider answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: String,
}

impl ProviderResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Any 2xx counts as accepted.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The provider could not be reached, or no response was read.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider unreachable: {0}")]
    Unreachable(String),
}

#[async_trait::async_trait]
pub trait DeliveryProvider: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &'static str;

    /// Submit one message. `Ok` means the provider answered, whatever the
    /// status; `Err` means it never did.
    async fn send(&self, message: &OutboundMessage) -> Result<ProviderResponse, TransportError>;
}

#[async_trait::async_trait]
impl<P> DeliveryProvider for Arc<P>
where
    P: DeliveryProvider + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn send(&self, message: &OutboundMessage) -> Result<ProviderResponse, TransportError> {
        (**self).send(message).await
    }
}
