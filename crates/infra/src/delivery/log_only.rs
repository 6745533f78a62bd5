use tracing::warn;

use super::{DeliveryProvider, OutboundMessage, ProviderResponse, TransportError};

/// Provider used when no mail service is configured: logs each message and
/// keeps nothing.
///
/// Answers 202 so a run completes, but no message leaves the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOnlyProvider;

impl LogOnlyProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl DeliveryProvider for LogOnlyProvider {
    fn name(&self) -> &'static str {
        "log-only"
    }

    async fn send(&self, message: &OutboundMessage) -> Result<ProviderResponse, TransportError> {
        warn!(
            to = %message.to,
            subject = %message.subject,
            body_len = message.body.len(),
            "no delivery provider configured; quote request logged, not sent"
        );
        Ok(ProviderResponse::new(202, ""))
    }
}
