//! Dispatch gateway: one send, one classified outcome.

use thiserror::Error;
use tracing::{error, info};

use restock_parties::ContactAddress;

use crate::delivery::{DeliveryProvider, OutboundMessage, Sender, TransportError};

/// Result of one delivery attempt.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The provider accepted the message (2xx).
    Delivered { status: u16 },
    /// The provider answered with a non-2xx status.
    Rejected { status: u16, message: String },
    /// No response was obtained.
    TransportFailure(TransportError),
}

impl DispatchOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    /// Turn a non-delivered outcome into an error naming the supplier.
    pub fn into_result(self, supplier: &str, address: &str) -> Result<u16, DispatchError> {
        match self {
            Self::Delivered { status } => Ok(status),
            Self::Rejected { status, message } => Err(DispatchError::Rejected {
                supplier: supplier.to_string(),
                address: address.to_string(),
                status,
                message,
            }),
            Self::TransportFailure(source) => Err(DispatchError::Transport {
                supplier: supplier.to_string(),
                address: address.to_string(),
                source,
            }),
        }
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("delivery to {supplier} <{address}> rejected with status {status}: {message}")]
    Rejected {
        supplier: String,
        address: String,
        status: u16,
        message: String,
    },

    #[error("delivery to {supplier} <{address}> failed in transport")]
    Transport {
        supplier: String,
        address: String,
        #[source]
        source: TransportError,
    },
}

impl DispatchError {
    pub fn supplier(&self) -> &str {
        match self {
            Self::Rejected { supplier, .. } | Self::Transport { supplier, .. } => supplier,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "dispatch_rejected",
            Self::Transport { .. } => "dispatch_transport_failure",
        }
    }
}

/// Sends one rendered message per call through a [`DeliveryProvider`].
#[derive(Debug, Clone)]
pub struct DispatchGateway<P> {
    provider: P,
    sender: Sender,
}

impl<P> DispatchGateway<P>
where
    P: DeliveryProvider,
{
    pub fn new(provider: P, sender: Sender) -> Self {
        Self { provider, sender }
    }

    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// One attempt, no retry.
    pub async fn send(&self, to: &ContactAddress, subject: &str, body: &str) -> DispatchOutcome {
        let message = OutboundMessage {
            from: self.sender.clone(),
            to: to.as_str().to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        };

        match self.provider.send(&message).await {
            Ok(response) if response.is_success() => {
                info!(
                    provider = self.provider.name(),
                    to = %to,
                    status = response.status,
                    "quote request delivered"
                );
                DispatchOutcome::Delivered {
                    status: response.status,
                }
            }
            Ok(response) => {
                error!(
                    provider = self.provider.name(),
                    to = %to,
                    status = response.status,
                    body = %response.body,
                    "quote request rejected"
                );
                DispatchOutcome::Rejected {
                    status: response.status,
                    message: response.body,
                }
            }
            Err(err) => {
                error!(
                    provider = self.provider.name(),
                    to = %to,
                    error = %err,
                    "quote request transport failure"
                );
                DispatchOutcome::TransportFailure(err)
            }
        }
    }
}
