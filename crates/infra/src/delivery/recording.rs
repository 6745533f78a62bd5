use std::collections::VecDeque;
use std::sync::Mutex;

use tracing::info;

use super::{DeliveryProvider, OutboundMessage, ProviderResponse, TransportError};

/// What a [`RecordingProvider`] answers to the next attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedReply {
    Status { status: u16, body: String },
    Unreachable(String),
}

impl ScriptedReply {
    pub fn accepted() -> Self {
        Self::Status {
            status: 202,
            body: String::new(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}

/// Provider that keeps every attempt in memory (for tests/dev).
///
/// Nothing is ever drained, so it is not meant for a long-running process.
/// Replies are scripted in order; once the script runs out every attempt is
/// answered with 202.
#[derive(Debug, Default)]
pub struct RecordingProvider {
    sent: Mutex<Vec<OutboundMessage>>,
    replies: Mutex<VecDeque<ScriptedReply>>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(replies: impl IntoIterator<Item = ScriptedReply>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            replies: Mutex::new(replies.into_iter().collect()),
        }
    }

    pub fn push_reply(&self, reply: ScriptedReply) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }

    /// Every attempted message, in attempt order (rejected ones included).
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl DeliveryProvider for RecordingProvider {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, message: &OutboundMessage) -> Result<ProviderResponse, TransportError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(message.clone());
        }

        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|mut r| r.pop_front())
            .unwrap_or_else(ScriptedReply::accepted);

        info!(to = %message.to, subject = %message.subject, "recorded outbound message");

        match reply {
            ScriptedReply::Status { status, body } => Ok(ProviderResponse::new(status, body)),
            ScriptedReply::Unreachable(cause) => Err(TransportError::Unreachable(cause)),
        }
    }
}
