// src/ui/controller.rs
use tracing::debug;

use super::transcript::{Message, Transcript};
use super::transport::{RelayFailure, RelayTransport};

pub const ERROR_PREFIX: &str = "❌ Error: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingResponse,
}

/// Owns the input field, the transcript and the loading flag for one chat view.
/// Dropping the controller discards the transcript.
#[derive(Debug, Default)]
pub struct ChatController {
    input: String,
    transcript: Transcript,
    phase: Phase,
}

impl ChatController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::AwaitingResponse
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    /// Whether the send control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input.trim().is_empty()
    }

    /// Appends the user message, clears the input and enters `AwaitingResponse`.
    /// Returns the text to send, or `None` (with no change) for blank input.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        self.transcript.push(Message::user(text.clone()));
        self.phase = Phase::AwaitingResponse;
        Some(text)
    }

    /// Records the relay's answer as a bot message and returns to `Idle`.
    pub fn finish(&mut self, outcome: Result<String, RelayFailure>) {
        let text = match outcome {
            Ok(reply) => reply,
            Err(failure) => format!("{ERROR_PREFIX}{failure}"),
        };
        self.transcript.push(Message::bot(text));
        self.phase = Phase::Idle;
    }

    /// Full round trip. Returns `false` when the input was blank and nothing was sent.
    pub async fn submit<T>(&mut self, transport: &T) -> bool
    where
        T: RelayTransport + ?Sized,
    {
        let Some(text) = self.begin_submit() else {
            return false;
        };
        let outcome = transport.send(&text).await;
        if let Err(failure) = &outcome {
            debug!(%failure, "relay request failed");
        }
        self.finish(outcome);
        true
    }
}
