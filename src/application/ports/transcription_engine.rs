use async_trait::async_trait;

/// Result of a successful transcription call.
///
/// An empty transcript is a valid outcome (the provider heard no speech);
/// callers must accept it and proceed.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptOutcome {
    pub transcript: String,
    pub duration_seconds: f64,
}

/// Boundary to the remote speech-to-text provider.
///
/// Implementations perform exactly one remote call per invocation and never
/// retry internally.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_data: &[u8])
        -> Result<TranscriptOutcome, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    /// The provider reported an error in its response body, as opposed to a
    /// transport-level failure.
    #[error("provider error: {0}")]
    ProviderError(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
