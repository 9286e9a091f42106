use async_trait::async_trait;

/// Boundary to the remote generative-text provider that turns a transcript
/// into a structured clinical note.
///
/// Implementations perform exactly one remote call per invocation. A blank
/// transcript is rejected locally before any remote call is attempted, and an
/// empty or whitespace-only result from the provider is a failure, since a
/// blank artifact is indistinguishable from a silent provider malfunction.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate(&self, transcript: &str) -> Result<String, ReportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("transcript is empty")]
    EmptyTranscript,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("empty output from provider")]
    EmptyOutput,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
