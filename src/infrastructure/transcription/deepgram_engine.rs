use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{TranscriptOutcome, TranscriptionEngine, TranscriptionError};

/// Deepgram prerecorded-audio client. One request per transcription, no
/// internal retries.
pub struct DeepgramEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    request_timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct DeepgramResponse {
    #[serde(default)]
    err_code: Option<String>,
    #[serde(default)]
    err_msg: Option<String>,
    #[serde(default)]
    metadata: Option<DeepgramMetadata>,
    #[serde(default)]
    results: Option<DeepgramResults>,
}

#[derive(Debug, Deserialize)]
struct DeepgramMetadata {
    #[serde(default)]
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct DeepgramResults {
    #[serde(default)]
    channels: Vec<DeepgramChannel>,
}

#[derive(Debug, Deserialize)]
struct DeepgramChannel {
    #[serde(default)]
    alternatives: Vec<DeepgramAlternative>,
}

#[derive(Debug, Deserialize)]
struct DeepgramAlternative {
    #[serde(default)]
    transcript: String,
}

impl DeepgramEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.deepgram.com".to_string()),
            model: model.unwrap_or_else(|| "nova-3".to_string()),
            request_timeout,
        }
    }
}

#[async_trait]
impl TranscriptionEngine for DeepgramEngine {
    async fn transcribe(
        &self,
        audio_data: &[u8],
    ) -> Result<TranscriptOutcome, TranscriptionError> {
        let url = format!(
            "{}/v1/listen?model={}&diarize=true&smart_format=true",
            self.base_url, self.model
        );

        tracing::debug!(model = %self.model, bytes = audio_data.len(), "Sending audio to Deepgram");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Token {}", self.api_key))
            .header("Content-Type", "audio/wav")
            .timeout(self.request_timeout)
            .body(audio_data.to_vec())
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: DeepgramResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("body: {}", e)))?;

        // Deepgram can report an error in the body of a 200 response.
        if let Some(msg) = parsed.err_msg {
            let code = parsed.err_code.unwrap_or_default();
            return Err(TranscriptionError::ProviderError(format!("{}: {}", code, msg)));
        }

        // Missing pieces collapse to an empty transcript, which is a valid
        // outcome (no speech detected), not an error.
        let transcript = parsed
            .results
            .and_then(|r| r.channels.into_iter().next())
            .and_then(|c| c.alternatives.into_iter().next())
            .map(|a| a.transcript)
            .unwrap_or_default();

        let duration_seconds = parsed.metadata.map(|m| m.duration).unwrap_or(0.0);

        tracing::info!(
            chars = transcript.len(),
            duration_seconds = duration_seconds,
            "Deepgram transcription completed"
        );

        Ok(TranscriptOutcome {
            transcript,
            duration_seconds,
        })
    }
}
