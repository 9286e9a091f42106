use std::sync::Arc;

use tracing::Instrument;

use crate::application::ports::{
    AudioStore, JobRepository, ReportGenerator, RepositoryError, TranscriptionEngine,
};
use crate::domain::{Job, JobError, JobErrorKind, JobId, JobTransition, StoragePath};

/// Sequences the two provider adapters for one job and writes every outcome
/// through the job repository.
///
/// `submit` returns as soon as the record is visible; the rest of the
/// pipeline runs as a detached task per job. A job always reaches a terminal
/// state: adapter failures become recorded job outcomes, and anything
/// unanticipated is wrapped as an internal failure at this boundary.
pub struct PipelineService {
    audio_store: Arc<dyn AudioStore>,
    transcription_engine: Arc<dyn TranscriptionEngine>,
    report_generator: Arc<dyn ReportGenerator>,
    job_repository: Arc<dyn JobRepository>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, thiserror::Error)]
enum PipelineError {
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}

impl PipelineService {
    pub fn new(
        audio_store: Arc<dyn AudioStore>,
        transcription_engine: Arc<dyn TranscriptionEngine>,
        report_generator: Arc<dyn ReportGenerator>,
        job_repository: Arc<dyn JobRepository>,
    ) -> Self {
        Self {
            audio_store,
            transcription_engine,
            report_generator,
            job_repository,
        }
    }

    /// Create the job record and detach processing.
    ///
    /// Fails only if the record itself cannot be created; downstream provider
    /// errors are learned later via polling.
    pub async fn submit(self: &Arc<Self>, source: StoragePath) -> Result<JobId, SubmitError> {
        let job = Job::new(source.clone());
        let job_id = job.id;

        self.job_repository.create(&job).await?;

        let pipeline = Arc::clone(self);
        let span = tracing::info_span!(
            "transcription_job",
            job_id = %job_id.as_uuid(),
            source = %source,
        );
        tokio::spawn(
            async move {
                if let Err(e) = pipeline.process_job(job_id, &source).await {
                    tracing::error!(error = %e, "Job processing aborted");
                    pipeline.record_internal_failure(job_id, &e).await;
                }
            }
            .instrument(span),
        );

        tracing::info!(job_id = %job_id.as_uuid(), "Transcription job dispatched");
        Ok(job_id)
    }

    async fn process_job(&self, job_id: JobId, source: &StoragePath) -> Result<(), PipelineError> {
        if let Err(e) = self.audio_store.head(source).await {
            tracing::warn!(error = %e, "Submitted audio is not accessible");
            let error =
                JobError::new(JobErrorKind::InputUnavailable, format!("audio not accessible: {}", source))
                    .with_context(e.to_string());
            return self.fail(job_id, error).await;
        }

        let audio = match self.audio_store.fetch(source).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, "Submitted audio could not be read");
                let error =
                    JobError::new(JobErrorKind::InputUnavailable, format!("audio not readable: {}", source))
                        .with_context(e.to_string());
                return self.fail(job_id, error).await;
            }
        };

        tracing::debug!(bytes = audio.len(), "Starting transcription");

        let outcome = match self.transcription_engine.transcribe(&audio).await {
            Ok(o) => o,
            Err(e) => {
                tracing::error!(error = %e, "Transcription failed");
                let error = JobError::new(JobErrorKind::TranscriptionFailed, e.to_string());
                return self.fail(job_id, error).await;
            }
        };
        drop(audio);

        tracing::info!(
            chars = outcome.transcript.len(),
            duration_seconds = outcome.duration_seconds,
            "Transcription completed"
        );

        self.update(
            job_id,
            JobTransition::TranscriptReady {
                transcript: outcome.transcript.clone(),
            },
        )
        .await?;

        match self.report_generator.generate(&outcome.transcript).await {
            Ok(report) => {
                tracing::info!(chars = report.len(), "Report generated");
                self.update(job_id, JobTransition::Completed { report }).await
            }
            Err(e) => {
                // The transcript is still usable, so the job degrades rather
                // than failing: the error message is embedded in a placeholder
                // report and the structured error field stays empty.
                tracing::error!(error = %e, "Report generation failed, keeping transcript");
                let placeholder = format!("Report generation failed: {}", e);
                self.update(job_id, JobTransition::CompletedWithErrors { placeholder })
                    .await
            }
        }
    }

    async fn fail(&self, job_id: JobId, error: JobError) -> Result<(), PipelineError> {
        self.update(job_id, JobTransition::Failed(error)).await
    }

    async fn update(&self, job_id: JobId, transition: JobTransition) -> Result<(), PipelineError> {
        tracing::debug!(transition = ?transition_name(&transition), "Job transition");
        self.job_repository
            .update(job_id, transition)
            .await
            .map_err(PipelineError::Repository)
    }

    async fn record_internal_failure(&self, job_id: JobId, cause: &PipelineError) {
        let error = JobError::new(JobErrorKind::Internal, "unexpected failure during job processing")
            .with_context(cause.to_string());
        if let Err(e) = self
            .job_repository
            .update(job_id, JobTransition::Failed(error))
            .await
        {
            tracing::error!(error = %e, "Failed to record internal job failure");
        }
    }
}

fn transition_name(transition: &JobTransition) -> &'static str {
    match transition {
        JobTransition::TranscriptReady { .. } => "transcript_ready",
        JobTransition::Completed { .. } => "completed",
        JobTransition::CompletedWithErrors { .. } => "completed_with_errors",
        JobTransition::Failed(_) => "failed",
    }
}
