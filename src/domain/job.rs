use chrono::{DateTime, Utc};

use super::{JobError, JobId, JobStatus, StoragePath};

/// One submitted audio item and its processing outcome.
///
/// The record is created in `in_progress` and mutated only through
/// [`Job::apply`], which enforces forward-only status movement and the
/// write-once rules for transcript and report.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub source_reference: StoragePath,
    pub status: JobStatus,
    pub transcript: String,
    pub report: String,
    pub error: Option<JobError>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The exactly-once mutations the pipeline may apply to a job record.
#[derive(Debug, Clone)]
pub enum JobTransition {
    /// Transcription succeeded; the job stays in progress.
    TranscriptReady { transcript: String },
    /// Report generation succeeded.
    Completed { report: String },
    /// Report generation failed but a usable transcript exists; the
    /// placeholder text is stored in place of the report and the structured
    /// error field stays empty.
    CompletedWithErrors { placeholder: String },
    /// A fatal failure; no artifact of value was produced.
    Failed(JobError),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("job is already in terminal state {0}")]
    AlreadyTerminal(JobStatus),
    #[error("transcript is already set")]
    TranscriptAlreadySet,
    #[error("report is already set")]
    ReportAlreadySet,
}

impl Job {
    pub fn new(source_reference: StoragePath) -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            source_reference,
            status: JobStatus::InProgress,
            transcript: String::new(),
            report: String::new(),
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, transition: JobTransition) -> Result<(), TransitionError> {
        if self.status.is_terminal() {
            return Err(TransitionError::AlreadyTerminal(self.status));
        }

        match transition {
            JobTransition::TranscriptReady { transcript } => {
                if !self.transcript.is_empty() {
                    return Err(TransitionError::TranscriptAlreadySet);
                }
                self.transcript = transcript;
            }
            JobTransition::Completed { report } => {
                if !self.report.is_empty() {
                    return Err(TransitionError::ReportAlreadySet);
                }
                self.report = report;
                self.status = JobStatus::Completed;
            }
            JobTransition::CompletedWithErrors { placeholder } => {
                if !self.report.is_empty() {
                    return Err(TransitionError::ReportAlreadySet);
                }
                self.report = placeholder;
                self.status = JobStatus::CompletedWithErrors;
            }
            JobTransition::Failed(error) => {
                self.error = Some(error);
                self.status = JobStatus::Failed;
            }
        }

        self.updated_at = Utc::now();
        Ok(())
    }
}
