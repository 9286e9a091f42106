mod audio_store;
mod job_repository;
mod report_generator;
mod repository_error;
mod transcription_engine;

pub use audio_store::{AudioStore, AudioStoreError};
pub use job_repository::JobRepository;
pub use report_generator::{ReportError, ReportGenerator};
pub use repository_error::RepositoryError;
pub use transcription_engine::{TranscriptOutcome, TranscriptionEngine, TranscriptionError};
