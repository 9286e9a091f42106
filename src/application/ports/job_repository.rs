use async_trait::async_trait;

use crate::domain::{Job, JobId, JobTransition};

use super::RepositoryError;

/// Durable mapping from job identifier to job record.
///
/// `create` makes the record visible to readers before the pipeline starts,
/// so a poller never observes a job that does not yet exist. `update` applies
/// one [`JobTransition`] at a time and must merge into the stored record —
/// a previously persisted transcript is never lost by a later transition.
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &Job) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError>;

    async fn update(&self, id: JobId, transition: JobTransition) -> Result<(), RepositoryError>;
}
