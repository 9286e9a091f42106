use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::{Job, JobId, JobTransition};

/// Process-wide job record store.
///
/// Transitions go through [`Job::apply`], so the state machine and the
/// write-once transcript/report rules hold no matter how callers interleave.
pub struct InMemoryJobRepository {
    jobs: RwLock<HashMap<Uuid, Job>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryJobRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn create(&self, job: &Job) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        let key = job.id.as_uuid();
        if jobs.contains_key(&key) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "job id already exists: {}",
                key
            )));
        }
        jobs.insert(key, job.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(&id.as_uuid()).cloned())
    }

    async fn update(&self, id: JobId, transition: JobTransition) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&id.as_uuid())
            .ok_or_else(|| RepositoryError::NotFound(format!("job: {}", id.as_uuid())))?;

        job.apply(transition)
            .map_err(|e| RepositoryError::InvalidTransition(e.to_string()))
    }
}
