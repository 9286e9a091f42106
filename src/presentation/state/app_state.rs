use std::sync::Arc;

use crate::application::ports::{AudioStore, JobRepository};
use crate::application::services::PipelineService;

pub struct AppState {
    pub pipeline: Arc<PipelineService>,
    pub job_repository: Arc<dyn JobRepository>,
    pub audio_store: Arc<dyn AudioStore>,
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            job_repository: Arc::clone(&self.job_repository),
            audio_store: Arc::clone(&self.audio_store),
        }
    }
}
