mod health;
mod job_status;
mod upload;

pub use health::health_handler;
pub use job_status::{JobStatusResponse, job_status_handler};
pub use upload::{UploadResponse, upload_handler};
