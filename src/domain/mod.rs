mod job;
mod job_error;
mod job_id;
mod job_status;
mod storage_path;

pub use job::{Job, JobTransition, TransitionError};
pub use job_error::{JobError, JobErrorKind};
pub use job_id::JobId;
pub use job_status::JobStatus;
pub use storage_path::StoragePath;
