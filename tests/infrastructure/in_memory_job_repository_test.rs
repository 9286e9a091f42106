use medscribe::application::ports::{JobRepository, RepositoryError};
use medscribe::domain::{Job, JobError, JobErrorKind, JobId, JobStatus, JobTransition, StoragePath};
use medscribe::infrastructure::persistence::InMemoryJobRepository;

fn new_job() -> Job {
    Job::new(StoragePath::from_raw("abc/a.wav"))
}

#[tokio::test]
async fn given_created_job_then_get_returns_it_in_progress() {
    let repo = InMemoryJobRepository::new();
    let job = new_job();

    repo.create(&job).await.unwrap();

    let fetched = repo.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, JobStatus::InProgress);
    assert_eq!(fetched.source_reference, job.source_reference);
}

#[tokio::test]
async fn given_unknown_id_then_get_returns_none() {
    let repo = InMemoryJobRepository::new();

    let fetched = repo.get_by_id(JobId::new()).await.unwrap();

    assert!(fetched.is_none());
}

#[tokio::test]
async fn given_duplicate_create_then_constraint_violation() {
    let repo = InMemoryJobRepository::new();
    let job = new_job();
    repo.create(&job).await.unwrap();

    let result = repo.create(&job).await;

    assert!(matches!(
        result,
        Err(RepositoryError::ConstraintViolation(_))
    ));
}

#[tokio::test]
async fn given_update_on_unknown_job_then_not_found() {
    let repo = InMemoryJobRepository::new();

    let result = repo
        .update(
            JobId::new(),
            JobTransition::TranscriptReady {
                transcript: "speech".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));
}

#[tokio::test]
async fn given_completion_after_transcript_then_transcript_is_preserved() {
    let repo = InMemoryJobRepository::new();
    let job = new_job();
    repo.create(&job).await.unwrap();

    repo.update(
        job.id,
        JobTransition::TranscriptReady {
            transcript: "patient reports headache".to_string(),
        },
    )
    .await
    .unwrap();
    repo.update(
        job.id,
        JobTransition::Completed {
            report: "note".to_string(),
        },
    )
    .await
    .unwrap();

    let fetched = repo.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, JobStatus::Completed);
    assert_eq!(fetched.transcript, "patient reports headache");
    assert_eq!(fetched.report, "note");
}

#[tokio::test]
async fn given_terminal_job_then_further_updates_are_invalid_transitions() {
    let repo = InMemoryJobRepository::new();
    let job = new_job();
    repo.create(&job).await.unwrap();

    repo.update(
        job.id,
        JobTransition::Failed(JobError::new(JobErrorKind::TranscriptionFailed, "down")),
    )
    .await
    .unwrap();

    let result = repo
        .update(
            job.id,
            JobTransition::Completed {
                report: "late".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::InvalidTransition(_))));
    let fetched = repo.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, JobStatus::Failed);
}
