mod gemini_client_test;
mod in_memory_job_repository_test;
