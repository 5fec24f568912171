use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Job, JobOutcome};

/// Enqueue request. The type arrives as a raw string and is parsed against
/// the known job types so unknown values fail loudly instead of producing a
/// record no lane will ever dispatch.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnqueueJobRequest {
    #[validate(length(min = 1, message = "Job type is required"))]
    #[serde(rename = "type")]
    pub job_type: String,
}

/// Enqueue response: the id assigned to the new job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnqueueJobResponse {
    pub id: u64,
}

/// A single job record, as returned by dequeue and get
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub job: Job,
}

/// Conclude request: the outcome a worker reports for a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcludeJobRequest {
    pub result: JobOutcome,
}

/// Every known job partitioned by status, for operational inspection.
/// Buckets serialize as arrays and are empty, never null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueSnapshotResponse {
    pub queued: Vec<Job>,
    pub in_progress: Vec<Job>,
    pub concluded: Vec<Job>,
}
