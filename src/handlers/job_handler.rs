use axum::{
    extract::{Path, State},
    Json,
};

use crate::config::AppState;
use crate::dto::{
    ConcludeJobRequest, EnqueueJobRequest, EnqueueJobResponse, JobResponse, QueueSnapshotResponse,
};
use crate::interceptors::{ApiSuccess, AppError};
use crate::services::JobService;

/// Enqueue a new job
pub async fn enqueue_job(
    State(state): State<AppState>,
    Json(request): Json<EnqueueJobRequest>,
) -> Result<ApiSuccess<EnqueueJobResponse>, AppError> {
    let job_service = JobService::new(state);
    let response = job_service.enqueue(request).await?;

    Ok(ApiSuccess::new("Job enqueued successfully", response))
}

/// Hand the next eligible job to the calling worker
pub async fn dequeue_job(
    State(state): State<AppState>,
) -> Result<ApiSuccess<JobResponse>, AppError> {
    let job_service = JobService::new(state);
    let response = job_service.dequeue().await?;

    Ok(ApiSuccess::new("Job dequeued successfully", response))
}

/// Record a job's outcome
pub async fn conclude_job(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<ConcludeJobRequest>,
) -> Result<ApiSuccess<()>, AppError> {
    let job_service = JobService::new(state);
    job_service.conclude(id, request).await?;

    Ok(ApiSuccess::<()>::new_without_data("Job concluded successfully"))
}

/// Get a job by id, whatever its status
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<ApiSuccess<JobResponse>, AppError> {
    let job_service = JobService::new(state);
    let response = job_service.get_job(id).await?;

    Ok(ApiSuccess::new("Job retrieved successfully", response))
}

/// Inspect the full queue state, partitioned by status. Diagnostics only,
/// not part of the job-processing contract.
pub async fn debug_queue(
    State(state): State<AppState>,
) -> Result<ApiSuccess<QueueSnapshotResponse>, AppError> {
    let job_service = JobService::new(state);
    let response = job_service.queue_snapshot().await?;

    Ok(ApiSuccess::new("Queue snapshot retrieved", response))
}
