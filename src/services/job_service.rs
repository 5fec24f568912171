use crate::config::AppState;
use crate::dto::{
    ConcludeJobRequest, EnqueueJobRequest, EnqueueJobResponse, JobResponse, QueueSnapshotResponse,
};
use crate::interceptors::AppResult;
use crate::models::{JobStatus, JobType};
use crate::utils::validate_request;

#[derive(Clone)]
pub struct JobService {
    state: AppState,
}

impl JobService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Enqueue a new job of the requested type
    pub async fn enqueue(&self, request: EnqueueJobRequest) -> AppResult<EnqueueJobResponse> {
        // Validate request
        validate_request(&request)?;

        let job_type: JobType = request.job_type.parse()?;
        let id = self.state.queue.enqueue(job_type).await;

        tracing::info!("Job {} enqueued ({})", id, job_type);

        Ok(EnqueueJobResponse { id })
    }

    /// Hand the next eligible job to a worker
    pub async fn dequeue(&self) -> AppResult<JobResponse> {
        let job = self.state.queue.dequeue().await?;

        tracing::info!("Job {} dequeued ({})", job.id, job.job_type);

        Ok(JobResponse { job })
    }

    /// Record the outcome a worker reported for a job
    pub async fn conclude(&self, id: u64, request: ConcludeJobRequest) -> AppResult<()> {
        self.state.queue.conclude(id, request.result).await?;

        tracing::info!("Job {} concluded", id);

        Ok(())
    }

    /// Look up a job by id
    pub async fn get_job(&self, id: u64) -> AppResult<JobResponse> {
        let job = self.state.queue.get_job(id).await?;

        Ok(JobResponse { job })
    }

    /// Partition the full job map by status for the debug endpoint. The
    /// queue hands back a plain snapshot; bucketing happens here, on a copy.
    pub async fn queue_snapshot(&self) -> AppResult<QueueSnapshotResponse> {
        let jobs = self.state.queue.snapshot().await;

        // Buckets start out empty so the json carries [] instead of null.
        let mut snapshot = QueueSnapshotResponse {
            queued: Vec::new(),
            in_progress: Vec::new(),
            concluded: Vec::new(),
        };

        for job in jobs.into_values() {
            match job.status {
                JobStatus::Queued => snapshot.queued.push(job),
                JobStatus::InProgress => snapshot.in_progress.push(job),
                JobStatus::Concluded => snapshot.concluded.push(job),
            }
        }

        Ok(snapshot)
    }
}
