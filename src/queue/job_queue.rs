use std::collections::{BTreeMap, VecDeque};

use tokio::sync::Mutex;

use crate::interceptors::AppError;
use crate::models::{Job, JobOutcome, JobStatus, JobType};

/// Queue internals. The id counter, both lanes and the job map only change
/// together, under the queue's single lock: picking an id from a lane and
/// flipping its status in the map must be one indivisible step.
///
/// Invariants:
/// - every id in a lane exists in `jobs` with status QUEUED;
/// - an id sits in at most one lane, at most once;
/// - ids are never reused, and records are never removed from `jobs`.
#[derive(Debug, Default)]
struct QueueState {
    jobs: BTreeMap<u64, Job>,
    critical: VecDeque<u64>,
    not_critical: VecDeque<u64>,
    next_id: u64,
}

impl QueueState {
    fn lane_mut(&mut self, job_type: JobType) -> &mut VecDeque<u64> {
        match job_type {
            JobType::TimeCritical => &mut self.critical,
            JobType::NotTimeCritical => &mut self.not_critical,
        }
    }

    /// Mint the next id and insert a new QUEUED record, appending the id to
    /// the tail of the lane matching its type.
    fn push_job(&mut self, job_type: JobType, attempts: u32) -> u64 {
        self.next_id += 1;
        let id = self.next_id;

        self.lane_mut(job_type).push_back(id);
        self.jobs.insert(id, Job::new(id, job_type, attempts));

        id
    }
}

/// Concurrency-safe in-memory job queue.
///
/// Jobs wait in one of two FIFO lanes selected by their type; dequeue always
/// drains the time-critical lane before touching the other one. The job map
/// keeps every record ever created, whatever its status, and is the single
/// source of truth for a job's current state.
#[derive(Debug, Default)]
pub struct JobQueue {
    state: Mutex<QueueState>,
}

impl JobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new job to the queue, returning its freshly minted id.
    ///
    /// Ids start at 1 and increase by one per enqueue, retries included.
    pub async fn enqueue(&self, job_type: JobType) -> u64 {
        let mut state = self.state.lock().await;
        let id = state.push_job(job_type, 0);

        tracing::debug!("Job {} enqueued ({})", id, job_type);
        id
    }

    /// Hand out the next eligible job, marking it IN_PROGRESS.
    ///
    /// The head of the time-critical lane wins if that lane is non-empty;
    /// otherwise the head of the non-critical lane. Within a lane, dispatch
    /// order equals enqueue order. Fails with `NoJobsAvailable` when both
    /// lanes are empty; this is an immediate response, never a wait.
    pub async fn dequeue(&self) -> Result<Job, AppError> {
        let mut state = self.state.lock().await;

        let id = match state.critical.pop_front() {
            Some(id) => id,
            None => state
                .not_critical
                .pop_front()
                .ok_or(AppError::NoJobsAvailable)?,
        };

        let job = state
            .jobs
            .get_mut(&id)
            .ok_or_else(|| AppError::InternalError(format!("queued job {} missing from map", id)))?;
        job.set_status(JobStatus::InProgress);
        let job = job.clone();

        tracing::debug!("Job {} dequeued ({})", job.id, job.job_type);
        Ok(job)
    }

    /// Record a job's outcome.
    ///
    /// A failed outcome schedules a retry: a new record with a fresh id, the
    /// same type and an incremented attempt counter joins the tail of the
    /// matching lane. The retry id is not reported back. Whatever the
    /// outcome, the original id ends up CONCLUDED, which is terminal.
    pub async fn conclude(&self, id: u64, outcome: JobOutcome) -> Result<(), AppError> {
        let mut state = self.state.lock().await;

        let (job_type, status, attempts) = match state.jobs.get(&id) {
            Some(job) => (job.job_type, job.status, job.attempts),
            None => return Err(AppError::JobNotFound(id)),
        };

        // A job concluded straight from QUEUED never went through dequeue;
        // drop it from its lane so lane membership keeps meaning "pending".
        if status == JobStatus::Queued {
            state.lane_mut(job_type).retain(|queued| *queued != id);
        }

        if outcome == JobOutcome::Failed {
            let retry_id = state.push_job(job_type, attempts + 1);
            tracing::info!("Job {} failed, retry queued as job {}", id, retry_id);
        }

        let job = state
            .jobs
            .get_mut(&id)
            .ok_or_else(|| AppError::InternalError(format!("job {} vanished from map", id)))?;
        job.set_status(JobStatus::Concluded);

        tracing::debug!("Job {} concluded ({:?})", id, outcome);
        Ok(())
    }

    /// Look up a job by id, whatever its status.
    pub async fn get_job(&self, id: u64) -> Result<Job, AppError> {
        let state = self.state.lock().await;
        state.jobs.get(&id).cloned().ok_or(AppError::JobNotFound(id))
    }

    /// Clone the full id -> job map for inspection. Read-only; callers get
    /// copies and cannot reach queue state through them.
    pub async fn snapshot(&self) -> BTreeMap<u64, Job> {
        let state = self.state.lock().await;
        state.jobs.clone()
    }
}
