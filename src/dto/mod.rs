pub mod job_dto;

pub use job_dto::{
    ConcludeJobRequest,
    EnqueueJobRequest,
    EnqueueJobResponse,
    JobResponse,
    QueueSnapshotResponse,
};
