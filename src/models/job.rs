use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interceptors::AppError;

/// Dispatch tier of a job. Time-critical jobs are always served before
/// non-critical ones, regardless of how long the latter have waited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    TimeCritical,
    NotTimeCritical,
}

impl FromStr for JobType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TIME_CRITICAL" => Ok(JobType::TimeCritical),
            "NOT_TIME_CRITICAL" => Ok(JobType::NotTimeCritical),
            other => Err(AppError::InvalidJobType(other.to_string())),
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobType::TimeCritical => write!(f, "TIME_CRITICAL"),
            JobType::NotTimeCritical => write!(f, "NOT_TIME_CRITICAL"),
        }
    }
}

/// Lifecycle state of a job. CONCLUDED is terminal: no operation moves a
/// job out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Queued,
    InProgress,
    Concluded,
}

/// Outcome a worker reports when concluding a job. A failed outcome makes
/// the queue schedule a retry under a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobOutcome {
    Ok,
    Failed,
}

/// Job metadata tracked by the queue. No payload is carried; workers resolve
/// the actual work from the id and type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub status: JobStatus,
    pub attempts: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Create a freshly queued job record.
    pub fn new(id: u64, job_type: JobType, attempts: u32) -> Self {
        let now = Utc::now();
        Self {
            id,
            job_type,
            status: JobStatus::Queued,
            attempts,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_status(&mut self, status: JobStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_type_parses_known_values() {
        assert_eq!("TIME_CRITICAL".parse::<JobType>().unwrap(), JobType::TimeCritical);
        assert_eq!(
            "NOT_TIME_CRITICAL".parse::<JobType>().unwrap(),
            JobType::NotTimeCritical
        );
    }

    #[test]
    fn job_type_rejects_unknown_values() {
        let err = "SOMEWHAT_CRITICAL".parse::<JobType>().unwrap_err();
        assert!(matches!(err, AppError::InvalidJobType(ref t) if t == "SOMEWHAT_CRITICAL"));
    }

    #[test]
    fn job_serializes_with_wire_names() {
        let job = Job::new(7, JobType::TimeCritical, 0);
        let value = serde_json::to_value(&job).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["type"], "TIME_CRITICAL");
        assert_eq!(value["status"], "QUEUED");
        assert_eq!(value["attempts"], 0);
    }
}
