use serde_repr::{Deserialize_repr, Serialize_repr};

/// Lifecycle status of the job.
#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(i8)]
pub enum JobStatus {
    /// Job is soft-deleted, no further lifecycle operations are allowed.
    Deleted = -1,
    /// Job is created, but has never been started.
    Stopped = 0,
    /// Job is scheduled on the agent.
    Running = 1,
    /// Job is removed from the agent, but can be started again.
    Paused = 2,
}

impl TryFrom<i64> for JobStatus {
    type Error = anyhow::Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Deleted),
            0 => Ok(Self::Stopped),
            1 => Ok(Self::Running),
            2 => Ok(Self::Paused),
            _ => Err(anyhow::anyhow!("Unknown job status: {value}.")),
        }
    }
}

impl From<JobStatus> for i64 {
    fn from(status: JobStatus) -> Self {
        status as i64
    }
}
