use crate::{
    agents::AgentId,
    error::{Error as CronwardError, ErrorKind},
    jobs::JobId,
};
use tracing::warn;

/// Typed failures of the job lifecycle operations.
#[derive(thiserror::Error, Debug)]
pub enum JobLifecycleError {
    /// Job ID doesn't resolve to a record.
    #[error("Job ({0}) is not found.")]
    NotFound(JobId),
    /// The agent that owns the job cannot be looked up.
    #[error("Agent ({agent_id}) of the job ({job_id}) is not registered.")]
    AgentUnresolved { job_id: JobId, agent_id: AgentId },
    /// Current job status doesn't allow the operation.
    #[error("Job ({job_id}) {reason}.")]
    InvalidState { job_id: JobId, reason: &'static str },
    /// Agent call failed or timed out.
    #[error("Agent ({agent_id}) failed to handle the job ({job_id}): {error:#}")]
    ProtocolError {
        job_id: JobId,
        agent_id: AgentId,
        error: anyhow::Error,
    },
    /// Local job record cannot be read or written.
    #[error("Cannot access the job ({job_id}) record: {error:#}")]
    PersistenceError { job_id: JobId, error: anyhow::Error },
}

impl JobLifecycleError {
    /// Indicates whether the same operation may succeed if retried later, otherwise the request
    /// itself needs to be fixed.
    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }

    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AgentUnresolved { .. } => ErrorKind::ClientError,
            Self::InvalidState { .. } => ErrorKind::Conflict,
            Self::ProtocolError { .. } => ErrorKind::Upstream,
            Self::PersistenceError { .. } => ErrorKind::Unavailable,
        }
    }
}

impl From<JobLifecycleError> for CronwardError {
    fn from(err: JobLifecycleError) -> Self {
        if err.is_retryable() {
            warn!("Job lifecycle operation failed, but can be retried later: {err}");
        }

        let kind = err.kind();
        CronwardError::new(err.into(), kind)
    }
}
