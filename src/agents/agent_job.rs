use crate::jobs::{Job, JobId};
use serde_derive::{Deserialize, Serialize};

/// Job definition as it's stored by the remote agent.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AgentJob {
    pub id: JobId,
    pub name: String,
    pub dir: String,
    pub program: String,
    pub args: String,
    pub std_out: String,
    pub std_err: String,
    pub spec: String,
    /// Timeout in seconds, `0` means no timeout.
    pub timeout: u32,
    pub is_monitor: bool,
}

impl From<&Job> for AgentJob {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            name: job.name.clone(),
            dir: job.dir.clone(),
            program: job.program.clone(),
            args: job.args.clone(),
            std_out: job.std_out.clone(),
            std_err: job.std_err.clone(),
            spec: job.spec.clone(),
            timeout: job.timeout,
            is_monitor: job.is_monitor,
        }
    }
}
