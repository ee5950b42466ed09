use crate::{
    agents::AgentId,
    jobs::{JobId, JobStatus},
};
use serde::Serialize;
use time::OffsetDateTime;

/// Controller-side record describing a schedulable command and its desired run state.
#[derive(Serialize, Debug, Eq, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub name: String,
    /// Organizational tag, `0` means no group.
    pub group_id: i64,
    pub agent_id: AgentId,
    pub dir: String,
    pub program: String,
    pub args: String,
    pub std_out: String,
    pub std_err: String,
    /// Cron pattern with seconds, e.g. `0 */5 * * * *`.
    pub spec: String,
    /// Timeout in seconds, `0` means no timeout.
    pub timeout: u32,
    pub is_monitor: bool,
    pub status: JobStatus,
    pub creator: i64,
    pub updater: i64,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::timestamp")]
    pub updated_at: OffsetDateTime,
}

impl AsRef<Job> for Job {
    fn as_ref(&self) -> &Self {
        self
    }
}
