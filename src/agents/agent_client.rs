use crate::{
    agents::{Agent, AgentJob},
    jobs::JobId,
};
use futures::future::BoxFuture;

/// Narrow RPC contract of a remote execution agent.
pub trait AgentClient: Sync + Send + 'static {
    /// Queries whether the agent currently holds a job with the specified ID.
    fn get_job<'a>(
        &'a self,
        agent: &'a Agent,
        job_id: JobId,
    ) -> BoxFuture<'a, anyhow::Result<Option<AgentJob>>>;

    /// Installs a full job definition on the agent.
    fn add_job<'a>(
        &'a self,
        agent: &'a Agent,
        job: &'a AgentJob,
    ) -> BoxFuture<'a, anyhow::Result<()>>;

    /// Replaces the agent's stored definition for an existing job.
    fn update_job<'a>(
        &'a self,
        agent: &'a Agent,
        job: &'a AgentJob,
    ) -> BoxFuture<'a, anyhow::Result<()>>;

    /// Deletes the agent's stored definition for a job, succeeds if the job is absent.
    fn remove_job<'a>(
        &'a self,
        agent: &'a Agent,
        job_id: JobId,
    ) -> BoxFuture<'a, anyhow::Result<()>>;
}
