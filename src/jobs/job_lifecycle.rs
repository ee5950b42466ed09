use crate::{
    agents::{Agent, AgentClient, AgentDirectory, AgentJob},
    jobs::{Job, JobId, JobLifecycleError, JobLocks, JobStatus, JobStore},
};
use anyhow::anyhow;
use std::{future::Future, time::Duration};
use time::OffsetDateTime;
use tracing::{debug, error, info};

/// Reconciles the desired job status with the jobs the remote agent actually holds. Every operation
/// runs under the per-job lock: the job record is loaded, the agent is asked whether it holds the
/// job, at most one mutating agent call is issued, and only then the new status is persisted.
pub struct JobLifecycle<'a, S: JobStore, D: AgentDirectory, C: AgentClient> {
    store: &'a S,
    directory: &'a D,
    agent_client: &'a C,
    locks: &'a JobLocks,
    rpc_timeout: Duration,
}

impl<'a, S: JobStore, D: AgentDirectory, C: AgentClient> JobLifecycle<'a, S, D, C> {
    /// Creates job lifecycle orchestrator. Every agent call is bounded by `rpc_timeout`, every
    /// persisted status change records the operator that requested it as the job updater.
    pub fn new(
        store: &'a S,
        directory: &'a D,
        agent_client: &'a C,
        locks: &'a JobLocks,
        rpc_timeout: Duration,
    ) -> Self {
        Self {
            store,
            directory,
            agent_client,
            locks,
            rpc_timeout,
        }
    }

    /// Schedules the job on the agent unless the agent already holds it.
    pub async fn start(&self, id: JobId, operator_id: i64) -> Result<(), JobLifecycleError> {
        let _lock = self.locks.lock(id).await;

        let job = self.load_job(id).await?;
        if job.status == JobStatus::Running {
            return Err(JobLifecycleError::InvalidState {
                job_id: id,
                reason: "is already running",
            });
        }

        let agent = self.resolve_agent(&job).await?;
        if self.query_agent(&agent, &job).await?.is_none() {
            let agent_job = AgentJob::from(&job);
            self.call_agent(&agent, id, self.agent_client.add_job(&agent, &agent_job))
                .await?;
        } else {
            debug!(job.id = %id, agent.id = %agent.id, "Agent already holds the job.");
        }

        self.persist_status(job, JobStatus::Running, operator_id).await
    }

    /// Pushes the current job definition to the agent, installing it if the agent lost it.
    pub async fn restart(&self, id: JobId, operator_id: i64) -> Result<(), JobLifecycleError> {
        let _lock = self.locks.lock(id).await;

        let job = self.load_job(id).await?;
        let agent = self.resolve_agent(&job).await?;
        let agent_job = AgentJob::from(&job);
        match self.query_agent(&agent, &job).await? {
            None => {
                self.call_agent(&agent, id, self.agent_client.add_job(&agent, &agent_job))
                    .await?
            }
            Some(_) => {
                self.call_agent(&agent, id, self.agent_client.update_job(&agent, &agent_job))
                    .await?
            }
        }

        self.persist_status(job, JobStatus::Running, operator_id).await
    }

    /// Removes the job from the agent. A job the agent doesn't hold is already paused.
    pub async fn pause(&self, id: JobId, operator_id: i64) -> Result<(), JobLifecycleError> {
        let _lock = self.locks.lock(id).await;

        let job = self.load_job(id).await?;
        let agent = self.resolve_agent(&job).await?;
        if self.query_agent(&agent, &job).await?.is_some() {
            self.call_agent(&agent, id, self.agent_client.remove_job(&agent, id))
                .await?;
        } else {
            debug!(job.id = %id, agent.id = %agent.id, "Agent doesn't hold the job.");
        }

        self.persist_status(job, JobStatus::Paused, operator_id).await
    }

    /// Soft-deletes the job. The agent is never contacted, so running jobs must be paused first.
    pub async fn delete(&self, id: JobId, operator_id: i64) -> Result<(), JobLifecycleError> {
        let _lock = self.locks.lock(id).await;

        let job = self.load_job(id).await?;
        if job.status == JobStatus::Running {
            return Err(JobLifecycleError::InvalidState {
                job_id: id,
                reason: "cannot be deleted while running",
            });
        }

        self.persist_status(job, JobStatus::Deleted, operator_id).await
    }

    async fn load_job(&self, id: JobId) -> Result<Job, JobLifecycleError> {
        let job = self.store.find_job(id).await.map_err(|error| {
            error!(job.id = %id, "Failed to load job: {error:?}");
            JobLifecycleError::PersistenceError { job_id: id, error }
        })?;

        match job {
            Some(job) if job.status == JobStatus::Deleted => {
                Err(JobLifecycleError::InvalidState {
                    job_id: id,
                    reason: "is deleted",
                })
            }
            Some(job) => Ok(job),
            None => Err(JobLifecycleError::NotFound(id)),
        }
    }

    async fn resolve_agent(&self, job: &Job) -> Result<Agent, JobLifecycleError> {
        match self.directory.resolve_agent(job.agent_id).await {
            Ok(Some(agent)) => Ok(agent),
            Ok(None) => {
                error!(
                    job.id = %job.id,
                    agent.id = %job.agent_id,
                    "Failed to resolve job agent."
                );
                Err(JobLifecycleError::AgentUnresolved {
                    job_id: job.id,
                    agent_id: job.agent_id,
                })
            }
            Err(error) => {
                error!(
                    job.id = %job.id,
                    agent.id = %job.agent_id,
                    "Failed to load job agent: {error:?}"
                );
                Err(JobLifecycleError::PersistenceError {
                    job_id: job.id,
                    error,
                })
            }
        }
    }

    async fn query_agent(
        &self,
        agent: &Agent,
        job: &Job,
    ) -> Result<Option<AgentJob>, JobLifecycleError> {
        self.call_agent(agent, job.id, self.agent_client.get_job(agent, job.id))
            .await
    }

    async fn call_agent<T>(
        &self,
        agent: &Agent,
        job_id: JobId,
        call: impl Future<Output = anyhow::Result<T>>,
    ) -> Result<T, JobLifecycleError> {
        let error = match tokio::time::timeout(self.rpc_timeout, call).await {
            Ok(Ok(result)) => return Ok(result),
            Ok(Err(error)) => error,
            Err(_) => anyhow!(
                "Agent didn't respond within {}.",
                humantime::format_duration(self.rpc_timeout)
            ),
        };

        error!(job.id = %job_id, agent.id = %agent.id, "Agent call failed: {error:?}");
        Err(JobLifecycleError::ProtocolError {
            job_id,
            agent_id: agent.id,
            error,
        })
    }

    async fn persist_status(
        &self,
        job: Job,
        status: JobStatus,
        operator_id: i64,
    ) -> Result<(), JobLifecycleError> {
        let job_id = job.id;
        // Preserve timestamp only up to seconds.
        let updated_at =
            OffsetDateTime::from_unix_timestamp(OffsetDateTime::now_utc().unix_timestamp())
                .unwrap_or(job.updated_at);
        let job = Job {
            status,
            updater: operator_id,
            updated_at,
            ..job
        };

        if let Err(error) = self.store.save_job(&job).await {
            error!(
                job.id = %job_id,
                job.status = ?status,
                "Failed to persist job status: {error:?}"
            );
            return Err(JobLifecycleError::PersistenceError { job_id, error });
        }

        info!(
            job.id = %job_id,
            agent.id = %job.agent_id,
            job.status = ?status,
            job.updater = operator_id,
            "Job status changed."
        );
        Ok(())
    }
}
