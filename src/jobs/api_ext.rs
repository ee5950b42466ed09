mod job_details;
mod jobs_create_params;
mod jobs_lifecycle_params;
mod jobs_list_params;
mod jobs_page;
mod jobs_update_params;

pub use self::{
    job_details::JobDetails, jobs_create_params::JobsCreateParams,
    jobs_lifecycle_params::JobsLifecycleParams, jobs_list_params::JobsListParams,
    jobs_page::JobsPage, jobs_update_params::JobsUpdateParams,
};
use crate::{
    agents::{AgentClient, AgentId},
    api::Api,
    database::Database,
    error::{Error as CronwardError, ErrorKind},
    jobs::{CronExt, Job, JobId, JobLifecycle, JobStatus},
};
use anyhow::{anyhow, bail};
use croner::Cron;
use std::collections::HashMap;
use time::OffsetDateTime;
use tracing::info;

/// Maximum length of the job name.
const MAX_JOB_NAME_LENGTH: usize = 100;

/// API extension to work with the job records and their lifecycle.
pub struct JobsApi<'a, C: AgentClient> {
    api: &'a Api<C>,
}

impl<'a, C: AgentClient> JobsApi<'a, C> {
    /// Creates Jobs API.
    pub fn new(api: &'a Api<C>) -> Self {
        Self { api }
    }

    /// Retrieves the job with the specified ID.
    pub async fn get_job(&self, id: JobId) -> anyhow::Result<Option<Job>> {
        self.api.db.get_job(id).await
    }

    /// Retrieves a page of jobs that aren't deleted, newest first.
    pub async fn get_jobs(&self, params: JobsListParams) -> anyhow::Result<JobsPage> {
        let page = params.page.unwrap_or(1);
        if page == 0 {
            bail!(CronwardError::client("Page number should be greater than 0."));
        }

        let (jobs, total) = self
            .api
            .db
            .get_jobs(params.agent, page, self.api.config.jobs.page_size)
            .await?;
        let agent_addresses = self
            .api
            .db
            .get_agents()
            .await?
            .into_iter()
            .map(|agent| (agent.id, agent.address()))
            .collect::<HashMap<_, _>>();

        Ok(JobsPage {
            jobs: jobs
                .into_iter()
                .map(|job| JobDetails {
                    agent_address: agent_addresses.get(&job.agent_id).copied(),
                    job,
                })
                .collect(),
            total,
        })
    }

    /// Retrieves the job with the specified ID along with the address of its agent.
    pub async fn get_job_details(&self, id: JobId) -> anyhow::Result<Option<JobDetails>> {
        let Some(job) = self.get_job(id).await? else {
            return Ok(None);
        };

        let agent_address = self
            .api
            .db
            .get_agent(job.agent_id)
            .await?
            .map(|agent| agent.address());
        Ok(Some(JobDetails { job, agent_address }))
    }

    /// Creates a new job in the `Stopped` status.
    pub async fn create_job(&self, params: JobsCreateParams) -> anyhow::Result<Job> {
        // Preserve timestamp only up to seconds.
        let created_at =
            OffsetDateTime::from_unix_timestamp(OffsetDateTime::now_utc().unix_timestamp())?;
        let job = Job {
            id: JobId::default(),
            name: params.name.trim().to_string(),
            group_id: params.group_id,
            agent_id: params.agent_id,
            dir: params.dir,
            program: params.program,
            args: params.args,
            std_out: params.std_out,
            std_err: params.std_err,
            spec: params.spec,
            timeout: params.timeout,
            is_monitor: params.is_monitor,
            status: JobStatus::Stopped,
            creator: params.operator_id,
            updater: params.operator_id,
            created_at,
            updated_at: created_at,
        };

        self.validate_job(&job).await?;

        let id = self.api.db.insert_job(&job).await?;
        info!(job.id = %id, agent.id = %job.agent_id, "Job created.");

        Ok(Job { id, ..job })
    }

    /// Updates job fields, the job status is never changed.
    pub async fn update_job(&self, id: JobId, params: JobsUpdateParams) -> anyhow::Result<Job> {
        if params.is_empty() {
            bail!(CronwardError::client(format!(
                "At least one job property should be provided ({id})."
            )));
        }

        let _lock = self.api.job_locks.lock(id).await;

        let Some(existing_job) = self.get_job(id).await? else {
            bail!(CronwardError::not_found(format!("Job ({id}) is not found.")));
        };

        if existing_job.status == JobStatus::Deleted {
            bail!(CronwardError::new(
                anyhow!("Job ({id}) is deleted and cannot be updated."),
                ErrorKind::Conflict
            ));
        }

        // A running job stays on the agent that holds it until it's paused.
        if existing_job.status == JobStatus::Running
            && params
                .agent_id
                .is_some_and(|agent_id| agent_id != existing_job.agent_id)
        {
            bail!(CronwardError::new(
                anyhow!(
                    "Job ({id}) is running on agent ({}), pause the job first to move it to \
                     another agent.",
                    existing_job.agent_id
                ),
                ErrorKind::Conflict
            ));
        }

        let job = Job {
            name: params
                .name
                .map(|name| name.trim().to_string())
                .unwrap_or(existing_job.name),
            group_id: params.group_id.unwrap_or(existing_job.group_id),
            agent_id: params.agent_id.unwrap_or(existing_job.agent_id),
            dir: params.dir.unwrap_or(existing_job.dir),
            program: params.program.unwrap_or(existing_job.program),
            args: params.args.unwrap_or(existing_job.args),
            std_out: params.std_out.unwrap_or(existing_job.std_out),
            std_err: params.std_err.unwrap_or(existing_job.std_err),
            spec: params.spec.unwrap_or(existing_job.spec),
            timeout: params.timeout.unwrap_or(existing_job.timeout),
            is_monitor: params.is_monitor.unwrap_or(existing_job.is_monitor),
            updater: params.operator_id,
            updated_at: OffsetDateTime::from_unix_timestamp(
                OffsetDateTime::now_utc().unix_timestamp(),
            )?,
            ..existing_job
        };

        self.validate_job(&job).await?;

        self.api.db.update_job(&job).await?;
        info!(job.id = %id, agent.id = %job.agent_id, "Job updated.");

        Ok(job)
    }

    /// Schedules the job on its agent.
    pub async fn start_job(&self, id: JobId, operator_id: i64) -> anyhow::Result<()> {
        Ok(self
            .api
            .job_lifecycle()
            .start(id, operator_id)
            .await
            .map_err(CronwardError::from)?)
    }

    /// Pushes the current job definition to its agent.
    pub async fn restart_job(&self, id: JobId, operator_id: i64) -> anyhow::Result<()> {
        Ok(self
            .api
            .job_lifecycle()
            .restart(id, operator_id)
            .await
            .map_err(CronwardError::from)?)
    }

    /// Removes the job from its agent.
    pub async fn pause_job(&self, id: JobId, operator_id: i64) -> anyhow::Result<()> {
        Ok(self
            .api
            .job_lifecycle()
            .pause(id, operator_id)
            .await
            .map_err(CronwardError::from)?)
    }

    /// Soft-deletes the job.
    pub async fn delete_job(&self, id: JobId, operator_id: i64) -> anyhow::Result<()> {
        Ok(self
            .api
            .job_lifecycle()
            .delete(id, operator_id)
            .await
            .map_err(CronwardError::from)?)
    }

    async fn validate_job(&self, job: &Job) -> anyhow::Result<()> {
        if job.name.is_empty() {
            bail!(CronwardError::client("Job name cannot be empty."));
        }

        if job.name.len() > MAX_JOB_NAME_LENGTH {
            bail!(CronwardError::client(format!(
                "Job name cannot be longer than {MAX_JOB_NAME_LENGTH} characters."
            )));
        }

        for (property, value) in [
            ("directory", &job.dir),
            ("program", &job.program),
            ("standard output path", &job.std_out),
            ("standard error path", &job.std_err),
        ] {
            if value.trim().is_empty() {
                bail!(CronwardError::client(format!(
                    "Job {property} cannot be empty."
                )));
            }
        }

        if let Err(err) = Cron::parse_pattern(&job.spec) {
            bail!(CronwardError::client_with_root_cause(
                anyhow!("Failed to parse schedule `{}`: {err:?}", job.spec)
                    .context("Job schedule must be a valid cron expression.")
            ));
        }

        self.ensure_agent_exists(job.agent_id).await
    }

    async fn ensure_agent_exists(&self, agent_id: AgentId) -> anyhow::Result<()> {
        if self.api.agents().get_agent(agent_id).await?.is_none() {
            bail!(CronwardError::client(format!(
                "Agent ({agent_id}) is not registered."
            )));
        }

        Ok(())
    }
}

impl<C: AgentClient> Api<C> {
    /// Returns an API to work with jobs.
    pub fn jobs(&self) -> JobsApi<'_, C> {
        JobsApi::new(self)
    }

    /// Returns job lifecycle orchestrator backed by the primary database.
    pub fn job_lifecycle(&self) -> JobLifecycle<'_, Database, Database, C> {
        JobLifecycle::new(
            &self.db,
            &self.db,
            &self.agent_client,
            &self.job_locks,
            self.config.agents.rpc_timeout,
        )
    }
}
