use crate::{
    agents::{Agent, AgentClient, AgentJob},
    config::AgentsConfig,
    jobs::JobId,
};
use anyhow::{Context, bail};
use futures::future::BoxFuture;
use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use url::Url;

/// Agent client that talks to the agent JSON API over HTTP.
#[derive(Clone)]
pub struct HttpAgentClient {
    http_client: ClientWithMiddleware,
}

impl HttpAgentClient {
    /// Creates a new HTTP agent client. Transient failures, timed out attempts included, are
    /// retried with exponential backoff.
    pub fn create(config: &AgentsConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.attempt_timeout())
            .pool_idle_timeout(config.pool_idle_timeout)
            .connection_verbose(config.verbose)
            .build()
            .context("Cannot build agent HTTP client.")?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        Ok(Self {
            http_client: ClientBuilder::new(client)
                .with(TracingMiddleware::default())
                .with(RetryTransientMiddleware::new_with_policy(retry_policy))
                .build(),
        })
    }

    async fn get_agent_job(
        &self,
        agent: &Agent,
        job_id: JobId,
    ) -> anyhow::Result<Option<AgentJob>> {
        let response = self
            .http_client
            .get(jobs_url(agent, Some(job_id))?)
            .send()
            .await
            .with_context(|| format!("Cannot query job ({job_id}) on agent ({}).", agent.id))?;

        let status_code = response.status();
        if status_code == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if status_code.is_success() {
            return response.json().await.with_context(|| {
                format!("Cannot deserialize job ({job_id}) of agent ({}).", agent.id)
            });
        }

        bail!(
            "Failed to query job ({job_id}) on agent ({}): {}",
            agent.id,
            response.text().await?
        )
    }

    async fn add_agent_job(&self, agent: &Agent, job: &AgentJob) -> anyhow::Result<()> {
        let response = self
            .http_client
            .post(jobs_url(agent, None)?)
            .json(job)
            .send()
            .await
            .with_context(|| format!("Cannot add job ({}) to agent ({}).", job.id, agent.id))?;

        if response.status().is_success() {
            return Ok(());
        }

        bail!(
            "Failed to add job ({}) to agent ({}): {}",
            job.id,
            agent.id,
            response.text().await?
        )
    }

    async fn update_agent_job(&self, agent: &Agent, job: &AgentJob) -> anyhow::Result<()> {
        let response = self
            .http_client
            .put(jobs_url(agent, Some(job.id))?)
            .json(job)
            .send()
            .await
            .with_context(|| format!("Cannot update job ({}) on agent ({}).", job.id, agent.id))?;

        if response.status().is_success() {
            return Ok(());
        }

        bail!(
            "Failed to update job ({}) on agent ({}): {}",
            job.id,
            agent.id,
            response.text().await?
        )
    }

    async fn remove_agent_job(&self, agent: &Agent, job_id: JobId) -> anyhow::Result<()> {
        let response = self
            .http_client
            .delete(jobs_url(agent, Some(job_id))?)
            .send()
            .await
            .with_context(|| {
                format!("Cannot remove job ({job_id}) from agent ({}).", agent.id)
            })?;

        // Agent doesn't know the job, there is nothing to remove.
        let status_code = response.status();
        if status_code.is_informational()
            || status_code.is_success()
            || status_code == StatusCode::NOT_FOUND
        {
            return Ok(());
        }

        bail!(
            "Failed to remove job ({job_id}) from agent ({}): {}",
            agent.id,
            response.text().await?
        )
    }
}

impl AgentClient for HttpAgentClient {
    fn get_job<'a>(
        &'a self,
        agent: &'a Agent,
        job_id: JobId,
    ) -> BoxFuture<'a, anyhow::Result<Option<AgentJob>>> {
        Box::pin(self.get_agent_job(agent, job_id))
    }

    fn add_job<'a>(
        &'a self,
        agent: &'a Agent,
        job: &'a AgentJob,
    ) -> BoxFuture<'a, anyhow::Result<()>> {
        Box::pin(self.add_agent_job(agent, job))
    }

    fn update_job<'a>(
        &'a self,
        agent: &'a Agent,
        job: &'a AgentJob,
    ) -> BoxFuture<'a, anyhow::Result<()>> {
        Box::pin(self.update_agent_job(agent, job))
    }

    fn remove_job<'a>(
        &'a self,
        agent: &'a Agent,
        job_id: JobId,
    ) -> BoxFuture<'a, anyhow::Result<()>> {
        Box::pin(self.remove_agent_job(agent, job_id))
    }
}

fn jobs_url(agent: &Agent, job_id: Option<JobId>) -> anyhow::Result<Url> {
    let path = match job_id {
        Some(job_id) => format!("api/jobs/{job_id}"),
        None => "api/jobs".to_string(),
    };

    agent
        .endpoint()?
        .join(&path)
        .with_context(|| format!("Cannot build agent URL ({path})."))
}
