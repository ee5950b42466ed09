mod agents_create_params;

pub use self::agents_create_params::AgentsCreateParams;
use crate::{
    agents::{Agent, AgentClient, AgentId},
    api::Api,
    error::Error as CronwardError,
};
use anyhow::bail;
use time::OffsetDateTime;
use tracing::info;

/// Maximum length of the agent name.
const MAX_AGENT_NAME_LENGTH: usize = 100;

/// API extension to work with the agent directory.
pub struct AgentsApi<'a, C: AgentClient> {
    api: &'a Api<C>,
}

impl<'a, C: AgentClient> AgentsApi<'a, C> {
    /// Creates Agents API.
    pub fn new(api: &'a Api<C>) -> Self {
        Self { api }
    }

    /// Retrieves the agent with the specified ID.
    pub async fn get_agent(&self, id: AgentId) -> anyhow::Result<Option<Agent>> {
        self.api.db.get_agent(id).await
    }

    /// Retrieves all registered agents.
    pub async fn get_agents(&self) -> anyhow::Result<Vec<Agent>> {
        self.api.db.get_agents().await
    }

    /// Registers a new agent.
    pub async fn create_agent(&self, params: AgentsCreateParams) -> anyhow::Result<Agent> {
        let name = params.name.trim();
        if name.is_empty() {
            bail!(CronwardError::client("Agent name cannot be empty."));
        }

        if name.len() > MAX_AGENT_NAME_LENGTH {
            bail!(CronwardError::client(format!(
                "Agent name cannot be longer than {MAX_AGENT_NAME_LENGTH} characters."
            )));
        }

        if params.port == 0 {
            bail!(CronwardError::client("Agent port cannot be zero."));
        }

        let agents = self.get_agents().await?;
        if agents
            .iter()
            .any(|agent| agent.ip == params.ip && agent.port == params.port)
        {
            bail!(CronwardError::client(format!(
                "Agent with address {}:{} is already registered.",
                params.ip, params.port
            )));
        }

        let agent = self
            .api
            .db
            .insert_agent(
                name,
                params.ip,
                params.port,
                // Preserve timestamp only up to seconds.
                OffsetDateTime::from_unix_timestamp(OffsetDateTime::now_utc().unix_timestamp())?,
            )
            .await?;
        info!(
            agent.id = %agent.id,
            agent.ip = %agent.ip,
            agent.port = agent.port,
            "Agent registered."
        );

        Ok(agent)
    }
}

impl<C: AgentClient> Api<C> {
    /// Returns an API to work with agents.
    pub fn agents(&self) -> AgentsApi<'_, C> {
        AgentsApi::new(self)
    }
}
