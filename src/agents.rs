mod agent;
mod agent_client;
mod agent_directory;
mod agent_id;
mod agent_job;
mod api_ext;
mod database_ext;
mod http_agent_client;

pub use self::{
    agent::Agent, agent_client::AgentClient, agent_directory::AgentDirectory, agent_id::AgentId,
    agent_job::AgentJob, api_ext::AgentsCreateParams, http_agent_client::HttpAgentClient,
};
