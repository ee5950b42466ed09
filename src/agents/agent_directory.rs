use crate::{
    agents::{Agent, AgentId},
    database::Database,
};
use futures::future::BoxFuture;

/// Resolves agent identifiers to the agent connection details.
pub trait AgentDirectory: Sync + Send + 'static {
    fn resolve_agent(&self, id: AgentId) -> BoxFuture<'_, anyhow::Result<Option<Agent>>>;
}

impl AgentDirectory for Database {
    fn resolve_agent(&self, id: AgentId) -> BoxFuture<'_, anyhow::Result<Option<Agent>>> {
        Box::pin(self.get_agent(id))
    }
}
