use crate::{agents::AgentClient, config::Config, database::Database, jobs::JobLocks};

/// Collection of the APIs shared by all request handlers. Separate APIs are implemented as
/// extensions in every module.
pub struct Api<C: AgentClient> {
    pub config: Config,
    pub db: Database,
    pub agent_client: C,
    pub job_locks: JobLocks,
}

impl<C: AgentClient> Api<C> {
    /// Instantiates APIs collection with the specified config, database and agent client.
    pub fn new(config: Config, db: Database, agent_client: C) -> Self {
        Self {
            config,
            db,
            agent_client,
            job_locks: JobLocks::default(),
        }
    }
}
