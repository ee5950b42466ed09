use crate::{
    agents::{AgentClient, HttpAgentClient},
    api::Api,
    config::Config,
    server::status::Status,
};

pub struct AppState<C: AgentClient = HttpAgentClient> {
    pub status: Status,
    pub api: Api<C>,
}

impl<C: AgentClient> AppState<C> {
    pub fn new(config: Config, api: Api<C>) -> Self {
        Self {
            status: Status {
                version: config.version,
            },
            api,
        }
    }
}
