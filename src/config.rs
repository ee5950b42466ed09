mod agents_config;
mod database_config;
mod jobs_config;
mod raw_config;

pub use self::{
    agents_config::AgentsConfig, database_config::DatabaseConfig, jobs_config::JobsConfig,
    raw_config::RawConfig,
};

/// Main server config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Version of the Cronward binary.
    pub version: String,
    /// HTTP port to bind API server to.
    pub http_port: u16,
    /// Database configuration.
    pub db: DatabaseConfig,
    /// Configuration for the communication with the execution agents.
    pub agents: AgentsConfig,
    /// Configuration for the job records.
    pub jobs: JobsConfig,
}

impl AsRef<Config> for Config {
    fn as_ref(&self) -> &Config {
        self
    }
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            http_port: raw_config.port,
            db: raw_config.db,
            agents: raw_config.agents,
            jobs: raw_config.jobs,
        }
    }
}
