use crate::config::{AgentsConfig, DatabaseConfig, JobsConfig};
use figment::{Figment, Metadata, Profile, Provider, providers, providers::Format, value};
use serde_derive::{Deserialize, Serialize};

/// Raw configuration structure that is used to read the configuration from the file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RawConfig {
    /// Defines a TCP port to listen on.
    pub port: u16,
    /// Database configuration.
    pub db: DatabaseConfig,
    /// Configuration for the communication with the execution agents.
    pub agents: AgentsConfig,
    /// Configuration for the job records.
    pub jobs: JobsConfig,
}

impl RawConfig {
    /// Reads the configuration from the file (TOML) and merges it with the default values and
    /// `CRONWARD_`-prefixed environment variables.
    pub fn read_from_file(path: &str) -> anyhow::Result<Self> {
        Ok(Figment::from(RawConfig::default())
            .merge(providers::Toml::file(path))
            .merge(providers::Env::prefixed("CRONWARD_").split("__"))
            .extract()?)
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            port: 7171,
            db: DatabaseConfig::default(),
            agents: AgentsConfig::default(),
            jobs: JobsConfig::default(),
        }
    }
}

impl Provider for RawConfig {
    fn metadata(&self) -> Metadata {
        Metadata::named("Cronward main configuration")
    }

    fn data(&self) -> Result<value::Map<Profile, value::Dict>, figment::Error> {
        providers::Serialized::defaults(Self::default()).data()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{AgentsConfig, DatabaseConfig, JobsConfig, RawConfig};
    use insta::assert_debug_snapshot;
    use std::time::Duration;

    #[test]
    fn default() {
        assert_debug_snapshot!(RawConfig::default(), @r###"
        RawConfig {
            port: 7171,
            db: DatabaseConfig {
                url: "sqlite:cronward.db?mode=rwc",
                max_connections: 5,
            },
            agents: AgentsConfig {
                rpc_timeout: 10s,
                pool_idle_timeout: 5s,
                max_retries: 3,
                verbose: false,
            },
            jobs: JobsConfig {
                page_size: 20,
            },
        }
        "###);
    }

    #[test]
    fn deserialization() {
        let config: RawConfig = toml::from_str(
            r#"
        port = 8080

        [db]
        url = 'sqlite::memory:'
        max_connections = 1

        [agents]
        rpc_timeout = 3000
        pool_idle_timeout = 1000
        max_retries = 1
        verbose = true

        [jobs]
        page_size = 50
    "#,
        )
        .unwrap();
        assert_eq!(
            config,
            RawConfig {
                port: 8080,
                db: DatabaseConfig {
                    url: "sqlite::memory:".to_string(),
                    max_connections: 1,
                },
                agents: AgentsConfig {
                    rpc_timeout: Duration::from_secs(3),
                    pool_idle_timeout: Duration::from_secs(1),
                    max_retries: 1,
                    verbose: true,
                },
                jobs: JobsConfig { page_size: 50 },
            }
        );
    }

    #[test]
    fn falls_back_to_defaults_without_file() -> anyhow::Result<()> {
        let config = RawConfig::read_from_file("non-existent-cronward.toml")?;
        assert_eq!(config.db, DatabaseConfig::default());
        assert_eq!(config.jobs, JobsConfig::default());

        Ok(())
    }
}
