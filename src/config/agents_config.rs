use serde_derive::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};
use std::time::Duration;

/// Configuration for the communication with the remote execution agents.
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AgentsConfig {
    /// Upper bound for a single agent call, including retries. Every attempt gets an equal share
    /// of it, see [`AgentsConfig::attempt_timeout`]. Default is 10 seconds.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "default_rpc_timeout")]
    pub rpc_timeout: Duration,
    /// Timeout for idle sockets being kept-alive. Default is 5 seconds.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "default_pool_idle_timeout")]
    pub pool_idle_timeout: Duration,
    /// Maximum number of retries (with exponential backoff) for agent calls that fail because of
    /// transient errors. Setting this to 0 will disable retries. The default value is 3.
    pub max_retries: u32,
    /// Defines whether agent connections should emit verbose logs. Default is false.
    pub verbose: bool,
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            rpc_timeout: default_rpc_timeout(),
            pool_idle_timeout: default_pool_idle_timeout(),
            max_retries: 3,
            verbose: false,
        }
    }
}

impl AgentsConfig {
    /// Timeout for a single HTTP attempt: the call timeout split evenly across all attempts.
    pub fn attempt_timeout(&self) -> Duration {
        self.rpc_timeout / self.max_retries.saturating_add(1)
    }
}

const fn default_rpc_timeout() -> Duration {
    Duration::from_secs(10)
}

const fn default_pool_idle_timeout() -> Duration {
    Duration::from_secs(5)
}

#[cfg(test)]
mod tests {
    use super::AgentsConfig;
    use insta::assert_debug_snapshot;
    use std::time::Duration;

    #[test]
    fn default() {
        assert_debug_snapshot!(AgentsConfig::default(), @r###"
        AgentsConfig {
            rpc_timeout: 10s,
            pool_idle_timeout: 5s,
            max_retries: 3,
            verbose: false,
        }
        "###);
    }

    #[test]
    fn attempt_timeout() {
        assert_eq!(
            AgentsConfig::default().attempt_timeout(),
            Duration::from_millis(2500)
        );
        assert_eq!(
            AgentsConfig {
                rpc_timeout: Duration::from_secs(3),
                max_retries: 0,
                ..Default::default()
            }
            .attempt_timeout(),
            Duration::from_secs(3)
        );
        assert_eq!(
            AgentsConfig {
                max_retries: u32::MAX,
                ..Default::default()
            }
            .attempt_timeout(),
            Duration::from_secs(10) / u32::MAX
        );
    }

    #[test]
    fn deserialization() {
        let config: AgentsConfig = toml::from_str(
            r#"
        rpc_timeout = 10000
        pool_idle_timeout = 5000
        max_retries = 3
        verbose = false
    "#,
        )
        .unwrap();
        assert_eq!(config, AgentsConfig::default());

        let config: AgentsConfig = toml::from_str(
            r#"
        rpc_timeout = 2500
        max_retries = 0
        verbose = true
    "#,
        )
        .unwrap();
        assert_eq!(
            config,
            AgentsConfig {
                rpc_timeout: Duration::from_millis(2500),
                pool_idle_timeout: Duration::from_secs(5),
                max_retries: 0,
                verbose: true,
            }
        );
    }
}
