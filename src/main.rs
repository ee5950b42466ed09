#![deny(warnings)]
#![cfg_attr(test, allow(deprecated))]

mod agents;
mod api;
mod config;
mod database;
mod error;
mod jobs;
mod server;

use crate::config::{Config, RawConfig};
use anyhow::anyhow;
use clap::{Arg, Command, crate_authors, crate_description, crate_version, value_parser};
use std::env;
use tracing::info;

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    if env::var("RUST_LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt().json().flatten_event(true).init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let matches = Command::new("Cronward API server")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("CONFIG")
                .env("CRONWARD_CONFIG")
                .short('c')
                .long("config")
                .default_value("cronward.toml")
                .help("Path to the application configuration file."),
        )
        .arg(
            Arg::new("PORT")
                .env("CRONWARD_PORT")
                .short('p')
                .long("port")
                .value_parser(value_parser!(u16))
                .help("Defines a TCP port to listen on."),
        )
        .get_matches();

    let raw_config = RawConfig::read_from_file(
        matches
            .get_one::<String>("CONFIG")
            .ok_or_else(|| anyhow!("<CONFIG> argument is not provided."))?,
    )?;

    info!("Cronward raw configuration: {raw_config:?}.");

    // CLI argument takes precedence.
    let http_port = matches
        .get_one::<u16>("PORT")
        .copied()
        .unwrap_or(raw_config.port);
    server::run(Config {
        http_port,
        ..Config::from(raw_config)
    })
}

#[cfg(test)]
mod tests {
    use crate::{
        agents::{Agent, AgentId, tests::MockAgentClient},
        api::Api,
        config::Config,
        database::tests::mock_db,
        jobs::{Job, JobId, JobStatus},
    };
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};
    use time::OffsetDateTime;

    pub use crate::server::tests::*;

    pub fn mock_config() -> anyhow::Result<Config> {
        Ok(Config {
            version: "0.1.0".to_string(),
            http_port: 1234,
            db: Default::default(),
            agents: Default::default(),
            jobs: Default::default(),
        })
    }

    pub async fn mock_api() -> anyhow::Result<Api<MockAgentClient>> {
        mock_api_with_config(mock_config()?).await
    }

    pub async fn mock_api_with_config(config: Config) -> anyhow::Result<Api<MockAgentClient>> {
        Ok(Api::new(config, mock_db().await?, MockAgentClient::default()))
    }

    pub fn mock_agent(id: i64) -> anyhow::Result<Agent> {
        mock_agent_with_address(
            id,
            SocketAddr::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, id as u8)), 7070),
        )
    }

    pub fn mock_agent_with_address(id: i64, address: SocketAddr) -> anyhow::Result<Agent> {
        Ok(Agent {
            id: AgentId::try_from(id)?,
            name: format!("agent-{id}"),
            ip: address.ip(),
            port: address.port(),
            // January 1, 2000 10:00:00
            created_at: OffsetDateTime::from_unix_timestamp(946720800)?,
        })
    }

    pub fn mock_job(id: i64, agent_id: i64) -> anyhow::Result<Job> {
        // January 1, 2000 10:00:00
        let created_at = OffsetDateTime::from_unix_timestamp(946720800)?;
        Ok(Job {
            id: JobId::try_from(id)?,
            name: "backup".to_string(),
            group_id: 0,
            agent_id: AgentId::try_from(agent_id)?,
            dir: "/var/lib/backup".to_string(),
            program: "/usr/bin/backup".to_string(),
            args: "--full".to_string(),
            std_out: "/var/log/backup.out".to_string(),
            std_err: "/var/log/backup.err".to_string(),
            spec: "0 0 * * * *".to_string(),
            timeout: 60,
            is_monitor: false,
            status: JobStatus::Stopped,
            creator: 1,
            updater: 1,
            created_at,
            updated_at: created_at,
        })
    }
}
