use crate::agents::AgentId;
use anyhow::Context;
use serde::Serialize;
use std::net::{IpAddr, SocketAddr};
use time::OffsetDateTime;
use url::Url;

/// Remote execution agent that runs scheduled jobs on behalf of the controller.
#[derive(Serialize, Debug, Eq, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub ip: IpAddr,
    pub port: u16,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
}

impl Agent {
    /// Socket address the agent API listens on.
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }

    /// Base URL of the agent API.
    pub fn endpoint(&self) -> anyhow::Result<Url> {
        let address = self.address();
        Url::parse(&format!("http://{address}/"))
            .with_context(|| format!("Cannot build agent endpoint ({address})."))
    }
}
