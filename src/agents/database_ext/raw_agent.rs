use crate::agents::Agent;
use std::net::IpAddr;
use time::OffsetDateTime;

#[derive(sqlx::FromRow, Debug, Eq, PartialEq, Clone)]
pub(super) struct RawAgent {
    pub id: i64,
    pub name: String,
    pub ip: String,
    pub port: i64,
    pub created_at: i64,
}

impl TryFrom<RawAgent> for Agent {
    type Error = anyhow::Error;

    fn try_from(raw_agent: RawAgent) -> Result<Self, Self::Error> {
        Ok(Agent {
            id: raw_agent.id.try_into()?,
            name: raw_agent.name,
            ip: raw_agent.ip.parse::<IpAddr>()?,
            port: raw_agent.port.try_into()?,
            created_at: OffsetDateTime::from_unix_timestamp(raw_agent.created_at)?,
        })
    }
}
