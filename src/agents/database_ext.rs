mod raw_agent;

use self::raw_agent::RawAgent;
use crate::{
    agents::{Agent, AgentId},
    database::Database,
};
use sqlx::query_as;
use std::net::IpAddr;
use time::OffsetDateTime;

/// Extends primary database with the agent directory-related methods.
impl Database {
    /// Retrieves agent from the `agents` table using agent ID.
    pub async fn get_agent(&self, id: AgentId) -> anyhow::Result<Option<Agent>> {
        query_as::<_, RawAgent>(
            r#"
SELECT id, name, ip, port, created_at
FROM agents
WHERE id = ?1
            "#,
        )
        .bind(*id)
        .fetch_optional(&self.pool)
        .await?
        .map(Agent::try_from)
        .transpose()
    }

    /// Retrieves all registered agents ordered by ID.
    pub async fn get_agents(&self) -> anyhow::Result<Vec<Agent>> {
        query_as::<_, RawAgent>(
            r#"
SELECT id, name, ip, port, created_at
FROM agents
ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Agent::try_from)
        .collect()
    }

    /// Inserts agent to the `agents` table and returns the stored agent with the assigned ID, fails
    /// if an agent with the same address already exists.
    pub async fn insert_agent(
        &self,
        name: &str,
        ip: IpAddr,
        port: u16,
        created_at: OffsetDateTime,
    ) -> anyhow::Result<Agent> {
        let raw_agent = query_as::<_, RawAgent>(
            r#"
INSERT INTO agents (name, ip, port, created_at)
VALUES ( ?1, ?2, ?3, ?4 )
RETURNING id, name, ip, port, created_at
            "#,
        )
        .bind(name)
        .bind(ip.to_string())
        .bind(i64::from(port))
        .bind(created_at.unix_timestamp())
        .fetch_one(&self.pool)
        .await?;

        Agent::try_from(raw_agent)
    }
}

#[cfg(test)]
mod tests {
    use crate::{agents::AgentId, database::tests::mock_db};
    use insta::assert_debug_snapshot;
    use std::net::{IpAddr, Ipv4Addr};
    use time::OffsetDateTime;

    #[tokio::test]
    async fn can_insert_and_retrieve_agents() -> anyhow::Result<()> {
        let db = mock_db().await?;
        // January 1, 2000 10:00:00
        let created_at = OffsetDateTime::from_unix_timestamp(946720800)?;

        let agent_one = db
            .insert_agent("a1", IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 7070, created_at)
            .await?;
        let agent_two = db
            .insert_agent("a2", IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)), 7070, created_at)
            .await?;
        assert_eq!(*agent_one.id, 1);
        assert_eq!(*agent_two.id, 2);

        assert_debug_snapshot!(db.get_agent(agent_one.id).await?, @r###"
        Some(
            Agent {
                id: AgentId(
                    1,
                ),
                name: "a1",
                ip: 10.0.0.1,
                port: 7070,
                created_at: 2000-01-01 10:00:00.0 +00:00:00,
            },
        )
        "###);
        assert_eq!(db.get_agents().await?, vec![agent_one, agent_two]);
        assert!(db.get_agent(AgentId::try_from(3)?).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_insert_agent_with_the_same_address() -> anyhow::Result<()> {
        let db = mock_db().await?;
        let created_at = OffsetDateTime::from_unix_timestamp(946720800)?;

        db.insert_agent("a1", IpAddr::V4(Ipv4Addr::LOCALHOST), 7070, created_at)
            .await?;
        assert!(
            db.insert_agent("a2", IpAddr::V4(Ipv4Addr::LOCALHOST), 7070, created_at)
                .await
                .is_err()
        );
        assert_eq!(db.get_agents().await?.len(), 1);

        Ok(())
    }
}
