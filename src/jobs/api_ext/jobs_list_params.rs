use crate::agents::AgentId;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct JobsListParams {
    /// Only list jobs owned by the agent.
    pub agent: Option<AgentId>,
    /// 1-based page number.
    pub page: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::JobsListParams;
    use crate::agents::AgentId;

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::from_str::<JobsListParams>(r#"{ "agent": 2, "page": 3 }"#)?,
            JobsListParams {
                agent: Some(AgentId::try_from(2)?),
                page: Some(3),
            }
        );
        assert_eq!(
            serde_json::from_str::<JobsListParams>("{}")?,
            JobsListParams::default()
        );

        Ok(())
    }
}
