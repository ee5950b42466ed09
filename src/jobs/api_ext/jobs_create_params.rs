use crate::agents::AgentId;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobsCreateParams {
    pub name: String,
    #[serde(default)]
    pub group_id: i64,
    pub agent_id: AgentId,
    pub dir: String,
    pub program: String,
    #[serde(default)]
    pub args: String,
    pub std_out: String,
    pub std_err: String,
    pub spec: String,
    #[serde(default)]
    pub timeout: u32,
    #[serde(default)]
    pub is_monitor: bool,
    /// ID of the operator that creates the job.
    #[serde(default)]
    pub operator_id: i64,
}
