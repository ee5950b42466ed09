use crate::agents::AgentId;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobsUpdateParams {
    pub name: Option<String>,
    pub group_id: Option<i64>,
    pub agent_id: Option<AgentId>,
    pub dir: Option<String>,
    pub program: Option<String>,
    pub args: Option<String>,
    pub std_out: Option<String>,
    pub std_err: Option<String>,
    pub spec: Option<String>,
    pub timeout: Option<u32>,
    pub is_monitor: Option<bool>,
    /// ID of the operator that updates the job.
    #[serde(default)]
    pub operator_id: i64,
}

impl JobsUpdateParams {
    /// Indicates whether the params don't change any job field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.group_id.is_none()
            && self.agent_id.is_none()
            && self.dir.is_none()
            && self.program.is_none()
            && self.args.is_none()
            && self.std_out.is_none()
            && self.std_err.is_none()
            && self.spec.is_none()
            && self.timeout.is_none()
            && self.is_monitor.is_none()
    }
}
