use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobsLifecycleParams {
    /// ID of the operator that requests the status change.
    #[serde(default)]
    pub operator_id: i64,
}
