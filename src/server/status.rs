use serde::Serialize;

/// Public status of the API server.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Status {
    pub version: String,
}
