use serde_derive::{Deserialize, Serialize};

/// Configuration for the job records.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct JobsConfig {
    /// Number of jobs returned by a single list page.
    pub page_size: u32,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self { page_size: 20 }
    }
}
