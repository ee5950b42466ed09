use crate::jobs::JobDetails;
use serde::Serialize;

/// Page of the jobs along with the total number of jobs matching the list filter.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct JobsPage {
    pub jobs: Vec<JobDetails>,
    pub total: u64,
}
