use crate::{
    database::Database,
    jobs::{Job, JobId},
};
use futures::future::BoxFuture;

/// Keyed storage for the job records used by the job lifecycle operations.
pub trait JobStore: Sync + Send + 'static {
    fn find_job(&self, id: JobId) -> BoxFuture<'_, anyhow::Result<Option<Job>>>;

    fn save_job<'a>(&'a self, job: &'a Job) -> BoxFuture<'a, anyhow::Result<()>>;
}

impl JobStore for Database {
    fn find_job(&self, id: JobId) -> BoxFuture<'_, anyhow::Result<Option<Job>>> {
        Box::pin(self.get_job(id))
    }

    fn save_job<'a>(&'a self, job: &'a Job) -> BoxFuture<'a, anyhow::Result<()>> {
        Box::pin(self.update_job(job))
    }
}
