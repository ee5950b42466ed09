mod api_ext;
mod cron_ext;
mod database_ext;
mod job;
mod job_id;
mod job_lifecycle;
mod job_lifecycle_error;
mod job_locks;
mod job_status;
mod job_store;

pub use self::{
    api_ext::{
        JobDetails, JobsCreateParams, JobsLifecycleParams, JobsListParams,
        JobsUpdateParams,
    },
    cron_ext::CronExt,
    job::Job,
    job_id::JobId,
    job_lifecycle::JobLifecycle,
    job_lifecycle_error::JobLifecycleError,
    job_locks::JobLocks,
    job_status::JobStatus,
    job_store::JobStore,
};

#[cfg(test)]
pub use self::api_ext::JobsPage;
