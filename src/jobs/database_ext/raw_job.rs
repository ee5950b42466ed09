use crate::jobs::{Job, JobStatus};
use time::OffsetDateTime;

#[derive(sqlx::FromRow, Debug, Eq, PartialEq, Clone)]
pub(super) struct RawJob {
    pub id: i64,
    pub name: String,
    pub group_id: i64,
    pub agent_id: i64,
    pub dir: String,
    pub program: String,
    pub args: String,
    pub std_out: String,
    pub std_err: String,
    pub spec: String,
    pub timeout: i64,
    pub is_monitor: bool,
    pub status: i64,
    pub creator: i64,
    pub updater: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<RawJob> for Job {
    type Error = anyhow::Error;

    fn try_from(raw_job: RawJob) -> Result<Self, Self::Error> {
        Ok(Job {
            id: raw_job.id.try_into()?,
            name: raw_job.name,
            group_id: raw_job.group_id,
            agent_id: raw_job.agent_id.try_into()?,
            dir: raw_job.dir,
            program: raw_job.program,
            args: raw_job.args,
            std_out: raw_job.std_out,
            std_err: raw_job.std_err,
            spec: raw_job.spec,
            timeout: raw_job.timeout.try_into()?,
            is_monitor: raw_job.is_monitor,
            status: JobStatus::try_from(raw_job.status)?,
            creator: raw_job.creator,
            updater: raw_job.updater,
            created_at: OffsetDateTime::from_unix_timestamp(raw_job.created_at)?,
            updated_at: OffsetDateTime::from_unix_timestamp(raw_job.updated_at)?,
        })
    }
}

impl From<&Job> for RawJob {
    fn from(job: &Job) -> Self {
        Self {
            id: *job.id,
            name: job.name.clone(),
            group_id: job.group_id,
            agent_id: *job.agent_id,
            dir: job.dir.clone(),
            program: job.program.clone(),
            args: job.args.clone(),
            std_out: job.std_out.clone(),
            std_err: job.std_err.clone(),
            spec: job.spec.clone(),
            timeout: job.timeout.into(),
            is_monitor: job.is_monitor,
            status: job.status.into(),
            creator: job.creator,
            updater: job.updater,
            created_at: job.created_at.unix_timestamp(),
            updated_at: job.updated_at.unix_timestamp(),
        }
    }
}
