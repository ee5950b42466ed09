mod raw_job;

use self::raw_job::RawJob;
use crate::{
    agents::AgentId,
    database::Database,
    jobs::{Job, JobId, JobStatus},
};
use anyhow::bail;
use sqlx::{query, query_as, query_scalar};

/// Extends primary database with the job records-related methods.
impl Database {
    /// Retrieves job from the `jobs` table using job ID.
    pub async fn get_job(&self, id: JobId) -> anyhow::Result<Option<Job>> {
        query_as::<_, RawJob>(
            r#"
SELECT id, name, group_id, agent_id, dir, program, args, std_out, std_err, spec, timeout,
       is_monitor, status, creator, updater, created_at, updated_at
FROM jobs
WHERE id = ?1
            "#,
        )
        .bind(*id)
        .fetch_optional(&self.pool)
        .await?
        .map(Job::try_from)
        .transpose()
    }

    /// Retrieves a page of jobs that aren't deleted, newest first, optionally owned by the
    /// specified agent. Returns jobs and the total number of matching jobs.
    pub async fn get_jobs(
        &self,
        agent_id: Option<AgentId>,
        page: u32,
        page_size: u32,
    ) -> anyhow::Result<(Vec<Job>, u64)> {
        let agent_id = agent_id.map(|agent_id| *agent_id);
        let total: i64 = query_scalar(
            r#"
SELECT COUNT(*)
FROM jobs
WHERE status != ?1 AND (?2 IS NULL OR agent_id = ?2)
            "#,
        )
        .bind(i64::from(JobStatus::Deleted))
        .bind(agent_id)
        .fetch_one(&self.pool)
        .await?;

        let jobs = query_as::<_, RawJob>(
            r#"
SELECT id, name, group_id, agent_id, dir, program, args, std_out, std_err, spec, timeout,
       is_monitor, status, creator, updater, created_at, updated_at
FROM jobs
WHERE status != ?1 AND (?2 IS NULL OR agent_id = ?2)
ORDER BY created_at DESC, id DESC
LIMIT ?3 OFFSET ?4
            "#,
        )
        .bind(i64::from(JobStatus::Deleted))
        .bind(agent_id)
        .bind(i64::from(page_size))
        .bind(i64::from(page.saturating_sub(1)) * i64::from(page_size))
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Job::try_from)
        .collect::<anyhow::Result<Vec<_>>>()?;

        Ok((jobs, total.try_into()?))
    }

    /// Inserts job to the `jobs` table and returns the ID assigned to it. The ID of the provided
    /// job is ignored.
    pub async fn insert_job<J: AsRef<Job>>(&self, job: J) -> anyhow::Result<JobId> {
        let raw_job = RawJob::from(job.as_ref());
        let id: i64 = query_scalar(
            r#"
INSERT INTO jobs (name, group_id, agent_id, dir, program, args, std_out, std_err, spec, timeout,
                  is_monitor, status, creator, updater, created_at, updated_at)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16 )
RETURNING id
            "#,
        )
        .bind(&raw_job.name)
        .bind(raw_job.group_id)
        .bind(raw_job.agent_id)
        .bind(&raw_job.dir)
        .bind(&raw_job.program)
        .bind(&raw_job.args)
        .bind(&raw_job.std_out)
        .bind(&raw_job.std_err)
        .bind(&raw_job.spec)
        .bind(raw_job.timeout)
        .bind(raw_job.is_monitor)
        .bind(raw_job.status)
        .bind(raw_job.creator)
        .bind(raw_job.updater)
        .bind(raw_job.created_at)
        .bind(raw_job.updated_at)
        .fetch_one(&self.pool)
        .await?;

        JobId::try_from(id)
    }

    /// Updates job in the `jobs` table, fails if the job doesn't exist. Creator and creation
    /// timestamp are never updated.
    pub async fn update_job<J: AsRef<Job>>(&self, job: J) -> anyhow::Result<()> {
        let raw_job = RawJob::from(job.as_ref());
        let result = query(
            r#"
UPDATE jobs
SET name = ?2, group_id = ?3, agent_id = ?4, dir = ?5, program = ?6, args = ?7, std_out = ?8,
    std_err = ?9, spec = ?10, timeout = ?11, is_monitor = ?12, status = ?13, updater = ?14,
    updated_at = ?15
WHERE id = ?1
            "#,
        )
        .bind(raw_job.id)
        .bind(&raw_job.name)
        .bind(raw_job.group_id)
        .bind(raw_job.agent_id)
        .bind(&raw_job.dir)
        .bind(&raw_job.program)
        .bind(&raw_job.args)
        .bind(&raw_job.std_out)
        .bind(&raw_job.std_err)
        .bind(&raw_job.spec)
        .bind(raw_job.timeout)
        .bind(raw_job.is_monitor)
        .bind(raw_job.status)
        .bind(raw_job.updater)
        .bind(raw_job.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            bail!("A job ('{}') doesn't exist.", raw_job.id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        agents::AgentId,
        database::tests::mock_db,
        jobs::{Job, JobId, JobStatus},
        tests::mock_job,
    };
    use insta::assert_debug_snapshot;
    use std::ops::Add;
    use time::Duration;

    #[tokio::test]
    async fn can_insert_and_retrieve_jobs() -> anyhow::Result<()> {
        let db = mock_db().await?;

        let job = mock_job(1, 1)?;
        let id = db.insert_job(&job).await?;
        assert_eq!(*id, 1);
        assert_eq!(db.get_job(id).await?, Some(job));

        let another_id = db
            .insert_job(Job {
                name: "cleanup".to_string(),
                ..mock_job(100, 2)?
            })
            .await?;
        assert_eq!(*another_id, 2);
        assert_debug_snapshot!(
            db.get_job(another_id).await?.map(|job| (job.id, job.name, job.agent_id)),
            @r###"
        Some(
            (
                JobId(
                    2,
                ),
                "cleanup",
                AgentId(
                    2,
                ),
            ),
        )
        "###
        );

        assert!(db.get_job(JobId::try_from(3)?).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn can_update_job() -> anyhow::Result<()> {
        let db = mock_db().await?;

        let job = mock_job(1, 1)?;
        db.insert_job(&job).await?;

        let updated_job = Job {
            name: "backup-v2".to_string(),
            status: JobStatus::Running,
            updater: 5,
            updated_at: job.updated_at.add(Duration::hours(1)),
            ..job.clone()
        };
        db.update_job(&updated_job).await?;
        assert_eq!(db.get_job(job.id).await?, Some(updated_job));

        // Creator and creation time are immutable.
        db.update_job(Job {
            creator: 100,
            created_at: job.created_at.add(Duration::hours(1)),
            ..job.clone()
        })
        .await?;
        assert_eq!(db.get_job(job.id).await?, Some(job));

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_update_non_existent_job() -> anyhow::Result<()> {
        let db = mock_db().await?;

        let update_result = db.update_job(mock_job(1, 1)?).await;
        assert_debug_snapshot!(update_result, @r###"
        Err(
            "A job ('1') doesn't exist.",
        )
        "###);

        Ok(())
    }

    #[tokio::test]
    async fn can_list_jobs() -> anyhow::Result<()> {
        let db = mock_db().await?;

        for (index, agent_id) in [1, 2, 1, 1, 2].into_iter().enumerate() {
            let job = mock_job(100, agent_id)?;
            db.insert_job(Job {
                name: format!("job-{}", index + 1),
                created_at: job.created_at.add(Duration::minutes(index as i64)),
                ..job
            })
            .await?;
        }

        let deleted_job = db.get_job(JobId::try_from(4)?).await?.unwrap();
        db.update_job(Job {
            status: JobStatus::Deleted,
            ..deleted_job
        })
        .await?;

        let names = |jobs: Vec<Job>| jobs.into_iter().map(|job| job.name).collect::<Vec<_>>();

        let (jobs, total) = db.get_jobs(None, 1, 10).await?;
        assert_eq!(total, 4);
        assert_eq!(names(jobs), vec!["job-5", "job-3", "job-2", "job-1"]);

        let (jobs, total) = db.get_jobs(None, 2, 3).await?;
        assert_eq!(total, 4);
        assert_eq!(names(jobs), vec!["job-1"]);

        let (jobs, total) = db.get_jobs(Some(AgentId::try_from(1)?), 1, 10).await?;
        assert_eq!(total, 2);
        assert_eq!(names(jobs), vec!["job-3", "job-1"]);

        let (jobs, total) = db.get_jobs(Some(AgentId::try_from(3)?), 1, 10).await?;
        assert_eq!(total, 0);
        assert!(jobs.is_empty());

        Ok(())
    }
}
