use crate::jobs::JobId;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Lock table that serializes operations on the same job. Entries only live while the lock is
/// held or awaited.
#[derive(Clone, Default)]
pub struct JobLocks {
    locks: Arc<DashMap<JobId, Arc<Mutex<()>>>>,
}

impl JobLocks {
    /// Waits until no other operation holds the lock for the job and acquires it.
    pub async fn lock(&self, id: JobId) -> JobLockGuard {
        let mutex = self.locks.entry(id).or_default().clone();
        JobLockGuard {
            id,
            locks: self.locks.clone(),
            guard: Some(mutex.lock_owned().await),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.locks.len()
    }
}

/// Releases the job lock when dropped.
pub struct JobLockGuard {
    id: JobId,
    locks: Arc<DashMap<JobId, Arc<Mutex<()>>>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for JobLockGuard {
    fn drop(&mut self) {
        self.guard.take();
        // Only the table itself references the mutex, no one holds or waits for it.
        self.locks
            .remove_if(&self.id, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}

#[cfg(test)]
mod tests {
    use super::JobLocks;
    use crate::jobs::JobId;
    use std::{
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };

    #[tokio::test]
    async fn serializes_operations_on_the_same_job() -> anyhow::Result<()> {
        let locks = JobLocks::default();
        let active = Arc::new(AtomicUsize::new(0));
        let max_active = Arc::new(AtomicUsize::new(0));

        let tasks = (0..5)
            .map(|_| {
                let locks = locks.clone();
                let active = active.clone();
                let max_active = max_active.clone();
                tokio::spawn(async move {
                    let _guard = locks.lock(JobId::try_from(7)?).await;
                    let current = active.fetch_add(1, Ordering::SeqCst) + 1;
                    max_active.fetch_max(current, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    active.fetch_sub(1, Ordering::SeqCst);
                    anyhow::Ok(())
                })
            })
            .collect::<Vec<_>>();
        for task in tasks {
            task.await??;
        }

        assert_eq!(max_active.load(Ordering::SeqCst), 1);
        assert_eq!(locks.len(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn does_not_block_different_jobs() -> anyhow::Result<()> {
        let locks = JobLocks::default();

        let _first = locks.lock(JobId::try_from(1)?).await;
        let second = tokio::time::timeout(
            Duration::from_millis(100),
            locks.lock(JobId::try_from(2)?),
        )
        .await;
        assert!(second.is_ok());
        assert_eq!(locks.len(), 2);

        drop(second);
        assert_eq!(locks.len(), 1);

        Ok(())
    }
}
