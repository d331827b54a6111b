//! In-memory [`Store`] backed by a single `RwLock`.
//!
//! Lifecycle operations hold the write guard across the whole
//! find → guard → mutate sequence, which gives the transactional behavior
//! the port requires without an external database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::{CoreError, Result};
use crate::ids::{InspectorId, JobId};
use crate::inspector::{Inspector, InspectorPatch, NewInspector};
use crate::job::{Job, JobFilter, JobPatch, NewJob};
use crate::status::JobStatus;
use crate::store::Store;

#[derive(Debug, Default)]
struct Tables {
    inspectors: BTreeMap<i64, Inspector>,
    jobs: BTreeMap<i64, Job>,
    next_inspector_id: i64,
    next_job_id: i64,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_inspector(&self, new: NewInspector) -> Result<Inspector> {
        let mut tables = self.inner.write().await;
        tables.next_inspector_id += 1;
        let inspector = Inspector {
            id: InspectorId(tables.next_inspector_id),
            name: new.name,
            email: new.email,
            timezone: new.timezone,
            created_at: Utc::now(),
        };
        tables.inspectors.insert(inspector.id.0, inspector.clone());
        info!(id = %inspector.id, "inspector created");
        Ok(inspector)
    }

    async fn list_inspectors(&self) -> Result<Vec<Inspector>> {
        let tables = self.inner.read().await;
        Ok(tables.inspectors.values().cloned().collect())
    }

    async fn find_inspector(&self, id: InspectorId) -> Result<Option<Inspector>> {
        let tables = self.inner.read().await;
        Ok(tables.inspectors.get(&id.0).cloned())
    }

    async fn update_inspector(
        &self,
        id: InspectorId,
        patch: InspectorPatch,
    ) -> Result<Inspector> {
        let mut tables = self.inner.write().await;
        let inspector = tables
            .inspectors
            .get_mut(&id.0)
            .ok_or_else(|| CoreError::NotFound("Inspector not found".to_string()))?;
        inspector.apply(patch);
        Ok(inspector.clone())
    }

    async fn delete_inspector(&self, id: InspectorId) -> Result<()> {
        let mut tables = self.inner.write().await;
        if tables.inspectors.remove(&id.0).is_none() {
            return Err(CoreError::NotFound("Inspector not found".to_string()));
        }
        // Nullable relationship: jobs survive with the reference cleared.
        for job in tables.jobs.values_mut() {
            if job.inspector_id == Some(id) {
                job.inspector_id = None;
            }
        }
        info!(id = %id, "inspector deleted");
        Ok(())
    }

    async fn create_job(&self, new: NewJob) -> Result<Job> {
        let mut tables = self.inner.write().await;
        tables.next_job_id += 1;
        let job = Job {
            id: JobId(tables.next_job_id),
            title: new.title,
            description: new.description,
            status: JobStatus::Available,
            scheduled_at: None,
            completed_at: None,
            assessment: None,
            created_at: Utc::now(),
            inspector_id: None,
        };
        tables.jobs.insert(job.id.0, job.clone());
        info!(id = %job.id, "job created");
        Ok(job)
    }

    async fn list_jobs(&self, filter: JobFilter) -> Result<Vec<Job>> {
        let tables = self.inner.read().await;
        Ok(tables
            .jobs
            .values()
            .filter(|job| filter.matches(job))
            .cloned()
            .collect())
    }

    async fn find_job(&self, id: JobId) -> Result<Option<Job>> {
        let tables = self.inner.read().await;
        Ok(tables.jobs.get(&id.0).cloned())
    }

    async fn update_job(&self, id: JobId, patch: JobPatch) -> Result<Job> {
        let mut tables = self.inner.write().await;
        let job = tables
            .jobs
            .get_mut(&id.0)
            .ok_or_else(|| CoreError::NotFound("Job not found".to_string()))?;
        job.apply(patch);
        Ok(job.clone())
    }

    async fn delete_job(&self, id: JobId) -> Result<()> {
        let mut tables = self.inner.write().await;
        if tables.jobs.remove(&id.0).is_none() {
            return Err(CoreError::NotFound("Job not found".to_string()));
        }
        info!(id = %id, "job deleted");
        Ok(())
    }

    async fn assign_job(
        &self,
        id: JobId,
        inspector: InspectorId,
        scheduled_at: DateTime<Utc>,
    ) -> Result<Job> {
        let mut tables = self.inner.write().await;
        if !tables.inspectors.contains_key(&inspector.0) {
            return Err(CoreError::NotFound("Inspector not found".to_string()));
        }
        let job = tables
            .jobs
            .get_mut(&id.0)
            .ok_or_else(|| CoreError::NotFound("Job not found".to_string()))?;
        job.assign_to(inspector, scheduled_at)?;
        info!(id = %id, inspector = %inspector, "job assigned");
        Ok(job.clone())
    }

    async fn complete_job(&self, id: JobId, assessment: String) -> Result<Job> {
        let mut tables = self.inner.write().await;
        let job = tables
            .jobs
            .get_mut(&id.0)
            .ok_or_else(|| CoreError::NotFound("Job not found".to_string()))?;
        job.complete(assessment)?;
        info!(id = %id, "job completed");
        Ok(job.clone())
    }
}
