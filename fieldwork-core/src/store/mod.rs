//! Persistence port for inspectors and jobs.
//!
//! The lifecycle operations (`assign_job`, `complete_job`) are part of the
//! port rather than plain read/write primitives so an implementation can make
//! the guard check and the mutation one atomic unit. Two racing assigns on
//! the same job must resolve to exactly one winner; the loser observes
//! [`crate::error::CoreError::InvalidTransition`].

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::ids::{InspectorId, JobId};
use crate::inspector::{Inspector, InspectorPatch, NewInspector};
use crate::job::{Job, JobFilter, JobPatch, NewJob};

#[async_trait]
pub trait Store: Send + Sync {
    async fn create_inspector(&self, new: NewInspector) -> Result<Inspector>;

    async fn list_inspectors(&self) -> Result<Vec<Inspector>>;

    async fn find_inspector(&self, id: InspectorId) -> Result<Option<Inspector>>;

    /// Applies a partial update. `NotFound` if the inspector does not exist.
    async fn update_inspector(
        &self,
        id: InspectorId,
        patch: InspectorPatch,
    ) -> Result<Inspector>;

    /// Hard delete. Jobs referencing the inspector keep their status but
    /// have the reference nullified.
    async fn delete_inspector(&self, id: InspectorId) -> Result<()>;

    async fn create_job(&self, new: NewJob) -> Result<Job>;

    async fn list_jobs(&self, filter: JobFilter) -> Result<Vec<Job>>;

    async fn find_job(&self, id: JobId) -> Result<Option<Job>>;

    /// Applies a partial update, including the unguarded status override.
    /// `NotFound` if the job does not exist.
    async fn update_job(&self, id: JobId, patch: JobPatch) -> Result<Job>;

    /// Hard delete, any state. `NotFound` if the job does not exist.
    async fn delete_job(&self, id: JobId) -> Result<()>;

    /// Guarded transition available → assigned, atomic with respect to the
    /// persisted state. Fails with `NotFound` when the job or the inspector
    /// is missing, `InvalidTransition` when the job is not available.
    async fn assign_job(
        &self,
        id: JobId,
        inspector: InspectorId,
        scheduled_at: DateTime<Utc>,
    ) -> Result<Job>;

    /// Guarded transition assigned → completed, atomic with respect to the
    /// persisted state.
    async fn complete_job(&self, id: JobId, assessment: String) -> Result<Job>;
}
