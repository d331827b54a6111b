//! # Fieldwork Core
//!
//! Domain layer for the fieldwork job-dispatch tracker.
//!
//! The crate owns the two entities ([`Inspector`] and [`Job`]), the job
//! lifecycle state machine (available → assigned → completed, with guarded
//! transitions), and the [`Store`] persistence port together with its
//! in-memory implementation. HTTP concerns live in `fieldwork-server`.

pub mod error;
pub mod ids;
pub mod inspector;
pub mod job;
pub mod status;
pub mod store;
pub mod timezone;

pub use error::{CoreError, Result};
pub use ids::{InspectorId, JobId};
pub use inspector::{Inspector, InspectorPatch, NewInspector};
pub use job::{Job, JobFilter, JobPatch, NewJob};
pub use status::JobStatus;
pub use store::{Store, memory::MemoryStore};
pub use timezone::Timezone;
