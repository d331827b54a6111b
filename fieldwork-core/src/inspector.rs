//! Inspector entity and its create/update shapes.

use chrono::{DateTime, Utc};

use crate::ids::InspectorId;
use crate::timezone::Timezone;

/// A person who can be assigned to perform jobs.
///
/// `created_at` is set once at construction and never changes. Jobs hold a
/// weak reference back to their inspector by id; the inspector does not own
/// the job lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspector {
    pub id: InspectorId,
    pub name: String,
    pub email: String,
    pub timezone: Timezone,
    pub created_at: DateTime<Utc>,
}

/// Fields required to register a new inspector. The store assigns the id
/// and stamps `created_at`.
#[derive(Debug, Clone)]
pub struct NewInspector {
    pub name: String,
    pub email: String,
    pub timezone: Timezone,
}

/// Partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct InspectorPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub timezone: Option<Timezone>,
}

impl Inspector {
    pub fn apply(&mut self, patch: InspectorPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(timezone) = patch.timezone {
            self.timezone = timezone;
        }
    }
}
