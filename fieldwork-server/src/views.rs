//! Response shapes for the API.
//!
//! Two renderings of an inspector exist on the wire: the detail form
//! (create/update responses) carries the IANA timezone value, while the
//! list form and the inspector embedded in a job carry the short label.
//! That asymmetry is part of the established contract and is kept as is.

use chrono::{DateTime, Utc};
use serde::Serialize;

use fieldwork_core::{Inspector, Job};

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[derive(Debug, Serialize)]
pub struct InspectorView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub timezone: &'static str,
}

impl InspectorView {
    /// Detail form: timezone rendered as its IANA value.
    pub fn detail(inspector: &Inspector) -> Self {
        Self {
            id: inspector.id.as_i64(),
            name: inspector.name.clone(),
            email: inspector.email.clone(),
            timezone: inspector.timezone.iana(),
        }
    }

    /// Summary form: timezone rendered as its short label.
    pub fn summary(inspector: &Inspector) -> Self {
        Self {
            id: inspector.id.as_i64(),
            name: inspector.name.clone(),
            email: inspector.email.clone(),
            timezone: inspector.timezone.label(),
        }
    }
}

/// Job as serialized by every job endpoint. `completed_at` is intentionally
/// absent from the wire shape; completion shows through `status` and
/// `assessment`.
#[derive(Debug, Serialize)]
pub struct JobView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: &'static str,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub assessment: Option<String>,
    #[serde(rename = "scheduledAt")]
    pub scheduled_at: Option<String>,
    pub inspector: Option<InspectorView>,
}

impl JobView {
    /// The inspector is a weak reference resolved by the caller at read
    /// time; a dangling or absent reference renders as `null`.
    pub fn compose(job: &Job, inspector: Option<&Inspector>) -> Self {
        Self {
            id: job.id.as_i64(),
            title: job.title.clone(),
            description: job.description.clone(),
            status: job.status.as_str(),
            created_at: format_timestamp(&job.created_at),
            assessment: job.assessment.clone(),
            scheduled_at: job.scheduled_at.as_ref().map(format_timestamp),
            inspector: inspector.map(InspectorView::summary),
        }
    }
}
