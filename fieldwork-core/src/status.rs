use serde::{Deserialize, Serialize};

/// Lifecycle status of a [`crate::Job`]. `Completed` is terminal under the
/// guarded transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Available,
    Assigned,
    Completed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 3] = [
        JobStatus::Available,
        JobStatus::Assigned,
        JobStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Available => "available",
            JobStatus::Assigned => "assigned",
            JobStatus::Completed => "completed",
        }
    }

    /// Exact-match lookup against the wire values.
    pub fn from_str_exact(raw: &str) -> Option<JobStatus> {
        JobStatus::ALL.iter().copied().find(|s| s.as_str() == raw)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
