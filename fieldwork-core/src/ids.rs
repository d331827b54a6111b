use serde::{Deserialize, Serialize};

/// Strongly typed ID for inspectors. Values are assigned by the store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct InspectorId(pub i64);

impl InspectorId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for InspectorId {
    fn from(raw: i64) -> Self {
        InspectorId(raw)
    }
}

impl std::fmt::Display for InspectorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for jobs. Values are assigned by the store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl JobId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for JobId {
    fn from(raw: i64) -> Self {
        JobId(raw)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
