//! The fixed set of timezones an inspector can be registered in.

use serde::{Deserialize, Serialize};

/// Enumerated timezone whitelist. Validation is exact membership against the
/// IANA values; no case folding, no aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timezone {
    Uk,
    Mexico,
    India,
}

impl Timezone {
    pub const ALL: [Timezone; 3] = [Timezone::Uk, Timezone::Mexico, Timezone::India];

    /// The IANA value the API accepts and the detail views render.
    pub fn iana(&self) -> &'static str {
        match self {
            Timezone::Uk => "Europe/London",
            Timezone::Mexico => "America/Mexico_City",
            Timezone::India => "Asia/Kolkata",
        }
    }

    /// Short label used by the list and embedded-inspector views.
    pub fn label(&self) -> &'static str {
        match self {
            Timezone::Uk => "UK",
            Timezone::Mexico => "MEXICO",
            Timezone::India => "INDIA",
        }
    }

    /// Exact-match lookup against the IANA values.
    pub fn from_iana(raw: &str) -> Option<Timezone> {
        Timezone::ALL.iter().copied().find(|tz| tz.iana() == raw)
    }
}

impl std::fmt::Display for Timezone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iana())
    }
}
