use std::fmt;

use crate::{place::PlaceId, time::Timestamp, user::UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationAction {
    Validate,
    Reject,
    Unknown(String),
}

impl ValidationAction {
    pub fn label(&self) -> &str {
        match self {
            Self::Validate => "Validation",
            Self::Reject => "Rejet",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for ValidationAction {
    fn from(from: &str) -> Self {
        match from.trim().to_ascii_lowercase().as_str() {
            "validate" | "validated" | "approve" => Self::Validate,
            "reject" | "rejected" => Self::Reject,
            _ => Self::Unknown(from.to_owned()),
        }
    }
}

impl fmt::Display for ValidationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable audit record of a single moderation decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationHistoryEntry {
    pub poi_id: PlaceId,
    pub action: ValidationAction,
    pub rejection_reason: Option<String>,
    pub performed_by: UserId,
    pub ip_address: Option<String>,
    pub action_date: Option<Timestamp>,
}
