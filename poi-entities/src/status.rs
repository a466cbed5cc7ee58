use std::fmt;

/// Moderation state of a submitted place.
///
/// `Pending` and `Synchronized` both mean "awaiting a decision";
/// the backend distinguishes them only by how the record arrived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ValidationStatus {
    #[default]
    Pending,
    Synchronized,
    Validated,
    Rejected,
    /// Any value the backend sends that is not known (yet).
    Unknown(String),
}

impl ValidationStatus {
    pub const fn awaits_decision(&self) -> bool {
        matches!(self, Self::Pending | Self::Synchronized)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Synchronized => "synchronized",
            Self::Validated => "validated",
            Self::Rejected => "rejected",
            Self::Unknown(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Pending | Self::Synchronized => "En attente",
            Self::Validated => "Validé",
            Self::Rejected => "Rejeté",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for ValidationStatus {
    fn from(from: &str) -> Self {
        match from.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "synchronized" => Self::Synchronized,
            // `accepted` is the legacy name of the same state
            "validated" | "accepted" => Self::Validated,
            "rejected" => Self::Rejected,
            _ => Self::Unknown(from.to_owned()),
        }
    }
}

impl From<String> for ValidationStatus {
    fn from(from: String) -> Self {
        Self::from(from.as_str())
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_and_synchronized_await_decision() {
        assert!(ValidationStatus::Pending.awaits_decision());
        assert!(ValidationStatus::Synchronized.awaits_decision());
        assert!(!ValidationStatus::Validated.awaits_decision());
        assert!(!ValidationStatus::Rejected.awaits_decision());
        assert!(!ValidationStatus::Unknown("archived".into()).awaits_decision());
    }

    #[test]
    fn parse_legacy_and_unknown_values() {
        assert_eq!(ValidationStatus::from("accepted"), ValidationStatus::Validated);
        assert_eq!(ValidationStatus::from("Pending"), ValidationStatus::Pending);
        assert_eq!(
            ValidationStatus::from("on_hold"),
            ValidationStatus::Unknown("on_hold".into())
        );
    }

    #[test]
    fn unknown_status_is_displayed_verbatim() {
        let status = ValidationStatus::from("on_hold");
        assert_eq!(status.label(), "on_hold");
        assert_eq!(ValidationStatus::Synchronized.label(), "En attente");
    }
}
