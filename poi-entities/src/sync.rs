use std::fmt;

/// State of the backend synchronization job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SyncStatus {
    #[default]
    Idle,
    Running,
    Success,
    Error,
}

impl SyncStatus {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl From<&str> for SyncStatus {
    fn from(from: &str) -> Self {
        match from.trim().to_ascii_lowercase().as_str() {
            "running" => Self::Running,
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Idle,
        }
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub status: SyncStatus,
    pub last_run_start: Option<String>,
    pub last_run_end: Option<String>,
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_is_idle() {
        assert_eq!(SyncStatus::from("RUNNING"), SyncStatus::Running);
        assert_eq!(SyncStatus::from(""), SyncStatus::Idle);
        assert_eq!(SyncStatus::from("queued"), SyncStatus::Idle);
    }
}
