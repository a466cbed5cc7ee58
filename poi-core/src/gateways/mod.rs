//! Ports to everything outside of the browser tab: the moderation and
//! identity backends, the IP lookup service, timers, notifications and
//! the persisted session record.

use thiserror::Error;

mod identity;
mod notify;
mod places;
mod storage;
mod timer;

pub use self::{identity::*, notify::*, places::*, storage::*, timer::*};

pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a gateway implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Request failed: {0}")]
    Fetch(String),
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    #[error("{0}")]
    Api(String),
    #[error("Malformed response: {0}")]
    Malformed(String),
}
