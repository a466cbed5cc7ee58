#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # poi-entities
//!
//! Reusable, agnostic domain entities for moderating user-submitted
//! points of interest.
//!
//! The entities only contain generic functionality that does not reveal
//! any application-specific workflow. Wire formats live in `poi-boundary`,
//! use cases in `poi-core`.

pub mod category;
pub mod geo;
pub mod history;
pub mod partner;
pub mod place;
pub mod reject_reason;
pub mod status;
pub mod sync;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
