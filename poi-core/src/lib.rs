//! # poi-core
//!
//! Moderation workflow of the POI administration panel, independent of
//! any browser API. Everything that talks to the outside world goes
//! through the traits in [`gateways`].

pub mod gateways;
pub mod pagination;
pub mod review_wizard;
pub mod usecases;
