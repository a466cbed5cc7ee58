mod dashboard;
mod error;
mod lists;
mod session;
mod submit_decision;
mod submitter;
mod sync;

#[cfg(test)]
pub mod tests;

pub use self::{
    dashboard::*, error::Error, lists::*, session::*, submit_decision::*, submitter::*, sync::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        gateways::{
            Delay, IdentityGateway, IpLookup, Notification, NotificationGateway, PlaceFilter,
            PlaceGateway, SessionStorage,
        },
        pagination::{self, Page, ITEMS_PER_PAGE},
    };
    pub use poi_entities::{
        history::ValidationHistoryEntry,
        partner::Partner,
        place::{Place, PlaceId},
        status::ValidationStatus,
        sync::{SyncReport, SyncStatus},
        user::{User, UserId},
    };
}
