mod dashboard;
mod history;
mod login;
mod pending_places;
mod places;
mod settings;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Dashboard,
    PendingPlaces,
    Places,
    History,
    Settings,
    Login,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::PendingPlaces => "/pending",
            Self::Places => "/places",
            Self::History => "/history",
            Self::Settings => "/settings",
            Self::Login => "/login",
        }
    }
}

pub use self::{
    dashboard::*, history::*, login::*, pending_places::*, places::*, settings::*,
};
