mod history_table;
mod navbar;
mod pagination;
mod place_table;
mod review_wizard;
mod status_badge;
mod sync_panel;
mod toasts;

pub use self::{
    history_table::*, navbar::*, pagination::*, place_table::*, review_wizard::*,
    status_badge::*, sync_panel::*, toasts::*,
};
