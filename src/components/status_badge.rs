use leptos::*;

use poi_entities::{status::ValidationStatus, sync::SyncStatus};

const BADGE: &str = "inline-flex items-center rounded-md px-2 py-1 text-xs font-medium ring-1 ring-inset";

#[component]
pub fn StatusBadge(status: ValidationStatus) -> impl IntoView {
    let color = match status {
        ValidationStatus::Pending | ValidationStatus::Synchronized => {
            "bg-yellow-50 text-yellow-800 ring-yellow-600/20"
        }
        ValidationStatus::Validated => "bg-green-50 text-green-700 ring-green-600/20",
        ValidationStatus::Rejected => "bg-red-50 text-red-700 ring-red-600/10",
        ValidationStatus::Unknown(_) => "bg-gray-50 text-gray-600 ring-gray-500/10",
    };
    view! {
      <span class=format!("{BADGE} {color}")>{ status.label().to_owned() }</span>
    }
}

#[component]
pub fn SyncStatusBadge(status: SyncStatus) -> impl IntoView {
    let (color, label) = match status {
        SyncStatus::Idle => ("bg-gray-50 text-gray-600 ring-gray-500/10", "Inactif"),
        SyncStatus::Running => ("bg-blue-50 text-blue-700 ring-blue-700/10", "En cours"),
        SyncStatus::Success => ("bg-green-50 text-green-700 ring-green-600/20", "Terminée"),
        SyncStatus::Error => ("bg-red-50 text-red-700 ring-red-600/10", "Erreur"),
    };
    view! {
      <span class=format!("{BADGE} {color}")>{ label }</span>
    }
}
