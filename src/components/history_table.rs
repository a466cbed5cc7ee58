use leptos::*;

use poi_entities::history::{ValidationAction, ValidationHistoryEntry};

#[component]
pub fn HistoryTable(#[prop(into)] entries: Signal<Vec<ValidationHistoryEntry>>) -> impl IntoView {
    view! {
      <div class="overflow-x-auto">
        <table class="min-w-full divide-y divide-gray-300 text-sm">
          <thead class="bg-gray-50">
            <tr class="text-left font-semibold text-gray-900">
              <th class="px-4 py-3">"Date"</th>
              <th class="px-4 py-3">"Lieu"</th>
              <th class="px-4 py-3">"Action"</th>
              <th class="px-4 py-3">"Motif"</th>
              <th class="px-4 py-3">"Modérateur"</th>
              <th class="px-4 py-3">"Adresse IP"</th>
            </tr>
          </thead>
          <tbody class="divide-y divide-gray-200">
            <For
              each = move || entries.get().into_iter().enumerate()
              key = |(i, _)| *i
              children = move |(_, entry)| view! { <HistoryRow entry /> }
            />
          </tbody>
        </table>
      </div>
    }
}

#[component]
fn HistoryRow(entry: ValidationHistoryEntry) -> impl IntoView {
    let ValidationHistoryEntry {
        poi_id,
        action,
        rejection_reason,
        performed_by,
        ip_address,
        action_date,
    } = entry;
    let action_class = match action {
        ValidationAction::Validate => "text-green-700 font-medium",
        ValidationAction::Reject => "text-red-700 font-medium",
        ValidationAction::Unknown(_) => "text-gray-600",
    };
    view! {
      <tr>
        <td class="px-4 py-2 text-gray-500">
          { action_date.map_or_else(|| "-".to_owned(), |d| d.format_date_time()) }
        </td>
        <td class="px-4 py-2">{ format!("#{poi_id}") }</td>
        <td class=format!("px-4 py-2 {action_class}")>{ action.label().to_owned() }</td>
        <td class="px-4 py-2">{ rejection_reason.unwrap_or_else(|| "-".to_owned()) }</td>
        <td class="px-4 py-2">{ format!("#{performed_by}") }</td>
        <td class="px-4 py-2 font-mono text-xs">{ ip_address.unwrap_or_else(|| "-".to_owned()) }</td>
      </tr>
    }
}
