use leptos::*;

use poi_core::usecases::load_place_history;
use poi_entities::place::{Audit, PlaceId};
use poi_frontend_api::PlacesApi;

use super::Field;
use crate::components::HistoryTable;

#[component]
pub fn HistoryStep(places_api: PlacesApi, place_id: PlaceId, audit: Audit) -> impl IntoView {
    let fetch_history = Action::new(move |id: &PlaceId| {
        let id = *id;
        async move { load_place_history(&places_api, id).await }
    });

    fetch_history.dispatch(place_id);

    let entries = Signal::derive(move || fetch_history.value().get().unwrap_or_default());

    let Audit {
        created_at,
        created_by,
        updated_at,
        updated_by,
    } = audit;

    view! {
      <div class="space-y-6">
        <dl class="divide-y divide-gray-100">
          <Field label = "Créé le" value = created_at.map(|t| t.format_date_time()) />
          <Field label = "Créé par" value = created_by.map(|u| u.name) />
          <Field label = "Modifié le" value = updated_at.map(|t| t.format_date_time()) />
          <Field label = "Modifié par" value = updated_by.map(|u| u.name) />
        </dl>
        <div>
          <h4 class="mb-2 text-sm font-semibold text-gray-900">"Décisions de modération"</h4>
          <Show
            when = move || !entries.with(Vec::is_empty)
            fallback = move || view! {
              <p class="text-sm text-gray-500">
                { move || if fetch_history.pending().get() { "Chargement…" } else { "Aucune décision enregistrée." } }
              </p>
            }
          >
            <HistoryTable entries />
          </Show>
        </div>
      </div>
    }
}
