use leptos::*;

use poi_entities::{category::category_label, place::Place};

use super::StatusBadge;

#[component]
pub fn PlaceTable(
    #[prop(into)] places: Signal<Vec<Place>>,
    #[prop(into)] on_review: Callback<Place>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
      <div class="overflow-x-auto bg-white shadow sm:rounded-lg">
        <table class="min-w-full divide-y divide-gray-300 text-sm">
          <thead class="bg-gray-50">
            <tr class="text-left font-semibold text-gray-900">
              <th class="px-4 py-3">"Nom"</th>
              <th class="px-4 py-3">"Catégorie"</th>
              <th class="px-4 py-3">"Localité"</th>
              <th class="px-4 py-3">"Statut"</th>
              <th class="px-4 py-3">"Ajouté le"</th>
              <th class="px-4 py-3"></th>
            </tr>
          </thead>
          <tbody class="divide-y divide-gray-200">
            <For
              each = move || places.get()
              key = |place| place.id
              children = move |place| view! { <PlaceRow place on_review /> }
            />
          </tbody>
        </table>
        <Show when = move || !loading.get() && places.with(Vec::is_empty)>
          <p class="text-gray-500 p-5">"Aucun lieu à afficher."</p>
        </Show>
        <Show when = move || loading.get()>
          <p class="text-gray-500 p-5">"Chargement…"</p>
        </Show>
      </div>
    }
}

#[component]
fn PlaceRow(place: Place, on_review: Callback<Place>) -> impl IntoView {
    let name = place.name.clone();
    let category = place.category().map(|c| category_label(c).to_owned());
    let locality = place.locality().map(ToOwned::to_owned);
    let status = place.status.clone();
    let date_added = place.date_added.map(|d| d.format_date());
    view! {
      <tr class="hover:bg-gray-50">
        <td class="px-4 py-2 font-medium text-gray-900">{ name }</td>
        <td class="px-4 py-2">{ category.unwrap_or_else(|| "-".into()) }</td>
        <td class="px-4 py-2">{ locality.unwrap_or_else(|| "-".into()) }</td>
        <td class="px-4 py-2"><StatusBadge status /></td>
        <td class="px-4 py-2 text-gray-500">{ date_added.unwrap_or_else(|| "-".into()) }</td>
        <td class="px-4 py-2 text-right">
          <button
            class="rounded bg-gray-800 px-3 py-1 text-xs font-semibold text-white hover:bg-gray-700"
            on:click = move |_| on_review.call(place.clone())
          >
            "Examiner"
          </button>
        </td>
      </tr>
    }
}
