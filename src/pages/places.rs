use leptos::*;
use std::time::Duration;

use poi_core::{
    gateways::PlaceFilter,
    usecases::{report_load_failure, search_places, PlaceSearch},
};
use poi_entities::{
    category::known_categories, place::Place, status::ValidationStatus, user::User,
};

use crate::{adapters::Toaster, components::*, Apis};

const STATUS_OPTIONS: [ValidationStatus; 4] = [
    ValidationStatus::Pending,
    ValidationStatus::Synchronized,
    ValidationStatus::Validated,
    ValidationStatus::Rejected,
];

#[allow(clippy::too_many_lines)]
#[component]
pub fn Places(
    apis: Apis,
    toaster: Toaster,
    user: Signal<Option<User>>,
    poll_interval: Duration,
) -> impl IntoView {
    // -- signals -- //

    let search = RwSignal::new(PlaceSearch::default());
    let places = RwSignal::new(Vec::<Place>::new());
    let load_error = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<Place>);

    // -- actions -- //

    let fetch_places = Action::new(move |filter: &PlaceFilter| {
        let filter = filter.clone();
        async move {
            match search_places(&apis.places, &filter).await {
                Ok(p) => {
                    load_error.set(None);
                    places.set(p);
                }
                Err(err) => {
                    report_load_failure(&toaster, "les lieux", &err);
                    load_error.set(Some(err.to_string()));
                }
            }
        }
    });

    fetch_places.dispatch(PlaceFilter::default());

    // -- callbacks -- //

    let apply_filter = move || {
        if let Some(filter) = search.try_update(PlaceSearch::apply) {
            fetch_places.dispatch(filter);
        }
    };
    let reset_filter = move || {
        if let Some(filter) = search.try_update(PlaceSearch::reset) {
            fetch_places.dispatch(filter);
        }
    };
    let refresh = move || {
        let filter = search.with_untracked(|s| s.applied().clone());
        fetch_places.dispatch(filter);
    };

    let loading = fetch_places.pending();
    let input_class = "mt-1 block w-full rounded border border-gray-300 bg-white px-3 py-2 text-sm";

    view! {
      <section class="mx-auto max-w-7xl py-6 sm:px-6 lg:px-8 space-y-6">
        <h2 class="text-xl font-semibold text-gray-900">"Tous les lieux"</h2>
        <form
          class="grid grid-cols-1 gap-4 bg-white p-4 shadow sm:rounded-lg sm:grid-cols-2 lg:grid-cols-5"
          on:submit = move |ev| {
              ev.prevent_default();
              apply_filter();
          }
        >
          <label class="text-sm text-gray-700">
            "Statut"
            <select
              class=input_class
              on:change = move |ev| {
                  let value = event_target_value(&ev);
                  let status = (!value.is_empty()).then(|| ValidationStatus::from(value));
                  search.update(|s| s.edit(|f| f.status = status));
              }
            >
              <option value="" selected = move || search.with(|s| s.draft().status.is_none())>"Tous"</option>
              { STATUS_OPTIONS
                  .into_iter()
                  .map(|status| {
                      let code = status.as_str().to_owned();
                      let label = match status {
                          ValidationStatus::Synchronized => "Synchronisé".to_owned(),
                          ref other => other.label().to_owned(),
                      };
                      let option = status.clone();
                      view! {
                        <option
                          value = code
                          selected = move || search.with(|s| s.draft().status.as_ref() == Some(&option))
                        >
                          { label }
                        </option>
                      }
                  })
                  .collect_view()
              }
            </select>
          </label>
          <label class="text-sm text-gray-700">
            "Catégorie"
            <select
              class=input_class
              on:change = move |ev| {
                  let value = event_target_value(&ev);
                  let category = (!value.is_empty()).then_some(value);
                  search.update(|s| s.edit(|f| f.category = category));
              }
            >
              <option value="" selected = move || search.with(|s| s.draft().category.is_none())>"Toutes"</option>
              { known_categories()
                  .map(|(code, label)| view! {
                    <option
                      value = code
                      selected = move || search.with(|s| s.draft().category.as_deref() == Some(code))
                    >
                      { label }
                    </option>
                  })
                  .collect_view()
              }
            </select>
          </label>
          <label class="text-sm text-gray-700">
            "Localité"
            <input
              type="text"
              class=input_class
              prop:value = move || search.with(|s| s.draft().locality.clone().unwrap_or_default())
              on:input = move |ev| {
                  let value = event_target_value(&ev);
                  search.update(|s| s.edit(|f| f.locality = Some(value)));
              }
            />
          </label>
          <label class="text-sm text-gray-700">
            "Recherche"
            <input
              type="search"
              class=input_class
              placeholder="Nom, description…"
              prop:value = move || search.with(|s| s.draft().search.clone().unwrap_or_default())
              on:input = move |ev| {
                  let value = event_target_value(&ev);
                  search.update(|s| s.edit(|f| f.search = Some(value)));
              }
            />
          </label>
          <div class="flex items-end space-x-2">
            <button
              type="submit"
              class="rounded bg-gray-800 px-4 py-2 text-sm font-semibold text-white disabled:opacity-40"
              prop:disabled = move || loading.get()
            >
              "Filtrer"
            </button>
            <button
              type="button"
              class="rounded border border-gray-300 px-4 py-2 text-sm"
              on:click = move |_| reset_filter()
            >
              "Réinitialiser"
            </button>
          </div>
        </form>
        { move || load_error.get().map(|err| view! {
          <p class="rounded bg-red-50 p-4 text-red-700">{ format!("Erreur de chargement : {err}") }</p>
        })}
        <PlaceTable
          places = places
          loading
          on_review = move |place| selected.set(Some(place))
        />
        <SyncPanel
          places_api = apis.places
          toaster
          poll_interval
          on_synced = move |()| refresh()
        />
        <ReviewWizardModal
          apis
          toaster
          user
          selected
          on_decided = move |()| refresh()
        />
      </section>
    }
}
