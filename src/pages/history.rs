use leptos::*;

use poi_core::{
    pagination::Page as ListPage,
    usecases::{load_validation_history, report_load_failure},
};
use poi_entities::history::ValidationHistoryEntry;
use poi_frontend_api::PlacesApi;

use crate::{adapters::Toaster, components::*};

#[component]
pub fn History(places_api: PlacesApi, toaster: Toaster) -> impl IntoView {
    let page = RwSignal::new(1_usize);
    let entries = RwSignal::new(None::<ListPage<ValidationHistoryEntry>>);
    let load_error = RwSignal::new(None::<String>);

    let fetch_history = Action::new(move |number: &usize| {
        let number = *number;
        async move {
            match load_validation_history(&places_api, number).await {
                Ok(e) => {
                    load_error.set(None);
                    entries.set(Some(e));
                }
                Err(err) => {
                    report_load_failure(&toaster, "l'historique de modération", &err);
                    load_error.set(Some(err.to_string()));
                }
            }
        }
    });

    Effect::new(move |_| {
        fetch_history.dispatch(page.get());
    });

    let items = Signal::derive(move || {
        entries.with(|e| e.as_ref().map(|e| e.items().to_vec()).unwrap_or_default())
    });
    let has_previous =
        Signal::derive(move || entries.with(|e| e.as_ref().is_some_and(ListPage::has_previous)));
    let has_next =
        Signal::derive(move || entries.with(|e| e.as_ref().is_some_and(ListPage::has_next)));
    let loading = fetch_history.pending();

    view! {
      <section class="mx-auto max-w-7xl py-6 sm:px-6 lg:px-8">
        <h2 class="mb-4 text-xl font-semibold text-gray-900">"Historique de modération"</h2>
        { move || load_error.get().map(|err| view! {
          <p class="mb-4 rounded bg-red-50 p-4 text-red-700">{ format!("Erreur de chargement : {err}") }</p>
        })}
        <div class="bg-white shadow sm:rounded-lg">
          <HistoryTable entries = items />
          <Show when = move || !loading.get() && items.with(Vec::is_empty)>
            <p class="text-gray-500 p-5">"Aucune décision enregistrée."</p>
          </Show>
        </div>
        <Pagination page has_previous has_next disabled = loading />
      </section>
    }
}
