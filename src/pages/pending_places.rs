use leptos::*;

use poi_core::{
    pagination::Page as ListPage,
    usecases::{load_pending_places, report_load_failure},
};
use poi_entities::{place::Place, user::User};

use crate::{adapters::Toaster, components::*, Apis};

#[component]
pub fn PendingPlaces(apis: Apis, toaster: Toaster, user: Signal<Option<User>>) -> impl IntoView {
    // -- signals -- //

    let page = RwSignal::new(1_usize);
    let places = RwSignal::new(None::<ListPage<Place>>);
    let load_error = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<Place>);

    // -- actions -- //

    let fetch_places = Action::new(move |number: &usize| {
        let number = *number;
        async move {
            match load_pending_places(&apis.places, number).await {
                Ok(p) => {
                    load_error.set(None);
                    places.set(Some(p));
                }
                Err(err) => {
                    report_load_failure(&toaster, "les lieux en attente", &err);
                    load_error.set(Some(err.to_string()));
                }
            }
        }
    });

    // -- effects -- //

    Effect::new(move |_| {
        fetch_places.dispatch(page.get());
    });

    // -- memos -- //

    let items = Signal::derive(move || {
        places.with(|p| p.as_ref().map(|p| p.items().to_vec()).unwrap_or_default())
    });
    let has_previous =
        Signal::derive(move || places.with(|p| p.as_ref().is_some_and(ListPage::has_previous)));
    let has_next =
        Signal::derive(move || places.with(|p| p.as_ref().is_some_and(ListPage::has_next)));
    let loading = fetch_places.pending();

    view! {
      <section class="mx-auto max-w-7xl py-6 sm:px-6 lg:px-8">
        <h2 class="mb-4 text-xl font-semibold text-gray-900">"Lieux en attente de validation"</h2>
        { move || load_error.get().map(|err| view! {
          <p class="mb-4 rounded bg-red-50 p-4 text-red-700">{ format!("Erreur de chargement : {err}") }</p>
        })}
        <PlaceTable
          places = items
          loading
          on_review = move |place| selected.set(Some(place))
        />
        <Pagination page has_previous has_next disabled = loading />
        <ReviewWizardModal
          apis
          toaster
          user
          selected
          on_decided = move |()| fetch_places.dispatch(page.get_untracked())
        />
      </section>
    }
}
