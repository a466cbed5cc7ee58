use leptos::*;

use poi_core::usecases::{load_dashboard, report_load_failure, DashboardStats};
use poi_entities::{place::Place, user::User};

use crate::{adapters::Toaster, components::*, Apis};

#[component]
pub fn Dashboard(apis: Apis, toaster: Toaster, user: Signal<Option<User>>) -> impl IntoView {
    // -- signals -- //

    let stats = RwSignal::new(None::<DashboardStats>);
    let load_error = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<Place>);

    // -- actions -- //

    let fetch_stats = Action::new(move |()| async move {
        match load_dashboard(&apis.places).await {
            Ok(s) => {
                load_error.set(None);
                stats.set(Some(s));
            }
            Err(err) => {
                report_load_failure(&toaster, "les statistiques", &err);
                load_error.set(Some(err.to_string()));
            }
        }
    });

    fetch_stats.dispatch(());

    // -- memos -- //

    let count = move |f: fn(&DashboardStats) -> usize| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(f)))
    };
    let recent = Signal::derive(move || {
        stats.with(|s| s.as_ref().map(|s| s.recent.clone()).unwrap_or_default())
    });
    let loading = fetch_stats.pending();

    view! {
      <section class="mx-auto max-w-7xl py-6 sm:px-6 lg:px-8 space-y-6">
        { move || load_error.get().map(|err| view! {
          <p class="rounded bg-red-50 p-4 text-red-700">{ format!("Erreur de chargement : {err}") }</p>
        })}
        <div class="overflow-hidden bg-white sm:rounded-lg sm:shadow">
          <div class="border-b border-gray-200 bg-white px-4 py-5 sm:px-6">
            <h3 class="text-base font-semibold leading-6 text-gray-900">"Statistiques"</h3>
          </div>
          <dl class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4">
            <Counter label = "Total des lieux" number = count(|s| s.total) />
            <Counter label = "En attente" number = count(|s| s.pending) />
            <Counter label = "Validés" number = count(|s| s.validated) />
            <Counter label = "Rejetés" number = count(|s| s.rejected) />
          </dl>
        </div>
        <div class="space-y-2">
          <h3 class="text-base font-semibold leading-6 text-gray-900">"Ajouts récents"</h3>
          <PlaceTable
            places = recent
            loading
            on_review = move |place| selected.set(Some(place))
          />
        </div>
        <ReviewWizardModal
          apis
          toaster
          user
          selected
          on_decided = move |()| fetch_stats.dispatch(())
        />
      </section>
    }
}

#[component]
fn Counter(label: &'static str, number: Signal<Option<usize>>) -> impl IntoView {
    view! {
      <div class="m-5 overflow-hidden rounded-lg bg-white px-4 py-5 shadow sm:p-6">
        <dt class="truncate text-sm font-medium text-gray-500">{ label }</dt>
        <dd class="mt-1 text-3xl font-semibold tracking-tight text-gray-900">
          { move || number.get().map_or_else(|| "-".to_owned(), |n| n.to_string()) }
        </dd>
      </div>
    }
}
