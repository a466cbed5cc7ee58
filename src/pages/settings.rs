use leptos::*;
use std::time::Duration;

use poi_entities::user::User;
use poi_frontend_api::PlacesApi;

use crate::{adapters::Toaster, components::*};

#[component]
pub fn Settings(
    places_api: PlacesApi,
    toaster: Toaster,
    user: Signal<Option<User>>,
    poll_interval: Duration,
) -> impl IntoView {
    view! {
      <section class="mx-auto max-w-7xl py-6 sm:px-6 lg:px-8 space-y-6">
        <h2 class="text-xl font-semibold text-gray-900">"Paramètres"</h2>
        { move || user.get().map(|user| view! { <Profile user /> }) }
        <SyncPanel
          places_api
          toaster
          poll_interval
          on_synced = |()| log::debug!("Places are up to date")
        />
      </section>
    }
}

#[component]
fn Profile(user: User) -> impl IntoView {
    let User {
        id,
        name,
        email,
        phone,
        matricule,
        ..
    } = user;
    let rows = [
        ("Identifiant", id.to_string()),
        ("Nom", name),
        ("E-mail", email),
        ("Téléphone", phone),
        ("Matricule", matricule),
    ];
    view! {
      <div class="overflow-hidden bg-white sm:rounded-lg sm:shadow">
        <div class="border-b border-gray-200 px-4 py-5 sm:px-6">
          <h3 class="text-base font-semibold leading-6 text-gray-900">"Profil"</h3>
        </div>
        <dl class="divide-y divide-gray-100 px-4 sm:px-6">
          { rows
              .into_iter()
              .map(|(label, value)| view! {
                <div class="py-3 sm:grid sm:grid-cols-3 sm:gap-4">
                  <dt class="text-sm font-medium text-gray-500">{ label }</dt>
                  <dd class="mt-1 text-sm text-gray-900 sm:col-span-2 sm:mt-0">
                    { if value.is_empty() { "-".to_owned() } else { value } }
                  </dd>
                </div>
              })
              .collect_view()
          }
        </dl>
      </div>
    }
}
