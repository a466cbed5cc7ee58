use leptos::*;

use poi_core::usecases::load_submitter;
use poi_entities::partner::Partner;
use poi_frontend_api::IdentityApi;

use super::Field;

#[component]
pub fn SubmitterStep(identity_api: IdentityApi, source_id: Option<String>) -> impl IntoView {
    let lookup = Action::new(move |source_id: &Option<String>| {
        let source_id = source_id.clone();
        async move { load_submitter(&identity_api, source_id.as_deref()).await }
    });

    lookup.dispatch(source_id.clone());

    let pending = lookup.pending();
    let partner = lookup.value();

    move || {
        if pending.get() {
            return view! { <p class="text-gray-500">"Recherche du contributeur…"</p> }.into_view();
        }
        match partner.get().flatten() {
            Some(partner) => view! { <PartnerDetails partner /> }.into_view(),
            None => view! {
              <div>
                <p class="mb-2 text-sm text-gray-500">"Contributeur introuvable dans l'ERP."</p>
                <dl class="divide-y divide-gray-100">
                  <Field label = "Matricule" value = source_id.clone() />
                </dl>
              </div>
            }
            .into_view(),
        }
    }
}

#[component]
fn PartnerDetails(partner: Partner) -> impl IntoView {
    let phone = partner.contact_phone().map(ToOwned::to_owned);
    let user_status = partner.user_status_label().map(ToOwned::to_owned);
    let Partner {
        name,
        email,
        matricule,
        function,
        ..
    } = partner;
    view! {
      <dl class="divide-y divide-gray-100">
        <Field label = "Nom" value = name />
        <Field label = "Matricule" value = matricule />
        <Field label = "E-mail" value = email />
        <Field label = "Téléphone" value = phone />
        <Field label = "Fonction" value = function />
        <Field label = "Statut" value = user_status />
      </dl>
    }
}
