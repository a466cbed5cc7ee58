use leptos::*;

use poi_entities::{category::category_label, place::Place};

use super::Field;
use crate::components::StatusBadge;

#[component]
pub fn GeneralStep(place: Place) -> impl IntoView {
    let Place {
        id,
        name,
        kind,
        layer,
        source,
        source_id,
        status,
        date_added,
        properties,
        ..
    } = place;
    let category = properties
        .category
        .as_deref()
        .map(|code| category_label(code).to_owned());
    view! {
      <dl class="divide-y divide-gray-100">
        <Field label = "Identifiant" value = id.to_string() />
        <Field label = "Nom" value = name />
        <Field label = "Type" value = kind />
        <Field label = "Couche" value = layer />
        <Field label = "Catégorie" value = category />
        <Field label = "Sous-catégorie" value = properties.subcategory />
        <Field label = "Source" value = source />
        <Field label = "Matricule du contributeur" value = source_id />
        <Field label = "Ajouté le" value = date_added.map(|d| d.format_date_time()) />
        <div class="py-2 sm:grid sm:grid-cols-3 sm:gap-4">
          <dt class="text-sm font-medium text-gray-500">"Statut"</dt>
          <dd class="mt-1 sm:col-span-2 sm:mt-0"><StatusBadge status /></dd>
        </div>
      </dl>
    }
}
