use leptos::*;

use poi_entities::{category::category_label, place::Properties};

use super::Field;

#[component]
pub fn PropertiesStep(properties: Properties) -> impl IntoView {
    let wikidata_url = properties.wikidata_url();
    let Properties {
        category,
        subcategory,
        attraction,
        wikidata,
        wikipedia,
        description,
    } = properties;
    let category = category.map(|code| category_label(&code).to_owned());
    view! {
      <dl class="divide-y divide-gray-100">
        <Field label = "Catégorie" value = category />
        <Field label = "Sous-catégorie" value = subcategory />
        <Field label = "Score d'attraction" value = attraction.map(|a| format!("{a:.2}")) />
        <Field label = "Description" value = description />
        <div class="py-2 sm:grid sm:grid-cols-3 sm:gap-4">
          <dt class="text-sm font-medium text-gray-500">"Wikidata"</dt>
          <dd class="mt-1 text-sm sm:col-span-2 sm:mt-0">
            { match (wikidata, wikidata_url) {
                (Some(id), Some(url)) => view! {
                  <a class="text-blue-700 hover:underline" href=url target="_blank" rel="noopener">{ id }</a>
                }.into_view(),
                _ => "-".into_view(),
            }}
          </dd>
        </div>
        <div class="py-2 sm:grid sm:grid-cols-3 sm:gap-4">
          <dt class="text-sm font-medium text-gray-500">"Wikipedia"</dt>
          <dd class="mt-1 text-sm sm:col-span-2 sm:mt-0">
            { match wikipedia.filter(|w| !w.trim().is_empty()) {
                Some(link) => view! {
                  <a class="text-blue-700 hover:underline" href=link.clone() target="_blank" rel="noopener">{ link }</a>
                }.into_view(),
                None => "-".into_view(),
            }}
          </dd>
        </div>
      </dl>
    }
}
