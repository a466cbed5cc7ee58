use leptos::*;

use poi_entities::{
    geo::{MapBbox, MapPoint},
    place::{Address, Place},
};

use super::Field;

// Half the edge length of the embedded map around a lone centroid.
const MARGIN_DEG: f64 = 0.005;

/// OpenStreetMap embed URL showing the centroid,
/// framed by the bounding box if there is one.
fn osm_embed_url(centroid: MapPoint, bbox: Option<MapBbox>) -> String {
    let frame = bbox.filter(|b| b.contains(centroid)).unwrap_or_else(|| {
        MapBbox::new(
            MapPoint::new(centroid.lat - MARGIN_DEG, centroid.lng - MARGIN_DEG),
            MapPoint::new(centroid.lat + MARGIN_DEG, centroid.lng + MARGIN_DEG),
        )
    });
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={:.6},{:.6},{:.6},{:.6}&layer=mapnik&marker={:.6},{:.6}",
        frame.sw.lng, frame.sw.lat, frame.ne.lng, frame.ne.lat, centroid.lat, centroid.lng
    )
}

#[component]
pub fn LocationStep(place: Place) -> impl IntoView {
    let Place {
        address,
        centroid,
        bbox,
        ..
    } = place;
    let Address {
        name,
        number,
        street,
        neighbourhood,
        locality,
        county,
        region,
        country,
        plus_code,
    } = address;
    let street = match (number, street) {
        (Some(number), Some(street)) => Some(format!("{number} {street}")),
        (number, street) => street.or(number),
    };
    view! {
      <div class="space-y-4">
        <dl class="divide-y divide-gray-100">
          <Field label = "Adresse" value = name />
          <Field label = "Rue" value = street />
          <Field label = "Quartier" value = neighbourhood />
          <Field label = "Ville" value = locality />
          <Field label = "Département" value = county />
          <Field label = "Région" value = region />
          <Field label = "Pays" value = country />
          <Field label = "Plus code" value = plus_code />
          <Field label = "Latitude" value = centroid.map(|c| c.lat.to_string()) />
          <Field label = "Longitude" value = centroid.map(|c| c.lng.to_string()) />
          <Field
            label = "Zone de délimitation"
            value = bbox.map(|b| format!("{}, {} / {}, {}", b.sw.lat, b.sw.lng, b.ne.lat, b.ne.lng))
          />
        </dl>
        { centroid.map(|centroid| view! {
          <iframe
            class="h-72 w-full rounded-lg border border-gray-200"
            title="Carte"
            loading="lazy"
            src = osm_embed_url(centroid, bbox)
          ></iframe>
        })}
      </div>
    }
}
