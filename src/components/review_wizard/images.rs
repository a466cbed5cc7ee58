use leptos::*;

/// Image source for a payload that is usually plain base64 data.
fn image_src(payload: &str) -> String {
    if payload.starts_with("data:") || payload.starts_with("http") {
        payload.to_owned()
    } else {
        format!("data:image/jpeg;base64,{payload}")
    }
}

#[component]
pub fn ImagesStep(images: Vec<String>) -> impl IntoView {
    if images.is_empty() {
        return view! {
          <p class="text-gray-500">"Aucune image n'a été fournie."</p>
        }
        .into_view();
    }
    view! {
      <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
        { images
            .iter()
            .enumerate()
            .map(|(i, payload)| view! {
              <img
                class="w-full rounded-lg object-cover shadow"
                src = image_src(payload)
                alt = format!("Image {}", i + 1)
              />
            })
            .collect_view()
        }
      </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_base64_becomes_data_url() {
        assert_eq!(image_src("/9j/4AAQ"), "data:image/jpeg;base64,/9j/4AAQ");
    }

    #[test]
    fn urls_are_kept() {
        assert_eq!(
            image_src("data:image/png;base64,iVBORw0KGgo="),
            "data:image/png;base64,iVBORw0KGgo="
        );
        assert_eq!(
            image_src("https://img.example.org/a.jpg"),
            "https://img.example.org/a.jpg"
        );
    }
}
