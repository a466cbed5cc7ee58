use leptos::*;

/// Previous/next navigation for lists without a total count.
#[component]
pub fn Pagination(
    page: RwSignal<usize>,
    has_previous: Signal<bool>,
    has_next: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let button = "px-3 py-1 rounded border border-gray-300 text-sm disabled:opacity-40";
    view! {
      <div class="flex items-center justify-between py-4">
        <button
          class=button
          prop:disabled = move || disabled.get() || !has_previous.get()
          on:click = move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
        >
          "Précédent"
        </button>
        <span class="text-sm text-gray-600">{ move || format!("Page {}", page.get()) }</span>
        <button
          class=button
          prop:disabled = move || disabled.get() || !has_next.get()
          on:click = move |_| page.update(|p| *p += 1)
        >
          "Suivant"
        </button>
      </div>
    }
}
