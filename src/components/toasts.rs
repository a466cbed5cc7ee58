use leptos::*;

use poi_core::gateways::NotificationKind;

use crate::adapters::{Toast, Toaster};

#[component]
pub fn Toasts(toaster: Toaster) -> impl IntoView {
    let toasts = toaster.toasts();
    view! {
      <div class="fixed bottom-4 right-4 z-50 flex flex-col space-y-2 w-80">
        <For
          each = move || toasts.get()
          key = |toast| toast.id
          children = move |toast| view! { <ToastItem toast on_dismiss = move |id| toaster.dismiss(id) /> }
        />
      </div>
    }
}

#[component]
fn ToastItem<F>(toast: Toast, on_dismiss: F) -> impl IntoView
where
    F: Fn(usize) + 'static,
{
    let Toast { id, notification } = toast;
    let class = match notification.kind {
        NotificationKind::Success => "rounded-lg shadow-lg p-4 bg-green-50 border border-green-300 text-green-900",
        NotificationKind::Error => "rounded-lg shadow-lg p-4 bg-red-50 border border-red-300 text-red-900",
    };
    view! {
      <div class=class role="status">
        <div class="flex justify-between items-start">
          <p class="font-semibold">{ notification.title }</p>
          <button class="ml-4 text-sm opacity-60 hover:opacity-100" on:click = move |_| on_dismiss(id)>"✕"</button>
        </div>
        { notification.description.map(|d| view! { <p class="mt-1 text-sm">{ d }</p> }) }
      </div>
    }
}
