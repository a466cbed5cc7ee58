use leptos::*;
use leptos_router::*;

use poi_entities::user::User;

use crate::Page;

const MENU: [(Page, &str); 5] = [
    (Page::Dashboard, "Tableau de bord"),
    (Page::PendingPlaces, "En attente"),
    (Page::Places, "Lieux"),
    (Page::History, "Historique"),
    (Page::Settings, "Paramètres"),
];

/// Top bar with the moderation sections.
///
/// Sections are only listed for a signed in moderator.
#[component]
pub fn NavBar<F>(user: Signal<Option<User>>, on_logout: F) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    let expanded = RwSignal::new(false);
    let signed_in = create_memo(move |_| user.with(Option::is_some));
    let location = use_location();

    // Collapse the mobile menu after navigating
    Effect::new(move |_| {
        _ = location.pathname.get();
        expanded.set(false);
    });

    let sections = move || {
        signed_in.get().then(|| {
            MENU.into_iter()
                .map(|(page, label)| view! { <Section page label /> })
                .collect_view()
        })
    };

    view! {
      <header class="bg-gray-800 text-gray-100">
        <nav class="mx-auto flex max-w-7xl flex-wrap items-center justify-between px-4 py-3 sm:px-6 lg:px-8">
          <A href = Page::Dashboard.path() class = "text-lg font-bold tracking-tight".to_string()>
            "Modération POI"
          </A>
          <button
            class="rounded border border-gray-500 px-2 py-1 text-sm md:hidden"
            aria-label="Menu"
            on:click = move |_| expanded.update(|e| *e = !*e)
          >
            "☰"
          </button>
          <div
            class="w-full flex-col md:flex md:w-auto md:flex-row md:items-center md:space-x-4"
            class:hidden = move || !expanded.get()
            class:flex = move || expanded.get()
          >
            { sections }
            <Account user on_logout />
          </div>
        </nav>
      </header>
    }
}

#[component]
fn Section(page: Page, label: &'static str) -> impl IntoView {
    let location = use_location();
    let active = move || location.pathname.with(|path| path == page.path());
    view! {
      <A
        href = page.path()
        class = "block rounded px-3 py-2 text-sm font-medium hover:bg-gray-700".to_string()
      >
        <span class:underline = active>{ label }</span>
      </A>
    }
}

#[component]
fn Account<F>(user: Signal<Option<User>>, on_logout: F) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    move || match user.get() {
        Some(user) => view! {
          <button
            class="block rounded px-3 py-2 text-left text-sm text-gray-300 hover:bg-gray-700 hover:text-white"
            on:click = move |_| on_logout()
          >
            { format!("Déconnexion ({})", user.name) }
          </button>
        }
        .into_view(),
        None => view! {
          <A href = Page::Login.path() class = "block rounded px-3 py-2 text-sm hover:bg-gray-700".to_string()>
            "Connexion"
          </A>
        }
        .into_view(),
    }
}
