use leptos::*;
use leptos_router::*;

use poi_core::usecases::SessionStore;
use poi_entities::user::User;
use poi_frontend_api::{IdentityApi, IpApi, PlacesApi};

pub mod adapters;
pub mod config;

mod pages;
use pages::*;

mod components;
use components::*;

use self::{
    adapters::{LocalSessionStorage, Toaster},
    config::Config,
};

/// The backends as configured at start-up.
#[derive(Debug, Clone, Copy)]
pub struct Apis {
    pub places: PlacesApi,
    pub identity: IdentityApi,
    pub ip: IpApi,
}

impl Apis {
    /// The clients live as long as the app,
    /// so the configured strings are leaked once.
    fn new(config: &Config) -> Self {
        let Config {
            places,
            identity,
            ip_lookup,
            ..
        } = config.clone();
        Self {
            places: PlacesApi::new(places.api_url.leak(), places.api_key.leak()),
            identity: IdentityApi::new(
                identity.api_url.leak(),
                identity.api_key.leak(),
                identity.token.leak(),
                identity.db.leak(),
            ),
            ip: IpApi::new(ip_lookup.url.leak()),
        }
    }
}

pub type Session = RwSignal<SessionStore<LocalSessionStorage>>;

#[allow(clippy::too_many_lines)]
#[component]
#[must_use]
pub fn App(config: Config) -> impl IntoView {
    let apis = Apis::new(&config);
    let poll_interval = config.sync.poll_interval;

    // -- signals -- //

    let session: Session = RwSignal::new(SessionStore::restore(LocalSessionStorage));
    let user = Signal::derive(move || session.with(|s| s.user().cloned()));
    let logged_in = Signal::derive(move || session.with(SessionStore::is_authenticated));
    let toaster = Toaster::new();

    log::debug!("User is logged in: {}", logged_in.get_untracked());

    // -- callbacks -- //

    // The protected routes redirect to the login page by themselves.
    let on_logout = move || {
        log::info!("Logging out");
        session.update(SessionStore::sign_out);
    };

    view! {
      <Router>
        <NavBar user on_logout />
        <main class="container mx-auto px-6 pb-12">
          <Routes>
            <Route
              path=Page::Login.path()
              view=move || view! {
                <Login
                  identity_api = apis.identity
                  on_success = move |user: User| {
                      log::info!("Successfully logged in");
                      session.update(|s| s.sign_in(user));
                      let navigate = use_navigate();
                      navigate(Page::Dashboard.path(), NavigateOptions::default());
                  } />
              }
            />
            <Route
              path=Page::Dashboard.path()
              view=move || view! {
                <RequireLogin logged_in>
                  <Dashboard apis toaster user />
                </RequireLogin>
              }
            />
            <Route
              path=Page::PendingPlaces.path()
              view=move || view! {
                <RequireLogin logged_in>
                  <PendingPlaces apis toaster user />
                </RequireLogin>
              }
            />
            <Route
              path=Page::Places.path()
              view=move || view! {
                <RequireLogin logged_in>
                  <Places apis toaster user poll_interval />
                </RequireLogin>
              }
            />
            <Route
              path=Page::History.path()
              view=move || view! {
                <RequireLogin logged_in>
                  <History places_api = apis.places toaster />
                </RequireLogin>
              }
            />
            <Route
              path=Page::Settings.path()
              view=move || view! {
                <RequireLogin logged_in>
                  <Settings places_api = apis.places toaster user poll_interval />
                </RequireLogin>
              }
            />
          </Routes>
        </main>
        <Toasts toaster />
      </Router>
    }
}

#[component]
fn RequireLogin(logged_in: Signal<bool>, children: ChildrenFn) -> impl IntoView {
    let children = store_value(children);
    view! {
      <Show
        when = move || logged_in.get()
        fallback = || view! { <Redirect path = Page::Login.path() /> }
      >
        { children.with_value(|children| children()) }
      </Show>
    }
}
