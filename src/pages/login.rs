use leptos::{ev, *};

use poi_core::usecases::{authenticate, Error};
use poi_entities::user::User;
use poi_frontend_api::IdentityApi;

#[component]
pub fn Login<F>(identity_api: IdentityApi, on_success: F) -> impl IntoView
where
    F: Fn(User) + 'static + Clone,
{
    let (login, set_login) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (login_error, set_login_error) = create_signal(None::<String>);
    let (wait_for_response, set_wait_for_response) = create_signal(false);

    let login_action = create_action(move |(login, password): &(String, String)| {
        log::info!("Logging in with {login}");
        let login = login.to_owned();
        let password = password.to_owned();
        let on_success = on_success.clone();
        async move {
            set_wait_for_response.update(|w| *w = true);
            let result = authenticate(&identity_api, &login, &password).await;
            set_wait_for_response.update(|w| *w = false);
            match result {
                Ok(user) => {
                    set_login_error.update(|e| *e = None);
                    on_success(user);
                }
                Err(err) => {
                    let msg = match err {
                        Error::Gateway(err) => {
                            log::error!("Unable to login with {login}: {err}");
                            "Connexion au serveur impossible. Veuillez réessayer.".to_owned()
                        }
                        err => err.to_string(),
                    };
                    set_login_error.update(|e| *e = Some(msg));
                }
            }
        }
    });

    let disabled = Signal::derive(move || wait_for_response.get());
    let submit_disabled =
        Signal::derive(move || disabled.get() || login.with(|l| l.trim().is_empty()));

    let submit = move || {
        login_action.dispatch((login.get_untracked(), password.get_untracked()));
    };

    let input_class = "form-control block w-full px-3 py-1.5 text-base font-normal text-gray-700 bg-white bg-clip-padding border border-solid border-gray-300 rounded transition ease-in-out m-0 focus:text-gray-700 focus:bg-white focus:border-gray-600 focus:outline-none";

    view! {
      <section>
        <div class="container py-12 px-6 mx-auto">
          <div class="flex justify-center items-center flex-wrap h-full g-6 text-gray-800">
            <div class="xl:w-6/12">
              <div class="block bg-white shadow-lg rounded-lg">
                <div class="px-4 md:px-0 mx-auto">
                  <div class="md:p-12 md:mx-6">
                    <form on:submit = move |ev: ev::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }>
                      <div class="text-center">
                        <h4 class="text-xl font-semibold mt-1 mb-12 pb-1">"Connexion"</h4>
                      </div>
                      <p class="mb-4 text-gray-600">"Connectez-vous avec votre compte de modérateur."</p>
                      { move || login_error.get().map(|err| view! {
                        <p class="mb-4 text-red-700">{ err }</p>
                      })}
                      <div class="mb-4">
                        <input
                          type = "text"
                          required
                          placeholder = "Identifiant ou adresse e-mail"
                          class = input_class
                          prop:disabled = move || disabled.get()
                          on:input = move |ev| set_login.set(event_target_value(&ev))
                          // The `change` event fires when the browser fills the form automatically,
                          on:change = move |ev| set_login.set(event_target_value(&ev))
                        />
                      </div>
                      <div class="mb-4">
                        <input
                          type = "password"
                          placeholder = "Mot de passe"
                          class = input_class
                          prop:disabled = move || disabled.get()
                          on:input = move |ev| set_password.set(event_target_value(&ev))
                          on:change = move |ev| set_password.set(event_target_value(&ev))
                        />
                      </div>
                      <div class="text-center pt-1 mb-12 pb-1">
                        <button
                          type = "submit"
                          class="inline-block px-6 py-2.5 text-white font-medium text-xs leading-tight uppercase rounded shadow-md bg-gray-800 hover:bg-gray-700 focus:outline-none w-full mb-3 disabled:opacity-40"
                          prop:disabled = move || submit_disabled.get()
                        >
                          { move || if wait_for_response.get() { "Connexion…" } else { "Se connecter" } }
                        </button>
                      </div>
                    </form>
                  </div>
                </div>
              </div>
            </div>
          </div>
        </div>
      </section>
    }
}
