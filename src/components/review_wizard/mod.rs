use leptos::*;

use poi_core::{
    review_wizard::{ReviewWizard, Step},
    usecases::{resolve_ip_address, submit_decision},
};
use poi_entities::{place::Place, user::User};

use crate::{adapters::Toaster, Apis};

mod decision;
mod general;
mod history;
mod images;
mod location;
mod properties;
mod submitter;

use self::{
    decision::*, general::*, history::*, images::*, location::*, properties::*, submitter::*,
};

/// Modal that walks a moderator through a single place.
///
/// Setting `selected` opens the wizard at the first step,
/// it is reset to `None` when the wizard is closed.
#[allow(clippy::too_many_lines)]
#[component]
pub fn ReviewWizardModal(
    apis: Apis,
    toaster: Toaster,
    user: Signal<Option<User>>,
    selected: RwSignal<Option<Place>>,
    #[prop(into)] on_decided: Callback<()>,
) -> impl IntoView {
    // -- signals -- //

    let wizard = RwSignal::new(ReviewWizard::new());

    // -- actions -- //

    let resolve_ip = Action::new(move |()| async move { resolve_ip_address(&apis.ip).await });

    let submit = Action::new(move |()| async move {
        let Some((place_id, decision)) = wizard
            .try_update(ReviewWizard::begin_submission)
            .flatten()
        else {
            return;
        };
        let moderator = user.get_untracked();
        let ip_address = resolve_ip.value().get_untracked().flatten();
        let outcome = submit_decision(
            &apis.places,
            &toaster,
            moderator.as_ref(),
            ip_address.as_deref(),
            place_id,
            decision,
        )
        .await;
        _ = wizard.try_update(|w| w.finish_submission(&outcome));
        if outcome.is_completed() {
            _ = selected.try_set(None);
            on_decided.call(());
        }
    });

    resolve_ip.dispatch(());

    // -- effects -- //

    Effect::new(move |_| {
        selected.with(|place| match place {
            Some(place) => {
                log::debug!("Review place {}", place.id);
                wizard.update(|w| w.open(place));
            }
            None => {
                wizard.update(|w| {
                    w.close();
                });
            }
        });
    });

    // -- memos -- //

    let is_open = create_memo(move |_| wizard.with(ReviewWizard::is_open));
    let step = create_memo(move |_| wizard.with(ReviewWizard::step));
    let loading = Signal::derive(move || wizard.with(ReviewWizard::is_loading));

    // -- callbacks -- //

    let on_close = move |_| {
        if wizard.try_update(ReviewWizard::close).unwrap_or(false) {
            selected.set(None);
        }
    };

    let on_submit = move |()| {
        submit.dispatch(());
    };

    let current_view = move || {
        let place = selected.get()?;
        let content = match step.get()? {
            Step::General => view! { <GeneralStep place /> }.into_view(),
            Step::Images => view! { <ImagesStep images = place.images /> }.into_view(),
            Step::Submitter => view! {
              <SubmitterStep identity_api = apis.identity source_id = place.source_id />
            }
            .into_view(),
            Step::Location => view! { <LocationStep place /> }.into_view(),
            Step::Properties => view! { <PropertiesStep properties = place.properties /> }.into_view(),
            Step::History => view! {
              <HistoryStep places_api = apis.places place_id = place.id audit = place.audit />
            }
            .into_view(),
            Step::Decision => view! { <DecisionStep wizard on_submit /> }.into_view(),
        };
        Some(content)
    };

    view! {
      <Show when = move || is_open.get()>
        <div class="fixed inset-0 z-40 flex items-center justify-center bg-gray-900/50">
          <div class="w-full max-w-3xl max-h-[90vh] overflow-y-auto rounded-lg bg-white shadow-xl">
            <div class="flex items-center justify-between border-b border-gray-200 px-6 py-4">
              <h2 class="text-lg font-semibold text-gray-900">
                { move || selected.with(|p| p.as_ref().map(|p| p.name.clone())) }
              </h2>
              <button
                class="text-gray-500 hover:text-gray-900 disabled:opacity-40"
                prop:disabled = move || loading.get()
                on:click = on_close
              >
                "✕"
              </button>
            </div>
            <StepIndicator wizard />
            <div class="px-6 py-4">
              { current_view }
            </div>
            <div class="flex items-center justify-between border-t border-gray-200 px-6 py-4">
              <button
                class="rounded border border-gray-300 px-4 py-2 text-sm disabled:opacity-40"
                prop:disabled = move || loading.get() || wizard.with(ReviewWizard::is_first_step)
                on:click = move |_| wizard.update(ReviewWizard::previous)
              >
                "Précédent"
              </button>
              <span class="text-sm text-gray-500">
                { move || wizard.with(|w| format!("Étape {} sur {}", w.current_step(), w.total_steps())) }
              </span>
              <button
                class="rounded bg-gray-800 px-4 py-2 text-sm font-semibold text-white disabled:opacity-40"
                prop:disabled = move || loading.get() || wizard.with(ReviewWizard::is_last_step)
                on:click = move |_| wizard.update(ReviewWizard::next)
              >
                "Suivant"
              </button>
            </div>
          </div>
        </div>
      </Show>
    }
}

#[component]
fn StepIndicator(wizard: RwSignal<ReviewWizard>) -> impl IntoView {
    let steps = move || wizard.with(|w| w.steps().to_vec());
    view! {
      <ol class="flex flex-wrap gap-2 border-b border-gray-200 px-6 py-3 text-xs">
        <For
          each = steps
          key = |step| step.number()
          children = move |step| {
              let class = move || {
                  if wizard.with(|w| w.current_step() == step.number()) {
                      "rounded-full bg-gray-800 px-3 py-1 text-white"
                  } else {
                      "rounded-full bg-gray-100 px-3 py-1 text-gray-600 hover:bg-gray-200"
                  }
              };
              view! {
                <li>
                  <button class=class on:click = move |_| wizard.update(|w| w.go_to(step.number()))>
                    { format!("{}. {}", step.number(), step.title()) }
                  </button>
                </li>
              }
          }
        />
      </ol>
    }
}

/// One labelled value of a step, `-` if unknown.
#[component]
fn Field(label: &'static str, #[prop(into)] value: Option<String>) -> impl IntoView {
    let value = value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "-".to_owned());
    view! {
      <div class="py-2 sm:grid sm:grid-cols-3 sm:gap-4">
        <dt class="text-sm font-medium text-gray-500">{ label }</dt>
        <dd class="mt-1 text-sm text-gray-900 sm:col-span-2 sm:mt-0">{ value }</dd>
      </div>
    }
}
