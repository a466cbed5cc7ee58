use leptos::*;

use poi_core::review_wizard::{DecisionState, ReviewWizard};
use poi_entities::reject_reason::RejectReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Choice,
    Approve,
    Reject,
}

#[allow(clippy::too_many_lines)]
#[component]
pub fn DecisionStep(
    wizard: RwSignal<ReviewWizard>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let panel = create_memo(move |_| {
        wizard.with(|w| match w.decision() {
            DecisionState::Idle => Panel::Choice,
            DecisionState::ConfirmingApprove => Panel::Approve,
            DecisionState::ConfirmingReject { .. } => Panel::Reject,
        })
    });
    let loading = Signal::derive(move || wizard.with(ReviewWizard::is_loading));
    let comment = Signal::derive(move || {
        wizard.with(|w| match w.decision() {
            DecisionState::ConfirmingReject { comment, .. } => comment.clone(),
            _ => String::new(),
        })
    });
    let selected_reason = Signal::derive(move || {
        wizard.with(|w| match w.decision() {
            DecisionState::ConfirmingReject { reason, .. } => *reason,
            _ => None,
        })
    });

    let cancel = move |_| wizard.update(ReviewWizard::cancel_confirmation);
    let submit = move |_| on_submit.call(());

    move || match panel.get() {
        Panel::Choice => view! {
          <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
            <button
              class="rounded-lg border-2 border-green-600 p-6 text-green-700 hover:bg-green-50"
              on:click = move |_| {
                  wizard.update(|w| {
                      w.confirm_approve();
                  });
              }
            >
              <span class="block text-lg font-semibold">"Valider"</span>
              <span class="text-sm">"Le lieu sera publié."</span>
            </button>
            <button
              class="rounded-lg border-2 border-red-600 p-6 text-red-700 hover:bg-red-50"
              on:click = move |_| {
                  wizard.update(|w| {
                      w.confirm_reject();
                  });
              }
            >
              <span class="block text-lg font-semibold">"Rejeter"</span>
              <span class="text-sm">"Le contributeur sera informé du motif."</span>
            </button>
          </div>
        }
        .into_view(),
        Panel::Approve => view! {
          <div class="rounded-lg border border-green-300 bg-green-50 p-6">
            <h4 class="text-lg font-semibold text-green-900">"Confirmer la validation"</h4>
            <p class="mt-2 text-sm text-green-900">
              "Êtes-vous sûr de vouloir valider ce lieu ? Cette action est définitive."
            </p>
            <div class="mt-4 flex justify-end space-x-4">
              <button
                class="rounded border border-gray-300 bg-white px-4 py-2 text-sm disabled:opacity-40"
                prop:disabled = move || loading.get()
                on:click = cancel
              >
                "Annuler"
              </button>
              <button
                class="rounded bg-green-700 px-4 py-2 text-sm font-semibold text-white disabled:opacity-40"
                prop:disabled = move || loading.get()
                on:click = submit
              >
                { move || if loading.get() { "Validation…" } else { "Confirmer la validation" } }
              </button>
            </div>
          </div>
        }
        .into_view(),
        Panel::Reject => view! {
          <div class="rounded-lg border border-red-300 bg-red-50 p-6">
            <h4 class="text-lg font-semibold text-red-900">"Confirmer le rejet"</h4>
            <div class="mt-4">
              <label class="block text-sm font-medium text-gray-700" for="reject-reason">
                "Raison du rejet"
              </label>
              <select
                id="reject-reason"
                class="mt-1 block w-full rounded border border-gray-300 bg-white px-3 py-2 text-sm"
                prop:disabled = move || loading.get()
                on:change = move |ev| {
                    let code = event_target_value(&ev);
                    let reason = code.parse::<RejectReason>().ok();
                    wizard.update(|w| w.select_reason(reason));
                }
              >
                <option value="" selected = move || selected_reason.get().is_none()>
                  "Choisir une raison"
                </option>
                { RejectReason::all()
                    .map(|reason| view! {
                      <option
                        value = reason.code()
                        selected = move || selected_reason.get() == Some(reason)
                      >
                        { reason.label() }
                      </option>
                    })
                    .collect_view()
                }
              </select>
            </div>
            <div class="mt-4">
              <label class="block text-sm font-medium text-gray-700" for="reject-comment">
                "Commentaire (optionnel)"
              </label>
              <textarea
                id="reject-comment"
                class="mt-1 block w-full rounded border border-gray-300 px-3 py-2 text-sm"
                rows="3"
                placeholder="Détails supplémentaires pour l'utilisateur..."
                prop:value = move || comment.get()
                prop:disabled = move || loading.get()
                on:input = move |ev| {
                    let text = event_target_value(&ev);
                    wizard.update(|w| w.set_comment(text));
                }
              ></textarea>
            </div>
            <div class="mt-4 flex justify-end space-x-4">
              <button
                class="rounded border border-gray-300 bg-white px-4 py-2 text-sm disabled:opacity-40"
                prop:disabled = move || loading.get()
                on:click = cancel
              >
                "Annuler"
              </button>
              <button
                class="rounded bg-red-700 px-4 py-2 text-sm font-semibold text-white disabled:opacity-40"
                prop:disabled = move || loading.get()
                on:click = submit
              >
                { move || if loading.get() { "Rejet…" } else { "Confirmer le rejet" } }
              </button>
            </div>
          </div>
        }
        .into_view(),
    }
}
