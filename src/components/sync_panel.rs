use leptos::*;
use std::time::Duration;

use poi_core::usecases::{PollHandle, SyncPoller};
use poi_entities::sync::{SyncReport, SyncStatus};
use poi_frontend_api::PlacesApi;

use super::SyncStatusBadge;
use crate::adapters::{TimeoutDelay, Toaster};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    Start,
    Resume,
}

/// Starts and follows the synchronization with the ERP backend.
///
/// Polling stops when the panel is unmounted.
#[component]
pub fn SyncPanel(
    places_api: PlacesApi,
    toaster: Toaster,
    poll_interval: Duration,
    #[prop(into)] on_synced: Callback<()>,
) -> impl IntoView {
    // -- signals -- //

    let report = RwSignal::new(None::<SyncReport>);
    let starting = RwSignal::new(false);
    let handle = StoredValue::new(PollHandle::new());

    // -- actions -- //

    let follow = Action::new(move |run: &Run| {
        let run = *run;
        let last_known =
            report.with_untracked(|r| r.as_ref().map_or(SyncStatus::Idle, |r| r.status));
        // Only one watcher at a time
        handle.get_value().cancel();
        let current = PollHandle::new();
        handle.set_value(current.clone());
        async move {
            let poller = SyncPoller {
                gateway: &places_api,
                notify: &toaster,
                delay: &TimeoutDelay,
                interval: poll_interval,
            };
            let on_report = |r: &SyncReport| {
                // The first report arrives as soon as the job was triggered
                _ = starting.try_set(false);
                _ = report.try_set(Some(r.clone()));
            };
            let on_success = || on_synced.call(());
            let status = match run {
                Run::Start => {
                    starting.set(true);
                    let status = poller.start(&current, on_report, on_success).await;
                    _ = starting.try_set(false);
                    status
                }
                Run::Resume => {
                    poller
                        .resume(&current, last_known, on_report, on_success)
                        .await
                }
            };
            log::debug!("Stopped following the synchronization: {status:?}");
        }
    });

    follow.dispatch(Run::Resume);

    on_cleanup(move || {
        _ = handle.try_with_value(PollHandle::cancel);
    });

    // -- memos -- //

    let status = create_memo(move |_| {
        report.with(|r| r.as_ref().map_or(SyncStatus::Idle, |r| r.status))
    });
    let start_disabled = Signal::derive(move || starting.get() || status.get().is_running());

    view! {
      <div class="overflow-hidden bg-white sm:rounded-lg sm:shadow">
        <div class="flex items-center justify-between border-b border-gray-200 px-4 py-5 sm:px-6">
          <h3 class="text-base font-semibold leading-6 text-gray-900">"Synchronisation Odoo"</h3>
          { move || view! { <SyncStatusBadge status = status.get() /> } }
        </div>
        <dl class="grid grid-cols-1 gap-4 px-4 py-5 sm:grid-cols-2 sm:px-6 text-sm">
          <div>
            <dt class="text-gray-500">"Dernier démarrage"</dt>
            <dd>{ move || report.with(|r| r.as_ref().and_then(|r| r.last_run_start.clone()).unwrap_or_else(|| "-".into())) }</dd>
          </div>
          <div>
            <dt class="text-gray-500">"Dernière fin"</dt>
            <dd>{ move || report.with(|r| r.as_ref().and_then(|r| r.last_run_end.clone()).unwrap_or_else(|| "-".into())) }</dd>
          </div>
        </dl>
        { move || report.with(|r| r.as_ref().and_then(|r| r.error_message.clone())).map(|msg| view! {
          <p class="mx-4 mb-4 rounded bg-red-50 p-3 text-sm text-red-700">{ msg }</p>
        })}
        <div class="flex space-x-4 border-t border-gray-200 px-4 py-4 sm:px-6">
          <button
            class="rounded bg-gray-800 px-4 py-2 text-sm font-semibold text-white hover:bg-gray-700 disabled:opacity-40"
            prop:disabled = move || start_disabled.get()
            on:click = move |_| follow.dispatch(Run::Start)
          >
            "Lancer la synchronisation"
          </button>
          <button
            class="rounded border border-gray-300 px-4 py-2 text-sm disabled:opacity-40"
            prop:disabled = move || starting.get()
            on:click = move |_| follow.dispatch(Run::Resume)
          >
            "Actualiser le statut"
          </button>
        </div>
      </div>
    }
}
