use std::{cell::Cell, rc::Rc, time::Duration};

use super::prelude::*;

/// Default interval between two sync status requests.
pub const SYNC_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Cancellation handle of a polling loop.
///
/// Clones share the same flag. Polling ends at the next tick after
/// [`PollHandle::cancel`] and whenever a terminal status is reached.
#[derive(Debug, Clone, Default)]
pub struct PollHandle(Rc<Cell<bool>>);

impl PollHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Triggers the backend synchronization job and follows it until it
/// is finished.
#[derive(Debug)]
pub struct SyncPoller<'a, G, N, D> {
    pub gateway: &'a G,
    pub notify: &'a N,
    pub delay: &'a D,
    pub interval: Duration,
}

impl<G, N, D> SyncPoller<'_, G, N, D>
where
    G: PlaceGateway,
    N: NotificationGateway,
    D: Delay,
{
    /// Starts a new synchronization run.
    ///
    /// Returns the terminal status, or `None` if the job could not be
    /// started or polling was cancelled.
    pub async fn start<R, S>(
        &self,
        handle: &PollHandle,
        mut on_report: R,
        on_success: S,
    ) -> Option<SyncStatus>
    where
        R: FnMut(&SyncReport),
        S: FnOnce(),
    {
        if handle.is_cancelled() {
            return None;
        }
        if let Err(err) = self.gateway.trigger_sync().await {
            log::warn!("Unable to start synchronization: {err}");
            self.notify.notify(
                Notification::error("Échec du démarrage")
                    .with_description(err.to_string()),
            );
            return None;
        }
        log::info!("Synchronization started");
        self.notify.notify(
            Notification::success("Synchronisation lancée")
                .with_description("La synchronisation a démarré en arrière-plan."),
        );
        on_report(&SyncReport {
            status: SyncStatus::Running,
            ..Default::default()
        });
        self.watch(handle, on_report, on_success).await
    }

    /// Fetches the current status and keeps polling if a run is
    /// in progress.
    ///
    /// `last_known` is the status seen before. If it was running and
    /// the fetch fails, the job is followed anyway.
    pub async fn resume<R, S>(
        &self,
        handle: &PollHandle,
        last_known: SyncStatus,
        mut on_report: R,
        on_success: S,
    ) -> Option<SyncStatus>
    where
        R: FnMut(&SyncReport),
        S: FnOnce(),
    {
        match self.gateway.sync_status().await {
            Ok(report) => {
                if handle.is_cancelled() {
                    return None;
                }
                on_report(&report);
                if !report.status.is_running() {
                    return Some(report.status);
                }
            }
            Err(err) => {
                log::warn!("Unable to fetch synchronization status: {err}");
                if !last_known.is_running() {
                    return None;
                }
            }
        }
        log::debug!("Resuming to follow a running synchronization");
        self.watch(handle, on_report, on_success).await
    }

    async fn watch<R, S>(
        &self,
        handle: &PollHandle,
        mut on_report: R,
        on_success: S,
    ) -> Option<SyncStatus>
    where
        R: FnMut(&SyncReport),
        S: FnOnce(),
    {
        loop {
            self.delay.delay(self.interval).await;
            if handle.is_cancelled() {
                log::debug!("Synchronization polling cancelled");
                return None;
            }
            let report = match self.gateway.sync_status().await {
                Ok(report) => report,
                Err(err) => {
                    // Transient, try again at the next tick
                    log::warn!("Unable to fetch synchronization status: {err}");
                    continue;
                }
            };
            if handle.is_cancelled() {
                return None;
            }
            on_report(&report);
            let SyncReport {
                status,
                error_message,
                ..
            } = report;
            match status {
                SyncStatus::Running => continue,
                SyncStatus::Success => {
                    handle.cancel();
                    log::info!("Synchronization finished");
                    self.notify
                        .notify(Notification::success("Synchronisation terminée"));
                    on_success();
                }
                SyncStatus::Error => {
                    handle.cancel();
                    log::warn!("Synchronization failed: {error_message:?}");
                    let notification = Notification::error("Échec de la synchronisation");
                    self.notify.notify(match error_message {
                        Some(message) => notification.with_description(message),
                        None => notification,
                    });
                }
                SyncStatus::Idle => {
                    handle.cancel();
                    log::debug!("Synchronization is idle");
                }
            }
            return Some(status);
        }
    }
}
