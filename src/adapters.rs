//! Browser implementations of the gateways that are not HTTP clients.

use async_trait::async_trait;
use gloo_storage::{errors::StorageError, LocalStorage, Storage};
use leptos::*;
use std::time::Duration;

use poi_boundary as json;
use poi_core::gateways::{self, Delay, Notification, NotificationGateway, SessionStorage};
use poi_entities::user::User;

const SESSION_STORAGE_KEY: &str = "userData";
const TOAST_LIFETIME: Duration = Duration::from_secs(5);

/// The session record in the `LocalStorage` of the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStorage;

impl SessionStorage for LocalSessionStorage {
    fn load(&self) -> gateways::Result<Option<User>> {
        match LocalStorage::get::<json::User>(SESSION_STORAGE_KEY) {
            Ok(user) => Ok(Some(user.into())),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(gateways::Error::Malformed(err.to_string())),
        }
    }

    fn save(&self, user: &User) -> gateways::Result<()> {
        LocalStorage::set(SESSION_STORAGE_KEY, json::User::from(user.clone()))
            .map_err(|err| gateways::Error::Api(err.to_string()))
    }

    fn clear(&self) {
        LocalStorage::delete(SESSION_STORAGE_KEY);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: usize,
    pub notification: Notification,
}

/// Shows notifications as toasts that disappear after a few seconds.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<usize>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(vec![]),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn dismiss(self, id: usize) {
        // The owning scope might be gone already
        _ = self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationGateway for Toaster {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));
        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), TOAST_LIFETIME);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutDelay;

#[async_trait(?Send)]
impl Delay for TimeoutDelay {
    async fn delay(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
