//! Hand-written fakes of the gateway traits.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    time::Duration,
};

use async_trait::async_trait;

use super::prelude::*;
use crate::{
    gateways::{self, Result},
    pagination::Batch,
};

pub fn moderator(id: i64) -> User {
    User {
        id: UserId::new(id),
        name: format!("Moderator {id}"),
        firstname: "Moderator".into(),
        lastname: id.to_string(),
        email: format!("moderator{id}@example.org"),
        phone: String::new(),
        matricule: format!("MOD-{id:03}"),
        partner_id: None,
        device_unique_id: None,
    }
}

pub fn history_entry(poi_id: i64, action: &str, action_date: Option<&str>) -> ValidationHistoryEntry {
    ValidationHistoryEntry {
        poi_id: PlaceId::new(poi_id),
        action: action.into(),
        rejection_reason: None,
        performed_by: UserId::new(7),
        ip_address: None,
        action_date: action_date.map(|d| d.parse().unwrap()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceCall {
    Pending {
        skip: usize,
        limit: usize,
    },
    Search(PlaceFilter),
    All,
    Approve {
        id: PlaceId,
        validated_by: UserId,
        ip_address: Option<String>,
    },
    Reject {
        id: PlaceId,
        rejection_reason: String,
        validated_by: UserId,
        ip_address: Option<String>,
    },
    TriggerSync,
    SyncStatus,
    History {
        skip: usize,
        limit: usize,
    },
    PlaceHistory(PlaceId),
}

#[derive(Default)]
pub struct MockPlaceGateway {
    pub calls: RefCell<Vec<PlaceCall>>,
    pub places: Vec<Place>,
    pub history: Vec<ValidationHistoryEntry>,
    /// Rows of every pending page the backend sent but that could not be decoded.
    pub malformed_rows: usize,
    /// Makes every request except `sync_status` fail.
    pub fail_with: Option<gateways::Error>,
    /// Answers of consecutive `sync_status` requests, idle when exhausted.
    pub sync_reports: RefCell<VecDeque<Result<SyncReport>>>,
}

impl MockPlaceGateway {
    fn record(&self, call: PlaceCall) -> Result<()> {
        self.calls.borrow_mut().push(call);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl PlaceGateway for MockPlaceGateway {
    async fn pending_places(&self, skip: usize, limit: usize) -> Result<Batch<Place>> {
        self.record(PlaceCall::Pending { skip, limit })?;
        let items: Vec<_> = self.places.iter().skip(skip).take(limit).cloned().collect();
        let fetched = (items.len() + self.malformed_rows).min(limit);
        Ok(Batch { items, fetched })
    }
    async fn search_places(&self, filter: &PlaceFilter) -> Result<Vec<Place>> {
        self.record(PlaceCall::Search(filter.clone()))?;
        Ok(self.places.clone())
    }
    async fn all_places(&self) -> Result<Vec<Place>> {
        self.record(PlaceCall::All)?;
        Ok(self.places.clone())
    }
    async fn approve_place(
        &self,
        id: PlaceId,
        validated_by: UserId,
        ip_address: Option<&str>,
    ) -> Result<()> {
        self.record(PlaceCall::Approve {
            id,
            validated_by,
            ip_address: ip_address.map(Into::into),
        })
    }
    async fn reject_place(
        &self,
        id: PlaceId,
        rejection_reason: &str,
        validated_by: UserId,
        ip_address: Option<&str>,
    ) -> Result<()> {
        self.record(PlaceCall::Reject {
            id,
            rejection_reason: rejection_reason.into(),
            validated_by,
            ip_address: ip_address.map(Into::into),
        })
    }
    async fn trigger_sync(&self) -> Result<()> {
        self.record(PlaceCall::TriggerSync)
    }
    async fn sync_status(&self) -> Result<SyncReport> {
        self.calls.borrow_mut().push(PlaceCall::SyncStatus);
        self.sync_reports
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(SyncReport::default()))
    }
    async fn validation_history(
        &self,
        skip: usize,
        limit: usize,
    ) -> Result<Batch<ValidationHistoryEntry>> {
        self.record(PlaceCall::History { skip, limit })?;
        Ok(self
            .history
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect::<Vec<_>>()
            .into())
    }
    async fn place_history(&self, id: PlaceId) -> Result<Vec<ValidationHistoryEntry>> {
        self.record(PlaceCall::PlaceHistory(id))?;
        Ok(self
            .history
            .iter()
            .filter(|e| e.poi_id == id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MockIdentityGateway {
    pub calls: RefCell<Vec<String>>,
    pub user: Option<User>,
    pub partners: Vec<Partner>,
    pub fail_with: Option<gateways::Error>,
}

impl MockIdentityGateway {
    fn record(&self, call: String) -> Result<()> {
        self.calls.borrow_mut().push(call);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl IdentityGateway for MockIdentityGateway {
    async fn login(&self, login: &str, _password: &str) -> Result<Option<User>> {
        self.record(format!("login:{login}"))?;
        Ok(self.user.clone())
    }
    async fn partner_by_matricule(&self, matricule: &str) -> Result<Option<Partner>> {
        self.record(format!("matricule:{matricule}"))?;
        Ok(self
            .partners
            .iter()
            .find(|p| p.matricule.as_deref() == Some(matricule))
            .cloned())
    }
    async fn partner_by_id(&self, id: i64) -> Result<Option<Partner>> {
        self.record(format!("id:{id}"))?;
        Ok(self.partners.iter().find(|p| p.id == Some(id)).cloned())
    }
}

pub struct MockIpLookup(pub Result<String>);

#[async_trait(?Send)]
impl IpLookup for MockIpLookup {
    async fn public_ip(&self) -> Result<String> {
        self.0.clone()
    }
}

#[derive(Default)]
pub struct MockNotify {
    pub notifications: RefCell<Vec<Notification>>,
}

impl MockNotify {
    pub fn kinds(&self) -> Vec<gateways::NotificationKind> {
        self.notifications.borrow().iter().map(|n| n.kind).collect()
    }
}

impl NotificationGateway for MockNotify {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

/// Returns immediately and records the requested durations.
#[derive(Default)]
pub struct MockDelay {
    pub delays: RefCell<Vec<Duration>>,
}

#[async_trait(?Send)]
impl Delay for MockDelay {
    async fn delay(&self, duration: Duration) {
        self.delays.borrow_mut().push(duration);
    }
}

#[derive(Debug)]
pub struct MockSessionStorage {
    pub record: RefCell<Result<Option<User>>>,
    pub cleared: Cell<usize>,
}

impl MockSessionStorage {
    pub fn with_record(record: Result<Option<User>>) -> Self {
        Self {
            record: RefCell::new(record),
            cleared: Cell::new(0),
        }
    }
}

impl Default for MockSessionStorage {
    fn default() -> Self {
        Self::with_record(Ok(None))
    }
}

impl SessionStorage for MockSessionStorage {
    fn load(&self) -> Result<Option<User>> {
        self.record.borrow().clone()
    }
    fn save(&self, user: &User) -> Result<()> {
        *self.record.borrow_mut() = Ok(Some(user.clone()));
        Ok(())
    }
    fn clear(&self) {
        *self.record.borrow_mut() = Ok(None);
        self.cleared.set(self.cleared.get() + 1);
    }
}
