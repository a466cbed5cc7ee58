use super::prelude::*;

pub async fn load_pending_places<G>(gateway: &G, page: usize) -> Result<Page<Place>>
where
    G: PlaceGateway,
{
    let batch = gateway
        .pending_places(pagination::skip(page), ITEMS_PER_PAGE)
        .await?;
    log::debug!(
        "Loaded {} of {} pending places (page {page})",
        batch.items.len(),
        batch.fetched
    );
    Ok(Page::new(page, batch))
}

/// Filter form of the places list.
///
/// Edits only touch the draft. Refreshes reuse the criteria that were
/// applied last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceSearch {
    draft: PlaceFilter,
    applied: PlaceFilter,
}

impl PlaceSearch {
    pub const fn draft(&self) -> &PlaceFilter {
        &self.draft
    }

    pub const fn applied(&self) -> &PlaceFilter {
        &self.applied
    }

    pub fn edit(&mut self, edit: impl FnOnce(&mut PlaceFilter)) {
        edit(&mut self.draft);
    }

    /// Makes the draft the current criteria.
    pub fn apply(&mut self) -> PlaceFilter {
        self.applied = self.draft.clone();
        self.applied.clone()
    }

    pub fn reset(&mut self) -> PlaceFilter {
        *self = Self::default();
        PlaceFilter::default()
    }
}

/// Places matching the filter. The result is shown as returned
/// by the backend, without filtering it again.
pub async fn search_places<G>(gateway: &G, filter: &PlaceFilter) -> Result<Vec<Place>>
where
    G: PlaceGateway,
{
    let places = gateway.search_places(filter).await?;
    log::debug!("Found {} places matching {filter:?}", places.len());
    Ok(places)
}

pub async fn load_validation_history<G>(
    gateway: &G,
    page: usize,
) -> Result<Page<ValidationHistoryEntry>>
where
    G: PlaceGateway,
{
    let batch = gateway
        .validation_history(pagination::skip(page), ITEMS_PER_PAGE)
        .await?;
    Ok(Page::new(page, batch))
}

/// Decisions taken on a single place, most recent first.
///
/// The history is informational: failures are logged and yield
/// an empty list.
pub async fn load_place_history<G>(gateway: &G, id: PlaceId) -> Vec<ValidationHistoryEntry>
where
    G: PlaceGateway,
{
    match gateway.place_history(id).await {
        Ok(mut entries) => {
            entries.sort_by(|a, b| b.action_date.cmp(&a.action_date));
            entries
        }
        Err(err) => {
            log::warn!("Unable to load history of place {id}: {err}");
            vec![]
        }
    }
}

/// Tells the moderator that `what` could not be loaded.
pub fn report_load_failure<N>(notify: &N, what: &str, err: &Error)
where
    N: NotificationGateway,
{
    log::warn!("Unable to load {what}: {err}");
    notify.notify(
        Notification::error("Erreur de chargement")
            .with_description(format!("Impossible de charger {what}.")),
    );
}
