use async_trait::async_trait;
use poi_entities::{
    history::ValidationHistoryEntry,
    place::{Place, PlaceId},
    status::ValidationStatus,
    sync::SyncReport,
    user::UserId,
};

use super::Result;
use crate::pagination::Batch;

/// Criteria for the general places list.
///
/// Filters are evaluated by the backend only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceFilter {
    pub status: Option<ValidationStatus>,
    pub category: Option<String>,
    pub locality: Option<String>,
    pub search: Option<String>,
}

impl PlaceFilter {
    /// Query parameters for all non-blank criteria.
    pub fn query_params(&self) -> Vec<(&'static str, &str)> {
        let Self {
            status,
            category,
            locality,
            search,
        } = self;
        [
            ("status", status.as_ref().map(ValidationStatus::as_str)),
            ("category", category.as_deref()),
            ("locality", locality.as_deref()),
            ("search", search.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.query_params().is_empty()
    }
}

#[async_trait(?Send)]
pub trait PlaceGateway {
    async fn pending_places(&self, skip: usize, limit: usize) -> Result<Batch<Place>>;
    async fn search_places(&self, filter: &PlaceFilter) -> Result<Vec<Place>>;
    async fn all_places(&self) -> Result<Vec<Place>>;
    async fn approve_place(
        &self,
        id: PlaceId,
        validated_by: UserId,
        ip_address: Option<&str>,
    ) -> Result<()>;
    async fn reject_place(
        &self,
        id: PlaceId,
        rejection_reason: &str,
        validated_by: UserId,
        ip_address: Option<&str>,
    ) -> Result<()>;
    async fn trigger_sync(&self) -> Result<()>;
    async fn sync_status(&self) -> Result<SyncReport>;
    async fn validation_history(
        &self,
        skip: usize,
        limit: usize,
    ) -> Result<Batch<ValidationHistoryEntry>>;
    async fn place_history(&self, id: PlaceId) -> Result<Vec<ValidationHistoryEntry>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_blank_filter_values() {
        let filter = PlaceFilter {
            status: Some(ValidationStatus::Rejected),
            category: Some("  ".into()),
            locality: Some(" Abidjan ".into()),
            search: None,
        };
        assert_eq!(
            filter.query_params(),
            vec![("status", "rejected"), ("locality", "Abidjan")]
        );
        assert!(PlaceFilter::default().is_empty());
    }
}
