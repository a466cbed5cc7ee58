use super::prelude::*;

/// Number of places listed as "recent" on the dashboard.
pub const RECENT_PLACES: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    /// Pending and synchronized places.
    pub pending: usize,
    pub validated: usize,
    pub rejected: usize,
    /// Most recently added places, newest first.
    pub recent: Vec<Place>,
}

impl DashboardStats {
    pub fn from_places(mut places: Vec<Place>) -> Self {
        let mut stats = Self {
            total: places.len(),
            ..Default::default()
        };
        for place in &places {
            match place.status {
                ValidationStatus::Pending | ValidationStatus::Synchronized => stats.pending += 1,
                ValidationStatus::Validated => stats.validated += 1,
                ValidationStatus::Rejected => stats.rejected += 1,
                ValidationStatus::Unknown(_) => {}
            }
        }
        // Places without a date go last
        places.sort_by(|a, b| match (a.date_added, b.date_added) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        places.truncate(RECENT_PLACES);
        stats.recent = places;
        stats
    }
}

pub async fn load_dashboard<G>(gateway: &G) -> Result<DashboardStats>
where
    G: PlaceGateway,
{
    let places = gateway.all_places().await?;
    Ok(DashboardStats::from_places(places))
}
