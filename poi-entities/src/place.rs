use std::fmt;

use crate::{
    geo::{MapBbox, MapPoint},
    status::ValidationStatus,
    time::Timestamp,
    user::UserRef,
};

/// Stable numeric identifier assigned by the moderation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlaceId(i64);

impl PlaceId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for PlaceId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<PlaceId> for i64 {
    fn from(from: PlaceId) -> Self {
        from.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub name          : Option<String>,
    pub number        : Option<String>,
    pub street        : Option<String>,
    pub neighbourhood : Option<String>,
    pub locality      : Option<String>,
    pub county        : Option<String>,
    pub region        : Option<String>,
    pub country       : Option<String>,
    pub plus_code     : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        let Self {
            name,
            number,
            street,
            neighbourhood,
            locality,
            county,
            region,
            country,
            plus_code,
        } = self;
        name.is_none()
            && number.is_none()
            && street.is_none()
            && neighbourhood.is_none()
            && locality.is_none()
            && county.is_none()
            && region.is_none()
            && country.is_none()
            && plus_code.is_none()
    }

    /// Short one-line form: the address name or, if missing, the locality.
    pub fn short(&self) -> Option<&str> {
        self.name.as_deref().or(self.locality.as_deref())
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    pub category    : Option<String>,
    pub subcategory : Option<String>,
    pub attraction  : Option<f64>,
    pub wikidata    : Option<String>,
    pub wikipedia   : Option<String>,
    pub description : Option<String>,
}

impl Properties {
    pub fn wikidata_url(&self) -> Option<String> {
        self.wikidata
            .as_ref()
            .map(|id| format!("https://www.wikidata.org/wiki/{id}"))
    }
}

/// Creation and modification trail maintained by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Audit {
    pub created_at: Option<Timestamp>,
    pub created_by: Option<UserRef>,
    pub updated_at: Option<Timestamp>,
    pub updated_by: Option<UserRef>,
}

/// A point of interest submitted for moderation.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id         : PlaceId,
    pub name       : String,
    pub kind       : Option<String>,
    pub layer      : Option<String>,
    pub source     : Option<String>,
    /// Matricule of the submitting user.
    pub source_id  : Option<String>,
    pub centroid   : Option<MapPoint>,
    pub bbox       : Option<MapBbox>,
    pub address    : Address,
    pub properties : Properties,
    /// Base64 encoded image payloads.
    pub images     : Vec<String>,
    pub status     : ValidationStatus,
    pub date_added : Option<Timestamp>,
    pub audit      : Audit,
}

impl Place {
    pub const fn awaits_decision(&self) -> bool {
        self.status.awaits_decision()
    }

    pub fn category(&self) -> Option<&str> {
        self.properties.category.as_deref()
    }

    pub fn locality(&self) -> Option<&str> {
        self.address.locality.as_deref()
    }
}
