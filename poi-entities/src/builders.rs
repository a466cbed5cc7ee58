pub use place_builder::*;

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub mod place_builder {

    use super::*;
    use crate::{geo::MapPoint, place::*, status::ValidationStatus, time::Timestamp};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.place.id = PlaceId::new(id);
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn status(mut self, status: ValidationStatus) -> Self {
            self.place.status = status;
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.place.properties.category = Some(category.into());
            self
        }
        pub fn locality(mut self, locality: &str) -> Self {
            self.place.address.locality = Some(locality.into());
            self
        }
        pub fn source_id(mut self, source_id: &str) -> Self {
            self.place.source_id = Some(source_id.into());
            self
        }
        pub fn centroid(mut self, lat: f64, lng: f64) -> Self {
            self.place.centroid = Some(MapPoint::new(lat, lng));
            self
        }
        /// Panics on malformed input, test use only.
        pub fn date_added(mut self, date_added: &str) -> Self {
            let ts: Timestamp = date_added.parse().expect("valid timestamp");
            self.place.date_added = Some(ts);
            self
        }
        pub fn images(mut self, images: Vec<&str>) -> Self {
            self.place.images = images.into_iter().map(Into::into).collect();
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> Self::Build {
            Self::Build {
                place: Place {
                    id: PlaceId::new(1),
                    name: "".into(),
                    kind: None,
                    layer: None,
                    source: None,
                    source_id: None,
                    centroid: None,
                    bbox: None,
                    address: Address::default(),
                    properties: Properties::default(),
                    images: vec![],
                    status: ValidationStatus::Pending,
                    date_added: None,
                    audit: Audit::default(),
                },
            }
        }
    }
}
