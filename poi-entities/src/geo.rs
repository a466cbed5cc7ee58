/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

impl MapPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBbox {
    pub sw: MapPoint,
    pub ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub fn contains(&self, pt: MapPoint) -> bool {
        (self.sw.lat..=self.ne.lat).contains(&pt.lat)
            && (self.sw.lng..=self.ne.lng).contains(&pt.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_contains() {
        let bbox = MapBbox::new(MapPoint::new(4.0, -5.0), MapPoint::new(6.0, -3.0));
        assert!(bbox.contains(MapPoint::new(5.0, -4.0)));
        assert!(bbox.contains(MapPoint::new(4.0, -3.0)));
        assert!(!bbox.contains(MapPoint::new(7.0, -4.0)));
    }

    #[test]
    fn reject_out_of_range_points() {
        assert!(MapPoint::new(5.35, -4.0).is_valid());
        assert!(!MapPoint::new(95.0, 0.0).is_valid());
        assert!(!MapPoint::new(0.0, f64::NAN).is_valid());
    }
}
