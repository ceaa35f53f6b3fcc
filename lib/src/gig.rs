use rust_decimal::Decimal;
use uuid::Uuid;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance using the haversine formula.
    pub fn distance_miles(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.).sin().powi(2);
        let c = 2. * a.sqrt().atan2((1. - a).sqrt());
        EARTH_RADIUS_MILES * c
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Gig {
    pub id: Uuid,
    pub title: String,
    pub pay: Decimal,
    /// Remote gigs don't have a location.
    pub location: Option<Coordinates>,
}

/// Returns gigs within `radius_miles` of `origin` along with their distance,
/// nearest first. Gigs without a location are left out.
pub fn within_radius(gigs: &[Gig], origin: Coordinates, radius_miles: f64) -> Vec<(f64, &Gig)> {
    let mut nearby: Vec<(f64, &Gig)> = gigs
        .iter()
        .filter_map(|gig| {
            let distance = gig.location?.distance_miles(&origin);
            (distance <= radius_miles).then_some((distance, gig))
        })
        .collect();

    nearby.sort_by(|a, b| a.0.total_cmp(&b.0));
    tracing::trace!(
        "{} of {} gigs within {} miles",
        nearby.len(),
        gigs.len(),
        radius_miles
    );
    nearby
}
