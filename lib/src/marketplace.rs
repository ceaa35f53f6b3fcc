//! Marketplace listing of businesses with their current availability.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::store::{AvailabilityStatus, WeeklySchedule};

pub type BusinessId = Uuid;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub category: Option<String>,
    #[serde(default)]
    pub schedule: WeeklySchedule,
}

#[derive(Clone, Debug)]
pub struct Listing<'a> {
    pub business: &'a Business,
    pub availability: AvailabilityStatus,
}

/// Attaches current availability to each business. Open businesses are
/// listed first, otherwise input order is kept.
pub fn annotate(businesses: &[Business], now: NaiveDateTime) -> Vec<Listing<'_>> {
    let mut listings: Vec<Listing> = businesses
        .iter()
        .map(|business| Listing {
            business,
            availability: business.schedule.availability(now),
        })
        .collect();

    listings.sort_by_key(|l| !l.availability.is_open);
    listings
}
