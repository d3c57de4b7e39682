//! Store Info Model

use serde::{Deserialize, Serialize};

/// Opening hours for one weekday
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayHours {
    /// Weekday key, e.g. "monday"
    pub day: String,
    /// Display string, e.g. "12:00 - 23:45" or "Fermé"
    pub hours: String,
}

/// Map coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Restaurant info (门店信息)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    pub address: String,
    pub area: String,
    pub phone: String,
    pub facebook: String,
    pub rating: f32,
    pub reviews_count: u32,
    pub price_range: String,
    pub hours: Vec<DayHours>,
    pub coordinates: Coordinates,
}
