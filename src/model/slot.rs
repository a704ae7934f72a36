use serde::{Deserialize, Serialize};

/// One bookable tee time as the backend reports it. Replaced wholesale on
/// every query, never mutated in place. The backend sends more fields
/// (`time_minutes`, `holes`, `scraped_at`); only these drive the screen.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeeTimeSlot {
    pub time_display: String,
    pub course_name: String,
    pub spots_available: u32,
    #[serde(default)]
    pub price: Option<f64>,
}
