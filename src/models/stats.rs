use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// CO2 saved per kg of collected waste.
pub const CO2_PER_KG: f64 = 1.5;
/// Green points awarded per kg of collected waste (floored).
pub const POINTS_PER_KG: f64 = 10.0;

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SystemStats {
    pub total_pickups: i64,
    pub active_pickups: i64,
    /// Pickups that reached `Picked Up` or `Delivered`.
    pub completed_pickups: i64,
    pub total_waste_collected: f64,
    pub total_co2_saved: f64,
    pub total_donations: i64,
    pub pending_donations: i64,
    pub total_users: i64,
    pub total_collectors: i64,
    pub total_ngos: i64,
    /// Ordered by waste type.
    #[sqlx(skip)]
    pub waste_by_type: Vec<WasteTypeTotal>,
    /// Ordered by month, oldest first.
    #[sqlx(skip)]
    pub pickups_by_month: Vec<MonthlyPickups>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct WasteTypeTotal {
    pub waste_type: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct MonthlyPickups {
    /// `YYYY-MM`, UTC.
    pub month: String,
    pub pickups: i64,
}
