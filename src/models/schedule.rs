use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub user_id: String,
    pub day_of_week: String,
    pub waste_type: String,
    pub recurring: bool,
    pub next_pickup: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub user_id: String,
    pub day_of_week: String,
    pub waste_type: String,
    pub recurring: bool,
    pub next_pickup: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct SchedulePatch {
    pub day_of_week: String,
    pub waste_type: String,
    pub recurring: bool,
    pub next_pickup: NaiveDate,
}
