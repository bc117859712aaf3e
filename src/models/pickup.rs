use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::lifecycle::PickupStatus;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Pickup {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub waste_type: String,
    pub quantity: f64,
    pub status: PickupStatus,
    pub collector_id: Option<String>,
    pub collector_name: Option<String>,
    pub requested_date: DateTime<Utc>,
    pub assigned_date: Option<DateTime<Utc>>,
    pub picked_up_date: Option<DateTime<Utc>>,
    pub delivered_date: Option<DateTime<Utc>>,
    pub photo_proof: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPickup {
    pub user_id: String,
    pub user_name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub waste_type: String,
    pub quantity: f64,
}

/// Editable fields of a pickup; status and assignment go through `Transition`.
#[derive(Debug, Clone)]
pub struct PickupDetails {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub waste_type: String,
    pub quantity: f64,
}
