use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::lifecycle::DonationStatus;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    pub donor_id: String,
    pub donor_name: String,
    pub ngo_id: String,
    pub item: String,
    pub quantity: f64,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub status: DonationStatus,
    pub date: NaiveDate,
    pub pickup_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDonation {
    pub donor_id: String,
    pub donor_name: String,
    pub ngo_id: String,
    pub item: String,
    pub quantity: f64,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub pickup_date: Option<NaiveDate>,
}
