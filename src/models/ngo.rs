use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Unit recorded for inventory derived from accepted donations.
pub const DEFAULT_INVENTORY_UNIT: &str = "kg";

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Ngo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
    pub accepted_waste_types: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNgo {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
    pub accepted_waste_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub ngo_id: String,
    pub item: String,
    pub quantity: f64,
    pub unit: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub ngo_id: String,
    pub item: String,
    pub quantity: f64,
    pub unit: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub ngo_id: String,
    pub material_type: String,
    pub weight: f64,
    pub source: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMaterial {
    pub ngo_id: String,
    pub material_type: String,
    pub weight: f64,
    pub source: String,
    pub notes: Option<String>,
}
