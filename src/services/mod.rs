pub mod auth_service;
pub mod dashboard_service;
pub mod donation_service;
pub mod health_service;
pub mod ngo_service;
pub mod pickup_service;
pub mod realtime_service;
pub mod schedule_service;
pub mod user_service;

pub use auth_service::AuthServiceImpl;
pub use dashboard_service::DashboardServiceImpl;
pub use donation_service::DonationServiceImpl;
pub use health_service::HealthServiceImpl;
pub use ngo_service::NgoServiceImpl;
pub use pickup_service::PickupServiceImpl;
pub use realtime_service::RealtimeServiceImpl;
pub use schedule_service::ScheduleServiceImpl;
pub use user_service::UserServiceImpl;

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tonic::{Request, Status};

use crate::db::Store;
use crate::error::{AppError, AppResult};
use crate::middleware::AuthenticatedUser;

pub type SharedStore = Arc<dyn Store>;

pub(crate) fn get_authenticated_user<T>(request: &Request<T>) -> Result<AuthenticatedUser, Status> {
    request
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| Status::unauthenticated("Authentication required"))
}

pub(crate) fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Parses an optional `YYYY-MM-DD` field; empty means absent.
pub(crate) fn parse_date(field: &str, value: &str) -> AppResult<Option<NaiveDate>> {
    match non_empty(value) {
        None => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::InvalidInput(format!("{} must be YYYY-MM-DD", field))),
    }
}

pub(crate) fn timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339()
}

pub(crate) fn optional_timestamp(value: &Option<DateTime<Utc>>) -> String {
    value.as_ref().map(timestamp).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("date", "").unwrap(), None);
        assert_eq!(
            parse_date("date", "2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert!(matches!(
            parse_date("next_pickup", "03/01/2024"),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" Plastic "), Some("Plastic"));
    }
}
