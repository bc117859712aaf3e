//! Pickup and donation lifecycles.
//!
//! A pickup moves `Requested → Assigned → On the Way → Picked Up → Delivered`.
//! The collector-facing vocabulary (`pending`, `scheduled`, `collected`,
//! `completed`) is accepted as an alias of the same states and exposed through
//! [`PickupStatus::legacy_label`].
//!
//! Stores only apply a [`Transition`], and a `Transition` can only be built by
//! checking the transition table, so no write path can set an arbitrary status.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::stats::{CO2_PER_KG, POINTS_PER_KG};
use crate::models::{Pickup, UserStats};

#[derive(Debug, thiserror::Error)]
#[error("unknown status '{0}'")]
pub struct ParseStatusError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PickupStatus {
    Requested,
    Assigned,
    OnTheWay,
    PickedUp,
    Delivered,
}

impl PickupStatus {
    pub const ALL: [PickupStatus; 5] = [
        PickupStatus::Requested,
        PickupStatus::Assigned,
        PickupStatus::OnTheWay,
        PickupStatus::PickedUp,
        PickupStatus::Delivered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PickupStatus::Requested => "Requested",
            PickupStatus::Assigned => "Assigned",
            PickupStatus::OnTheWay => "On the Way",
            PickupStatus::PickedUp => "Picked Up",
            PickupStatus::Delivered => "Delivered",
        }
    }

    pub fn legacy_label(self) -> &'static str {
        match self {
            PickupStatus::Requested => "pending",
            PickupStatus::Assigned => "scheduled",
            PickupStatus::OnTheWay => "on_the_way",
            PickupStatus::PickedUp => "collected",
            PickupStatus::Delivered => "completed",
        }
    }

    pub fn progress_percent(self) -> u8 {
        match self {
            PickupStatus::Requested => 20,
            PickupStatus::Assigned => 40,
            PickupStatus::OnTheWay => 60,
            PickupStatus::PickedUp => 80,
            PickupStatus::Delivered => 100,
        }
    }

    /// States reachable in one step.
    pub fn allowed_next(self) -> &'static [PickupStatus] {
        match self {
            PickupStatus::Requested => &[PickupStatus::Assigned],
            PickupStatus::Assigned => &[PickupStatus::Assigned, PickupStatus::OnTheWay],
            PickupStatus::OnTheWay => &[PickupStatus::PickedUp],
            PickupStatus::PickedUp => &[PickupStatus::Delivered],
            PickupStatus::Delivered => &[],
        }
    }

    /// Next state of the one-step-per-click progression.
    pub fn next(self) -> Option<PickupStatus> {
        match self {
            PickupStatus::Requested => Some(PickupStatus::Assigned),
            PickupStatus::Assigned => Some(PickupStatus::OnTheWay),
            PickupStatus::OnTheWay => Some(PickupStatus::PickedUp),
            PickupStatus::PickedUp => Some(PickupStatus::Delivered),
            PickupStatus::Delivered => None,
        }
    }

    pub fn can_transition_to(self, to: PickupStatus) -> bool {
        self.allowed_next().contains(&to)
    }

    pub fn is_terminal(self) -> bool {
        self == PickupStatus::Delivered
    }

    /// Only untouched requests may be cancelled by their owner.
    pub fn is_cancellable(self) -> bool {
        self == PickupStatus::Requested
    }
}

impl fmt::Display for PickupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PickupStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "requested" | "pending" => Ok(PickupStatus::Requested),
            "assigned" | "scheduled" => Ok(PickupStatus::Assigned),
            "on the way" => Ok(PickupStatus::OnTheWay),
            "picked up" | "collected" => Ok(PickupStatus::PickedUp),
            "delivered" | "completed" => Ok(PickupStatus::Delivered),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl TryFrom<String> for PickupStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PickupStatus> for String {
    fn from(status: PickupStatus) -> Self {
        status.as_str().to_string()
    }
}

crate::models::text_column!(PickupStatus);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DonationStatus {
    Pending,
    Accepted,
    Declined,
    Completed,
}

impl DonationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DonationStatus::Pending => "Pending",
            DonationStatus::Accepted => "Accepted",
            DonationStatus::Declined => "Declined",
            DonationStatus::Completed => "Completed",
        }
    }

    pub fn can_transition_to(self, to: DonationStatus) -> bool {
        matches!(
            (self, to),
            (DonationStatus::Pending, DonationStatus::Accepted)
                | (DonationStatus::Pending, DonationStatus::Declined)
                | (DonationStatus::Accepted, DonationStatus::Completed)
        )
    }

    pub fn check_transition(self, to: DonationStatus) -> AppResult<()> {
        if self.can_transition_to(to) {
            Ok(())
        } else {
            Err(AppError::InvalidTransition {
                from: self.as_str().to_string(),
                to: to.as_str().to_string(),
            })
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DonationStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(DonationStatus::Pending),
            "accepted" => Ok(DonationStatus::Accepted),
            "declined" => Ok(DonationStatus::Declined),
            "completed" => Ok(DonationStatus::Completed),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl TryFrom<String> for DonationStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DonationStatus> for String {
    fn from(status: DonationStatus) -> Self {
        status.as_str().to_string()
    }
}

crate::models::text_column!(DonationStatus);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub collector_id: String,
    pub collector_name: String,
}

/// Increment applied to the owner's stats when a pickup is delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsCredit {
    pub user_id: String,
    pub pickups: i64,
    pub waste: f64,
    pub co2: f64,
    pub points: i64,
}

impl StatsCredit {
    pub fn for_quantity(user_id: impl Into<String>, quantity: f64) -> Self {
        Self {
            user_id: user_id.into(),
            pickups: 1,
            waste: quantity,
            co2: quantity * CO2_PER_KG,
            points: (quantity * POINTS_PER_KG).floor() as i64,
        }
    }

    pub fn apply_to(&self, stats: &mut UserStats) {
        stats.total_pickups += self.pickups;
        stats.waste_collected += self.waste;
        stats.co2_saved += self.co2;
        stats.green_points += self.points;
    }
}

/// A checked status change for one pickup.
#[derive(Debug, Clone)]
pub struct Transition {
    pickup_id: String,
    from: PickupStatus,
    to: PickupStatus,
    assignment: Option<Assignment>,
    credit: Option<StatsCredit>,
    at: DateTime<Utc>,
}

impl Transition {
    /// Checks `pickup.status → to` against the transition table.
    ///
    /// Entering `Assigned` needs a collector, either the one given or the one
    /// already on the pickup. Reaching `Delivered` carries the stats credit.
    pub fn plan(
        pickup: &Pickup,
        to: PickupStatus,
        assignment: Option<Assignment>,
        at: DateTime<Utc>,
    ) -> AppResult<Self> {
        let from = pickup.status;
        if !from.can_transition_to(to) {
            return Err(AppError::InvalidTransition {
                from: from.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        if to == PickupStatus::Assigned && assignment.is_none() && pickup.collector_id.is_none() {
            return Err(AppError::InvalidInput(
                "a collector is required to assign a pickup".to_string(),
            ));
        }

        let credit = to
            .is_terminal()
            .then(|| StatsCredit::for_quantity(&pickup.user_id, pickup.quantity));

        Ok(Self {
            pickup_id: pickup.id.clone(),
            from,
            to,
            assignment,
            credit,
            at,
        })
    }

    /// One step forward, claiming the pickup for `claim` when it is still unassigned.
    pub fn advance(pickup: &Pickup, claim: Option<Assignment>, at: DateTime<Utc>) -> AppResult<Self> {
        let to = pickup.status.next().ok_or_else(|| AppError::InvalidTransition {
            from: pickup.status.as_str().to_string(),
            to: "next".to_string(),
        })?;
        let assignment = if pickup.collector_id.is_none() { claim } else { None };
        Self::plan(pickup, to, assignment, at)
    }

    /// Admin assignment: sets the collector and moves the pickup to `Assigned`.
    pub fn assign(pickup: &Pickup, assignment: Assignment, at: DateTime<Utc>) -> AppResult<Self> {
        Self::plan(pickup, PickupStatus::Assigned, Some(assignment), at)
    }

    pub fn pickup_id(&self) -> &str {
        &self.pickup_id
    }

    pub fn from(&self) -> PickupStatus {
        self.from
    }

    pub fn to(&self) -> PickupStatus {
        self.to
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    pub fn credit(&self) -> Option<&StatsCredit> {
        self.credit.as_ref()
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }

    /// Applies the change to an in-memory row. Stage timestamps are only set once.
    pub fn apply_to(&self, pickup: &mut Pickup) {
        pickup.status = self.to;
        if let Some(assignment) = &self.assignment {
            pickup.collector_id = Some(assignment.collector_id.clone());
            pickup.collector_name = Some(assignment.collector_name.clone());
        }
        match self.to {
            PickupStatus::Assigned => {
                pickup.assigned_date.get_or_insert(self.at);
            }
            PickupStatus::PickedUp => {
                pickup.picked_up_date.get_or_insert(self.at);
            }
            PickupStatus::Delivered => {
                pickup.delivered_date.get_or_insert(self.at);
            }
            PickupStatus::Requested | PickupStatus::OnTheWay => {}
        }
        pickup.updated_at = self.at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pickup(status: PickupStatus, quantity: f64) -> Pickup {
        let now = Utc::now();
        Pickup {
            id: "P001".to_string(),
            user_id: "U001".to_string(),
            user_name: "John Doe".to_string(),
            address: "123 Green Street".to_string(),
            lat: 51.505,
            lng: -0.09,
            waste_type: "E-Waste".to_string(),
            quantity,
            status,
            collector_id: None,
            collector_name: None,
            requested_date: now,
            assigned_date: None,
            picked_up_date: None,
            delivered_date: None,
            photo_proof: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn jane() -> Assignment {
        Assignment {
            collector_id: "C001".to_string(),
            collector_name: "Jane".to_string(),
        }
    }

    #[test]
    fn test_parse_both_vocabularies() {
        assert_eq!("Requested".parse::<PickupStatus>().unwrap(), PickupStatus::Requested);
        assert_eq!("pending".parse::<PickupStatus>().unwrap(), PickupStatus::Requested);
        assert_eq!("scheduled".parse::<PickupStatus>().unwrap(), PickupStatus::Assigned);
        assert_eq!("On the Way".parse::<PickupStatus>().unwrap(), PickupStatus::OnTheWay);
        assert_eq!("on_the_way".parse::<PickupStatus>().unwrap(), PickupStatus::OnTheWay);
        assert_eq!("collected".parse::<PickupStatus>().unwrap(), PickupStatus::PickedUp);
        assert_eq!("completed".parse::<PickupStatus>().unwrap(), PickupStatus::Delivered);
        assert!("lost".parse::<PickupStatus>().is_err());
    }

    #[test]
    fn test_progress_and_next() {
        let percents: Vec<u8> = PickupStatus::ALL.iter().map(|s| s.progress_percent()).collect();
        assert_eq!(percents, vec![20, 40, 60, 80, 100]);

        let mut status = PickupStatus::Requested;
        let mut steps = 0;
        while let Some(next) = status.next() {
            assert!(status.can_transition_to(next));
            status = next;
            steps += 1;
        }
        assert_eq!(steps, 4);
        assert!(status.is_terminal());
    }

    #[test]
    fn test_transition_table_rejects_skips_and_reversals() {
        assert!(!PickupStatus::Requested.can_transition_to(PickupStatus::Delivered));
        assert!(!PickupStatus::PickedUp.can_transition_to(PickupStatus::Assigned));
        assert!(PickupStatus::Delivered.allowed_next().is_empty());

        let p = pickup(PickupStatus::Requested, 5.0);
        let err = Transition::plan(&p, PickupStatus::PickedUp, None, Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition { .. }));
    }

    #[test]
    fn test_assign_requires_collector() {
        let p = pickup(PickupStatus::Requested, 5.0);
        let err = Transition::plan(&p, PickupStatus::Assigned, None, Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let t = Transition::assign(&p, jane(), Utc::now()).unwrap();
        assert_eq!(t.to(), PickupStatus::Assigned);
        assert_eq!(t.to().legacy_label(), "scheduled");
    }

    #[test]
    fn test_delivery_carries_credit() {
        let mut p = pickup(PickupStatus::PickedUp, 12.34);
        p.collector_id = Some("C001".to_string());
        let t = Transition::advance(&p, None, Utc::now()).unwrap();
        let credit = t.credit().unwrap();
        assert_eq!(credit.user_id, "U001");
        assert_eq!(credit.pickups, 1);
        assert!((credit.co2 - 18.51).abs() < 1e-9);
        assert_eq!(credit.points, 123);
    }

    #[test]
    fn test_advance_stops_at_delivered() {
        let p = pickup(PickupStatus::Delivered, 1.0);
        assert!(Transition::advance(&p, Some(jane()), Utc::now()).is_err());
    }

    #[test]
    fn test_stage_timestamps_set_once() {
        let mut p = pickup(PickupStatus::Requested, 1.0);
        let first = Utc::now();
        Transition::assign(&p, jane(), first).unwrap().apply_to(&mut p);
        assert_eq!(p.assigned_date, Some(first));

        let later = first + chrono::Duration::minutes(5);
        let reassign = Assignment {
            collector_id: "C002".to_string(),
            collector_name: "Sarah".to_string(),
        };
        Transition::assign(&p, reassign, later).unwrap().apply_to(&mut p);
        assert_eq!(p.assigned_date, Some(first));
        assert_eq!(p.collector_name.as_deref(), Some("Sarah"));
        assert_eq!(p.updated_at, later);
    }

    #[test]
    fn test_donation_transitions() {
        assert!(DonationStatus::Pending.can_transition_to(DonationStatus::Accepted));
        assert!(DonationStatus::Pending.can_transition_to(DonationStatus::Declined));
        assert!(DonationStatus::Accepted.can_transition_to(DonationStatus::Completed));
        assert!(DonationStatus::Declined.check_transition(DonationStatus::Accepted).is_err());
        assert!(DonationStatus::Completed.check_transition(DonationStatus::Pending).is_err());
    }

    #[test]
    fn test_status_serde_uses_canonical_labels() {
        let json = serde_json::to_string(&PickupStatus::OnTheWay).unwrap();
        assert_eq!(json, "\"On the Way\"");
        let parsed: PickupStatus = serde_json::from_str("\"scheduled\"").unwrap();
        assert_eq!(parsed, PickupStatus::Assigned);
    }
}
