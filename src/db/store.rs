//! Data-access boundary: one trait per entity group.
//!
//! `PgStore` and `MemoryStore` implement every trait; services hold them as
//! `Arc<dyn Store>` (or a narrower trait where one side effect needs its own seam).

use crate::error::AppResult;
use crate::lifecycle::{DonationStatus, Transition};
use crate::models::{
    Donation, InventoryItem, Material, NewDonation, NewInventoryItem, NewMaterial, NewNgo,
    NewPickup, NewSchedule, NewUser, Ngo, Pickup, PickupDetails, ProfilePatch, Role, Schedule,
    SchedulePatch, SystemStats, User, UserStats,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickupFilter {
    All,
    ByUser(String),
    ByCollector(String),
    /// Unclaimed requests plus the collector's own pickups.
    VisibleToCollector(String),
}

impl PickupFilter {
    pub fn matches(&self, pickup: &Pickup) -> bool {
        match self {
            PickupFilter::All => true,
            PickupFilter::ByUser(user_id) => pickup.user_id == *user_id,
            PickupFilter::ByCollector(collector_id) => {
                pickup.collector_id.as_deref() == Some(collector_id.as_str())
            }
            PickupFilter::VisibleToCollector(collector_id) => {
                pickup.status == crate::lifecycle::PickupStatus::Requested
                    || pickup.collector_id.as_deref() == Some(collector_id.as_str())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonationFilter {
    All,
    ByNgo(String),
    ByDonor(String),
}

impl DonationFilter {
    pub fn matches(&self, donation: &Donation) -> bool {
        match self {
            DonationFilter::All => true,
            DonationFilter::ByNgo(ngo_id) => donation.ngo_id == *ngo_id,
            DonationFilter::ByDonor(donor_id) => donation.donor_id == *donor_id,
        }
    }
}

#[tonic::async_trait]
pub trait PickupStore: Send + Sync {
    /// Newest first.
    async fn list_pickups(&self, filter: &PickupFilter) -> AppResult<Vec<Pickup>>;

    async fn get_pickup(&self, id: &str) -> AppResult<Option<Pickup>>;

    /// Inserts with status `Requested`.
    async fn insert_pickup(&self, new: NewPickup) -> AppResult<Pickup>;

    async fn update_pickup_details(&self, id: &str, details: PickupDetails) -> AppResult<Option<Pickup>>;

    /// Applies a checked transition if the pickup is still in `transition.from()`.
    /// A delivery credits the owner's stats atomically with the status change.
    async fn apply_transition(&self, transition: &Transition) -> AppResult<Pickup>;

    async fn set_photo_proof(&self, id: &str, photo_proof: &str) -> AppResult<Option<Pickup>>;

    /// Deletes only while the pickup is `Requested`. Returns whether a row was removed.
    async fn delete_pickup(&self, id: &str) -> AppResult<bool>;
}

#[tonic::async_trait]
pub trait DonationStore: Send + Sync {
    /// Newest first.
    async fn list_donations(&self, filter: &DonationFilter) -> AppResult<Vec<Donation>>;

    async fn get_donation(&self, id: &str) -> AppResult<Option<Donation>>;

    async fn insert_donation(&self, new: NewDonation) -> AppResult<Donation>;

    /// Compare-and-set on the current status.
    async fn set_donation_status(
        &self,
        id: &str,
        from: DonationStatus,
        to: DonationStatus,
    ) -> AppResult<Donation>;

    /// Deletes only while the donation is `Pending`.
    async fn delete_donation(&self, id: &str) -> AppResult<bool>;
}

#[tonic::async_trait]
pub trait UserStore: Send + Sync {
    /// Ordered by name. `None` lists every role.
    async fn list_users(&self, role: Option<Role>) -> AppResult<Vec<User>>;

    async fn get_user(&self, id: &str) -> AppResult<Option<User>>;

    /// Returns the user and its password hash.
    async fn find_credential(&self, email: &str) -> AppResult<Option<(User, String)>>;

    /// Creates the user with its credential. Citizens get zeroed stats, NGO
    /// accounts get an NGO profile under the same id.
    async fn insert_user(&self, new: NewUser, password_hash: &str) -> AppResult<User>;

    async fn update_user_profile(&self, id: &str, patch: ProfilePatch) -> AppResult<Option<User>>;

    async fn delete_user(&self, id: &str) -> AppResult<bool>;

    async fn get_user_stats(&self, user_id: &str) -> AppResult<Option<UserStats>>;
}

#[tonic::async_trait]
pub trait NgoStore: Send + Sync {
    /// Ordered by name.
    async fn list_ngos(&self) -> AppResult<Vec<Ngo>>;

    async fn get_ngo(&self, id: &str) -> AppResult<Option<Ngo>>;

    async fn insert_ngo(&self, new: NewNgo) -> AppResult<Ngo>;

    /// Newest first.
    async fn list_inventory(&self, ngo_id: &str) -> AppResult<Vec<InventoryItem>>;

    async fn insert_inventory_item(&self, new: NewInventoryItem) -> AppResult<InventoryItem>;

    /// Newest first.
    async fn list_materials(&self, ngo_id: &str) -> AppResult<Vec<Material>>;

    async fn insert_material(&self, new: NewMaterial) -> AppResult<Material>;
}

#[tonic::async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Soonest `next_pickup` first.
    async fn list_schedules(&self, user_id: &str) -> AppResult<Vec<Schedule>>;

    async fn get_schedule(&self, id: &str) -> AppResult<Option<Schedule>>;

    async fn insert_schedule(&self, new: NewSchedule) -> AppResult<Schedule>;

    async fn update_schedule(&self, id: &str, patch: SchedulePatch) -> AppResult<Option<Schedule>>;

    async fn delete_schedule(&self, id: &str) -> AppResult<bool>;
}

#[tonic::async_trait]
pub trait AnalyticsStore: Send + Sync {
    async fn system_stats(&self) -> AppResult<SystemStats>;
}

pub trait Store:
    PickupStore + DonationStore + UserStore + NgoStore + ScheduleStore + AnalyticsStore
{
}

impl<T> Store for T where
    T: PickupStore + DonationStore + UserStore + NgoStore + ScheduleStore + AnalyticsStore
{
}
