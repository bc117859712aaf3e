use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::store::{
    AnalyticsStore, DonationFilter, DonationStore, NgoStore, PickupFilter, PickupStore,
    ScheduleStore, UserStore,
};
use crate::error::{AppError, AppResult};
use crate::lifecycle::{DonationStatus, PickupStatus, Transition};
use crate::models::stats::CO2_PER_KG;
use crate::models::{
    Donation, InventoryItem, Material, NewDonation, NewInventoryItem, NewMaterial, NewNgo,
    MonthlyPickups, NewPickup, NewSchedule, NewUser, Ngo, Pickup, PickupDetails, ProfilePatch,
    Role, Schedule, SchedulePatch, SystemStats, User, UserStats, WasteTypeTotal,
};
use crate::realtime::{ChangeEvent, RealtimeHub, Table};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    credentials: HashMap<String, String>,
    stats: HashMap<String, UserStats>,
    ngos: Vec<Ngo>,
    pickups: Vec<Pickup>,
    donations: Vec<Donation>,
    inventory: Vec<InventoryItem>,
    materials: Vec<Material>,
    schedules: Vec<Schedule>,
}

/// Process-local store for demo mode and tests. Rows are kept in insertion
/// order and every mutation is published to the hub while the write lock is held.
pub struct MemoryStore {
    tables: RwLock<Tables>,
    hub: RealtimeHub,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl MemoryStore {
    pub fn new(hub: RealtimeHub) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            hub,
        }
    }

    pub fn hub(&self) -> &RealtimeHub {
        &self.hub
    }
}

/// Newest first.
fn newest_first<T: Clone>(rows: &[T], keep: impl Fn(&T) -> bool) -> Vec<T> {
    rows.iter().rev().filter(|r| keep(r)).cloned().collect()
}

#[tonic::async_trait]
impl PickupStore for MemoryStore {
    async fn list_pickups(&self, filter: &PickupFilter) -> AppResult<Vec<Pickup>> {
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.pickups, |p| filter.matches(p)))
    }

    async fn get_pickup(&self, id: &str) -> AppResult<Option<Pickup>> {
        let tables = self.tables.read().await;
        Ok(tables.pickups.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_pickup(&self, new: NewPickup) -> AppResult<Pickup> {
        let now = Utc::now();
        let pickup = Pickup {
            id: new_id(),
            user_id: new.user_id,
            user_name: new.user_name,
            address: new.address,
            lat: new.lat,
            lng: new.lng,
            waste_type: new.waste_type,
            quantity: new.quantity,
            status: PickupStatus::Requested,
            collector_id: None,
            collector_name: None,
            requested_date: now,
            assigned_date: None,
            picked_up_date: None,
            delivered_date: None,
            photo_proof: None,
            created_at: now,
            updated_at: now,
        };

        let mut tables = self.tables.write().await;
        tables.pickups.push(pickup.clone());
        self.hub.publish(ChangeEvent::insert(Table::Pickups, &pickup));
        Ok(pickup)
    }

    async fn update_pickup_details(&self, id: &str, details: PickupDetails) -> AppResult<Option<Pickup>> {
        let mut tables = self.tables.write().await;
        let Some(pickup) = tables.pickups.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        pickup.address = details.address;
        pickup.lat = details.lat;
        pickup.lng = details.lng;
        pickup.waste_type = details.waste_type;
        pickup.quantity = details.quantity;
        pickup.updated_at = Utc::now();

        let pickup = pickup.clone();
        self.hub.publish(ChangeEvent::update(Table::Pickups, &pickup));
        Ok(Some(pickup))
    }

    async fn apply_transition(&self, transition: &Transition) -> AppResult<Pickup> {
        let mut tables = self.tables.write().await;
        let tables = &mut *tables;

        let pickup = tables
            .pickups
            .iter_mut()
            .find(|p| p.id == transition.pickup_id())
            .ok_or_else(|| AppError::NotFound(format!("pickups {} not found", transition.pickup_id())))?;
        if pickup.status != transition.from() {
            return Err(AppError::Conflict(format!(
                "pickups {} is '{}', expected '{}'",
                pickup.id,
                pickup.status,
                transition.from()
            )));
        }

        transition.apply_to(pickup);
        let pickup = pickup.clone();
        self.hub.publish(ChangeEvent::update(Table::Pickups, &pickup));

        if let Some(credit) = transition.credit() {
            let stats = tables
                .stats
                .entry(credit.user_id.clone())
                .or_insert_with(|| UserStats {
                    user_id: credit.user_id.clone(),
                    ..UserStats::default()
                });
            credit.apply_to(stats);
            self.hub.publish(ChangeEvent::update(Table::UserStats, &*stats));
        }

        Ok(pickup)
    }

    async fn set_photo_proof(&self, id: &str, photo_proof: &str) -> AppResult<Option<Pickup>> {
        let mut tables = self.tables.write().await;
        let Some(pickup) = tables.pickups.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        pickup.photo_proof = Some(photo_proof.to_string());
        pickup.updated_at = Utc::now();

        let pickup = pickup.clone();
        self.hub.publish(ChangeEvent::update(Table::Pickups, &pickup));
        Ok(Some(pickup))
    }

    async fn delete_pickup(&self, id: &str) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(index) = tables
            .pickups
            .iter()
            .position(|p| p.id == id && p.status == PickupStatus::Requested)
        else {
            return Ok(false);
        };
        let removed = tables.pickups.remove(index);
        self.hub.publish(ChangeEvent::delete(Table::Pickups, &removed));
        Ok(true)
    }
}

#[tonic::async_trait]
impl DonationStore for MemoryStore {
    async fn list_donations(&self, filter: &DonationFilter) -> AppResult<Vec<Donation>> {
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.donations, |d| filter.matches(d)))
    }

    async fn get_donation(&self, id: &str) -> AppResult<Option<Donation>> {
        let tables = self.tables.read().await;
        Ok(tables.donations.iter().find(|d| d.id == id).cloned())
    }

    async fn insert_donation(&self, new: NewDonation) -> AppResult<Donation> {
        let now = Utc::now();
        let donation = Donation {
            id: new_id(),
            donor_id: new.donor_id,
            donor_name: new.donor_name,
            ngo_id: new.ngo_id,
            item: new.item,
            quantity: new.quantity,
            address: new.address,
            lat: new.lat,
            lng: new.lng,
            status: DonationStatus::Pending,
            date: now.date_naive(),
            pickup_date: new.pickup_date,
            created_at: now,
            updated_at: now,
        };

        let mut tables = self.tables.write().await;
        tables.donations.push(donation.clone());
        self.hub.publish(ChangeEvent::insert(Table::Donations, &donation));
        Ok(donation)
    }

    async fn set_donation_status(
        &self,
        id: &str,
        from: DonationStatus,
        to: DonationStatus,
    ) -> AppResult<Donation> {
        from.check_transition(to)?;

        let mut tables = self.tables.write().await;
        let donation = tables
            .donations
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::NotFound(format!("donations {} not found", id)))?;
        if donation.status != from {
            return Err(AppError::Conflict(format!(
                "donations {} is '{}', expected '{}'",
                id, donation.status, from
            )));
        }
        donation.status = to;
        donation.updated_at = Utc::now();

        let donation = donation.clone();
        self.hub.publish(ChangeEvent::update(Table::Donations, &donation));
        Ok(donation)
    }

    async fn delete_donation(&self, id: &str) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(index) = tables
            .donations
            .iter()
            .position(|d| d.id == id && d.status == DonationStatus::Pending)
        else {
            return Ok(false);
        };
        let removed = tables.donations.remove(index);
        self.hub.publish(ChangeEvent::delete(Table::Donations, &removed));
        Ok(true)
    }
}

#[tonic::async_trait]
impl UserStore for MemoryStore {
    async fn list_users(&self, role: Option<Role>) -> AppResult<Vec<User>> {
        let tables = self.tables.read().await;
        let mut users: Vec<User> = tables
            .users
            .iter()
            .filter(|u| role.map_or(true, |r| u.role == r))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    async fn get_user(&self, id: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_credential(&self, email: &str) -> AppResult<Option<(User, String)>> {
        let tables = self.tables.read().await;
        let Some(user) = tables.users.iter().find(|u| u.email.eq_ignore_ascii_case(email)) else {
            return Ok(None);
        };
        Ok(tables
            .credentials
            .get(&user.id)
            .map(|hash| (user.clone(), hash.clone())))
    }

    async fn insert_user(&self, new: NewUser, password_hash: &str) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email.eq_ignore_ascii_case(&new.email)) {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        let id = new.id.unwrap_or_else(new_id);
        if tables.users.iter().any(|u| u.id == id) {
            return Err(AppError::Conflict(format!("user {} already exists", id)));
        }

        let now = Utc::now();
        let user = User {
            id,
            name: new.name,
            email: new.email,
            role: new.role,
            address: new.address,
            lat: None,
            lng: None,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        tables
            .credentials
            .insert(user.id.clone(), password_hash.to_string());
        self.hub.publish(ChangeEvent::insert(Table::Users, &user));

        match user.role {
            Role::Citizen => {
                let stats = UserStats {
                    user_id: user.id.clone(),
                    ..UserStats::default()
                };
                self.hub.publish(ChangeEvent::insert(Table::UserStats, &stats));
                tables.stats.insert(user.id.clone(), stats);
            }
            Role::Ngo if !tables.ngos.iter().any(|n| n.id == user.id) => {
                let ngo = Ngo {
                    id: user.id.clone(),
                    name: user.name.clone(),
                    email: user.email.clone(),
                    address: user.address.clone().unwrap_or_default(),
                    lat: 0.0,
                    lng: 0.0,
                    description: String::new(),
                    accepted_waste_types: Vec::new(),
                    created_at: now,
                };
                self.hub.publish(ChangeEvent::insert(Table::Ngos, &ngo));
                tables.ngos.push(ngo);
            }
            _ => {}
        }

        Ok(user)
    }

    async fn update_user_profile(&self, id: &str, patch: ProfilePatch) -> AppResult<Option<User>> {
        let mut tables = self.tables.write().await;
        let Some(user) = tables.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            user.name = name;
        }
        if patch.address.is_some() {
            user.address = patch.address;
        }
        if patch.lat.is_some() {
            user.lat = patch.lat;
        }
        if patch.lng.is_some() {
            user.lng = patch.lng;
        }
        user.updated_at = Utc::now();

        let user = user.clone();
        self.hub.publish(ChangeEvent::update(Table::Users, &user));
        Ok(Some(user))
    }

    async fn delete_user(&self, id: &str) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(index) = tables.users.iter().position(|u| u.id == id) else {
            return Ok(false);
        };
        let removed = tables.users.remove(index);
        tables.credentials.remove(id);

        // Same cascades as the foreign keys in the schema.
        if let Some(stats) = tables.stats.remove(id) {
            self.hub.publish(ChangeEvent::delete(Table::UserStats, &stats));
        }
        for pickup in tables.pickups.iter().filter(|p| p.user_id == id) {
            self.hub.publish(ChangeEvent::delete(Table::Pickups, pickup));
        }
        tables.pickups.retain(|p| p.user_id != id);
        for pickup in tables
            .pickups
            .iter_mut()
            .filter(|p| p.collector_id.as_deref() == Some(id))
        {
            pickup.collector_id = None;
            self.hub.publish(ChangeEvent::update(Table::Pickups, &*pickup));
        }
        for donation in tables.donations.iter().filter(|d| d.donor_id == id) {
            self.hub.publish(ChangeEvent::delete(Table::Donations, donation));
        }
        tables.donations.retain(|d| d.donor_id != id);
        for schedule in tables.schedules.iter().filter(|s| s.user_id == id) {
            self.hub.publish(ChangeEvent::delete(Table::Schedules, schedule));
        }
        tables.schedules.retain(|s| s.user_id != id);

        self.hub.publish(ChangeEvent::delete(Table::Users, &removed));
        Ok(true)
    }

    async fn get_user_stats(&self, user_id: &str) -> AppResult<Option<UserStats>> {
        let tables = self.tables.read().await;
        Ok(tables.stats.get(user_id).cloned())
    }
}

#[tonic::async_trait]
impl NgoStore for MemoryStore {
    async fn list_ngos(&self) -> AppResult<Vec<Ngo>> {
        let tables = self.tables.read().await;
        let mut ngos = tables.ngos.clone();
        ngos.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(ngos)
    }

    async fn get_ngo(&self, id: &str) -> AppResult<Option<Ngo>> {
        let tables = self.tables.read().await;
        Ok(tables.ngos.iter().find(|n| n.id == id).cloned())
    }

    async fn insert_ngo(&self, new: NewNgo) -> AppResult<Ngo> {
        let mut tables = self.tables.write().await;
        let id = new.id.unwrap_or_else(new_id);
        if tables.ngos.iter().any(|n| n.id == id) {
            return Err(AppError::Conflict("NGO id already exists".to_string()));
        }

        let ngo = Ngo {
            id,
            name: new.name,
            email: new.email,
            address: new.address,
            lat: new.lat,
            lng: new.lng,
            description: new.description,
            accepted_waste_types: new.accepted_waste_types,
            created_at: Utc::now(),
        };
        tables.ngos.push(ngo.clone());
        self.hub.publish(ChangeEvent::insert(Table::Ngos, &ngo));
        Ok(ngo)
    }

    async fn list_inventory(&self, ngo_id: &str) -> AppResult<Vec<InventoryItem>> {
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.inventory, |i| i.ngo_id == ngo_id))
    }

    async fn insert_inventory_item(&self, new: NewInventoryItem) -> AppResult<InventoryItem> {
        let item = InventoryItem {
            id: new_id(),
            ngo_id: new.ngo_id,
            item: new.item,
            quantity: new.quantity,
            unit: new.unit,
            date: new.date,
            created_at: Utc::now(),
        };

        let mut tables = self.tables.write().await;
        tables.inventory.push(item.clone());
        self.hub.publish(ChangeEvent::insert(Table::NgoInventory, &item));
        Ok(item)
    }

    async fn list_materials(&self, ngo_id: &str) -> AppResult<Vec<Material>> {
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.materials, |m| m.ngo_id == ngo_id))
    }

    async fn insert_material(&self, new: NewMaterial) -> AppResult<Material> {
        let material = Material {
            id: new_id(),
            ngo_id: new.ngo_id,
            material_type: new.material_type,
            weight: new.weight,
            source: new.source,
            notes: new.notes,
            created_at: Utc::now(),
        };

        let mut tables = self.tables.write().await;
        tables.materials.push(material.clone());
        self.hub.publish(ChangeEvent::insert(Table::NgoMaterials, &material));
        Ok(material)
    }
}

#[tonic::async_trait]
impl ScheduleStore for MemoryStore {
    async fn list_schedules(&self, user_id: &str) -> AppResult<Vec<Schedule>> {
        let tables = self.tables.read().await;
        let mut schedules: Vec<Schedule> = tables
            .schedules
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        schedules.sort_by_key(|s| s.next_pickup);
        Ok(schedules)
    }

    async fn get_schedule(&self, id: &str) -> AppResult<Option<Schedule>> {
        let tables = self.tables.read().await;
        Ok(tables.schedules.iter().find(|s| s.id == id).cloned())
    }

    async fn insert_schedule(&self, new: NewSchedule) -> AppResult<Schedule> {
        let now = Utc::now();
        let schedule = Schedule {
            id: new_id(),
            user_id: new.user_id,
            day_of_week: new.day_of_week,
            waste_type: new.waste_type,
            recurring: new.recurring,
            next_pickup: new.next_pickup,
            created_at: now,
            updated_at: now,
        };

        let mut tables = self.tables.write().await;
        tables.schedules.push(schedule.clone());
        self.hub.publish(ChangeEvent::insert(Table::Schedules, &schedule));
        Ok(schedule)
    }

    async fn update_schedule(&self, id: &str, patch: SchedulePatch) -> AppResult<Option<Schedule>> {
        let mut tables = self.tables.write().await;
        let Some(schedule) = tables.schedules.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        schedule.day_of_week = patch.day_of_week;
        schedule.waste_type = patch.waste_type;
        schedule.recurring = patch.recurring;
        schedule.next_pickup = patch.next_pickup;
        schedule.updated_at = Utc::now();

        let schedule = schedule.clone();
        self.hub.publish(ChangeEvent::update(Table::Schedules, &schedule));
        Ok(Some(schedule))
    }

    async fn delete_schedule(&self, id: &str) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(index) = tables.schedules.iter().position(|s| s.id == id) else {
            return Ok(false);
        };
        let removed = tables.schedules.remove(index);
        self.hub.publish(ChangeEvent::delete(Table::Schedules, &removed));
        Ok(true)
    }
}

#[tonic::async_trait]
impl AnalyticsStore for MemoryStore {
    async fn system_stats(&self) -> AppResult<SystemStats> {
        let tables = self.tables.read().await;
        let total_waste_collected: f64 = tables.pickups.iter().map(|p| p.quantity).sum();

        let mut by_type: BTreeMap<&str, f64> = BTreeMap::new();
        let mut by_month: BTreeMap<String, i64> = BTreeMap::new();
        for pickup in &tables.pickups {
            *by_type.entry(pickup.waste_type.as_str()).or_default() += pickup.quantity;
            *by_month
                .entry(pickup.created_at.format("%Y-%m").to_string())
                .or_default() += 1;
        }

        Ok(SystemStats {
            total_pickups: tables.pickups.len() as i64,
            active_pickups: tables
                .pickups
                .iter()
                .filter(|p| p.status != PickupStatus::Delivered)
                .count() as i64,
            completed_pickups: tables
                .pickups
                .iter()
                .filter(|p| matches!(p.status, PickupStatus::PickedUp | PickupStatus::Delivered))
                .count() as i64,
            total_waste_collected,
            total_co2_saved: total_waste_collected * CO2_PER_KG,
            total_donations: tables.donations.len() as i64,
            pending_donations: tables
                .donations
                .iter()
                .filter(|d| d.status == DonationStatus::Pending)
                .count() as i64,
            total_users: tables.users.len() as i64,
            total_collectors: tables
                .users
                .iter()
                .filter(|u| u.role == Role::Collector)
                .count() as i64,
            total_ngos: tables.ngos.len() as i64,
            waste_by_type: by_type
                .into_iter()
                .map(|(waste_type, quantity)| WasteTypeTotal {
                    waste_type: waste_type.to_string(),
                    quantity,
                })
                .collect(),
            pickups_by_month: by_month
                .into_iter()
                .map(|(month, pickups)| MonthlyPickups { month, pickups })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Assignment;
    use crate::realtime::ChangeKind;

    fn store() -> MemoryStore {
        MemoryStore::new(RealtimeHub::new(16))
    }

    fn citizen(email: &str) -> NewUser {
        NewUser {
            id: None,
            name: "Nikhil".to_string(),
            email: email.to_string(),
            role: Role::Citizen,
            address: Some("12 Elm St".to_string()),
        }
    }

    fn new_pickup(user_id: &str, quantity: f64) -> NewPickup {
        NewPickup {
            user_id: user_id.to_string(),
            user_name: "Nikhil".to_string(),
            address: "12 Elm St".to_string(),
            lat: 51.5,
            lng: -0.12,
            waste_type: "Plastic".to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_insert_user_creates_citizen_stats() {
        let store = store();
        let user = store.insert_user(citizen("nikhil@demo.com"), "hash").await.unwrap();
        let stats = store.get_user_stats(&user.id).await.unwrap().unwrap();
        assert_eq!(stats.total_pickups, 0);

        let err = store.insert_user(citizen("NIKHIL@demo.com"), "hash").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_ngo_user_gets_profile_with_same_id() {
        let store = store();
        let user = store
            .insert_user(
                NewUser {
                    id: None,
                    name: "Green Earth".to_string(),
                    email: "ngo@demo.com".to_string(),
                    role: Role::Ngo,
                    address: None,
                },
                "hash",
            )
            .await
            .unwrap();
        assert!(store.get_ngo(&user.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_transition_is_compare_and_set() {
        let store = store();
        let pickup = store.insert_pickup(new_pickup("U1", 5.0)).await.unwrap();
        let jane = Assignment {
            collector_id: "C1".to_string(),
            collector_name: "Jane".to_string(),
        };

        let first = Transition::assign(&pickup, jane.clone(), Utc::now()).unwrap();
        let stale = Transition::advance(&pickup, Some(jane), Utc::now()).unwrap();
        store.apply_transition(&first).await.unwrap();

        let err = store.apply_transition(&stale).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_delivery_credits_stats_once() {
        let store = store();
        let user = store.insert_user(citizen("nikhil@demo.com"), "hash").await.unwrap();
        let mut pickup = store.insert_pickup(new_pickup(&user.id, 12.34)).await.unwrap();
        let claim = Assignment {
            collector_id: "C1".to_string(),
            collector_name: "Jane".to_string(),
        };

        while !pickup.status.is_terminal() {
            let t = Transition::advance(&pickup, Some(claim.clone()), Utc::now()).unwrap();
            pickup = store.apply_transition(&t).await.unwrap();
        }

        let stats = store.get_user_stats(&user.id).await.unwrap().unwrap();
        assert_eq!(stats.total_pickups, 1);
        assert!((stats.co2_saved - 18.51).abs() < 1e-9);
        assert_eq!(stats.green_points, 123);
    }

    #[tokio::test]
    async fn test_delete_pickup_only_while_requested() {
        let store = store();
        let pickup = store.insert_pickup(new_pickup("U1", 1.0)).await.unwrap();
        let assigned = Transition::assign(
            &pickup,
            Assignment {
                collector_id: "C1".to_string(),
                collector_name: "Jane".to_string(),
            },
            Utc::now(),
        )
        .unwrap();
        store.apply_transition(&assigned).await.unwrap();

        assert!(!store.delete_pickup(&pickup.id).await.unwrap());
        let other = store.insert_pickup(new_pickup("U1", 1.0)).await.unwrap();
        assert!(store.delete_pickup(&other.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_mutations_are_published() {
        let store = store();
        let mut rx = store.hub().subscribe(Table::Pickups);
        let pickup = store.insert_pickup(new_pickup("U1", 1.0)).await.unwrap();
        store.delete_pickup(&pickup.id).await.unwrap();

        let inserted = rx.recv().await.unwrap();
        assert_eq!(inserted.kind, ChangeKind::Insert);
        let deleted = rx.recv().await.unwrap();
        assert_eq!(deleted.kind, ChangeKind::Delete);
        assert_eq!(deleted.row_field("id"), Some(pickup.id.as_str()));
    }

    #[tokio::test]
    async fn test_lists_are_newest_first() {
        let store = store();
        let first = store.insert_pickup(new_pickup("U1", 1.0)).await.unwrap();
        let second = store.insert_pickup(new_pickup("U1", 2.0)).await.unwrap();
        let listed = store
            .list_pickups(&PickupFilter::ByUser("U1".to_string()))
            .await
            .unwrap();
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn test_system_stats_breakdowns() {
        let store = store();
        store.insert_user(citizen("nikhil@demo.com"), "hash").await.unwrap();
        store
            .insert_user(
                NewUser {
                    role: Role::Collector,
                    ..citizen("jane@demo.com")
                },
                "hash",
            )
            .await
            .unwrap();

        let mut pickup = store.insert_pickup(new_pickup("U1", 5.0)).await.unwrap();
        store.insert_pickup(new_pickup("U1", 2.5)).await.unwrap();
        store
            .insert_pickup(NewPickup {
                waste_type: "Glass".to_string(),
                ..new_pickup("U1", 1.0)
            })
            .await
            .unwrap();
        let claim = Assignment {
            collector_id: "C1".to_string(),
            collector_name: "Jane".to_string(),
        };
        while pickup.status != PickupStatus::PickedUp {
            let t = Transition::advance(&pickup, Some(claim.clone()), Utc::now()).unwrap();
            pickup = store.apply_transition(&t).await.unwrap();
        }

        let stats = store.system_stats().await.unwrap();
        assert_eq!(stats.total_pickups, 3);
        assert_eq!(stats.active_pickups, 3);
        assert_eq!(stats.completed_pickups, 1);
        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.total_collectors, 1);
        assert_eq!(
            stats.waste_by_type,
            vec![
                WasteTypeTotal {
                    waste_type: "Glass".to_string(),
                    quantity: 1.0,
                },
                WasteTypeTotal {
                    waste_type: "Plastic".to_string(),
                    quantity: 7.5,
                },
            ]
        );
        assert_eq!(
            stats.pickups_by_month,
            vec![MonthlyPickups {
                month: Utc::now().format("%Y-%m").to_string(),
                pickups: 3,
            }]
        );
    }
}
