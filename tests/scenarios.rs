//! End-to-end flows through the gRPC service traits over the in-memory store.

use std::sync::Arc;

use tonic::{Code, Request};

use ecotrack::db::{
    DonationFilter, DonationStore, MemoryStore, NgoStore, PickupFilter, PickupStore, UserStore,
};
use ecotrack::error::{AppError, AppResult};
use ecotrack::middleware::AuthenticatedUser;
use ecotrack::models::{
    InventoryItem, Material, NewInventoryItem, NewMaterial, NewNgo, NewUser, Ngo, Role, User,
};
use ecotrack::proto::common::IdRequest;
use ecotrack::proto::donations::donation_service_server::DonationService;
use ecotrack::proto::donations::{OfferDonationRequest, RespondToDonationRequest};
use ecotrack::proto::pickups::pickup_service_server::PickupService;
use ecotrack::proto::pickups::{
    AssignCollectorRequest, ListPickupsRequest, Pickup as PickupProto, RequestPickupRequest,
};
use ecotrack::realtime::RealtimeHub;
use ecotrack::services::{DonationServiceImpl, PickupServiceImpl};

struct World {
    store: Arc<MemoryStore>,
    citizen: User,
    jane: User,
    ngo: User,
    admin: User,
}

async fn account(store: &MemoryStore, id: Option<&str>, name: &str, email: &str, role: Role) -> User {
    store
        .insert_user(
            NewUser {
                id: id.map(str::to_string),
                name: name.to_string(),
                email: email.to_string(),
                role,
                address: None,
            },
            "hash",
        )
        .await
        .unwrap()
}

async fn world() -> World {
    let store = Arc::new(MemoryStore::new(RealtimeHub::new(64)));
    store
        .insert_ngo(NewNgo {
            id: Some("NGO-001".to_string()),
            name: "Green Earth Foundation".to_string(),
            email: "contact@greenearth.org".to_string(),
            address: "123 Eco Street, London, UK".to_string(),
            lat: 51.5074,
            lng: -0.1278,
            description: "Dedicated to recycling and environmental sustainability".to_string(),
            accepted_waste_types: vec!["Plastic".to_string(), "Metal".to_string()],
        })
        .await
        .unwrap();

    let citizen = account(&store, None, "Nikhil", "nikhil@demo.com", Role::Citizen).await;
    let jane = account(&store, None, "Jane", "jane@demo.com", Role::Collector).await;
    let ngo = account(&store, Some("NGO-001"), "Badrinath", "badrinath@demo.com", Role::Ngo).await;
    let admin = account(&store, None, "Srishant Goutham", "srishant@demo.com", Role::Admin).await;

    World {
        store,
        citizen,
        jane,
        ngo,
        admin,
    }
}

fn as_user<T>(user: &User, message: T) -> Request<T> {
    let mut request = Request::new(message);
    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id.clone(),
        role: user.role,
        name: user.name.clone(),
    });
    request
}

async fn request_pickup(service: &PickupServiceImpl, citizen: &User, waste_type: &str, quantity: f64) -> PickupProto {
    service
        .request_pickup(as_user(
            citizen,
            RequestPickupRequest {
                address: "12 Elm St".to_string(),
                lat: 51.5,
                lng: -0.12,
                waste_type: waste_type.to_string(),
                quantity,
            },
        ))
        .await
        .unwrap()
        .into_inner()
        .pickup
        .unwrap()
}

async fn list_for(service: &PickupServiceImpl, user: &User) -> Vec<PickupProto> {
    service
        .list_pickups(as_user(user, ListPickupsRequest::default()))
        .await
        .unwrap()
        .into_inner()
        .pickups
}

#[tokio::test]
async fn citizen_request_lands_on_top_of_their_list() {
    let w = world().await;
    let pickups = PickupServiceImpl::new(w.store.clone());

    request_pickup(&pickups, &w.citizen, "Paper", 3.0).await;
    let created = request_pickup(&pickups, &w.citizen, "Plastic", 25.0).await;
    assert_eq!(created.status, "Requested");
    assert_eq!(created.legacy_status, "pending");
    assert_eq!(created.address, "12 Elm St");

    let mine = list_for(&pickups, &w.citizen).await;
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0].id, created.id);
    assert_eq!(mine[0].waste_type, "Plastic");
    assert_eq!(mine[0].quantity, 25.0);
}

#[tokio::test]
async fn admin_assignment_reaches_the_collector() {
    let w = world().await;
    let pickups = PickupServiceImpl::new(w.store.clone());
    let created = request_pickup(&pickups, &w.citizen, "Plastic", 25.0).await;

    let assigned = pickups
        .assign_collector(as_user(
            &w.admin,
            AssignCollectorRequest {
                id: created.id.clone(),
                collector_id: w.jane.id.clone(),
            },
        ))
        .await
        .unwrap()
        .into_inner()
        .pickup
        .unwrap();
    assert_eq!(assigned.status, "Assigned");
    assert_eq!(assigned.legacy_status, "scheduled");
    assert_eq!(assigned.collector_id, w.jane.id);
    assert_eq!(assigned.collector_name, "Jane");
    assert!(!assigned.assigned_date.is_empty());

    let janes = w
        .store
        .list_pickups(&PickupFilter::ByCollector(w.jane.id.clone()))
        .await
        .unwrap();
    assert_eq!(janes.len(), 1);
    assert!(list_for(&pickups, &w.jane).await.iter().any(|p| p.id == created.id));
}

#[tokio::test]
async fn delivery_credits_the_citizen_once() {
    let w = world().await;
    let pickups = PickupServiceImpl::new(w.store.clone());
    let created = request_pickup(&pickups, &w.citizen, "Metal", 4.0).await;

    let mut steps = Vec::new();
    for _ in 0..4 {
        let step = pickups
            .advance_pickup(as_user(&w.jane, IdRequest { id: created.id.clone() }))
            .await
            .unwrap()
            .into_inner()
            .pickup
            .unwrap();
        steps.push(step);
    }
    let statuses: Vec<&str> = steps.iter().map(|p| p.status.as_str()).collect();
    assert_eq!(statuses, ["Assigned", "On the Way", "Picked Up", "Delivered"]);
    let delivered = &steps[3];
    assert_eq!(delivered.progress_percent, 100);
    assert_eq!(delivered.legacy_status, "completed");
    assert!(!delivered.delivered_date.is_empty());

    let status = pickups
        .advance_pickup(as_user(&w.jane, IdRequest { id: created.id.clone() }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::FailedPrecondition);

    let stats = w.store.get_user_stats(&w.citizen.id).await.unwrap().unwrap();
    assert_eq!(stats.total_pickups, 1);
    assert_eq!(stats.waste_collected, 4.0);
    assert_eq!(stats.co2_saved, 4.0 * 1.5);
    assert_eq!(stats.green_points, 40);
}

#[tokio::test]
async fn cancel_only_while_requested() {
    let w = world().await;
    let pickups = PickupServiceImpl::new(w.store.clone());

    let early = request_pickup(&pickups, &w.citizen, "Glass", 2.0).await;
    pickups
        .cancel_pickup(as_user(&w.citizen, IdRequest { id: early.id.clone() }))
        .await
        .unwrap();
    assert!(w.store.get_pickup(&early.id).await.unwrap().is_none());

    let late = request_pickup(&pickups, &w.citizen, "Glass", 2.0).await;
    pickups
        .advance_pickup(as_user(&w.jane, IdRequest { id: late.id.clone() }))
        .await
        .unwrap();
    let status = pickups
        .cancel_pickup(as_user(&w.citizen, IdRequest { id: late.id.clone() }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::FailedPrecondition);
    assert!(w.store.get_pickup(&late.id).await.unwrap().is_some());
}

async fn offer(service: &DonationServiceImpl, citizen: &User) -> String {
    service
        .offer_donation(as_user(
            citizen,
            OfferDonationRequest {
                ngo_id: "NGO-001".to_string(),
                item: "Aluminum Cans".to_string(),
                quantity: 50.0,
                address: "12 Elm St".to_string(),
                lat: 51.5,
                lng: -0.12,
                pickup_date: String::new(),
            },
        ))
        .await
        .unwrap()
        .into_inner()
        .donation
        .unwrap()
        .id
}

#[tokio::test]
async fn accepting_a_donation_stocks_the_ngo() {
    let w = world().await;
    let donations = DonationServiceImpl::new(w.store.clone(), w.store.clone());
    let id = offer(&donations, &w.citizen).await;

    let response = donations
        .respond_to_donation(as_user(&w.ngo, RespondToDonationRequest { id, accept: true }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(response.donation.unwrap().status, "Accepted");
    assert!(response.inventory_recorded);

    let inventory = w.store.list_inventory("NGO-001").await.unwrap();
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory[0].item, "Aluminum Cans");
    assert_eq!(inventory[0].quantity, 50.0);
    assert_eq!(inventory[0].unit, "kg");
}

#[tokio::test]
async fn only_the_addressed_ngo_can_respond() {
    let w = world().await;
    let donations = DonationServiceImpl::new(w.store.clone(), w.store.clone());
    let id = offer(&donations, &w.citizen).await;

    let other = account(&w.store, Some("NGO-002"), "Eco Warriors", "info@ecowarriors.org", Role::Ngo).await;
    let status = donations
        .respond_to_donation(as_user(&other, RespondToDonationRequest { id: id.clone(), accept: true }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::PermissionDenied);

    donations
        .respond_to_donation(as_user(&w.ngo, RespondToDonationRequest { id: id.clone(), accept: false }))
        .await
        .unwrap();
    let status = donations
        .respond_to_donation(as_user(&w.ngo, RespondToDonationRequest { id, accept: true }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::FailedPrecondition);
    assert!(w.store.list_inventory("NGO-001").await.unwrap().is_empty());
}

/// Inventory writes always fail; everything else reads through to the real store.
struct BrokenInventory(Arc<MemoryStore>);

#[tonic::async_trait]
impl NgoStore for BrokenInventory {
    async fn list_ngos(&self) -> AppResult<Vec<Ngo>> {
        self.0.list_ngos().await
    }

    async fn get_ngo(&self, id: &str) -> AppResult<Option<Ngo>> {
        self.0.get_ngo(id).await
    }

    async fn insert_ngo(&self, new: NewNgo) -> AppResult<Ngo> {
        self.0.insert_ngo(new).await
    }

    async fn list_inventory(&self, ngo_id: &str) -> AppResult<Vec<InventoryItem>> {
        self.0.list_inventory(ngo_id).await
    }

    async fn insert_inventory_item(&self, _new: NewInventoryItem) -> AppResult<InventoryItem> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_materials(&self, ngo_id: &str) -> AppResult<Vec<Material>> {
        self.0.list_materials(ngo_id).await
    }

    async fn insert_material(&self, new: NewMaterial) -> AppResult<Material> {
        self.0.insert_material(new).await
    }
}

#[tokio::test]
async fn acceptance_survives_an_inventory_failure() {
    let w = world().await;
    let donations = DonationServiceImpl::new(
        w.store.clone(),
        Arc::new(BrokenInventory(w.store.clone())),
    );
    let id = offer(&donations, &w.citizen).await;

    let response = donations
        .respond_to_donation(as_user(&w.ngo, RespondToDonationRequest { id: id.clone(), accept: true }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(response.donation.unwrap().status, "Accepted");
    assert!(!response.inventory_recorded);

    let stored = w.store.get_donation(&id).await.unwrap().unwrap();
    assert_eq!(stored.status.to_string(), "Accepted");
    assert!(w.store.list_inventory("NGO-001").await.unwrap().is_empty());

    let addressed = w
        .store
        .list_donations(&DonationFilter::ByNgo(w.ngo.id.clone()))
        .await
        .unwrap();
    assert_eq!(addressed.len(), 1);
}
