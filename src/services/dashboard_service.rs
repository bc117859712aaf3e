use chrono::Utc;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::mpsc;
use tonic::{Request, Response, Status};

use crate::db::{DonationFilter, PickupFilter};
use crate::lifecycle::{DonationStatus, PickupStatus};
use crate::models::{Pickup, Role, SystemStats, UserStats};
use crate::proto::common::Empty;
use crate::proto::dashboard::dashboard_service_server::DashboardService;
use crate::proto::dashboard::{
    AdminDashboard, CitizenDashboard, CollectorDashboard, MonthlyPickups as MonthlyPickupsProto,
    NgoDashboard, PickupsSnapshot, SystemStats as SystemStatsProto,
    WasteTypeTotal as WasteTypeTotalProto,
};
use crate::realtime::{Change, LiveList, RealtimeHub, Table};
use crate::services::{
    get_authenticated_user, DonationServiceImpl, NgoServiceImpl, PickupServiceImpl,
    ScheduleServiceImpl, SharedStore, UserServiceImpl,
};

const RECENT_PICKUPS: usize = 10;
const STREAM_BUFFER: usize = 16;
const INITIAL_CAUSE: &str = "INITIAL";

pub struct DashboardServiceImpl {
    store: SharedStore,
    hub: RealtimeHub,
}

impl DashboardServiceImpl {
    pub fn new(store: SharedStore, hub: RealtimeHub) -> Self {
        Self { store, hub }
    }

    fn stats_to_proto(model: &SystemStats) -> SystemStatsProto {
        SystemStatsProto {
            total_pickups: model.total_pickups,
            active_pickups: model.active_pickups,
            total_waste_collected: model.total_waste_collected,
            total_co2_saved: model.total_co2_saved,
            total_donations: model.total_donations,
            pending_donations: model.pending_donations,
            total_users: model.total_users,
            total_ngos: model.total_ngos,
            completed_pickups: model.completed_pickups,
            total_collectors: model.total_collectors,
            waste_by_type: model
                .waste_by_type
                .iter()
                .map(|t| WasteTypeTotalProto {
                    waste_type: t.waste_type.clone(),
                    quantity: t.quantity,
                })
                .collect(),
            pickups_by_month: model
                .pickups_by_month
                .iter()
                .map(|m| MonthlyPickupsProto {
                    month: m.month.clone(),
                    pickups: m.pickups,
                })
                .collect(),
        }
    }

    fn snapshot(pickups: &[Pickup], cause: &str) -> PickupsSnapshot {
        PickupsSnapshot {
            pickups: pickups.iter().map(PickupServiceImpl::model_to_proto).collect(),
            cause: cause.to_string(),
        }
    }

    fn count<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> i32 {
        items.iter().filter(|item| predicate(item)).count() as i32
    }

    /// The pickup list each role works from.
    fn pickup_filter(role: Role, user_id: &str) -> Result<PickupFilter, Status> {
        match role {
            Role::Citizen => Ok(PickupFilter::ByUser(user_id.to_string())),
            Role::Collector => Ok(PickupFilter::VisibleToCollector(user_id.to_string())),
            Role::Admin => Ok(PickupFilter::All),
            Role::Ngo => Err(Status::permission_denied("NGOs do not handle pickups")),
        }
    }
}

#[tonic::async_trait]
impl DashboardService for DashboardServiceImpl {
    async fn get_citizen_dashboard(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<CitizenDashboard>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        auth_user.require(&[Role::Citizen])?;
        let user_id = auth_user.user_id.as_str();

        let user = self
            .store
            .get_user(user_id)
            .await?
            .ok_or_else(|| Status::not_found("User not found"))?;
        let stats = self
            .store
            .get_user_stats(user_id)
            .await?
            .unwrap_or_else(|| UserStats {
                user_id: user_id.to_string(),
                ..UserStats::default()
            });
        let pickups = self
            .store
            .list_pickups(&PickupFilter::ByUser(user_id.to_string()))
            .await?;
        let donations = self
            .store
            .list_donations(&DonationFilter::ByDonor(user_id.to_string()))
            .await?;
        let schedules = self.store.list_schedules(user_id).await?;
        let ngos = self.store.list_ngos().await?;

        Ok(Response::new(CitizenDashboard {
            user: Some(UserServiceImpl::model_to_proto(&user)),
            stats: Some(UserServiceImpl::stats_to_proto(&stats)),
            pickups: pickups.iter().map(PickupServiceImpl::model_to_proto).collect(),
            donations: donations.iter().map(DonationServiceImpl::model_to_proto).collect(),
            schedules: schedules.iter().map(ScheduleServiceImpl::model_to_proto).collect(),
            ngos: ngos.iter().map(NgoServiceImpl::model_to_proto).collect(),
        }))
    }

    async fn get_collector_dashboard(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<CollectorDashboard>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        auth_user.require(&[Role::Collector])?;
        let me = auth_user.user_id.as_str();

        let pickups = self
            .store
            .list_pickups(&PickupFilter::VisibleToCollector(me.to_string()))
            .await?;

        let today = Utc::now().date_naive();
        let mine = |p: &Pickup| p.collector_id.as_deref() == Some(me);
        let pending_count = Self::count(&pickups, |p| p.status == PickupStatus::Requested);
        let assigned_count = Self::count(&pickups, |p| mine(p) && !p.status.is_terminal());
        let completed_today = Self::count(&pickups, |p| {
            mine(p) && p.delivered_date.map(|d| d.date_naive()) == Some(today)
        });

        Ok(Response::new(CollectorDashboard {
            pickups: pickups.iter().map(PickupServiceImpl::model_to_proto).collect(),
            pending_count,
            assigned_count,
            completed_today,
        }))
    }

    async fn get_ngo_dashboard(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<NgoDashboard>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        auth_user.require(&[Role::Ngo])?;
        let ngo_id = auth_user.user_id.as_str();

        let ngo = self.store.get_ngo(ngo_id).await?;
        let donations = self
            .store
            .list_donations(&DonationFilter::ByNgo(ngo_id.to_string()))
            .await?;
        let inventory = self.store.list_inventory(ngo_id).await?;
        let materials = self.store.list_materials(ngo_id).await?;

        Ok(Response::new(NgoDashboard {
            ngo: ngo.as_ref().map(NgoServiceImpl::model_to_proto),
            pending_count: Self::count(&donations, |d| d.status == DonationStatus::Pending),
            donations: donations.iter().map(DonationServiceImpl::model_to_proto).collect(),
            inventory: inventory.iter().map(NgoServiceImpl::inventory_to_proto).collect(),
            materials: materials.iter().map(NgoServiceImpl::material_to_proto).collect(),
        }))
    }

    async fn get_admin_dashboard(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<AdminDashboard>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        auth_user.require(&[Role::Admin])?;

        let stats = self.store.system_stats().await?;
        let pickups = self.store.list_pickups(&PickupFilter::All).await?;
        let collectors = self.store.list_users(Some(Role::Collector)).await?;

        Ok(Response::new(AdminDashboard {
            stats: Some(Self::stats_to_proto(&stats)),
            recent_pickups: pickups
                .iter()
                .take(RECENT_PICKUPS)
                .map(PickupServiceImpl::model_to_proto)
                .collect(),
            collectors: collectors.iter().map(UserServiceImpl::model_to_proto).collect(),
        }))
    }

    type WatchPickupsStream = tokio_stream::wrappers::ReceiverStream<Result<PickupsSnapshot, Status>>;

    async fn watch_pickups(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<Self::WatchPickupsStream>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let filter = Self::pickup_filter(auth_user.role, &auth_user.user_id)?;

        // Subscribe first so no change between the fetch and the stream is lost.
        let mut events = self.hub.subscribe(Table::Pickups);
        let initial = self.store.list_pickups(&filter).await?;
        let mut list = LiveList::new(initial).with_insert_filter(move |p: &Pickup| filter.matches(p));

        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        tokio::spawn(async move {
            if tx
                .send(Ok(DashboardServiceImpl::snapshot(list.items(), INITIAL_CAUSE)))
                .await
                .is_err()
            {
                return;
            }

            loop {
                let event = tokio::select! {
                    _ = tx.closed() => break,
                    received = events.recv() => received,
                };
                let event = match event {
                    Ok(event) => event,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            "Pickup watcher {} lagged, {} events dropped",
                            auth_user.user_id,
                            skipped
                        );
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                };

                let change = match Change::<Pickup>::from_event(&event) {
                    Ok(change) => change,
                    Err(e) => {
                        tracing::warn!("Ignoring undecodable pickup event: {}", e);
                        continue;
                    }
                };
                if !list.apply(change) {
                    continue;
                }

                let snapshot = DashboardServiceImpl::snapshot(list.items(), event.kind.as_str());
                if tx.send(Ok(snapshot)).await.is_err() {
                    break;
                }
            }
            tracing::debug!("Pickup watcher {} closed", auth_user.user_id);
        });

        Ok(Response::new(tokio_stream::wrappers::ReceiverStream::new(rx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio_stream::StreamExt;

    use crate::db::{MemoryStore, PickupStore, UserStore};
    use crate::middleware::AuthenticatedUser;
    use crate::models::{NewPickup, NewUser, User};

    async fn setup() -> (DashboardServiceImpl, Arc<MemoryStore>, User) {
        let hub = RealtimeHub::new(16);
        let store = Arc::new(MemoryStore::new(hub.clone()));
        let citizen = store
            .insert_user(
                NewUser {
                    id: None,
                    name: "Nikhil".to_string(),
                    email: "nikhil@demo.com".to_string(),
                    role: Role::Citizen,
                    address: None,
                },
                "hash",
            )
            .await
            .unwrap();
        (DashboardServiceImpl::new(store.clone(), hub), store, citizen)
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

    fn new_pickup(user: &User, waste_type: &str) -> NewPickup {
        NewPickup {
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            address: "12 Elm St".to_string(),
            lat: 51.5,
            lng: -0.12,
            waste_type: waste_type.to_string(),
            quantity: 25.0,
        }
    }

    #[tokio::test]
    async fn test_citizen_dashboard_reads_zero_stats() {
        let (service, store, citizen) = setup().await;
        store.insert_pickup(new_pickup(&citizen, "Plastic")).await.unwrap();

        let dashboard = service
            .get_citizen_dashboard(as_user(&citizen, Empty {}))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(dashboard.pickups.len(), 1);
        assert_eq!(dashboard.stats.unwrap().total_pickups, 0);
        assert_eq!(dashboard.user.unwrap().name, "Nikhil");
    }

    #[tokio::test]
    async fn test_watch_pickups_streams_initial_then_inserts() {
        let (service, store, citizen) = setup().await;
        store.insert_pickup(new_pickup(&citizen, "Paper")).await.unwrap();

        let mut stream = service
            .watch_pickups(as_user(&citizen, Empty {}))
            .await
            .unwrap()
            .into_inner();

        let initial = stream.next().await.unwrap().unwrap();
        assert_eq!(initial.cause, "INITIAL");
        assert_eq!(initial.pickups.len(), 1);

        store.insert_pickup(new_pickup(&citizen, "Plastic")).await.unwrap();
        let next = stream.next().await.unwrap().unwrap();
        assert_eq!(next.cause, "INSERT");
        assert_eq!(next.pickups.len(), 2);
        assert_eq!(next.pickups[0].waste_type, "Plastic");
    }

    #[tokio::test]
    async fn test_watch_pickups_denied_for_ngo() {
        let (service, _, _) = setup().await;
        let ngo = User {
            id: "NGO-001".to_string(),
            name: "Badrinath".to_string(),
            email: "badrinath@demo.com".to_string(),
            role: Role::Ngo,
            address: None,
            lat: None,
            lng: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let status = service.watch_pickups(as_user(&ngo, Empty {})).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);
    }

    #[tokio::test]
    async fn test_admin_dashboard_breaks_down_waste() {
        let (service, store, citizen) = setup().await;
        let admin = store
            .insert_user(
                NewUser {
                    id: None,
                    name: "Srishant Goutham".to_string(),
                    email: "srishant@demo.com".to_string(),
                    role: Role::Admin,
                    address: None,
                },
                "hash",
            )
            .await
            .unwrap();
        store.insert_pickup(new_pickup(&citizen, "Plastic")).await.unwrap();
        store.insert_pickup(new_pickup(&citizen, "Metal")).await.unwrap();
        store.insert_pickup(new_pickup(&citizen, "Plastic")).await.unwrap();

        let dashboard = service
            .get_admin_dashboard(as_user(&admin, Empty {}))
            .await
            .unwrap()
            .into_inner();
        let stats = dashboard.stats.unwrap();
        assert_eq!(stats.total_pickups, 3);
        assert_eq!(stats.completed_pickups, 0);
        assert_eq!(stats.total_collectors, 0);
        let by_type: Vec<(&str, f64)> = stats
            .waste_by_type
            .iter()
            .map(|t| (t.waste_type.as_str(), t.quantity))
            .collect();
        assert_eq!(by_type, [("Metal", 25.0), ("Plastic", 50.0)]);
        assert_eq!(stats.pickups_by_month.len(), 1);
        assert_eq!(stats.pickups_by_month[0].pickups, 3);
        assert_eq!(dashboard.recent_pickups.len(), 3);

        let status = service
            .get_admin_dashboard(as_user(&citizen, Empty {}))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);
    }
}
