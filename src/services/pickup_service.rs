use chrono::Utc;
use tonic::{Request, Response, Status};

use crate::db::PickupFilter;
use crate::lifecycle::{Assignment, PickupStatus, Transition};
use crate::middleware::AuthenticatedUser;
use crate::models::{NewPickup, Pickup, PickupDetails, Role};
use crate::proto::common::{Empty, IdRequest};
use crate::proto::pickups::pickup_service_server::PickupService;
use crate::proto::pickups::{
    AssignCollectorRequest, ListPickupsRequest, ListPickupsResponse, Pickup as PickupProto,
    PickupResponse, RequestPickupRequest, SetPhotoProofRequest, UpdatePickupDetailsRequest,
    UpdatePickupStatusRequest,
};
use crate::services::{get_authenticated_user, non_empty, optional_timestamp, timestamp, SharedStore};

pub struct PickupServiceImpl {
    store: SharedStore,
}

impl PickupServiceImpl {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub(crate) fn model_to_proto(model: &Pickup) -> PickupProto {
        PickupProto {
            id: model.id.clone(),
            user_id: model.user_id.clone(),
            user_name: model.user_name.clone(),
            address: model.address.clone(),
            lat: model.lat,
            lng: model.lng,
            waste_type: model.waste_type.clone(),
            quantity: model.quantity,
            status: model.status.to_string(),
            legacy_status: model.status.legacy_label().to_string(),
            progress_percent: i32::from(model.status.progress_percent()),
            collector_id: model.collector_id.clone().unwrap_or_default(),
            collector_name: model.collector_name.clone().unwrap_or_default(),
            requested_date: timestamp(&model.requested_date),
            assigned_date: optional_timestamp(&model.assigned_date),
            picked_up_date: optional_timestamp(&model.picked_up_date),
            delivered_date: optional_timestamp(&model.delivered_date),
            photo_proof: model.photo_proof.clone().unwrap_or_default(),
            created_at: timestamp(&model.created_at),
            updated_at: timestamp(&model.updated_at),
        }
    }

    fn respond(pickup: &Pickup) -> Response<PickupResponse> {
        Response::new(PickupResponse {
            pickup: Some(Self::model_to_proto(pickup)),
        })
    }

    fn validate_details(
        address: &str,
        waste_type: &str,
        quantity: f64,
    ) -> Result<(String, String), Status> {
        let address = non_empty(address).ok_or_else(|| Status::invalid_argument("address is required"))?;
        let waste_type =
            non_empty(waste_type).ok_or_else(|| Status::invalid_argument("waste_type is required"))?;
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(Status::invalid_argument("quantity must be greater than 0"));
        }
        Ok((address.to_string(), waste_type.to_string()))
    }

    fn is_assigned_to(pickup: &Pickup, user_id: &str) -> bool {
        pickup.collector_id.as_deref() == Some(user_id)
    }

    fn can_view(auth_user: &AuthenticatedUser, pickup: &Pickup) -> bool {
        match auth_user.role {
            Role::Admin => true,
            Role::Citizen => pickup.user_id == auth_user.user_id,
            Role::Collector => PickupFilter::VisibleToCollector(auth_user.user_id.clone()).matches(pickup),
            Role::Ngo => false,
        }
    }

    /// Collectors work on unclaimed requests and their own pickups; admins on any.
    fn require_operator(auth_user: &AuthenticatedUser, pickup: &Pickup) -> Result<(), Status> {
        auth_user.require(&[Role::Collector, Role::Admin])?;
        if auth_user.role == Role::Collector
            && !Self::is_assigned_to(pickup, &auth_user.user_id)
            && !(pickup.status == PickupStatus::Requested && pickup.collector_id.is_none())
        {
            return Err(Status::permission_denied("Pickup is assigned to another collector"));
        }
        Ok(())
    }

    /// Collectors claim an unassigned pickup when they move it.
    fn claim_for(auth_user: &AuthenticatedUser) -> Option<Assignment> {
        (auth_user.role == Role::Collector).then(|| Assignment {
            collector_id: auth_user.user_id.clone(),
            collector_name: auth_user.name.clone(),
        })
    }

    async fn load(&self, id: &str) -> Result<Pickup, Status> {
        if id.is_empty() {
            return Err(Status::invalid_argument("id is required"));
        }
        self.store
            .get_pickup(id)
            .await?
            .ok_or_else(|| Status::not_found("Pickup not found"))
    }

    async fn commit(&self, transition: Transition) -> Result<Pickup, Status> {
        let pickup = self.store.apply_transition(&transition).await?;
        tracing::info!(
            "Pickup {} moved from '{}' to '{}'",
            pickup.id,
            transition.from(),
            transition.to()
        );
        if let Some(credit) = transition.credit() {
            tracing::info!(
                "Credited user {} with {} kg for pickup {}",
                credit.user_id,
                credit.waste,
                pickup.id
            );
        }
        Ok(pickup)
    }
}

#[tonic::async_trait]
impl PickupService for PickupServiceImpl {
    async fn request_pickup(
        &self,
        request: Request<RequestPickupRequest>,
    ) -> Result<Response<PickupResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        auth_user.require(&[Role::Citizen])?;
        let req = request.into_inner();

        let (address, waste_type) = Self::validate_details(&req.address, &req.waste_type, req.quantity)?;

        let pickup = self
            .store
            .insert_pickup(NewPickup {
                user_id: auth_user.user_id.clone(),
                user_name: auth_user.name.clone(),
                address,
                lat: req.lat,
                lng: req.lng,
                waste_type,
                quantity: req.quantity,
            })
            .await?;

        tracing::info!("User {} requested pickup {}", auth_user.user_id, pickup.id);
        Ok(Self::respond(&pickup))
    }

    async fn get_pickup(
        &self,
        request: Request<IdRequest>,
    ) -> Result<Response<PickupResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let pickup = self.load(&request.into_inner().id).await?;

        if !Self::can_view(&auth_user, &pickup) {
            return Err(Status::permission_denied("Cannot view this pickup"));
        }
        Ok(Self::respond(&pickup))
    }

    async fn list_pickups(
        &self,
        request: Request<ListPickupsRequest>,
    ) -> Result<Response<ListPickupsResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let req = request.into_inner();

        let scope = non_empty(&req.scope).unwrap_or(match auth_user.role {
            Role::Citizen => "mine",
            Role::Collector => "visible",
            Role::Admin => "all",
            Role::Ngo => "",
        });

        let filter = match scope {
            "mine" => {
                auth_user.require(&[Role::Citizen, Role::Admin])?;
                PickupFilter::ByUser(auth_user.user_id.clone())
            }
            "assigned" => {
                auth_user.require(&[Role::Collector])?;
                PickupFilter::ByCollector(auth_user.user_id.clone())
            }
            "visible" => {
                auth_user.require(&[Role::Collector])?;
                PickupFilter::VisibleToCollector(auth_user.user_id.clone())
            }
            "all" => {
                auth_user.require(&[Role::Admin])?;
                match (non_empty(&req.user_id), non_empty(&req.collector_id)) {
                    (Some(user_id), _) => PickupFilter::ByUser(user_id.to_string()),
                    (None, Some(collector_id)) => PickupFilter::ByCollector(collector_id.to_string()),
                    (None, None) => PickupFilter::All,
                }
            }
            "" => return Err(Status::permission_denied("NGO accounts have no pickups")),
            other => {
                return Err(Status::invalid_argument(format!(
                    "scope must be mine, assigned, visible or all, got '{}'",
                    other
                )))
            }
        };

        let pickups = self.store.list_pickups(&filter).await?;
        Ok(Response::new(ListPickupsResponse {
            pickups: pickups.iter().map(Self::model_to_proto).collect(),
        }))
    }

    async fn update_pickup_details(
        &self,
        request: Request<UpdatePickupDetailsRequest>,
    ) -> Result<Response<PickupResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let req = request.into_inner();
        let pickup = self.load(&req.id).await?;

        match auth_user.role {
            Role::Admin => {}
            Role::Citizen if pickup.user_id == auth_user.user_id => {
                if pickup.status != PickupStatus::Requested {
                    return Err(Status::failed_precondition(
                        "Only requested pickups can be edited",
                    ));
                }
            }
            _ => return Err(Status::permission_denied("Cannot edit this pickup")),
        }
        // Delivered quantities are already credited to the citizen's stats.
        if pickup.status.is_terminal() {
            return Err(Status::failed_precondition("Delivered pickups cannot be edited"));
        }

        let (address, waste_type) = Self::validate_details(&req.address, &req.waste_type, req.quantity)?;
        let updated = self
            .store
            .update_pickup_details(
                &pickup.id,
                PickupDetails {
                    address,
                    lat: req.lat,
                    lng: req.lng,
                    waste_type,
                    quantity: req.quantity,
                },
            )
            .await?
            .ok_or_else(|| Status::not_found("Pickup not found"))?;

        tracing::info!("Updated details of pickup {}", updated.id);
        Ok(Self::respond(&updated))
    }

    async fn update_pickup_status(
        &self,
        request: Request<UpdatePickupStatusRequest>,
    ) -> Result<Response<PickupResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let req = request.into_inner();

        let to = req
            .status
            .parse::<PickupStatus>()
            .map_err(|e| Status::invalid_argument(e.to_string()))?;
        let pickup = self.load(&req.id).await?;
        Self::require_operator(&auth_user, &pickup)?;

        let claim = if pickup.collector_id.is_none() {
            Self::claim_for(&auth_user)
        } else {
            None
        };
        let transition = Transition::plan(&pickup, to, claim, Utc::now())?;
        let updated = self.commit(transition).await?;
        Ok(Self::respond(&updated))
    }

    async fn advance_pickup(
        &self,
        request: Request<IdRequest>,
    ) -> Result<Response<PickupResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let pickup = self.load(&request.into_inner().id).await?;
        Self::require_operator(&auth_user, &pickup)?;

        let transition = Transition::advance(&pickup, Self::claim_for(&auth_user), Utc::now())?;
        let updated = self.commit(transition).await?;
        Ok(Self::respond(&updated))
    }

    async fn assign_collector(
        &self,
        request: Request<AssignCollectorRequest>,
    ) -> Result<Response<PickupResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        auth_user.require(&[Role::Admin])?;
        let req = request.into_inner();

        if req.collector_id.is_empty() {
            return Err(Status::invalid_argument("collector_id is required"));
        }
        let pickup = self.load(&req.id).await?;
        let collector = self
            .store
            .get_user(&req.collector_id)
            .await?
            .ok_or_else(|| Status::not_found("Collector not found"))?;
        if collector.role != Role::Collector {
            return Err(Status::invalid_argument(format!(
                "user {} is not a collector",
                collector.id
            )));
        }

        let assignment = Assignment {
            collector_id: collector.id,
            collector_name: collector.name,
        };
        let transition = Transition::assign(&pickup, assignment, Utc::now())?;
        let updated = self.commit(transition).await?;
        Ok(Self::respond(&updated))
    }

    async fn set_photo_proof(
        &self,
        request: Request<SetPhotoProofRequest>,
    ) -> Result<Response<PickupResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        auth_user.require(&[Role::Collector, Role::Admin])?;
        let req = request.into_inner();

        let photo_proof =
            non_empty(&req.photo_proof).ok_or_else(|| Status::invalid_argument("photo_proof is required"))?;
        let pickup = self.load(&req.id).await?;
        if auth_user.role == Role::Collector && !Self::is_assigned_to(&pickup, &auth_user.user_id) {
            return Err(Status::permission_denied("Pickup is not assigned to you"));
        }

        let updated = self
            .store
            .set_photo_proof(&pickup.id, photo_proof)
            .await?
            .ok_or_else(|| Status::not_found("Pickup not found"))?;

        tracing::info!("Photo proof attached to pickup {}", updated.id);
        Ok(Self::respond(&updated))
    }

    async fn cancel_pickup(&self, request: Request<IdRequest>) -> Result<Response<Empty>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let pickup = self.load(&request.into_inner().id).await?;

        if pickup.user_id != auth_user.user_id && auth_user.role != Role::Admin {
            return Err(Status::permission_denied("Cannot cancel another user's pickup"));
        }
        if !pickup.status.is_cancellable() {
            return Err(Status::failed_precondition(format!(
                "Only requested pickups can be cancelled, this one is '{}'",
                pickup.status
            )));
        }
        if !self.store.delete_pickup(&pickup.id).await? {
            return Err(Status::aborted("Pickup changed before it could be cancelled"));
        }

        tracing::info!("User {} cancelled pickup {}", auth_user.user_id, pickup.id);
        Ok(Response::new(Empty {}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::db::{MemoryStore, UserStore};
    use crate::models::{NewUser, User};
    use crate::realtime::RealtimeHub;

    struct Fixture {
        service: PickupServiceImpl,
        citizen: User,
        collector: User,
        other_collector: User,
        admin: User,
    }

    async fn user(store: &MemoryStore, name: &str, email: &str, role: Role) -> User {
        store
            .insert_user(
                NewUser {
                    id: None,
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

    async fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new(RealtimeHub::new(16)));
        let citizen = user(&store, "Nikhil", "nikhil@demo.com", Role::Citizen).await;
        let collector = user(&store, "Jane", "jane@demo.com", Role::Collector).await;
        let other_collector = user(&store, "Sarah", "sarah@demo.com", Role::Collector).await;
        let admin = user(&store, "Srishant Goutham", "srishant@demo.com", Role::Admin).await;
        Fixture {
            service: PickupServiceImpl::new(store),
            citizen,
            collector,
            other_collector,
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

    async fn request(f: &Fixture, quantity: f64) -> PickupProto {
        f.service
            .request_pickup(as_user(
                &f.citizen,
                RequestPickupRequest {
                    address: "12 Elm St".to_string(),
                    lat: 51.5,
                    lng: -0.12,
                    waste_type: "Plastic".to_string(),
                    quantity,
                },
            ))
            .await
            .unwrap()
            .into_inner()
            .pickup
            .unwrap()
    }

    async fn advance(f: &Fixture, who: &User, id: &str) -> Result<PickupProto, Status> {
        f.service
            .advance_pickup(as_user(who, IdRequest { id: id.to_string() }))
            .await
            .map(|r| r.into_inner().pickup.unwrap())
    }

    #[tokio::test]
    async fn test_request_validation() {
        let f = fixture().await;
        let status = f
            .service
            .request_pickup(as_user(
                &f.citizen,
                RequestPickupRequest {
                    address: "  ".to_string(),
                    lat: 0.0,
                    lng: 0.0,
                    waste_type: "Plastic".to_string(),
                    quantity: 5.0,
                },
            ))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);

        let status = f
            .service
            .request_pickup(as_user(
                &f.collector,
                RequestPickupRequest {
                    address: "12 Elm St".to_string(),
                    lat: 0.0,
                    lng: 0.0,
                    waste_type: "Plastic".to_string(),
                    quantity: 5.0,
                },
            ))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);
    }

    #[tokio::test]
    async fn test_collector_advance_claims_and_walks_lifecycle() {
        let f = fixture().await;
        let pickup = request(&f, 10.0).await;
        assert_eq!(pickup.progress_percent, 20);

        let claimed = advance(&f, &f.collector, &pickup.id).await.unwrap();
        assert_eq!(claimed.status, "Assigned");
        assert_eq!(claimed.collector_name, "Jane");

        let status = advance(&f, &f.other_collector, &pickup.id).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);

        let mut latest = claimed;
        for expected in ["On the Way", "Picked Up", "Delivered"] {
            latest = advance(&f, &f.collector, &pickup.id).await.unwrap();
            assert_eq!(latest.status, expected);
        }
        assert_eq!(latest.legacy_status, "completed");
        assert_eq!(latest.progress_percent, 100);
        assert!(!latest.delivered_date.is_empty());

        let status = advance(&f, &f.collector, &pickup.id).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::FailedPrecondition);
    }

    #[tokio::test]
    async fn test_update_status_accepts_legacy_vocabulary() {
        let f = fixture().await;
        let pickup = request(&f, 3.0).await;

        let updated = f
            .service
            .update_pickup_status(as_user(
                &f.collector,
                UpdatePickupStatusRequest {
                    id: pickup.id.clone(),
                    status: "scheduled".to_string(),
                },
            ))
            .await
            .unwrap()
            .into_inner()
            .pickup
            .unwrap();
        assert_eq!(updated.status, "Assigned");
        assert_eq!(updated.collector_id, f.collector.id);

        let status = f
            .service
            .update_pickup_status(as_user(
                &f.collector,
                UpdatePickupStatusRequest {
                    id: pickup.id,
                    status: "completed".to_string(),
                },
            ))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::FailedPrecondition);
    }

    #[tokio::test]
    async fn test_assign_requires_a_collector_account() {
        let f = fixture().await;
        let pickup = request(&f, 3.0).await;

        let status = f
            .service
            .assign_collector(as_user(
                &f.admin,
                AssignCollectorRequest {
                    id: pickup.id.clone(),
                    collector_id: f.citizen.id.clone(),
                },
            ))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);

        let status = f
            .service
            .assign_collector(as_user(
                &f.collector,
                AssignCollectorRequest {
                    id: pickup.id,
                    collector_id: f.collector.id.clone(),
                },
            ))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);
    }

    #[tokio::test]
    async fn test_visibility_by_role() {
        let f = fixture().await;
        let pickup = request(&f, 3.0).await;
        advance(&f, &f.collector, &pickup.id).await.unwrap();

        let status = f
            .service
            .get_pickup(as_user(&f.other_collector, IdRequest { id: pickup.id.clone() }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);

        let visible = f
            .service
            .list_pickups(as_user(&f.other_collector, ListPickupsRequest::default()))
            .await
            .unwrap()
            .into_inner()
            .pickups;
        assert!(visible.is_empty());

        let all = f
            .service
            .list_pickups(as_user(&f.admin, ListPickupsRequest::default()))
            .await
            .unwrap()
            .into_inner()
            .pickups;
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_photo_proof_only_for_assigned_collector() {
        let f = fixture().await;
        let pickup = request(&f, 3.0).await;
        advance(&f, &f.collector, &pickup.id).await.unwrap();

        let status = f
            .service
            .set_photo_proof(as_user(
                &f.other_collector,
                SetPhotoProofRequest {
                    id: pickup.id.clone(),
                    photo_proof: "proofs/p1.jpg".to_string(),
                },
            ))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);

        let updated = f
            .service
            .set_photo_proof(as_user(
                &f.collector,
                SetPhotoProofRequest {
                    id: pickup.id,
                    photo_proof: "proofs/p1.jpg".to_string(),
                },
            ))
            .await
            .unwrap()
            .into_inner()
            .pickup
            .unwrap();
        assert_eq!(updated.photo_proof, "proofs/p1.jpg");
    }

    #[tokio::test]
    async fn test_edit_details_only_while_requested() {
        let f = fixture().await;
        let pickup = request(&f, 3.0).await;
        let edit = |id: &str| UpdatePickupDetailsRequest {
            id: id.to_string(),
            address: "14 Elm St".to_string(),
            lat: 51.5,
            lng: -0.12,
            waste_type: "Glass".to_string(),
            quantity: 4.0,
        };

        let updated = f
            .service
            .update_pickup_details(as_user(&f.citizen, edit(&pickup.id)))
            .await
            .unwrap()
            .into_inner()
            .pickup
            .unwrap();
        assert_eq!(updated.waste_type, "Glass");

        advance(&f, &f.collector, &pickup.id).await.unwrap();
        let status = f
            .service
            .update_pickup_details(as_user(&f.citizen, edit(&pickup.id)))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::FailedPrecondition);
    }

    #[tokio::test]
    async fn test_admin_cannot_edit_delivered_pickup() {
        let f = fixture().await;
        let pickup = request(&f, 3.0).await;
        for _ in 0..4 {
            advance(&f, &f.collector, &pickup.id).await.unwrap();
        }

        let status = f
            .service
            .update_pickup_details(as_user(
                &f.admin,
                UpdatePickupDetailsRequest {
                    id: pickup.id.clone(),
                    address: "12 Elm St".to_string(),
                    lat: 51.5,
                    lng: -0.12,
                    waste_type: "Plastic".to_string(),
                    quantity: 300.0,
                },
            ))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::FailedPrecondition);
    }
}
