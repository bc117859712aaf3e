use std::sync::Arc;

use chrono::Utc;
use tonic::{Request, Response, Status};

use crate::db::{DonationFilter, NgoStore};
use crate::lifecycle::DonationStatus;
use crate::middleware::AuthenticatedUser;
use crate::models::{Donation, NewDonation, NewInventoryItem, Role, DEFAULT_INVENTORY_UNIT};
use crate::proto::common::{Empty, IdRequest};
use crate::proto::donations::donation_service_server::DonationService;
use crate::proto::donations::{
    Donation as DonationProto, DonationResponse, ListDonationsRequest, ListDonationsResponse,
    OfferDonationRequest, RespondToDonationRequest, RespondToDonationResponse,
    UpdateDonationStatusRequest,
};
use crate::services::{get_authenticated_user, non_empty, parse_date, timestamp, SharedStore};

pub struct DonationServiceImpl {
    store: SharedStore,
    inventory: Arc<dyn NgoStore>,
}

impl DonationServiceImpl {
    /// `inventory` receives the item recorded when a donation is accepted.
    pub fn new(store: SharedStore, inventory: Arc<dyn NgoStore>) -> Self {
        Self { store, inventory }
    }

    pub(crate) fn model_to_proto(model: &Donation) -> DonationProto {
        DonationProto {
            id: model.id.clone(),
            donor_id: model.donor_id.clone(),
            donor_name: model.donor_name.clone(),
            ngo_id: model.ngo_id.clone(),
            item: model.item.clone(),
            quantity: model.quantity,
            address: model.address.clone(),
            lat: model.lat,
            lng: model.lng,
            status: model.status.to_string(),
            date: model.date.to_string(),
            pickup_date: model.pickup_date.map(|d| d.to_string()).unwrap_or_default(),
            created_at: timestamp(&model.created_at),
            updated_at: timestamp(&model.updated_at),
        }
    }

    fn can_view(auth_user: &AuthenticatedUser, donation: &Donation) -> bool {
        match auth_user.role {
            Role::Admin => true,
            Role::Citizen => donation.donor_id == auth_user.user_id,
            Role::Ngo => donation.ngo_id == auth_user.user_id,
            Role::Collector => false,
        }
    }

    async fn load(&self, id: &str) -> Result<Donation, Status> {
        if id.is_empty() {
            return Err(Status::invalid_argument("id is required"));
        }
        self.store
            .get_donation(id)
            .await?
            .ok_or_else(|| Status::not_found("Donation not found"))
    }

    /// Moves a donation addressed to the caller's NGO. Acceptance also records
    /// the donation in that NGO's inventory; a failure there is logged and
    /// reported through the returned flag without undoing the status change.
    async fn move_donation(
        &self,
        auth_user: &AuthenticatedUser,
        id: &str,
        to: DonationStatus,
    ) -> Result<RespondToDonationResponse, Status> {
        auth_user.require(&[Role::Ngo, Role::Admin])?;
        let donation = self.load(id).await?;
        if auth_user.role == Role::Ngo && donation.ngo_id != auth_user.user_id {
            return Err(Status::permission_denied("Donation is addressed to another NGO"));
        }

        let updated = self
            .store
            .set_donation_status(&donation.id, donation.status, to)
            .await?;
        tracing::info!(
            "Donation {} moved from '{}' to '{}'",
            updated.id,
            donation.status,
            updated.status
        );

        let inventory_recorded = if to == DonationStatus::Accepted {
            self.record_inventory(&updated).await
        } else {
            false
        };

        Ok(RespondToDonationResponse {
            donation: Some(Self::model_to_proto(&updated)),
            inventory_recorded,
        })
    }

    async fn record_inventory(&self, donation: &Donation) -> bool {
        let item = NewInventoryItem {
            ngo_id: donation.ngo_id.clone(),
            item: donation.item.clone(),
            quantity: donation.quantity,
            unit: DEFAULT_INVENTORY_UNIT.to_string(),
            date: Utc::now().date_naive(),
        };
        match self.inventory.insert_inventory_item(item).await {
            Ok(recorded) => {
                tracing::info!(
                    "Recorded inventory item {} for NGO {} from donation {}",
                    recorded.id,
                    donation.ngo_id,
                    donation.id
                );
                true
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to record inventory for donation {} at NGO {}: {}",
                    donation.id,
                    donation.ngo_id,
                    e
                );
                false
            }
        }
    }
}

#[tonic::async_trait]
impl DonationService for DonationServiceImpl {
    async fn offer_donation(
        &self,
        request: Request<OfferDonationRequest>,
    ) -> Result<Response<DonationResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        auth_user.require(&[Role::Citizen])?;
        let req = request.into_inner();

        let ngo_id = non_empty(&req.ngo_id).ok_or_else(|| Status::invalid_argument("ngo_id is required"))?;
        let item = non_empty(&req.item).ok_or_else(|| Status::invalid_argument("item is required"))?;
        if !req.quantity.is_finite() || req.quantity <= 0.0 {
            return Err(Status::invalid_argument("quantity must be greater than 0"));
        }
        let pickup_date = parse_date("pickup_date", &req.pickup_date)?;

        if self.store.get_ngo(ngo_id).await?.is_none() {
            return Err(Status::not_found("NGO not found"));
        }

        let donation = self
            .store
            .insert_donation(NewDonation {
                donor_id: auth_user.user_id.clone(),
                donor_name: auth_user.name.clone(),
                ngo_id: ngo_id.to_string(),
                item: item.to_string(),
                quantity: req.quantity,
                address: req.address.trim().to_string(),
                lat: req.lat,
                lng: req.lng,
                pickup_date,
            })
            .await?;

        tracing::info!(
            "User {} offered donation {} to NGO {}",
            auth_user.user_id,
            donation.id,
            donation.ngo_id
        );
        Ok(Response::new(DonationResponse {
            donation: Some(Self::model_to_proto(&donation)),
        }))
    }

    async fn get_donation(
        &self,
        request: Request<IdRequest>,
    ) -> Result<Response<DonationResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let donation = self.load(&request.into_inner().id).await?;

        if !Self::can_view(&auth_user, &donation) {
            return Err(Status::permission_denied("Cannot view this donation"));
        }
        Ok(Response::new(DonationResponse {
            donation: Some(Self::model_to_proto(&donation)),
        }))
    }

    async fn list_donations(
        &self,
        request: Request<ListDonationsRequest>,
    ) -> Result<Response<ListDonationsResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let req = request.into_inner();

        let scope = non_empty(&req.scope).unwrap_or(match auth_user.role {
            Role::Citizen => "mine",
            Role::Ngo => "ngo",
            Role::Admin => "all",
            Role::Collector => "",
        });

        let filter = match scope {
            "mine" => {
                auth_user.require(&[Role::Citizen, Role::Admin])?;
                DonationFilter::ByDonor(auth_user.user_id.clone())
            }
            "ngo" => {
                auth_user.require(&[Role::Ngo])?;
                DonationFilter::ByNgo(auth_user.user_id.clone())
            }
            "all" => {
                auth_user.require(&[Role::Admin])?;
                DonationFilter::All
            }
            "" => return Err(Status::permission_denied("Collectors have no donations")),
            other => {
                return Err(Status::invalid_argument(format!(
                    "scope must be mine, ngo or all, got '{}'",
                    other
                )))
            }
        };

        let donations = self.store.list_donations(&filter).await?;
        Ok(Response::new(ListDonationsResponse {
            donations: donations.iter().map(Self::model_to_proto).collect(),
        }))
    }

    async fn respond_to_donation(
        &self,
        request: Request<RespondToDonationRequest>,
    ) -> Result<Response<RespondToDonationResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let req = request.into_inner();

        let to = if req.accept {
            DonationStatus::Accepted
        } else {
            DonationStatus::Declined
        };
        let response = self.move_donation(&auth_user, &req.id, to).await?;
        Ok(Response::new(response))
    }

    async fn update_donation_status(
        &self,
        request: Request<UpdateDonationStatusRequest>,
    ) -> Result<Response<RespondToDonationResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let req = request.into_inner();

        let to = req
            .status
            .parse::<DonationStatus>()
            .map_err(|e| Status::invalid_argument(e.to_string()))?;
        let response = self.move_donation(&auth_user, &req.id, to).await?;
        Ok(Response::new(response))
    }

    async fn withdraw_donation(&self, request: Request<IdRequest>) -> Result<Response<Empty>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let donation = self.load(&request.into_inner().id).await?;

        if donation.donor_id != auth_user.user_id {
            return Err(Status::permission_denied("Cannot withdraw another user's donation"));
        }
        if donation.status != DonationStatus::Pending {
            return Err(Status::failed_precondition(format!(
                "Only pending donations can be withdrawn, this one is '{}'",
                donation.status
            )));
        }
        if !self.store.delete_donation(&donation.id).await? {
            return Err(Status::aborted("Donation changed before it could be withdrawn"));
        }

        tracing::info!("User {} withdrew donation {}", auth_user.user_id, donation.id);
        Ok(Response::new(Empty {}))
    }
}
