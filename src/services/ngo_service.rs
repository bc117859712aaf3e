use chrono::Utc;
use tonic::{Request, Response, Status};

use crate::middleware::AuthenticatedUser;
use crate::models::{
    InventoryItem, Material, NewInventoryItem, NewMaterial, NewNgo, Ngo, Role,
    DEFAULT_INVENTORY_UNIT,
};
use crate::proto::common::{Empty, IdRequest};
use crate::proto::ngos::ngo_service_server::NgoService;
use crate::proto::ngos::{
    AddInventoryItemRequest, CreateNgoRequest, InventoryItem as InventoryItemProto,
    InventoryItemResponse, ListByNgoRequest, ListInventoryResponse, ListMaterialsResponse,
    ListNgosResponse, LogMaterialRequest, Material as MaterialProto, MaterialResponse,
    Ngo as NgoProto, NgoResponse,
};
use crate::services::{get_authenticated_user, non_empty, parse_date, timestamp, SharedStore};

pub struct NgoServiceImpl {
    store: SharedStore,
}

impl NgoServiceImpl {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub(crate) fn model_to_proto(model: &Ngo) -> NgoProto {
        NgoProto {
            id: model.id.clone(),
            name: model.name.clone(),
            email: model.email.clone(),
            address: model.address.clone(),
            lat: model.lat,
            lng: model.lng,
            description: model.description.clone(),
            accepted_waste_types: model.accepted_waste_types.clone(),
        }
    }

    pub(crate) fn inventory_to_proto(model: &InventoryItem) -> InventoryItemProto {
        InventoryItemProto {
            id: model.id.clone(),
            ngo_id: model.ngo_id.clone(),
            item: model.item.clone(),
            quantity: model.quantity,
            unit: model.unit.clone(),
            date: model.date.to_string(),
            created_at: timestamp(&model.created_at),
        }
    }

    pub(crate) fn material_to_proto(model: &Material) -> MaterialProto {
        MaterialProto {
            id: model.id.clone(),
            ngo_id: model.ngo_id.clone(),
            material_type: model.material_type.clone(),
            weight: model.weight,
            source: model.source.clone(),
            notes: model.notes.clone().unwrap_or_default(),
            created_at: timestamp(&model.created_at),
        }
    }

    /// Resolves which NGO's records the caller may read. NGO accounts read
    /// their own; admins name one explicitly.
    fn records_owner(auth_user: &AuthenticatedUser, requested: &str) -> Result<String, Status> {
        match (auth_user.role, non_empty(requested)) {
            (Role::Ngo, None) => Ok(auth_user.user_id.clone()),
            (Role::Ngo, Some(id)) if id == auth_user.user_id => Ok(id.to_string()),
            (Role::Admin, Some(id)) => Ok(id.to_string()),
            (Role::Admin, None) => Err(Status::invalid_argument("ngo_id is required")),
            _ => Err(Status::permission_denied("Cannot read another NGO's records")),
        }
    }

    fn positive(field: &str, value: f64) -> Result<f64, Status> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Status::invalid_argument(format!("{} must be greater than 0", field)))
        }
    }
}

#[tonic::async_trait]
impl NgoService for NgoServiceImpl {
    async fn list_ngos(&self, request: Request<Empty>) -> Result<Response<ListNgosResponse>, Status> {
        get_authenticated_user(&request)?;
        let ngos = self.store.list_ngos().await?;
        Ok(Response::new(ListNgosResponse {
            ngos: ngos.iter().map(Self::model_to_proto).collect(),
        }))
    }

    async fn get_ngo(&self, request: Request<IdRequest>) -> Result<Response<NgoResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let req = request.into_inner();

        if req.id.is_empty() {
            return Err(Status::invalid_argument("id is required"));
        }
        let ngo = self
            .store
            .get_ngo(&req.id)
            .await?
            .ok_or_else(|| Status::not_found("NGO not found"))?;

        let inventory = match Self::records_owner(&auth_user, &ngo.id) {
            Ok(owner) => self.store.list_inventory(&owner).await?,
            Err(_) => Vec::new(),
        };

        Ok(Response::new(NgoResponse {
            ngo: Some(Self::model_to_proto(&ngo)),
            inventory: inventory.iter().map(Self::inventory_to_proto).collect(),
        }))
    }

    async fn create_ngo(
        &self,
        request: Request<CreateNgoRequest>,
    ) -> Result<Response<NgoResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        auth_user.require(&[Role::Admin])?;
        let req = request.into_inner();

        let name = non_empty(&req.name).ok_or_else(|| Status::invalid_argument("name is required"))?;
        let email = non_empty(&req.email).ok_or_else(|| Status::invalid_argument("email is required"))?;

        let ngo = self
            .store
            .insert_ngo(NewNgo {
                id: non_empty(&req.id).map(str::to_string),
                name: name.to_string(),
                email: email.to_string(),
                address: req.address.trim().to_string(),
                lat: req.lat,
                lng: req.lng,
                description: req.description.trim().to_string(),
                accepted_waste_types: req
                    .accepted_waste_types
                    .iter()
                    .filter_map(|t| non_empty(t).map(str::to_string))
                    .collect(),
            })
            .await?;

        tracing::info!("Admin {} created NGO {}", auth_user.user_id, ngo.id);
        Ok(Response::new(NgoResponse {
            ngo: Some(Self::model_to_proto(&ngo)),
            inventory: Vec::new(),
        }))
    }

    async fn list_inventory(
        &self,
        request: Request<ListByNgoRequest>,
    ) -> Result<Response<ListInventoryResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let owner = Self::records_owner(&auth_user, &request.into_inner().ngo_id)?;

        let items = self.store.list_inventory(&owner).await?;
        Ok(Response::new(ListInventoryResponse {
            items: items.iter().map(Self::inventory_to_proto).collect(),
        }))
    }

    async fn add_inventory_item(
        &self,
        request: Request<AddInventoryItemRequest>,
    ) -> Result<Response<InventoryItemResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        auth_user.require(&[Role::Ngo])?;
        let req = request.into_inner();

        let item = non_empty(&req.item).ok_or_else(|| Status::invalid_argument("item is required"))?;
        let quantity = Self::positive("quantity", req.quantity)?;
        let date = parse_date("date", &req.date)?.unwrap_or_else(|| Utc::now().date_naive());

        let recorded = self
            .store
            .insert_inventory_item(NewInventoryItem {
                ngo_id: auth_user.user_id.clone(),
                item: item.to_string(),
                quantity,
                unit: non_empty(&req.unit).unwrap_or(DEFAULT_INVENTORY_UNIT).to_string(),
                date,
            })
            .await?;

        tracing::info!("NGO {} added inventory item {}", auth_user.user_id, recorded.id);
        Ok(Response::new(InventoryItemResponse {
            item: Some(Self::inventory_to_proto(&recorded)),
        }))
    }

    async fn list_materials(
        &self,
        request: Request<ListByNgoRequest>,
    ) -> Result<Response<ListMaterialsResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let owner = Self::records_owner(&auth_user, &request.into_inner().ngo_id)?;

        let materials = self.store.list_materials(&owner).await?;
        Ok(Response::new(ListMaterialsResponse {
            materials: materials.iter().map(Self::material_to_proto).collect(),
        }))
    }

    async fn log_material(
        &self,
        request: Request<LogMaterialRequest>,
    ) -> Result<Response<MaterialResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        auth_user.require(&[Role::Ngo])?;
        let req = request.into_inner();

        let material_type = non_empty(&req.material_type)
            .ok_or_else(|| Status::invalid_argument("material_type is required"))?;
        let weight = Self::positive("weight", req.weight)?;

        let material = self
            .store
            .insert_material(NewMaterial {
                ngo_id: auth_user.user_id.clone(),
                material_type: material_type.to_string(),
                weight,
                source: req.source.trim().to_string(),
                notes: non_empty(&req.notes).map(str::to_string),
            })
            .await?;

        tracing::info!("NGO {} logged material {}", auth_user.user_id, material.id);
        Ok(Response::new(MaterialResponse {
            material: Some(Self::material_to_proto(&material)),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::db::MemoryStore;
    use crate::realtime::RealtimeHub;

    fn as_role<T>(user_id: &str, role: Role, message: T) -> Request<T> {
        let mut request = Request::new(message);
        request.extensions_mut().insert(AuthenticatedUser {
            user_id: user_id.to_string(),
            role,
            name: "Badrinath".to_string(),
        });
        request
    }

    #[test]
    fn test_records_owner() {
        let ngo = AuthenticatedUser {
            user_id: "NGO-001".to_string(),
            role: Role::Ngo,
            name: "Green Earth Foundation".to_string(),
        };
        assert_eq!(NgoServiceImpl::records_owner(&ngo, "").unwrap(), "NGO-001");
        assert!(NgoServiceImpl::records_owner(&ngo, "NGO-002").is_err());

        let citizen = AuthenticatedUser {
            user_id: "U001".to_string(),
            role: Role::Citizen,
            name: "Nikhil".to_string(),
        };
        assert!(NgoServiceImpl::records_owner(&citizen, "NGO-001").is_err());
    }

    #[tokio::test]
    async fn test_manual_inventory_defaults_to_kg_and_today() {
        let service = NgoServiceImpl::new(Arc::new(MemoryStore::new(RealtimeHub::new(8))));
        let item = service
            .add_inventory_item(as_role(
                "NGO-001",
                Role::Ngo,
                AddInventoryItemRequest {
                    item: "Glass Bottles".to_string(),
                    quantity: 12.0,
                    unit: String::new(),
                    date: String::new(),
                },
            ))
            .await
            .unwrap()
            .into_inner()
            .item
            .unwrap();
        assert_eq!(item.unit, "kg");
        assert_eq!(item.date, Utc::now().date_naive().to_string());

        let items = service
            .list_inventory(as_role("NGO-001", Role::Ngo, ListByNgoRequest::default()))
            .await
            .unwrap()
            .into_inner()
            .items;
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_log_material_requires_weight() {
        let service = NgoServiceImpl::new(Arc::new(MemoryStore::new(RealtimeHub::new(8))));
        let status = service
            .log_material(as_role(
                "NGO-001",
                Role::Ngo,
                LogMaterialRequest {
                    material_type: "Plastic".to_string(),
                    weight: 0.0,
                    source: "Pickup P001".to_string(),
                    notes: String::new(),
                },
            ))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }
}
