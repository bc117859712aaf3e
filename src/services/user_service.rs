use tonic::{Request, Response, Status};

use crate::middleware::AuthenticatedUser;
use crate::models::{ProfilePatch, Role, User, UserStats};
use crate::proto::common::{Empty, IdRequest};
use crate::proto::users::user_service_server::UserService;
use crate::proto::users::{
    GetStatsRequest, ListUsersRequest, ListUsersResponse, UpdateProfileRequest,
    User as UserProto, UserResponse, UserStats as UserStatsProto, UserStatsResponse,
};
use crate::services::{get_authenticated_user, non_empty, timestamp, SharedStore};

pub struct UserServiceImpl {
    store: SharedStore,
}

impl UserServiceImpl {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub(crate) fn model_to_proto(model: &User) -> UserProto {
        UserProto {
            id: model.id.clone(),
            name: model.name.clone(),
            email: model.email.clone(),
            role: model.role.to_string(),
            address: model.address.clone().unwrap_or_default(),
            lat: model.lat,
            lng: model.lng,
            created_at: timestamp(&model.created_at),
            updated_at: timestamp(&model.updated_at),
        }
    }

    pub(crate) fn stats_to_proto(model: &UserStats) -> UserStatsProto {
        UserStatsProto {
            user_id: model.user_id.clone(),
            total_pickups: model.total_pickups,
            waste_collected: model.waste_collected,
            co2_saved: model.co2_saved,
            green_points: model.green_points,
        }
    }

    fn require_self_or_admin(auth_user: &AuthenticatedUser, user_id: &str) -> Result<(), Status> {
        if auth_user.user_id == user_id || auth_user.role == Role::Admin {
            Ok(())
        } else {
            Err(Status::permission_denied("Cannot access another user"))
        }
    }

    async fn load_user(&self, id: &str) -> Result<User, Status> {
        self.store
            .get_user(id)
            .await?
            .ok_or_else(|| Status::not_found("User not found"))
    }
}

#[tonic::async_trait]
impl UserService for UserServiceImpl {
    async fn get_me(&self, request: Request<Empty>) -> Result<Response<UserResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let user = self.load_user(&auth_user.user_id).await?;
        Ok(Response::new(UserResponse {
            user: Some(Self::model_to_proto(&user)),
        }))
    }

    async fn get_user(&self, request: Request<IdRequest>) -> Result<Response<UserResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let req = request.into_inner();

        if req.id.is_empty() {
            return Err(Status::invalid_argument("id is required"));
        }
        Self::require_self_or_admin(&auth_user, &req.id)?;

        let user = self.load_user(&req.id).await?;
        Ok(Response::new(UserResponse {
            user: Some(Self::model_to_proto(&user)),
        }))
    }

    async fn list_users(
        &self,
        request: Request<ListUsersRequest>,
    ) -> Result<Response<ListUsersResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        auth_user.require(&[Role::Admin])?;
        let req = request.into_inner();

        let role = non_empty(&req.role)
            .map(|r| r.parse::<Role>())
            .transpose()
            .map_err(|e| Status::invalid_argument(e.to_string()))?;

        let users = self.store.list_users(role).await?;
        Ok(Response::new(ListUsersResponse {
            users: users.iter().map(Self::model_to_proto).collect(),
        }))
    }

    async fn update_profile(
        &self,
        request: Request<UpdateProfileRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let req = request.into_inner();

        let patch = ProfilePatch {
            name: non_empty(&req.name).map(str::to_string),
            address: non_empty(&req.address).map(str::to_string),
            lat: req.lat,
            lng: req.lng,
        };

        let user = self
            .store
            .update_user_profile(&auth_user.user_id, patch)
            .await?
            .ok_or_else(|| Status::not_found("User not found"))?;

        tracing::info!("Updated profile of user {}", user.id);
        Ok(Response::new(UserResponse {
            user: Some(Self::model_to_proto(&user)),
        }))
    }

    async fn delete_user(&self, request: Request<IdRequest>) -> Result<Response<Empty>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        auth_user.require(&[Role::Admin])?;
        let req = request.into_inner();

        if req.id.is_empty() {
            return Err(Status::invalid_argument("id is required"));
        }
        if req.id == auth_user.user_id {
            return Err(Status::failed_precondition("Admins cannot delete their own account"));
        }

        if !self.store.delete_user(&req.id).await? {
            return Err(Status::not_found("User not found"));
        }

        tracing::info!("Admin {} deleted user {}", auth_user.user_id, req.id);
        Ok(Response::new(Empty {}))
    }

    async fn get_stats(
        &self,
        request: Request<GetStatsRequest>,
    ) -> Result<Response<UserStatsResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let req = request.into_inner();

        let user_id = non_empty(&req.user_id).unwrap_or(&auth_user.user_id);
        Self::require_self_or_admin(&auth_user, user_id)?;

        // Only citizens carry stats rows; everyone else reads zeros.
        let stats = self
            .store
            .get_user_stats(user_id)
            .await?
            .unwrap_or_else(|| UserStats {
                user_id: user_id.to_string(),
                ..UserStats::default()
            });

        Ok(Response::new(UserStatsResponse {
            stats: Some(Self::stats_to_proto(&stats)),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::db::{MemoryStore, UserStore};
    use crate::models::NewUser;
    use crate::realtime::RealtimeHub;

    async fn setup() -> (UserServiceImpl, User, User) {
        let store = Arc::new(MemoryStore::new(RealtimeHub::new(8)));
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
        (UserServiceImpl::new(store), citizen, admin)
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

    #[tokio::test]
    async fn test_update_profile_keeps_role() {
        let (service, citizen, _) = setup().await;
        let updated = service
            .update_profile(as_user(
                &citizen,
                UpdateProfileRequest {
                    name: String::new(),
                    address: "12 Elm St".to_string(),
                    lat: Some(51.5),
                    lng: Some(-0.12),
                },
            ))
            .await
            .unwrap()
            .into_inner()
            .user
            .unwrap();
        assert_eq!(updated.name, "Nikhil");
        assert_eq!(updated.address, "12 Elm St");
        assert_eq!(updated.role, "citizen");
    }

    #[tokio::test]
    async fn test_list_users_is_admin_only() {
        let (service, citizen, admin) = setup().await;
        let status = service
            .list_users(as_user(&citizen, ListUsersRequest { role: String::new() }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);

        let citizens = service
            .list_users(as_user(&admin, ListUsersRequest { role: "citizen".to_string() }))
            .await
            .unwrap()
            .into_inner()
            .users;
        assert_eq!(citizens.len(), 1);
        assert_eq!(citizens[0].email, "nikhil@demo.com");
    }

    #[tokio::test]
    async fn test_stats_defaults_to_self() {
        let (service, citizen, admin) = setup().await;
        let stats = service
            .get_stats(as_user(&citizen, GetStatsRequest { user_id: String::new() }))
            .await
            .unwrap()
            .into_inner()
            .stats
            .unwrap();
        assert_eq!(stats.user_id, citizen.id);
        assert_eq!(stats.total_pickups, 0);

        let status = service
            .get_stats(as_user(&citizen, GetStatsRequest { user_id: admin.id.clone() }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);
    }

    #[tokio::test]
    async fn test_delete_user() {
        let (service, citizen, admin) = setup().await;
        service
            .delete_user(as_user(&admin, IdRequest { id: citizen.id.clone() }))
            .await
            .unwrap();
        let status = service
            .get_user(as_user(&admin, IdRequest { id: citizen.id }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::NotFound);
    }
}
