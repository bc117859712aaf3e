use tonic::{Request, Response, Status};

use crate::error::AppError;
use crate::models::{NewUser, Role, User};
use crate::proto::auth::auth_service_server::AuthService;
use crate::proto::auth::{
    AuthResponse, ResolveRouteRequest, ResolveRouteResponse, SignInRequest, SignUpRequest,
};
use crate::proto::common::Empty;
use crate::services::{get_authenticated_user, non_empty, SharedStore};
use crate::session::{self, RouteDecision};

const MIN_PASSWORD_LEN: usize = 6;

/// Roles open to self-service sign-up. Admins are provisioned by the seed tool.
const SIGN_UP_ROLES: &[Role] = &[Role::Citizen, Role::Collector, Role::Ngo];

pub struct AuthServiceImpl {
    store: SharedStore,
    jwt_secret: String,
}

impl AuthServiceImpl {
    pub fn new(store: SharedStore, jwt_secret: String) -> Self {
        Self { store, jwt_secret }
    }

    fn auth_response(&self, user: &User) -> Result<AuthResponse, Status> {
        let (token, exp) = session::issue_token(&self.jwt_secret, user)?;
        Ok(AuthResponse {
            token,
            expires_at: exp.to_rfc3339(),
            user_id: user.id.clone(),
            role: user.role.to_string(),
            name: user.name.clone(),
            landing_route: session::landing_route(user.role).to_string(),
        })
    }
}

#[tonic::async_trait]
impl AuthService for AuthServiceImpl {
    async fn sign_up(
        &self,
        request: Request<SignUpRequest>,
    ) -> Result<Response<AuthResponse>, Status> {
        let req = request.into_inner();

        let email = non_empty(&req.email)
            .ok_or_else(|| Status::invalid_argument("email is required"))?
            .to_string();
        let name = non_empty(&req.name)
            .ok_or_else(|| Status::invalid_argument("name is required"))?
            .to_string();
        if req.password.len() < MIN_PASSWORD_LEN {
            return Err(Status::invalid_argument(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let role = match non_empty(&req.role) {
            None => Role::Citizen,
            Some(r) => r
                .parse::<Role>()
                .map_err(|e| Status::invalid_argument(e.to_string()))?,
        };
        if !SIGN_UP_ROLES.contains(&role) {
            return Err(Status::permission_denied(format!(
                "cannot sign up as '{}'",
                role
            )));
        }

        let password_hash = session::hash_password(&req.password)?;
        let user = self
            .store
            .insert_user(
                NewUser {
                    id: None,
                    name,
                    email,
                    role,
                    address: None,
                },
                &password_hash,
            )
            .await?;

        tracing::info!("Signed up user {} as {}", user.id, user.role);
        Ok(Response::new(self.auth_response(&user)?))
    }

    async fn sign_in(
        &self,
        request: Request<SignInRequest>,
    ) -> Result<Response<AuthResponse>, Status> {
        let req = request.into_inner();

        if req.email.is_empty() || req.password.is_empty() {
            return Err(Status::invalid_argument("email and password are required"));
        }

        let (user, password_hash) = self
            .store
            .find_credential(req.email.trim())
            .await?
            .ok_or_else(|| Status::unauthenticated("Invalid credentials"))?;

        session::verify_password(&req.password, &password_hash).map_err(|e| match e {
            AppError::Unauthenticated => Status::unauthenticated("Invalid credentials"),
            other => other.into(),
        })?;

        tracing::info!("User {} signed in", user.id);
        Ok(Response::new(self.auth_response(&user)?))
    }

    async fn sign_out(&self, request: Request<Empty>) -> Result<Response<Empty>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        // Tokens are stateless; the client discards its copy.
        tracing::info!("User {} signed out", auth_user.user_id);
        Ok(Response::new(Empty {}))
    }

    async fn resolve_route(
        &self,
        request: Request<ResolveRouteRequest>,
    ) -> Result<Response<ResolveRouteResponse>, Status> {
        let req = request.into_inner();

        let claims = non_empty(&req.token).and_then(|token| session::decode_token(&self.jwt_secret, token).ok());
        let response = match session::resolve_route(&req.path, claims.as_ref()) {
            RouteDecision::Allow => ResolveRouteResponse {
                allowed: true,
                redirect_to: String::new(),
            },
            RouteDecision::Redirect(to) => ResolveRouteResponse {
                allowed: false,
                redirect_to: to.to_string(),
            },
        };
        Ok(Response::new(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::db::MemoryStore;
    use crate::realtime::RealtimeHub;

    fn service() -> AuthServiceImpl {
        AuthServiceImpl::new(Arc::new(MemoryStore::new(RealtimeHub::new(8))), "secret".to_string())
    }

    fn sign_up_request(email: &str, role: &str) -> Request<SignUpRequest> {
        Request::new(SignUpRequest {
            email: email.to_string(),
            password: "demo123".to_string(),
            name: "Nikhil".to_string(),
            role: role.to_string(),
        })
    }

    #[tokio::test]
    async fn test_sign_up_then_sign_in() {
        let auth = service();
        let created = auth
            .sign_up(sign_up_request("nikhil@demo.com", "citizen"))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(created.landing_route, "/dashboard");

        let signed_in = auth
            .sign_in(Request::new(SignInRequest {
                email: "Nikhil@demo.com".to_string(),
                password: "demo123".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(signed_in.user_id, created.user_id);
        assert_eq!(signed_in.role, "citizen");

        let status = auth
            .sign_in(Request::new(SignInRequest {
                email: "nikhil@demo.com".to_string(),
                password: "wrong-password".to_string(),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::Unauthenticated);
    }

    #[tokio::test]
    async fn test_sign_up_rejects_admin_and_duplicates() {
        let auth = service();
        let status = auth
            .sign_up(sign_up_request("root@demo.com", "admin"))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);

        auth.sign_up(sign_up_request("manideep@demo.com", "collector"))
            .await
            .unwrap();
        let status = auth
            .sign_up(sign_up_request("manideep@demo.com", "collector"))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::Aborted);
    }

    #[tokio::test]
    async fn test_resolve_route_with_and_without_session() {
        let auth = service();
        let token = auth
            .sign_up(sign_up_request("badrinath@demo.com", "ngo"))
            .await
            .unwrap()
            .into_inner()
            .token;

        let anonymous = auth
            .resolve_route(Request::new(ResolveRouteRequest {
                path: "/ngo".to_string(),
                token: String::new(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(!anonymous.allowed);
        assert_eq!(anonymous.redirect_to, "/auth");

        let signed_in = auth
            .resolve_route(Request::new(ResolveRouteRequest {
                path: "/auth".to_string(),
                token,
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(signed_in.redirect_to, "/ngo");
    }
}
