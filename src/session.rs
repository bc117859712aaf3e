//! Session tokens, password hashing and the page route guard.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{Role, User};

const SESSION_HOURS: i64 = 24;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub name: String,
    pub exp: i64,
    pub iat: i64,
}

pub fn issue_token(jwt_secret: &str, user: &User) -> AppResult<(String, DateTime<Utc>)> {
    let now = Utc::now();
    let exp = now + chrono::Duration::hours(SESSION_HOURS);
    let claims = Claims {
        sub: user.id.clone(),
        role: user.role,
        name: user.name.clone(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("JWT error: {}", e)))?;
    Ok((token, exp))
}

pub fn decode_token(jwt_secret: &str, token: &str) -> AppResult<Claims> {
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthenticated)
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::encode_b64(uuid::Uuid::new_v4().as_bytes())
        .map_err(|e| AppError::Internal(format!("Salt error: {}", e)))?;
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Password hash error: {}", e)))
}

/// Fails with `Unauthenticated` on a wrong password.
pub fn verify_password(password: &str, password_hash: &str) -> AppResult<()> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|_| AppError::Internal("Invalid password hash in database".to_string()))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthenticated)
}

pub fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Citizen => "/dashboard",
        Role::Collector => "/collector",
        Role::Ngo => "/ngo",
        Role::Admin => "/admin",
    }
}

pub const AUTH_ROUTE: &str = "/auth";

const PUBLIC_PREFIXES: &[&str] = &["/auth", "/signup", "/api"];

pub fn is_public_route(path: &str) -> bool {
    path == "/" || PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

/// Anonymous visitors of protected pages go to `/auth`; signed-in users
/// opening `/auth` go to their role's landing page.
pub fn resolve_route(path: &str, session: Option<&Claims>) -> RouteDecision {
    match session {
        None if !is_public_route(path) => RouteDecision::Redirect(AUTH_ROUTE),
        Some(claims) if path == AUTH_ROUTE => RouteDecision::Redirect(landing_route(claims.role)),
        _ => RouteDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        let now = Utc::now();
        User {
            id: "U001".to_string(),
            name: "Nikhil".to_string(),
            email: "nikhil@demo.com".to_string(),
            role,
            address: None,
            lat: None,
            lng: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn claims(role: Role) -> Claims {
        Claims {
            sub: "U001".to_string(),
            role,
            name: "Nikhil".to_string(),
            exp: 0,
            iat: 0,
        }
    }

    #[test]
    fn test_token_round_trip() {
        let (token, exp) = issue_token("secret", &user(Role::Collector)).unwrap();
        let claims = decode_token("secret", &token).unwrap();
        assert_eq!(claims.sub, "U001");
        assert_eq!(claims.role, Role::Collector);
        assert_eq!(claims.exp, exp.timestamp());

        assert!(matches!(
            decode_token("other-secret", &token),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = hash_password("demo123").unwrap();
        assert!(verify_password("demo123", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong", &hash),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn test_anonymous_protected_route_redirects_to_auth() {
        assert_eq!(resolve_route("/dashboard", None), RouteDecision::Redirect("/auth"));
        assert_eq!(resolve_route("/admin/users", None), RouteDecision::Redirect("/auth"));
        assert_eq!(resolve_route("/", None), RouteDecision::Allow);
        assert_eq!(resolve_route("/signup", None), RouteDecision::Allow);
        assert_eq!(resolve_route("/api/health", None), RouteDecision::Allow);
    }

    #[test]
    fn test_signed_in_auth_page_redirects_to_landing() {
        let expected = [
            (Role::Citizen, "/dashboard"),
            (Role::Collector, "/collector"),
            (Role::Ngo, "/ngo"),
            (Role::Admin, "/admin"),
        ];
        for (role, landing) in expected {
            assert_eq!(
                resolve_route("/auth", Some(&claims(role))),
                RouteDecision::Redirect(landing)
            );
        }
        assert_eq!(resolve_route("/ngo", Some(&claims(Role::Ngo))), RouteDecision::Allow);
    }
}
