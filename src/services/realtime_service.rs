use tokio::sync::broadcast::error::RecvError;
use tokio::sync::mpsc;
use tonic::{Request, Response, Status};

use crate::lifecycle::PickupStatus;
use crate::middleware::AuthenticatedUser;
use crate::models::Role;
use crate::proto::realtime::realtime_service_server::RealtimeService;
use crate::proto::realtime::{ChangeEvent as ChangeEventProto, SubscribeRequest};
use crate::realtime::{ChangeEvent, RealtimeHub, Table};
use crate::services::{get_authenticated_user, non_empty, timestamp};

const STREAM_BUFFER: usize = 32;

/// The rows of one table a caller may receive. Mirrors the read checks of the
/// unary RPCs: admins see everything, other roles see their own rows only.
#[derive(Debug, Clone, PartialEq)]
enum Scope {
    Everything,
    /// Rows whose `field` equals the value.
    Owned(&'static str, String),
    /// Unclaimed requests plus the collector's own pickups.
    VisibleToCollector(String),
}

impl Scope {
    fn for_caller(table: Table, auth_user: &AuthenticatedUser, user_id: Option<&str>) -> Result<Self, Status> {
        let me = auth_user.user_id.clone();
        let denied = || Status::permission_denied(format!("role '{}' cannot watch {}", auth_user.role, table));

        if table == Table::UserStats {
            return match user_id {
                Some(id) if auth_user.role == Role::Admin => Ok(Scope::Owned("user_id", id.to_string())),
                None if auth_user.role == Role::Admin => Ok(Scope::Everything),
                Some(id) if id != me => Err(Status::permission_denied("Cannot watch another user's stats")),
                _ => Ok(Scope::Owned("user_id", me)),
            };
        }
        if auth_user.role == Role::Admin {
            return Ok(Scope::Everything);
        }

        match (table, auth_user.role) {
            (Table::Ngos, _) => Ok(Scope::Everything),
            (Table::Users, _) => Ok(Scope::Owned("id", me)),
            (Table::Pickups, Role::Citizen) => Ok(Scope::Owned("user_id", me)),
            (Table::Pickups, Role::Collector) => Ok(Scope::VisibleToCollector(me)),
            (Table::Donations, Role::Citizen) => Ok(Scope::Owned("donor_id", me)),
            (Table::Donations, Role::Ngo) => Ok(Scope::Owned("ngo_id", me)),
            (Table::NgoInventory | Table::NgoMaterials, Role::Ngo) => Ok(Scope::Owned("ngo_id", me)),
            (Table::Schedules, Role::Citizen) => Ok(Scope::Owned("user_id", me)),
            _ => Err(denied()),
        }
    }

    fn accepts(&self, event: &ChangeEvent) -> bool {
        match self {
            Scope::Everything => true,
            Scope::Owned(field, value) => event.row_field(field) == Some(value.as_str()),
            Scope::VisibleToCollector(collector_id) => {
                event.row_field("status") == Some(PickupStatus::Requested.as_str())
                    || event.row_field("collector_id") == Some(collector_id.as_str())
            }
        }
    }
}

pub struct RealtimeServiceImpl {
    hub: RealtimeHub,
}

impl RealtimeServiceImpl {
    pub fn new(hub: RealtimeHub) -> Self {
        Self { hub }
    }

    pub(crate) fn event_to_proto(event: &ChangeEvent) -> ChangeEventProto {
        let json = |row: &Option<serde_json::Value>| row.as_ref().map(|v| v.to_string()).unwrap_or_default();
        ChangeEventProto {
            table: event.table.to_string(),
            event_type: event.kind.as_str().to_string(),
            new_row: json(&event.new),
            old_row: json(&event.old),
            commit_timestamp: timestamp(&event.commit_timestamp),
        }
    }
}

#[tonic::async_trait]
impl RealtimeService for RealtimeServiceImpl {
    type SubscribeStream = tokio_stream::wrappers::ReceiverStream<Result<ChangeEventProto, Status>>;

    async fn subscribe(
        &self,
        request: Request<SubscribeRequest>,
    ) -> Result<Response<Self::SubscribeStream>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let req = request.into_inner();

        let table = req
            .table
            .parse::<Table>()
            .map_err(|e| Status::invalid_argument(e.to_string()))?;

        let scope = Scope::for_caller(table, &auth_user, non_empty(&req.user_id))?;

        let mut events = self.hub.subscribe(table);
        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        tracing::debug!("User {} subscribed to {}", auth_user.user_id, table);

        tokio::spawn(async move {
            loop {
                let event = tokio::select! {
                    _ = tx.closed() => break,
                    received = events.recv() => received,
                };
                match event {
                    Ok(event) => {
                        if !scope.accepts(&event) {
                            continue;
                        }
                        if tx.send(Ok(RealtimeServiceImpl::event_to_proto(&event))).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            "Subscriber {} on {} lagged, {} events dropped",
                            auth_user.user_id,
                            table,
                            skipped
                        );
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            tracing::debug!("User {} unsubscribed from {}", auth_user.user_id, table);
        });

        Ok(Response::new(tokio_stream::wrappers::ReceiverStream::new(rx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserStats;
    use serde_json::json;
    use tokio_stream::StreamExt;

    fn as_role<T>(user_id: &str, role: Role, message: T) -> Request<T> {
        let mut request = Request::new(message);
        request.extensions_mut().insert(AuthenticatedUser {
            user_id: user_id.to_string(),
            role,
            name: "Nikhil".to_string(),
        });
        request
    }

    fn stats_for(user_id: &str) -> UserStats {
        UserStats {
            user_id: user_id.to_string(),
            total_pickups: 1,
            ..UserStats::default()
        }
    }

    #[tokio::test]
    async fn test_unknown_table_is_rejected() {
        let service = RealtimeServiceImpl::new(RealtimeHub::new(8));
        let status = service
            .subscribe(as_role(
                "U001",
                Role::Citizen,
                SubscribeRequest {
                    table: "invoices".to_string(),
                    user_id: String::new(),
                },
            ))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_user_stats_stream_is_filtered_to_caller() {
        let hub = RealtimeHub::new(8);
        let service = RealtimeServiceImpl::new(hub.clone());
        let mut stream = service
            .subscribe(as_role(
                "U001",
                Role::Citizen,
                SubscribeRequest {
                    table: "user_stats".to_string(),
                    user_id: String::new(),
                },
            ))
            .await
            .unwrap()
            .into_inner();

        hub.publish(ChangeEvent::update(Table::UserStats, &stats_for("U002")));
        hub.publish(ChangeEvent::update(Table::UserStats, &stats_for("U001")));

        let event = stream.next().await.unwrap().unwrap();
        assert_eq!(event.table, "user_stats");
        assert_eq!(event.event_type, "UPDATE");
        assert!(event.new_row.contains("\"U001\""));
        assert!(event.old_row.is_empty());
    }

    #[tokio::test]
    async fn test_citizen_cannot_watch_other_stats() {
        let service = RealtimeServiceImpl::new(RealtimeHub::new(8));
        let status = service
            .subscribe(as_role(
                "U001",
                Role::Citizen,
                SubscribeRequest {
                    table: "user_stats".to_string(),
                    user_id: "U002".to_string(),
                },
            ))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);
    }

    fn subscribe_to(table: &str) -> SubscribeRequest {
        SubscribeRequest {
            table: table.to_string(),
            user_id: String::new(),
        }
    }

    #[tokio::test]
    async fn test_citizen_cannot_watch_other_tables() {
        let service = RealtimeServiceImpl::new(RealtimeHub::new(8));
        for table in ["ngo_inventory", "ngo_materials"] {
            let status = service
                .subscribe(as_role("U001", Role::Citizen, subscribe_to(table)))
                .await
                .unwrap_err();
            assert_eq!(status.code(), tonic::Code::PermissionDenied);
        }
        let status = service
            .subscribe(as_role("NGO-001", Role::Ngo, subscribe_to("pickups")))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);
    }

    #[tokio::test]
    async fn test_users_stream_only_carries_own_profile() {
        let hub = RealtimeHub::new(8);
        let service = RealtimeServiceImpl::new(hub.clone());
        let mut stream = service
            .subscribe(as_role("U001", Role::Citizen, subscribe_to("users")))
            .await
            .unwrap()
            .into_inner();

        hub.publish(ChangeEvent::insert(
            Table::Users,
            &json!({"id": "U009", "email": "secret-admin@demo.com", "role": "admin"}),
        ));
        hub.publish(ChangeEvent::update(Table::Users, &json!({"id": "U001", "name": "Nikhil"})));

        let event = stream.next().await.unwrap().unwrap();
        assert!(event.new_row.contains("\"U001\""));
        assert!(!event.new_row.contains("secret-admin"));
    }

    #[tokio::test]
    async fn test_donations_stream_is_scoped_to_the_ngo() {
        let hub = RealtimeHub::new(8);
        let service = RealtimeServiceImpl::new(hub.clone());
        let mut stream = service
            .subscribe(as_role("NGO-001", Role::Ngo, subscribe_to("donations")))
            .await
            .unwrap()
            .into_inner();

        hub.publish(ChangeEvent::insert(Table::Donations, &json!({"id": "D1", "ngo_id": "NGO-002"})));
        hub.publish(ChangeEvent::insert(Table::Donations, &json!({"id": "D2", "ngo_id": "NGO-001"})));

        let event = stream.next().await.unwrap().unwrap();
        assert!(event.new_row.contains("\"D2\""));
    }

    #[test]
    fn test_collector_sees_requests_and_own_pickups() {
        let collector = AuthenticatedUser {
            user_id: "C001".to_string(),
            role: Role::Collector,
            name: "Jane".to_string(),
        };
        let scope = Scope::for_caller(Table::Pickups, &collector, None).unwrap();

        let open = ChangeEvent::insert(Table::Pickups, &json!({"id": "P1", "status": "Requested"}));
        let mine = ChangeEvent::update(
            Table::Pickups,
            &json!({"id": "P2", "status": "Assigned", "collector_id": "C001"}),
        );
        let theirs = ChangeEvent::update(
            Table::Pickups,
            &json!({"id": "P3", "status": "Assigned", "collector_id": "C002"}),
        );
        assert!(scope.accepts(&open));
        assert!(scope.accepts(&mine));
        assert!(!scope.accepts(&theirs));
    }

    #[test]
    fn test_admin_sees_every_table() {
        let admin = AuthenticatedUser {
            user_id: "A001".to_string(),
            role: Role::Admin,
            name: "Srishant Goutham".to_string(),
        };
        for table in Table::ALL {
            assert_eq!(Scope::for_caller(table, &admin, None).unwrap(), Scope::Everything);
        }
    }
}
