use tonic::{Request, Response, Status};

use crate::middleware::AuthenticatedUser;
use crate::models::{NewSchedule, Role, Schedule, SchedulePatch};
use crate::proto::common::{Empty, IdRequest};
use crate::proto::schedules::schedule_service_server::ScheduleService;
use crate::proto::schedules::{
    CreateScheduleRequest, ListSchedulesResponse, Schedule as ScheduleProto, ScheduleResponse,
    UpdateScheduleRequest,
};
use crate::services::{get_authenticated_user, non_empty, parse_date, timestamp, SharedStore};

pub struct ScheduleServiceImpl {
    store: SharedStore,
}

impl ScheduleServiceImpl {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub(crate) fn model_to_proto(model: &Schedule) -> ScheduleProto {
        ScheduleProto {
            id: model.id.clone(),
            user_id: model.user_id.clone(),
            day_of_week: model.day_of_week.clone(),
            waste_type: model.waste_type.clone(),
            recurring: model.recurring,
            next_pickup: model.next_pickup.to_string(),
            created_at: timestamp(&model.created_at),
        }
    }

    async fn load_own(&self, auth_user: &AuthenticatedUser, id: &str) -> Result<Schedule, Status> {
        if id.is_empty() {
            return Err(Status::invalid_argument("id is required"));
        }
        let schedule = self
            .store
            .get_schedule(id)
            .await?
            .ok_or_else(|| Status::not_found("Schedule not found"))?;
        if schedule.user_id != auth_user.user_id {
            return Err(Status::permission_denied("Cannot change another user's schedule"));
        }
        Ok(schedule)
    }
}

#[tonic::async_trait]
impl ScheduleService for ScheduleServiceImpl {
    async fn list_schedules(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<ListSchedulesResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let schedules = self.store.list_schedules(&auth_user.user_id).await?;
        Ok(Response::new(ListSchedulesResponse {
            schedules: schedules.iter().map(Self::model_to_proto).collect(),
        }))
    }

    async fn create_schedule(
        &self,
        request: Request<CreateScheduleRequest>,
    ) -> Result<Response<ScheduleResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        auth_user.require(&[Role::Citizen])?;
        let req = request.into_inner();

        let day_of_week = non_empty(&req.day_of_week)
            .ok_or_else(|| Status::invalid_argument("day_of_week is required"))?;
        let waste_type = non_empty(&req.waste_type)
            .ok_or_else(|| Status::invalid_argument("waste_type is required"))?;
        let next_pickup = parse_date("next_pickup", &req.next_pickup)?
            .ok_or_else(|| Status::invalid_argument("next_pickup is required"))?;

        let schedule = self
            .store
            .insert_schedule(NewSchedule {
                user_id: auth_user.user_id.clone(),
                day_of_week: day_of_week.to_string(),
                waste_type: waste_type.to_string(),
                recurring: req.recurring,
                next_pickup,
            })
            .await?;

        tracing::info!("User {} created schedule {}", auth_user.user_id, schedule.id);
        Ok(Response::new(ScheduleResponse {
            schedule: Some(Self::model_to_proto(&schedule)),
        }))
    }

    async fn update_schedule(
        &self,
        request: Request<UpdateScheduleRequest>,
    ) -> Result<Response<ScheduleResponse>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let req = request.into_inner();
        let current = self.load_own(&auth_user, &req.id).await?;

        // Empty strings keep the stored value; `recurring` is always taken as sent.
        let patch = SchedulePatch {
            day_of_week: non_empty(&req.day_of_week)
                .map(str::to_string)
                .unwrap_or(current.day_of_week),
            waste_type: non_empty(&req.waste_type)
                .map(str::to_string)
                .unwrap_or(current.waste_type),
            recurring: req.recurring,
            next_pickup: parse_date("next_pickup", &req.next_pickup)?.unwrap_or(current.next_pickup),
        };

        let schedule = self
            .store
            .update_schedule(&current.id, patch)
            .await?
            .ok_or_else(|| Status::not_found("Schedule not found"))?;

        tracing::info!("User {} updated schedule {}", auth_user.user_id, schedule.id);
        Ok(Response::new(ScheduleResponse {
            schedule: Some(Self::model_to_proto(&schedule)),
        }))
    }

    async fn delete_schedule(&self, request: Request<IdRequest>) -> Result<Response<Empty>, Status> {
        let auth_user = get_authenticated_user(&request)?;
        let schedule = self.load_own(&auth_user, &request.into_inner().id).await?;

        if !self.store.delete_schedule(&schedule.id).await? {
            return Err(Status::not_found("Schedule not found"));
        }

        tracing::info!("User {} deleted schedule {}", auth_user.user_id, schedule.id);
        Ok(Response::new(Empty {}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::db::MemoryStore;
    use crate::realtime::RealtimeHub;

    fn as_citizen<T>(user_id: &str, message: T) -> Request<T> {
        let mut request = Request::new(message);
        request.extensions_mut().insert(AuthenticatedUser {
            user_id: user_id.to_string(),
            role: Role::Citizen,
            name: "Nikhil".to_string(),
        });
        request
    }

    fn create_request() -> CreateScheduleRequest {
        CreateScheduleRequest {
            day_of_week: "Tuesday".to_string(),
            waste_type: "Paper".to_string(),
            recurring: true,
            next_pickup: "2024-06-04".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_requires_next_pickup() {
        let service = ScheduleServiceImpl::new(Arc::new(MemoryStore::new(RealtimeHub::new(8))));
        let status = service
            .create_schedule(as_citizen(
                "U001",
                CreateScheduleRequest {
                    next_pickup: String::new(),
                    ..create_request()
                },
            ))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_update_and_delete_are_owner_only() {
        let service = ScheduleServiceImpl::new(Arc::new(MemoryStore::new(RealtimeHub::new(8))));
        let created = service
            .create_schedule(as_citizen("U001", create_request()))
            .await
            .unwrap()
            .into_inner()
            .schedule
            .unwrap();
        assert_eq!(created.day_of_week, "Tuesday");

        let status = service
            .delete_schedule(as_citizen("U002", IdRequest { id: created.id.clone() }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);

        let updated = service
            .update_schedule(as_citizen(
                "U001",
                UpdateScheduleRequest {
                    id: created.id.clone(),
                    day_of_week: String::new(),
                    waste_type: "Glass".to_string(),
                    recurring: false,
                    next_pickup: String::new(),
                },
            ))
            .await
            .unwrap()
            .into_inner()
            .schedule
            .unwrap();
        assert_eq!(updated.day_of_week, "Tuesday");
        assert_eq!(updated.waste_type, "Glass");
        assert!(!updated.recurring);
        assert_eq!(updated.next_pickup, "2024-06-04");

        service
            .delete_schedule(as_citizen("U001", IdRequest { id: created.id }))
            .await
            .unwrap();
        let remaining = service
            .list_schedules(as_citizen("U001", Empty {}))
            .await
            .unwrap()
            .into_inner()
            .schedules;
        assert!(remaining.is_empty());
    }
}
