use tonic::{Request, Response, Status};

use crate::proto::health::{
    health_check_response::ServingStatus, health_server::Health, HealthCheckRequest,
    HealthCheckResponse,
};

/// Services reported individually by `Check`; empty means the whole server.
const KNOWN_SERVICES: &[&str] = &[
    "ecotrack.auth.AuthService",
    "ecotrack.users.UserService",
    "ecotrack.pickups.PickupService",
    "ecotrack.donations.DonationService",
    "ecotrack.ngos.NgoService",
    "ecotrack.schedules.ScheduleService",
    "ecotrack.realtime.RealtimeService",
    "ecotrack.dashboard.DashboardService",
];

#[derive(Debug, Default)]
pub struct HealthServiceImpl;

impl HealthServiceImpl {
    pub fn new() -> Self {
        Self
    }

    fn status_for(service: &str) -> ServingStatus {
        if service.is_empty() || KNOWN_SERVICES.contains(&service) {
            ServingStatus::Serving
        } else {
            ServingStatus::ServiceUnknown
        }
    }
}

#[tonic::async_trait]
impl Health for HealthServiceImpl {
    async fn check(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        let service = request.into_inner().service;
        match Self::status_for(&service) {
            ServingStatus::ServiceUnknown => {
                Err(Status::not_found(format!("unknown service '{}'", service)))
            }
            status => Ok(Response::new(HealthCheckResponse {
                status: status.into(),
            })),
        }
    }

    type WatchStream = tokio_stream::wrappers::ReceiverStream<Result<HealthCheckResponse, Status>>;

    async fn watch(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        let status = Self::status_for(&request.into_inner().service);
        let (tx, rx) = tokio::sync::mpsc::channel(1);

        tokio::spawn(async move {
            let _ = tx
                .send(Ok(HealthCheckResponse {
                    status: status.into(),
                }))
                .await;
        });

        Ok(Response::new(tokio_stream::wrappers::ReceiverStream::new(rx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_known_and_unknown_services() {
        let health = HealthServiceImpl::new();

        let response = health
            .check(Request::new(HealthCheckRequest {
                service: "ecotrack.pickups.PickupService".to_string(),
            }))
            .await
            .unwrap();
        assert_eq!(response.into_inner().status, ServingStatus::Serving as i32);

        let status = health
            .check(Request::new(HealthCheckRequest {
                service: "ecotrack.billing.InvoiceService".to_string(),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::NotFound);
    }
}
