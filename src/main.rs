use std::net::SocketAddr;
use std::sync::Arc;

use ecotrack::config::{Config, StoreBackend};
use ecotrack::db::{create_pool, run_migrations, seed, MemoryStore, NgoStore, PgStore, Store};
use ecotrack::middleware::AuthLayer;
use ecotrack::proto::auth::auth_service_server::AuthServiceServer;
use ecotrack::proto::dashboard::dashboard_service_server::DashboardServiceServer;
use ecotrack::proto::donations::donation_service_server::DonationServiceServer;
use ecotrack::proto::health::health_server::HealthServer;
use ecotrack::proto::ngos::ngo_service_server::NgoServiceServer;
use ecotrack::proto::pickups::pickup_service_server::PickupServiceServer;
use ecotrack::proto::realtime::realtime_service_server::RealtimeServiceServer;
use ecotrack::proto::schedules::schedule_service_server::ScheduleServiceServer;
use ecotrack::proto::users::user_service_server::UserServiceServer;
use ecotrack::realtime::{spawn_pg_bridge, RealtimeHub};
use ecotrack::services::{
    AuthServiceImpl, DashboardServiceImpl, DonationServiceImpl, HealthServiceImpl,
    NgoServiceImpl, PickupServiceImpl, RealtimeServiceImpl, ScheduleServiceImpl, SharedStore,
    UserServiceImpl,
};

use tonic::transport::Server;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Include file descriptor for gRPC reflection
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("ecotrack_descriptor");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecotrack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting ecotrack gRPC server...");

    let hub = RealtimeHub::new(config.realtime_buffer);

    match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config.database_url.clone().unwrap_or_default();
            tracing::info!("Connecting to database...");
            let pool = create_pool(&database_url).await?;
            tracing::info!("Database connection established");

            if config.run_migrations {
                run_migrations(&pool).await?;
                tracing::info!("Migrations applied");
            }

            let _bridge = spawn_pg_bridge(&pool, hub.clone()).await?;
            serve(Arc::new(PgStore::new(pool)), hub, &config).await
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store, nothing will be persisted");
            let store = Arc::new(MemoryStore::new(hub.clone()));
            let summary = seed::seed_demo_data(store.as_ref()).await?;
            tracing::info!(
                "Seeded {} NGOs, {} accounts and {} pickups",
                summary.ngos,
                summary.accounts,
                summary.pickups
            );
            serve(store, hub, &config).await
        }
    }
}

async fn serve<S>(store: Arc<S>, hub: RealtimeHub, config: &Config) -> Result<(), Box<dyn std::error::Error>>
where
    S: Store + 'static,
{
    let shared: SharedStore = store.clone();
    let inventory: Arc<dyn NgoStore> = store;

    // Create services
    let auth_service = AuthServiceImpl::new(shared.clone(), config.jwt_secret.clone());
    let user_service = UserServiceImpl::new(shared.clone());
    let pickup_service = PickupServiceImpl::new(shared.clone());
    let donation_service = DonationServiceImpl::new(shared.clone(), inventory);
    let ngo_service = NgoServiceImpl::new(shared.clone());
    let schedule_service = ScheduleServiceImpl::new(shared.clone());
    let realtime_service = RealtimeServiceImpl::new(hub.clone());
    let dashboard_service = DashboardServiceImpl::new(shared, hub);
    let health_service = HealthServiceImpl::new();

    // CORS layer for gRPC-Web
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any)
        .expose_headers(Any);

    // Build reflection service
    let reflection_service = ReflectionBuilder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!("Listening on {}", addr);

    // Build and run server with gRPC-Web support
    Server::builder()
        .accept_http1(true) // Required for gRPC-Web
        .layer(cors)
        .layer(tonic_web::GrpcWebLayer::new())
        .layer(AuthLayer::new(config.jwt_secret.clone()))
        .add_service(reflection_service)
        .add_service(AuthServiceServer::new(auth_service))
        .add_service(UserServiceServer::new(user_service))
        .add_service(PickupServiceServer::new(pickup_service))
        .add_service(DonationServiceServer::new(donation_service))
        .add_service(NgoServiceServer::new(ngo_service))
        .add_service(ScheduleServiceServer::new(schedule_service))
        .add_service(RealtimeServiceServer::new(realtime_service))
        .add_service(DashboardServiceServer::new(dashboard_service))
        .add_service(HealthServer::new(health_service))
        .serve(addr)
        .await?;

    Ok(())
}
