//! Creates the demo accounts, sample NGOs and a sample pickup in Postgres.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecotrack::db::{create_pool, run_migrations, seed, PgStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecotrack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool).await.context("Failed to run migrations")?;

    let store = PgStore::new(pool);
    let summary = seed::seed_demo_data(&store)
        .await
        .context("Failed to seed demo data")?;

    tracing::info!(
        "Demo data ready: {} NGOs, {} accounts and {} pickups created",
        summary.ngos,
        summary.accounts,
        summary.pickups
    );
    println!("Sign in with any demo account using password '{}':", seed::DEMO_PASSWORD);
    for email in ["nikhil@demo.com", "manideep@demo.com", "badrinath@demo.com", "srishant@demo.com"] {
        println!("  {}", email);
    }
    Ok(())
}
