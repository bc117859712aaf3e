pub mod memory;
pub mod pool;
pub mod postgres;
pub mod seed;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations};
pub use postgres::PgStore;
pub use store::{
    AnalyticsStore, DonationFilter, DonationStore, NgoStore, PickupFilter, PickupStore,
    ScheduleStore, Store, UserStore,
};
