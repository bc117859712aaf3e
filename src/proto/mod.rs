// Generated proto modules are written here by build.rs
// Run `cargo build` to generate the proto code

pub mod common {
    include!("ecotrack.common.rs");
}

pub mod auth {
    include!("ecotrack.auth.rs");
}

pub mod users {
    include!("ecotrack.users.rs");
}

pub mod pickups {
    include!("ecotrack.pickups.rs");
}

pub mod donations {
    include!("ecotrack.donations.rs");
}

pub mod ngos {
    include!("ecotrack.ngos.rs");
}

pub mod schedules {
    include!("ecotrack.schedules.rs");
}

pub mod realtime {
    include!("ecotrack.realtime.rs");
}

pub mod dashboard {
    include!("ecotrack.dashboard.rs");
}

pub mod health {
    include!("grpc.health.v1.rs");
}
