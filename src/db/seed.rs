//! Demo data shared by the `seed-demo` tool and the in-memory backend.
//!
//! Every step checks for existing rows first, so seeding twice is a no-op.

use crate::db::{PickupFilter, Store};
use crate::error::AppResult;
use crate::models::{NewNgo, NewPickup, NewUser, Role};
use crate::session;

pub const DEMO_PASSWORD: &str = "demo123";

struct DemoNgo {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    address: &'static str,
    lat: f64,
    lng: f64,
    description: &'static str,
    accepted_waste_types: &'static [&'static str],
}

const DEMO_NGOS: &[DemoNgo] = &[
    DemoNgo {
        id: "NGO-001",
        name: "Green Earth Foundation",
        email: "contact@greenearth.org",
        address: "123 Eco Street, London, UK",
        lat: 51.5074,
        lng: -0.1278,
        description: "Dedicated to recycling and environmental sustainability",
        accepted_waste_types: &["Plastic", "Metal", "Paper", "Glass"],
    },
    DemoNgo {
        id: "NGO-002",
        name: "Eco Warriors",
        email: "info@ecowarriors.org",
        address: "456 Recycle Ave, London, UK",
        lat: 51.5155,
        lng: -0.0922,
        description: "Fighting pollution through active recycling programs",
        accepted_waste_types: &["Plastic", "E-Waste", "Metal"],
    },
    DemoNgo {
        id: "NGO-003",
        name: "Recycle Now Initiative",
        email: "hello@recyclenow.org",
        address: "789 Green Road, London, UK",
        lat: 51.4975,
        lng: -0.1357,
        description: "Community-driven recycling and waste management",
        accepted_waste_types: &["Paper", "Glass", "Plastic", "Metal", "E-Waste"],
    },
];

struct DemoAccount {
    /// The NGO account shares its id with the NGO it runs.
    id: Option<&'static str>,
    email: &'static str,
    name: &'static str,
    role: Role,
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        id: None,
        email: "nikhil@demo.com",
        name: "Nikhil",
        role: Role::Citizen,
    },
    DemoAccount {
        id: None,
        email: "manideep@demo.com",
        name: "Manideep",
        role: Role::Collector,
    },
    DemoAccount {
        id: Some("NGO-001"),
        email: "badrinath@demo.com",
        name: "Badrinath",
        role: Role::Ngo,
    },
    DemoAccount {
        id: None,
        email: "srishant@demo.com",
        name: "Srishant Goutham",
        role: Role::Admin,
    },
];

/// What a seeding run created.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub ngos: usize,
    pub accounts: usize,
    pub pickups: usize,
}

pub async fn seed_demo_data(store: &dyn Store) -> AppResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    for demo in DEMO_NGOS {
        if store.get_ngo(demo.id).await?.is_some() {
            continue;
        }
        store
            .insert_ngo(NewNgo {
                id: Some(demo.id.to_string()),
                name: demo.name.to_string(),
                email: demo.email.to_string(),
                address: demo.address.to_string(),
                lat: demo.lat,
                lng: demo.lng,
                description: demo.description.to_string(),
                accepted_waste_types: demo.accepted_waste_types.iter().map(|t| t.to_string()).collect(),
            })
            .await?;
        tracing::info!("Seeded NGO {} ({})", demo.id, demo.name);
        summary.ngos += 1;
    }

    let password_hash = session::hash_password(DEMO_PASSWORD)?;
    let mut citizen_id = None;
    for account in DEMO_ACCOUNTS {
        let user = match store.find_credential(account.email).await? {
            Some((user, _)) => user,
            None => {
                let user = store
                    .insert_user(
                        NewUser {
                            id: account.id.map(str::to_string),
                            name: account.name.to_string(),
                            email: account.email.to_string(),
                            role: account.role,
                            address: None,
                        },
                        &password_hash,
                    )
                    .await?;
                tracing::info!("Seeded {} account {}", user.role, user.email);
                summary.accounts += 1;
                user
            }
        };
        if user.role == Role::Citizen {
            citizen_id = Some((user.id, user.name));
        }
    }

    if let Some((user_id, user_name)) = citizen_id {
        let existing = store
            .list_pickups(&PickupFilter::ByUser(user_id.clone()))
            .await?;
        if existing.is_empty() {
            let pickup = store
                .insert_pickup(NewPickup {
                    user_id,
                    user_name,
                    address: "123 Main Street, Downtown".to_string(),
                    lat: 51.5072,
                    lng: -0.1276,
                    waste_type: "Plastic".to_string(),
                    quantity: 5.0,
                })
                .await?;
            tracing::info!("Seeded sample pickup {}", pickup.id);
            summary.pickups += 1;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, NgoStore, UserStore};
    use crate::realtime::RealtimeHub;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = MemoryStore::new(RealtimeHub::new(8));

        let first = seed_demo_data(&store).await.unwrap();
        assert_eq!(
            first,
            SeedSummary {
                ngos: 3,
                accounts: 4,
                pickups: 1
            }
        );

        let second = seed_demo_data(&store).await.unwrap();
        assert_eq!(second, SeedSummary::default());
        assert_eq!(store.list_ngos().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_ngo_account_runs_green_earth() {
        let store = MemoryStore::new(RealtimeHub::new(8));
        seed_demo_data(&store).await.unwrap();

        let (user, hash) = store.find_credential("badrinath@demo.com").await.unwrap().unwrap();
        assert_eq!(user.id, "NGO-001");
        assert!(session::verify_password(DEMO_PASSWORD, &hash).is_ok());
        assert_eq!(store.get_ngo(&user.id).await.unwrap().unwrap().name, "Green Earth Foundation");
    }
}
