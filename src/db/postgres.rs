use sqlx::{FromRow, PgPool};

use crate::db::store::{
    AnalyticsStore, DonationFilter, DonationStore, NgoStore, PickupFilter, PickupStore,
    ScheduleStore, UserStore,
};
use crate::error::{AppError, AppResult};
use crate::lifecycle::{DonationStatus, PickupStatus, Transition};
use crate::models::stats::CO2_PER_KG;
use crate::models::{
    Donation, InventoryItem, Material, NewDonation, NewInventoryItem, NewMaterial, NewNgo,
    MonthlyPickups, NewPickup, NewSchedule, NewUser, Ngo, Pickup, PickupDetails, ProfilePatch,
    Role, Schedule, SchedulePatch, SystemStats, User, UserStats, WasteTypeTotal,
};

const PICKUP_COLUMNS: &str = "id, user_id, user_name, address, lat, lng, waste_type, quantity, \
     status, collector_id, collector_name, requested_date, assigned_date, picked_up_date, \
     delivered_date, photo_proof, created_at, updated_at";

const DONATION_COLUMNS: &str = "id, donor_id, donor_name, ngo_id, item, quantity, address, lat, \
     lng, status, date, pickup_date, created_at, updated_at";

const USER_COLUMNS: &str = "id, name, email, role, address, lat, lng, created_at, updated_at";

const NGO_COLUMNS: &str =
    "id, name, email, address, lat, lng, description, accepted_waste_types, created_at";

const INVENTORY_COLUMNS: &str = "id, ngo_id, item, quantity, unit, date, created_at";

const MATERIAL_COLUMNS: &str = "id, ngo_id, material_type, weight, source, notes, created_at";

const SCHEDULE_COLUMNS: &str =
    "id, user_id, day_of_week, waste_type, recurring, next_pickup, created_at, updated_at";

#[derive(FromRow)]
struct CredentialRow {
    #[sqlx(flatten)]
    user: User,
    password_hash: String,
}

/// PostgreSQL-backed store. Row changes reach the realtime hub through the
/// `row_changes` triggers, not through this type.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Explains why a compare-and-set update matched no row.
    async fn status_miss(&self, table: &'static str, id: &str, expected: &str) -> AppError {
        let sql = format!("SELECT status FROM {} WHERE id = $1", table);
        match sqlx::query_scalar::<_, String>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
        {
            Ok(Some(current)) => AppError::Conflict(format!(
                "{} {} is '{}', expected '{}'",
                table, id, current, expected
            )),
            Ok(None) => AppError::NotFound(format!("{} {} not found", table, id)),
            Err(e) => AppError::Database(e),
        }
    }
}

fn unique_violation(err: sqlx::Error, message: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict(message.to_string())
        }
        _ => AppError::Database(err),
    }
}

#[tonic::async_trait]
impl PickupStore for PgStore {
    async fn list_pickups(&self, filter: &PickupFilter) -> AppResult<Vec<Pickup>> {
        let (clause, arg) = match filter {
            PickupFilter::All => ("", None),
            PickupFilter::ByUser(id) => ("WHERE user_id = $1", Some(id)),
            PickupFilter::ByCollector(id) => ("WHERE collector_id = $1", Some(id)),
            PickupFilter::VisibleToCollector(id) => {
                ("WHERE status = 'Requested' OR collector_id = $1", Some(id))
            }
        };
        let sql = format!(
            "SELECT {} FROM pickups {} ORDER BY created_at DESC",
            PICKUP_COLUMNS, clause
        );

        let mut query = sqlx::query_as::<_, Pickup>(&sql);
        if let Some(v) = arg {
            query = query.bind(v);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn get_pickup(&self, id: &str) -> AppResult<Option<Pickup>> {
        let sql = format!("SELECT {} FROM pickups WHERE id = $1", PICKUP_COLUMNS);
        Ok(sqlx::query_as::<_, Pickup>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_pickup(&self, new: NewPickup) -> AppResult<Pickup> {
        let sql = format!(
            "INSERT INTO pickups (user_id, user_name, address, lat, lng, waste_type, quantity, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {}",
            PICKUP_COLUMNS
        );
        Ok(sqlx::query_as::<_, Pickup>(&sql)
            .bind(&new.user_id)
            .bind(&new.user_name)
            .bind(&new.address)
            .bind(new.lat)
            .bind(new.lng)
            .bind(&new.waste_type)
            .bind(new.quantity)
            .bind(PickupStatus::Requested.as_str())
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update_pickup_details(&self, id: &str, details: PickupDetails) -> AppResult<Option<Pickup>> {
        let sql = format!(
            "UPDATE pickups SET address = $1, lat = $2, lng = $3, waste_type = $4, quantity = $5, \
             updated_at = now() WHERE id = $6 RETURNING {}",
            PICKUP_COLUMNS
        );
        Ok(sqlx::query_as::<_, Pickup>(&sql)
            .bind(&details.address)
            .bind(details.lat)
            .bind(details.lng)
            .bind(&details.waste_type)
            .bind(details.quantity)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn apply_transition(&self, transition: &Transition) -> AppResult<Pickup> {
        let mut tx = self.pool.begin().await?;

        let (collector_id, collector_name) = match transition.assignment() {
            Some(a) => (Some(a.collector_id.as_str()), Some(a.collector_name.as_str())),
            None => (None, None),
        };

        let sql = format!(
            "UPDATE pickups SET status = $1, \
             collector_id = COALESCE($2, collector_id), \
             collector_name = COALESCE($3, collector_name), \
             assigned_date = CASE WHEN $1 = 'Assigned' THEN COALESCE(assigned_date, $4) ELSE assigned_date END, \
             picked_up_date = CASE WHEN $1 = 'Picked Up' THEN COALESCE(picked_up_date, $4) ELSE picked_up_date END, \
             delivered_date = CASE WHEN $1 = 'Delivered' THEN COALESCE(delivered_date, $4) ELSE delivered_date END, \
             updated_at = $4 \
             WHERE id = $5 AND status = $6 RETURNING {}",
            PICKUP_COLUMNS
        );
        let updated: Option<Pickup> = sqlx::query_as(&sql)
            .bind(transition.to().as_str())
            .bind(collector_id)
            .bind(collector_name)
            .bind(transition.at())
            .bind(transition.pickup_id())
            .bind(transition.from().as_str())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(pickup) = updated else {
            tx.rollback().await?;
            return Err(self
                .status_miss("pickups", transition.pickup_id(), transition.from().as_str())
                .await);
        };

        if let Some(credit) = transition.credit() {
            sqlx::query(
                "INSERT INTO user_stats (user_id, total_pickups, waste_collected, co2_saved, green_points) \
                 VALUES ($1, $2, $3, $4, $5) \
                 ON CONFLICT (user_id) DO UPDATE SET \
                 total_pickups = user_stats.total_pickups + EXCLUDED.total_pickups, \
                 waste_collected = user_stats.waste_collected + EXCLUDED.waste_collected, \
                 co2_saved = user_stats.co2_saved + EXCLUDED.co2_saved, \
                 green_points = user_stats.green_points + EXCLUDED.green_points, \
                 updated_at = now()",
            )
            .bind(&credit.user_id)
            .bind(credit.pickups)
            .bind(credit.waste)
            .bind(credit.co2)
            .bind(credit.points)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(pickup)
    }

    async fn set_photo_proof(&self, id: &str, photo_proof: &str) -> AppResult<Option<Pickup>> {
        let sql = format!(
            "UPDATE pickups SET photo_proof = $1, updated_at = now() WHERE id = $2 RETURNING {}",
            PICKUP_COLUMNS
        );
        Ok(sqlx::query_as::<_, Pickup>(&sql)
            .bind(photo_proof)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete_pickup(&self, id: &str) -> AppResult<bool> {
        let rows_affected = sqlx::query("DELETE FROM pickups WHERE id = $1 AND status = $2")
            .bind(id)
            .bind(PickupStatus::Requested.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }
}

#[tonic::async_trait]
impl DonationStore for PgStore {
    async fn list_donations(&self, filter: &DonationFilter) -> AppResult<Vec<Donation>> {
        let (clause, arg) = match filter {
            DonationFilter::All => ("", None),
            DonationFilter::ByNgo(id) => ("WHERE ngo_id = $1", Some(id)),
            DonationFilter::ByDonor(id) => ("WHERE donor_id = $1", Some(id)),
        };
        let sql = format!(
            "SELECT {} FROM donations {} ORDER BY created_at DESC",
            DONATION_COLUMNS, clause
        );

        let mut query = sqlx::query_as::<_, Donation>(&sql);
        if let Some(v) = arg {
            query = query.bind(v);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn get_donation(&self, id: &str) -> AppResult<Option<Donation>> {
        let sql = format!("SELECT {} FROM donations WHERE id = $1", DONATION_COLUMNS);
        Ok(sqlx::query_as::<_, Donation>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_donation(&self, new: NewDonation) -> AppResult<Donation> {
        let sql = format!(
            "INSERT INTO donations (donor_id, donor_name, ngo_id, item, quantity, address, lat, lng, status, pickup_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING {}",
            DONATION_COLUMNS
        );
        Ok(sqlx::query_as::<_, Donation>(&sql)
            .bind(&new.donor_id)
            .bind(&new.donor_name)
            .bind(&new.ngo_id)
            .bind(&new.item)
            .bind(new.quantity)
            .bind(&new.address)
            .bind(new.lat)
            .bind(new.lng)
            .bind(DonationStatus::Pending.as_str())
            .bind(new.pickup_date)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn set_donation_status(
        &self,
        id: &str,
        from: DonationStatus,
        to: DonationStatus,
    ) -> AppResult<Donation> {
        from.check_transition(to)?;

        let sql = format!(
            "UPDATE donations SET status = $1, updated_at = now() \
             WHERE id = $2 AND status = $3 RETURNING {}",
            DONATION_COLUMNS
        );
        let updated: Option<Donation> = sqlx::query_as(&sql)
            .bind(to.as_str())
            .bind(id)
            .bind(from.as_str())
            .fetch_optional(&self.pool)
            .await?;

        match updated {
            Some(donation) => Ok(donation),
            None => Err(self.status_miss("donations", id, from.as_str()).await),
        }
    }

    async fn delete_donation(&self, id: &str) -> AppResult<bool> {
        let rows_affected = sqlx::query("DELETE FROM donations WHERE id = $1 AND status = $2")
            .bind(id)
            .bind(DonationStatus::Pending.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }
}

#[tonic::async_trait]
impl UserStore for PgStore {
    async fn list_users(&self, role: Option<Role>) -> AppResult<Vec<User>> {
        let users = match role {
            Some(role) => {
                let sql = format!("SELECT {} FROM users WHERE role = $1 ORDER BY name", USER_COLUMNS);
                sqlx::query_as::<_, User>(&sql)
                    .bind(role.as_str())
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!("SELECT {} FROM users ORDER BY name", USER_COLUMNS);
                sqlx::query_as::<_, User>(&sql).fetch_all(&self.pool).await?
            }
        };
        Ok(users)
    }

    async fn get_user(&self, id: &str) -> AppResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_credential(&self, email: &str) -> AppResult<Option<(User, String)>> {
        let row: Option<CredentialRow> = sqlx::query_as(
            "SELECT u.id, u.name, u.email, u.role, u.address, u.lat, u.lng, u.created_at, u.updated_at, \
             pc.password_hash \
             FROM users u JOIN password_credentials pc ON pc.user_id = u.id \
             WHERE lower(u.email) = lower($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| (r.user, r.password_hash)))
    }

    async fn insert_user(&self, new: NewUser, password_hash: &str) -> AppResult<User> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "INSERT INTO users (id, name, email, role, address) \
             VALUES (COALESCE($1, gen_random_uuid()::text), $2, $3, $4, $5) RETURNING {}",
            USER_COLUMNS
        );
        let user: User = sqlx::query_as(&sql)
            .bind(new.id.as_deref())
            .bind(&new.name)
            .bind(&new.email)
            .bind(new.role.as_str())
            .bind(new.address.as_deref())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| unique_violation(e, "Email already registered"))?;

        sqlx::query("INSERT INTO password_credentials (user_id, password_hash) VALUES ($1, $2)")
            .bind(&user.id)
            .bind(password_hash)
            .execute(&mut *tx)
            .await?;

        match user.role {
            Role::Citizen => {
                sqlx::query("INSERT INTO user_stats (user_id) VALUES ($1) ON CONFLICT DO NOTHING")
                    .bind(&user.id)
                    .execute(&mut *tx)
                    .await?;
            }
            Role::Ngo => {
                sqlx::query(
                    "INSERT INTO ngos (id, name, email, address) VALUES ($1, $2, $3, $4) \
                     ON CONFLICT (id) DO NOTHING",
                )
                .bind(&user.id)
                .bind(&user.name)
                .bind(&user.email)
                .bind(user.address.as_deref().unwrap_or_default())
                .execute(&mut *tx)
                .await?;
            }
            Role::Collector | Role::Admin => {}
        }

        tx.commit().await?;
        Ok(user)
    }

    async fn update_user_profile(&self, id: &str, patch: ProfilePatch) -> AppResult<Option<User>> {
        let sql = format!(
            "UPDATE users SET name = COALESCE($1, name), address = COALESCE($2, address), \
             lat = COALESCE($3, lat), lng = COALESCE($4, lng), updated_at = now() \
             WHERE id = $5 RETURNING {}",
            USER_COLUMNS
        );
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(patch.name.as_deref())
            .bind(patch.address.as_deref())
            .bind(patch.lat)
            .bind(patch.lng)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete_user(&self, id: &str) -> AppResult<bool> {
        let rows_affected = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }

    async fn get_user_stats(&self, user_id: &str) -> AppResult<Option<UserStats>> {
        Ok(sqlx::query_as::<_, UserStats>(
            "SELECT user_id, total_pickups, waste_collected, co2_saved, green_points \
             FROM user_stats WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }
}

#[tonic::async_trait]
impl NgoStore for PgStore {
    async fn list_ngos(&self) -> AppResult<Vec<Ngo>> {
        let sql = format!("SELECT {} FROM ngos ORDER BY name", NGO_COLUMNS);
        Ok(sqlx::query_as::<_, Ngo>(&sql).fetch_all(&self.pool).await?)
    }

    async fn get_ngo(&self, id: &str) -> AppResult<Option<Ngo>> {
        let sql = format!("SELECT {} FROM ngos WHERE id = $1", NGO_COLUMNS);
        Ok(sqlx::query_as::<_, Ngo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_ngo(&self, new: NewNgo) -> AppResult<Ngo> {
        let sql = format!(
            "INSERT INTO ngos (id, name, email, address, lat, lng, description, accepted_waste_types) \
             VALUES (COALESCE($1, gen_random_uuid()::text), $2, $3, $4, $5, $6, $7, $8) RETURNING {}",
            NGO_COLUMNS
        );
        sqlx::query_as::<_, Ngo>(&sql)
            .bind(new.id.as_deref())
            .bind(&new.name)
            .bind(&new.email)
            .bind(&new.address)
            .bind(new.lat)
            .bind(new.lng)
            .bind(&new.description)
            .bind(&new.accepted_waste_types)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| unique_violation(e, "NGO id already exists"))
    }

    async fn list_inventory(&self, ngo_id: &str) -> AppResult<Vec<InventoryItem>> {
        let sql = format!(
            "SELECT {} FROM ngo_inventory WHERE ngo_id = $1 ORDER BY created_at DESC",
            INVENTORY_COLUMNS
        );
        Ok(sqlx::query_as::<_, InventoryItem>(&sql)
            .bind(ngo_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn insert_inventory_item(&self, new: NewInventoryItem) -> AppResult<InventoryItem> {
        let sql = format!(
            "INSERT INTO ngo_inventory (ngo_id, item, quantity, unit, date) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            INVENTORY_COLUMNS
        );
        Ok(sqlx::query_as::<_, InventoryItem>(&sql)
            .bind(&new.ngo_id)
            .bind(&new.item)
            .bind(new.quantity)
            .bind(&new.unit)
            .bind(new.date)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn list_materials(&self, ngo_id: &str) -> AppResult<Vec<Material>> {
        let sql = format!(
            "SELECT {} FROM ngo_materials WHERE ngo_id = $1 ORDER BY created_at DESC",
            MATERIAL_COLUMNS
        );
        Ok(sqlx::query_as::<_, Material>(&sql)
            .bind(ngo_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn insert_material(&self, new: NewMaterial) -> AppResult<Material> {
        let sql = format!(
            "INSERT INTO ngo_materials (ngo_id, material_type, weight, source, notes) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            MATERIAL_COLUMNS
        );
        Ok(sqlx::query_as::<_, Material>(&sql)
            .bind(&new.ngo_id)
            .bind(&new.material_type)
            .bind(new.weight)
            .bind(&new.source)
            .bind(new.notes.as_deref())
            .fetch_one(&self.pool)
            .await?)
    }
}

#[tonic::async_trait]
impl ScheduleStore for PgStore {
    async fn list_schedules(&self, user_id: &str) -> AppResult<Vec<Schedule>> {
        let sql = format!(
            "SELECT {} FROM schedules WHERE user_id = $1 ORDER BY next_pickup ASC",
            SCHEDULE_COLUMNS
        );
        Ok(sqlx::query_as::<_, Schedule>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn get_schedule(&self, id: &str) -> AppResult<Option<Schedule>> {
        let sql = format!("SELECT {} FROM schedules WHERE id = $1", SCHEDULE_COLUMNS);
        Ok(sqlx::query_as::<_, Schedule>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_schedule(&self, new: NewSchedule) -> AppResult<Schedule> {
        let sql = format!(
            "INSERT INTO schedules (user_id, day_of_week, waste_type, recurring, next_pickup) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            SCHEDULE_COLUMNS
        );
        Ok(sqlx::query_as::<_, Schedule>(&sql)
            .bind(&new.user_id)
            .bind(&new.day_of_week)
            .bind(&new.waste_type)
            .bind(new.recurring)
            .bind(new.next_pickup)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update_schedule(&self, id: &str, patch: SchedulePatch) -> AppResult<Option<Schedule>> {
        let sql = format!(
            "UPDATE schedules SET day_of_week = $1, waste_type = $2, recurring = $3, next_pickup = $4, \
             updated_at = now() WHERE id = $5 RETURNING {}",
            SCHEDULE_COLUMNS
        );
        Ok(sqlx::query_as::<_, Schedule>(&sql)
            .bind(&patch.day_of_week)
            .bind(&patch.waste_type)
            .bind(patch.recurring)
            .bind(patch.next_pickup)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete_schedule(&self, id: &str) -> AppResult<bool> {
        let rows_affected = sqlx::query("DELETE FROM schedules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }
}

#[tonic::async_trait]
impl AnalyticsStore for PgStore {
    async fn system_stats(&self) -> AppResult<SystemStats> {
        let mut stats = sqlx::query_as::<_, SystemStats>(
            "SELECT \
             (SELECT COUNT(*) FROM pickups) AS total_pickups, \
             (SELECT COUNT(*) FROM pickups WHERE status <> 'Delivered') AS active_pickups, \
             (SELECT COUNT(*) FROM pickups WHERE status IN ('Picked Up', 'Delivered')) AS completed_pickups, \
             (SELECT COALESCE(SUM(quantity), 0) FROM pickups) AS total_waste_collected, \
             (SELECT COALESCE(SUM(quantity), 0) * $1::float8 FROM pickups) AS total_co2_saved, \
             (SELECT COUNT(*) FROM donations) AS total_donations, \
             (SELECT COUNT(*) FROM donations WHERE status = 'Pending') AS pending_donations, \
             (SELECT COUNT(*) FROM users) AS total_users, \
             (SELECT COUNT(*) FROM users WHERE role = 'collector') AS total_collectors, \
             (SELECT COUNT(*) FROM ngos) AS total_ngos",
        )
        .bind(CO2_PER_KG)
        .fetch_one(&self.pool)
        .await?;

        stats.waste_by_type = sqlx::query_as::<_, WasteTypeTotal>(
            "SELECT waste_type, COALESCE(SUM(quantity), 0) AS quantity \
             FROM pickups GROUP BY waste_type ORDER BY waste_type",
        )
        .fetch_all(&self.pool)
        .await?;

        stats.pickups_by_month = sqlx::query_as::<_, MonthlyPickups>(
            "SELECT to_char(date_trunc('month', created_at AT TIME ZONE 'UTC'), 'YYYY-MM') AS month, \
             COUNT(*) AS pickups \
             FROM pickups GROUP BY 1 ORDER BY 1",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(stats)
    }
}
