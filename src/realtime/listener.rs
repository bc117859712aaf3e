use serde::Deserialize;
use sqlx::postgres::PgListener;
use sqlx::PgPool;
use tokio::task::JoinHandle;

use super::{ChangeEvent, ChangeKind, RealtimeHub};

/// NOTIFY channel written by the `notify_row_change` trigger.
pub const CHANNEL: &str = "row_changes";

/// Wire form of a notification. Rows too large for a NOTIFY payload arrive
/// with only their key columns and `truncated` set.
#[derive(Debug, Deserialize)]
struct Notification {
    #[serde(flatten)]
    event: ChangeEvent,
    #[serde(default)]
    truncated: bool,
}

impl Notification {
    /// Key of the row to reload, for truncated inserts and updates.
    fn reload_key(&self) -> Option<&str> {
        if !self.truncated || self.event.kind == ChangeKind::Delete {
            return None;
        }
        self.event.row_field(self.event.table.key_column())
    }
}

/// Forwards `row_changes` notifications into the hub until the connection drops.
pub async fn spawn_pg_bridge(pool: &PgPool, hub: RealtimeHub) -> Result<JoinHandle<()>, sqlx::Error> {
    let mut listener = PgListener::connect_with(pool).await?;
    listener.listen(CHANNEL).await?;
    tracing::info!("Listening for row changes on channel '{}'", CHANNEL);

    let pool = pool.clone();
    Ok(tokio::spawn(async move {
        loop {
            let notification = match listener.recv().await {
                Ok(n) => n,
                Err(e) => {
                    tracing::error!("Realtime listener stopped: {}", e);
                    break;
                }
            };

            let notification = match serde_json::from_str::<Notification>(notification.payload()) {
                Ok(n) => n,
                Err(e) => {
                    tracing::warn!("Ignoring malformed row change payload: {}", e);
                    continue;
                }
            };

            let key = notification.reload_key().map(str::to_string);
            let mut event = notification.event;
            if let Some(key) = key {
                match reload_row(&pool, &event, &key).await {
                    Ok(Some(row)) => event.new = Some(row),
                    Ok(None) => {
                        tracing::debug!("{} row {} is gone, skipping truncated event", event.table, key);
                        continue;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to reload {} row {}: {}", event.table, key, e);
                        continue;
                    }
                }
            }

            tracing::debug!("{} on {}", event.kind.as_str(), event.table);
            hub.publish(event);
        }
    }))
}

async fn reload_row(
    pool: &PgPool,
    event: &ChangeEvent,
    key: &str,
) -> Result<Option<serde_json::Value>, sqlx::Error> {
    // Table and column names come from the closed `Table` set.
    let sql = format!(
        "SELECT to_jsonb(t)::text FROM {} t WHERE {} = $1",
        event.table.as_str(),
        event.table.key_column()
    );
    let row: Option<String> = sqlx::query_scalar(&sql).bind(key).fetch_optional(pool).await?;
    row.map(|text| serde_json::from_str(&text))
        .transpose()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::realtime::Table;

    #[test]
    fn test_full_payload_is_not_reloaded() {
        let payload = r#"{
            "table": "pickups",
            "type": "INSERT",
            "new": {"id": "P001", "address": "12 Elm St"},
            "old": null,
            "commit_timestamp": "2024-03-01T10:15:00.123456+00:00"
        }"#;
        let notification: Notification = serde_json::from_str(payload).unwrap();
        assert!(!notification.truncated);
        assert_eq!(notification.reload_key(), None);
        assert_eq!(notification.event.row_field("address"), Some("12 Elm St"));
    }

    #[test]
    fn test_truncated_update_reloads_by_key() {
        let payload = r#"{
            "table": "pickups",
            "type": "UPDATE",
            "new": {"id": "P001", "user_id": "U001", "status": "Picked Up"},
            "old": null,
            "commit_timestamp": "2024-03-01T10:15:00+00:00",
            "truncated": true
        }"#;
        let notification: Notification = serde_json::from_str(payload).unwrap();
        assert_eq!(notification.event.table, Table::Pickups);
        assert_eq!(notification.reload_key(), Some("P001"));
    }

    #[test]
    fn test_truncated_stats_reload_by_user_id() {
        let payload = r#"{
            "table": "user_stats",
            "type": "INSERT",
            "new": {"user_id": "U001"},
            "old": null,
            "commit_timestamp": "2024-03-01T10:15:00+00:00",
            "truncated": true
        }"#;
        let notification: Notification = serde_json::from_str(payload).unwrap();
        assert_eq!(notification.reload_key(), Some("U001"));
    }

    #[test]
    fn test_truncated_delete_keeps_keys() {
        let payload = r#"{
            "table": "donations",
            "type": "DELETE",
            "new": null,
            "old": {"id": "D001", "donor_id": "U001", "ngo_id": "NGO-001"},
            "commit_timestamp": "2024-03-01T10:15:00+00:00",
            "truncated": true
        }"#;
        let notification: Notification = serde_json::from_str(payload).unwrap();
        assert_eq!(notification.reload_key(), None);
        assert_eq!(notification.event.row_field("ngo_id"), Some("NGO-001"));
    }
}
