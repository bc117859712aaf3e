//! Row-change fan-out.
//!
//! Every mutation of a watched table becomes a [`ChangeEvent`]. With Postgres the
//! events come from the `row_changes` NOTIFY channel (see [`listener`]); the
//! in-memory store publishes them itself. Subscribers get one broadcast
//! receiver per table.

pub mod listener;
pub mod live_list;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;

pub use listener::spawn_pg_bridge;
pub use live_list::{Change, Keyed, LiveList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Users,
    UserStats,
    Pickups,
    Donations,
    Ngos,
    NgoInventory,
    NgoMaterials,
    Schedules,
}

impl Table {
    pub const ALL: [Table; 8] = [
        Table::Users,
        Table::UserStats,
        Table::Pickups,
        Table::Donations,
        Table::Ngos,
        Table::NgoInventory,
        Table::NgoMaterials,
        Table::Schedules,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::UserStats => "user_stats",
            Table::Pickups => "pickups",
            Table::Donations => "donations",
            Table::Ngos => "ngos",
            Table::NgoInventory => "ngo_inventory",
            Table::NgoMaterials => "ngo_materials",
            Table::Schedules => "schedules",
        }
    }
}

impl Table {
    /// Primary key column of the table.
    pub fn key_column(self) -> &'static str {
        match self {
            Table::UserStats => "user_id",
            _ => "id",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown table '{0}'")]
pub struct ParseTableError(pub String);

impl FromStr for Table {
    type Err = ParseTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| ParseTableError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

impl ChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Insert => "INSERT",
            ChangeKind::Update => "UPDATE",
            ChangeKind::Delete => "DELETE",
        }
    }
}

/// One committed row change. `new` is set for inserts and updates, `old` for deletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub table: Table,
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    #[serde(default)]
    pub new: Option<Value>,
    #[serde(default)]
    pub old: Option<Value>,
    pub commit_timestamp: DateTime<Utc>,
}

impl ChangeEvent {
    pub fn insert<T: Serialize>(table: Table, row: &T) -> Self {
        Self::build(table, ChangeKind::Insert, Some(row), None)
    }

    pub fn update<T: Serialize>(table: Table, row: &T) -> Self {
        Self::build(table, ChangeKind::Update, Some(row), None)
    }

    pub fn delete<T: Serialize>(table: Table, row: &T) -> Self {
        Self::build(table, ChangeKind::Delete, None, Some(row))
    }

    fn build<T: Serialize>(table: Table, kind: ChangeKind, new: Option<&T>, old: Option<&T>) -> Self {
        // Row models only hold strings, numbers and dates, so serializing cannot fail.
        let to_value = |row: &T| serde_json::to_value(row).ok();
        Self {
            table,
            kind,
            new: new.and_then(to_value),
            old: old.and_then(to_value),
            commit_timestamp: Utc::now(),
        }
    }

    /// The row this event describes: `new` for inserts and updates, `old` for deletes.
    pub fn row(&self) -> Option<&Value> {
        match self.kind {
            ChangeKind::Insert | ChangeKind::Update => self.new.as_ref(),
            ChangeKind::Delete => self.old.as_ref(),
        }
    }

    pub fn row_field(&self, field: &str) -> Option<&str> {
        self.row()?.get(field)?.as_str()
    }
}

/// Broadcast channels keyed by table.
#[derive(Clone)]
pub struct RealtimeHub {
    channels: HashMap<Table, broadcast::Sender<ChangeEvent>>,
}

impl RealtimeHub {
    pub fn new(buffer: usize) -> Self {
        let channels = Table::ALL
            .into_iter()
            .map(|table| (table, broadcast::channel(buffer.max(1)).0))
            .collect();
        Self { channels }
    }

    pub fn subscribe(&self, table: Table) -> broadcast::Receiver<ChangeEvent> {
        self.sender(table).subscribe()
    }

    /// Returns how many subscribers received the event.
    pub fn publish(&self, event: ChangeEvent) -> usize {
        let table = event.table;
        match self.sender(table).send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::trace!("No subscribers for {} change", table);
                0
            }
        }
    }

    fn sender(&self, table: Table) -> &broadcast::Sender<ChangeEvent> {
        // Populated for every `Table` in `new`.
        &self.channels[&table]
    }
}

impl Default for RealtimeHub {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_names() {
        for table in Table::ALL {
            assert_eq!(table.as_str().parse::<Table>().unwrap(), table);
        }
        assert!("password_credentials".parse::<Table>().is_err());
    }

    #[test]
    fn test_parse_notify_payload() {
        let payload = r#"{
            "table": "pickups",
            "type": "UPDATE",
            "new": {"id": "P001", "status": "Assigned"},
            "old": null,
            "commit_timestamp": "2024-03-01T10:15:00.123456+00:00"
        }"#;
        let event: ChangeEvent = serde_json::from_str(payload).unwrap();
        assert_eq!(event.table, Table::Pickups);
        assert_eq!(event.kind, ChangeKind::Update);
        assert_eq!(event.row_field("id"), Some("P001"));
        assert!(event.old.is_none());
    }

    #[test]
    fn test_delete_event_row_is_old() {
        let event = ChangeEvent::delete(Table::Schedules, &json!({"id": "S1"}));
        assert!(event.new.is_none());
        assert_eq!(event.row_field("id"), Some("S1"));
    }

    #[tokio::test]
    async fn test_hub_routes_by_table() {
        let hub = RealtimeHub::new(8);
        let mut pickups = hub.subscribe(Table::Pickups);
        let mut donations = hub.subscribe(Table::Donations);

        assert_eq!(hub.publish(ChangeEvent::insert(Table::Pickups, &json!({"id": "P1"}))), 1);

        let event = pickups.recv().await.unwrap();
        assert_eq!(event.row_field("id"), Some("P1"));
        assert!(donations.try_recv().is_err());
    }

    #[test]
    fn test_publish_without_subscribers() {
        let hub = RealtimeHub::new(8);
        assert_eq!(hub.publish(ChangeEvent::insert(Table::Ngos, &json!({"id": "NGO-001"}))), 0);
    }
}
