use serde::de::DeserializeOwned;

use super::{ChangeEvent, ChangeKind};
use crate::models::{Donation, InventoryItem, Pickup, Schedule};

/// Rows addressable by their primary key.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Pickup {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Donation {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Schedule {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for InventoryItem {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Change<T> {
    Insert(T),
    Update(T),
    Delete(String),
}

impl<T: DeserializeOwned> Change<T> {
    /// Decodes the row carried by a change event.
    pub fn from_event(event: &ChangeEvent) -> Result<Self, serde_json::Error> {
        let missing = |what: &str| {
            <serde_json::Error as serde::de::Error>::custom(format!(
                "{} event on {} has no {}",
                event.kind.as_str(),
                event.table,
                what
            ))
        };

        match event.kind {
            ChangeKind::Insert | ChangeKind::Update => {
                let row = event.new.clone().ok_or_else(|| missing("new row"))?;
                let value = serde_json::from_value(row)?;
                Ok(if event.kind == ChangeKind::Insert {
                    Change::Insert(value)
                } else {
                    Change::Update(value)
                })
            }
            ChangeKind::Delete => event
                .row_field("id")
                .map(|id| Change::Delete(id.to_string()))
                .ok_or_else(|| missing("id")),
        }
    }
}

type InsertFilter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A list kept in sync with a table's change stream.
///
/// Inserts are prepended, updates replace in place and deletes remove by id.
/// Ids are not deduplicated on insert.
pub struct LiveList<T> {
    items: Vec<T>,
    insert_filter: Option<InsertFilter<T>>,
}

impl<T: Keyed> LiveList<T> {
    pub fn new(initial: Vec<T>) -> Self {
        Self {
            items: initial,
            insert_filter: None,
        }
    }

    /// Only inserts accepted by `filter` are added. Updates and deletes are
    /// matched by id regardless.
    pub fn with_insert_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.insert_filter = Some(Box::new(filter));
        self
    }

    /// Returns whether the list changed.
    pub fn apply(&mut self, change: Change<T>) -> bool {
        match change {
            Change::Insert(row) => {
                if let Some(filter) = &self.insert_filter {
                    if !filter(&row) {
                        return false;
                    }
                }
                self.items.insert(0, row);
                true
            }
            Change::Update(row) => match self.items.iter_mut().find(|i| i.key() == row.key()) {
                Some(slot) => {
                    *slot = row;
                    true
                }
                None => false,
            },
            Change::Delete(id) => {
                let before = self.items.len();
                self.items.retain(|i| i.key() != id);
                self.items.len() != before
            }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::PickupStatus;
    use crate::realtime::Table;
    use chrono::Utc;

    fn pickup(id: &str, user_id: &str) -> Pickup {
        let now = Utc::now();
        Pickup {
            id: id.to_string(),
            user_id: user_id.to_string(),
            user_name: "Nikhil".to_string(),
            address: "12 Elm St".to_string(),
            lat: 51.5,
            lng: -0.12,
            waste_type: "Plastic".to_string(),
            quantity: 25.0,
            status: PickupStatus::Requested,
            collector_id: None,
            collector_name: None,
            requested_date: now,
            assigned_date: None,
            picked_up_date: None,
            delivered_date: None,
            photo_proof: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_insert_prepends() {
        let mut list = LiveList::new(vec![pickup("P1", "U1")]);
        assert!(list.apply(Change::Insert(pickup("P2", "U1"))));
        let ids: Vec<&str> = list.items().iter().map(|p| p.key()).collect();
        assert_eq!(ids, vec!["P2", "P1"]);
    }

    #[test]
    fn test_update_is_idempotent_and_keeps_position() {
        let mut list = LiveList::new(vec![pickup("P1", "U1"), pickup("P2", "U1")]);
        let mut changed = pickup("P2", "U1");
        changed.status = PickupStatus::Assigned;
        changed.collector_name = Some("Jane".to_string());

        list.apply(Change::Update(changed.clone()));
        let once = list.items().to_vec();
        list.apply(Change::Update(changed));
        assert_eq!(list.items(), once.as_slice());
        assert_eq!(list.items()[1].status, PickupStatus::Assigned);
    }

    #[test]
    fn test_update_for_unknown_id_is_ignored() {
        let mut list = LiveList::new(vec![pickup("P1", "U1")]);
        assert!(!list.apply(Change::Update(pickup("P9", "U1"))));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_is_kept() {
        let mut list = LiveList::new(vec![pickup("P1", "U1")]);
        list.apply(Change::Insert(pickup("P1", "U1")));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_delete_removes_by_id() {
        let mut list = LiveList::new(vec![pickup("P1", "U1"), pickup("P2", "U1")]);
        assert!(list.apply(Change::Delete("P1".to_string())));
        assert!(!list.apply(Change::Delete("P1".to_string())));
        assert_eq!(list.items()[0].id, "P2");
    }

    #[test]
    fn test_insert_filter_only_applies_to_inserts() {
        let mut list =
            LiveList::new(vec![pickup("P1", "U1")]).with_insert_filter(|p: &Pickup| p.user_id == "U1");
        assert!(!list.apply(Change::Insert(pickup("P2", "U2"))));
        assert!(list.apply(Change::Insert(pickup("P3", "U1"))));
        assert!(list.apply(Change::Delete("P1".to_string())));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_change_from_event() {
        let row = pickup("P1", "U1");
        let insert: Change<Pickup> =
            Change::from_event(&ChangeEvent::insert(Table::Pickups, &row)).unwrap();
        assert_eq!(insert, Change::Insert(row.clone()));

        let delete: Change<Pickup> =
            Change::from_event(&ChangeEvent::delete(Table::Pickups, &row)).unwrap();
        assert_eq!(delete, Change::Delete("P1".to_string()));
    }
}
