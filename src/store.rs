use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DaftarError, Result};

/// A domain record with a stable, human-readable identifier ("INV-001").
/// The identifier is immutable; everything else may change on edit.
pub trait Record: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> &str;
}

/// Where new records land. The dashboard pages show latest-first, so Head
/// is the dominant policy; logs that append chronologically use Tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPolicy {
    Head,
    Tail,
}

/// An ordered collection of records. Insertion order is meaningful and ids
/// are unique within the collection.
#[derive(Debug, Clone)]
pub struct RecordCollection<T: Record> {
    records: Vec<T>,
    policy: InsertPolicy,
}

impl<T: Record> RecordCollection<T> {
    pub fn new(records: Vec<T>, policy: InsertPolicy) -> Self {
        Self { records, policy }
    }

    /// Read-only view of the full ordered sequence.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Insert a record at head or tail per the collection's policy.
    /// Rejects an id already present — identifiers are unique.
    pub fn add(&mut self, record: T) -> Result<()> {
        if self.get(record.id()).is_some() {
            return Err(DaftarError::DuplicateId(record.id().to_string()));
        }
        match self.policy {
            InsertPolicy::Head => self.records.insert(0, record),
            InsertPolicy::Tail => self.records.push(record),
        }
        Ok(())
    }

    /// Replace the record whose id matches `record.id()`. Returns false
    /// (and leaves the collection untouched) when the id is absent.
    pub fn update(&mut self, record: T) -> bool {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Next identifier under `prefix`: the maximum numeric suffix currently
    /// present plus one, zero-padded to `width` digits. Ids that don't parse
    /// are skipped, so a collection with "PUR-004" as the highest suffix
    /// yields "PUR-005" regardless of insertion order.
    pub fn next_id(&self, prefix: &str, width: usize) -> String {
        let max = self
            .records
            .iter()
            .filter_map(|r| r.id().strip_prefix(prefix)?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("{prefix}{:0width$}", max + 1, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
        amount: f64,
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, amount: f64) -> Item {
        Item {
            id: id.to_string(),
            amount,
        }
    }

    #[test]
    fn test_add_head_is_latest_first() {
        let mut col = RecordCollection::new(vec![item("INV-001", 10.0)], InsertPolicy::Head);
        col.add(item("INV-002", 20.0)).unwrap();
        let ids: Vec<&str> = col.all().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["INV-002", "INV-001"]);
    }

    #[test]
    fn test_add_tail_appends() {
        let mut col = RecordCollection::new(vec![item("MOV-001", 10.0)], InsertPolicy::Tail);
        col.add(item("MOV-002", 20.0)).unwrap();
        let ids: Vec<&str> = col.all().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["MOV-001", "MOV-002"]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut col = RecordCollection::new(vec![item("INV-001", 10.0)], InsertPolicy::Head);
        let result = col.add(item("INV-001", 99.0));
        assert!(result.is_err());
        assert_eq!(col.len(), 1);
        assert_eq!(col.all()[0].amount, 10.0);
    }

    #[test]
    fn test_update_replaces_matching_record() {
        let mut col = RecordCollection::new(
            vec![item("INV-001", 10.0), item("INV-002", 20.0)],
            InsertPolicy::Head,
        );
        assert!(col.update(item("INV-002", 25.0)));
        assert_eq!(col.get("INV-002").unwrap().amount, 25.0);
        // Order unchanged
        assert_eq!(col.all()[0].id(), "INV-001");
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut col = RecordCollection::new(vec![item("INV-001", 10.0)], InsertPolicy::Head);
        assert!(!col.update(item("INV-999", 1.0)));
        assert_eq!(col.len(), 1);
    }

    #[test]
    fn test_next_id_uses_max_suffix() {
        let col = RecordCollection::new(
            vec![item("PUR-002", 1.0), item("PUR-004", 1.0), item("PUR-001", 1.0)],
            InsertPolicy::Head,
        );
        assert_eq!(col.next_id("PUR-", 3), "PUR-005");
    }

    #[test]
    fn test_next_id_empty_collection_starts_at_one() {
        let col: RecordCollection<Item> = RecordCollection::new(vec![], InsertPolicy::Head);
        assert_eq!(col.next_id("EXP-", 3), "EXP-001");
    }

    #[test]
    fn test_next_id_ignores_foreign_and_unparseable_ids() {
        let col = RecordCollection::new(
            vec![item("TRX-000009", 1.0), item("INV-003", 1.0), item("TRX-abc", 1.0)],
            InsertPolicy::Head,
        );
        assert_eq!(col.next_id("TRX-", 6), "TRX-000010");
    }
}
