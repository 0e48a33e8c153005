//! Roster accumulation keyed by person id.

use std::collections::HashMap;

use roster_model::{EmptyIdPolicy, PersonRecord, RowRecord};
use serde::{Serialize, Serializer};

/// Result of folding one row into the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// First row for this id; a new record was appended.
    Inserted,
    /// An existing record absorbed the row.
    Merged,
}

/// Ordered set of person records, one per id.
///
/// Records keep the order in which their id was first seen.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<PersonRecord>,
    by_id: HashMap<String, usize>,
    empty_id_policy: EmptyIdPolicy,
}

impl Roster {
    pub fn new(empty_id_policy: EmptyIdPolicy) -> Self {
        Self {
            records: Vec::new(),
            by_id: HashMap::new(),
            empty_id_policy,
        }
    }

    /// Fold a row record into the roster.
    pub fn merge(&mut self, row: RowRecord) -> MergeOutcome {
        if row.id.is_empty() && self.empty_id_policy == EmptyIdPolicy::Separate {
            self.records.push(PersonRecord::from(row));
            return MergeOutcome::Inserted;
        }
        if let Some(&idx) = self.by_id.get(&row.id) {
            self.records[idx].absorb(row);
            return MergeOutcome::Merged;
        }
        self.by_id.insert(row.id.clone(), self.records.len());
        self.records.push(PersonRecord::from(row));
        MergeOutcome::Inserted
    }

    /// Look up a record by id. Id-less records kept apart are not indexed.
    pub fn get(&self, id: &str) -> Option<&PersonRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<PersonRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::{Address, AddressKind};

    fn row(id: &str, name: &str) -> RowRecord {
        RowRecord {
            name: name.to_string(),
            id: id.to_string(),
            ..RowRecord::default()
        }
    }

    fn with_phone(mut record: RowRecord, tag: &str, number: &str) -> RowRecord {
        record.addresses.upsert(Address::new(
            AddressKind::Phone,
            vec![tag.to_string()],
            number,
        ));
        record
    }

    #[test]
    fn test_last_name_wins() {
        let mut roster = Roster::default();
        assert_eq!(roster.merge(row("1", "Ana")), MergeOutcome::Inserted);
        assert_eq!(roster.merge(row("1", "Ana Souza")), MergeOutcome::Merged);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("1").map(|p| p.fullname.as_str()), Some("Ana Souza"));
    }

    #[test]
    fn test_flags_are_sticky() {
        let mut roster = Roster::default();
        let mut first = row("1", "Ana");
        first.see_all = true;
        let mut second = row("1", "Ana");
        second.invisible = true;
        roster.merge(first);
        roster.merge(second);
        roster.merge(row("1", "Ana"));
        let person = roster.get("1").expect("record");
        assert!(person.invisible);
        assert!(person.see_all);
    }

    #[test]
    fn test_classes_append_without_dedup() {
        let mut roster = Roster::default();
        let mut first = row("1", "Ana");
        first.classes = vec!["Math".into(), "Art".into()];
        let mut second = row("1", "Ana");
        second.classes = vec!["Math".into()];
        roster.merge(first);
        roster.merge(second);
        assert_eq!(roster.records()[0].classes, vec!["Math", "Art", "Math"]);
    }

    #[test]
    fn test_addresses_merge_across_rows() {
        let mut roster = Roster::default();
        roster.merge(with_phone(row("1", "Ana"), "Work", "5511912345678"));
        roster.merge(with_phone(row("1", "Ana"), "Home", "5511912345678"));
        roster.merge(with_phone(row("1", "Ana"), "Home", "5511988887777"));
        let addresses = roster.records()[0].addresses.as_slice();
        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0].tags, vec!["Work", "Home"]);
        assert_eq!(addresses[1].address, "5511988887777");
    }

    #[test]
    fn test_merging_same_row_twice_duplicates_tags_only() {
        let source = with_phone(row("1", "Ana"), "Work", "5511912345678");
        let mut once = Roster::default();
        once.merge(source.clone());
        let mut twice = Roster::default();
        twice.merge(source.clone());
        twice.merge(source);

        let once_addresses: Vec<&str> = once.records()[0]
            .addresses
            .iter()
            .map(|a| a.address.as_str())
            .collect();
        let twice_addresses: Vec<&str> = twice.records()[0]
            .addresses
            .iter()
            .map(|a| a.address.as_str())
            .collect();
        assert_eq!(once_addresses, twice_addresses);
        assert_eq!(twice.records()[0].addresses.as_slice()[0].tags, vec!["Work", "Work"]);
    }

    #[test]
    fn test_insertion_order_is_first_seen() {
        let mut roster = Roster::default();
        roster.merge(row("b", "Bruno"));
        roster.merge(row("a", "Ana"));
        roster.merge(row("b", "Bruno"));
        let ids: Vec<&str> = roster.records().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_empty_ids_kept_apart_by_default() {
        let mut roster = Roster::new(EmptyIdPolicy::Separate);
        roster.merge(row("", "Ana"));
        roster.merge(row("", "Bruno"));
        assert_eq!(roster.len(), 2);
        assert!(roster.get("").is_none());
    }

    #[test]
    fn test_empty_ids_merge_when_configured() {
        let mut roster = Roster::new(EmptyIdPolicy::Merge);
        roster.merge(row("", "Ana"));
        assert_eq!(roster.merge(row("", "Bruno")), MergeOutcome::Merged);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("").map(|p| p.fullname.as_str()), Some("Bruno"));
    }

    #[test]
    fn test_serializes_as_record_sequence() {
        let mut roster = Roster::default();
        roster.merge(row("1", "Ana"));
        let json = serde_json::to_value(&roster).expect("serialize roster");
        assert!(json.is_array());
        assert_eq!(json[0]["eid"], "1");
        assert_eq!(json[0]["addresses"], serde_json::Value::Array(Vec::new()));
    }
}
