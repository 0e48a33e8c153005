//! Per-row and per-person records.

use serde::Serialize;

use crate::address::{AddressKind, AddressList};

/// Transient record produced by interpreting a single data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    pub name: String,
    pub id: String,
    pub classes: Vec<String>,
    pub addresses: AddressList,
    pub invisible: bool,
    pub see_all: bool,
}

/// One person in the output roster, merged across all rows sharing its id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonRecord {
    pub fullname: String,
    #[serde(rename = "eid")]
    pub id: String,
    pub classes: Vec<String>,
    pub addresses: AddressList,
    pub invisible: bool,
    pub see_all: bool,
}

impl PersonRecord {
    /// Fold a later row for the same id into this record.
    ///
    /// `fullname` is overwritten, classes are appended without dedup,
    /// addresses merge by `(type, address)`, and both flags are OR'd.
    pub fn absorb(&mut self, row: RowRecord) {
        self.fullname = row.name;
        self.classes.extend(row.classes);
        self.addresses.extend_merging(row.addresses);
        self.invisible |= row.invisible;
        self.see_all |= row.see_all;
    }

    pub fn phone_count(&self) -> usize {
        self.addresses.count_kind(AddressKind::Phone)
    }

    pub fn email_count(&self) -> usize {
        self.addresses.count_kind(AddressKind::Email)
    }
}

impl From<RowRecord> for PersonRecord {
    fn from(row: RowRecord) -> Self {
        Self {
            fullname: row.name,
            id: row.id,
            classes: row.classes,
            addresses: row.addresses,
            invisible: row.invisible,
            see_all: row.see_all,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;

    fn row(name: &str, invisible: bool) -> RowRecord {
        let mut addresses = AddressList::new();
        addresses.upsert(Address::new(
            AddressKind::Email,
            vec!["Personal".to_string()],
            "ana@x.com",
        ));
        RowRecord {
            name: name.to_string(),
            id: "123".to_string(),
            classes: vec!["Math".to_string()],
            addresses,
            invisible,
            see_all: false,
        }
    }

    #[test]
    fn absorb_overwrites_name_and_ors_flags() {
        let mut person = PersonRecord::from(row("Ana", true));
        person.absorb(row("Ana Maria", false));
        assert_eq!(person.fullname, "Ana Maria");
        assert!(person.invisible);
        assert!(!person.see_all);
        assert_eq!(person.classes, vec!["Math", "Math"]);
        assert_eq!(person.email_count(), 1);
        assert_eq!(
            person.addresses.as_slice()[0].tags,
            vec!["Personal", "Personal"]
        );
    }

    #[test]
    fn serializes_with_output_field_names() {
        let person = PersonRecord::from(row("Ana", false));
        let json = serde_json::to_value(&person).expect("serialize person");
        let keys: Vec<&str> = json
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        for key in ["fullname", "eid", "classes", "addresses", "invisible", "see_all"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }
}
