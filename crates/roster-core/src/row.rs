//! Row interpretation.
//!
//! Walks one data row against the decoded header and builds the transient
//! [`RowRecord`]. Interpretation depends only on the header and the row, so
//! rows can be interpreted independently; merging is the ordered step.

use roster_model::{Address, AddressKind, Column, FieldType, RowRecord};
use tracing::debug;

use crate::contact::{ContactNormalizer, ContactRejection};
use crate::header::Header;

/// A row record plus the contact cells that were dropped while building it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowOutcome {
    pub record: RowRecord,
    pub rejected_phones: usize,
    pub rejected_emails: usize,
}

/// Interpret one data row.
///
/// Cells beyond the header width are ignored; a column without a cell reads
/// as an empty cell.
pub fn interpret_row<S, C>(header: &Header, cells: &[S], contacts: &C) -> RowOutcome
where
    S: AsRef<str>,
    C: ContactNormalizer + ?Sized,
{
    let mut outcome = RowOutcome::default();
    for (idx, column) in header.columns().iter().enumerate() {
        let cell = cells.get(idx).map_or("", AsRef::<str>::as_ref);
        let record = &mut outcome.record;
        match column.field {
            FieldType::FullName => record.name = cell.to_string(),
            FieldType::Eid => record.id = cell.to_string(),
            FieldType::Invisible => record.invisible = parse_flag(cell),
            FieldType::SeeAll => record.see_all = parse_flag(cell),
            FieldType::Class => record.classes.extend(split_multi_value(cell)),
            FieldType::Phone => {
                let trimmed = cell.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match contacts.normalize_phone(trimmed) {
                    Ok(canonical) => add_address(record, column, AddressKind::Phone, canonical),
                    Err(reason) => {
                        log_rejection(idx, AddressKind::Phone, reason);
                        outcome.rejected_phones += 1;
                    }
                }
            }
            FieldType::Email => {
                for token in split_multi_value(cell) {
                    match contacts.normalize_email(&token) {
                        Ok(canonical) => {
                            add_address(record, column, AddressKind::Email, canonical);
                        }
                        Err(reason) => {
                            log_rejection(idx, AddressKind::Email, reason);
                            outcome.rejected_emails += 1;
                        }
                    }
                }
            }
            FieldType::Ignored => {}
        }
    }
    outcome
}

/// Flag cells are false only for `""`, `"0"`, and `"no"` (exact match).
pub fn parse_flag(cell: &str) -> bool {
    !matches!(cell, "" | "0" | "no")
}

/// Split a multi-valued cell.
///
/// Only the first `/` acts as a separator alongside `,`; later slashes stay
/// inside their token. Tokens are trimmed and empty ones dropped.
pub fn split_multi_value(cell: &str) -> Vec<String> {
    cell.replacen('/', ",", 1)
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn add_address(record: &mut RowRecord, column: &Column, kind: AddressKind, canonical: String) {
    record
        .addresses
        .upsert(Address::new(kind, column.tags.clone(), canonical));
}

fn log_rejection(column: usize, kind: AddressKind, reason: ContactRejection) {
    debug!(column, kind = %kind, reason = %reason, "dropping contact cell");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::StandardContacts;
    use crate::header::decode_header;

    /// Accepts anything containing a digit (phones) or an `@` (emails).
    struct Permissive;

    impl ContactNormalizer for Permissive {
        fn normalize_phone(&self, raw: &str) -> Result<String, ContactRejection> {
            let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
            if digits.is_empty() {
                Err(ContactRejection::Unparseable)
            } else {
                Ok(digits)
            }
        }

        fn normalize_email(&self, raw: &str) -> Result<String, ContactRejection> {
            if raw.contains('@') {
                Ok(raw.trim().to_string())
            } else {
                Err(ContactRejection::MalformedEmail)
            }
        }
    }

    #[test]
    fn test_flag_values() {
        assert!(!parse_flag(""));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("no"));
        assert!(parse_flag("No"));
        assert!(parse_flag(" "));
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(parse_flag("whatever"));
    }

    #[test]
    fn test_split_only_first_slash() {
        assert_eq!(split_multi_value("Math/Physics"), vec!["Math", "Physics"]);
        assert_eq!(split_multi_value("A/B/C"), vec!["A", "B/C"]);
        assert_eq!(split_multi_value("A, B ,, C"), vec!["A", "B", "C"]);
        assert_eq!(split_multi_value(" / "), Vec::<String>::new());
        assert!(split_multi_value("").is_empty());
    }

    #[test]
    fn test_scalar_fields_are_verbatim() {
        let header = decode_header(&["fullname", "eid", "invisible", "see_all"]);
        let outcome = interpret_row(&header, &[" Ana ", "007", "no", "1"], &Permissive);
        assert_eq!(outcome.record.name, " Ana ");
        assert_eq!(outcome.record.id, "007");
        assert!(!outcome.record.invisible);
        assert!(outcome.record.see_all);
    }

    #[test]
    fn test_classes_accumulate_across_columns() {
        let header = decode_header(&["class", "class"]);
        let outcome = interpret_row(&header, &["Sala 1 / Sala 2", "Sala 1"], &Permissive);
        assert_eq!(outcome.record.classes, vec!["Sala 1", "Sala 2", "Sala 1"]);
    }

    #[test]
    fn test_same_phone_in_two_columns_merges_tags() {
        let header = decode_header(&["phone Work", "phone Home"]);
        let outcome = interpret_row(&header, &["(11) 1111", "11 1111"], &Permissive);
        let addresses = outcome.record.addresses.as_slice();
        assert_eq!(addresses.len(), 1);
        assert_eq!(addresses[0].kind, AddressKind::Phone);
        assert_eq!(addresses[0].address, "111111");
        assert_eq!(addresses[0].tags, vec!["Work", "Home"]);
    }

    #[test]
    fn test_email_cell_splits_and_counts_rejections() {
        let header = decode_header(&["email Student"]);
        let outcome = interpret_row(&header, &["a@x.com / broken, b@x.com"], &Permissive);
        let addresses: Vec<&str> = outcome
            .record
            .addresses
            .iter()
            .map(|a| a.address.as_str())
            .collect();
        assert_eq!(addresses, vec!["a@x.com", "b@x.com"]);
        assert_eq!(outcome.rejected_emails, 1);
        assert_eq!(outcome.rejected_phones, 0);
    }

    #[test]
    fn test_repeated_email_in_one_row_merges_tags() {
        let header = decode_header(&["email Mãe", "email Responsável, Pai"]);
        let outcome = interpret_row(
            &header,
            &["ana@x.com / ana@x.com", "ana@x.com, bia@x.com"],
            &StandardContacts,
        );
        let addresses = outcome.record.addresses.as_slice();
        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0].kind, AddressKind::Email);
        assert_eq!(addresses[0].address, "ana@x.com");
        assert_eq!(
            addresses[0].tags,
            vec!["Mãe", "Mãe", "Responsável", "Pai"]
        );
        assert_eq!(addresses[1].address, "bia@x.com");
        assert_eq!(addresses[1].tags, vec!["Responsável", "Pai"]);
        assert_eq!(outcome.rejected_emails, 0);
    }

    #[test]
    fn test_empty_contact_cells_are_not_rejections() {
        let header = decode_header(&["phone", "email"]);
        let outcome = interpret_row(&header, &["  ", ""], &Permissive);
        assert!(outcome.record.addresses.is_empty());
        assert_eq!(outcome.rejected_phones, 0);
        assert_eq!(outcome.rejected_emails, 0);
    }

    #[test]
    fn test_ignored_columns_have_no_effect() {
        let header = decode_header(&["nickname", "eid"]);
        let outcome = interpret_row(&header, &["Aninha", "1"], &Permissive);
        assert_eq!(outcome.record.name, "");
        assert_eq!(outcome.record.id, "1");
    }

    #[test]
    fn test_short_row_reads_missing_cells_as_empty() {
        let header = decode_header(&["eid", "invisible", "class"]);
        let outcome = interpret_row(&header, &["1"], &Permissive);
        assert_eq!(outcome.record.id, "1");
        assert!(!outcome.record.invisible);
        assert!(outcome.record.classes.is_empty());
    }
}
