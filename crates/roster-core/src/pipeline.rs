//! Roster building pipeline.
//!
//! Decodes the header once, then interprets and merges every data row in
//! input order:
//!
//! ```text
//! rows[0] ──decode──▶ Header
//! rows[1..] ──interpret(Header)──▶ RowRecord ──merge──▶ Roster
//! ```

use roster_model::RosterOptions;
use tracing::{debug, trace};

use crate::contact::{ContactNormalizer, StandardContacts};
use crate::error::{Result, RosterError};
use crate::header::{Header, decode_header};
use crate::merge::{MergeOutcome, Roster};
use crate::row::interpret_row;

/// Counters collected while building a roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterStats {
    /// Data rows read (header excluded).
    pub rows: usize,
    /// Rows folded into an already existing record.
    pub merged_rows: usize,
    pub records: usize,
    pub phones: usize,
    pub emails: usize,
    pub rejected_phones: usize,
    pub rejected_emails: usize,
    pub ignored_columns: usize,
}

/// Output of a roster build.
#[derive(Debug, Clone)]
pub struct RosterBuild {
    pub header: Header,
    pub roster: Roster,
    pub stats: RosterStats,
}

/// Build a roster with the standard contact normalizer.
pub fn build_roster<I, R, S>(rows: I, options: &RosterOptions) -> Result<RosterBuild>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    build_roster_with(rows, options, &StandardContacts)
}

/// Build a roster from raw rows, the first of which is the header.
///
/// # Errors
///
/// Returns [`RosterError::MissingHeader`] when `rows` is empty and
/// [`RosterError::RowWidth`] when a data row's cell count differs from the
/// header's.
pub fn build_roster_with<I, R, S, C>(
    rows: I,
    options: &RosterOptions,
    contacts: &C,
) -> Result<RosterBuild>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
    C: ContactNormalizer + ?Sized,
{
    let mut rows = rows.into_iter();
    let header_row = rows.next().ok_or(RosterError::MissingHeader)?;
    let header = decode_header(header_row.as_ref());

    let mut roster = Roster::new(options.empty_id_policy);
    let mut stats = RosterStats {
        ignored_columns: header.ignored().count(),
        ..RosterStats::default()
    };

    for (offset, row) in rows.enumerate() {
        let cells = row.as_ref();
        // Header is row 1.
        let position = offset + 2;
        if cells.len() != header.len() {
            return Err(RosterError::RowWidth {
                row: position,
                expected: header.len(),
                found: cells.len(),
            });
        }

        let outcome = interpret_row(&header, cells, contacts);
        stats.rows += 1;
        stats.rejected_phones += outcome.rejected_phones;
        stats.rejected_emails += outcome.rejected_emails;
        if outcome.record.id.is_empty() {
            debug!(row = position, "row has no eid");
        }

        match roster.merge(outcome.record) {
            MergeOutcome::Inserted => trace!(row = position, "new record"),
            MergeOutcome::Merged => {
                stats.merged_rows += 1;
                trace!(row = position, "merged into existing record");
            }
        }
    }

    stats.records = roster.len();
    for person in roster.records() {
        stats.phones += person.phone_count();
        stats.emails += person.email_count();
    }

    Ok(RosterBuild {
        header,
        roster,
        stats,
    })
}
