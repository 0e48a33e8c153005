//! Roster normalization engine.
//!
//! Turns raw tabular rows into a deduplicated roster of person records:
//!
//! - **Header decoding**: each header cell becomes a field type plus tags
//! - **Contact normalization**: phones to bare E.164 digits, emails syntax-checked
//! - **Row interpretation**: one transient record per data row
//! - **Merging**: rows sharing an `eid` fold into a single record
//!
//! # Example
//!
//! ```ignore
//! use roster_core::build_roster;
//! use roster_model::RosterOptions;
//!
//! let rows = vec![
//!     vec!["fullname", "eid", "class", "phone Work", "email Personal"],
//!     vec!["Ana", "123", "Math/Physics", "+55 11 91234-5678", "ana@x.com"],
//! ];
//! let build = build_roster(rows, &RosterOptions::default())?;
//! let json = serde_json::to_string_pretty(&build.roster)?;
//! ```

pub mod contact;
mod error;
pub mod header;
pub mod merge;
pub mod pipeline;
pub mod row;

// === Error Types ===
pub use error::{Result, RosterError};

// === Stages ===
pub use contact::{
    ContactNormalizer, ContactRejection, DEFAULT_PHONE_REGION, StandardContacts, normalize_email,
    normalize_phone,
};
pub use header::{Header, decode_header, decode_header_cell};
pub use merge::{MergeOutcome, Roster};
pub use pipeline::{RosterBuild, RosterStats, build_roster, build_roster_with};
pub use row::{RowOutcome, interpret_row, parse_flag, split_multi_value};
