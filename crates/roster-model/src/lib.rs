//! Data model for roster normalization.
//!
//! Types shared by the decoding, interpretation, and merging stages:
//! decoded header [`Column`]s, contact [`Address`]es, the transient
//! [`RowRecord`] built per data row, and the merged [`PersonRecord`].

pub mod address;
pub mod column;
pub mod options;
pub mod record;

pub use address::{Address, AddressKind, AddressList, Upsert};
pub use column::{Column, FieldType};
pub use options::{EmptyIdPolicy, RosterOptions};
pub use record::{PersonRecord, RowRecord};
