//! Schema-driven decoding of flat string key/value maps into records.
//!
//! This crate provides the record schema descriptors ([`RecordSchema`] /
//! [`FieldDef`]), the [`Record`] trait that exposes a record's fields to the
//! decoder, the [`Lookup`] trait for parameter sources, and [`decode`].

mod coerce;
mod decoder;
mod detect;
mod error;
mod lookup;
mod record;
mod schema;
mod slot;

pub use coerce::{LIST_DELIMITER, coerce_bool, split_list};
pub use decoder::decode;
pub use error::DecodeError;
pub use lookup::{FnLookup, Lookup, lookup_fn};
pub use record::{Record, RecordType};
pub use schema::{Binding, FieldDef, FieldDefs, FieldKind, RecordSchema, ScalarKind};
pub use slot::{IntListTarget, IntTarget, Slot};

#[doc(hidden)]
pub mod __private {
    pub use crate::detect::{NotRecord, RecordOf};
}
