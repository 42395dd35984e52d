//! Static record schema descriptors.

mod format;
mod types;

pub(crate) use format::{format_field_defs, format_record_schema};
pub use types::{Binding, FieldDef, FieldDefs, FieldKind, RecordSchema, ScalarKind};
