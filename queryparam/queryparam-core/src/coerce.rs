//! Coercion of raw parameter text into field storage.

use std::num::ParseIntError;

use crate::{
    schema::{FieldKind, ScalarKind},
    slot::Slot,
};

/// Separator between list items. There is no escape for it.
pub const LIST_DELIMITER: char = ',';

/// Only the exact token `"true"` is true; every other input is false.
pub fn coerce_bool(raw: &str) -> bool {
    raw == "true"
}

pub fn split_list(raw: &str) -> std::str::Split<'_, char> {
    raw.split(LIST_DELIMITER)
}

/// Why a value could not be written into a slot.
#[derive(Debug)]
pub(crate) enum AssignError {
    /// The slot does not hold what the declared kind promises.
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// The text (or the list item held in `value`) is not an integer.
    Parse {
        value: String,
        source: ParseIntError,
    },
}

/// Coerce `raw` according to `kind` and store it in `slot`.
///
/// Unsupported kinds leave the slot untouched.
pub(crate) fn assign(kind: &FieldKind, slot: Slot<'_>, raw: &str) -> Result<(), AssignError> {
    match (kind, slot) {
        (FieldKind::Scalar(ScalarKind::Bool), Slot::Bool(target)) => {
            *target = coerce_bool(raw);
        }
        (FieldKind::Scalar(ScalarKind::Int), Slot::Int(target)) => {
            target.assign_str(raw).map_err(|source| AssignError::Parse {
                value: raw.to_string(),
                source,
            })?;
        }
        (FieldKind::Scalar(ScalarKind::Text), Slot::Text(target)) => {
            *target = raw.to_string();
        }
        (FieldKind::List(ScalarKind::Bool), Slot::BoolList(target)) => {
            *target = split_list(raw).map(coerce_bool).collect();
        }
        (FieldKind::List(ScalarKind::Int), Slot::IntList(target)) => {
            target
                .assign_items(&mut split_list(raw))
                .map_err(|(item, source)| AssignError::Parse {
                    value: item.to_string(),
                    source,
                })?;
        }
        (FieldKind::List(ScalarKind::Text), Slot::TextList(target)) => {
            *target = split_list(raw).map(str::to_string).collect();
        }
        (FieldKind::Unsupported(_), _) => {}
        (kind, slot) => {
            return Err(AssignError::KindMismatch {
                expected: expected_name(kind),
                found: slot.kind_name(),
            });
        }
    }
    Ok(())
}

pub(crate) fn expected_name(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Scalar(ScalarKind::Bool) => "bool",
        FieldKind::Scalar(ScalarKind::Int) => "int",
        FieldKind::Scalar(ScalarKind::Text) => "text",
        FieldKind::List(ScalarKind::Bool) => "bool list",
        FieldKind::List(ScalarKind::Int) => "int list",
        FieldKind::List(ScalarKind::Text) => "text list",
        FieldKind::Record(_) => "record",
        FieldKind::Unsupported(_) => "opaque",
    }
}

