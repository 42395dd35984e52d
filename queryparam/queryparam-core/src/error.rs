//! Error types for the decoder.

use std::num::ParseIntError;

/// Error returned by [`decode`](crate::decode).
///
/// Every variant is fatal to the call. Fields written before the error stay
/// written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A field's storage does not match its declared kind, e.g. a field
    /// declared as a nested record that does not resolve to a record.
    #[error("passed incompatible type({found}): field '{field}' must be {expected}")]
    InvalidTargetKind {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// The record refused to hand out the field's storage.
    #[error("field '{field}' of record '{record}' must be assignable")]
    FieldNotAssignable {
        record: &'static str,
        field: &'static str,
    },

    /// A parameter value (or one of its list items) is not a valid integer.
    #[error("can't cast '{value}' of parameter '{key}' into field '{field}': {source}")]
    Coercion {
        field: &'static str,
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// An error raised while decoding a nested record.
    #[error("error raised in nested value '{field}': {source}")]
    Nested {
        field: &'static str,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Innermost error, past every [`DecodeError::Nested`] wrapper.
    pub fn root_cause(&self) -> &DecodeError {
        let mut current = self;
        while let DecodeError::Nested { source, .. } = current {
            current = source;
        }
        current
    }

    /// Field names from the outermost record down to the failing field.
    pub fn field_path(&self) -> Vec<&'static str> {
        let mut path = Vec::new();
        let mut current = self;
        loop {
            match current {
                DecodeError::Nested { field, source } => {
                    path.push(*field);
                    current = source;
                }
                DecodeError::InvalidTargetKind { field, .. }
                | DecodeError::FieldNotAssignable { field, .. }
                | DecodeError::Coercion { field, .. } => {
                    path.push(*field);
                    return path;
                }
            }
        }
    }

    pub(crate) fn nested(field: &'static str, source: DecodeError) -> Self {
        DecodeError::Nested {
            field,
            source: Box::new(source),
        }
    }
}
