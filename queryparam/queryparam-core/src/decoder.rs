//! The recursive field walker.

use crate::{
    coerce::{AssignError, assign},
    error::DecodeError,
    lookup::Lookup,
    record::Record,
    schema::{Binding, FieldDef, FieldKind, RecordSchema},
    slot::Slot,
};

/// Populate `target` from `lookup` following the record's schema.
///
/// Fields are visited in declaration order:
/// - a field that is not assignable fails the call, whatever its binding;
/// - `Binding::Skip` fields are left alone, nested records included;
/// - nested records are always recursed into, with or without a key;
/// - a bound leaf field is overwritten only when the key is present with a
///   non-empty value, otherwise it keeps its current value.
///
/// Decoding stops at the first error; fields already written are not rolled
/// back.
pub fn decode<R, L>(target: &mut R, lookup: &L) -> Result<(), DecodeError>
where
    R: Record + ?Sized,
    L: Lookup + ?Sized,
{
    let schema = target.schema();

    for (index, field) in schema.fields.iter().enumerate() {
        if !field.assignable {
            return Err(not_assignable(schema, field));
        }

        if field.binding == Binding::Skip {
            continue;
        }

        match &field.kind {
            FieldKind::Record(_) => {
                match take_slot(target, schema, index, field)? {
                    Slot::Record(nested) => {
                        decode(nested, lookup).map_err(|e| DecodeError::nested(field.name, e))?;
                    }
                    other => {
                        return Err(DecodeError::InvalidTargetKind {
                            field: field.name,
                            expected: "record",
                            found: other.kind_name(),
                        });
                    }
                }
            }
            kind => {
                let Some(key) = field.binding.key() else {
                    continue;
                };
                let Some(raw) = lookup.lookup(key).filter(|raw| !raw.is_empty()) else {
                    continue;
                };
                let slot = take_slot(target, schema, index, field)?;
                assign(kind, slot, &raw).map_err(|e| match e {
                    AssignError::Parse { value, source } => DecodeError::Coercion {
                        field: field.name,
                        key,
                        value,
                        source,
                    },
                    AssignError::KindMismatch { expected, found } => {
                        DecodeError::InvalidTargetKind {
                            field: field.name,
                            expected,
                            found,
                        }
                    }
                })?;
            }
        }
    }

    Ok(())
}

fn take_slot<'a, R>(
    target: &'a mut R,
    schema: &RecordSchema,
    index: usize,
    field: &FieldDef,
) -> Result<Slot<'a>, DecodeError>
where
    R: Record + ?Sized,
{
    target
        .field_mut(index)
        .ok_or_else(|| not_assignable(schema, field))
}

fn not_assignable(schema: &RecordSchema, field: &FieldDef) -> DecodeError {
    DecodeError::FieldNotAssignable {
        record: schema.name,
        field: field.name,
    }
}
