use std::fmt::{Error, Result, Write as _};

use super::{Binding, FieldDef, FieldKind, RecordSchema};

/// Format a record schema: its name on the first line, then its fields.
pub(crate) fn format_record_schema(schema: &RecordSchema) -> std::result::Result<String, Error> {
    let mut out = String::new();
    writeln!(out, "{}:", schema.name)?;
    for field in schema.fields.iter() {
        format_field(field, 4, &mut out)?;
    }
    Ok(out)
}

/// Format field definitions in a readable style:
/// primitive fields are rendered in one line, compound fields are pretty-printed.
/// Nested records follow the same rule.
pub(crate) fn format_field_defs(fields: impl AsRef<[FieldDef]>) -> std::result::Result<String, Error> {
    let mut out = String::new();
    for field in fields.as_ref().iter() {
        format_field(field, 0, &mut out)?;
    }
    Ok(out)
}

fn format_field(field: &FieldDef, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    let binding = binding_label(&field.binding);
    let access = if field.assignable {
        ""
    } else {
        ", assignable: false"
    };

    if field.kind.is_primitive() {
        writeln!(
            out,
            "{pad}{}: {{ type: {}, binding: {binding}{access} }}",
            field.name,
            type_label(&field.kind)
        )?;
        return Ok(());
    }

    let inner = " ".repeat(indent + 4);
    writeln!(out, "{pad}{}:", field.name)?;
    writeln!(out, "{inner}type: {}", field.kind.type_name())?;
    writeln!(out, "{inner}binding: {binding}")?;
    if !field.assignable {
        writeln!(out, "{inner}assignable: false")?;
    }

    match &field.kind {
        FieldKind::List(item) => {
            writeln!(out, "{inner}item: {{ type: {} }}", item.type_name())?;
        }
        FieldKind::Record(schema) => {
            writeln!(out, "{inner}record: {}", schema.name)?;
            writeln!(out, "{inner}fields:")?;
            for child in schema.fields.iter() {
                format_field(child, indent + 8, out)?;
            }
        }
        kind => unreachable!("{kind:?} is not a compound kind"),
    }

    Ok(())
}

fn type_label(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Unsupported(declared) => format!("unsupported({declared})"),
        other => other.type_name().to_string(),
    }
}

fn binding_label(binding: &Binding) -> String {
    match binding {
        Binding::Key(key) => format!("{key:?}"),
        Binding::Skip => Binding::SKIP_MARKER.to_string(),
        Binding::Unbound => "none".to_string(),
    }
}
