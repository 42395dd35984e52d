use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

/// Scalar kinds a parameter value can be coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int,
    Text,
}

impl ScalarKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int => "int",
            ScalarKind::Text => "text",
        }
    }
}

/// Declared kind of a record field.
///
/// Decides whether the decoder binds the field, recurses into it, or leaves it
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ScalarKind),
    /// Comma-separated list of scalars.
    List(ScalarKind),
    /// Nested record. The schema is that of the field's own type.
    Record(&'static RecordSchema),
    /// Any type the decoder has no coercion for; `&'static str` is the
    /// declared type as written, for diagnostics.
    Unsupported(&'static str),
}

impl FieldKind {
    pub fn is_primitive(&self) -> bool {
        matches!(self, FieldKind::Scalar(_) | FieldKind::Unsupported(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Scalar(kind) => kind.type_name(),
            FieldKind::List(_) => "list",
            FieldKind::Record(_) => "record",
            FieldKind::Unsupported(_) => "unsupported",
        }
    }
}

/// Binding directive attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    /// Bind the field to this key.
    Key(&'static str),
    /// `"-"`: never bind, never recurse.
    Skip,
    /// `""` or no directive: leaf fields are ignored, records are recursed into.
    Unbound,
}

impl Binding {
    pub const SKIP_MARKER: &'static str = "-";

    /// Interpret a directive string: `"-"` skips, `""` is unbound, anything else
    /// is a key.
    pub const fn from_tag(tag: &'static str) -> Self {
        match tag.as_bytes() {
            [] => Binding::Unbound,
            [b'-'] => Binding::Skip,
            _ => Binding::Key(tag),
        }
    }

    pub fn key(&self) -> Option<&'static str> {
        match self {
            Binding::Key(key) => Some(key),
            Binding::Skip | Binding::Unbound => None,
        }
    }
}

/// Static description of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    pub binding: Binding,
    /// Whether the decoder may write to the field.
    pub assignable: bool,
}

impl FieldDef {
    pub const fn new(name: &'static str, kind: FieldKind, binding: Binding) -> Self {
        Self {
            name,
            kind,
            binding,
            assignable: true,
        }
    }

    pub const fn read_only(mut self) -> Self {
        self.assignable = false;
        self
    }
}

/// Ordered collection of [`FieldDef`] in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefs(pub &'static [FieldDef]);

impl FieldDefs {
    pub const fn new(fields: &'static [FieldDef]) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &'static [FieldDef] {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static FieldDef> {
        self.0.iter()
    }
}

impl AsRef<[FieldDef]> for FieldDefs {
    fn as_ref(&self) -> &[FieldDef] {
        self.as_slice()
    }
}

impl Deref for FieldDefs {
    type Target = [FieldDef];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for FieldDefs {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_field_defs(self.as_slice())?;
        f.write_str(&text)
    }
}

/// Schema descriptor of a record type: its name and ordered fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    pub name: &'static str,
    pub fields: FieldDefs,
}

impl RecordSchema {
    pub const fn new(name: &'static str, fields: &'static [FieldDef]) -> Self {
        Self {
            name,
            fields: FieldDefs::new(fields),
        }
    }
}

impl Display for RecordSchema {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_record_schema(self)?;
        f.write_str(&text)
    }
}
