//! Record traits: the schema descriptor that stands in for runtime reflection.

use crate::{schema::RecordSchema, slot::Slot};

/// A value the decoder can populate field by field.
///
/// `schema().fields[i]` describes the storage returned by `field_mut(i)`.
/// Usually implemented with `#[derive(Record)]`.
pub trait Record {
    /// Static schema of this record type.
    fn schema(&self) -> &'static RecordSchema;

    /// Mutable slot for the field at `index` in declaration order.
    ///
    /// Returns `None` when the field cannot be written from outside the record.
    fn field_mut(&mut self, index: usize) -> Option<Slot<'_>>;
}

/// Record types whose schema is known without an instance.
///
/// Nested record schemas are linked through this trait at compile time.
pub trait RecordType: Record {
    const SCHEMA: &'static RecordSchema;
}

impl<T: Record + ?Sized> Record for &mut T {
    fn schema(&self) -> &'static RecordSchema {
        (**self).schema()
    }

    fn field_mut(&mut self, index: usize) -> Option<Slot<'_>> {
        (**self).field_mut(index)
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn schema(&self) -> &'static RecordSchema {
        (**self).schema()
    }

    fn field_mut(&mut self, index: usize) -> Option<Slot<'_>> {
        (**self).field_mut(index)
    }
}
