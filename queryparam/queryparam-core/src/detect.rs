//! Record detection for derived code.
//!
//! The derive cannot tell from syntax alone whether a path type such as `Mode`
//! or `NestedOut` is a record. It resolves `<RecordOf<T>>::SCHEMA` and
//! `<RecordOf<T>>::slot` instead: the inherent items apply when `T`
//! implements [`RecordType`], the [`NotRecord`] fallbacks apply otherwise.

use std::marker::PhantomData;

use crate::{record::RecordType, schema::RecordSchema, slot::Slot};

pub struct RecordOf<T: ?Sized>(PhantomData<T>);

impl<T: RecordType> RecordOf<T> {
    pub const SCHEMA: Option<&'static RecordSchema> = Some(T::SCHEMA);

    pub fn slot(field: &mut T) -> Slot<'_> {
        Slot::Record(field)
    }
}

/// Fallback for field types that are not records. Must be in scope.
pub trait NotRecord<T: ?Sized> {
    const SCHEMA: Option<&'static RecordSchema> = None;

    fn slot(_field: &mut T) -> Slot<'_> {
        Slot::Opaque
    }
}

impl<T: ?Sized> NotRecord<T> for RecordOf<T> {}
