//! Mutable field slots handed to the decoder by a [`Record`](crate::Record).

use std::num::ParseIntError;

use crate::record::Record;

/// Mutable view of one field's storage.
///
/// The borrow lasts for a single field; the decoder never keeps it past the
/// write.
pub enum Slot<'a> {
    Bool(&'a mut bool),
    Int(&'a mut dyn IntTarget),
    Text(&'a mut String),
    BoolList(&'a mut Vec<bool>),
    IntList(&'a mut dyn IntListTarget),
    TextList(&'a mut Vec<String>),
    Record(&'a mut dyn Record),
    /// Storage the decoder has no coercion for.
    Opaque,
}

impl Slot<'_> {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Slot::Bool(_) => "bool",
            Slot::Int(_) => "int",
            Slot::Text(_) => "text",
            Slot::BoolList(_) => "bool list",
            Slot::IntList(_) => "int list",
            Slot::TextList(_) => "text list",
            Slot::Record(_) => "record",
            Slot::Opaque => "opaque",
        }
    }
}

impl std::fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Slot").field(&self.kind_name()).finish()
    }
}

/// Integer storage of any width.
pub trait IntTarget {
    /// Parse `raw` as a base-10 integer and store it.
    fn assign_str(&mut self, raw: &str) -> Result<(), ParseIntError>;
}

/// List-of-integer storage of any element width.
pub trait IntListTarget {
    /// Parse every item and replace the stored list.
    ///
    /// On the first failing item, nothing is stored and the error is returned
    /// together with the offending item.
    fn assign_items<'s>(
        &mut self,
        items: &mut dyn Iterator<Item = &'s str>,
    ) -> Result<(), (&'s str, ParseIntError)>;
}

macro_rules! impl_int_targets {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntTarget for $ty {
                fn assign_str(&mut self, raw: &str) -> Result<(), ParseIntError> {
                    *self = raw.parse()?;
                    Ok(())
                }
            }

            impl IntListTarget for Vec<$ty> {
                fn assign_items<'s>(
                    &mut self,
                    items: &mut dyn Iterator<Item = &'s str>,
                ) -> Result<(), (&'s str, ParseIntError)> {
                    let parsed = items
                        .map(|item| item.parse::<$ty>().map_err(|e| (item, e)))
                        .collect::<Result<Vec<_>, _>>()?;
                    *self = parsed;
                    Ok(())
                }
            }
        )*
    };
}

impl_int_targets!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
