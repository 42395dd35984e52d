//! Populate structs from URL query parameters and other flat string maps.
//!
//! Annotate a struct with `#[derive(Record)]` and `#[query("key")]` on the
//! fields to bind, then [`decode`] it from any [`Lookup`]:
//!
//! ```
//! use queryparam::{QueryString, Record, decode};
//!
//! #[derive(Debug, Default, Record)]
//! pub struct Search {
//!     #[query("q")]
//!     pub text: String,
//!     #[query("page")]
//!     pub page: u32,
//!     #[query("tags")]
//!     pub tags: Vec<String>,
//! }
//!
//! let mut search = Search { page: 1, ..Default::default() };
//! decode(&mut search, &QueryString::parse("q=rust+lang&tags=a,b")).unwrap();
//! assert_eq!(search.text, "rust lang");
//! assert_eq!(search.page, 1);
//! assert_eq!(search.tags, ["a", "b"]);
//! ```

mod entry;
#[cfg(feature = "query-string")]
mod query_string;

pub use entry::{decode_atomic, decode_fresh};
#[cfg(feature = "query-string")]
pub use entry::from_query;
#[cfg(feature = "query-string")]
pub use query_string::QueryString;
#[doc(hidden)]
pub use queryparam_core::__private;
pub use queryparam_core as core;
pub use queryparam_core::{
    Binding, DecodeError, FieldDef, FieldDefs, FieldKind, FnLookup, IntListTarget, IntTarget,
    LIST_DELIMITER, Lookup, Record, RecordSchema, RecordType, ScalarKind, Slot, coerce_bool,
    decode, lookup_fn, split_list,
};
#[cfg(feature = "derive")]
pub use queryparam_derive::Record;
