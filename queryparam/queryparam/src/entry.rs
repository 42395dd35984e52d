//! Convenience entry points built on [`decode`].

use queryparam_core::{DecodeError, Lookup, Record, decode};

/// Decode into a fresh `T::default()`.
pub fn decode_fresh<T, L>(lookup: &L) -> Result<T, DecodeError>
where
    T: Record + Default,
    L: Lookup + ?Sized,
{
    let mut record = T::default();
    decode(&mut record, lookup)?;
    Ok(record)
}

/// Decode into a copy of `target` and replace `target` only on success.
///
/// Unlike [`decode`], `target` is left exactly as it was when an error is
/// returned.
pub fn decode_atomic<T, L>(target: &mut T, lookup: &L) -> Result<(), DecodeError>
where
    T: Record + Clone,
    L: Lookup + ?Sized,
{
    let mut staged = target.clone();
    decode(&mut staged, lookup)?;
    *target = staged;
    Ok(())
}

/// Decode a raw URL query (`a=1&b=2`) into a fresh `T::default()`.
#[cfg(feature = "query-string")]
pub fn from_query<T>(query: &str) -> Result<T, DecodeError>
where
    T: Record + Default,
{
    decode_fresh(&crate::QueryString::parse(query))
}
