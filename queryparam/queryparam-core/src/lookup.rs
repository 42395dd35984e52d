//! Key/value sources the decoder reads parameter values from.

use std::{
    borrow::{Borrow, Cow},
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// Flat string-keyed source of raw parameter values.
///
/// `None` and `Some("")` both mean "not present" to the decoder.
pub trait Lookup {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(key)
    }
}

impl<K, V, S> Lookup for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

impl<K, V> Lookup for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

/// Ordered pairs; the first pair with a matching key wins.
impl<K, V> Lookup for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| Cow::Borrowed(v.as_ref()))
    }
}

impl<K, V, const N: usize> Lookup for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.as_slice().lookup(key)
    }
}

impl<K, V> Lookup for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.as_slice().lookup(key)
    }
}

/// [`Lookup`] backed by a closure. Built with [`lookup_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnLookup<F>(F);

/// Wrap a closure `Fn(&str) -> Option<String>` as a [`Lookup`].
pub fn lookup_fn<F>(f: F) -> FnLookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    FnLookup(f)
}

impl<F> Lookup for FnLookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        (self.0)(key).map(Cow::Owned)
    }
}
