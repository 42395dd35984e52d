//! URL query string parsing into a [`Lookup`].

use std::{borrow::Cow, convert::Infallible, str::FromStr};

use percent_encoding::percent_decode_str;
use queryparam_core::Lookup;

/// Decoded `key=value` pairs of a URL query, in order of appearance.
///
/// A key may appear several times; [`Lookup`] resolves to its first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Parse a raw query such as `a=1&b=x%20y`. A leading `?` is ignored.
    ///
    /// Pairs are separated by `&`, keys and values by the first `=`; a pair
    /// without `=` has an empty value. `+` decodes to a space, malformed
    /// percent escapes are kept as written and invalid UTF-8 is replaced.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self { pairs }
    }

    /// Parse the query part of a URL or request target such as
    /// `/search?q=rust#top`. Without `?` the result is empty.
    pub fn from_url(url: &str) -> Self {
        let url = url.split_once('#').map_or(url, |(before, _)| before);
        match url.split_once('?') {
            Some((_, query)) => Self::parse(query),
            None => Self::default(),
        }
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value of `key`, in order of appearance.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

impl Lookup for QueryString {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(Cow::Borrowed)
    }
}

impl FromStr for QueryString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryString
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
