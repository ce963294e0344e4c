use std::borrow::Cow;
use std::fmt::Display;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::{ClientError, Network};

/// RFC 3986 unreserved characters pass through; everything else is
/// percent-encoded, so a space becomes `%20` rather than `+`.
const QUERY_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Ordered query parameter bag.
///
/// Absent values are dropped at the call site via [`push_opt`]
/// (`QueryPairs::push_opt`), never serialized as empty strings. Insertion
/// order is preserved, which keeps serialization stable for a given input.
#[derive(Clone, Debug, Default)]
pub struct QueryPairs {
    pairs: Vec<(Cow<'static, str>, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one key/value pair; the value is stringified via `Display`.
    pub fn push(&mut self, key: impl Into<Cow<'static, str>>, value: impl Display) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Appends the pair only when a value is present.
    pub fn push_opt(&mut self, key: impl Into<Cow<'static, str>>, value: Option<impl Display>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Appends one pair per element, serializing arrays as repeated keys.
    pub fn push_repeated<V: Display>(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        values: impl IntoIterator<Item = V>,
    ) {
        let key = key.into();
        for value in values {
            self.push(key.clone(), value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serializes the pairs into a percent-encoded query string, or `None`
    /// when the bag is empty.
    pub fn to_query_string(&self) -> Option<String> {
        if self.pairs.is_empty() {
            return None;
        }
        let encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(key, QUERY_ENCODE),
                    utf8_percent_encode(value, QUERY_ENCODE)
                )
            })
            .collect();
        Some(encoded.join("&"))
    }
}

/// Builds the fully qualified request URL from network base, path, and
/// parameter bag. A query string already embedded in `path` is kept and
/// the serialized pairs are appended after it.
pub(crate) fn build_url(
    network: Network,
    path: &str,
    params: &QueryPairs,
) -> Result<Url, ClientError> {
    let full = format!("{}{path}", network.base_url());
    let mut url = Url::parse(&full).map_err(|_| ClientError::InvalidPath(path.to_owned()))?;

    if let Some(serialized) = params.to_query_string() {
        let merged = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{serialized}"),
            _ => serialized,
        };
        url.set_query(Some(&merged));
    }
    Ok(url)
}
