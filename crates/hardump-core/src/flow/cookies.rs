//! Cookie shapes handed over by the host.

use serde::{Deserialize, Serialize};

/// Cookie attributes in the order they appeared. Keys compare case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CookieAttrs(Vec<(String, String)>);

impl CookieAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CookieAttrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        CookieAttrs(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// One `Set-Cookie` value as parsed by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetCookie {
    pub value: String,
    #[serde(default)]
    pub attrs: CookieAttrs,
}

impl SetCookie {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            attrs: CookieAttrs::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(key, value);
        self
    }
}
