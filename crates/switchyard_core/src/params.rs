//! Typed request parameters.

use serde::Serialize;
use std::collections::BTreeMap;

/// A scalar request parameter.
///
/// Each value has exactly one wire representation, produced by
/// [`ParamValue::to_wire`]. Request signing depends on that string being
/// identical on every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ParamValue {
    /// Free text, sent verbatim.
    #[display("{_0}")]
    Text(String),
    /// Integer, sent in decimal.
    #[display("{_0}")]
    Integer(i64),
    /// Boolean, sent as `"true"` or `"false"`.
    #[display("{_0}")]
    Boolean(bool),
}

impl ParamValue {
    /// Renders the value as it appears on the wire.
    pub fn to_wire(&self) -> String {
        self.to_string()
    }

    /// True for a text value that is empty after trimming.
    pub fn is_blank(&self) -> bool {
        matches!(self, ParamValue::Text(s) if s.trim().is_empty())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Boolean(value)
    }
}

macro_rules! integer_param {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_param!(i64, i32, u32, u16, u8);

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

/// An ordered set of request parameters.
///
/// Keys are kept sorted, so iteration order never depends on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value for the same name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a parameter only when a value is present.
    pub fn with_opt<V: Into<ParamValue>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(name, value);
        }
        self
    }

    /// Inserts a parameter, returning the value it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Removes a parameter.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.0.remove(name)
    }

    /// Looks up a parameter.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// True when the parameter is present and not blank text.
    pub fn has_value(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(|v| !v.is_blank())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates parameters in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parameter names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Converts every value to its wire string.
    pub fn to_wire(&self) -> WireParams {
        WireParams(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), v.to_wire()))
                .collect(),
        )
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Parameters rendered to wire strings, sorted by name.
///
/// Serializes as a flat map, so it can be handed directly to
/// `reqwest::RequestBuilder::query` or `form`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WireParams(BTreeMap<String, String>);

impl WireParams {
    /// Looks up a wire value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Inserts a wire value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// True when the key is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Iterates wire values in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of wire values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
