use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A field read from a catalog document that may not have the expected shape.
///
/// A value that does not fit `T` is kept as raw JSON instead of failing the
/// whole document. Queries only see [`Lenient::valid`], so an ill-shaped
/// field never matches, while responses still echo it unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Valid(T),
    Other(Value),
}

impl<T> Lenient<T> {
    pub fn valid(&self) -> Option<&T> {
        match self {
            Lenient::Valid(value) => Some(value),
            Lenient::Other(_) => None,
        }
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Lenient::Valid(value)
    }
}

/// The well-shaped value of an optional lenient field.
pub(crate) fn valid<T>(field: &Option<Lenient<T>>) -> Option<&T> {
    field.as_ref().and_then(Lenient::valid)
}
