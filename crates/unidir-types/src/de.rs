//! Forgiving field deserializers.
//!
//! Callers send profiles assembled by browser forms, so the same field may
//! arrive as a number, a numeric string or `null`. A value of the wrong
//! shape is read as "not provided" instead of failing the whole document.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Scalar {
    fn into_number(self) -> Option<f64> {
        let n: Option<f64> = match self {
            Scalar::Number(n) => Some(n),
            Scalar::Text(s) => s.trim().replace(',', ".").parse().ok(),
            Scalar::Bool(_) | Scalar::Other(_) => None,
        };
        n.filter(|n| n.is_finite())
    }

    fn into_text(self) -> Option<String> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::Number(n) => Some(n.to_string()),
            Scalar::Bool(_) | Scalar::Other(_) => None,
        }
    }

    fn into_bool(self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(b),
            Scalar::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
            Scalar::Number(n) => Some(n != 0.0),
            Scalar::Other(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrOne {
    List(Vec<Scalar>),
    One(Scalar),
}

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A number, or a string holding one.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_number))
}

/// A string; numbers are kept in their decimal form.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_text))
}

/// A boolean, or one of `"yes"`/`"no"`/`"true"`/`"false"`.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_bool))
}

/// A list of strings. `null` is empty, a lone string is a one-item list.
pub(crate) fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<ListOrOne>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(ListOrOne::List(items)) => items,
        Some(ListOrOne::One(item)) => vec![item],
    };
    Ok(items.into_iter().filter_map(Scalar::into_text).collect())
}
