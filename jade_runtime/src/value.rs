use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::Attributes;

/// A value passed from generated template code into the runtime helpers.
///
/// Every shape the helpers accept is listed here, so dispatch is an exhaustive
/// `match` rather than a series of type probes.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'bump> {
    /// An absent or null value.
    Null,
    /// A boolean value.
    Bool(bool),
    /// An integer value.
    Int(i128),
    /// A floating-point value.
    Float(f64),
    /// A string value.
    String(BumpString<'bump>),
    /// A point in time. Rendered as an ISO-8601 timestamp in attributes.
    Date(DateTime<Utc>),
    /// An ordered sequence of values.
    Array(BumpVec<'bump, Value<'bump>>),
    /// An ordered mapping of string keys to values.
    Object(Attributes<'bump>),
}

impl<'bump> Value<'bump> {
    /// Create a string value.
    pub fn str(bump: &'bump Bump, s: &str) -> Self {
        Value::String(BumpString::from_str_in(s, bump))
    }

    /// Create an array value from anything convertible into values.
    pub fn array<T: IntoValue<'bump>>(
        bump: &'bump Bump,
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        Value::Array(BumpVec::from_iter_in(
            items.into_iter().map(|v| v.into_value(bump)),
            bump,
        ))
    }

    /// Whether the value counts as true when used as a condition.
    ///
    /// `null`, `false`, `0`, `NaN` and the empty string are false; everything else,
    /// including empty arrays and objects, is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Date(_) | Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Returns the value as a string slice if this is a String variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the elements if this is an Array variant.
    pub fn as_array(&self) -> Option<&[Value<'bump>]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the mapping if this is an Object variant.
    pub fn as_object(&self) -> Option<&Attributes<'bump>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Coerce the value to a string allocated in `bump`.
    ///
    /// See the [`Display`](fmt::Display) impl for the coercion rules.
    pub fn to_str<'b>(&self, bump: &'b Bump) -> BumpString<'b> {
        match self {
            Value::String(s) => BumpString::from_str_in(s.as_str(), bump),
            other => {
                use std::fmt::Write;
                let mut result = BumpString::new_in(bump);
                // Writing into a bump string cannot fail.
                let _ = write!(result, "{other}");
                result
            }
        }
    }

    /// Serialize the value as compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Import a JSON value, e.g. a template's locals.
    ///
    /// Numbers that fit in an integer become [`Value::Int`]; object key order is
    /// preserved as yielded by `serde_json`.
    pub fn from_json(bump: &'bump Bump, json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Value::Int(i as i128),
                (None, Some(u)) => Value::Int(u as i128),
                _ => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::str(bump, s),
            serde_json::Value::Array(items) => Value::Array(BumpVec::from_iter_in(
                items.iter().map(|v| Value::from_json(bump, v)),
                bump,
            )),
            serde_json::Value::Object(map) => {
                let mut obj = Attributes::new_in(bump);
                for (k, v) in map {
                    obj.insert(k, Value::from_json(bump, v));
                }
                Value::Object(obj)
            }
        }
    }
}

/// The ISO-8601 form used for dates in attributes and JSON, e.g.
/// `2024-01-02T03:04:05.000Z`.
pub(crate) fn iso_timestamp(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Integral floats print without a fractional part, like integers do.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        write!(f, "NaN")
    } else if x.is_infinite() {
        write!(f, "{}", if x > 0.0 { "Infinity" } else { "-Infinity" })
    } else if x == 0.0 {
        write!(f, "0")
    } else {
        write!(f, "{x}")
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write_float(f, *x),
            Value::String(s) => f.write_str(s.as_str()),
            Value::Date(d) => f.write_str(&iso_timestamp(d)),
            Value::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_null() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
        }
    }
}

impl Serialize for Value<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => match i64::try_from(*i) {
                Ok(i) => serializer.serialize_i64(i),
                Err(_) => serializer.serialize_i128(*i),
            },
            Value::Float(x) if !x.is_finite() => serializer.serialize_unit(),
            Value::Float(x) if x.fract() == 0.0 && x.abs() < 1e21 => match *x as i128 {
                i if i64::try_from(i).is_ok() => serializer.serialize_i64(i as i64),
                i => serializer.serialize_i128(i),
            },
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::String(s) => serializer.serialize_str(s.as_str()),
            Value::Date(d) => serializer.serialize_str(&iso_timestamp(d)),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (key, value) in obj.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Trait for types that can be converted into a [`Value`] with a bump allocator.
pub trait IntoValue<'bump> {
    /// Convert this value into a [`Value`] using the given bump allocator.
    fn into_value(self, bump: &'bump Bump) -> Value<'bump>;
}
impl<'bump> IntoValue<'bump> for Value<'bump> {
    fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
        self
    }
}
impl<'bump> IntoValue<'bump> for &str {
    fn into_value(self, bump: &'bump Bump) -> Value<'bump> {
        Value::str(bump, self)
    }
}
impl<'bump> IntoValue<'bump> for String {
    fn into_value(self, bump: &'bump Bump) -> Value<'bump> {
        Value::str(bump, &self)
    }
}
impl<'bump> IntoValue<'bump> for bool {
    fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
        Value::Bool(self)
    }
}
impl<'bump> IntoValue<'bump> for f64 {
    fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
        Value::Float(self)
    }
}
impl<'bump> IntoValue<'bump> for DateTime<Utc> {
    fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
        Value::Date(self)
    }
}
impl<'bump> IntoValue<'bump> for Attributes<'bump> {
    fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
        Value::Object(self)
    }
}
impl<'bump, T: IntoValue<'bump>> IntoValue<'bump> for Option<T> {
    fn into_value(self, bump: &'bump Bump) -> Value<'bump> {
        match self {
            Some(v) => v.into_value(bump),
            None => Value::Null,
        }
    }
}
impl<'bump, T: IntoValue<'bump>> IntoValue<'bump> for Vec<T> {
    fn into_value(self, bump: &'bump Bump) -> Value<'bump> {
        Value::array(bump, self)
    }
}
impl<'bump, T: IntoValue<'bump>, const N: usize> IntoValue<'bump> for [T; N] {
    fn into_value(self, bump: &'bump Bump) -> Value<'bump> {
        Value::array(bump, self)
    }
}

macro_rules! impl_into_value_for_int {
    ($($ty:ty),*) => {
        $(
            impl<'bump> IntoValue<'bump> for $ty {
                fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
                    Value::Int(self as i128)
                }
            }
        )*
    };
}
impl_into_value_for_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, usize, isize);
