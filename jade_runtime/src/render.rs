use std::io::Write;

use bumpalo::collections::String as BumpString;
use bumpalo::Bump;

use crate::value::iso_timestamp;
use crate::{classes, escape, style, Attributes, Value};

/// Render a single attribute as ` key="value"`, or an empty string if it should be omitted.
///
/// - `class` and `style` are omitted when falsy.
/// - Booleans and nulls are boolean attributes: `true` renders as ` key` when `terse`
///   is set (HTML5) or ` key="key"` otherwise (XHTML); `false` and null are omitted.
/// - Dates render as their ISO-8601 timestamp.
/// - Other non-string values are serialized as JSON. If that JSON contains a `"` and
///   `escaped` is not set, the attribute is single-quoted with `'` written as `&apos;`.
/// - When `escaped` is set, the value is HTML-escaped.
///
/// ```rust
/// use jade_runtime::{attr, bumpalo::Bump, Value};
///
/// let bump = Bump::new();
/// assert_eq!(attr(&bump, "disabled", &Value::Bool(true), false, true), " disabled");
/// assert_eq!(attr(&bump, "id", &Value::str(&bump, "x"), true, false), r#" id="x""#);
/// ```
pub fn attr<'bump>(
    bump: &'bump Bump,
    key: &str,
    val: &Value<'_>,
    escaped: bool,
    terse: bool,
) -> BumpString<'bump> {
    let mut result = BumpString::new_in(bump);
    if (key == "class" || key == "style") && !val.is_truthy() {
        return result;
    }

    let text = match val {
        Value::Bool(false) | Value::Null => return result,
        Value::Bool(true) => {
            result.push(' ');
            result.push_str(key);
            if !terse {
                push_quoted(&mut result, key);
            }
            return result;
        }
        Value::String(s) => s.as_str(),
        Value::Date(d) => &*bump.alloc_str(&iso_timestamp(d)),
        other => {
            let json = json_in(bump, other);
            if !escaped && json.contains('"') {
                result.push(' ');
                result.push_str(key);
                result.push_str("='");
                result.push_str(&json.replace('\'', "&apos;"));
                result.push('\'');
                return result;
            }
            json
        }
    };

    result.push(' ');
    result.push_str(key);
    if escaped {
        push_quoted(&mut result, &escape(text));
    } else {
        push_quoted(&mut result, text);
    }
    result
}

fn push_quoted(result: &mut BumpString<'_>, value: &str) {
    result.push_str("=\"");
    result.push_str(value);
    result.push('"');
}

fn json_in<'bump>(bump: &'bump Bump, val: &Value<'_>) -> &'bump str {
    // `Value` only contains JSON-representable data, so serialization cannot fail.
    let json = val.to_json().unwrap_or_else(|_| String::from("null"));
    bump.alloc_str(&json)
}

/// Normalise the value of `key` the way [`attrs`] does before rendering it.
///
/// Scalar `class` values are rendered as they are, so `class: true` stays a boolean
/// attribute.
fn normalise<'bump>(bump: &'bump Bump, key: &str, val: &Value<'_>) -> Option<Value<'bump>> {
    match (key, val) {
        ("class", Value::Array(_) | Value::Object(_) | Value::Date(_)) => {
            Some(Value::String(classes(bump, val, None)))
        }
        ("style", _) => Some(Value::String(style(bump, val))),
        _ => None,
    }
}

/// Render every attribute of `obj`, in insertion order, with no separator between them.
///
/// `class` values go through [`classes`] and `style` values through [`style`] first.
/// Values are not escaped.
///
/// ```rust
/// use jade_runtime::{attrs, bumpalo::Bump, Attributes, Value};
///
/// let bump = Bump::new();
/// let obj = Attributes::from_pairs(
///     &bump,
///     [("class", Value::array(&bump, ["a", "b"])), ("id", Value::str(&bump, "x"))],
/// );
/// assert_eq!(attrs(&bump, &obj, false), r#" class="a b" id="x""#);
/// ```
pub fn attrs<'bump>(bump: &'bump Bump, obj: &Attributes<'_>, terse: bool) -> BumpString<'bump> {
    let mut result = BumpString::new_in(bump);
    for (key, val) in obj.iter() {
        let fragment = match normalise(bump, key, val) {
            Some(normalised) => attr(bump, key, &normalised, false, terse),
            None => attr(bump, key, val, false, terse),
        };
        result.push_str(&fragment);
    }
    result
}

/// Write the output of [`attrs`] to a writer.
pub fn write_attrs(
    bump: &Bump,
    writer: &mut dyn Write,
    obj: &Attributes<'_>,
    terse: bool,
) -> std::io::Result<()> {
    writer.write_all(attrs(bump, obj, terse).as_bytes())
}
