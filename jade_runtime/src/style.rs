use bumpalo::collections::String as BumpString;
use bumpalo::Bump;

use crate::Value;

/// Render a `style` value as a `;`-delimited list of CSS declarations.
///
/// An object renders as `key:value` pairs in insertion order, an array as `index:value`
/// pairs, and a date as nothing, since it has no keys. Anything else is coerced to
/// a string with at most one trailing `;` removed. Falsy values render as an empty string.
/// The result never ends in `;`.
pub fn style<'bump>(bump: &'bump Bump, val: &Value<'_>) -> BumpString<'bump> {
    let mut result = BumpString::new_in(bump);
    if !val.is_truthy() {
        return result;
    }
    match val {
        Value::Object(declarations) => {
            for (idx, (property, value)) in declarations.iter().enumerate() {
                if idx > 0 {
                    result.push(';');
                }
                result.push_str(property);
                result.push(':');
                result.push_str(value.to_str(bump).as_str());
            }
        }
        Value::Array(items) => {
            for (idx, value) in items.iter().enumerate() {
                if idx > 0 {
                    result.push(';');
                }
                result.push_str(&idx.to_string());
                result.push(':');
                result.push_str(value.to_str(bump).as_str());
            }
        }
        Value::Date(_) => {}
        other => {
            result.push_str(other.to_str(bump).as_str());
            if result.ends_with(';') {
                result.pop();
            }
        }
    }
    result
}
