use bumpalo::collections::String as BumpString;
use bumpalo::Bump;

use crate::{escape, Value};

/// Render a `class` value as a space-delimited list of class names.
///
/// - An array contributes each of its elements, rendered recursively; elements that
///   render empty are skipped. When `escaping` is given, the element at index `i` is
///   HTML-escaped if `escaping[i]` is `true`.
/// - An object contributes every non-empty key whose value is truthy. No escaping is done.
/// - A date contributes nothing.
/// - Any other truthy value is coerced to a string; falsy values render empty.
///
/// ```rust
/// use jade_runtime::{bumpalo::Bump, classes, Value};
///
/// let bump = Bump::new();
/// let val = Value::array(&bump, ["btn", "", "active"]);
/// assert_eq!(classes(&bump, &val, None), "btn active");
/// ```
pub fn classes<'bump>(
    bump: &'bump Bump,
    val: &Value<'_>,
    escaping: Option<&[bool]>,
) -> BumpString<'bump> {
    let mut result = BumpString::new_in(bump);
    match val {
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                let class_name = classes(bump, item, None);
                if class_name.is_empty() {
                    continue;
                }
                if !result.is_empty() {
                    result.push(' ');
                }
                let escape_this = escaping.and_then(|e| e.get(idx)).copied() == Some(true);
                if escape_this {
                    result.push_str(&escape(&class_name));
                } else {
                    result.push_str(&class_name);
                }
            }
        }
        Value::Object(flags) => {
            for (key, enabled) in flags.iter() {
                if key.is_empty() || !enabled.is_truthy() {
                    continue;
                }
                if !result.is_empty() {
                    result.push(' ');
                }
                result.push_str(key);
            }
        }
        Value::Date(_) => {}
        scalar if scalar.is_truthy() => result.push_str(&scalar.to_str(bump)),
        _ => {}
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attributes;

    #[test]
    fn test_array_skips_empty_entries() {
        let bump = Bump::new();
        let val = Value::array(&bump, ["a", "", "b"]);
        assert_eq!(classes(&bump, &val, None), "a b");
    }

    #[test]
    fn test_object_keeps_truthy_keys() {
        let bump = Bump::new();
        let val = Value::Object(Attributes::from_pairs(
            &bump,
            [("a", Value::Bool(true)), ("b", Value::Bool(false)), ("c", Value::Int(1))],
        ));
        assert_eq!(classes(&bump, &val, None), "a c");
    }

    #[test]
    fn test_nested_arrays_flatten_in_order() {
        let bump = Bump::new();
        let inner = Value::array(&bump, ["b", "c"]);
        let flags = Value::Object(Attributes::from_pairs(&bump, [("d", true)]));
        let val = Value::array(&bump, [Value::str(&bump, "a"), inner, Value::Null, flags]);
        assert_eq!(classes(&bump, &val, None), "a b c d");
    }

    #[test]
    fn test_escaping_mask() {
        let bump = Bump::new();
        let val = Value::array(&bump, ["<a>", "<b>", "c"]);
        assert_eq!(
            classes(&bump, &val, Some(&[true, false])),
            "&lt;a&gt; <b> c"
        );
        assert_eq!(classes(&bump, &val, None), "<a> <b> c");
    }

    #[test]
    fn test_escaping_plain_names_is_identity() {
        let bump = Bump::new();
        let val = Value::array(&bump, ["a", "b"]);
        assert_eq!(classes(&bump, &val, Some(&[true, false])), "a b");
    }

    #[test]
    fn test_scalars() {
        let bump = Bump::new();
        assert_eq!(classes(&bump, &Value::str(&bump, "solo"), None), "solo");
        assert_eq!(classes(&bump, &Value::Int(7), None), "7");
        assert_eq!(classes(&bump, &Value::Int(0), None), "");
        assert_eq!(classes(&bump, &Value::Null, None), "");
        assert_eq!(classes(&bump, &Value::Bool(true), None), "true");
    }
}
