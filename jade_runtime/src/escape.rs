//! HTML escaping for text and attribute values.

use std::borrow::Cow;

use bumpalo::Bump;

use crate::Value;

/// Escape `&`, `<`, `>` and `"` in `html`.
///
/// The input is scanned once, so entities already present are escaped again rather
/// than recognised. When nothing needs escaping, the input is returned as-is
/// ([`Cow::Borrowed`]).
///
/// ```rust
/// use jade_runtime::escape;
///
/// assert_eq!(escape(r#"<a href="?x&y">"#), "&lt;a href=&quot;?x&amp;y&quot;&gt;");
/// assert!(matches!(escape("plain"), std::borrow::Cow::Borrowed("plain")));
/// ```
pub fn escape(html: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(html)
}

/// Coerce `value` to a string and escape it.
///
/// String values are escaped in place; anything else is first rendered into `bump`.
pub fn escape_value<'a>(bump: &'a Bump, value: &'a Value<'_>) -> Cow<'a, str> {
    match value {
        Value::String(s) => escape(s.as_str()),
        other => escape(bump.alloc_str(&other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_the_four_characters() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<p>"), "&lt;p&gt;");
        assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_leaves_single_quote_alone() {
        assert_eq!(escape("it's"), "it's");
    }

    #[test]
    fn test_unchanged_input_is_borrowed() {
        let input = String::from("nothing to see");
        match escape(&input) {
            Cow::Borrowed(s) => assert!(std::ptr::eq(s, input.as_str())),
            Cow::Owned(_) => panic!("Expected borrowed output"),
        }
    }

    #[test]
    fn test_double_escaping_changes_ampersands() {
        let once = escape("&lt;");
        assert_eq!(once, "&amp;lt;");
        assert_eq!(escape(&once), "&amp;amp;lt;");
    }

    #[test]
    fn test_escape_value_coerces() {
        let bump = Bump::new();
        assert_eq!(escape_value(&bump, &Value::Int(42)), "42");
        assert_eq!(escape_value(&bump, &Value::str(&bump, "<b>")), "&lt;b&gt;");
        assert_eq!(escape_value(&bump, &Value::Null), "null");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn idempotent_without_special_characters(s in "[^&<>\"]*") {
                prop_assert_eq!(escape(&s), Cow::Borrowed(s.as_str()));
            }

            #[test]
            fn output_has_no_raw_markup(s in any::<String>()) {
                let escaped = escape(&s);
                prop_assert!(!escaped.contains(['<', '>', '"']));
            }

            #[test]
            fn not_safe_to_apply_twice(s in ".*&.*") {
                let once = escape(&s).into_owned();
                prop_assert_ne!(escape(&once), Cow::Borrowed(once.as_str()));
            }
        }
    }
}
