use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;
use log::trace;

use crate::{style, Attributes, Value};

/// Merge two attribute mappings into a new one, giving precedence to `b`.
///
/// | key      | result                                                              |
/// |----------|---------------------------------------------------------------------|
/// | `class`  | `a`'s classes followed by `b`'s, as an unflattened array            |
/// | `style`  | both sides rendered with [`style`] and joined with `;` if both non-empty |
/// | other    | `b`'s value                                                         |
///
/// Keys only present in `a` are kept as-is. Neither input is modified.
///
/// ```rust
/// use jade_runtime::{bumpalo::Bump, merge, Attributes, Value};
///
/// let bump = Bump::new();
/// let a = Attributes::from_pairs(&bump, [("class", "a"), ("id", "x")]);
/// let b = Attributes::from_pairs(&bump, [("class", "b"), ("id", "y")]);
/// let merged = merge(&bump, &a, &b);
/// assert_eq!(merged.get("class"), Some(&Value::array(&bump, ["a", "b"])));
/// assert_eq!(merged.get("id"), Some(&Value::str(&bump, "y")));
/// ```
pub fn merge<'bump>(
    bump: &'bump Bump,
    a: &Attributes<'bump>,
    b: &Attributes<'bump>,
) -> Attributes<'bump> {
    let mut result = a.clone();
    merge_into(bump, &mut result, b);
    result
}

/// Merge a list of attribute mappings from left to right with [`merge`].
///
/// An empty list yields an empty mapping.
pub fn merge_all<'bump>(bump: &'bump Bump, list: &[Attributes<'bump>]) -> Attributes<'bump> {
    let Some((first, rest)) = list.split_first() else {
        return Attributes::new_in(bump);
    };
    let mut result = first.clone();
    for b in rest {
        merge_into(bump, &mut result, b);
    }
    result
}

fn merge_into<'bump>(bump: &'bump Bump, acc: &mut Attributes<'bump>, b: &Attributes<'bump>) {
    for (key, value) in b.iter() {
        let merged = match key {
            "class" => {
                trace!("merging class lists");
                merge_classes(bump, acc.get(key), value)
            }
            "style" => {
                trace!("merging styles");
                merge_styles(bump, acc.get(key), value)
            }
            _ => value.clone(),
        };
        acc.insert(key, merged);
    }
}

/// Concatenate two class values as arrays. Falsy values contribute nothing; other
/// non-array values contribute themselves as a single element.
fn merge_classes<'bump>(
    bump: &'bump Bump,
    a: Option<&Value<'bump>>,
    b: &Value<'bump>,
) -> Value<'bump> {
    let mut classes = BumpVec::new_in(bump);
    for side in [a, Some(b)].into_iter().flatten() {
        match side {
            Value::Array(items) => classes.extend(items.iter().cloned()),
            falsy if !falsy.is_truthy() => {}
            scalar => classes.push(scalar.clone()),
        }
    }
    Value::Array(classes)
}

fn merge_styles<'bump>(
    bump: &'bump Bump,
    a: Option<&Value<'bump>>,
    b: &Value<'bump>,
) -> Value<'bump> {
    let a = a.map(|a| style(bump, a)).unwrap_or_else(|| BumpString::new_in(bump));
    let b = style(bump, b);
    let mut merged = a;
    if !merged.is_empty() && !b.is_empty() {
        merged.push(';');
    }
    merged.push_str(&b);
    Value::String(merged)
}
