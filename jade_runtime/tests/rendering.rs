use jade_runtime::{
    attr, attrs, bumpalo::Bump, classes, escape, merge, merge_all, style, Attributes, Value,
};

#[test]
fn test_style_examples() {
    let bump = Bump::new();
    let obj = Value::Object(Attributes::from_pairs(&bump, [("color", "red")]));
    assert_eq!(style(&bump, &obj), "color:red");
    assert_eq!(style(&bump, &Value::str(&bump, "color:red;")), "color:red");
    assert_eq!(style(&bump, &Value::str(&bump, "")), "");
}

#[test]
fn test_class_examples() {
    let bump = Bump::new();
    assert_eq!(classes(&bump, &Value::array(&bump, ["a", "", "b"]), None), "a b");

    let flags = Attributes::from_pairs(
        &bump,
        [("a", Value::Bool(true)), ("b", Value::Bool(false)), ("c", Value::Int(1))],
    );
    assert_eq!(classes(&bump, &Value::Object(flags), None), "a c");

    let val = Value::array(&bump, ["a", "b"]);
    assert_eq!(classes(&bump, &val, Some(&[true, false])), "a b");
}

#[test]
fn test_attr_examples() {
    let bump = Bump::new();
    assert_eq!(attr(&bump, "disabled", &Value::Bool(true), false, true), " disabled");
    assert_eq!(
        attr(&bump, "disabled", &Value::Bool(true), false, false),
        " disabled=\"disabled\""
    );
    assert_eq!(
        attr(&bump, "id", &Value::str(&bump, "x"), true, false),
        " id=\"x\""
    );
}

#[test]
fn test_attrs_example() {
    let bump = Bump::new();
    let obj = Attributes::from_pairs(
        &bump,
        [("class", Value::array(&bump, ["a", "b"])), ("id", Value::str(&bump, "x"))],
    );
    assert_eq!(attrs(&bump, &obj, false), " class=\"a b\" id=\"x\"");
}

#[test]
fn test_element_attributes_from_template_locals() {
    let bump = Bump::new();
    let locals = serde_json::json!({
        "class": ["card", { "active": true, "hidden": false }],
        "style": { "width": "10px", "opacity": 0.5 },
        "data-id": 17,
        "data-meta": { "tags": ["x"] },
        "checked": false
    });
    let Value::Object(obj) = Value::from_json(&bump, &locals) else {
        panic!("Expected an object");
    };
    assert_eq!(
        attrs(&bump, &obj, true),
        r#" class="card active" style="width:10px;opacity:0.5" data-id="17" data-meta='{"tags":["x"]}'"#
    );
}

#[test]
fn test_merged_attributes_render() {
    let bump = Bump::new();
    let mixin = Attributes::from_pairs(
        &bump,
        [("class", Value::str(&bump, "nav")), ("style", Value::str(&bump, "top:0;"))],
    );
    let block = Attributes::from_pairs(
        &bump,
        [
            ("class", Value::array(&bump, ["open", ""])),
            ("style", Value::str(&bump, "left:0")),
            ("id", Value::str(&bump, "menu")),
        ],
    );
    let inline = Attributes::from_pairs(&bump, [("id", Value::str(&bump, "main-menu"))]);

    let merged = merge_all(&bump, &[mixin.clone(), block.clone(), inline]);
    assert_eq!(
        attrs(&bump, &merged, false),
        r#" class="nav open" style="top:0;left:0" id="main-menu""#
    );
    assert_eq!(merge(&bump, &mixin, &block).len(), 3);
}

#[test]
fn test_escape_then_render() {
    let bump = Bump::new();
    let title = escape(r#"Tom & "Jerry""#);
    let obj = Attributes::from_pairs(&bump, [("title", &*title)]);
    assert_eq!(
        attrs(&bump, &obj, false),
        r#" title="Tom &amp; &quot;Jerry&quot;""#
    );
}
