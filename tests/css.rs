use html_tree::{Attributes, HtmlElement};

#[test]
fn styles_accumulate_in_order() {
    let mut data = Attributes::default();
    assert_eq!(data.get("style"), None);
    data.style().add("foo", "snt");
    data.style().add("bar", "fgs");
    data.style().add("baz", "sdf");
    assert_eq!(data.style().get("baz"), Some("sdf".to_string()));
    assert_eq!(data.get("style"), Some("foo:snt;bar:fgs;baz:sdf;"));
    data.style().remove("bar");
    assert_eq!(data.get("style"), Some("foo:snt;baz:sdf;"));
}

#[test]
fn updating_a_property_keeps_its_position() {
    let mut data = Attributes::default();
    data.style().add("foo", "snt").add("bar", "fgs");
    data.style().add("foo", "upd");
    assert_eq!(data.get("style"), Some("foo:upd;bar:fgs;"));
}

#[test]
fn removing_the_last_declaration_keeps_an_empty_style() {
    let mut data = Attributes::default();
    data.style().add("foo", "snt");
    data.style().remove("foo");
    assert_eq!(data.get("style"), Some(""));
}

#[test]
fn external_style_writes_are_visible() {
    let mut data = Attributes::default();
    data.set("style", "color:red;margin:0;");
    assert_eq!(data.style().get("color"), Some("red".to_string()));
    data.style().remove("color");
    assert_eq!(data.get("style"), Some("margin:0;"));
}

#[test]
fn missing_properties_read_as_absent() {
    let mut data = Attributes::default();
    assert_eq!(data.style().get("ghost"), None);
    data.style().add("real", "1");
    assert_eq!(data.style().get("ghost"), None);
}

#[test]
fn classes_join_with_single_spaces() {
    let mut data = Attributes::default();
    assert_eq!(data.get("class"), None);
    data.classes().add("foo");
    data.classes().add("bar");
    data.classes().add("baz");
    assert_eq!(data.get("class"), Some("foo bar baz"));
    data.classes().remove("bar");
    assert_eq!(data.get("class"), Some("foo baz"));
}

#[test]
fn duplicate_classes_are_not_added() {
    let mut data = Attributes::default();
    data.classes().add("foo");
    data.classes().add("foo");
    assert_eq!(data.get("class"), Some("foo"));
}

#[test]
fn removing_a_missing_class_is_a_no_op() {
    let mut data = Attributes::default();
    data.classes().remove("ghost");
    assert_eq!(data.get("class"), None);
}

#[test]
fn css_helpers_on_elements() {
    let div = HtmlElement::new("div");
    div.add_css("float", "left").add_class("wide");
    assert_eq!(div.get_attribute("style"), Some("float:left;".to_string()));
    assert_eq!(div.get_attribute("class"), Some("wide".to_string()));
    assert_eq!(div.get_css("float"), Some("left".to_string()));
    div.remove_css("float").remove_class("wide");
    assert_eq!(div.get_attribute("style"), Some("".to_string()));
    assert_eq!(div.get_attribute("class"), Some("".to_string()));
}
