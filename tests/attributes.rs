use html_tree::{AttrInput, AttrValue, Attributes};

#[test]
fn simple() {
    let mut data = Attributes::default();
    assert!(data.is_empty());
    assert_eq!(data.get("foo"), None);
    data.set("foo", "bar");
    assert_eq!(data.get("foo"), Some("bar"));
    data.set("foo", "baz");
    assert_eq!(data.get("foo"), Some("baz"));
    data.remove("foo");
    assert_eq!(data.get("foo"), None);
    assert!(data.is_empty());
}

#[test]
fn extend() {
    let mut data = Attributes::default();
    data.set("foo", "bar");
    data.set("ijn", "ujm");
    data.add(vec![("ijn", "zgv"), ("edc", "rdx")]);
    assert_eq!(data.get("ijn"), Some("zgv"));
    assert_eq!(data.len(), 3);
    assert_eq!(data.entries()[1].name, "ijn");

    data.add(vec![(
        "ojv",
        AttrValue::List(vec!["lkj".into(), "nbv".into(), "gfd".into()]),
    )]);
    assert_eq!(data.get("ojv"), Some("lkj;nbv;gfd"));

    data.set_all(AttrInput::Pairs(Vec::new()));
    assert!(data.is_empty());
}

#[test]
fn string_input() {
    let mut data = Attributes::default();
    data.add(r#"avail="from:left;insecure:15em;""#);
    assert_eq!(data.get("avail"), Some("from:left;insecure:15em;"));
    data.set("avail", "xrb");
    assert_eq!(data.get("avail"), Some("xrb"));
}

#[test]
fn render() {
    let mut data = Attributes::default();
    data.add(r#"avail="from:left;insecure:15em;""#);
    data.set("foo", "bar");
    data.set("ijn", "ujm");
    assert_eq!(
        data.render(),
        r#" avail="from:left;insecure:15em;" foo="bar" ijn="ujm""#
    );
}

#[test]
fn empty_store_renders_nothing() {
    assert_eq!(Attributes::default().render(), "");
}

#[test]
fn names_and_values_fold_to_lowercase() {
    let mut data = Attributes::default();
    data.set("Foo", "BAR");
    assert_eq!(data.get("foo"), Some("bar"));
    assert_eq!(data.get("Foo"), Some("bar"));
    assert_eq!(data.entries()[0].name, "foo");
}

#[test]
fn set_keeps_one_entry_per_name() {
    let mut data = Attributes::default();
    data.set("a", "1").set("b", "2").set("a", "1");
    assert_eq!(data.len(), 2);
    assert_eq!(data.entries()[0].name, "a");
}

#[test]
fn falsy_entries_are_dropped() {
    let mut data = Attributes::default();
    data.add(vec![("", "x"), ("key", ""), ("0", "y")]);
    assert!(data.is_empty());
}

#[test]
fn garbage_string_yields_an_empty_parse() {
    let mut data = Attributes::default();
    data.add("!!! ??? == <<>>");
    assert!(data.is_empty());
}

#[test]
fn from_str_ingestion() {
    let data: Attributes = r#"width="100px" height='150px' style=color:red"#
        .parse()
        .unwrap();
    assert_eq!(data.get("width"), Some("100px"));
    assert_eq!(data.get("height"), Some("150px"));
    assert_eq!(data.get("style"), Some("color:red"));

    let empty: Attributes = "no attributes here".parse().unwrap();
    assert!(empty.is_empty());
}

#[test]
fn unquoted_values_run_to_whitespace() {
    let mut data = Attributes::default();
    data.add("foo=bar baz");
    assert_eq!(data.get("foo"), Some("bar"));
    assert_eq!(data.get("baz"), None);
    assert_eq!(data.len(), 1);
}

#[test]
fn quoting_styles_are_interchangeable() {
    let mut data = Attributes::default();
    data.add(r#"a="double" b='single' c=bare"#);
    assert_eq!(data.get("a"), Some("double"));
    assert_eq!(data.get("b"), Some("single"));
    assert_eq!(data.get("c"), Some("bare"));
}

#[test]
fn render_from_explicit_input() {
    assert_eq!(
        Attributes::render_from(r#"foo="bar" baz=qux"#),
        r#" foo="bar" baz="qux""#
    );
}

#[test]
fn nested_lists_flatten_with_semicolons() {
    let mut data = Attributes::default();
    data.add(AttrInput::Pairs(vec![(
        "coords".to_string(),
        vec![AttrValue::List(vec![
            AttrValue::List(vec!["1".into(), "2".into()]),
            "3".into(),
        ])],
    )]));
    assert_eq!(data.get("coords"), Some("1;2;3"));
}

#[test]
fn top_level_tails_concatenate_without_separator() {
    let mut data = Attributes::default();
    data.add(AttrInput::Pairs(vec![(
        "glued".to_string(),
        vec!["ab".into(), "cd".into()],
    )]));
    assert_eq!(data.get("glued"), Some("abcd"));
}
