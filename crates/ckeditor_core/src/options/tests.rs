use super::*;

#[test]
fn empty_store_renders_empty_object() {
    assert_eq!(Options::new().to_js(), "{}");
}

#[test]
fn entries_render_in_insertion_order() {
    let mut options = Options::new();
    options
        .put_literal("language", "fr")
        .put("height", SizeOption::pixels(300))
        .put("startupFocus", true)
        .put("tabIndex", 3);
    assert_eq!(
        options.to_js(),
        "{language: 'fr', height: '300px', startupFocus: true, tabIndex: 3}"
    );
}

#[test]
fn overwrite_keeps_first_position() {
    let mut options = Options::new();
    options
        .put_literal("skin", "kama")
        .put("tabIndex", 1)
        .put_literal("skin", "office2003");
    assert_eq!(options.len(), 2);
    assert_eq!(options.to_js(), "{skin: 'office2003', tabIndex: 1}");
}

#[test]
fn rendering_is_idempotent() {
    let mut options = Options::new();
    options.put("toolbar", Toolbar::default());
    let first = options.to_js();
    assert_eq!(first, options.to_js());
    assert_eq!(first, "{toolbar: 'Full'}");
}

#[test]
fn absent_options_are_not_errors() {
    let options = Options::new();
    assert_eq!(options.get_boolean("fullPage").unwrap(), None);
    assert_eq!(options.get_int("tabIndex").unwrap(), None);
    assert!(options.get_complex::<SizeOption>("width").unwrap().is_none());
    assert!(options.get_list_items::<String>("removePlugins").unwrap().is_none());
}

#[test]
fn mismatched_type_is_reported() {
    let mut options = Options::new();
    options.put_literal("tabIndex", "three");
    match options.get_int("tabIndex") {
        Err(EditorError::TypeMismatch {
            name,
            expected,
            found,
        }) => {
            assert_eq!(name, "tabIndex");
            assert_eq!(expected, "integer");
            assert_eq!(found, "literal");
        }
        other => panic!("expected mismatch, got {:?}", other),
    }
}

#[test]
fn complex_getter_checks_the_variant() {
    let mut options = Options::new();
    options.put("height", SizeOption::percent(50));
    assert_eq!(
        options.get_complex::<SizeOption>("height").unwrap(),
        Some(&SizeOption::percent(50))
    );
    assert!(options.get_complex::<Toolbar>("height").is_err());
}

#[test]
fn float_getter_widens_integers() {
    let mut options = Options::new();
    options.put("dialog_backgroundCoverOpacity", 1);
    assert_eq!(
        options.get_float("dialog_backgroundCoverOpacity").unwrap(),
        Some(1.0)
    );
    options.put("dialog_backgroundCoverOpacity", true);
    assert!(options.get_float("dialog_backgroundCoverOpacity").is_err());
}

#[test]
fn non_finite_floats_render_as_js_tokens() {
    assert_eq!(Scalar::Float(f64::INFINITY).to_js(), "Infinity");
    assert_eq!(Scalar::Float(f64::NEG_INFINITY).to_js(), "-Infinity");
    assert_eq!(Scalar::Float(f64::NAN).to_js(), "NaN");
    assert_eq!(Scalar::Float(0.5).to_js(), "0.5");
}

#[test]
fn mixed_lists_render_each_item() {
    let mut options = Options::new();
    options.put(
        "keystrokes",
        OptionValue::list([
            CommandKeyStrokeOption::new("undo", 90, &[KeyStrokeMask::Ctrl]),
            CommandKeyStrokeOption::new("redo", 89, &[KeyStrokeMask::Ctrl]),
        ]),
    );
    assert_eq!(
        options.to_js(),
        "{keystrokes: [[CKEDITOR.CTRL + 90, 'undo'],[CKEDITOR.CTRL + 89, 'redo']]}"
    );
}

#[test]
fn list_items_of_the_wrong_kind_are_rejected() {
    let mut options = Options::new();
    options.put(
        "blockedKeystrokes",
        OptionValue::List(vec![
            KeyStrokeOption::new(66, &[KeyStrokeMask::Ctrl]).into(),
            ListItem::Literal("b".into()),
        ]),
    );
    assert!(options
        .get_list_items::<KeyStrokeOption>("blockedKeystrokes")
        .is_err());
}

#[test]
fn helpers_fall_back_to_defaults() {
    let mut options = Options::new();
    assert!(options.boolean_or("resize_enabled", true).unwrap());
    assert_eq!(options.literal_or("skin", "kama").unwrap(), "kama");
    options.put_literal("skin", "v2");
    assert_eq!(options.literal_or("skin", "kama").unwrap(), "v2");
    options.remove("skin");
    assert!(!options.contains("skin"));
    assert!(options.is_empty());
}
