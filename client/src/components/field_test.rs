use super::*;

#[test]
fn text_kind_renders_text_input() {
    assert_eq!(FieldKind::Text.input_type(), Some("text"));
    assert_eq!(FieldKind::Text.bounds(), (None, None));
}

#[test]
fn number_kind_carries_bounds() {
    let kind = FieldKind::Number { min: Some(1900.0), max: Some(9999.0) };
    assert_eq!(kind.input_type(), Some("number"));
    assert_eq!(kind.bounds(), (Some(1900.0), Some(9999.0)));
}

#[test]
fn select_kind_has_no_input_type() {
    let kind = FieldKind::Select(vec![SelectOption { value: "sedan", label: "Sedan" }]);
    assert_eq!(kind.input_type(), None);
    assert_eq!(kind.bounds(), (None, None));
}

#[test]
fn bound_attr_formats_whole_numbers_without_fraction() {
    assert_eq!(bound_attr(Some(0.0)), Some("0".to_owned()));
    assert_eq!(bound_attr(Some(1900.0)), Some("1900".to_owned()));
    assert_eq!(bound_attr(Some(0.5)), Some("0.5".to_owned()));
    assert_eq!(bound_attr(None), None);
}
