// Unit tests for the fixed label table
// Identifiers, display names and parsing of stored values

use calendar_panels::models::label::{Label, LABELS};
use test_case::test_case;

#[test_case(Label::Indigo, "indigo", "Work")]
#[test_case(Label::Gray, "gray", "Personal")]
#[test_case(Label::Green, "green", "Health")]
#[test_case(Label::Blue, "blue", "Leisure")]
#[test_case(Label::Red, "red", "Urgent")]
#[test_case(Label::Purple, "purple", "Social")]
fn test_label_metadata(label: Label, identifier: &str, display_name: &str) {
    assert_eq!(label.identifier(), identifier);
    assert_eq!(label.display_name(), display_name);
    assert_eq!(identifier.parse::<Label>(), Ok(label));
    assert_eq!(label.to_string(), identifier);
}

#[test]
fn test_table_has_six_labels_in_order() {
    let identifiers: Vec<_> = LABELS.iter().map(|info| info.identifier).collect();
    assert_eq!(
        identifiers,
        vec!["indigo", "gray", "green", "blue", "red", "purple"],
        "Label order drives the default label and the swatch order"
    );
}

#[test_case("" ; "empty")]
#[test_case("Work" ; "display name is not an identifier")]
#[test_case("orange" ; "unknown color")]
fn test_unknown_identifiers_rejected(value: &str) {
    assert!(value.parse::<Label>().is_err());
}
