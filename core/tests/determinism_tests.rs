use docdiff::{CompareConfig, compare, compare_with_config};

mod common;
use common::doc;

fn messy_old() -> String {
    doc(&[
        "Context",
        "The subaccount hosts applications.",
        "",
        "Prerequisites",
        "• You must have admin access.",
        "• You've created a subaccount.",
        "----------",
        "Procedure",
        "1. Navigate to Settings → General.",
        "2. Choose Save.",
        "2. Choose Save.",
        "4. Verify the status.",
    ])
}

fn messy_new() -> String {
    doc(&[
        "Context",
        "The subaccount hosts applications and services.",
        "Prerequisites",
        "- You've created a subaccount.",
        "Procedure",
        "1) Navigate to Settings » General.",
        "2) Choose Save.",
        "3) Enter a description.",
        "5) Verify the status.",
    ])
}

#[test]
fn repeated_runs_are_bit_identical() {
    let old = messy_old();
    let new = messy_new();

    let first = compare(&old, &new);
    let first_json = serde_json::to_string(&first).expect("serialize result");

    for _ in 0..10 {
        let again = compare(&old, &new);
        assert_eq!(again, first);
        let json = serde_json::to_string(&again).expect("serialize result");
        assert_eq!(json, first_json);
    }
}

#[test]
fn explicit_default_config_matches_compare() {
    let old = messy_old();
    let new = messy_new();
    assert_eq!(
        compare(&old, &new),
        compare_with_config(&old, &new, &CompareConfig::default())
    );
}

#[test]
fn json_field_names_are_the_stable_contract() {
    let result = compare(
        "Choose Save.\n1. a\n2. b\n3. c",
        "Note: changed.\n1. a\n2. b\n5. c",
    );
    let json = serde_json::to_value(&result).expect("serialize result");

    assert!(json["has_changes"].as_bool().unwrap());
    assert_eq!(json["max_severity"], "HIGH");

    let removed = json["removed"].as_array().unwrap();
    assert_eq!(removed[0]["text"], "Choose Save.");
    assert_eq!(removed[0]["category"], "instruction");
    assert_eq!(removed[0]["severity"], "HIGH");

    let added = json["added"].as_array().unwrap();
    assert_eq!(added[0]["category"], "note");
    assert_eq!(added[0]["severity"], "MEDIUM");

    let warnings = json["structural_warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0]["type"], "NUMBERING_GAP");
    assert_eq!(warnings[0]["severity"], "HIGH");
    assert_eq!(
        warnings[0]["message"],
        "Step 3 is missing (numbering jumps from 2 to 5)"
    );
    assert_eq!(
        warnings[1]["message"],
        "Step 4 is missing (numbering jumps from 2 to 5)"
    );
}

#[test]
fn max_severity_is_omitted_from_json_when_absent() {
    let result = compare("same line", "same line");
    let json = serde_json::to_value(&result).expect("serialize result");
    assert!(json.get("max_severity").is_none());
}
