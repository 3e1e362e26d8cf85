use alloc::vec;

use crate::{decode, get, path, DecodeError, GetError, Value};

#[test]
fn test_empty_path_decodes_root() {
    for doc in ["null", "[1,2]", "{\"a\":1}", "\"s\"", "-2.5"] {
        assert_eq!(get(&path![], doc), Ok(decode(doc).unwrap()));
    }
}

#[test]
fn test_object_member() {
    let doc = r#"{"test":[1,2,3,4,5]}"#;
    assert_eq!(
        get(&path!["test"], doc),
        Ok(Value::Array(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::Integer(3),
            Value::Integer(4),
            Value::Integer(5),
        ]))
    );
}

#[test]
fn test_array_element_is_one_based() {
    let doc = r#"{"test":[1,2,3,4,5]}"#;
    assert_eq!(get(&path!["test", 1], doc), Ok(Value::Integer(1)));
    assert_eq!(get(&path!["test", 4], doc), Ok(Value::Integer(4)));
    assert_eq!(get(&path!["test", 5], doc), Ok(Value::Integer(5)));
    // Index 0 addresses nothing.
    assert_eq!(get(&path!["test", 0], doc), Err(GetError::NotFound(18)));
    assert_eq!(get(&path!["test", 6], doc), Err(GetError::NotFound(18)));
}

#[test]
fn test_nested_path() {
    let doc = r#"{"a":1,"b":{"c":"x"}}"#;
    assert_eq!(get(&path!["b", "c"], doc), Ok(Value::String("x".into())));

    let doc = r#"{"a":{"b":{"c":[true,[false]]}}}"#;
    assert_eq!(
        get(&path!["a", "b", "c", 2, 1], doc),
        Ok(Value::Boolean(false))
    );
}

#[test]
fn test_missing_key_reports_closing_brace() {
    assert_eq!(get(&path!["b"], r#"{"a":1}"#), Err(GetError::NotFound(6)));
    assert_eq!(get(&path!["a"], "{}"), Err(GetError::NotFound(1)));
}

#[test]
fn test_missing_index_reports_closing_bracket() {
    assert_eq!(get(&path![3], "[1,2]"), Err(GetError::NotFound(4)));
    assert_eq!(get(&path![1], "[]"), Err(GetError::NotFound(1)));
}

#[test]
fn test_component_shape_mismatch() {
    // An index never matches an object member, a key never matches an
    // array element; the whole container is searched and comes up empty.
    assert_eq!(get(&path![1], r#"{"a":1}"#), Err(GetError::NotFound(6)));
    assert_eq!(get(&path!["a"], "[1,2]"), Err(GetError::NotFound(4)));
    // A scalar with components left over ends the search at its first byte.
    assert_eq!(get(&path!["a", "b"], r#"{"a":1}"#), Err(GetError::NotFound(5)));
    assert_eq!(get(&path!["a"], "7"), Err(GetError::NotFound(0)));
}

#[test]
fn test_keys_are_decoded_before_comparison() {
    let doc = r#"{"a":1,"b\n":2}"#;
    assert_eq!(get(&path!["a"], doc), Ok(Value::Integer(1)));
    assert_eq!(get(&path!["b\n"], doc), Ok(Value::Integer(2)));
}

#[test]
fn test_sibling_values_are_not_materialised_or_validated() {
    // Strings with escapes the decoder would reject pass through the skip
    // engine untouched.
    let doc = r#"{"junk":"\q","a":1}"#;
    assert_eq!(get(&path!["a"], doc), Ok(Value::Integer(1)));
}

#[test]
fn test_malformed_after_target_array_element_is_not_observed() {
    // Arrays descend at the matching element without looking further.
    assert_eq!(
        get(&path![3, "bad"], r#"[1,2,{"bad":"found"},{"bad":"#),
        Ok(Value::String("found".into()))
    );
    assert_eq!(get(&path![1], r#"[7,!!!"#), Ok(Value::Integer(7)));
}

#[test]
fn test_members_after_an_object_match_are_still_scanned() {
    // Objects are read through to `}` so a later duplicate can win, which
    // also means a malformed later sibling is still reported.
    assert_eq!(
        get(&path!["a"], r#"{"a":1,"b":!}"#),
        Err(GetError::Invalid(DecodeError { offset: 11 }))
    );
}

#[test]
fn test_malformed_before_target_fails() {
    // Skipping a sibling still trips over a byte no value can start with.
    assert_eq!(
        get(&path!["b"], r#"{"a":!,"b":1}"#),
        Err(GetError::Invalid(DecodeError { offset: 5 }))
    );
    // The target itself is truncated.
    let doc = r#"[1,2,{"bad":"#;
    assert_eq!(
        get(&path![3, "bad"], doc),
        Err(GetError::Invalid(DecodeError { offset: doc.len() }))
    );
}

#[test]
fn test_whitespace_heavy_document() {
    let doc = " {\n\t\"a\" : [ 10 ,\r 20 ] \n} ";
    assert_eq!(get(&path!["a", 2], doc), Ok(Value::Integer(20)));
}

#[test]
fn test_duplicate_keys_resolve_like_decode() {
    // The last occurrence wins, so navigating the decoded tree and asking
    // `get` directly agree even when a key repeats.
    let doc = r#"{"a":1,"a":2}"#;
    assert_eq!(get(&path!["a"], doc), Ok(Value::Integer(2)));

    let doc = r#"{"a":{"x":1},"a":{"y":2}}"#;
    assert_eq!(get(&path!["a", "y"], doc), Ok(Value::Integer(2)));
    // The earlier occurrence is dead: its members are unreachable.
    assert_eq!(get(&path!["a", "x"], doc), Err(GetError::NotFound(23)));

    let decoded = decode(doc).unwrap();
    let via_tree = decoded.as_object().and_then(|m| m.get("a")).cloned();
    assert_eq!(get(&path!["a"], doc).ok(), via_tree);
}
