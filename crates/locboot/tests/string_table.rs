//! Integration tests for string table decoding.

use locboot::StringTable;

#[test]
fn decodes_json_object_of_strings() {
    let table = StringTable::decode(
        br#"{"loginTitle": "Anmeldung", "loginUser": "Benutzer"}"#,
    )
    .unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("loginTitle"), Some("Anmeldung"));
    assert_eq!(table.get("missing"), None);
}

#[test]
fn empty_object_is_a_valid_empty_table() {
    let table = StringTable::decode(b"{}").unwrap();
    assert!(table.is_empty());
}

#[test]
fn non_object_json_is_a_decode_error() {
    assert!(StringTable::decode(b"[1, 2, 3]").is_err());
    assert!(StringTable::decode(br#""just a string""#).is_err());
}

#[test]
fn non_string_values_are_a_decode_error() {
    assert!(StringTable::decode(br#"{"count": 3}"#).is_err());
    assert!(StringTable::decode(br#"{"nested": {"a": "b"}}"#).is_err());
}

#[test]
fn malformed_json_is_a_decode_error() {
    assert!(StringTable::decode(b"{\"unterminated\": ").is_err());
    assert!(StringTable::decode(b"").is_err());
}

#[test]
fn keys_are_sorted() {
    let table = StringTable::decode(br#"{"b": "2", "a": "1", "c": "3"}"#).unwrap();
    assert_eq!(table.keys(), vec!["a", "b", "c"]);
}

#[test]
fn unicode_values_round_trip() {
    let table = StringTable::decode(
        "{\"deviceTitle\": \"Устройства\"}".as_bytes(),
    )
    .unwrap();
    assert_eq!(table.get("deviceTitle"), Some("Устройства"));
}
