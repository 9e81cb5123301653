//! Integration tests for the locale descriptor table.

use locboot::languages;

#[test]
fn table_has_twenty_four_languages() {
    assert_eq!(languages::all().count(), 24);
}

#[test]
fn lookup_is_exact() {
    assert!(languages::is_supported("pt"));
    assert!(languages::is_supported("pt_BR"));
    assert!(!languages::is_supported("pt-BR"));
    assert!(!languages::is_supported("PT"));
    assert!(!languages::is_supported(""));
}

#[test]
fn descriptors_carry_display_names() {
    assert_eq!(languages::get("de").unwrap().name, "Deutsch");
    assert_eq!(languages::get("zh").unwrap().name, "中文");
}

#[test]
fn every_framework_code_points_at_a_real_bundle_name() {
    // Codes either equal their tag or belong to the known divergent set.
    for (tag, info) in languages::all() {
        let divergent = matches!(
            (tag, info.framework_code),
            ("ar", "en") | ("si", "en") | ("no", "no_NB") | ("uk", "ukr") | ("zh", "zh_CN")
        );
        assert!(
            divergent || info.framework_code == tag,
            "unexpected framework code '{}' for tag '{}'",
            info.framework_code,
            tag
        );
    }
}

#[test]
fn entry_returns_canonical_static_tag() {
    let (tag, info) = languages::entry("no").unwrap();
    assert_eq!(tag, "no");
    assert_eq!(info.framework_code, "no_NB");
}
