//! Integration tests for locale resolution.

use locboot::{DEFAULT_TAG, ResolutionSource, languages, resolve};

// =========================================================================
// Override Handling
// =========================================================================

#[test]
fn known_override_wins() {
    let resolution = resolve(Some("de"), None);
    assert_eq!(resolution.tag, "de");
    assert_eq!(resolution.source, ResolutionSource::Override);
}

#[test]
fn override_is_not_truncated() {
    // Region-qualified tags are reachable via override only.
    let resolution = resolve(Some("pt_BR"), None);
    assert_eq!(resolution.tag, "pt_BR");
    assert_eq!(resolution.info.name, "Português (Brasil)");
}

#[test]
fn unknown_override_falls_back_to_default() {
    let resolution = resolve(Some("xx"), None);
    assert_eq!(resolution.tag, "en");
    assert_eq!(resolution.source, ResolutionSource::Default);
}

#[test]
fn empty_override_falls_back_to_default() {
    // `?locale=` yields a present-but-empty override, which is simply an
    // unknown tag.
    let resolution = resolve(Some(""), None);
    assert_eq!(resolution.tag, "en");
}

#[test]
fn unknown_override_does_not_consult_browser_language() {
    let resolution = resolve(Some("xx"), Some("de"));
    assert_eq!(resolution.tag, "en");
    assert_eq!(resolution.source, ResolutionSource::Default);
}

#[test]
fn override_takes_priority_over_browser_language() {
    let resolution = resolve(Some("ru"), Some("de"));
    assert_eq!(resolution.tag, "ru");
}

// =========================================================================
// Browser Language Truncation
// =========================================================================

#[test]
fn browser_language_prefix_matches() {
    let resolution = resolve(None, Some("de-DE"));
    assert_eq!(resolution.tag, "de");
    assert_eq!(resolution.source, ResolutionSource::BrowserLanguage);
}

#[test]
fn region_subtag_is_dropped_even_when_full_tag_is_supported() {
    // "pt-BR" truncates to "pt" although "pt_BR" is in the table. This is
    // the literal first-two-characters rule, preserved on purpose.
    let resolution = resolve(None, Some("pt-BR"));
    assert_eq!(resolution.tag, "pt");
    assert_eq!(resolution.source, ResolutionSource::BrowserLanguage);
}

#[test]
fn unknown_browser_language_falls_back_to_default() {
    let resolution = resolve(None, Some("xx-YY"));
    assert_eq!(resolution.tag, "en");
    assert_eq!(resolution.source, ResolutionSource::Default);
}

#[test]
fn single_character_browser_language_is_used_whole() {
    let resolution = resolve(None, Some("d"));
    assert_eq!(resolution.tag, "en");
}

#[test]
fn missing_inputs_resolve_to_default() {
    let resolution = resolve(None, None);
    assert_eq!(resolution.tag, DEFAULT_TAG);
    assert_eq!(resolution.source, ResolutionSource::Default);
}

// =========================================================================
// Invariant: Resolved Tag Is Always a Descriptor Key
// =========================================================================

#[test]
fn resolution_always_yields_a_supported_tag() {
    let inputs = [
        (Some("de"), None),
        (Some("qq"), Some("zz-ZZ")),
        (Some(""), Some("")),
        (None, Some("pt-BR")),
        (None, Some("日本語")),
        (None, None),
    ];
    for (override_tag, browser) in inputs {
        let resolution = resolve(override_tag, browser);
        assert!(
            languages::is_supported(resolution.tag),
            "resolved '{}' is not in the descriptor table",
            resolution.tag
        );
    }
}

// =========================================================================
// Framework Codes
// =========================================================================

#[test]
fn norwegian_maps_to_no_nb_framework_code() {
    let resolution = resolve(Some("no"), None);
    assert_eq!(resolution.info.framework_code, "no_NB");
}

#[test]
fn secondary_codes_diverge_from_tags_where_expected() {
    assert_eq!(resolve(Some("uk"), None).info.framework_code, "ukr");
    assert_eq!(resolve(Some("zh"), None).info.framework_code, "zh_CN");
    assert_eq!(resolve(Some("ar"), None).info.framework_code, "en");
    assert_eq!(resolve(Some("si"), None).info.framework_code, "en");
}
