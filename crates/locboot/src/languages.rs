//! The static locale descriptor table.
//!
//! Maps each supported locale tag to its display name and the secondary
//! locale code understood by the external UI framework. The table is fixed
//! at compile time and never mutated.

/// Descriptor for one supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    /// Native display name (e.g. "Deutsch", "Português (Brasil)").
    pub name: &'static str,
    /// Secondary locale code used to select the UI framework's own locale
    /// bundle. Not always equal to the tag: "no" maps to "no_NB", "uk" to
    /// "ukr", and languages without a framework bundle fall back to "en".
    pub framework_code: &'static str,
}

/// The tag used when resolution finds nothing better.
pub const DEFAULT_TAG: &str = "en";

/// Supported languages, sorted by tag for binary search and deterministic
/// iteration.
const LANGUAGES: &[(&str, LanguageInfo)] = &[
    ("ar", LanguageInfo { name: "العربية", framework_code: "en" }),
    ("bg", LanguageInfo { name: "Български", framework_code: "bg" }),
    ("cs", LanguageInfo { name: "Čeština", framework_code: "cs" }),
    ("da", LanguageInfo { name: "Dansk", framework_code: "da" }),
    ("de", LanguageInfo { name: "Deutsch", framework_code: "de" }),
    ("el", LanguageInfo { name: "Ελληνικά", framework_code: "el" }),
    ("en", LanguageInfo { name: "English", framework_code: "en" }),
    ("es", LanguageInfo { name: "Español", framework_code: "es" }),
    ("fr", LanguageInfo { name: "Français", framework_code: "fr" }),
    ("hu", LanguageInfo { name: "Magyar", framework_code: "hu" }),
    ("lt", LanguageInfo { name: "Lietuvių", framework_code: "lt" }),
    ("nl", LanguageInfo { name: "Nederlands", framework_code: "nl" }),
    ("no", LanguageInfo { name: "Norsk", framework_code: "no_NB" }),
    ("pl", LanguageInfo { name: "Polski", framework_code: "pl" }),
    ("pt", LanguageInfo { name: "Português", framework_code: "pt" }),
    ("pt_BR", LanguageInfo { name: "Português (Brasil)", framework_code: "pt_BR" }),
    ("ru", LanguageInfo { name: "Русский", framework_code: "ru" }),
    ("si", LanguageInfo { name: "සිංහල", framework_code: "en" }),
    ("sk", LanguageInfo { name: "Slovenčina", framework_code: "sk" }),
    ("sl", LanguageInfo { name: "Slovenščina", framework_code: "sl" }),
    ("sr", LanguageInfo { name: "Srpski", framework_code: "sr" }),
    ("th", LanguageInfo { name: "ไทย", framework_code: "th" }),
    ("uk", LanguageInfo { name: "Українська", framework_code: "ukr" }),
    ("zh", LanguageInfo { name: "中文", framework_code: "zh_CN" }),
];

/// Look up the descriptor for a locale tag.
///
/// Returns `None` for tags outside the table. Lookup is exact: no case
/// folding, no subtag handling.
pub fn get(tag: &str) -> Option<&'static LanguageInfo> {
    entry(tag).map(|(_, info)| info)
}

/// Look up the canonical `'static` tag and descriptor for a locale tag.
pub fn entry(tag: &str) -> Option<(&'static str, &'static LanguageInfo)> {
    LANGUAGES
        .binary_search_by_key(&tag, |(t, _)| t)
        .ok()
        .map(|idx| (LANGUAGES[idx].0, &LANGUAGES[idx].1))
}

/// Whether a tag is a key of the descriptor table.
pub fn is_supported(tag: &str) -> bool {
    get(tag).is_some()
}

/// All supported tags, in sorted order.
pub fn tags() -> impl Iterator<Item = &'static str> {
    LANGUAGES.iter().map(|(tag, _)| *tag)
}

/// All (tag, descriptor) pairs, in sorted tag order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static LanguageInfo)> {
    LANGUAGES.iter().map(|(tag, info)| (*tag, info))
}
