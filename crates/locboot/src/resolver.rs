//! Locale resolution.
//!
//! Produces exactly one tag that is guaranteed to be a key of the descriptor
//! table, preferring an explicit override, then the browser-reported
//! language, then the default. Unknown input never errors: silent fallback
//! to the default is the contract.

use crate::languages::{self, DEFAULT_TAG, LanguageInfo};

/// Minimum Jaro-Winkler similarity for [`closest_tag`] to offer a match.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Where the resolved tag came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// An explicit override (query string, CLI flag) named a supported tag.
    Override,
    /// The two-character prefix of the browser-reported language matched.
    BrowserLanguage,
    /// Neither input produced a supported tag.
    Default,
}

/// The outcome of locale resolution.
///
/// `tag` is always a key of the descriptor table; `info` is its descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub tag: &'static str,
    pub info: &'static LanguageInfo,
    pub source: ResolutionSource,
}

/// Resolve the active locale tag.
///
/// Priority order:
///
/// 1. The override, used **unmodified**. Region-qualified tags like `pt_BR`
///    are reachable only this way.
/// 2. The first two characters of the browser-reported language. `pt-BR`
///    therefore resolves to `pt`, never `pt_BR`; this mirrors the original
///    frontend's truncation rule exactly.
/// 3. [`DEFAULT_TAG`] when the candidate is not in the descriptor table or
///    both inputs are absent.
///
/// An override that is present but unsupported (including the empty string
/// from `?locale=`) falls through to the default rather than consulting the
/// browser language, matching the original's behavior.
///
/// # Example
///
/// ```
/// use locboot::resolver::{resolve, ResolutionSource};
///
/// let resolution = resolve(None, Some("pt-BR"));
/// assert_eq!(resolution.tag, "pt");
/// assert_eq!(resolution.source, ResolutionSource::BrowserLanguage);
/// ```
pub fn resolve(override_tag: Option<&str>, browser_language: Option<&str>) -> Resolution {
    let (candidate, source) = match (override_tag, browser_language) {
        (Some(tag), _) => (tag.to_owned(), ResolutionSource::Override),
        (None, Some(lang)) => (truncate_tag(lang), ResolutionSource::BrowserLanguage),
        (None, None) => (DEFAULT_TAG.to_owned(), ResolutionSource::Default),
    };

    if let Some((tag, info)) = languages::entry(&candidate) {
        tracing::debug!(tag, ?source, "locale resolved");
        return Resolution { tag, info, source };
    }

    tracing::debug!(candidate = %candidate, "unsupported locale candidate, using default");
    let (tag, info) = languages::entry(DEFAULT_TAG).expect("default tag is in the table");
    Resolution { tag, info, source: ResolutionSource::Default }
}

/// Truncate a browser-reported language to its two-character candidate.
///
/// This is a literal character-count rule, not BCP-47 subtag handling. When
/// the truncation bypasses a descriptor key that would have matched the full
/// tag (browser language `pt-BR` while `pt_BR` is in the table), a warning
/// is emitted so the quirk stays observable.
fn truncate_tag(language: &str) -> String {
    let prefix: String = language.chars().take(2).collect();
    let normalized = language.replace('-', "_");
    if normalized != prefix && languages::is_supported(&normalized) {
        tracing::warn!(
            language,
            prefix = %prefix,
            bypassed = %normalized,
            "truncation bypassed an exact descriptor key"
        );
    }
    prefix
}

/// Suggest the supported tag most similar to an unrecognized input.
///
/// Diagnostic aid for tooling; resolution itself never consults this.
/// Returns `None` when nothing clears the similarity threshold.
pub fn closest_tag(input: &str) -> Option<&'static str> {
    languages::tags()
        .map(|tag| (tag, strsim::jaro_winkler(input, tag)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(tag, _)| tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_uses_characters_not_bytes() {
        // Two-character input stays intact even when multibyte.
        assert_eq!(truncate_tag("日本語"), "日本");
    }

    #[test]
    fn short_language_is_kept_whole() {
        assert_eq!(truncate_tag("d"), "d");
    }

    #[test]
    fn closest_tag_suggests_near_miss() {
        assert_eq!(closest_tag("pt-BR"), Some("pt_BR"));
    }

    #[test]
    fn closest_tag_rejects_garbage() {
        assert_eq!(closest_tag("qqqqq"), None);
    }
}
