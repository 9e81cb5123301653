//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use locboot::languages;

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Locale tag (e.g. "de", "fr").
    pub language: String,
    /// Number of source keys present in the translation.
    pub translated: usize,
    /// Source keys absent from the translation.
    pub missing: Vec<String>,
    /// Translation keys absent from the source.
    pub extra: Vec<String>,
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(source_count: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing", "Extra"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, source_count),
            lang.missing.len().to_string(),
            lang.extra.len().to_string(),
        ]);
    }

    table
}

/// Format the supported-language descriptor table.
pub fn format_languages_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Tag", "Name", "Framework code"]);

    for (tag, info) in languages::all() {
        table.add_row(vec![tag, info.name, info.framework_code]);
    }

    table
}
