//! CLI output helpers.

mod diagnostic;
mod table;

pub use diagnostic::JsonDiagnostic;
pub use table::{format_coverage_table, format_languages_table, LanguageCoverage};
