//! Implementation of the `locboot check` command.
//!
//! Compares local `{tag}.json` string-table files against a source file and
//! reports key coverage per language.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::Args;
use locboot::StringTable;
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::{format_coverage_table, JsonDiagnostic, LanguageCoverage};

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Source string-table file (e.g. en.json).
    #[arg(long)]
    pub source: PathBuf,

    /// Languages to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Directory containing translation files. Defaults to source file directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
    extra: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let source_table = load_table(&args.source)?;
    let source_keys = source_table.keys();
    let source_count = source_keys.len();

    // Determine base directory for translation files
    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    // Collect coverage data for each language
    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();

    for lang in &args.lang {
        let lang_file = base_dir.join(format!("{}.json", lang));

        let table = if lang_file.exists() {
            Some(load_table(&lang_file)?)
        } else {
            None
        };

        coverage_data.push(language_coverage(lang, &source_keys, table.as_ref()));
    }

    let incomplete = coverage_data
        .iter()
        .any(|lang| !lang.missing.is_empty() || !lang.extra.is_empty());

    if args.json {
        let entries: Vec<CoverageJson> = coverage_data
            .into_iter()
            .map(|lang| CoverageJson {
                language: lang.language,
                translated: lang.translated,
                total: source_count,
                missing: lang.missing,
                extra: lang.extra,
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries)
                .map_err(|e| miette!("Failed to serialize output: {}", e))?
        );
    } else {
        println!("{}", format_coverage_table(source_count, &coverage_data));
    }

    if args.strict && incomplete {
        return Ok(exitcode::DATAERR);
    }
    Ok(exitcode::OK)
}

/// Compute coverage of one translation against the source keys.
///
/// `None` stands for a missing translation file: zero coverage, every source
/// key missing.
fn language_coverage(
    language: &str,
    source_keys: &[&str],
    table: Option<&StringTable>,
) -> LanguageCoverage {
    let (translated, missing, extra) = match table {
        Some(table) => {
            let translated = source_keys
                .iter()
                .filter(|key| table.get(key).is_some())
                .count();
            let missing: Vec<String> = source_keys
                .iter()
                .filter(|key| table.get(key).is_none())
                .map(|key| (*key).to_owned())
                .collect();
            let extra: Vec<String> = table
                .keys()
                .into_iter()
                .filter(|key| !source_keys.contains(key))
                .map(str::to_owned)
                .collect();
            (translated, missing, extra)
        }
        None => {
            let missing = source_keys.iter().map(|key| (*key).to_owned()).collect();
            (0, missing, Vec::new())
        }
    };

    LanguageCoverage { language: language.to_owned(), translated, missing, extra }
}

/// Read and decode one string-table file, with a source-annotated diagnostic
/// on decode failure.
fn load_table(path: &Path) -> Result<StringTable> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read string table {:?}: {}", path, e))?;

    StringTable::decode(content.as_bytes())
        .map_err(|e| JsonDiagnostic::from_json_error(path, &content, &e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn full_coverage_has_no_missing_keys() {
        let table = StringTable::decode(br#"{"a": "1", "b": "2"}"#).unwrap();
        let coverage = language_coverage("de", &["a", "b"], Some(&table));
        assert_eq!(coverage.translated, 2);
        assert!(coverage.missing.is_empty());
        assert!(coverage.extra.is_empty());
    }

    #[test]
    fn missing_and_extra_keys_are_reported() {
        let table = StringTable::decode(br#"{"a": "1", "z": "9"}"#).unwrap();
        let coverage = language_coverage("fr", &["a", "b"], Some(&table));
        assert_eq!(coverage.translated, 1);
        assert_eq!(coverage.missing, vec!["b"]);
        assert_eq!(coverage.extra, vec!["z"]);
    }

    #[test]
    fn absent_file_means_zero_coverage() {
        let coverage = language_coverage("sr", &["a", "b"], None);
        assert_eq!(coverage.translated, 0);
        assert_eq!(coverage.missing, vec!["a", "b"]);
    }

    #[test]
    fn load_table_reads_and_decodes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("en.json");
        fs::write(&path, br#"{"loginTitle": "Login"}"#).unwrap();

        let table = load_table(&path).unwrap();
        assert_eq!(table.get("loginTitle"), Some("Login"));
    }

    #[test]
    fn load_table_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, br#"{"count": 3}"#).unwrap();

        assert!(load_table(&path).is_err());
    }
}
