//! Implementation of the `locboot languages` command.

use clap::Args;
use locboot::languages;
use serde::Serialize;

use crate::output::format_languages_table;

/// Arguments for the languages command.
#[derive(Debug, Args)]
pub struct LanguagesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one language entry.
#[derive(Serialize)]
struct LanguageJson {
    tag: &'static str,
    name: &'static str,
    framework_code: &'static str,
}

/// Run the languages command.
pub fn run_languages(args: LanguagesArgs) -> miette::Result<i32> {
    if args.json {
        let entries: Vec<LanguageJson> = languages::all()
            .map(|(tag, info)| LanguageJson {
                tag,
                name: info.name,
                framework_code: info.framework_code,
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries)
                .map_err(|e| miette::miette!("Failed to serialize output: {}", e))?
        );
    } else {
        println!("{}", format_languages_table());
    }

    Ok(exitcode::OK)
}
