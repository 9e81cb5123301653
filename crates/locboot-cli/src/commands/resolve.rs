//! Implementation of the `locboot resolve` command.

use clap::Args;
use locboot::{closest_tag, languages, resolve, ResolutionSource};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Explicit locale override (the `locale` query parameter)
    #[arg(long)]
    pub locale: Option<String>,

    /// Browser-reported language (e.g. pt-BR)
    #[arg(long)]
    pub browser_language: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for resolve results.
#[derive(Serialize)]
struct ResolveJson<'a> {
    tag: &'a str,
    source: &'a str,
    name: &'a str,
    framework_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a str>,
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> miette::Result<i32> {
    let resolution = resolve(args.locale.as_deref(), args.browser_language.as_deref());

    // An override that fell through to the default deserves a hint.
    let suggestion = args
        .locale
        .as_deref()
        .filter(|tag| !languages::is_supported(tag))
        .and_then(closest_tag);

    let source = match resolution.source {
        ResolutionSource::Override => "override",
        ResolutionSource::BrowserLanguage => "browser-language",
        ResolutionSource::Default => "default",
    };

    if args.json {
        let json = ResolveJson {
            tag: resolution.tag,
            source,
            name: resolution.info.name,
            framework_code: resolution.info.framework_code,
            suggestion,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&json)
                .map_err(|e| miette::miette!("Failed to serialize output: {}", e))?
        );
    } else {
        println!(
            "{} {} ({}, via {})",
            "resolved:".bold(),
            resolution.tag.green(),
            resolution.info.name,
            source
        );
        println!("framework code: {}", resolution.info.framework_code);
        if let Some(suggestion) = suggestion {
            println!(
                "{} unknown locale {:?}, did you mean {:?}?",
                "note:".yellow().bold(),
                args.locale.as_deref().unwrap_or_default(),
                suggestion
            );
        }
    }

    Ok(exitcode::OK)
}
