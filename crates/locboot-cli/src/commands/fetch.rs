//! Implementation of the `locboot fetch` command.

use clap::Args;
use locboot::{closest_tag, languages, HttpAssets, LocaleAssets};
use miette::IntoDiagnostic;
use tokio::runtime::Runtime;

/// Arguments for the fetch command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Locale tag to fetch the string table for (e.g. de, pt_BR)
    #[arg(long)]
    pub tag: String,

    /// Base URL the `/l10n/{tag}.json` path is resolved against
    #[arg(long, env = "LOCBOOT_BASE_URL")]
    pub base_url: String,

    /// Output the decoded table as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the fetch command.
pub fn run_fetch(args: FetchArgs) -> miette::Result<i32> {
    if !languages::is_supported(&args.tag) {
        let hint = match closest_tag(&args.tag) {
            Some(suggestion) => format!(", did you mean {:?}?", suggestion),
            None => String::new(),
        };
        return Err(miette::miette!(
            "unknown locale tag {:?}{}",
            args.tag,
            hint
        ));
    }

    let assets = HttpAssets::new(&args.base_url).into_diagnostic()?;
    let url = assets.strings_url(&args.tag);

    let runtime = Runtime::new().into_diagnostic()?;
    let table = runtime
        .block_on(assets.fetch_strings(&args.tag))
        .into_diagnostic()?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&table)
                .map_err(|e| miette::miette!("Failed to serialize output: {}", e))?
        );
    } else {
        println!("{}: {} strings", url, table.len());
        for key in table.keys() {
            println!("  {}", key);
        }
    }

    Ok(exitcode::OK)
}
