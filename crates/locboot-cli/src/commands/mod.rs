//! CLI command implementations.

mod check;
mod fetch;
mod languages;
mod resolve;

pub use check::{run_check, CheckArgs};
pub use fetch::{run_fetch, FetchArgs};
pub use languages::{run_languages, LanguagesArgs};
pub use resolve::{run_resolve, ResolveArgs};
