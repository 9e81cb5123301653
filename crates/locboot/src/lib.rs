//! Locale bootstrap for a web UI.
//!
//! Resolves the active UI language from an explicit override or the
//! browser-reported language, fetches the localized string table for it, and
//! retrieves the matching UI-framework locale bundle, concurrently and with
//! explicit error propagation.
//!
//! Resolution is infallible by design: unknown tags silently fall back to
//! [`languages::DEFAULT_TAG`], and the resolved tag is always a key of the
//! static descriptor table in [`languages`].

pub mod assets;
pub mod bootstrap;
pub mod error;
pub mod languages;
pub mod query;
pub mod resolver;
pub mod table;

pub use assets::{DEFAULT_CDN_BASE, HttpAssets, LocaleAssets};
pub use bootstrap::{Bootstrap, LocaleContext};
pub use error::{AssetError, BootstrapError};
pub use languages::{DEFAULT_TAG, LanguageInfo};
pub use resolver::{Resolution, ResolutionSource, closest_tag, resolve};
pub use table::StringTable;
