//! Startup bootstrap: resolve once, load both assets, return a context.
//!
//! Replaces the original frontend's process-wide `Locale.language` /
//! `Strings` globals with an explicit context constructed once at startup
//! and threaded through callers. The two asset loads run concurrently with
//! no ordering between them, but both are awaited and either failure fails
//! the bootstrap.

use bon::Builder;
use bytes::Bytes;

use crate::assets::LocaleAssets;
use crate::error::BootstrapError;
use crate::resolver::{Resolution, resolve};
use crate::table::StringTable;

/// Locale bootstrap configuration.
///
/// # Example
///
/// ```no_run
/// use locboot::{Bootstrap, HttpAssets};
///
/// # async fn bootstrap() -> Result<(), Box<dyn std::error::Error>> {
/// let context = Bootstrap::builder()
///     .locale_override("de")
///     .assets(HttpAssets::new("https://tracking.example.com")?)
///     .build()
///     .run()
///     .await?;
///
/// assert_eq!(context.tag(), "de");
/// # Ok(())
/// # }
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Bootstrap<A: LocaleAssets> {
    /// Explicit locale override, typically the `locale` query parameter.
    /// See [`crate::query::locale_override`].
    locale_override: Option<String>,

    /// The browser-reported language (e.g. `pt-BR`). Only its first two
    /// characters participate in resolution.
    browser_language: Option<String>,

    /// Asset transport.
    assets: A,
}

impl<A: LocaleAssets> Bootstrap<A> {
    /// Resolve the locale and load both external assets concurrently.
    pub async fn run(self) -> Result<LocaleContext, BootstrapError> {
        let resolution = resolve(
            self.locale_override.as_deref(),
            self.browser_language.as_deref(),
        );
        let code = resolution.info.framework_code;

        let (strings, framework_bundle) = tokio::try_join!(
            async {
                self.assets.fetch_strings(resolution.tag).await.map_err(|source| {
                    BootstrapError::Strings { tag: resolution.tag.to_owned(), source }
                })
            },
            async {
                self.assets.fetch_framework_bundle(code).await.map_err(|source| {
                    BootstrapError::FrameworkBundle { code: code.to_owned(), source }
                })
            },
        )?;

        Ok(LocaleContext { resolution, strings, framework_bundle })
    }
}

/// The fully loaded locale state, ready to hand to the rest of the UI.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    /// How the active locale was chosen.
    pub resolution: Resolution,
    /// Localized UI text for the active locale.
    pub strings: StringTable,
    /// Raw UI-framework locale bundle for the embedder to apply.
    pub framework_bundle: Bytes,
}

impl LocaleContext {
    /// The active locale tag. Always a key of the descriptor table.
    pub fn tag(&self) -> &'static str {
        self.resolution.tag
    }

    /// The secondary framework locale code for the active locale.
    pub fn framework_code(&self) -> &'static str {
        self.resolution.info.framework_code
    }

    /// Localized text for a key, if present in the loaded table.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.strings.get(key)
    }
}
