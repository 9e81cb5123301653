//! Locale asset retrieval.
//!
//! The two external resources the bootstrap needs, behind a trait so that
//! embedders can substitute their own transport (embedded assets, test
//! fakes) for the HTTP implementation.

use bytes::Bytes;
use reqwest::Client;

use crate::error::AssetError;
use crate::table::StringTable;

/// CDN base the original frontend loaded its UI-framework locale bundles
/// from.
pub const DEFAULT_CDN_BASE: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/extjs/6.0.0/classic/locale";

/// Capability to load the external locale assets for a resolved language.
///
/// The two fetches are independent; implementations must not assume one is
/// issued before the other.
pub trait LocaleAssets {
    /// Retrieve and decode the string table for a locale tag.
    fn fetch_strings(
        &self,
        tag: &str,
    ) -> impl Future<Output = Result<StringTable, AssetError>> + Send;

    /// Retrieve the UI-framework locale bundle for a secondary locale code.
    ///
    /// The original loads this resource as an executable script and observes
    /// no return contract, so the raw bytes are handed back for the embedder
    /// to interpret.
    fn fetch_framework_bundle(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<Bytes, AssetError>> + Send;
}

/// HTTP-backed asset loading.
///
/// String tables are served from `{base_url}/l10n/{tag}.json`; framework
/// bundles from `{cdn_base}/locale-{code}.js`.
#[derive(Debug, Clone)]
pub struct HttpAssets {
    client: Client,
    base_url: String,
    cdn_base: String,
}

impl HttpAssets {
    /// Create an HTTP asset loader rooted at `base_url`, with the default
    /// CDN for framework bundles.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AssetError> {
        Self::with_cdn_base(base_url, DEFAULT_CDN_BASE)
    }

    /// Create an HTTP asset loader with an explicit CDN base.
    pub fn with_cdn_base(
        base_url: impl Into<String>,
        cdn_base: impl Into<String>,
    ) -> Result<Self, AssetError> {
        let client = Client::builder()
            .user_agent(concat!("locboot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| AssetError::Client { source })?;
        Ok(Self {
            client,
            base_url: trim_base(base_url.into()),
            cdn_base: trim_base(cdn_base.into()),
        })
    }

    /// URL of the string table for a locale tag.
    pub fn strings_url(&self, tag: &str) -> String {
        format!("{}/l10n/{tag}.json", self.base_url)
    }

    /// URL of the framework locale bundle for a secondary locale code.
    pub fn bundle_url(&self, code: &str) -> String {
        format!("{}/locale-{code}.js", self.cdn_base)
    }

    /// GET a URL and return the body, treating non-success statuses as
    /// errors.
    async fn get_bytes(&self, url: &str) -> Result<Bytes, AssetError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| AssetError::Http { url: url.to_owned(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::Status { url: url.to_owned(), status: status.as_u16() });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| AssetError::Http { url: url.to_owned(), source })?;
        tracing::debug!(url, bytes = body.len(), "fetched locale asset");
        Ok(body)
    }
}

impl LocaleAssets for HttpAssets {
    async fn fetch_strings(&self, tag: &str) -> Result<StringTable, AssetError> {
        let url = self.strings_url(tag);
        let body = self.get_bytes(&url).await?;
        StringTable::decode(&body).map_err(|source| AssetError::Decode { url, source })
    }

    async fn fetch_framework_bundle(&self, code: &str) -> Result<Bytes, AssetError> {
        let url = self.bundle_url(code);
        self.get_bytes(&url).await
    }
}

/// Strip a trailing slash so URL joins stay single-slashed.
fn trim_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_url_is_derived_from_tag() {
        let assets = HttpAssets::new("https://example.com/").unwrap();
        assert_eq!(assets.strings_url("pt_BR"), "https://example.com/l10n/pt_BR.json");
    }

    #[test]
    fn bundle_url_uses_cdn_base() {
        let assets = HttpAssets::with_cdn_base("https://example.com", "https://cdn.test/locale")
            .unwrap();
        assert_eq!(assets.bundle_url("no_NB"), "https://cdn.test/locale/locale-no_NB.js");
    }
}
