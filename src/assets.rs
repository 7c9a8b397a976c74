//! Embedded assets for Mono UI
//!
//! Icons come from `gpui-component-assets`; the component usage listings
//! shown on documentation pages are embedded from `snippets/`.

use gpui::{AssetSource, Result, SharedString};
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Prefix under which snippets are exposed through [`AssetSource`]
const SNIPPET_PREFIX: &str = "snippets/";

/// Usage listings embedded from the `snippets` directory
#[derive(RustEmbed)]
#[folder = "snippets"]
pub struct Snippets;

impl Snippets {
    /// Source text of a listing, e.g. `switch.rs`
    pub fn source(name: &str) -> Option<String> {
        let file = Self::get(name)?;
        match String::from_utf8(file.data.into_owned()) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::error!(error = %e, name, "Snippet is not valid UTF-8");
                None
            }
        }
    }
}

/// Asset source layering the snippets over the component library assets
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then our own listings
        path.strip_prefix(SNIPPET_PREFIX)
            .and_then(Snippets::get)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            Snippets::iter()
                .map(|p| format!("{SNIPPET_PREFIX}{p}"))
                .filter(|p| p.starts_with(path))
                .map(SharedString::from),
        );

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::navigation::DocPage;

    #[test]
    fn test_every_page_snippet_is_embedded() {
        for page in DocPage::all() {
            if let Some(name) = page.snippet() {
                let source = Snippets::source(name);
                assert!(source.is_some_and(|s| !s.trim().is_empty()), "missing snippet {name}");
            }
        }
    }

    #[test]
    fn test_snippets_listed_under_prefix() {
        let files = Assets.list("snippets/").expect("list");
        assert!(files.iter().any(|f| &***f == "snippets/switch.rs"));
    }
}
