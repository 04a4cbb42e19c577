use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css`, or an empty sheet if missing.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

/// Raw bytes of a bundled sample page, e.g. `pickupDate-1.json`.
pub fn sample_page(name: &str) -> Option<Cow<'static, [u8]>> {
    EmbeddedAssets::get(&format!("sample-data/{name}")).map(|file| file.data)
}

fn load_text(path: &str) -> String {
    EmbeddedAssets::get(path)
        .and_then(|file| String::from_utf8(file.data.into_owned()).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_is_bundled() {
        assert!(main_css().contains(".shipping-card"));
    }

    #[test]
    fn unknown_sample_page_is_none() {
        assert!(sample_page("weight-1.json").is_none());
        assert!(sample_page("origin-1.json").is_some());
    }
}
