use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;
use tracing::warn;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

pub const CATALOGUE_ASSET: &str = "destinations.json";

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

/// Compiled Tailwind output, generated from `input.css` and checked in under
/// `assets/`.
pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS.get_or_init(|| load_text("tailwind.css")).as_str()
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| svg_data_uri(&load_text("favicon.svg")))
        .as_str()
}

/// Raw bytes of an embedded asset, if present.
pub fn asset_bytes(path: &str) -> Option<Cow<'static, [u8]>> {
    EmbeddedAssets::get(canonical_asset_path(path)).map(|file| file.data)
}

fn load_text(path: &str) -> String {
    let Some(bytes) = asset_bytes(path) else {
        warn!("embedded asset {path} is missing");
        return String::new();
    };
    match String::from_utf8(bytes.into_owned()) {
        Ok(text) => text,
        Err(err) => {
            warn!("embedded asset {path} is not valid UTF-8: {err}");
            String::new()
        }
    }
}

fn canonical_asset_path(path: &str) -> &str {
    let trimmed = path.trim_start_matches('/');
    trimmed.strip_prefix("assets/").unwrap_or(trimmed)
}

fn svg_data_uri(svg: &str) -> String {
    let escaped = svg
        .trim()
        .replace('%', "%25")
        .replace('#', "%23")
        .replace('"', "'")
        .replace('\n', " ");
    format!("data:image/svg+xml;utf8,{escaped}")
}
