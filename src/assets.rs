use rust_embed::RustEmbed;
use std::borrow::Cow;

pub const CATALOG_ASSET: &str = "emoji_catalog.txt";
pub const EMOJI_FONT_ASSET: &str = "fonts/emoji.ttf";
pub const SYMBOL_FONT_ASSET: &str = "fonts/DejaVuSans.ttf";

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Asset;

pub fn get_asset_bytes(name: &str) -> Option<Cow<'static, [u8]>> {
    Asset::get(name).map(|f| f.data)
}

/// Font for card glyphs: a bundled emoji font if present, otherwise the
/// symbol font. Returns the asset name with its bytes.
pub fn card_font() -> Option<(&'static str, Cow<'static, [u8]>)> {
    [EMOJI_FONT_ASSET, SYMBOL_FONT_ASSET]
        .into_iter()
        .find_map(|name| get_asset_bytes(name).map(|bytes| (name, bytes)))
}
