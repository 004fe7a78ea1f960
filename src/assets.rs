use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::imageops::FilterType;

use crate::foundation::config::AssetPaths;
use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::premultiply_rgba8_in_place;

/// Edge length logos are resized to before pasting.
pub const LOGO_SIZE_PX: u32 = 150;

/// Decoded raster in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Logo file stem for a team: lowercase, spaces replaced with underscores.
///
/// `"Royal Challengers Bengaluru"` becomes `"royal_challengers_bengaluru"`.
pub fn normalize_team_name(team: &str) -> String {
    team.to_lowercase().replace(' ', "_")
}

/// Where the logo for `team` would live.
pub fn logo_path(assets: &AssetPaths, team: &str) -> PathBuf {
    assets
        .logo_dir
        .join(format!("{}.png", normalize_team_name(team)))
}

/// The logo path for `team` if such a file exists.
pub fn find_logo(assets: &AssetPaths, team: &str) -> Option<PathBuf> {
    let path = logo_path(assets, team);
    if path.is_file() {
        Some(path)
    } else {
        tracing::debug!(team, path = %path.display(), "no logo for team");
        None
    }
}

fn read_bytes(path: &Path, what: &str) -> CardResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| CardError::asset(format!("failed to read {what} '{}': {e}", path.display())))
}

/// Read the card font.
pub fn load_font(path: &Path) -> CardResult<Vec<u8>> {
    read_bytes(path, "font")
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> CardResult<PreparedImage> {
    let rgba = image::load_from_memory(bytes)
        .map_err(|e| CardError::asset(format!("decode image: {e}")))?
        .to_rgba8();
    Ok(prepare_rgba(rgba))
}

fn prepare_rgba(rgba: image::RgbaImage) -> PreparedImage {
    let (width, height) = rgba.dimensions();
    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);
    PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    }
}

/// Load a background template at its native size.
pub fn load_background(path: &Path) -> CardResult<PreparedImage> {
    let bytes = read_bytes(path, "background")?;
    decode_image(&bytes)
        .map_err(|e| CardError::asset(format!("background '{}': {e}", path.display())))
}

/// Load a logo and resize it to [`LOGO_SIZE_PX`] square.
///
/// Resizing happens on straight alpha, before premultiplication.
pub fn load_logo(path: &Path) -> CardResult<PreparedImage> {
    let bytes = read_bytes(path, "logo")?;
    let rgba = image::load_from_memory(&bytes)
        .map_err(|e| CardError::asset(format!("decode logo '{}': {e}", path.display())))?
        .to_rgba8();
    let resized = image::imageops::resize(&rgba, LOGO_SIZE_PX, LOGO_SIZE_PX, FilterType::CatmullRom);
    Ok(prepare_rgba(resized))
}

#[cfg(test)]
#[path = "../tests/unit/assets.rs"]
mod tests;
