use std::path::Path;

use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::render::backend::FrameRGBA;

/// Write `frame` as an RGBA PNG at `path`, replacing any existing file.
///
/// The parent directory must already exist.
#[tracing::instrument(skip(frame), fields(path = %path.display(), width = frame.width, height = frame.height))]
pub fn write_png(frame: &FrameRGBA, path: &Path) -> CardResult<()> {
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(4);
    if frame.data.len() != expected {
        return Err(CardError::output(format!(
            "frame buffer is {} bytes, expected {expected}",
            frame.data.len()
        )));
    }

    let mut straight = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut straight);
    }

    image::save_buffer_with_format(
        path,
        &straight,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| CardError::output(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../tests/unit/output.rs"]
mod tests;
