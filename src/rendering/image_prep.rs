use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::imageops::FilterType;
use image::ImageFormat;
use std::io::Cursor;
use std::path::Path;

use crate::models::PreparedImage;
use crate::rendering::fit_within;

/// Bounding box the cards use, matching the card content area.
pub const DEFAULT_MAX_WIDTH: u32 = 400;
pub const DEFAULT_MAX_HEIGHT: u32 = 200;

#[derive(Debug, thiserror::Error)]
pub enum PrepareError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Load an image and prepare it for inline display.
///
/// Returns `Ok(None)` when the file does not exist; the caller renders the
/// text-only fallback without any diagnostic. Decode or encode failures are
/// errors the caller downgrades to an in-page warning. Either way the page
/// keeps rendering.
pub fn prepare(
    path: &Path,
    max_width: u32,
    max_height: u32,
) -> Result<Option<PreparedImage>, PrepareError> {
    if !path.exists() {
        return Ok(None);
    }

    let image = image::open(path)?;
    let (width, height) = fit_within(image.width(), image.height(), max_width, max_height);
    // Extreme aspect ratios floor to 0; the resampler needs at least 1px
    let (width, height) = (width.max(1), height.max(1));

    let resized = image.resize_exact(width, height, FilterType::Lanczos3);

    let mut png_bytes = Vec::new();
    resized.write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)?;

    let payload = BASE64.encode(&png_bytes);

    tracing::debug!(
        path = %path.display(),
        width,
        height,
        bytes = png_bytes.len(),
        "Prepared inline image"
    );

    Ok(Some(PreparedImage {
        width,
        height,
        data_uri: format!("data:image/png;base64,{payload}"),
    }))
}
