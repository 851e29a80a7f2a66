use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::path::{Path, PathBuf};

/// Full-viewport background: an image path plus an optional dark overlay
/// for foreground text contrast. Read once per render.
#[derive(Debug, Clone)]
pub struct BackgroundSpec {
    pub path: PathBuf,
    pub overlay: bool,
    /// Overlay alpha; only meaningful when `overlay` is set
    pub overlay_opacity: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum BackgroundError {
    #[error("Background image not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the body `background:` rule for the given spec.
///
/// Pure configuration-to-descriptor: the caller applies the result exactly
/// once at render entry. The image bytes are inlined raw (no resize) so the
/// rule works without a second fetch. A missing file is an error the caller
/// turns into one warning, leaving the default background in place.
pub fn background_css(spec: &BackgroundSpec) -> Result<String, BackgroundError> {
    if !spec.path.exists() {
        return Err(BackgroundError::NotFound(spec.path.clone()));
    }

    let bytes = std::fs::read(&spec.path)?;
    let payload = BASE64.encode(&bytes);
    let mime = mime_for_path(&spec.path);

    // Two equal stops make a uniform darkening layer between page and image
    let opacity = spec.overlay_opacity.clamp(0.0, 1.0);
    let gradient = if spec.overlay {
        format!("linear-gradient(rgba(0,0,0,{opacity}), rgba(0,0,0,{opacity})), ")
    } else {
        String::new()
    };

    Ok(format!(
        "background: {gradient}url(\"data:{mime};base64,{payload}\") center/cover no-repeat fixed;"
    ))
}

fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::TempDir;

    fn spec(path: PathBuf, overlay: bool, opacity: f32) -> BackgroundSpec {
        BackgroundSpec {
            path,
            overlay,
            overlay_opacity: opacity,
        }
    }

    fn write_jpeg(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("bg.jpg");
        RgbImage::from_pixel(32, 32, image::Rgb([40, 80, 60]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = background_css(&spec(PathBuf::from("missing.jpg"), true, 0.45));
        match result {
            Err(BackgroundError::NotFound(p)) => assert_eq!(p, PathBuf::from("missing.jpg")),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_css_with_overlay() {
        let dir = TempDir::new().unwrap();
        let css = background_css(&spec(write_jpeg(&dir), true, 0.45)).unwrap();

        assert!(css.starts_with("background: linear-gradient(rgba(0,0,0,0.45), rgba(0,0,0,0.45)), "));
        assert!(css.contains("url(\"data:image/jpeg;base64,"));
        assert!(css.ends_with("center/cover no-repeat fixed;"));
    }

    #[test]
    fn test_css_without_overlay() {
        let dir = TempDir::new().unwrap();
        let css = background_css(&spec(write_jpeg(&dir), false, 0.45)).unwrap();

        assert!(!css.contains("linear-gradient"));
        assert!(css.starts_with("background: url(\"data:image/jpeg;base64,"));
    }

    #[test]
    fn test_overlay_opacity_is_clamped() {
        let dir = TempDir::new().unwrap();
        let path = write_jpeg(&dir);

        let css = background_css(&spec(path.clone(), true, 1.5)).unwrap();
        assert!(css.contains("rgba(0,0,0,1)"));

        let css = background_css(&spec(path, true, -0.2)).unwrap();
        assert!(css.contains("rgba(0,0,0,0)"));
    }

    #[test]
    fn test_mime_follows_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bg.png");
        RgbImage::from_pixel(8, 8, image::Rgb([0, 0, 0]))
            .save(&path)
            .unwrap();

        let css = background_css(&spec(path, false, 0.0)).unwrap();
        assert!(css.contains("data:image/png;base64,"));
    }
}
