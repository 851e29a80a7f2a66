//! Media fixtures: a temp directory seeded with generated assets.
//!
//! Fixture images are generated with the `image` crate rather than checked
//! in, so every test starts from a fresh, valid file.

use image::RgbImage;
use std::path::PathBuf;
use tempfile::TempDir;

use pavilion::models::AppConfig;

/// Recognizable bytes standing in for the project video; the server treats
/// video as an opaque path-referenced file, so real MP4 content is not
/// needed.
pub const FAKE_MP4: &[u8] = b"\x00\x00\x00\x18ftypmp42--pavilion-test-video--";

/// A temp project root with a media directory the tests populate.
pub struct SiteFixture {
    root: TempDir,
}

impl SiteFixture {
    /// Empty media directory: every asset is missing
    pub fn empty() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir(root.path().join("assets")).expect("Failed to create media dir");
        Self { root }
    }

    /// All five assets present
    pub fn with_all_assets() -> Self {
        let fixture = Self::empty();
        fixture.write_image("bg.jpg", 64, 48);
        fixture.write_image("design_idea.png", 320, 240);
        fixture.write_image("logo.jpg", 200, 200);
        fixture.write_image("poster.png", 300, 500);
        fixture.write_bytes("0001-1200.mp4", FAKE_MP4);
        fixture
    }

    pub fn media_dir(&self) -> PathBuf {
        self.root.path().join("assets")
    }

    /// Default configuration pointed at this fixture's media directory
    pub fn config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        config.media_dir = self.media_dir();
        config
    }

    /// Write a valid image; the format follows the file extension
    pub fn write_image(&self, name: &str, width: u32, height: u32) {
        RgbImage::from_pixel(width, height, image::Rgb([110, 150, 90]))
            .save(self.media_dir().join(name))
            .expect("Failed to write fixture image");
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) {
        std::fs::write(self.media_dir().join(name), bytes).expect("Failed to write fixture file");
    }

    pub fn remove(&self, name: &str) {
        std::fs::remove_file(self.media_dir().join(name)).expect("Failed to remove fixture file");
    }

    /// Write a file next to (not inside) the media directory, for
    /// traversal tests
    pub fn write_outside(&self, name: &str, bytes: &[u8]) {
        std::fs::write(self.root.path().join(name), bytes)
            .expect("Failed to write file outside media dir");
    }
}
