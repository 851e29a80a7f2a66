use serde::Serialize;

use crate::models::{HeroConfig, NoticeConfig};

/// An image prepared for inline display: resized to fit a bounding box and
/// re-encoded as a PNG data URI. Built fresh on every render, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct PreparedImage {
    /// Output width, aspect-preserving and within the requested box
    pub width: u32,
    /// Output height, aspect-preserving and within the requested box
    pub height: u32,
    /// `data:image/png;base64,...` payload for direct embedding
    pub data_uri: String,
}

/// Media slot of a card: inlined image, path-referenced video, or nothing.
///
/// Selected once per card per render. `None` makes the card render its
/// text-only variant; a missing asset never produces an error state.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardMedia {
    Image {
        #[serde(flatten)]
        image: PreparedImage,
    },
    Video {
        src: String,
    },
    None,
}

impl CardMedia {
    pub fn is_none(&self) -> bool {
        matches!(self, CardMedia::None)
    }
}

/// A display card pairing optional media with a title and description.
#[derive(Debug, Clone, Serialize)]
pub struct SectionCard {
    pub title: String,
    pub description: String,
    pub media: CardMedia,
}

/// Everything the page template needs, assembled once per render.
/// Doubles as the Tera context via `Serialize`.
#[derive(Debug, Serialize)]
pub struct PageModel {
    pub title: String,
    /// Complete `background: ...;` rule for the body, absent when the
    /// background image is unavailable
    pub background_css: Option<String>,
    /// Per-asset diagnostics surfaced in the page notice strip
    pub warnings: Vec<String>,
    pub hero: HeroConfig,
    pub cards: Vec<SectionCard>,
    pub dependencies: NoticeConfig,
    pub footer: Vec<String>,
}
