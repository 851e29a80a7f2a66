use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from config.yaml
///
/// Carries the page copy and asset paths so the showcase content is data,
/// not code. Every field has a default reproducing the shipped page, and a
/// missing or malformed file falls back to those defaults with a warning.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Site-wide settings
    #[serde(default)]
    pub site: SiteConfig,

    /// Hero banner copy
    #[serde(default)]
    pub hero: HeroConfig,

    /// Full-viewport background
    #[serde(default)]
    pub background: BackgroundConfig,

    /// The media-bearing cards, in display order
    #[serde(default = "default_cards")]
    pub cards: Vec<CardConfig>,

    /// The static dependencies notice card
    #[serde(default = "default_dependencies")]
    pub dependencies: NoticeConfig,

    /// Footer attribution lines
    #[serde(default = "default_footer")]
    pub footer: Vec<String>,

    /// Directory holding the media files (relative paths resolve against it)
    #[serde(default = "default_media_dir")]
    pub media_dir: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

/// Copy for the hero banner. The pieces are plain text; the template owns
/// the markup that styles the emphasis word and the badge.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HeroConfig {
    #[serde(default = "default_hero_leading")]
    pub leading: String,
    #[serde(default = "default_hero_emphasis")]
    pub emphasis: String,
    #[serde(default = "default_hero_trailing")]
    pub trailing: String,
    #[serde(default = "default_hero_byline")]
    pub byline: String,
    #[serde(default = "default_hero_badge")]
    pub badge: String,
    #[serde(default = "default_hero_subtitle")]
    pub subtitle: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BackgroundConfig {
    /// Image file, relative to the media directory
    #[serde(default = "default_background_image")]
    pub image: PathBuf,

    /// Layer a dark gradient over the image for text contrast
    #[serde(default = "default_true")]
    pub overlay: bool,

    /// Overlay alpha, clamped to [0, 1] at render time
    #[serde(default = "default_overlay_opacity")]
    pub overlay_opacity: f32,
}

/// One grid card. At most one of `image`/`video` is meaningful; a card with
/// neither (or with the file missing) renders as its text-only variant.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CardConfig {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<PathBuf>,
    #[serde(default)]
    pub video: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NoticeConfig {
    pub title: String,
    pub description: String,
}

fn default_title() -> String {
    "Sharing the beauty of Traditional Chinese gardens.".to_string()
}

fn default_hero_leading() -> String {
    "Sharing the".to_string()
}

fn default_hero_emphasis() -> String {
    "beauty".to_string()
}

fn default_hero_trailing() -> String {
    "of Chinese gardens.".to_string()
}

fn default_hero_byline() -> String {
    "By".to_string()
}

fn default_hero_badge() -> String {
    "Multimedia".to_string()
}

fn default_hero_subtitle() -> String {
    "COMP5415 Multimedia Design and Authoring".to_string()
}

fn default_background_image() -> PathBuf {
    PathBuf::from("bg.jpg")
}

fn default_true() -> bool {
    true
}

fn default_overlay_opacity() -> f32 {
    0.45
}

fn default_media_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_cards() -> Vec<CardConfig> {
    vec![
        CardConfig {
            title: "Design Idea".to_string(),
            description: "The project aims to express the aesthetic and philosophical \
                          essence of traditional Chinese culture through the design of a \
                          classical Chinese garden. By combining natural elements such as \
                          water, rocks, trees, lotus and architecture in a harmonious \
                          composition, the project seeks to recreate the peaceful and \
                          poetic atmosphere that characterizes Chinese gardens."
                .to_string(),
            image: Some(PathBuf::from("design_idea.png")),
            video: None,
        },
        CardConfig {
            title: "Logo".to_string(),
            description: "The logo uses a silhouette to represent the structure of the \
                          pavilion, does not show specific materials or detailed \
                          construction, leaving space for imagination. The overall design \
                          remains simple and elegant."
                .to_string(),
            image: Some(PathBuf::from("logo.jpg")),
            video: None,
        },
        CardConfig {
            title: "Poster".to_string(),
            description: "Showing the main components in the traditional Chinese garden. \
                          Vintage fonts convey a sense of long-standing history."
                .to_string(),
            image: Some(PathBuf::from("poster.png")),
            video: None,
        },
        CardConfig {
            title: "3D model and animation video".to_string(),
            description: "Present the main outcomes through multimedia approaches in a \
                          video: 3D models, animation, and audio."
                .to_string(),
            image: None,
            video: Some(PathBuf::from("0001-1200.mp4")),
        },
    ]
}

fn default_dependencies() -> NoticeConfig {
    NoticeConfig {
        title: "Dependencies".to_string(),
        description: "Make sure you got the project folder and do not modify the file \
                      structure."
            .to_string(),
    }
}

fn default_footer() -> Vec<String> {
    vec![
        "Webpage developed by Yuqi Dong.".to_string(),
        "Background image source: wallpaperaccess".to_string(),
    ]
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing or unparseable file logs a warning and falls back to the
    /// built-in defaults; configuration problems never stop the server.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        cards = config.cards.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig {
                title: default_title(),
            },
            hero: HeroConfig {
                leading: default_hero_leading(),
                emphasis: default_hero_emphasis(),
                trailing: default_hero_trailing(),
                byline: default_hero_byline(),
                badge: default_hero_badge(),
                subtitle: default_hero_subtitle(),
            },
            background: BackgroundConfig::default(),
            cards: default_cards(),
            dependencies: default_dependencies(),
            footer: default_footer(),
            media_dir: default_media_dir(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            leading: default_hero_leading(),
            emphasis: default_hero_emphasis(),
            trailing: default_hero_trailing(),
            byline: default_hero_byline(),
            badge: default_hero_badge(),
            subtitle: default_hero_subtitle(),
        }
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            image: default_background_image(),
            overlay: default_true(),
            overlay_opacity: default_overlay_opacity(),
        }
    }
}
