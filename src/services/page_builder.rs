use std::path::PathBuf;
use std::sync::Arc;

use crate::error::PageError;
use crate::models::{AppConfig, CardConfig, CardMedia, PageModel, SectionCard};
use crate::rendering::{
    background_css, prepare, BackgroundSpec, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH,
};
use crate::services::TemplateService;

/// A fully rendered page plus the per-asset diagnostics raised while
/// building it (also embedded in the page's notice strip).
pub struct RenderedPage {
    pub html: String,
    pub warnings: Vec<String>,
}

/// Assembles the page: background CSS, hero copy, the card grid, and the
/// footer, then renders the template.
///
/// Each render re-reads every asset from disk; nothing is cached between
/// requests. A missing or broken asset degrades that one slot and never
/// fails the page.
pub struct PageBuilder {
    config: Arc<AppConfig>,
    media_dir: PathBuf,
    /// Prefix for path-referenced media in the emitted markup: `/media`
    /// when serving, the media directory itself for offline renders
    media_base: String,
    templates: TemplateService,
}

impl PageBuilder {
    pub fn new(
        config: Arc<AppConfig>,
        media_dir: PathBuf,
        media_base: impl Into<String>,
    ) -> Result<Self, PageError> {
        Ok(Self {
            config,
            media_dir,
            media_base: media_base.into(),
            templates: TemplateService::new()?,
        })
    }

    /// Build and render the complete page document.
    pub fn render_page(&self) -> Result<RenderedPage, PageError> {
        let mut warnings = Vec::new();

        let background = self.build_background(&mut warnings);
        let cards = self
            .config
            .cards
            .iter()
            .map(|card| self.build_card(card, &mut warnings))
            .collect();

        let page = PageModel {
            title: self.config.site.title.clone(),
            background_css: background,
            warnings,
            hero: self.config.hero.clone(),
            cards,
            dependencies: self.config.dependencies.clone(),
            footer: self.config.footer.clone(),
        };

        tracing::debug!(
            cards = page.cards.len(),
            warnings = page.warnings.len(),
            background = page.background_css.is_some(),
            "Page assembled"
        );

        let html = self.templates.render(&page)?;
        Ok(RenderedPage {
            html,
            warnings: page.warnings,
        })
    }

    fn build_background(&self, warnings: &mut Vec<String>) -> Option<String> {
        let spec = BackgroundSpec {
            path: self.media_dir.join(&self.config.background.image),
            overlay: self.config.background.overlay,
            overlay_opacity: self.config.background.overlay_opacity,
        };

        match background_css(&spec) {
            Ok(css) => Some(css),
            Err(e) => {
                tracing::warn!(%e, "Rendering without background");
                warnings.push(e.to_string());
                None
            }
        }
    }

    fn build_card(&self, card: &CardConfig, warnings: &mut Vec<String>) -> SectionCard {
        let media = if let Some(ref image) = card.image {
            let path = self.media_dir.join(image);
            match prepare(&path, DEFAULT_MAX_WIDTH, DEFAULT_MAX_HEIGHT) {
                Ok(Some(prepared)) => CardMedia::Image { image: prepared },
                // Missing file: silent text-only fallback
                Ok(None) => CardMedia::None,
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Card image unavailable");
                    warnings.push(format!("Error loading image {}: {e}", path.display()));
                    CardMedia::None
                }
            }
        } else if let Some(ref video) = card.video {
            // Videos are referenced by path, not inlined: existence check
            // only, and absence is not warned about
            if self.media_dir.join(video).exists() {
                CardMedia::Video {
                    src: format!(
                        "{}/{}",
                        self.media_base.trim_end_matches('/'),
                        video.display()
                    ),
                }
            } else {
                CardMedia::None
            }
        } else {
            CardMedia::None
        };

        SectionCard {
            title: card.title.clone(),
            description: card.description.clone(),
            media,
        }
    }
}
