mod config;
mod page;

pub use config::{AppConfig, BackgroundConfig, CardConfig, HeroConfig, NoticeConfig, SiteConfig};
pub use page::{CardMedia, PageModel, PreparedImage, SectionCard};
