//! Image preparation and background compositing.
//!
//! The fit arithmetic is kept as pure functions so the dimension contract
//! can be tested without touching the filesystem or an encoder.

mod background;
mod fit;
mod image_prep;

pub use background::{background_css, BackgroundError, BackgroundSpec};
pub use fit::fit_within;
pub use image_prep::{prepare, PrepareError, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
