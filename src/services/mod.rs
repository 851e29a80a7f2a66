mod page_builder;
mod template_service;

pub use page_builder::{PageBuilder, RenderedPage};
pub use template_service::TemplateService;
