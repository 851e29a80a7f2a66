use tera::{Context, Tera};

use crate::error::PageError;
use crate::models::PageModel;

/// The page template, compiled into the binary.
const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

const PAGE_TEMPLATE_NAME: &str = "page.html";

/// Service for rendering the page template with Tera
pub struct TemplateService {
    tera: Tera,
}

impl TemplateService {
    pub fn new() -> Result<Self, PageError> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Render the complete page document
    pub fn render(&self, page: &PageModel) -> Result<String, PageError> {
        let context = Context::from_serialize(page)?;
        let html = self.tera.render(PAGE_TEMPLATE_NAME, &context)?;
        Ok(html)
    }
}
