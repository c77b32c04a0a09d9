// src/render.rs
//! Markdown to HTML, the body format Ghost accepts with `source=html`.

use crate::error::AppError;
use pulldown_cmark::{html, Options, Parser};

/// Which CommonMark extensions the renderer enables.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub tables: bool,
    pub footnotes: bool,
    pub strikethrough: bool,
    pub task_lists: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
        }
    }
}

impl RenderOptions {
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        opts
    }
}

/// Renders the (already rewritten) Markdown body to HTML.
pub fn render_html(markdown: &str, options: &RenderOptions) -> Result<String, AppError> {
    let parser = Parser::new_ext(markdown, options.to_pulldown_options());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::write_html_fmt(&mut out, parser)?;
    log::debug!("Rendered {} bytes of Markdown into {} bytes of HTML", markdown.len(), out.len());
    Ok(out)
}
