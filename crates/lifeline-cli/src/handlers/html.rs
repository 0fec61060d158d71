use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_card, present_html_written};
use crate::presentation::views::HtmlPageView;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Context, Result};
use lifeline_core::expand_tilde;
use std::io::Write;

pub fn handle(ctx: &ExecutionContext, output: Option<String>) -> Result<()> {
    let (session, _) = ctx.open_session()?;
    let page = HtmlPageView::new(&present_card(&session)).to_string();

    let Some(output) = output else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(page.as_bytes())?;
        out.flush()?;
        return Ok(());
    };

    let path = expand_tilde(&output);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&path, page)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "html page written");

    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(present_html_written(&path))
}
