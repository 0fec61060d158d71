use crate::context::ExecutionContext;
use crate::presentation::presenters::present_init;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use lifeline_runtime::CardConfig;

pub fn handle(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let card_path = CardConfig::default_path(ctx.data_dir());

    let written = CardConfig::write_template(&card_path, force)?;
    if written {
        tracing::info!(path = %card_path.display(), "card data written");
    }

    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(present_init(&card_path, written))
}
