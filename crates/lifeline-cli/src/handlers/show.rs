use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_card, present_show};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let (session, source) = ctx.open_session()?;

    let view_model = present_show(present_card(&session), &source);

    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(view_model)
}
