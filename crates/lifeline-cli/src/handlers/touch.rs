use crate::context::ExecutionContext;
use crate::presentation::presenters::present_touch;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let (mut session, _) = ctx.open_session()?;

    let last_updated = session.refresh_timestamp()?.to_string();

    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(present_touch(&last_updated))
}
