use crate::context::ExecutionContext;
use crate::presentation::formatters::export::write_call_log;
use crate::presentation::presenters::present_call_log;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, limit: Option<usize>) -> Result<()> {
    let (session, _) = ctx.open_session()?;

    let view_model = present_call_log(session.call_log(), limit);

    if ctx.format == OutputFormat::Csv {
        let stdout = std::io::stdout();
        return write_call_log(stdout.lock(), &view_model.content.entries);
    }

    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(view_model)
}
