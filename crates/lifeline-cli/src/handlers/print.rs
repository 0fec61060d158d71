use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_card, present_print};
use crate::presentation::view_models::CardViewModel;
use crate::presentation::views::HtmlPageView;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use lifeline_runtime::{DialMode, PrintDocument};

/// File name of the page handed to the print sink
pub const PRINT_FILE_NAME: &str = "card.html";

pub fn print_document(card: &CardViewModel) -> PrintDocument {
    PrintDocument {
        file_name: PRINT_FILE_NAME.to_string(),
        contents: HtmlPageView::new(card).to_string(),
    }
}

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let (session, _) = ctx.open_session()?;

    let document = print_document(&present_card(&session));
    let path = session.print(&document)?;

    let opened = ctx.dial == DialMode::Launch;
    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(present_print(path.as_deref(), opened))
}
