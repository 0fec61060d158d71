use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let ctx = ExecutionContext::new(cli.data_dir, cli.card, cli.dial.into(), cli.format)?;
    tracing::debug!(data_dir = %ctx.data_dir().display(), "resolved data directory");

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => handlers::show::handle(&ctx),

        Commands::Html { output } => handlers::html::handle(&ctx, output),

        Commands::Print => handlers::print::handle(&ctx),

        Commands::Call { name, yes } => handlers::call::handle(&ctx, &name, yes),

        Commands::Log { limit } => handlers::log::handle(&ctx, limit),

        Commands::Touch => handlers::touch::handle(&ctx),

        Commands::Init { force } => handlers::init::handle(&ctx, force),

        Commands::Tui => handlers::tui::handle(&ctx),
    }
}
