use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_call_cancelled, present_call_placed};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{bail, Context, Result};
use lifeline_core::format_phone_number;
use lifeline_types::PendingCall;
use std::io::{self, Write};

pub fn handle(ctx: &ExecutionContext, name: &str, yes: bool) -> Result<()> {
    let (mut session, _) = ctx.open_session()?;

    if !session.request_call_by_name(name) {
        let known: Vec<String> = session
            .card()
            .call_targets()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        bail!(
            "No contact or service named '{}' (known: {})",
            name,
            known.join(", ")
        );
    }

    let pending = session
        .pending_call()
        .cloned()
        .context("Call request was not registered")?;

    let renderer = ConsoleRenderer::new(ctx.format);

    if !(yes || prompt_confirm(&pending)?) {
        session.cancel_call();
        return renderer.render(present_call_cancelled(&pending));
    }

    match session.confirm_call()? {
        Some(entry) => renderer.render(present_call_placed(&pending, &entry)),
        None => Ok(()),
    }
}

fn prompt_confirm(pending: &PendingCall) -> Result<bool> {
    let mut stderr = io::stderr();
    write!(
        stderr,
        "Call {} at {}? [y/N] ",
        pending.display_name,
        format_phone_number(&pending.phone)
    )?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes("  YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
