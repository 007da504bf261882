//! Daycare CLI - roster, billing and calendar views for a daycare business
//!
//! This is the command-line interface for Daycare. It lists and filters the
//! records of the core library and renders them as tables or JSON.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use std::io::IsTerminal;

use clap::Parser;
use daycare_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{billing, calendar, misc, notifications, roster};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, std::io::stderr().is_terminal() && !cli.no_color);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.error_ui_context();

        let error_msg = format!("{}", e);
        let (message, hint) = split_error_hint(&error_msg);

        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Split an error message at its "Hint:" line, if it has one.
fn split_error_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => (&error[..idx], Some(error[idx + "\nHint:".len()..].trim())),
        None => (error, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Expenses(args)) => {
            billing::handle_expenses(ctx, args)?;
        }
        Some(Commands::Categories(args)) => {
            billing::handle_categories(ctx, args)?;
        }
        Some(Commands::Invoices(args)) => {
            billing::handle_invoices(ctx, args)?;
        }
        Some(Commands::Children(args)) => {
            roster::handle_children(ctx, args)?;
        }
        Some(Commands::Teachers(args)) => {
            roster::handle_teachers(ctx, args)?;
        }
        Some(Commands::Events(args)) => {
            calendar::handle_events(ctx, args)?;
        }
        Some(Commands::Notifications(args)) => {
            notifications::handle_notifications(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Daycare v{}", VERSION);
            println!("\nQuickstart:");
            println!("  daycare expenses --category food");
            println!("  daycare invoices --status overdue");
            println!("  daycare children --group toddlers");
            println!("  daycare events --month 2024-06");
            println!("\nRun `daycare --help` for full usage.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_error_hint() {
        assert_eq!(
            split_error_hint("Dataset not found: x.json\nHint: Check --data."),
            ("Dataset not found: x.json", Some("Check --data."))
        );
        assert_eq!(split_error_hint("boom"), ("boom", None));
    }
}
