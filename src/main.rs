//! CLI entry point for artsy.

mod cli;

use artsy::clipboard::SystemClipboard;
use artsy::preflight;
use artsy::session::Session;
use artsy::tui::{settings, Renderer};
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::Args::parse();

    // Silent unless RUST_LOG asks for output; diagnostics go to stderr so
    // they never interleave with panels on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if !io::stdout().is_terminal() {
        eprintln!("{}", settings::MSG_NOT_A_TERMINAL);
        std::process::exit(1);
    }

    let color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
    let renderer = Renderer::new(color);

    let figlet = match preflight::renderer_ready() {
        Ok(figlet) => figlet,
        Err(msg) => {
            renderer.error(&msg);
            std::process::exit(1);
        }
    };
    for warning in preflight::advisory_warnings(&figlet) {
        renderer.warning(&warning);
    }

    // One interrupt handler for the whole session: cancellation is a
    // graceful termination, distinct from an error.
    if let Err(e) = ctrlc::set_handler(move || {
        Renderer::new(color).cancelled();
        std::process::exit(0);
    }) {
        renderer.warning(&format!("Could not install the interrupt handler: {e}"));
    }

    let mut session = Session::new(figlet, SystemClipboard::new(), io::stdin().lock(), renderer);
    if let Err(e) = session.run() {
        tracing::debug!(error = %e, "session aborted");
        Renderer::new(color).error(&format!("Something went wrong: {e}"));
        std::process::exit(1);
    }
}
