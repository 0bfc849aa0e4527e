mod cli;
mod config;
mod main_lib;
mod toasts;

use clap::Parser;
use cli::Cli;
use config::Config;
use main_lib::{build_state, init_tracing};
use toasts::ToastPrinter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(&config);
    let state = build_state(&config)?;

    let printer = ToastPrinter::spawn(&state.notifications);
    let outcome = cli::run(&state, cli.command).await;

    if cli.no_wait {
        printer.finish_now().await;
    } else {
        printer.finish().await;
    }
    outcome
}
