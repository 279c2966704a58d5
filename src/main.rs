use chessbeads::cli::commands::Cli;
use chessbeads::cli::handlers;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let result = if cli.command.is_none() {
        // No subcommand → launch TUI
        chessbeads::tui::run(cli.config.as_deref(), cli.catalog.as_deref())
    } else {
        handlers::dispatch(cli)
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
