use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "beads", about = concat!("chess beads v", env!("CARGO_PKG_VERSION"), " - browse chess openings as a move tree"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read settings from this config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Browse this catalog file instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List openings, optionally filtered
    List(FilterArgs),
    /// Print the move tree, optionally filtered
    Tree(FilterArgs),
    /// Show details of an opening
    Show(LookupArgs),
    /// Print an opening's moves as PGN
    Pgn(LookupArgs),
    /// List the distinct first moves in the catalog
    FirstMoves,
    /// Validate the catalog
    Check,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Match against name or ECO code (case-insensitive substring)
    #[arg(short, long, default_value = "")]
    pub query: String,
    /// Only openings starting with this move, e.g. e4
    #[arg(short = 'm', long = "move", value_name = "MOVE")]
    pub first_move: Option<String>,
}

#[derive(Args)]
pub struct LookupArgs {
    /// ECO code or opening name (exact match first, then substring)
    pub query: String,
}
