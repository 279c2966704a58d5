use std::error::Error;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{catalog_io, config_io, logging};
use crate::model::catalog::Catalog;
use crate::model::config::Config;
use crate::model::tree::build_tree;
use crate::ops::check::{self, CheckError, CheckWarning};
use crate::ops::filter;
use crate::ops::pgn::moves_to_pgn;

/// Shown when a filter leaves nothing to list
const NO_MATCHES: &str = "No openings match your filters.";

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    logging::init_stderr_logging();
    let json = cli.json;

    let Some(cmd) = cli.command else {
        return Err("no subcommand given (try `beads --help`)".into());
    };

    let config = config_io::read_config(cli.config.as_deref())?;
    let catalog = load_catalog(&config, cli.catalog.as_deref())?;

    match cmd {
        Commands::List(args) => cmd_list(&catalog, args, json),
        Commands::Tree(args) => cmd_tree(&catalog, args, json),
        Commands::Show(args) => cmd_show(&catalog, &config, args, json),
        Commands::Pgn(args) => cmd_pgn(&catalog, args, json),
        Commands::FirstMoves => cmd_first_moves(&catalog, json),
        Commands::Check => cmd_check(&catalog, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_catalog(
    config: &Config,
    explicit: Option<&std::path::Path>,
) -> Result<Catalog, catalog_io::CatalogError> {
    let path = catalog_io::catalog_path(explicit, config);
    let catalog = catalog_io::load_catalog(path.as_deref())?;
    tracing::debug!(openings = catalog.len(), source = ?catalog.source, "catalog ready");
    Ok(catalog)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(catalog: &Catalog, args: FilterArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let filtered =
        filter::filter_openings(&catalog.openings, &args.query, args.first_move.as_deref());

    if json {
        let out: Vec<OpeningJson> = filtered.iter().map(|o| opening_to_json(o, false)).collect();
        return print_json(&out);
    }
    if filtered.is_empty() {
        println!("{}", NO_MATCHES);
    }
    for opening in &filtered {
        println!("{}", format_opening_line(opening));
    }
    Ok(())
}

fn cmd_tree(catalog: &Catalog, args: FilterArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let filtered =
        filter::filter_openings(&catalog.openings, &args.query, args.first_move.as_deref());
    let tree = build_tree(&filtered);

    if json {
        return print_json(&tree_to_json(&tree));
    }
    if filtered.is_empty() {
        println!("{}", NO_MATCHES);
    }
    for line in format_tree(&tree) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_show(
    catalog: &Catalog,
    config: &Config,
    args: LookupArgs,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let opening = catalog
        .lookup(&args.query)
        .ok_or_else(|| format!("no opening matches '{}'", args.query))?;

    if json {
        return print_json(&opening_to_json(opening, true));
    }
    for line in format_opening_detail(opening, config.ui.show_board) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_pgn(catalog: &Catalog, args: LookupArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let opening = catalog
        .lookup(&args.query)
        .ok_or_else(|| format!("no opening matches '{}'", args.query))?;
    let pgn = moves_to_pgn(&opening.moves);

    if json {
        return print_json(&PgnJson {
            eco: opening.eco.clone(),
            name: opening.name.clone(),
            pgn,
        });
    }
    println!("{}", pgn);
    Ok(())
}

fn cmd_first_moves(catalog: &Catalog, json: bool) -> Result<(), Box<dyn Error>> {
    let first_moves = filter::first_moves(&catalog.openings);
    if json {
        return print_json(&FirstMovesJson { first_moves });
    }
    for m in &first_moves {
        println!("{}", m);
    }
    Ok(())
}

fn cmd_check(catalog: &Catalog, json: bool) -> Result<(), Box<dyn Error>> {
    let result = check::check_catalog(&catalog.openings);

    if json {
        print_json(&result)?;
    } else {
        if !result.errors.is_empty() {
            println!("Errors:");
            for err in &result.errors {
                match err {
                    CheckError::DuplicateOpening { eco, name, indices } => {
                        let indices: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
                        println!(
                            "  {} {} appears more than once (entries {})",
                            eco,
                            name,
                            indices.join(", ")
                        );
                    }
                    CheckError::IllegalMove {
                        eco,
                        name,
                        ply,
                        token,
                    } => {
                        println!("  {} {}: ply {} '{}' does not replay", eco, name, ply, token);
                    }
                    CheckError::MissingIdentity { index } => {
                        println!("  entry {} is missing a name or ECO code", index);
                    }
                }
            }
        }
        if !result.warnings.is_empty() {
            if !result.errors.is_empty() {
                println!();
            }
            println!("Warnings:");
            for warn in &result.warnings {
                match warn {
                    CheckWarning::NoMoves { eco, name } => {
                        println!("  {} {} has no moves", eco, name);
                    }
                    CheckWarning::SharedLine { line, names } => {
                        println!("  {} is shared by: {}", line, names.join(", "));
                    }
                    CheckWarning::MissingIdeas { eco, name } => {
                        println!("  {} {} has no ideas text", eco, name);
                    }
                }
            }
        }
        if result.valid {
            println!("✓ catalog is valid ({} openings)", catalog.len());
        } else {
            println!("✗ catalog has errors");
        }
    }

    if result.valid {
        Ok(())
    } else {
        Err(format!("{} catalog error(s)", result.errors.len()).into())
    }
}
