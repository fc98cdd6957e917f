//! Command-line interface for ged
//! This binary parses GEDCOM files and prints them back out or answers
//! ancestry queries against them.
//!
//! Usage:
//!   ged render `<path>` [--format `<format>`]   - Parse a file and print it in normalized form
//!   ged ancestors `<path>` `<pointer>`          - Print the direct ancestor line of an individual

use clap::{Arg, Command};

use ged::ged::processor::{load_document, to_json};

fn main() {
    env_logger::init();

    let matches = Command::new("ged")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting GEDCOM files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Parse a file and print it back in normalized form")
                .arg(
                    Arg::new("path")
                        .help("Path to the GEDCOM file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("ancestors")
                .about("Print the direct ancestor line of an individual")
                .arg(
                    Arg::new("path")
                        .help("Path to the GEDCOM file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("pointer")
                        .help("Pointer of the individual, e.g. '@I1@' or 'I1'")
                        .required(true)
                        .index(2),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("render", render_matches)) => {
            let path = render_matches.get_one::<String>("path").unwrap();
            let format = render_matches.get_one::<String>("format").unwrap();
            handle_render_command(path, format);
        }
        Some(("ancestors", ancestors_matches)) => {
            let path = ancestors_matches.get_one::<String>("path").unwrap();
            let pointer = ancestors_matches.get_one::<String>("pointer").unwrap();
            handle_ancestors_command(path, pointer);
        }
        _ => unreachable!(),
    }
}

/// Handle the render command
fn handle_render_command(path: &str, format: &str) {
    let document = load_document(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match format {
        "text" => print!("{}", document.render()),
        "json" => {
            let json = to_json(&document).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        other => {
            eprintln!(
                "Error: unknown format '{}' (expected 'text' or 'json')",
                other
            );
            std::process::exit(1);
        }
    }
}

/// Handle the ancestors command
fn handle_ancestors_command(path: &str, pointer: &str) {
    let document = load_document(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let index = document.index();
    let line = index.direct_ancestor_line(pointer).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    for ancestor in line {
        println!("{}", ancestor);
    }
}
