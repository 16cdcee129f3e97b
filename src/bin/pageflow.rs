//! Command-line interface for pageflow
//! This binary converts page flow scripts into JSON documents.
//!
//! Usage:
//!   pageflow convert `<source>` `[target]`   - Convert a script, writing to a file or stdout
//!   pageflow tokens `<source>`             - Dump the token stream of a script as JSON

use clap::{Arg, ArgAction, Command};

use pageflow::flow::lexer::tokenize;
use pageflow::flow::parser::Strictness;
use pageflow::flow::pipeline::{strip_bom, FlowPipeline};

fn main() {
    let matches = Command::new("pageflow")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting page flow scripts into JSON")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("convert")
                .about("Convert a page flow script into a JSON document")
                .arg(
                    Arg::new("source")
                        .help("Path to the script to convert")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("target")
                        .help("Path to write the JSON document to (stdout if omitted)")
                        .index(2),
                )
                .arg(
                    Arg::new("lenient")
                        .long("lenient")
                        .action(ArgAction::SetTrue)
                        .help("Ignore trailing input after the last page"),
                )
                .arg(
                    Arg::new("default-condition")
                        .long("default-condition")
                        .default_value("page")
                        .help("Condition emitted for pages without one"),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .action(ArgAction::SetTrue)
                        .help("Emit compact JSON instead of pretty-printed"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the token stream of a script as JSON")
                .arg(
                    Arg::new("source")
                        .help("Path to the script to tokenize")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("convert", convert_matches)) => {
            let source = convert_matches.get_one::<String>("source").unwrap();
            let target = convert_matches.get_one::<String>("target");
            let default_condition = convert_matches
                .get_one::<String>("default-condition")
                .unwrap();
            handle_convert_command(
                source,
                target.map(String::as_str),
                convert_matches.get_flag("lenient"),
                default_condition,
                convert_matches.get_flag("compact"),
            );
        }
        Some(("tokens", tokens_matches)) => {
            let source = tokens_matches.get_one::<String>("source").unwrap();
            handle_tokens_command(source);
        }
        _ => unreachable!(),
    }
}

/// Handle the convert command
fn handle_convert_command(
    source: &str,
    target: Option<&str>,
    lenient: bool,
    default_condition: &str,
    compact: bool,
) {
    let script = read_source(source);

    let mut pipeline = FlowPipeline::new().with_default_condition(default_condition);
    if lenient {
        pipeline = pipeline.with_strictness(Strictness::Lenient);
    }
    if compact {
        pipeline = pipeline.with_compact_output();
    }

    let json = pipeline.convert(&script).unwrap_or_else(|e| {
        eprintln!("Conversion error: {}", e);
        std::process::exit(1);
    });

    match target {
        Some(path) => {
            std::fs::write(path, &json).unwrap_or_else(|e| {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            });
        }
        None => println!("{}", json),
    }
}

/// Handle the tokens command
fn handle_tokens_command(source: &str) {
    let script = read_source(source);

    let tokens = tokenize(strip_bom(&script)).unwrap_or_else(|e| {
        eprintln!("Tokenization error: {}", e);
        std::process::exit(1);
    });

    let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    });

    println!("{}", json);
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    })
}
