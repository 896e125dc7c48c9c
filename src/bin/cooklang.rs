//! Command-line interface for cooklang-parser
//! Reads a recipe file, parses it and prints the resulting document.
//!
//! Usage:
//!   cooklang parse `<path>` [--format `<format>`] [--config `<file>`]  - Parse a recipe
//!   cooklang list-formats                                        - List output formats
//!
//! Parser options come from the embedded defaults, then `--config`, then
//! `COOKLANG__*` environment variables, then the flags below.

use clap::{Arg, ArgAction, ArgMatches, Command};
use cooklang_parser::cooklang::{Document, OptionsLoader, ParseOptions, RecipeParser};
use log::debug;
use thiserror::Error;

const FORMATS: &[(&str, &str)] = &[
    ("json", "Pretty-printed JSON"),
    ("yaml", "YAML"),
];

/// Errors surfaced by the command-line caller
#[derive(Error, Debug)]
enum CliError {
    #[error("Error reading file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown format '{0}', see `cooklang list-formats`")]
    UnknownFormat(String),
}

fn main() {
    let matches = Command::new("cooklang")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing cooklang recipes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log parser decisions to stderr"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a recipe and print the document")
                .arg(
                    Arg::new("path")
                        .help("Path to the recipe file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'json', 'yaml')")
                        .default_value("json"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file with parser options"),
                )
                .arg(
                    Arg::new("granularity")
                        .long("granularity")
                        .value_parser(["line", "paragraph"])
                        .help("One step per line or per paragraph"),
                )
                .arg(
                    Arg::new("no-aggregate")
                        .long("no-aggregate")
                        .action(ArgAction::SetTrue)
                        .help("Keep every ingredient reference as its own entry"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) -> Result<(), CliError> {
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default value");

    let options = load_options(matches)?;
    debug!("parser options: {:?}", options);

    let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;

    let document = RecipeParser::new(options).parse(&source);
    print!("{}", serialize(&document, format)?);
    Ok(())
}

fn load_options(matches: &ArgMatches) -> Result<ParseOptions, CliError> {
    let mut loader = OptionsLoader::new();
    if let Some(config) = matches.get_one::<String>("config") {
        loader = loader.with_file(config);
    }
    loader = loader.with_env();
    if let Some(granularity) = matches.get_one::<String>("granularity") {
        loader = loader.set_override("granularity", granularity.as_str())?;
    }
    if matches.get_flag("no-aggregate") {
        loader = loader.set_override("aggregate_ingredients", false)?;
    }
    Ok(loader.build()?)
}

fn serialize(document: &Document, format: &str) -> Result<String, CliError> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(document)? + "\n"),
        "yaml" => Ok(serde_yaml::to_string(document)?),
        other => Err(CliError::UnknownFormat(other.to_string())),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for (name, description) in FORMATS {
        println!("  {}", name);
        println!("    {}.", description);
    }
}
