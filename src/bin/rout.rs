//! Command-line interface for rout
//! This binary tokenizes Rout text (R console output) and prints the token stream.
//!
//! Usage:
//!   rout [`<path>`] [--catalog `<name>`] [--format `<format>`] [--strict] [--extras]  - Tokenize a file (or stdin)
//!   rout --list-catalogs                                                - List available catalogs
//!   rout --list-formats                                                 - List available output formats
//!
//! Settings are layered: built-in defaults, then `--config <file>`, then `ROUT_*` environment
//! variables, then command-line flags.

use clap::{Arg, ArgAction, ArgMatches, Command};
use rout::rout::config::{RoutConfig, Settings};
use rout::rout::formats::FormatRegistry;
use rout::rout::lexing::RecoveryMode;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let matches = Command::new("rout")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize Rout text (R console output)")
        .arg(
            Arg::new("path")
                .help("Path to the Rout file, or '-' to read stdin (the default)")
                .index(1),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .short('c')
                .help("Catalog to tokenize with (e.g., 'full', 'legacy')"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'tag', 'simple', 'json', 'yaml')"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on characters no rule matches instead of recovering")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extras")
                .long("extras")
                .help("Include whitespace runs in the output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-catalogs")
                .long("list-catalogs")
                .help("List available catalogs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug information to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if matches.get_flag("list-catalogs") {
        handle_list_catalogs_command(&config);
        return;
    }
    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    handle_tokenize_command(&config, path);
}

/// Logs go to stderr so stdout only ever carries the serialized tokens.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn load_config(matches: &ArgMatches) -> Result<RoutConfig, config::ConfigError> {
    let settings = Settings {
        file: matches.get_one::<String>("config").map(PathBuf::from),
        environment: true,
        catalog: matches.get_one::<String>("catalog").cloned(),
        recovery: matches
            .get_flag("strict")
            .then_some(RecoveryMode::Strict),
        format: matches.get_one::<String>("format").cloned(),
        extras: matches.get_flag("extras").then_some(true),
    };
    settings.load()
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Handle the default command: tokenize and print
fn handle_tokenize_command(config: &RoutConfig, path: &str) {
    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let tokenizer = config.tokenizer().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable catalogs:");
        if let Ok(registry) = config.registry() {
            for catalog in registry.list() {
                eprintln!("  {}", catalog.name());
            }
        }
        std::process::exit(1);
    });

    let mut lexemes = tokenizer.lexemes(&source).unwrap_or_else(|e| {
        eprintln!("Lexing error: {}", e);
        std::process::exit(1);
    });
    if !config.output.extras {
        lexemes.retain(|lexeme| !lexeme.is_extra());
    }

    let output = FormatRegistry::builtin()
        .render(&config.output.format, &lexemes)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    print!("{}", output);
}

/// Handle the list-catalogs command
fn handle_list_catalogs_command(config: &RoutConfig) {
    let registry = config.registry().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    println!("Available catalogs:\n");
    for catalog in registry.list() {
        let kinds: Vec<_> = catalog.kinds().iter().map(|k| k.name()).collect();
        println!("  {}", catalog.name());
        println!("    {} rules: {}", catalog.len(), kinds.join(", "));
        println!();
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in FormatRegistry::builtin().iter() {
        println!("  {:<8} {}", format.name(), format.description());
    }
}
