//! Command-line interface for AML
//!
//! Usage:
//!   aml render `<path>` [--truncated] [--show-private] [--chinese-dict `<file>`]
//!              [--quotes-out `<file>` --message `<id>`]      - Render a document to HTML
//!   aml inspect `<path>` [--format `<format>`]               - Show tokens or the parsed tree
//!   aml fen `<fen>`                                          - Render a chess position
//!   aml lookup `<word>` [--english-dict `<file>`]            - Look a word up
//!
//! Every command accepts `--config <file>`, layered over the built-in defaults.

mod commands;
mod logging;

use aml_config::{AmlConfig, Loader};
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

fn build_cli() -> Command {
    Command::new("aml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering and inspecting Atacama Markup Language files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_name("FILE")
                .help("Configuration file layered over the defaults"),
        )
        .subcommand(
            Command::new("render")
                .about("Render an AML file to HTML")
                .arg(
                    Arg::new("path")
                        .help("Path to the AML file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("truncated")
                        .long("truncated")
                        .help("Stop at the first --MORE-- marker")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("show-private")
                        .long("show-private")
                        .help("Render <<PRIVATE: ..>> blocks")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("chinese-dict")
                        .long("chinese-dict")
                        .value_name("FILE")
                        .help("CEDICT-style JSON dictionary for Chinese annotations"),
                )
                .arg(
                    Arg::new("quotes-out")
                        .long("quotes-out")
                        .value_name("FILE")
                        .requires("message")
                        .help("Append captured quotes to this JSON lines file"),
                )
                .arg(
                    Arg::new("message")
                        .long("message")
                        .value_name("ID")
                        .requires("quotes-out")
                        .help("Message id recorded with captured quotes"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the token stream or parsed tree of an AML file")
                .arg(
                    Arg::new("path")
                        .help("Path to the AML file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("token-simple, token-json, ast-json, ast-yaml or ast-treeviz (default from config)"),
                ),
        )
        .subcommand(
            Command::new("fen")
                .about("Validate a FEN position and print it as an HTML board")
                .arg(
                    Arg::new("fen")
                        .help("FEN string (quote it)")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("lookup")
                .about("Look a word up in the English dictionary")
                .arg(Arg::new("word").required(true).index(1))
                .arg(
                    Arg::new("english-dict")
                        .long("english-dict")
                        .value_name("FILE")
                        .help("English dictionary JSON (default from config)"),
                ),
        )
}

fn load_config(matches: &ArgMatches) -> Result<AmlConfig> {
    let mut loader = Loader::new();
    let config_path = matches.get_one::<String>("config").or_else(|| {
        matches
            .subcommand()
            .and_then(|(_, sub)| sub.get_one::<String>("config"))
    });
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }

    if let Some(("render", sub)) = matches.subcommand() {
        if sub.get_flag("truncated") {
            loader = loader.set_override("render.truncated", true)?;
        }
        if sub.get_flag("show-private") {
            loader = loader.set_override("render.show_private", true)?;
        }
        if let Some(path) = sub.get_one::<String>("chinese-dict") {
            loader = loader.set_override("annotations.chinese_dictionary", path.as_str())?;
        }
    }
    if let Some(("lookup", sub)) = matches.subcommand() {
        if let Some(path) = sub.get_one::<String>("english-dict") {
            loader = loader.set_override("annotations.english_dictionary", path.as_str())?;
        }
    }

    loader.build().context("failed to load configuration")
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    logging::init(&config.logging.level);

    let output = match matches.subcommand() {
        Some(("render", sub)) => commands::render(sub, &config)?,
        Some(("inspect", sub)) => commands::inspect(sub, &config)?,
        Some(("fen", sub)) => commands::fen(sub)?,
        Some(("lookup", sub)) => commands::lookup(sub, &config)?,
        _ => unreachable!("clap requires a subcommand"),
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn main() {
    let matches = build_cli().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn quotes_out_requires_message() {
        let result = build_cli().try_get_matches_from([
            "aml",
            "render",
            "post.aml",
            "--quotes-out",
            "q.jsonl",
        ]);
        assert!(result.is_err());
    }
}
