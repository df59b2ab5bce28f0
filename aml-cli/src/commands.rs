//! Subcommand handlers. Each returns the text to print.

use aml_config::AmlConfig;
use aml_parser::aml::formats::InspectFormat;
use aml_parser::aml::loader::DocumentLoader;
use aml_render::annotations::{EnglishDictionary, LazyChineseDictionary};
use aml_render::chess::{fen_to_board, validate_fen};
use aml_render::quotes::JsonLinesQuoteSink;
use aml_render::HtmlGenerator;
use anyhow::{anyhow, bail, Context, Result};
use clap::ArgMatches;

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| anyhow!("missing argument <{}>", name))
}

pub fn render(matches: &ArgMatches, config: &AmlConfig) -> Result<String> {
    let path = required(matches, "path")?;
    let document = DocumentLoader::from_path(path)?.parse();

    let options = config.render.to_options();
    let chinese = config
        .annotations
        .chinese_dictionary
        .as_ref()
        .map(|path| LazyChineseDictionary::new(path.clone()));
    let quotes = match (
        matches.get_one::<String>("quotes-out"),
        matches.get_one::<String>("message"),
    ) {
        (Some(out), Some(message)) => Some(JsonLinesQuoteSink::new(out, message)),
        _ => None,
    };

    let mut generator = HtmlGenerator::new(options);
    if let Some(chinese) = &chinese {
        tracing::debug!(path = %chinese.path().display(), "chinese annotations enabled");
        generator = generator.with_annotator(chinese);
    }
    if let Some(quotes) = &quotes {
        tracing::debug!(path = %quotes.path().display(), "capturing quotes");
        generator = generator.with_quote_sink(quotes);
    }

    tracing::info!(path = %path, truncated = options.truncated, "rendering");
    Ok(generator.generate(&document))
}

pub fn inspect(matches: &ArgMatches, config: &AmlConfig) -> Result<String> {
    let path = required(matches, "path")?;
    let format: InspectFormat = matches
        .get_one::<String>("format")
        .unwrap_or(&config.inspect.format)
        .parse()?;

    let loader = DocumentLoader::from_path(path)?;
    Ok(format.render(loader.source())?)
}

pub fn fen(matches: &ArgMatches) -> Result<String> {
    let fen = required(matches, "fen")?;
    validate_fen(fen).with_context(|| format!("invalid FEN '{}'", fen))?;
    Ok(fen_to_board(fen))
}

pub fn lookup(matches: &ArgMatches, config: &AmlConfig) -> Result<String> {
    let word = required(matches, "word")?;
    let Some(path) = &config.annotations.english_dictionary else {
        bail!("no English dictionary configured (use --english-dict or annotations.english_dictionary)");
    };

    let dictionary = EnglishDictionary::from_path(path)?;
    match dictionary.lookup(word) {
        Some(annotation) => Ok(serde_json::to_string_pretty(&annotation)?),
        None => bail!("no dictionary entry for '{}'", word),
    }
}
