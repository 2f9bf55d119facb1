mod args;

use anyhow::{Context, Result, bail};
use args::{Args, Command, USAGE};
use docanchor_config::Config;
use docanchor_engine::{
    AnchorOptions, AnchorSpec, Document, FindOptions, NormalizationOptions, ResolveError,
    build_index, find_anchor_position, find_text,
};
use serde_json::{Value, json};
use std::{env, fs, process};

fn main() {
    // Explicit RUST_LOG directives win over the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    match run(env::args().skip(1)) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            eprintln!();
            eprintln!("{USAGE}");
            process::exit(2);
        }
    }
}

/// Runs one command and prints its JSON result. Returns the exit code.
fn run(raw: impl IntoIterator<Item = String>) -> Result<i32> {
    let args = args::parse(raw)?;
    let config = load_config(&args)?;
    let normalization = args.overrides.apply(config.normalization);

    let json = fs::read_to_string(&args.document)
        .with_context(|| format!("Failed to read document {}", args.document.display()))?;
    let doc = Document::from_json(&json, &config.schema)
        .with_context(|| format!("Failed to load document {}", args.document.display()))?;
    log::info!(
        "Loaded {} ({} positions)",
        args.document.display(),
        doc.content_size()
    );

    let (output, code) = match execute(&doc, args.command, normalization) {
        Ok(output) => (output, 0),
        Err(err) => {
            log::warn!("{err}");
            (error_json(&err), 1)
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(args: &Args) -> Result<Config> {
    let Some(path) = &args.config else {
        log::debug!("Config path: {}", Config::config_path().display());
        return Ok(Config::load()?.unwrap_or_default());
    };
    let path = Config::expand_path(path).unwrap_or_else(|| path.clone());
    match Config::load_from_path(&path)? {
        Some(config) => Ok(config),
        None => bail!("Config file {} does not exist", path.display()),
    }
}

fn execute(
    doc: &Document,
    command: Command,
    normalization: NormalizationOptions,
) -> Result<Value, ResolveError> {
    match command {
        Command::Index => {
            let index = build_index(doc, &normalization);
            Ok(json!({
                "normalizedText": index.text(),
                "offsets": index.offsets(),
                "contentSize": doc.content_size(),
            }))
        }
        Command::Find { query, selection } => {
            let options = FindOptions {
                normalization,
                selection,
            };
            let matches = find_text(doc, &query, &options)?;
            Ok(json!({ "matches": matches }))
        }
        Command::Anchor {
            spec,
            occurrence_index,
        } => {
            let spec = AnchorSpec::try_from(spec)?;
            let options = AnchorOptions {
                normalization,
                occurrence_index,
            };
            let position = find_anchor_position(doc, &spec, &options)?;
            Ok(json!({ "position": position }))
        }
    }
}

fn error_json(err: &ResolveError) -> Value {
    json!({
        "error": err.code(),
        "message": err.to_string(),
        "candidates": err.candidates(),
    })
}
