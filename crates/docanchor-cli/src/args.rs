use anyhow::{Context, Result, bail};
use docanchor_engine::NormalizationOptions;
use docanchor_engine::SelectionPolicy;
use docanchor_engine::search::AnchorSpecFields;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: docanchor [--config <path>] <document.json> <command>

Commands:
  index                          print the normalized text and its offsets
  find <query>                   print every match of <query>
      [--occurrence N] [--max N] [--all]
  anchor --after <text>          print the position right after <text>
  anchor --before <text>         print the position right before <text>
      [--occurrence N]

Matching flags:
  --whole-word  --ignore-case  --collapse-whitespace  --exact";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Index,
    Find {
        query: String,
        selection: SelectionPolicy,
    },
    /// Fields are validated by the engine so a bad combination is reported
    /// like any other resolve error.
    Anchor {
        spec: AnchorSpecFields,
        occurrence_index: Option<usize>,
    },
}

/// Matching flags given on the command line, layered over the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub exact: bool,
    pub whole_word: bool,
    pub ignore_case: bool,
    pub collapse_whitespace: bool,
}

impl Overrides {
    pub fn apply(&self, base: NormalizationOptions) -> NormalizationOptions {
        let mut options = if self.exact {
            NormalizationOptions::exact().whole_word(base.whole_word)
        } else {
            base
        };
        if self.whole_word {
            options.whole_word = true;
        }
        if self.ignore_case {
            options.case_sensitive = false;
        }
        if self.collapse_whitespace {
            options.collapse_whitespace = true;
        }
        options
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub document: PathBuf,
    pub command: Command,
    pub overrides: Overrides,
}

/// Parses arguments, excluding the program name.
pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut args = args.into_iter();
    let mut positional = Vec::new();
    let mut config = None;
    let mut overrides = Overrides::default();
    let mut occurrence_index = None;
    let mut max_occurrences = None;
    let mut all_occurrences = false;
    let mut spec = AnchorSpecFields::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(value_of(&arg, args.next())?)),
            "--occurrence" => occurrence_index = Some(number_of(&arg, args.next())?),
            "--max" => max_occurrences = Some(number_of(&arg, args.next())?),
            "--all" => all_occurrences = true,
            "--after" => spec.after_text = Some(value_of(&arg, args.next())?),
            "--before" => spec.before_text = Some(value_of(&arg, args.next())?),
            "--exact" => overrides.exact = true,
            "--whole-word" => overrides.whole_word = true,
            "--ignore-case" => overrides.ignore_case = true,
            "--collapse-whitespace" => overrides.collapse_whitespace = true,
            flag if flag.starts_with("--") => bail!("Unknown option {flag}"),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let Some(document) = positional.next() else {
        bail!("Missing document path");
    };
    let Some(name) = positional.next() else {
        bail!("Missing command");
    };

    let has_anchor_text = spec.after_text.is_some() || spec.before_text.is_some();
    let command = match name.as_str() {
        "index" => Command::Index,
        "find" => {
            let Some(query) = positional.next() else {
                bail!("find needs a query");
            };
            Command::Find {
                query,
                selection: SelectionPolicy {
                    occurrence_index,
                    max_occurrences,
                    all_occurrences,
                },
            }
        }
        "anchor" => {
            if max_occurrences.is_some() || all_occurrences {
                bail!("--max and --all only apply to find");
            }
            Command::Anchor {
                spec,
                occurrence_index,
            }
        }
        other => bail!("Unknown command {other:?}"),
    };

    if let Some(extra) = positional.next() {
        bail!("Unexpected argument {extra:?}");
    }
    if has_anchor_text && !matches!(command, Command::Anchor { .. }) {
        bail!("--after and --before only apply to anchor");
    }

    Ok(Args {
        config,
        document: PathBuf::from(document),
        command,
        overrides,
    })
}

fn value_of(flag: &str, value: Option<String>) -> Result<String> {
    value.with_context(|| format!("{flag} needs a value"))
}

fn number_of(flag: &str, value: Option<String>) -> Result<usize> {
    let value = value_of(flag, value)?;
    value
        .parse()
        .with_context(|| format!("{flag} expects a number, got {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_str(line: &str) -> Result<Args> {
        parse(line.split_whitespace().map(String::from))
    }

    #[test]
    fn test_index_command() {
        let args = parse_str("doc.json index").unwrap();
        assert_eq!(args.document, PathBuf::from("doc.json"));
        assert_eq!(args.command, Command::Index);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_find_with_selection_flags() {
        let args = parse_str("doc.json find Seller --occurrence 2 --whole-word").unwrap();
        assert_eq!(
            args.command,
            Command::Find {
                query: "Seller".to_string(),
                selection: SelectionPolicy::nth(2),
            }
        );
        assert!(args.overrides.whole_word);
    }

    #[test]
    fn test_flags_may_precede_positionals() {
        let args = parse_str("--config ~/alt.toml --max 3 doc.json find the").unwrap();
        assert_eq!(args.config, Some(PathBuf::from("~/alt.toml")));
        assert_eq!(
            args.command,
            Command::Find {
                query: "the".to_string(),
                selection: SelectionPolicy::first(3),
            }
        );
    }

    #[test]
    fn test_query_with_spaces_as_single_argument() {
        let args = parse(
            ["doc.json", "find", "the Seller", "--ignore-case"]
                .into_iter()
                .map(String::from),
        )
        .unwrap();
        assert!(matches!(args.command, Command::Find { ref query, .. } if query == "the Seller"));
        assert!(args.overrides.ignore_case);
    }

    #[test]
    fn test_anchor_keeps_both_sides_for_engine_validation() {
        let args = parse_str("doc.json anchor --after a --before b").unwrap();
        assert_eq!(
            args.command,
            Command::Anchor {
                spec: AnchorSpecFields {
                    after_text: Some("a".to_string()),
                    before_text: Some("b".to_string()),
                },
                occurrence_index: None,
            }
        );
    }

    #[test]
    fn test_anchor_with_occurrence() {
        let args = parse_str("doc.json anchor --before Buyer --occurrence 2").unwrap();
        assert_eq!(
            args.command,
            Command::Anchor {
                spec: AnchorSpecFields {
                    after_text: None,
                    before_text: Some("Buyer".to_string()),
                },
                occurrence_index: Some(2),
            }
        );
    }

    #[test]
    fn test_rejects_misplaced_flags() {
        assert!(parse_str("doc.json anchor --after a --all").is_err());
        assert!(parse_str("doc.json find x --before y").is_err());
        assert!(parse_str("doc.json index --after y").is_err());
    }

    #[test]
    fn test_reports_missing_pieces() {
        assert_eq!(parse_str("").unwrap_err().to_string(), "Missing document path");
        assert_eq!(parse_str("doc.json").unwrap_err().to_string(), "Missing command");
        assert_eq!(
            parse_str("doc.json find").unwrap_err().to_string(),
            "find needs a query"
        );
        assert_eq!(
            parse_str("doc.json find x --occurrence").unwrap_err().to_string(),
            "--occurrence needs a value"
        );
    }

    #[test]
    fn test_rejects_bad_numbers_and_unknown_input() {
        let err = parse_str("doc.json find x --max many").unwrap_err();
        assert_eq!(err.to_string(), "--max expects a number, got \"many\"");
        assert!(parse_str("doc.json find x --fuzzy").is_err());
        assert!(parse_str("doc.json replace x").is_err());
        assert!(parse_str("doc.json find x y").is_err());
    }

    #[test]
    fn test_overrides_layer_over_config() {
        let base = NormalizationOptions::default().whole_word(true);
        let overrides = Overrides {
            ignore_case: true,
            collapse_whitespace: true,
            ..Overrides::default()
        };
        let options = overrides.apply(base);
        assert!(options.whole_word);
        assert!(!options.case_sensitive);
        assert!(options.collapse_whitespace);
        assert!(options.unify_nbsp);
    }

    #[test]
    fn test_exact_turns_off_rewriting() {
        let overrides = Overrides {
            exact: true,
            ..Overrides::default()
        };
        let options = overrides.apply(NormalizationOptions::default().collapse_whitespace(true));
        assert_eq!(options, NormalizationOptions::exact());
    }
}
