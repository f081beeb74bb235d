//! designlint CLI - style-compliance linting for design documents
//!
//! This binary lints document snapshots against their style catalogs, prints
//! transport outlines, and lists the available rules.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use designlint_cli::commands;

/// designlint - find nodes that bypass the design system's styles
#[derive(Parser)]
#[command(name = "designlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint a document snapshot for nodes missing styles
    Lint {
        /// Path to the document snapshot (JSON)
        #[arg(short, long)]
        input: String,

        /// Path to a lint config file (JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Disable specific rules (can be repeated)
        #[arg(long = "disable-rule", value_name = "RULE_ID")]
        disable_rules: Vec<String>,

        /// Only run these rules (comma-separated list)
        #[arg(long = "only-rules", value_name = "RULE_IDS")]
        only_rules: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Print the reduced node tree of a document snapshot
    Outline {
        /// Path to the document snapshot (JSON)
        #[arg(short, long)]
        input: String,

        /// Pretty-print the output JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// List the rules a lint run would use
    Rules {
        /// Path to a lint config file (JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Lint {
            input,
            config,
            disable_rules,
            only_rules,
            format,
        } => format
            .parse::<commands::lint::OutputFormat>()
            .map_err(anyhow::Error::msg)
            .and_then(|output_format| {
                commands::lint::run(
                    &input,
                    config.as_deref(),
                    &disable_rules,
                    only_rules.as_deref(),
                    output_format,
                )
            }),
        Commands::Outline { input, pretty } => commands::outline::run(&input, pretty),
        Commands::Rules { config, json } => commands::rules::run(config.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_parses_lint() {
        let cli = Cli::try_parse_from(["designlint", "lint", "--input", "doc.json"]).unwrap();
        match cli.command {
            Commands::Lint {
                input,
                config,
                disable_rules,
                only_rules,
                format,
            } => {
                assert_eq!(input, "doc.json");
                assert!(config.is_none());
                assert!(disable_rules.is_empty());
                assert!(only_rules.is_none());
                assert_eq!(format, "text");
            }
            _ => panic!("expected lint command"),
        }
    }

    #[test]
    fn test_cli_parses_repeated_disable_rule() {
        let cli = Cli::try_parse_from([
            "designlint",
            "lint",
            "-i",
            "doc.json",
            "--disable-rule",
            "stroke/missing-style",
            "--disable-rule",
            "effects/missing-style",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Lint {
                disable_rules,
                format,
                ..
            } => {
                assert_eq!(
                    disable_rules,
                    vec!["stroke/missing-style", "effects/missing-style"]
                );
                assert_eq!(format, "json");
            }
            _ => panic!("expected lint command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let err = Cli::try_parse_from(["designlint", "lint", "-i", "doc.json", "--format", "xml"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_cli_requires_input_for_outline() {
        let err = Cli::try_parse_from(["designlint", "outline"]).err().unwrap();
        assert!(err.to_string().contains("--input"));
    }

    #[test]
    fn test_cli_parses_rules() {
        let cli = Cli::try_parse_from(["designlint", "rules", "--json"]).unwrap();
        match cli.command {
            Commands::Rules { config, json } => {
                assert!(config.is_none());
                assert!(json);
            }
            _ => panic!("expected rules command"),
        }
    }
}
