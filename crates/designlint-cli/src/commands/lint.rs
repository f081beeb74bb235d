//! Lint command implementation
//!
//! Runs the style rules over a document snapshot.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use designlint::{
    Catalogs, ErrorKind, ErrorRecord, LintConfig, LintOutcome, Linter, RuleRegistry,
};
use designlint_model::Document;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::ExitCode;

use crate::config::{load_config_or_default, load_document};

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "unknown format '{}', expected 'text' or 'json'",
                s
            )),
        }
    }
}

/// JSON output for lint command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintOutput {
    /// Whether the lint passed (no errors).
    pub success: bool,
    /// Path to the linted document.
    pub document_path: String,
    pub nodes_visited: usize,
    pub error_count: usize,
    /// Flat errors and per-node summaries.
    pub outcome: LintOutcome,
}

/// Builds the registry for a lint run.
///
/// `disable_rules` add to the config's disabled rules; `only_rules` is a
/// comma-separated allow list.
pub fn build_registry(
    config: &LintConfig,
    disable_rules: &[String],
    only_rules: Option<&str>,
) -> RuleRegistry {
    let mut registry = RuleRegistry::default_rules(config);

    for rule_id in disable_rules {
        registry.disable_rule(rule_id);
    }

    if let Some(only) = only_rules {
        let rules: Vec<&str> = only.split(',').map(|s| s.trim()).collect();
        registry.enable_only(&rules);
    }

    registry
}

/// Lints every node of a document against its own catalogs.
pub fn lint_document(doc: &Document, registry: RuleRegistry) -> Result<LintOutcome> {
    let outcome = Linter::new(registry)
        .lint(&doc.nodes, &Catalogs::from_document(doc))
        .context("Lint pass failed")?;
    Ok(outcome)
}

/// Run the lint command.
///
/// # Arguments
/// * `input` - Path to the document snapshot
/// * `config_path` - Optional path to a lint config file
/// * `disable_rules` - Rule IDs to disable
/// * `only_rules` - If provided, only run these rules (comma-separated)
/// * `format` - Output format (text or json)
///
/// # Returns
/// Exit code: 0 if passed, 1 if any errors were found
pub fn run(
    input: &str,
    config_path: Option<&str>,
    disable_rules: &[String],
    only_rules: Option<&str>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let doc_path = Path::new(input);
    if !doc_path.exists() {
        bail!("File not found: {}", input);
    }

    let config = load_config_or_default(config_path)?;
    let doc = load_document(doc_path)?;
    let registry = build_registry(&config, disable_rules, only_rules);

    if registry.rule_metadata().iter().all(|r| !r.enabled) && format == OutputFormat::Text {
        eprintln!("{}: no rules enabled", "warning".yellow().bold());
    }

    let outcome = lint_document(&doc, registry)?;
    let success = outcome.is_clean();

    if format == OutputFormat::Json {
        let output = LintOutput {
            success,
            document_path: input.to_string(),
            nodes_visited: outcome.nodes_visited(),
            error_count: outcome.error_count(),
            outcome,
        };
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize lint output")?;
        println!("{}", json);
    } else {
        print_text_output(input, &outcome);
    }

    if success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Print lint results in human-readable text format.
fn print_text_output(input: &str, outcome: &LintOutcome) {
    println!("{} {}", "Linting:".cyan().bold(), input);

    if outcome.is_clean() {
        println!(
            "\n{} No issues found in {} node(s)",
            "PASSED".green().bold(),
            outcome.nodes_visited()
        );
        return;
    }

    println!("\n{}", "Errors:".red().bold());
    for summary in outcome.per_node_summaries.iter().filter(|s| !s.errors.is_empty()) {
        for error in &summary.errors {
            print_error(error);
        }
    }

    let summary = format!(
        "{} error(s) across {} node(s) ({})",
        outcome.error_count(),
        outcome.nodes_visited(),
        kind_breakdown(outcome)
    );
    println!("\n{} {}", "FAILED".red().bold(), summary.dimmed());
}

/// Renders `kind: count` pairs for every kind with at least one error.
fn kind_breakdown(outcome: &LintOutcome) -> String {
    ErrorKind::all()
        .iter()
        .filter_map(|&kind| match outcome.count_of(kind) {
            0 => None,
            n => Some(format!("{}: {}", kind, n)),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_error(error: &ErrorRecord) {
    let location = format!(" {} ({})", error.node.name, error.node.id);

    println!(
        "  {} [{}]{}: {}",
        "x".red(),
        error.kind.as_str().cyan(),
        location.dimmed(),
        error.message
    );

    if !error.value.is_empty() {
        println!("    {} {}", "->".dimmed(), error.value);
    }

    for candidate in error.matches.iter().flatten() {
        println!(
            "    {} {} ({})",
            "match:".dimmed(),
            candidate.value,
            candidate.source
        );
    }

    for candidate in error.suggestions.iter().flatten() {
        println!(
            "    {} {} ({})",
            "suggestion:".dimmed(),
            candidate.value,
            candidate.source
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc() -> Document {
        Document::from_json(
            r#"{
                "nodes": [{
                    "id": "1:2",
                    "name": "Card",
                    "type": "RECTANGLE",
                    "fills": [{ "type": "SOLID", "color": { "r": 0, "g": 0.5, "b": 1 } }],
                    "strokes": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0 } }],
                    "cornerRadius": 3,
                    "height": 48
                }]
            }"#,
        )
        .unwrap()
    }

    fn kinds(outcome: &LintOutcome) -> Vec<ErrorKind> {
        outcome.flat_errors.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("invalid".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_default_rules() {
        let registry = build_registry(&LintConfig::default(), &[], None);
        let outcome = lint_document(&doc(), registry).unwrap();
        assert_eq!(kinds(&outcome), vec![ErrorKind::Fill, ErrorKind::Stroke]);
        assert_eq!(outcome.flat_errors[0].value, "#0080ff");
    }

    #[test]
    fn test_disable_and_only_rules() {
        let config = LintConfig {
            check_radius: true,
            ..LintConfig::default()
        };

        let registry = build_registry(&config, &["stroke/missing-style".to_string()], None);
        let outcome = lint_document(&doc(), registry).unwrap();
        assert_eq!(kinds(&outcome), vec![ErrorKind::Fill, ErrorKind::Radius]);

        let registry = build_registry(&config, &[], Some("radius/off-scale, fill/missing-style"));
        let outcome = lint_document(&doc(), registry).unwrap();
        assert_eq!(kinds(&outcome), vec![ErrorKind::Fill, ErrorKind::Radius]);
    }

    #[test]
    fn test_json_output_shape() {
        let outcome = lint_document(&doc(), RuleRegistry::default()).unwrap();
        let output = LintOutput {
            success: outcome.is_clean(),
            document_path: "doc.json".to_string(),
            nodes_visited: outcome.nodes_visited(),
            error_count: outcome.error_count(),
            outcome,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["documentPath"], "doc.json");
        assert_eq!(json["errorCount"], 2);
        assert_eq!(json["outcome"]["flatErrors"][0]["type"], "fill");
        assert_eq!(json["outcome"]["perNodeSummaries"][0]["id"], "1:2");
    }

    #[test]
    fn test_kind_breakdown() {
        let outcome = lint_document(&doc(), RuleRegistry::default()).unwrap();
        assert_eq!(kind_breakdown(&outcome), "fill: 1, stroke: 1");
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let err = run("/nonexistent/doc.json", None, &[], None, OutputFormat::Json).unwrap_err();
        assert_eq!(err.to_string(), "File not found: /nonexistent/doc.json");
    }
}
