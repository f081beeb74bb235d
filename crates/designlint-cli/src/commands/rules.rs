//! Rules command implementation
//!
//! Lists the rules a lint run with the given config would register.

use anyhow::{Context, Result};
use colored::Colorize;
use designlint::{RuleMetadata, RuleRegistry};
use std::process::ExitCode;

use crate::config::load_config_or_default;

/// Run the rules command.
pub fn run(config_path: Option<&str>, json: bool) -> Result<ExitCode> {
    let config = load_config_or_default(config_path)?;
    let metadata = RuleRegistry::default_rules(&config).rule_metadata();

    if json {
        let output =
            serde_json::to_string_pretty(&metadata).context("Failed to serialize rule list")?;
        println!("{}", output);
    } else {
        for rule in &metadata {
            println!("{}", format_rule(rule));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn format_rule(rule: &RuleMetadata) -> String {
    let applies_to: Vec<&str> = rule.applies_to.iter().map(|t| t.as_str()).collect();
    let status = if rule.enabled {
        String::new()
    } else {
        format!(" {}", "(disabled)".yellow())
    };
    format!(
        "{} [{}] {}{}",
        rule.id.cyan().bold(),
        applies_to.join(", ").dimmed(),
        rule.description,
        status
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use designlint::LintConfig;

    #[test]
    fn test_format_rule_mentions_targets() {
        colored::control::set_override(false);
        let config = LintConfig {
            disabled_rules: vec!["stroke/missing-style".to_string()],
            ..LintConfig::default()
        };
        let metadata = RuleRegistry::default_rules(&config).rule_metadata();

        let lines: Vec<String> = metadata.iter().map(format_rule).collect();
        assert!(lines[0].starts_with("text/missing-style [TEXT]"));
        assert!(lines[1].starts_with("fill/missing-style [RECTANGLE, TEXT]"));
        assert!(lines[2].ends_with("(disabled)"));
    }
}
