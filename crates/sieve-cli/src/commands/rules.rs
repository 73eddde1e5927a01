//! Rules command - list the character rules.

use colored::Colorize;
use sieve::{CLEANABLE, UNCLEANABLE, classify::escape_literal};

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        let rules = serde_json::json!({
            "cleanable": CLEANABLE,
            "uncleanable": UNCLEANABLE,
        });
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    println!("{}", "Cleanable (normalized in clean rows):".green().bold());
    for rule in CLEANABLE {
        let source = escape_literal(&rule.source.to_string());
        let replacement = if rule.replacement.is_empty() {
            "(removed)".dimmed().to_string()
        } else {
            format!("'{}'", rule.replacement)
        };
        println!("  {:14} {:26} -> {}", source, rule.label, replacement);
    }

    println!();
    println!("{}", "Uncleanable (row is quarantined):".red().bold());
    for rule in UNCLEANABLE {
        println!("  {:18} {}", rule.name.white().bold(), rule.description);
        println!("  {:18} e.g. {}", "", rule.example.dimmed());
    }

    Ok(())
}
