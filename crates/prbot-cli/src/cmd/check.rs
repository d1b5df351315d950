use anyhow::{anyhow, Result};
use std::io::Read;
use std::path::Path;

use prbot_core::rules::default_rules;

/// Run the rule set against a local description file (or stdin for `-`).
/// Prints one `- <violation>` line per failed rule; fails the process when
/// the description does not pass.
pub fn run(file: &Path, skip: &[String]) -> Result<()> {
    let description = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file)?
    };

    let rules = default_rules();
    let skip: Vec<&str> = skip.iter().map(String::as_str).collect();
    let result = rules
        .qualify(&description, &skip)
        .map_err(|e| anyhow!("{e}"))?;

    if result.ok {
        println!("description looks good");
        return Ok(());
    }

    for violation in &result.violations {
        println!("- {violation}");
    }
    Err(anyhow!("description does not pass the checks"))
}
