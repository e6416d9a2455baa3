//! The `dtdgrade init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("dtdgrade.toml").exists() {
        println!("dtdgrade.toml already exists, skipping.");
    } else {
        std::fs::write("dtdgrade.toml", SAMPLE_CONFIG)?;
        println!("Created dtdgrade.toml");
    }

    if std::path::Path::new("students.csv").exists() {
        println!("students.csv already exists, skipping.");
    } else {
        std::fs::write("students.csv", EXAMPLE_ROSTER)?;
        println!("Created students.csv");
    }

    println!("\nNext steps:");
    println!("  1. Fill students.csv with your roster");
    println!("  2. Drop submissions into a homework directory (zips or folders)");
    println!("  3. Run: dtdgrade run --students students.csv --hw-dir <DIR> --tp 1");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# dtdgrade configuration

# Exercises per student, named exo_1 .. exo_N inside each submission.
num_exos = 5

# How submissions are stored: "auto", "archive" (<student>.zip),
# or "directory" (<student>/).
layout = "auto"

# Where grade sheets are written.
output_dir = "./evaluation"
"#;

const EXAMPLE_ROSTER: &str = "Name\nalice\nbob\n";
