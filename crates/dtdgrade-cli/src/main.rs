//! dtdgrade CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "dtdgrade", version, about = "XML/DTD homework grading harness")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an XML file against a DTD file
    Validate {
        /// Path to the XML document
        xml_file: PathBuf,

        /// Path to the DTD schema
        dtd_file: PathBuf,
    },

    /// Run the full evaluation for an assignment
    Run {
        /// CSV file with student names
        #[arg(long, short = 's', default_value = "./students.csv")]
        students: PathBuf,

        /// Directory containing student submissions (homework dir)
        #[arg(long = "hw-dir", short = 'd', visible_alias = "dir")]
        hw_dir: PathBuf,

        /// TP identifier of the assignment to grade
        #[arg(long)]
        tp: u32,

        /// Exercises per student (default from config, then 5)
        #[arg(long)]
        num_exos: Option<u32>,

        /// Submission layout: auto, archive, directory
        #[arg(long)]
        layout: Option<String>,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: csv, json, markdown, all
        #[arg(long, default_value = "csv")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and example roster
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dtdgrade=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { xml_file, dtd_file } => commands::validate::execute(xml_file, dtd_file),
        Commands::Run {
            students,
            hw_dir,
            tp,
            num_exos,
            layout,
            output,
            format,
            config,
        } => commands::run::execute(students, hw_dir, tp, num_exos, layout, output, format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
