//! giftbank CLI: browse a GIFT question bank, assemble exams, sit them and
//! compare their profiles.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod prompt;

#[derive(Parser)]
#[command(name = "giftbank", version, about = "GIFT question bank and exam assembly tool")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every question of the bank
    List {
        /// Question file or directory (default: questions_dir from the config)
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Search the bank by keyword or by question kind
    Search {
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Case-insensitive keyword looked up in the question text
        #[arg(long, conflicts_with = "kind", required_unless_present = "kind")]
        keyword: Option<String>,

        /// Question kind, e.g. "multiple-choice", "numeric"
        #[arg(long)]
        kind: Option<String>,
    },

    /// Print the markup of a question
    Show {
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Question title
        title: String,
    },

    /// Interactively assemble an exam from the bank
    Assemble {
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Sit an exam and get a score
    Take {
        /// Exam name (in exams_dir) or path to a .gift file
        exam: String,
    },

    /// Show the question-kind profile of an exam
    Profile {
        /// Exam name (in exams_dir) or path to a .gift file
        exam: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Compare an exam profile against reference files
    Compare {
        /// Exam name (in exams_dir) or path to a .gift file
        #[arg(long)]
        exam: String,

        /// Reference .gift files or directories (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        reference: Vec<PathBuf>,

        /// HTML chart output (default: chart_file from the config)
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List saved exams
    Exams,

    /// Check question files for malformed or unsupported questions
    Validate {
        /// Question file or directory
        path: PathBuf,
    },

    /// Fill in a contact card and export it as a vCard
    Contact {
        /// Output .vcf file
        #[arg(long)]
        output: PathBuf,
    },

    /// Create a starter config and a sample question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("giftbank_core=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // `init` must work even when an existing config file is broken.
    let config = || giftbank_core::config::load_config_from(cli.config.as_deref());

    match cli.command {
        Commands::List { bank } => commands::bank::list(&config()?, bank),
        Commands::Search {
            bank,
            keyword,
            kind,
        } => commands::bank::search(&config()?, bank, keyword, kind),
        Commands::Show { bank, title } => commands::bank::show(&config()?, bank, &title),
        Commands::Assemble { bank } => commands::assemble::execute(&config()?, bank),
        Commands::Take { exam } => commands::take::execute(&config()?, &exam),
        Commands::Profile { exam, format } => {
            commands::profile::execute(&config()?, &exam, &format)
        }
        Commands::Compare {
            exam,
            reference,
            chart,
            format,
        } => commands::compare::execute(&config()?, &exam, reference, chart, &format),
        Commands::Exams => commands::exams::execute(&config()?),
        Commands::Validate { path } => commands::validate::execute(&path),
        Commands::Contact { output } => commands::contact::execute(&output),
        Commands::Init => commands::init::execute(),
    }
}
