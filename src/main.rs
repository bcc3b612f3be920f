use anyhow::Context;
use clap::{Parser, Subcommand};
use report_forge::cli::{self, commands, GenerateOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "report-forge")]
#[command(about = "Turn a tabular dataset into a Word report and an Excel sheet.")]
#[command(long_about = "Report Forge - Tabular data to Word (.docx) and Excel (.xlsx)

The Word report carries a bold heading, an introductory paragraph and the
data as a bordered table. The Excel workbook carries one sheet named after
the table, with the column names in the first row.

COMMANDS:
  generate  - Build both reports from a dataset (or the built-in sample)
  sample    - Print or save the sample dataset as YAML

EXAMPLES:
  report-forge generate                              # Sample data, default names
  report-forge generate -d sales.yaml -t \"Q3 Sales\"
  report-forge generate -d sales.yaml --config policy.yaml --verbose
  report-forge sample -o sample.yaml

LOGGING:
  REPORT_FORGE_LOG (or RUST_LOG) sets the log filter, e.g. report_forge=debug")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Word and Excel reports
    Generate {
        /// Dataset YAML file (built-in sample when omitted)
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Report title (first, bold paragraph)
        #[arg(short, long, default_value = commands::DEFAULT_TITLE)]
        title: String,

        /// Introductory paragraph under the title
        #[arg(short, long, default_value = commands::DEFAULT_BLURB)]
        blurb: String,

        /// Word output path
        #[arg(short, long, default_value = commands::DEFAULT_WORD_PATH)]
        word: PathBuf,

        /// Excel output path
        #[arg(short, long, default_value = commands::DEFAULT_EXCEL_PATH)]
        excel: PathBuf,

        /// Formatting policy YAML file
        #[arg(short, long, env = "REPORT_FORGE_CONFIG")]
        config: Option<PathBuf>,

        /// Show verbose export steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the sample dataset as YAML
    Sample {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "report_forge=debug"
    } else {
        "report_forge=info"
    };
    let filter = EnvFilter::try_from_env("REPORT_FORGE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            dataset,
            title,
            blurb,
            word,
            excel,
            config,
            verbose,
        } => {
            init_tracing(verbose);
            cli::generate(GenerateOptions {
                dataset,
                title,
                blurb,
                word,
                excel,
                config,
                verbose,
            })
            .context("report generation failed")
        }

        Commands::Sample { output } => {
            init_tracing(false);
            cli::sample(output).context("could not produce the sample dataset")
        }
    }
}
