use crate::config::FormattingPolicy;
use crate::error::ReportResult;
use crate::excel::XlsxPackageWriter;
use crate::parser;
use crate::report::{ReportExporter, ReportRequest};
use crate::sample::sample_dataset;
use crate::types::TabularDataset;
use crate::word::DocxPackageWriter;
use chrono::Local;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "My Report";
pub const DEFAULT_BLURB: &str =
    "This is an example to show how easy it is to create a Word document from tabular data.";
pub const DEFAULT_WORD_PATH: &str = "My Report.docx";
pub const DEFAULT_EXCEL_PATH: &str = "My Report.xlsx";

/// Arguments of the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub dataset: Option<PathBuf>,
    pub title: String,
    pub blurb: String,
    pub word: PathBuf,
    pub excel: PathBuf,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            dataset: None,
            title: DEFAULT_TITLE.to_string(),
            blurb: DEFAULT_BLURB.to_string(),
            word: PathBuf::from(DEFAULT_WORD_PATH),
            excel: PathBuf::from(DEFAULT_EXCEL_PATH),
            config: None,
            verbose: false,
        }
    }
}

/// Execute the generate command
pub fn generate(opts: GenerateOptions) -> ReportResult<()> {
    println!("{}", "🔥 Report Forge - Generating reports".bold().green());

    match run_generate(&opts) {
        Ok(()) => {
            println!("{}", "✅ The reports were successfully generated".bold().green());
            println!();
            println!("   Word Report filename:  {}", opts.word.display());
            println!("   Excel Report filename: {}\n", opts.excel.display());
            Ok(())
        }
        Err(e) => {
            println!("{}", "❌ Failed to generate the reports".bold().red());
            println!();
            println!("   {}\n", e);
            Err(e)
        }
    }
}

fn run_generate(opts: &GenerateOptions) -> ReportResult<()> {
    let policy = match &opts.config {
        Some(path) => {
            if opts.verbose {
                println!("{}", format!("📖 Loading formatting policy {}", path.display()).cyan());
            }
            FormattingPolicy::from_yaml_file(path)?
        }
        None => FormattingPolicy::default(),
    };

    let dataset = load_dataset(opts.dataset.as_deref())?;

    if opts.verbose {
        println!(
            "   Table {}: {} columns, {} rows\n",
            dataset.name().bright_blue(),
            dataset.column_count(),
            dataset.row_count()
        );
        println!("{}", "📄 Exporting to Word and Excel...".cyan());
    }

    let request = ReportRequest {
        title: &opts.title,
        blurb: &opts.blurb,
        word_path: &opts.word,
        excel_path: &opts.excel,
    };

    ReportExporter::new(policy).export_all(
        &request,
        &dataset,
        &DocxPackageWriter::new(),
        &XlsxPackageWriter::new(),
    )
}

/// Dataset file when given, the sample dataset otherwise
fn load_dataset(path: Option<&Path>) -> ReportResult<TabularDataset> {
    match path {
        Some(p) => parser::parse_dataset(p),
        None => sample_dataset(Local::now().naive_local()),
    }
}

/// Execute the sample command: print or save the sample dataset as YAML
pub fn sample(output: Option<PathBuf>) -> ReportResult<()> {
    let dataset = sample_dataset(Local::now().naive_local())?;
    let yaml = parser::dataset_to_yaml(&dataset)?;

    match output {
        Some(path) => {
            fs::write(&path, yaml)?;
            println!("{}", "✅ Sample dataset written".bold().green());
            println!("   File: {}\n", path.display());
        }
        None => print!("{}", yaml),
    }
    Ok(())
}
