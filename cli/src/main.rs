//! xlsxpeek CLI - XLSX inspection tool
//!
//! Prints the shared strings and resolved cell values of a workbook's first
//! worksheet for manual inspection.

use clap::{Args, Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use xlsxpeek::render::{JsonFormat, Language, RenderOptions};
use xlsxpeek::report::{self, InspectOptions, Report};

/// Inspect XLSX shared strings and worksheet cell values
#[derive(Parser)]
#[command(
    name = "xlsxpeek",
    version,
    about = "Inspect XLSX shared strings and cell values",
    long_about = "xlsxpeek - diagnostic inspection of XLSX workbooks.\n\n\
                  Lists archive entries and shared strings, and resolves the cells of the \
                  first worksheet to their display text."
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Archive listing, shared strings and the first data rows
    Overview {
        #[command(flatten)]
        output: OutputArgs,

        /// Data rows to list (0 = all)
        #[arg(long, default_value = "10")]
        max_data_rows: usize,

        /// Shared strings to list (0 = all)
        #[arg(long, default_value = "0")]
        max_strings: usize,
    },

    /// Cell-by-cell view of the leading rows and a data row census
    #[command(visible_alias = "detailed")]
    Detail {
        #[command(flatten)]
        output: OutputArgs,

        /// Shared strings to list (0 = all)
        #[arg(long, default_value = "20")]
        max_strings: usize,

        /// Leading rows to show cell by cell (0 = all)
        #[arg(long, default_value = "10")]
        max_rows: usize,

        /// Data rows to sample (0 = all)
        #[arg(long, default_value = "5")]
        max_samples: usize,
    },

    /// Print the shared string table
    Strings {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the archive entries
    Files {
        /// Input file path
        input: PathBuf,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Input file path
    input: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Label language (en, ru)
    #[arg(long, default_value = "en")]
    lang: Language,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Compact JSON (no indentation)
    #[arg(long, requires = "json")]
    compact: bool,

    /// Print values without quotes and escapes
    #[arg(long)]
    raw: bool,

    /// Truncate values to this many terminal columns
    #[arg(long)]
    width: Option<usize>,
}

impl OutputArgs {
    fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_language(self.lang)
            .with_quoted_values(!self.raw)
            .with_max_value_width(self.width)
    }

    fn json_format(&self) -> JsonFormat {
        if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        }
    }

    fn source(&self) -> String {
        self.input.display().to_string()
    }
}

fn limit(value: usize) -> Option<usize> {
    (value > 0).then_some(value)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Overview {
            output,
            max_data_rows,
            max_strings,
        } => {
            let options = InspectOptions::new()
                .with_max_data_rows(limit(max_data_rows))
                .with_max_shared_strings(limit(max_strings));

            let inspector = open(&output.input)?;
            let report = Report::Overview(report::build_overview(
                &inspector,
                output.source(),
                &options,
            ));
            emit_report(&output, &report)?;
        }

        Commands::Detail {
            output,
            max_strings,
            max_rows,
            max_samples,
        } => {
            let options = InspectOptions::detailed()
                .with_max_shared_strings(limit(max_strings))
                .with_max_detail_rows(limit(max_rows))
                .with_max_sample_rows(limit(max_samples));

            let inspector = open(&output.input)?;
            let report = Report::Detailed(report::build_detailed(
                &inspector,
                output.source(),
                &options,
            ));
            emit_report(&output, &report)?;
        }

        Commands::Strings { output } => {
            let inspector = open(&output.input)?;
            if let Some(error) = inspector.shared_strings_error() {
                return Err(format!("could not read shared strings: {}", error).into());
            }
            let shared = inspector.shared_strings();
            let strings = report::indexed_strings(shared, None);

            let content = if output.json {
                xlsxpeek::render::shared_strings_to_json(shared, output.json_format())?
            } else {
                let options = output.render_options();
                xlsxpeek::render::render_string_table(shared.len(), &strings, &options)
            };
            emit(&output, &content)?;
        }

        Commands::Files { input } => {
            let inspector = open(&input)?;
            for file in inspector.files() {
                println!("{}", file);
            }
        }
    }

    Ok(())
}

fn open(input: &Path) -> xlsxpeek::Result<xlsxpeek::XlsxInspector> {
    let pb = create_spinner("Reading workbook...");
    let result = xlsxpeek::open_workbook(input);
    pb.finish_and_clear();
    result
}

fn emit_report(args: &OutputArgs, report: &Report) -> Result<(), Box<dyn std::error::Error>> {
    let content = if args.json {
        xlsxpeek::render::to_json(report, args.json_format())?
    } else {
        xlsxpeek::render::to_text(report, &args.render_options())?
    };
    emit(args, &content)
}

/// Write rendered output and confirm when it went to a file.
fn emit(args: &OutputArgs, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    write_output(args.output.as_ref(), content)?;

    if let Some(path) = &args.output {
        println!("{} Report written: {}", "✓".green().bold(), path.display());
    }
    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write!(handle, "{}", content)?;
        }
    }
    Ok(())
}
