//! fittrack CLI - Command-line interface for fittrack
//!
//! Commands:
//! - show: Render the report for one training given as flags
//! - transform: Process training records from a file or stdin (batch mode)
//! - kinds: List recognized training kinds

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use fittrack::encoder::TrainingEncoder;
use fittrack::report::render;
use fittrack::schema::{RecordAdapter, TrainingRecord};
use fittrack::types::{Training, TrainingKind, UserProfile};
use fittrack::{TrainingProcessor, FITTRACK_VERSION};

/// fittrack - Training metrics for running, walking and swimming
#[derive(Parser)]
#[command(name = "fittrack")]
#[command(version = FITTRACK_VERSION)]
#[command(about = "Compute distance, speed and calories for trainings", long_about = None)]
struct Cli {
    /// JSON profile with default weight_kg / height_cm
    #[arg(long, global = true, env = "FITTRACK_PROFILE")]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the report for one training
    Show {
        /// Training kind (Бег, Ходьба, Плавание, or running, walking, swimming)
        #[arg(short, long)]
        kind: String,

        /// Steps or strokes
        #[arg(short, long, allow_negative_numbers = true)]
        action: i64,

        /// Duration in hours
        #[arg(short, long, allow_negative_numbers = true)]
        duration: f64,

        /// Weight in kg (falls back to the profile)
        #[arg(long, allow_negative_numbers = true)]
        weight: Option<f64>,

        /// Height in cm (falls back to the profile)
        #[arg(long, allow_negative_numbers = true)]
        height: Option<f64>,

        /// Pool length in meters
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        pool_length: i64,

        /// Number of pool lengths swum
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        pool_count: i64,

        /// Output the JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Process training records (batch mode)
    Transform {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// List recognized training kinds
    Kinds {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one record per line)
    Ndjson,
    /// JSON array of records
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Text reports separated by blank lines
    Text,
    /// Newline-delimited JSON (one report per line)
    Ndjson,
    /// JSON array of reports
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), FitCliError> {
    let profile = cli.profile.as_deref().map(load_profile).transpose()?;

    match cli.command {
        Commands::Show {
            kind,
            action,
            duration,
            weight,
            height,
            pool_length,
            pool_count,
            json,
        } => {
            let record = TrainingRecord {
                id: None,
                kind,
                action,
                duration_hours: duration,
                weight_kg: weight,
                height_cm: height,
                pool_length_m: Some(pool_length),
                pool_count: Some(pool_count),
            };
            cmd_show(&record, profile.as_ref(), json)
        }

        Commands::Transform {
            input,
            output,
            input_format,
            output_format,
        } => cmd_transform(&input, &output, input_format, output_format, profile),

        Commands::Kinds { json } => cmd_kinds(json),
    }
}

fn cmd_show(
    record: &TrainingRecord,
    profile: Option<&UserProfile>,
    json: bool,
) -> Result<(), FitCliError> {
    let training = RecordAdapter::to_training(record, profile)?;

    if json {
        let report = TrainingEncoder::new().encode(&training, None);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&training);
    }

    Ok(())
}

fn cmd_transform(
    input: &Path,
    output: &Path,
    input_format: InputFormat,
    output_format: OutputFormat,
    profile: Option<UserProfile>,
) -> Result<(), FitCliError> {
    // Read input
    let input_data = if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            log::warn!("reading training records from an interactive terminal; end input with Ctrl-D");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    // Parse records
    let records = match input_format {
        InputFormat::Ndjson => RecordAdapter::parse_ndjson(&input_data)?,
        InputFormat::Json => RecordAdapter::parse_array(&input_data)?,
    };

    if records.is_empty() {
        return Err(FitCliError::NoRecords);
    }

    let processor = match profile {
        Some(profile) => TrainingProcessor::with_profile(profile),
        None => TrainingProcessor::new(),
    };

    let output_data = match output_format {
        OutputFormat::Text => processor
            .render_records(&records)?
            .iter()
            .map(|text| with_trailing_newline(text))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Ndjson => {
            let mut lines: Vec<String> = Vec::new();
            for report in processor.process_records(&records)? {
                lines.push(serde_json::to_string(&report)?);
            }
            lines.join("\n") + "\n"
        }
        OutputFormat::Json => serde_json::to_string(&processor.process_records(&records)?)?,
        OutputFormat::JsonPretty => {
            serde_json::to_string_pretty(&processor.process_records(&records)?)?
        }
    };

    log::info!("transformed {} training records", records.len());

    if output.to_string_lossy() == "-" {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn cmd_kinds(json: bool) -> Result<(), FitCliError> {
    let kinds: Vec<KindInfo> = TrainingKind::KNOWN
        .iter()
        .map(|kind| KindInfo {
            id: kind.as_str().to_string(),
            label: kind.label().to_string(),
            requires_height: kind.requires_height(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&kinds)?);
    } else {
        println!("Training kinds");
        println!("==============");
        for kind in &kinds {
            println!("  {:<10} {}", kind.id, kind.label);
        }
        println!();
        println!("Swimming also reads --pool-length and --pool-count.");
        println!("Walking also reads the user's height.");
    }

    Ok(())
}

// Helper functions

fn print_text(training: &Training) {
    print!("{}", with_trailing_newline(&render(training)));
}

// Reports already end in a newline; the sentinel does not
fn with_trailing_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{}\n", text)
    }
}

fn load_profile(path: &Path) -> Result<UserProfile, FitCliError> {
    let json = fs::read_to_string(path)?;
    let profile = UserProfile::from_json(&json)?;
    log::debug!("loaded profile from {}", path.display());
    Ok(profile)
}

// Error handling

#[derive(Debug)]
enum FitCliError {
    Io(io::Error),
    Compute(fittrack::ComputeError),
    Json(serde_json::Error),
    NoRecords,
}

impl From<io::Error> for FitCliError {
    fn from(e: io::Error) -> Self {
        FitCliError::Io(e)
    }
}

impl From<fittrack::ComputeError> for FitCliError {
    fn from(e: fittrack::ComputeError) -> Self {
        FitCliError::Compute(e)
    }
}

impl From<serde_json::Error> for FitCliError {
    fn from(e: serde_json::Error) -> Self {
        FitCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<FitCliError> for CliError {
    fn from(e: FitCliError) -> Self {
        match e {
            FitCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            FitCliError::Compute(fittrack::ComputeError::MissingField(field)) => CliError {
                code: "MISSING_FIELD".to_string(),
                message: format!("Missing required field: {}", field),
                hint: Some("Pass it on the record, as a flag, or in --profile".to_string()),
            },
            FitCliError::Compute(e) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Ensure records have kind, action and duration_hours".to_string()),
            },
            FitCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            FitCliError::NoRecords => CliError {
                code: "NO_RECORDS".to_string(),
                message: "No training records found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
        }
    }
}

#[derive(serde::Serialize)]
struct KindInfo {
    id: String,
    label: String,
    requires_height: bool,
}
