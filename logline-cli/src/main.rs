use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use logline_core::config::{load_config, WallTimeConfig};
use logline_core::logging::init_tracing;
use logline_core::serde_utils::from_json_str;
use logline_walltime::{to_calendar, CalendarOptions, TimeOfDay, TimeZoneSpec};

mod output;

use output::{print_calendar, print_error, print_time, TimeCliError};

#[derive(Parser)]
#[command(name = "logline-time")]
#[command(about = "LogLine wall-clock times in hh:mm:ss form", long_about = None)]
struct Cli {
    /// Default log level when RUST_LOG is unset
    #[arg(long, global = true, env = "LOGLINE_LOG_LEVEL")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current local time
    Now {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Validate a hh:mm:ss string and echo it back
    Parse {
        text: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Render explicit fields as hh:mm:ss
    Format(FormatArgs),
    /// Build a time from a JSON object of hour/minute/second
    Fields {
        /// e.g. '{"hour": 9, "minute": 30}'
        object: String,
    },
    /// Anchor a time to a reference date
    Calendar(CalendarArgs),
    /// Show version information
    Version,
}

#[derive(Args)]
struct FormatArgs {
    #[arg(long, allow_hyphen_values = true)]
    hour: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    minute: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    second: Option<i64>,
}

#[derive(Args)]
struct CalendarArgs {
    text: String,
    /// Reference date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,
    #[arg(long)]
    locale: Option<String>,
    /// IANA zone name attached as a label; floating when omitted
    #[arg(long)]
    zone: Option<String>,
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config().context("failed to load configuration")?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_tracing(Some(level)).context("failed to initialise tracing")?;
    tracing::debug!(environment = ?config.environment, "configuration loaded");

    match cli.command {
        Commands::Now { json } => print_time(&TimeOfDay::now(), json)?,
        Commands::Parse { text, json } => {
            let value = TimeOfDay::parse(&text).with_context(|| format!("'{text}'"))?;
            print_time(&value, json)?;
        }
        Commands::Format(args) => {
            let mut fields = TimeOfDay::builder();
            fields.hour = args.hour;
            fields.minute = args.minute;
            fields.second = args.second;
            print_time(&fields.build(), false)?;
        }
        Commands::Fields { object } => {
            let value = fields_from_json(&object)?;
            print_time(&value, false)?;
        }
        Commands::Calendar(args) => {
            let value = TimeOfDay::parse(&args.text).with_context(|| format!("'{}'", args.text))?;
            let options = calendar_options(&config, &args);
            let converted = to_calendar(&value, &options)?;
            print_calendar(&converted, args.json)?;
        }
        Commands::Version => {
            println!("LogLine wall-clock v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn fields_from_json(object: &str) -> Result<TimeOfDay, TimeCliError> {
    let parsed: serde_json::Value = from_json_str(object)?;
    let map = parsed.as_object().ok_or_else(|| {
        TimeCliError::Validation("expected a JSON object with hour/minute/second".into())
    })?;
    Ok(TimeOfDay::from_fields(map)?)
}

/// Command-line flags win over configuration, which wins over the neutral defaults.
fn calendar_options(config: &WallTimeConfig, args: &CalendarArgs) -> CalendarOptions {
    let mut options = CalendarOptions::default();
    if let Some(date) = args.date.or(config.calendar_date) {
        options = options.with_date(date);
    }
    if let Some(locale) = args.locale.clone().or_else(|| config.calendar_locale.clone()) {
        options = options.with_locale(locale);
    }
    if let Some(zone) = &args.zone {
        options = options.with_time_zone(TimeZoneSpec::Named(zone.clone()));
    }
    options
}
