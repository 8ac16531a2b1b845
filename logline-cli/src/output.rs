use colored::*;
use logline_core::errors::LogLineError;
use logline_core::serde_utils::to_pretty_json;
use logline_walltime::{CalendarDateTime, TimeOfDay};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeCliError {
    #[error(transparent)]
    Time(#[from] LogLineError),
    #[error("{0}")]
    Validation(String),
}

/// Field view printed by `--json`.
#[derive(Debug, Serialize)]
pub struct TimeReport {
    pub text: String,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl From<&TimeOfDay> for TimeReport {
    fn from(value: &TimeOfDay) -> Self {
        Self {
            text: value.to_string(),
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
        }
    }
}

pub fn print_time(value: &TimeOfDay, json: bool) -> Result<(), TimeCliError> {
    if json {
        println!("{}", to_pretty_json(&TimeReport::from(value))?);
    } else {
        println!("{value}");
    }
    Ok(())
}

pub fn print_calendar(value: &CalendarDateTime, json: bool) -> Result<(), TimeCliError> {
    if json {
        println!("{}", to_pretty_json(value)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "✔ Date-time:".green().bold(),
        value.datetime.format("%Y-%m-%d %H:%M:%S").to_string().bold()
    );
    println!("  Zone: {}", value.time_zone);
    println!("  Locale: {}", value.locale);
    Ok(())
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "✘ Error:".red().bold(), err);
}
