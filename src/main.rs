//! Fitness Dashboard (fitdash)
//!
//! Reads a dashboard snapshot and prints the derived metrics report as JSON.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing_subscriber::EnvFilter;

use fitdash::build_info::{self, BuildInfo};
use fitdash::report::{DashboardReport, NO_DATA};
use fitdash::store::JsonFileSource;

/// Get the snapshot path from the argument, environment, or use default
fn get_snapshot_path(arg: Option<String>) -> PathBuf {
    if let Some(path) = arg {
        return PathBuf::from(path);
    }

    std::env::var("FITDASH_SNAPSHOT_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("data");
            path.push("snapshot.json");
            path
        })
}

/// Evaluation date: `FITDASH_TODAY` (YYYY-MM-DD) or the local date
fn get_today() -> Result<NaiveDate, chrono::ParseError> {
    match std::env::var("FITDASH_TODAY") {
        Ok(value) => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d"),
        Err(_) => Ok(Local::now().date_naive()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (stderr, so stdout carries only the JSON report)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitdash=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let arg = std::env::args().nth(1);
    if matches!(arg.as_deref(), Some("--version") | Some("-V")) {
        println!("{}", BuildInfo::current().version_line());
        return Ok(());
    }

    build_info::print_startup_banner();

    let source = JsonFileSource::new(get_snapshot_path(arg));
    let today = get_today()?;
    tracing::info!(path = %source.path().display(), %today, "Building dashboard report");

    let report = DashboardReport::from_source(&source, today)?;

    let missing = report
        .cards
        .iter()
        .filter(|card| card.value == NO_DATA)
        .count();
    if missing > 0 {
        tracing::info!(missing, "Some dashboard cards have no data");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
