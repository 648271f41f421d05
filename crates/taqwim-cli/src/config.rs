use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use taqwim_core::{CalendarConfig, HijriCalendar};

use crate::cli::CalendarArgs;

/// Reads a JSON calendar configuration file.
fn load_file(path: &Path) -> Result<CalendarConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

/// Resolves the calendar: defaults, then the config file, then flags and
/// environment.
pub fn resolve(args: &CalendarArgs) -> Result<HijriCalendar> {
    let base = match &args.config {
        Some(path) => load_file(path)?,
        None => CalendarConfig::default(),
    };

    let config = CalendarConfig::builder()
        .adjustment(args.adjustment.unwrap_or(base.adjustment))
        .epoch(args.epoch.unwrap_or(base.epoch))
        .strict_adjustment(args.strict)
        .build()?;

    tracing::info!(adjustment = config.adjustment, epoch = %config.epoch, "calendar resolved");
    Ok(HijriCalendar::new(config))
}
