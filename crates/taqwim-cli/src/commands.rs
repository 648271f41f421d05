use anyhow::{Context, Result};
use chrono::{Days, Local, NaiveDate};
use serde::Serialize;
use taqwim_core::{
    major_events_with, month_days, upcoming_events, EventOccurrence, GregorianDate,
    HijriCalendar, HijriDate, MonthDay,
};

use crate::cli::Command;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Conversion {
    gregorian: GregorianDate,
    hijri: HijriDate,
    events: Vec<&'static str>,
}

fn today() -> GregorianDate {
    Local::now().date_naive().into()
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value).context("failed to encode JSON")?);
    } else {
        println!("{}", text(value));
    }
    Ok(())
}

fn convert(calendar: &HijriCalendar, date: GregorianDate) -> Result<Conversion> {
    let naive = date.to_naive_date()?;
    let hijri = calendar.hijri_of(date);
    Ok(Conversion {
        gregorian: date,
        hijri,
        events: major_events_with(calendar, naive),
    })
}

fn describe_occurrences(occurrences: &[EventOccurrence]) -> String {
    if occurrences.is_empty() {
        return "No events in range".to_string();
    }
    occurrences
        .iter()
        .map(|o| format!("{}  {:<22} {}", o.gregorian, o.label(), o.hijri))
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe_month(days: &[MonthDay]) -> String {
    days.iter()
        .map(|d| {
            let marker = if d.has_event { " *" } else { "" };
            format!("{:>2} {}  {} {}{}", d.hijri.day, d.hijri.month_name(), d.gregorian, d.weekday, marker)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run(command: Command, calendar: &HijriCalendar, json: bool) -> Result<()> {
    match command {
        Command::Convert { date } => {
            let result = convert(calendar, date.unwrap_or_else(today))?;
            emit(json, &result, |r| {
                let mut line = format!("{} = {}", r.gregorian, r.hijri);
                if !r.events.is_empty() {
                    line.push_str(&format!(" ({})", r.events.join(", ")));
                }
                line
            })
        }
        Command::ToGregorian { year, month, day } => {
            let date: GregorianDate = calendar
                .to_naive_date(year, month, day)
                .with_context(|| format!("cannot convert Hijri date {year}-{month}-{day}"))?
                .into();
            emit(json, &date, |d| format!("{} = {}", HijriDate::new(year, month, day), d))
        }
        Command::Events { date } => {
            let result = convert(calendar, date.unwrap_or_else(today))?;
            emit(json, &result.events, |events| {
                if events.is_empty() {
                    format!("No major events on {}", result.hijri)
                } else {
                    events.join("\n")
                }
            })
        }
        Command::Upcoming { from, days } => {
            let start: NaiveDate = from.unwrap_or_else(today).to_naive_date()?;
            let end = start
                .checked_add_days(Days::new(u64::from(days)))
                .context("upcoming window runs past the supported date range")?;
            tracing::debug!(%start, %end, "listing upcoming events");
            let occurrences: Vec<EventOccurrence> = upcoming_events(*calendar, start, end).collect();
            emit(json, &occurrences, |o| describe_occurrences(o))
        }
        Command::Month { year, month } => {
            let days: Vec<MonthDay> = month_days(calendar, year, month)?.collect();
            emit(json, &days, |d| describe_month(d))
        }
    }
}
