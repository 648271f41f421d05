use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taqwim_core::{GregorianDate, HijriEpoch};

/// Taqwim Hijri calendar converter.
#[derive(Debug, Parser)]
#[command(
    name = "taqwim",
    version,
    about = "Gregorian <-> Hijri calendar converter and Islamic events lookup"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub calendar: CalendarArgs,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Calendar configuration flags, layered over an optional JSON file.
#[derive(Debug, clap::Args)]
pub struct CalendarArgs {
    /// Path to a JSON calendar configuration (`{"adjustment": 1, "epoch": "civil"}`).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Moon-sighting day offset, positive = Hijri ahead.
    #[arg(short, long, global = true, env = "TAQWIM_ADJUSTMENT", allow_hyphen_values = true)]
    pub adjustment: Option<i64>,

    /// Tabular epoch: civil or astronomical.
    #[arg(short, long, global = true, env = "TAQWIM_EPOCH")]
    pub epoch: Option<HijriEpoch>,

    /// Reject adjustments outside [-2, 2] instead of clamping.
    #[arg(long, global = true)]
    pub strict: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a Gregorian date (YYYY-MM-DD) to Hijri.
    Convert {
        /// Gregorian date; defaults to today.
        date: Option<GregorianDate>,
    },
    /// Convert a Hijri date to Gregorian.
    ToGregorian {
        year: i32,
        month: u32,
        day: u32,
    },
    /// List the major Islamic events on a Gregorian date.
    Events {
        /// Gregorian date; defaults to today.
        date: Option<GregorianDate>,
    },
    /// List the events in the coming days.
    Upcoming {
        /// First day of the window; defaults to today.
        #[arg(long)]
        from: Option<GregorianDate>,

        /// Window length in days.
        #[arg(long, default_value_t = 365)]
        days: u32,
    },
    /// Print every day of a Hijri month.
    Month {
        year: i32,
        month: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from(["taqwim", "convert", "2024-01-01", "--adjustment", "-1"]).unwrap();
        assert_eq!(cli.calendar.adjustment, Some(-1));
        match cli.command {
            Command::Convert { date } => assert_eq!(date, Some(GregorianDate::new(2024, 1, 1))),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_epoch_and_verbosity() {
        let cli = Cli::try_parse_from(["taqwim", "-vv", "--epoch", "astronomical", "month", "1445", "9"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.calendar.epoch, Some(HijriEpoch::Astronomical));
        assert!(matches!(cli.command, Command::Month { year: 1445, month: 9 }));
    }

    #[test]
    fn test_rejects_bad_date() {
        assert!(Cli::try_parse_from(["taqwim", "events", "2024-02-30"]).is_err());
    }
}
