//! Command-line argument parsing using clap.
//!
//! Positional arguments follow the cal convention: `[month] [year]`.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "calgrid")]
#[command(about = "Renders a month, week or day calendar grid with events", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// View to render (month, week or day).
    #[arg(
        long,
        default_value = "month",
        help_heading = "Calendar options",
        value_name = "view"
    )]
    pub view: String,

    /// Reference date (e.g. 2020-05-05 or "May 5, 2020").
    #[arg(short, long, help_heading = "Calendar options", value_name = "date")]
    pub date: Option<String>,

    /// JSON file with calendar options and events.
    #[arg(
        short,
        long,
        help_heading = "Calendar options",
        value_name = "file",
        value_hint = ValueHint::FilePath
    )]
    pub events: Option<PathBuf>,

    /// Month (1-12 or name) - optional, used with year.
    #[arg(index = 1, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999).
    #[arg(index = 2, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Render a calendar grid with events mapped onto its days.

Without any arguments, render the current month.

Examples:
  calgrid                      Render current month
  calgrid 5 2020               Render May 2020
  calgrid --view week          Render the current week
  calgrid -d 2020-05-05        Render the month containing May 5, 2020
  calgrid -e events.json       Current month with events from a file
  calgrid --color              Disable colorized output";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Resolve the reference date text from the arguments, if any.
///
/// `--date` wins; otherwise positional `[month] [year]` selects the
/// first day of that month. Returns `None` when neither is given.
pub fn get_reference_date(args: &Args) -> Result<Option<String>, String> {
    if let Some(date) = &args.date {
        return Ok(Some(date.clone()));
    }

    let Some(month_text) = &args.month_arg else {
        return Ok(None);
    };

    // A lone 4-digit argument is a year, not a month.
    if args.year_arg.is_none()
        && let Ok(num) = month_text.parse::<i32>()
        && (1000..=9999).contains(&num)
    {
        return Ok(Some(format!("{:04}-01-01", num)));
    }

    let month =
        parse_month(month_text).ok_or_else(|| format!("Invalid month: {}", month_text))?;

    let year = match &args.year_arg {
        None => chrono::Local::now().date_naive().format("%Y").to_string(),
        Some(year_text) => {
            let year: i32 = year_text
                .parse()
                .map_err(|_| format!("Invalid year: {}", year_text))?;
            if !(1..=9999).contains(&year) {
                return Err(format!("Invalid year: {} (must be 1-9999)", year));
            }
            format!("{:04}", year)
        }
    };

    Ok(Some(format!("{}-{:02}-01", year, month)))
}

/// Parse month from string (numeric 1-12 or an English name), returning
/// the 1-based month number.
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    let s_lower = s.to_lowercase();
    let month_names: [(&str, u32); 23] = [
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ];
    month_names
        .iter()
        .find(|(name, _)| *name == s_lower)
        .map(|(_, num)| *num)
}
