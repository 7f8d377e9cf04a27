//! Calendar grid CLI application.
//!
//! # Usage
//! ```ignore
//! calgrid                  // Current month
//! calgrid 5 2020           // May 2020
//! calgrid --view week      // Current week
//! calgrid -e events.json   // Current month with events from a file
//! ```

use std::io::IsTerminal;

use calgrid::args::{Args, get_reference_date};
use calgrid::calendar::Calendar;
use calgrid::config::CalendarOptions;
use calgrid::formatter::format_active_view;

fn main() {
    let args = Args::parse();

    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.start())
        .map_err(|e| eprintln!("calgrid: logging disabled: {}", e))
        .ok();

    if let Err(e) = run(&args) {
        eprintln!("calgrid: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = match &args.events {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            serde_json::from_str::<CalendarOptions>(&text)?
        }
        None => CalendarOptions::default(),
    };

    // CLI arguments override options from the file.
    options.initial_view = Some(args.view.clone());
    if let Some(date) = get_reference_date(args)? {
        options.initial_date = Some(date);
    }

    let calendar = Calendar::new(options)?;

    let color = !args.color && std::io::stdout().is_terminal();
    for line in format_active_view(&calendar, color) {
        println!("{}", line);
    }

    Ok(())
}
