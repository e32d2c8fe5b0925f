use std::io::Read;
use std::path::PathBuf;

use calendarize_core::{compute_layout, events_from_json, LayoutConfig, LayoutScope};
use chrono::NaiveDate;
use clap::Args;

#[derive(Args)]
pub struct LayoutArgs {
    /// Reference day (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
    /// JSON array of event records, or "-" for stdin
    #[arg(long, default_value = "-")]
    events: String,
    /// Config file to use instead of the user's config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Minutes per grid row
    #[arg(long, allow_negative_numbers = true)]
    unit: Option<i64>,
    /// First visible minute of the day
    #[arg(long, allow_negative_numbers = true)]
    day_start: Option<i64>,
    /// End of the visible window in minutes (exclusive)
    #[arg(long, allow_negative_numbers = true)]
    day_end: Option<i64>,
    /// Only emit rows holding at least one event
    #[arg(long)]
    compact: bool,
    /// First weekday shown (e.g. "monday")
    #[arg(long)]
    week_start: Option<String>,
    /// Last weekday shown (e.g. "sunday")
    #[arg(long)]
    week_end: Option<String>,
    /// Calendar identifier to emit instead of a generated one
    #[arg(long)]
    id: Option<String>,
}

impl LayoutArgs {
    fn apply(&self, config: &mut LayoutConfig) {
        if let Some(unit) = self.unit {
            config.unit = unit;
        }
        if let Some(day_start) = self.day_start {
            config.day_start = day_start;
        }
        if let Some(day_end) = self.day_end {
            config.day_end = day_end;
        }
        if self.compact {
            config.verbose = false;
        }
        if let Some(week_start) = &self.week_start {
            config.week_start = week_start.clone();
        }
        if let Some(week_end) = &self.week_end {
            config.week_end = week_end.clone();
        }
        if let Some(id) = &self.id {
            config.id = Some(id.clone());
        }
    }
}

fn read_events(source: &str) -> Result<String, std::io::Error> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source)
    }
}

pub fn run(scope: LayoutScope, args: LayoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = super::load_config(args.config.as_deref())?;
    args.apply(&mut config);

    let events = events_from_json(&read_events(&args.events)?)?;
    let day = super::reference_day(args.date);
    let layout = compute_layout(scope, day, &events, &config)?;

    let excluded = layout.diagnostics().len();
    if excluded > 0 {
        tracing::info!(%scope, excluded, "some events were left out of the layout");
    }

    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}
