use std::path::PathBuf;

use calendarize_core::config::parse_weekday;
use calendarize_core::{query_range, LayoutScope, Navigation};
use chrono::NaiveDate;
use clap::Args;

#[derive(Args)]
pub struct NavArgs {
    /// Calendar scope: daily, weekly or monthly
    scope: LayoutScope,
    /// Reference day (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
    /// First weekday of a week, overriding the config
    #[arg(long)]
    week_start: Option<String>,
    /// Config file to use instead of the user's config
    #[arg(long)]
    config: Option<PathBuf>,
}

pub fn run(args: NavArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(args.config.as_deref())?;
    let week_start = args.week_start.unwrap_or(config.week_start);
    let week_start = parse_weekday("week_start", &week_start)?;

    let day = super::reference_day(args.date);
    let output = serde_json::json!({
        "navigation": Navigation::for_scope(args.scope, day),
        "query_range": query_range(args.scope, day, week_start),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
