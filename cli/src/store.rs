use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime, Utc};
use clap::{arg, Arg, ArgAction, ArgMatches};

use whosenxt::{AvailabilityStatus, Config, WeeklySchedule};

pub fn cmd() -> clap::Command {
    clap::Command::new("store")
        .subcommand_required(true)
        .display_order(40)
        .about("Inspect store opening hours")
        .subcommand(
            clap::Command::new("status")
                .about("Show whether the store is currently open")
                .arg_required_else_help(true)
                .arg(arg!(<schedule> "Path to schedule file (toml or json)"))
                .arg(
                    Arg::new("at")
                        .long("at")
                        .value_name("YYYY-MM-DD HH:MM")
                        .help("Evaluate at given time instead of now"),
                )
                .arg(
                    Arg::new("store_time")
                        .long("store-time")
                        .action(ArgAction::SetTrue)
                        .help(
                            "Evaluate in the store's own timezone. \
                            With `--at`, the given time is read as UTC",
                        ),
                ),
        )
        .subcommand(
            clap::Command::new("hours")
                .about("Print weekly opening hours")
                .arg_required_else_help(true)
                .arg(arg!(<schedule> "Path to schedule file (toml or json)")),
        )
}

pub fn run(matches: &ArgMatches, config: &Config, json: bool) -> Result<()> {
    match matches.subcommand() {
        Some(("status", m)) => {
            let schedule = load_schedule(m)?;
            let at = m
                .get_one::<String>("at")
                .map(|s| parse_at(s))
                .transpose()?;

            let status = if m.get_flag("store_time") {
                let instant = at.map(|at| at.and_utc()).unwrap_or_else(Utc::now);
                schedule.availability_at(instant, config.stores.timezone)
            } else {
                schedule.availability(at.unwrap_or_else(|| Local::now().naive_local()))
            };

            print_status(&status, json)?;
        }
        Some(("hours", m)) => {
            let schedule = load_schedule(m)?;
            let lines = schedule.weekly_hours();
            if json {
                println!("{}", serde_json::to_string_pretty(&lines)?);
            } else {
                for line in lines {
                    println!("{}", line);
                }
            }
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

fn load_schedule(matches: &ArgMatches) -> Result<WeeklySchedule> {
    // schedule path is always provided
    let path = matches.get_one::<String>("schedule").unwrap();
    let schedule = whosenxt::util::load_record(path)
        .with_context(|| format!("failed loading schedule from {}", path))?;
    Ok(schedule)
}

fn parse_at(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), "%Y-%m-%d %H:%M")
        .with_context(|| format!("expected `YYYY-MM-DD HH:MM`, got: {}", input))
}

fn print_status(status: &AvailabilityStatus, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(status)?);
        return Ok(());
    }

    println!("{}", status.status_text);
    if let Some(next) = &status.next_change_text {
        println!("{}", next);
    }
    Ok(())
}
