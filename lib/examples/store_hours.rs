//! Shows how to load configuration and a store schedule from files and
//! evaluate the store's availability.

use chrono::Utc;

use whosenxt::{config, util, Config, WeeklySchedule};

fn main() -> anyhow::Result<()> {
    // Load configuration from file
    let config: Config = config::load_from(&format!(
        "{}/../whosenxt.toml",
        env!("CARGO_MANIFEST_DIR")
    ))?;

    let schedule: WeeklySchedule = util::load_record(format!(
        "{}/../demos/store.toml",
        env!("CARGO_MANIFEST_DIR")
    ))?;

    for line in schedule.weekly_hours() {
        println!("{}", line);
    }

    let status = schedule.availability_at(Utc::now(), config.stores.timezone);
    println!();
    println!("{}", status.status_text);
    if let Some(next) = status.next_change_text {
        println!("{}", next);
    }

    Ok(())
}
