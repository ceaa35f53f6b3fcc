mod benefits;
mod checkout;
mod discount;
mod store;

use clap::{builder::PossibleValue, Arg, ArgAction, Command};
use whosenxt::{config, Config};

pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &'static str = env!("CARGO_PKG_AUTHORS");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // If executed in a context where config file is available it will be
    // picked up automatically. Otherwise defaults are used, and the config
    // file path can still be provided through the `--config` argument.
    let mut config: Config = config::load().unwrap_or_default();

    let matches = cmd().get_matches();

    if let Some(config_path) = matches.get_one::<String>("config") {
        config = config::load_from(config_path)?;
    }
    if let Some(level) = matches.get_one::<String>("verbosity") {
        config.tracing.level = level.parse()?;
    }

    whosenxt::tracing::init(&config)?;

    let json = matches.get_flag("json");

    match matches.subcommand() {
        Some(("benefits", m)) => benefits::run(m, json)?,
        Some(("discount", m)) => discount::run(m, &config, json)?,
        Some(("checkout", m)) => checkout::run(m, &config, json)?,
        Some(("store", m)) => store::run(m, &config, json)?,
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

pub fn cmd() -> Command {
    Command::new("whosenxt")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .infer_subcommands(true)
        .version(VERSION)
        .author(AUTHORS)
        .about("Subscription benefits and store availability for WHOSENXT")
        .subcommand(benefits::cmd())
        .subcommand(discount::cmd())
        .subcommand(checkout::cmd())
        .subcommand(store::cmd())
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .global(true)
                .help("Path to the config file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print results as json"),
        )
        .arg(
            Arg::new("verbosity")
                .long("verbosity")
                .short('v')
                .display_order(100)
                .value_name("level")
                .value_parser(["trace", "debug", "info", "warn", "error", "none"])
                .global(true)
                .help("Set the verbosity of the log output, overriding the config"),
        )
}

/// Tier and subscription arguments shared by the benefit-related
/// subcommands.
pub fn subscription_args(cmd: Command) -> Command {
    use strum::IntoEnumIterator;

    cmd.arg(
        Arg::new("tier")
            .long("tier")
            .short('t')
            .value_name("TIER")
            .value_parser(
                whosenxt::SubscriptionTier::iter()
                    .map(|tier| PossibleValue::new(tier.to_string()))
                    .collect::<Vec<PossibleValue>>(),
            )
            .help("Subscription tier"),
    )
    .arg(
        Arg::new("unsubscribed")
            .long("unsubscribed")
            .action(ArgAction::SetTrue)
            .help("Treat the subscription as inactive"),
    )
}

pub fn subscription_from(matches: &clap::ArgMatches) -> whosenxt::Subscription {
    let tier = matches
        .get_one::<String>("tier")
        .and_then(|t| whosenxt::SubscriptionTier::from_record(t));
    whosenxt::Subscription::new(!matches.get_flag("unsubscribed"), tier)
}
