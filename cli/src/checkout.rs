use anyhow::Result;
use clap::{arg, ArgMatches};

use whosenxt::checkout::{summarize, PricedItem};
use whosenxt::Config;

/// Cart file layout, a list of `[[items]]` tables in toml or an `items`
/// array in json.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct Cart {
    pub items: Vec<PricedItem>,
}

pub fn cmd() -> clap::Command {
    crate::subscription_args(
        clap::Command::new("checkout")
            .display_order(30)
            .about("Summarize a cart with subscriber discounts applied")
            .arg_required_else_help(true)
            .arg(arg!(<cart> "Path to cart file (toml or json)")),
    )
}

pub fn run(matches: &ArgMatches, config: &Config, json: bool) -> Result<()> {
    // cart path is always provided
    let path = matches.get_one::<String>("cart").unwrap();
    let cart: Cart = whosenxt::util::load_record(path)?;

    let profile = crate::subscription_from(matches).benefits();
    let summary = summarize(&cart.items, &profile, &config.discounts);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for (item, line) in cart.items.iter().zip(&summary.lines) {
        println!(
            "{:<40} {:>10} {:>10}",
            item.to_string(),
            line.total.round_dp(2),
            format!("-{}", line.savings.round_dp(2))
        );
    }
    println!("subtotal: {}", summary.subtotal.round_dp(2));
    println!("savings:  {}", summary.savings.round_dp(2));
    println!("total:    {}", summary.total.round_dp(2));

    Ok(())
}
