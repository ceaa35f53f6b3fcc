use std::str::FromStr;

use anyhow::{bail, Result};
use clap::{arg, ArgMatches};
use rust_decimal::Decimal;
use serde_json::json;

use whosenxt::Config;

pub fn cmd() -> clap::Command {
    crate::subscription_args(
        clap::Command::new("discount")
            .display_order(20)
            .about("Apply the subscriber discount to a price")
            .arg_required_else_help(true)
            .arg(arg!(<price> "Item price"))
            .arg(arg!(-k --category [category] "Item category")),
    )
}

pub fn parse_price(input: &str) -> Result<Decimal> {
    let price = Decimal::from_str(input.trim())?;
    if price.is_sign_negative() {
        bail!("price can't be negative: {}", input);
    }
    Ok(price)
}

pub fn run(matches: &ArgMatches, config: &Config, json: bool) -> Result<()> {
    // price is always provided
    let price = parse_price(matches.get_one::<String>("price").unwrap())?;
    let category = matches.get_one::<String>("category").map(String::as_str);

    let profile = crate::subscription_from(matches).benefits();
    let policy = &config.discounts;

    let eligible = policy.is_eligible(category);
    let discounted = policy.apply(&profile, price, category);
    let savings = policy.savings(&profile, price, category);

    if json {
        let out = json!({
            "price": price,
            "eligible": eligible,
            "discount_percentage": profile.discount_percentage,
            "discounted_price": discounted,
            "savings": savings,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if !eligible {
        println!("Category not eligible for subscriber discounts");
    }
    println!("price:      {}", price.round_dp(2));
    println!("discounted: {}", discounted.round_dp(2));
    println!("savings:    {}", savings.round_dp(2));

    Ok(())
}
