use anyhow::Result;
use clap::ArgMatches;

pub fn cmd() -> clap::Command {
    crate::subscription_args(
        clap::Command::new("benefits")
            .display_order(10)
            .about("Show benefits granted by a subscription"),
    )
}

pub fn run(matches: &ArgMatches, json: bool) -> Result<()> {
    let subscription = crate::subscription_from(matches);
    let profile = subscription.benefits();

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    match subscription.tier().filter(|_| subscription.subscribed) {
        Some(tier) => println!("Benefits for `{}` subscribers:", tier),
        None => println!("No active subscription:"),
    }
    println!("  discount:               {}%", profile.discount_percentage);
    println!(
        "  free delivery:          {} day(s) per week",
        profile.free_delivery_days_per_week
    );
    println!("  support:                {}", profile.support_tier);
    println!("  early gig access:       {}", profile.has_early_gig_access);
    println!("  store tools:            {}", profile.has_store_tools);
    println!("  analytics:              {}", profile.has_analytics);
    println!("  account manager:        {}", profile.has_account_manager);
    println!(
        "  gig notifications:      {}",
        profile.gig_notification_priority
    );

    Ok(())
}
