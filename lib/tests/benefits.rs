use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strum::IntoEnumIterator;

use whosenxt::subscription::{GigNotificationPriority, SupportTier};
use whosenxt::{resolve_benefits, BenefitsProfile, Subscription, SubscriptionTier};

#[test]
fn tier_table_rows() {
    let expected = [
        (SubscriptionTier::Pro, 10, 2, SupportTier::Standard, false, false, false, GigNotificationPriority::Basic),
        (SubscriptionTier::Elite, 20, 4, SupportTier::Priority, true, true, false, GigNotificationPriority::Priority),
        (SubscriptionTier::Veteran, 30, 7, SupportTier::Vip, true, true, true, GigNotificationPriority::Instant),
    ];

    for (tier, discount, days, support, early, tools, analytics, notif) in expected {
        let profile = resolve_benefits(true, Some(tier));
        assert_eq!(
            profile,
            BenefitsProfile {
                discount_percentage: discount,
                free_delivery_days_per_week: days,
                support_tier: support,
                has_early_gig_access: early,
                has_store_tools: tools,
                has_analytics: analytics,
                has_account_manager: false,
                gig_notification_priority: notif,
            },
            "benefits for {}",
            tier
        );
    }
}

#[test]
fn unsubscribed_or_unknown_resolve_to_zero_profile() {
    for tier in SubscriptionTier::iter() {
        assert_eq!(resolve_benefits(false, Some(tier)), BenefitsProfile::NONE);
    }
    assert_eq!(resolve_benefits(true, None), BenefitsProfile::NONE);

    let unknown = Subscription {
        subscribed: true,
        tier: Some("diamond".to_string()),
    };
    assert_eq!(unknown.benefits(), BenefitsProfile::NONE);

    let zero = BenefitsProfile::default();
    assert_eq!(zero.discount_percentage, 0);
    assert_eq!(zero.support_tier, SupportTier::Standard);
    assert_eq!(zero.gig_notification_priority, GigNotificationPriority::Basic);
}

#[test]
fn no_tier_grants_an_account_manager() {
    assert!(SubscriptionTier::iter().all(|t| !BenefitsProfile::for_tier(t).has_account_manager));
}

#[test]
fn ineligible_categories_are_untouched() {
    for tier in SubscriptionTier::iter() {
        let profile = BenefitsProfile::for_tier(tier);
        for category in [Some("Electronics"), Some("Groceries"), None] {
            assert_eq!(profile.apply_discount(dec!(42.50), category), dec!(42.50));
            assert_eq!(profile.calculate_savings(dec!(42.50), category), Decimal::ZERO);
        }
    }
}

#[test]
fn subscription_record_drives_discount() {
    let sub: Subscription = serde_json::from_str(r#"{"subscribed": true, "tier": "Veteran"}"#).unwrap();
    let profile = sub.benefits();
    assert_eq!(profile.apply_discount(dec!(200), Some("Men's Fashion")), dec!(140));
    assert_eq!(profile.calculate_savings(dec!(200), Some("Men's Fashion")), dec!(60));
}

fn arb_tier() -> impl Strategy<Value = SubscriptionTier> {
    prop_oneof![
        Just(SubscriptionTier::Pro),
        Just(SubscriptionTier::Elite),
        Just(SubscriptionTier::Veteran),
    ]
}

fn arb_eligible_category() -> impl Strategy<Value = String> {
    (
        "[a-zA-Z ]{0,8}",
        prop_oneof![Just("clothing"), Just("Accessories"), Just("FASHION")],
        "[a-zA-Z ]{0,8}",
    )
        .prop_map(|(prefix, keyword, suffix)| format!("{}{}{}", prefix, keyword, suffix))
}

proptest! {
    #[test]
    fn discount_and_savings_add_up_to_price(
        cents in 0i64..1_000_000_000,
        tier in arb_tier(),
        category in arb_eligible_category(),
    ) {
        let price = Decimal::new(cents, 2);
        let profile = resolve_benefits(true, Some(tier));
        let discounted = profile.apply_discount(price, Some(&category));
        let savings = profile.calculate_savings(price, Some(&category));

        prop_assert_eq!(discounted + savings, price);
        prop_assert_eq!(savings, price * Decimal::from(profile.discount_percentage) / Decimal::ONE_HUNDRED);
    }
}
