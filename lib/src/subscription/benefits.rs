//! Subscription benefits and discount eligibility.
//!
//! Benefits are derived from the subscription state on every query and are
//! never stored. Discounts only apply to items whose category falls into one
//! of the eligible groups, see [`DiscountPolicy`].

use rust_decimal::Decimal;

use super::SubscriptionTier;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SupportTier {
    #[default]
    Standard,
    Priority,
    Vip,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GigNotificationPriority {
    #[default]
    Basic,
    Priority,
    Instant,
}

/// Resolved bundle of perks for a given subscription state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct BenefitsProfile {
    /// Discount applied to eligible items, in percent (0-100)
    pub discount_percentage: u8,
    /// Number of days per week with free delivery (0-7)
    pub free_delivery_days_per_week: u8,
    pub support_tier: SupportTier,
    pub has_early_gig_access: bool,
    pub has_store_tools: bool,
    pub has_analytics: bool,
    /// Not granted by any tier yet.
    pub has_account_manager: bool,
    pub gig_notification_priority: GigNotificationPriority,
}

impl Default for BenefitsProfile {
    fn default() -> Self {
        Self::NONE
    }
}

impl BenefitsProfile {
    /// Profile of users without an active, recognized subscription.
    pub const NONE: BenefitsProfile = BenefitsProfile {
        discount_percentage: 0,
        free_delivery_days_per_week: 0,
        support_tier: SupportTier::Standard,
        has_early_gig_access: false,
        has_store_tools: false,
        has_analytics: false,
        has_account_manager: false,
        gig_notification_priority: GigNotificationPriority::Basic,
    };

    /// Benefits table. Adding a tier requires spelling out every field.
    pub const fn for_tier(tier: SubscriptionTier) -> Self {
        match tier {
            SubscriptionTier::Pro => BenefitsProfile {
                discount_percentage: 10,
                free_delivery_days_per_week: 2,
                support_tier: SupportTier::Standard,
                has_early_gig_access: false,
                has_store_tools: false,
                has_analytics: false,
                has_account_manager: false,
                gig_notification_priority: GigNotificationPriority::Basic,
            },
            SubscriptionTier::Elite => BenefitsProfile {
                discount_percentage: 20,
                free_delivery_days_per_week: 4,
                support_tier: SupportTier::Priority,
                has_early_gig_access: true,
                has_store_tools: true,
                has_analytics: false,
                has_account_manager: false,
                gig_notification_priority: GigNotificationPriority::Priority,
            },
            SubscriptionTier::Veteran => BenefitsProfile {
                discount_percentage: 30,
                free_delivery_days_per_week: 7,
                support_tier: SupportTier::Vip,
                has_early_gig_access: true,
                has_store_tools: true,
                has_analytics: true,
                has_account_manager: false,
                gig_notification_priority: GigNotificationPriority::Instant,
            },
        }
    }

    /// Discount rate as a fraction, e.g. `0.2` for 20%.
    pub fn discount_rate(&self) -> Decimal {
        Decimal::from(self.discount_percentage) / Decimal::ONE_HUNDRED
    }

    /// Price after discount, using the default eligible categories.
    pub fn apply_discount(&self, price: Decimal, category: Option<&str>) -> Decimal {
        DiscountPolicy::default().apply(self, price, category)
    }

    /// Amount saved on the price, using the default eligible categories.
    pub fn calculate_savings(&self, price: Decimal, category: Option<&str>) -> Decimal {
        DiscountPolicy::default().savings(self, price, category)
    }
}

/// Maps the subscription state onto a benefits profile.
///
/// Total over its input: unsubscribed users and missing tiers get
/// [`BenefitsProfile::NONE`] regardless of the tier value.
pub fn resolve_benefits(subscribed: bool, tier: Option<SubscriptionTier>) -> BenefitsProfile {
    match (subscribed, tier) {
        (true, Some(tier)) => {
            tracing::trace!("resolving benefits for tier {}", tier);
            BenefitsProfile::for_tier(tier)
        }
        _ => BenefitsProfile::NONE,
    }
}

/// Category gate for subscriber discounts.
///
/// A category is eligible when it contains, case-insensitively, any of the
/// configured keywords. Items without a category are never eligible.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DiscountPolicy {
    pub categories: Vec<String>,
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self {
            categories: vec![
                "clothing".to_string(),
                "accessories".to_string(),
                "fashion".to_string(),
            ],
        }
    }
}

impl DiscountPolicy {
    pub fn is_eligible(&self, category: Option<&str>) -> bool {
        let Some(category) = category else {
            return false;
        };
        let category = category.to_lowercase();
        let eligible = self
            .categories
            .iter()
            .any(|keyword| category.contains(&keyword.to_lowercase()));
        tracing::trace!("category {:?} discount eligible: {}", category, eligible);
        eligible
    }

    /// Savings on `price`, or zero if the category is not eligible.
    pub fn savings(
        &self,
        profile: &BenefitsProfile,
        price: Decimal,
        category: Option<&str>,
    ) -> Decimal {
        if self.is_eligible(category) {
            price * profile.discount_rate()
        } else {
            Decimal::ZERO
        }
    }

    /// Discounted price. Computed as `price - savings` so that the two
    /// always add back up to the original price.
    pub fn apply(
        &self,
        profile: &BenefitsProfile,
        price: Decimal,
        category: Option<&str>,
    ) -> Decimal {
        price - self.savings(profile, price, category)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn unsubscribed_ignores_tier() {
        assert_eq!(
            resolve_benefits(false, Some(SubscriptionTier::Veteran)),
            BenefitsProfile::NONE
        );
        assert_eq!(resolve_benefits(true, None), BenefitsProfile::NONE);
    }

    #[test]
    fn elite_profile() {
        let profile = resolve_benefits(true, Some(SubscriptionTier::Elite));
        assert_eq!(profile.discount_percentage, 20);
        assert_eq!(profile.free_delivery_days_per_week, 4);
        assert_eq!(profile.support_tier, SupportTier::Priority);
        assert!(profile.has_early_gig_access);
        assert!(profile.has_store_tools);
        assert!(!profile.has_analytics);
        assert!(!profile.has_account_manager);
        assert_eq!(
            profile.gig_notification_priority,
            GigNotificationPriority::Priority
        );
    }

    #[test]
    fn eligibility_matches_substrings() {
        let policy = DiscountPolicy::default();
        assert!(policy.is_eligible(Some("Women's Clothing")));
        assert!(policy.is_eligible(Some("FASHION")));
        assert!(policy.is_eligible(Some("jewelry & accessories")));
        assert!(!policy.is_eligible(Some("Electronics")));
        assert!(!policy.is_eligible(None));
    }

    #[test]
    fn discount_on_eligible_item() {
        let profile = BenefitsProfile::for_tier(SubscriptionTier::Pro);
        assert_eq!(profile.apply_discount(dec!(50.00), Some("Clothing")), dec!(45));
        assert_eq!(profile.calculate_savings(dec!(50.00), Some("Clothing")), dec!(5));
    }

    #[test]
    fn no_discount_on_ineligible_item() {
        let profile = BenefitsProfile::for_tier(SubscriptionTier::Veteran);
        assert_eq!(profile.apply_discount(dec!(19.99), Some("Electronics")), dec!(19.99));
        assert_eq!(profile.calculate_savings(dec!(19.99), None), Decimal::ZERO);
    }

    #[test]
    fn custom_policy_keywords() {
        let policy = DiscountPolicy {
            categories: vec!["Shoes".to_string()],
        };
        let profile = BenefitsProfile::for_tier(SubscriptionTier::Veteran);
        assert_eq!(policy.apply(&profile, dec!(100), Some("running shoes")), dec!(70));
        assert_eq!(policy.apply(&profile, dec!(100), Some("clothing")), dec!(100));
    }
}
