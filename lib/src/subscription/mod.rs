pub mod benefits;

pub use benefits::{
    resolve_benefits, BenefitsProfile, DiscountPolicy, GigNotificationPriority, SupportTier,
};

use std::str::FromStr;

/// Named subscription level granting a fixed bundle of benefits.
///
/// The absence of a tier ("none" in subscription records) is expressed as
/// `Option::None` rather than as a separate variant, so that every variant
/// here is guaranteed to map onto a full benefits row.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SubscriptionTier {
    Pro,
    Elite,
    Veteran,
}

impl SubscriptionTier {
    /// Interprets a tier value coming from an external subscription record.
    ///
    /// Unknown values, empty strings and the explicit `none` marker all
    /// resolve to no tier. Never fails.
    pub fn from_record(value: &str) -> Option<Self> {
        let value = value.trim();
        match SubscriptionTier::from_str(value) {
            Ok(tier) => Some(tier),
            Err(_) => {
                if !value.is_empty() && !value.eq_ignore_ascii_case("none") {
                    tracing::debug!("unrecognized subscription tier: {:?}", value);
                }
                None
            }
        }
    }
}

/// Subscription snapshot as read from the external user record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Subscription {
    pub subscribed: bool,
    /// Raw tier value, kept as a string since the record is externally
    /// supplied and may carry values this crate doesn't know about.
    pub tier: Option<String>,
}

impl Subscription {
    pub fn new(subscribed: bool, tier: Option<SubscriptionTier>) -> Self {
        Self {
            subscribed,
            tier: tier.map(|t| t.to_string()),
        }
    }

    /// Returns the recognized tier, if any. Doesn't take the `subscribed`
    /// flag into account.
    pub fn tier(&self) -> Option<SubscriptionTier> {
        self.tier.as_deref().and_then(SubscriptionTier::from_record)
    }

    /// Resolves the benefits currently granted by this subscription.
    pub fn benefits(&self) -> BenefitsProfile {
        resolve_benefits(self.subscribed, self.tier())
    }
}
