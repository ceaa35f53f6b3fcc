use rust_decimal::Decimal;

use crate::subscription::{BenefitsProfile, DiscountPolicy};

/// Single priced line of a cart.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PricedItem {
    pub name: String,
    /// Price defined as per quantity == 1
    pub price: Decimal,
    pub quantity: u32,
    pub category: Option<String>,
}

impl Default for PricedItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: Decimal::ZERO,
            quantity: 1,
            category: None,
        }
    }
}

impl PricedItem {
    pub fn new(price: Decimal, category: Option<&str>) -> Self {
        Self {
            price,
            category: category.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LineSummary {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub discounted_unit_price: Decimal,
    /// Savings across the whole line
    pub savings: Decimal,
    pub total: Decimal,
}

/// Cart totals with subscriber discounts applied.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CheckoutSummary {
    pub lines: Vec<LineSummary>,
    pub subtotal: Decimal,
    pub savings: Decimal,
    pub total: Decimal,
}

/// Calculates discounted totals for all items. Amounts are kept at full
/// precision; rounding to currency units is left to presentation.
pub fn summarize(
    items: &[PricedItem],
    profile: &BenefitsProfile,
    policy: &DiscountPolicy,
) -> CheckoutSummary {
    let mut lines = Vec::with_capacity(items.len());
    let mut subtotal = Decimal::ZERO;
    let mut savings = Decimal::ZERO;

    for item in items {
        let quantity = Decimal::from(item.quantity);
        let unit_savings = policy.savings(profile, item.price, item.category.as_deref());
        let line_savings = unit_savings * quantity;

        subtotal += item.subtotal();
        savings += line_savings;

        lines.push(LineSummary {
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.price,
            discounted_unit_price: item.price - unit_savings,
            savings: line_savings,
            total: item.subtotal() - line_savings,
        });
    }

    tracing::debug!(
        "checkout summary: {} lines, subtotal {}, savings {}",
        lines.len(),
        subtotal,
        savings
    );

    CheckoutSummary {
        lines,
        subtotal,
        savings,
        total: subtotal - savings,
    }
}

impl std::fmt::Display for PricedItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.category {
            Some(category) => write!(f, "{} [{}] ({}x)", self.name, category, self.quantity),
            None => write!(f, "{} ({}x)", self.name, self.quantity),
        }
    }
}
