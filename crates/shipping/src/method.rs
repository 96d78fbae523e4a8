use serde::{Deserialize, Serialize};

use storefront_core::{Money, Weight};

/// Closed set of shipping policies.
///
/// Each method is a stateless mapping from total weight to cost. Selection
/// happens once per checkout and is supplied by the caller; the policy itself
/// has no notion of a default.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    Standard,
    Express,
}

impl ShippingMethod {
    /// Flat rate in cents per kilogram.
    pub const fn rate_cents_per_kg(self) -> u64 {
        match self {
            ShippingMethod::Standard => 50,
            ShippingMethod::Express => 150,
        }
    }

    /// Cost of shipping `weight`, rounded down to the cent.
    ///
    /// Exact for any weight in whole multiples of 20 g (both rates divide
    /// evenly), which covers every catalog product.
    pub fn quote(self, weight: Weight) -> Money {
        Money::from_cents(weight.grams() * self.rate_cents_per_kg() / 1_000)
    }

    /// Map the raw checkout prompt integer onto a method.
    ///
    /// `1` selects Standard; every other value falls back to Express. The
    /// fallback reproduces the observed checkout behavior and is not
    /// reported as an error.
    pub fn from_menu_choice(choice: i64) -> Self {
        if choice == 1 {
            ShippingMethod::Standard
        } else {
            ShippingMethod::Express
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard",
            ShippingMethod::Express => "Express",
        }
    }
}

impl core::fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rate_is_half_a_dollar_per_kilogram() {
        assert_eq!(
            ShippingMethod::Standard.quote(Weight::from_grams(12_500)),
            Money::from_cents(625)
        );
        assert_eq!(
            ShippingMethod::Standard.quote(Weight::from_grams(1_000)),
            Money::from_cents(50)
        );
    }

    #[test]
    fn express_rate_is_one_and_a_half_dollars_per_kilogram() {
        assert_eq!(
            ShippingMethod::Express.quote(Weight::from_grams(1_000)),
            Money::from_cents(150)
        );
        assert_eq!(
            ShippingMethod::Express.quote(Weight::from_grams(2_500)),
            Money::from_cents(375)
        );
    }

    #[test]
    fn zero_weight_ships_for_free_under_both_methods() {
        assert_eq!(ShippingMethod::Standard.quote(Weight::ZERO), Money::ZERO);
        assert_eq!(ShippingMethod::Express.quote(Weight::ZERO), Money::ZERO);
    }

    #[test]
    fn menu_choice_one_is_standard_everything_else_is_express() {
        assert_eq!(
            ShippingMethod::from_menu_choice(1),
            ShippingMethod::Standard
        );
        for choice in [0, 2, 3, 7, -1, i64::MAX] {
            assert_eq!(
                ShippingMethod::from_menu_choice(choice),
                ShippingMethod::Express,
                "choice {choice} should fall back to Express"
            );
        }
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            /// Quotes follow the flat per-kilogram rate for any weight that
            /// divides evenly into cents.
            #[test]
            fn quotes_are_linear_in_weight(units in 0u64..500_000) {
                // Whole multiples of 20 g keep both rates exact.
                let grams = units * 20;
                let weight = Weight::from_grams(grams);

                prop_assert_eq!(
                    ShippingMethod::Standard.quote(weight),
                    Money::from_cents(grams / 20)
                );
                prop_assert_eq!(
                    ShippingMethod::Express.quote(weight),
                    Money::from_cents(grams * 3 / 20)
                );
            }

            /// Express always costs three times Standard (same weight grid).
            #[test]
            fn express_is_three_times_standard(units in 0u64..500_000) {
                let weight = Weight::from_grams(units * 20);
                let standard = ShippingMethod::Standard.quote(weight);
                let express = ShippingMethod::Express.quote(weight);

                prop_assert_eq!(express, Money::from_cents(standard.cents() * 3));
            }

            /// Heavier never ships cheaper.
            #[test]
            fn quotes_are_monotone_in_weight(a in 0u64..1_000_000, b in 0u64..1_000_000) {
                let (lighter, heavier) = if a <= b { (a, b) } else { (b, a) };

                for method in [ShippingMethod::Standard, ShippingMethod::Express] {
                    prop_assert!(
                        method.quote(Weight::from_grams(lighter))
                            <= method.quote(Weight::from_grams(heavier))
                    );
                }
            }
        }
    }
}
