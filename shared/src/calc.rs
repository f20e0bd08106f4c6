//! Derived-quantity calculator
//!
//! Pure functions computing every server-side derived field: sheet areas,
//! auxiliary consumption quantities, product model labels and sequence
//! identifiers. These formulas are fixed business constants, not configurable
//! per call.

use rust_decimal::Decimal;

/// Estol usage is 3% of total petkim throughput
pub const ESTOL_COEFFICIENT: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Talk usage is 1.5% of total petkim throughput
pub const TALK_COEFFICIENT: Decimal = Decimal::from_parts(15, 0, 0, false, 3);

const CM_PER_M: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Number of decimal places kept on dimensions used as stock-bucket keys
pub const DIMENSION_SCALE: u32 = 2;

/// Area in square meters produced by `quantity` sheets of the given dimensions:
/// `(width_cm / 100) * length_m * quantity`, rounded to 2 decimal places.
pub fn square_meters(width_cm: Decimal, length_m: Decimal, quantity: i64) -> Decimal {
    ((width_cm / CM_PER_M) * length_m * Decimal::from(quantity)).round_dp(2)
}

/// Derived quantities for a daily consumption record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumptionTotals {
    pub total_petkim: Decimal,
    pub estol_quantity: Decimal,
    pub talk_quantity: Decimal,
}

/// Compute the auxiliary-material quantities implied by a day's petkim usage.
/// Fire (scrap) counts toward total throughput.
pub fn consumption_totals(petkim_quantity: Decimal, fire_quantity: Decimal) -> ConsumptionTotals {
    let total_petkim = petkim_quantity + fire_quantity;
    ConsumptionTotals {
        total_petkim,
        estol_quantity: (total_petkim * ESTOL_COEFFICIENT).round_dp(3),
        talk_quantity: (total_petkim * TALK_COEFFICIENT).round_dp(3),
    }
}

/// Composite model label for a product, e.g. "5mm x 120cm x 10m"
pub fn product_model(thickness_mm: Decimal, width_cm: Decimal, length_m: Decimal) -> String {
    format!(
        "{}mm x {}cm x {}m",
        thickness_mm.normalize(),
        width_cm.normalize(),
        length_m.normalize()
    )
}

/// Format a sequence identifier: `prefix + "-" + zero_pad(n, 5)`
pub fn format_sequence(prefix: &str, n: i64) -> String {
    format!("{}-{:05}", prefix, n)
}

/// Normalize a dimension before using it as a stock-bucket key component.
/// Keeps bucket keys stable against floating-point noise in the input.
pub fn normalize_dimension(value: Decimal) -> Decimal {
    value.round_dp(DIMENSION_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_square_meters() {
        // 120cm wide, 10m long, 50 sheets -> 600 m²
        assert_eq!(square_meters(dec("120"), dec("10"), 50), dec("600.00"));
        // 100cm wide, 200m long, 5 sheets -> 1000 m²
        assert_eq!(square_meters(dec("100"), dec("200"), 5), dec("1000.00"));
    }

    #[test]
    fn test_square_meters_fractional() {
        // 85cm wide, 2.5m long, 3 sheets -> 0.85 * 2.5 * 3 = 6.375 -> 6.38
        assert_eq!(square_meters(dec("85"), dec("2.5"), 3), dec("6.38"));
    }

    #[test]
    fn test_consumption_totals() {
        let totals = consumption_totals(dec("1000"), dec("200"));
        assert_eq!(totals.total_petkim, dec("1200"));
        assert_eq!(totals.estol_quantity, dec("36.000"));
        assert_eq!(totals.talk_quantity, dec("18.000"));
    }

    #[test]
    fn test_consumption_totals_zero_fire() {
        let totals = consumption_totals(dec("500"), Decimal::ZERO);
        assert_eq!(totals.total_petkim, dec("500"));
        assert_eq!(totals.estol_quantity, dec("15.000"));
        assert_eq!(totals.talk_quantity, dec("7.500"));
    }

    #[test]
    fn test_product_model() {
        assert_eq!(product_model(dec("5.0"), dec("120"), dec("10")), "5mm x 120cm x 10m");
        assert_eq!(product_model(dec("2.5"), dec("100"), dec("200")), "2.5mm x 100cm x 200m");
    }

    #[test]
    fn test_format_sequence() {
        assert_eq!(format_sequence("SEV", 1), "SEV-00001");
        assert_eq!(format_sequence("SEV", 42), "SEV-00042");
        assert_eq!(format_sequence("SEV", 99999), "SEV-99999");
        assert_eq!(format_sequence("SEV", 7).len(), 9);
    }

    #[test]
    fn test_normalize_dimension() {
        assert_eq!(normalize_dimension(dec("120.001")), dec("120.00"));
        assert_eq!(normalize_dimension(dec("119.999")), dec("120.00"));
        assert_eq!(normalize_dimension(dec("5")), dec("5"));
    }

    fn quantity_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=1_000_000i64).prop_map(|n| Decimal::new(n, 2)) // 0.01 to 10000.00
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// square_meters matches the reference formula within 0.01
        #[test]
        fn prop_square_meters_formula(
            width in 1i64..=5000i64,
            length in 1i64..=10000i64,
            quantity in 1i64..=1000i64
        ) {
            let width_cm = Decimal::new(width, 1);  // 0.1 to 500.0 cm
            let length_m = Decimal::new(length, 1); // 0.1 to 1000.0 m
            let result = square_meters(width_cm, length_m, quantity);
            let exact = (width_cm / Decimal::from(100)) * length_m * Decimal::from(quantity);
            prop_assert!((result - exact).abs() <= Decimal::new(1, 2));
        }

        /// total = petkim + fire, estol = 3% of total, talk = 1.5% of total
        #[test]
        fn prop_consumption_formulas(
            petkim in quantity_strategy(),
            fire in quantity_strategy()
        ) {
            let totals = consumption_totals(petkim, fire);
            prop_assert_eq!(totals.total_petkim, petkim + fire);

            let tolerance = Decimal::new(1, 2);
            prop_assert!((totals.estol_quantity - totals.total_petkim * ESTOL_COEFFICIENT).abs() <= tolerance);
            prop_assert!((totals.talk_quantity - totals.total_petkim * TALK_COEFFICIENT).abs() <= tolerance);
        }

        /// Estol is twice the talk quantity (3% vs 1.5%), up to the
        /// independent rounding of each to 3 decimal places
        #[test]
        fn prop_estol_twice_talk(
            petkim in quantity_strategy(),
            fire in quantity_strategy()
        ) {
            let totals = consumption_totals(petkim, fire);
            let diff = (totals.estol_quantity - totals.talk_quantity * Decimal::from(2)).abs();
            prop_assert!(diff <= Decimal::new(2, 3));
        }

        /// Sequence identifiers are 9 characters and ordered for n < 100000
        #[test]
        fn prop_sequence_format(n in 1i64..=99999i64) {
            let id = format_sequence("SEV", n);
            prop_assert_eq!(id.len(), 9);
            prop_assert!(id.starts_with("SEV-"));
            prop_assert_eq!(id[4..].parse::<i64>().unwrap(), n);
        }

        /// Sequence identifiers preserve numeric order lexicographically
        #[test]
        fn prop_sequence_ordered(a in 1i64..=99998i64, b in 1i64..=99998i64) {
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assert!(format_sequence("SEV", lo) <= format_sequence("SEV", hi));
        }

        /// Normalized dimensions are idempotent and within half a unit of scale
        #[test]
        fn prop_normalize_idempotent(raw in 1i64..=100_000_000i64) {
            let value = Decimal::new(raw, 5);
            let normalized = normalize_dimension(value);
            prop_assert_eq!(normalized, normalize_dimension(normalized));
            prop_assert!((normalized - value).abs() <= Decimal::new(5, 3));
        }
    }
}
