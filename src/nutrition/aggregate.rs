//! Nutrient scaling, rounding and summation
//!
//! Shared by the meal allocator and the food log.

use crate::models::Nutrients;

/// Round to one decimal place
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to the nearest multiple of `step`, never below zero
///
/// Non-finite input yields 0.
pub fn round_to(x: f64, step: f64) -> f64 {
    if !x.is_finite() || step <= 0.0 {
        return 0.0;
    }
    ((x / step).round() * step).max(0.0)
}

/// Nutrients contained in `grams` of a food with the given per-100g values,
/// each field rounded to one decimal
pub fn scale(per100: &Nutrients, grams: f64) -> Nutrients {
    per100.scale(grams / 100.0).map(round1)
}

/// Elementwise sum, rounded to one decimal once at the end
pub fn sum<I>(items: I) -> Nutrients
where
    I: IntoIterator<Item = Nutrients>,
{
    items.into_iter().sum::<Nutrients>().map(round1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(12.35), 12.4);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn test_round_to_step() {
        assert_eq!(round_to(112.4, 5.0), 110.0);
        assert_eq!(round_to(112.5, 5.0), 115.0);
        assert_eq!(round_to(2.0, 5.0), 0.0);
        assert_eq!(round_to(-40.0, 5.0), 0.0);
        assert_eq!(round_to(f64::INFINITY, 5.0), 0.0);
        assert_eq!(round_to(f64::NAN, 5.0), 0.0);
    }

    #[test]
    fn test_scale_chicken_breast() {
        let per100 = Nutrients::new(165.0, 31.0, 3.6, 0.0);
        let n = scale(&per100, 120.0);
        assert_eq!(n, Nutrients::new(198.0, 37.2, 4.3, 0.0));
    }

    #[test]
    fn test_sum_rounds_only_final_totals() {
        let parts = vec![
            Nutrients::new(0.04, 0.0, 0.0, 0.0),
            Nutrients::new(0.04, 0.0, 0.0, 0.0),
        ];
        // Rounding each term first would give 0.0
        assert_eq!(sum(parts).kcal, 0.1);
    }

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(sum(Vec::new()), Nutrients::zero());
    }
}
