//! Shared nutrient quantity
//!
//! Used for per-100g food records, meal items, meal/day totals and log entries.

use serde::{Deserialize, Serialize};

/// Energy and macro-nutrient amounts
///
/// As a food record this is "per 100 g"; anywhere else it is the amount
/// contained in a given portion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    pub kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl Nutrients {
    pub const fn new(kcal: f64, protein_g: f64, fat_g: f64, carbs_g: f64) -> Self {
        Self { kcal, protein_g, fat_g, carbs_g }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Multiply every field by `multiplier` (no rounding)
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            kcal: self.kcal * multiplier,
            protein_g: self.protein_g * multiplier,
            fat_g: self.fat_g * multiplier,
            carbs_g: self.carbs_g * multiplier,
        }
    }

    pub fn add(&self, other: &Nutrients) -> Self {
        Self {
            kcal: self.kcal + other.kcal,
            protein_g: self.protein_g + other.protein_g,
            fat_g: self.fat_g + other.fat_g,
            carbs_g: self.carbs_g + other.carbs_g,
        }
    }

    /// Apply `f` to every field
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            kcal: f(self.kcal),
            protein_g: f(self.protein_g),
            fat_g: f(self.fat_g),
            carbs_g: f(self.carbs_g),
        }
    }

    /// True when all four values are zero
    pub fn is_empty(&self) -> bool {
        self.kcal == 0.0 && self.protein_g == 0.0 && self.fat_g == 0.0 && self.carbs_g == 0.0
    }
}

impl std::ops::Add for Nutrients {
    type Output = Nutrients;

    fn add(self, other: Nutrients) -> Nutrients {
        Nutrients::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrients {
    type Output = Nutrients;

    fn mul(self, multiplier: f64) -> Nutrients {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrients::zero(), |acc, n| acc + n)
    }
}

impl<'a> std::iter::Sum<&'a Nutrients> for Nutrients {
    fn sum<I: Iterator<Item = &'a Nutrients>>(iter: I) -> Self {
        iter.fold(Nutrients::zero(), |acc, n| acc + *n)
    }
}
