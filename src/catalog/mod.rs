//! Food catalog
//!
//! Reference foods and the pure filters the planners and the search fallback
//! run over them. The catalog is passed explicitly so callers can substitute
//! their own food list.

mod builtin;

use std::collections::HashSet;

use crate::models::{DietTag, Food};

/// Read-only list of foods
#[derive(Debug, Clone, PartialEq)]
pub struct FoodCatalog {
    foods: Vec<Food>,
}

impl FoodCatalog {
    pub fn new(foods: Vec<Food>) -> Self {
        Self { foods }
    }

    /// The built-in 22-food reference catalog
    pub fn builtin() -> Self {
        Self::new(builtin::foods())
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Foods eligible for `diet`, in catalog order
    pub fn by_diet(&self, diet: DietTag) -> Vec<Food> {
        self.foods
            .iter()
            .filter(|f| f.fits_diet(diet))
            .cloned()
            .collect()
    }

    /// Case-insensitive substring match on the food name
    pub fn search_foods(&self, query: &str) -> Vec<Food> {
        let needle = query.trim().to_lowercase();
        self.foods
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Parse a comma-separated allergy list into a lower-cased set, dropping blanks
pub fn parse_allergies(allergies_csv: &str) -> HashSet<String> {
    allergies_csv
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Drop foods carrying any of the listed allergens
///
/// An empty (or all-blank) list returns `foods` unchanged.
pub fn exclude_allergens(foods: Vec<Food>, allergies_csv: &str) -> Vec<Food> {
    let banned = parse_allergies(allergies_csv);
    if banned.is_empty() {
        return foods;
    }

    foods
        .into_iter()
        .filter(|f| !f.allergens.iter().any(|a| banned.contains(&a.to_lowercase())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrients;

    fn names(foods: &[Food]) -> Vec<&str> {
        foods.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_builtin_catalog_size() {
        assert_eq!(FoodCatalog::builtin().len(), 22);
    }

    #[test]
    fn test_by_diet() {
        let catalog = FoodCatalog::builtin();
        let vegan = catalog.by_diet(DietTag::Vegan);
        assert!(vegan.iter().all(|f| f.fits_diet(DietTag::Vegan)));
        assert!(!names(&vegan).contains(&"greek yogurt 0% fat"));
        assert!(!names(&vegan).contains(&"egg (whole)"));

        let vegetarian = catalog.by_diet(DietTag::Vegetarian);
        assert!(names(&vegetarian).contains(&"greek yogurt 0% fat"));
        assert_eq!(catalog.by_diet(DietTag::Omnivore).len(), 17);
    }

    #[test]
    fn test_exclude_peanut_removes_only_peanut_butter() {
        let catalog = FoodCatalog::builtin();
        let all = catalog.foods().to_vec();
        let filtered = exclude_allergens(all.clone(), "peanut");
        assert_eq!(filtered.len(), all.len() - 1);
        assert!(!names(&filtered).contains(&"peanut butter"));
    }

    #[test]
    fn test_exclude_allergens_is_case_insensitive_and_trims() {
        let foods = vec![
            Food::new("a", Nutrients::zero(), &[DietTag::Vegan]).with_allergens(&["Soy"]),
            Food::new("b", Nutrients::zero(), &[DietTag::Vegan]).with_allergens(&["gluten"]),
            Food::new("c", Nutrients::zero(), &[DietTag::Vegan]),
        ];
        let filtered = exclude_allergens(foods, "  SOY , ,GLUTEN");
        assert_eq!(names(&filtered), vec!["c"]);
    }

    #[test]
    fn test_blank_allergy_list_keeps_everything() {
        let all = FoodCatalog::builtin().foods().to_vec();
        assert_eq!(exclude_allergens(all.clone(), ""), all);
        assert_eq!(exclude_allergens(all.clone(), " , ,"), all);
    }

    #[test]
    fn test_search_foods() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(names(&catalog.search_foods("  RICE ")), vec!["rice (cooked)"]);
        assert_eq!(catalog.search_foods("cooked").len(), 6);
        assert!(catalog.search_foods("pizza").is_empty());
    }
}
