//! Food search and catalog tools

use serde::Serialize;

use crate::catalog::{exclude_allergens, FoodCatalog};
use crate::lookup::{search_with_fallback, FoodSearch, NutrientLookup};
use crate::models::Food;

use super::plans::parse_diet;

/// Response for list_catalog
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub count: usize,
    pub foods: Vec<Food>,
}

/// Search the external lookup (when configured) with catalog fallback
pub fn search_foods(
    lookup: Option<&dyn NutrientLookup>,
    catalog: &FoodCatalog,
    query: &str,
) -> FoodSearch {
    search_with_fallback(lookup, catalog, query)
}

/// Catalog foods, optionally narrowed to a diet and stripped of allergens
pub fn list_catalog(
    catalog: &FoodCatalog,
    diet: Option<&str>,
    allergies: Option<&str>,
) -> Result<CatalogResponse, String> {
    let foods = match diet {
        Some(d) => catalog.by_diet(parse_diet(d)?),
        None => catalog.foods().to_vec(),
    };
    let foods = exclude_allergens(foods, allergies.unwrap_or(""));

    Ok(CatalogResponse {
        count: foods.len(),
        foods,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_catalog_filters() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(list_catalog(&catalog, None, None).unwrap().count, 22);
        assert_eq!(list_catalog(&catalog, Some("vegan"), Some("peanut")).unwrap().count, 17);
        assert!(list_catalog(&catalog, Some("keto"), None).is_err());
    }
}
