//! Nutrient lookup
//!
//! External food-composition search, normalized into per-100g records at the
//! boundary. The planners never call this; it backs food search for the log.

pub mod normalize;
pub mod usda;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::FoodCatalog;
use crate::models::Nutrients;

pub use usda::UsdaClient;

/// Queries shorter than this (after trimming) are not searched
pub const MIN_QUERY_LEN: usize = 2;

/// Lookup error types
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Missing USDA API key")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("USDA error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid USDA response: {0}")]
    Decode(String),
}

pub type LookupResult<T> = Result<T, LookupError>;

/// A normalized external food record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupFood {
    pub name: String,
    pub per100: Nutrients,
}

/// Free-text food search returning per-100g records
pub trait NutrientLookup {
    fn search(&self, query: &str) -> LookupResult<Vec<LookupFood>>;
}

/// Where search results came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSource {
    /// Query too short, nothing searched
    Idle,
    Usda,
    /// Static catalog, used when the lookup is unavailable or found nothing
    Catalog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSearch {
    pub source: SearchSource,
    pub foods: Vec<LookupFood>,
}

/// Search the external lookup, falling back to the catalog on failure or
/// an empty result
pub fn search_with_fallback(
    lookup: Option<&dyn NutrientLookup>,
    catalog: &FoodCatalog,
    query: &str,
) -> FoodSearch {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return FoodSearch {
            source: SearchSource::Idle,
            foods: Vec::new(),
        };
    }

    if let Some(lookup) = lookup {
        match lookup.search(query) {
            Ok(foods) if !foods.is_empty() => {
                return FoodSearch {
                    source: SearchSource::Usda,
                    foods,
                };
            }
            Ok(_) => tracing::debug!(query, "Lookup found nothing, using catalog"),
            Err(e) => tracing::warn!(query, error = %e, "Lookup failed, using catalog"),
        }
    }

    let foods = catalog
        .search_foods(query)
        .into_iter()
        .map(|f| LookupFood {
            name: f.name,
            per100: f.per100,
        })
        .collect();

    FoodSearch {
        source: SearchSource::Catalog,
        foods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl NutrientLookup for Failing {
        fn search(&self, _query: &str) -> LookupResult<Vec<LookupFood>> {
            Err(LookupError::Status { status: 503, body: "down".into() })
        }
    }

    struct Fixed(Vec<LookupFood>);

    impl NutrientLookup for Fixed {
        fn search(&self, _query: &str) -> LookupResult<Vec<LookupFood>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_short_query_is_idle() {
        let result = search_with_fallback(Some(&Failing), &FoodCatalog::builtin(), " r ");
        assert_eq!(result.source, SearchSource::Idle);
        assert!(result.foods.is_empty());
    }

    #[test]
    fn test_failure_falls_back_to_catalog() {
        let result = search_with_fallback(Some(&Failing), &FoodCatalog::builtin(), "banana");
        assert_eq!(result.source, SearchSource::Catalog);
        assert_eq!(result.foods.len(), 1);
        assert_eq!(result.foods[0].per100, Nutrients::new(89.0, 1.1, 0.3, 23.0));
    }

    #[test]
    fn test_empty_lookup_falls_back_to_catalog() {
        let result = search_with_fallback(Some(&Fixed(Vec::new())), &FoodCatalog::builtin(), "oats");
        assert_eq!(result.source, SearchSource::Catalog);
        assert_eq!(result.foods[0].name, "oats (dry)");
    }

    #[test]
    fn test_lookup_results_win() {
        let hit = LookupFood {
            name: "Oats, rolled".into(),
            per100: Nutrients::new(379.0, 13.2, 6.5, 67.7),
        };
        let result = search_with_fallback(Some(&Fixed(vec![hit.clone()])), &FoodCatalog::builtin(), "oats");
        assert_eq!(result.source, SearchSource::Usda);
        assert_eq!(result.foods, vec![hit]);
    }

    #[test]
    fn test_no_lookup_uses_catalog() {
        let result = search_with_fallback(None, &FoodCatalog::builtin(), "zzz");
        assert_eq!(result.source, SearchSource::Catalog);
        assert!(result.foods.is_empty());
    }
}
