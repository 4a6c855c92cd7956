//! USDA response normalization
//!
//! Maps the loosely-shaped FoodData Central search payload into canonical
//! per-100g [`LookupFood`] records. Nutrient entries come in two shapes
//! (`{nutrient: {nutrientName, unitName}, amount}` from full records and
//! `{nutrientName, unitName, value}` from search hits); both are accepted.

use serde_json::Value;

use crate::models::Nutrients;
use crate::nutrition::round1;

use super::LookupFood;

pub const KJ_PER_KCAL: f64 = 4.184;

const ENERGY: &[&str] = &["Energy"];
const PROTEIN: &[&str] = &["Protein"];
const FAT: &[&str] = &["Total lipid (fat)", "Total Fat", "Fat"];
const CARBS: &[&str] = &["Carbohydrate, by difference", "Carbohydrate"];

/// A nutrient value with its (lower-cased) unit
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientValue {
    pub value: f64,
    pub unit: String,
}

fn entry_str<'a>(entry: &'a Value, key: &str) -> &'a str {
    entry
        .get("nutrient")
        .and_then(|n| n.get(key))
        .or_else(|| entry.get(key))
        .and_then(Value::as_str)
        .unwrap_or("")
}

fn entry_amount(entry: &Value) -> Option<f64> {
    entry
        .get("amount")
        .filter(|v| !v.is_null())
        .or_else(|| entry.get("value"))
        .and_then(Value::as_f64)
}

/// Find a nutrient by exact (case-insensitive) name
///
/// With `prefer_unit`, only entries in that unit are considered on the first
/// pass; a second pass accepts any unit.
pub fn pick_nutrient(nutrients: &[Value], names: &[&str], prefer_unit: Option<&str>) -> Option<NutrientValue> {
    let matches_name = |entry: &Value| {
        let name = entry_str(entry, "nutrientName").to_lowercase();
        names.iter().any(|n| n.to_lowercase() == name)
    };
    let found = |entry: &Value| {
        entry_amount(entry).map(|value| NutrientValue {
            value,
            unit: entry_str(entry, "unitName").to_lowercase(),
        })
    };

    if let Some(unit) = prefer_unit {
        let unit = unit.to_lowercase();
        let exact = nutrients
            .iter()
            .filter(|e| matches_name(e))
            .filter_map(found)
            .find(|n| n.unit == unit);
        if exact.is_some() {
            return exact;
        }
    }

    nutrients.iter().filter(|e| matches_name(e)).find_map(found)
}

/// Energy in kcal, converting from kJ when that is all the record has
pub fn pick_energy_kcal(nutrients: &[Value]) -> Option<f64> {
    // Exact kcal, then exact kJ, then whatever unit "Energy" carries
    if let Some(kcal) = pick_nutrient(nutrients, ENERGY, Some("kcal")).filter(|n| n.unit == "kcal") {
        return Some(kcal.value);
    }
    if let Some(kj) = pick_nutrient(nutrients, ENERGY, Some("kj")).filter(|n| n.unit == "kj") {
        return Some(kj.value / KJ_PER_KCAL);
    }
    pick_nutrient(nutrients, ENERGY, None).map(|n| n.value)
}

/// Normalize one search hit
pub fn map_food(item: &Value) -> LookupFood {
    let name = item
        .get("description")
        .and_then(Value::as_str)
        .or_else(|| item.get("brandName").and_then(Value::as_str))
        .unwrap_or("Food")
        .to_string();

    let empty = Vec::new();
    let nutrients = item
        .get("foodNutrients")
        .and_then(Value::as_array)
        .unwrap_or(&empty);

    let value_of = |names: &[&str]| pick_nutrient(nutrients, names, None).map_or(0.0, |n| n.value);

    let per100 = Nutrients {
        kcal: pick_energy_kcal(nutrients).unwrap_or(0.0),
        protein_g: value_of(PROTEIN),
        fat_g: value_of(FAT),
        carbs_g: value_of(CARBS),
    }
    .map(round1);

    LookupFood { name, per100 }
}

/// Normalize a full search response, dropping foods with no nutrient data
pub fn normalize_search_response(body: &Value) -> Vec<LookupFood> {
    body.get("foods")
        .and_then(Value::as_array)
        .map(|foods| {
            foods
                .iter()
                .map(map_food)
                .filter(|f| !f.per100.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_hit_shape() {
        let item = json!({
            "description": "Apples, raw, with skin",
            "foodNutrients": [
                {"nutrientName": "Protein", "unitName": "G", "value": 0.26},
                {"nutrientName": "Total lipid (fat)", "unitName": "G", "value": 0.17},
                {"nutrientName": "Carbohydrate, by difference", "unitName": "G", "value": 13.81},
                {"nutrientName": "Energy", "unitName": "kJ", "value": 218.0},
                {"nutrientName": "Energy", "unitName": "KCAL", "value": 52.0}
            ]
        });
        let food = map_food(&item);
        assert_eq!(food.name, "Apples, raw, with skin");
        assert_eq!(food.per100, Nutrients::new(52.0, 0.3, 0.2, 13.8));
    }

    #[test]
    fn test_full_record_shape() {
        let item = json!({
            "brandName": "ACME",
            "foodNutrients": [
                {"nutrient": {"nutrientName": "Protein", "unitName": "g"}, "amount": 25.04},
                {"nutrient": {"nutrientName": "Total Fat", "unitName": "g"}, "amount": 49.94},
                {"nutrient": {"nutrientName": "Carbohydrate", "unitName": "g"}, "amount": 19.56},
                {"nutrient": {"nutrientName": "Energy", "unitName": "kcal"}, "amount": 588.0}
            ]
        });
        let food = map_food(&item);
        assert_eq!(food.name, "ACME");
        assert_eq!(food.per100, Nutrients::new(588.0, 25.0, 49.9, 19.6));
    }

    #[test]
    fn test_energy_from_kilojoules() {
        let nutrients = vec![json!({"nutrientName": "Energy", "unitName": "kJ", "value": 418.4})];
        let kcal = pick_energy_kcal(&nutrients).unwrap();
        assert!((kcal - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_numeric_values_are_skipped() {
        let nutrients = vec![
            json!({"nutrientName": "Protein", "unitName": "g", "value": "n/a"}),
            json!({"nutrientName": "protein", "unitName": "g", "value": 4.0}),
        ];
        let picked = pick_nutrient(&nutrients, PROTEIN, None).unwrap();
        assert_eq!(picked.value, 4.0);
        assert_eq!(picked.unit, "g");
    }

    #[test]
    fn test_missing_name_and_nutrients() {
        let food = map_food(&json!({}));
        assert_eq!(food.name, "Food");
        assert!(food.per100.is_empty());
    }

    #[test]
    fn test_all_zero_foods_are_dropped() {
        let body = json!({
            "foods": [
                {"description": "Water", "foodNutrients": []},
                {"description": "Rice", "foodNutrients": [
                    {"nutrientName": "Carbohydrate, by difference", "unitName": "G", "value": 28.0}
                ]}
            ]
        });
        let foods = normalize_search_response(&body);
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].name, "Rice");
        assert!(normalize_search_response(&json!({"error": "x"})).is_empty());
    }
}
