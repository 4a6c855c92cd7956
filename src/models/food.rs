//! Food model
//!
//! A catalog food with per-100g nutrients, diet eligibility and allergens.

use serde::{Deserialize, Serialize};

use super::Nutrients;

/// Diet category a food is eligible for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietTag {
    Omnivore,
    Vegetarian,
    Vegan,
}

impl DietTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietTag::Omnivore => "omnivore",
            DietTag::Vegetarian => "vegetarian",
            DietTag::Vegan => "vegan",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "omnivore" => Some(DietTag::Omnivore),
            "vegetarian" => Some(DietTag::Vegetarian),
            "vegan" => Some(DietTag::Vegan),
            _ => None,
        }
    }
}

/// A food in the reference catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub name: String,
    pub per100: Nutrients,
    pub diet_tags: Vec<DietTag>,
    #[serde(default)]
    pub allergens: Vec<String>,
}

impl Food {
    pub fn new(name: impl Into<String>, per100: Nutrients, diet_tags: &[DietTag]) -> Self {
        Self {
            name: name.into(),
            per100,
            diet_tags: diet_tags.to_vec(),
            allergens: Vec::new(),
        }
    }

    pub fn with_allergens(mut self, allergens: &[&str]) -> Self {
        self.allergens = allergens.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn fits_diet(&self, diet: DietTag) -> bool {
        self.diet_tags.contains(&diet)
    }
}
