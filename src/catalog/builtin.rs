//! Built-in reference foods (values per 100 g)

use crate::models::{DietTag, Food, Nutrients};

use DietTag::{Omnivore, Vegan, Vegetarian};

const ALL_DIETS: &[DietTag] = &[Omnivore, Vegetarian, Vegan];
const PLANT: &[DietTag] = &[Vegetarian, Vegan];

pub fn foods() -> Vec<Food> {
    vec![
        Food::new("chicken breast (cooked)", Nutrients::new(165.0, 31.0, 3.6, 0.0), &[Omnivore]),
        Food::new("salmon (baked)", Nutrients::new(208.0, 20.0, 13.0, 0.0), &[Omnivore]),
        Food::new("egg (whole)", Nutrients::new(155.0, 13.0, 11.0, 1.1), &[Omnivore]),

        Food::new("tofu (firm)", Nutrients::new(76.0, 8.0, 4.8, 1.9), PLANT),
        Food::new("tempeh", Nutrients::new(193.0, 20.0, 11.0, 7.6), PLANT),
        Food::new("beans (cooked)", Nutrients::new(127.0, 8.7, 0.5, 22.0), PLANT),
        Food::new("lentils (cooked)", Nutrients::new(116.0, 9.0, 0.4, 20.0), PLANT),
        Food::new("greek yogurt 0% fat", Nutrients::new(59.0, 10.0, 0.4, 3.6), &[Vegetarian]),

        Food::new("rice (cooked)", Nutrients::new(130.0, 2.4, 0.3, 28.0), ALL_DIETS),
        Food::new("quinoa (cooked)", Nutrients::new(120.0, 4.4, 1.9, 21.0), ALL_DIETS),
        Food::new("sweet potato (baked)", Nutrients::new(90.0, 2.0, 0.1, 21.0), ALL_DIETS),
        Food::new("corn tortilla", Nutrients::new(218.0, 5.7, 2.9, 44.0), ALL_DIETS),
        Food::new("whole wheat bread", Nutrients::new(247.0, 13.0, 4.2, 41.0), ALL_DIETS),
        Food::new("oats (dry)", Nutrients::new(389.0, 16.9, 6.9, 66.3), ALL_DIETS),

        Food::new("broccoli (cooked)", Nutrients::new(35.0, 2.4, 0.4, 7.2), ALL_DIETS),
        Food::new("spinach (raw)", Nutrients::new(23.0, 2.9, 0.4, 3.6), ALL_DIETS),
        Food::new("apple", Nutrients::new(52.0, 0.3, 0.2, 14.0), ALL_DIETS),
        Food::new("banana", Nutrients::new(89.0, 1.1, 0.3, 23.0), ALL_DIETS),

        Food::new("avocado", Nutrients::new(160.0, 2.0, 15.0, 9.0), ALL_DIETS),
        Food::new("olive oil", Nutrients::new(884.0, 0.0, 100.0, 0.0), ALL_DIETS),
        Food::new("almonds", Nutrients::new(579.0, 21.0, 50.0, 22.0), ALL_DIETS),
        Food::new("peanut butter", Nutrients::new(588.0, 25.0, 50.0, 20.0), ALL_DIETS)
            .with_allergens(&["peanut"]),
    ]
}
