//! Nutrition Analysis
//!
//! Aggregates per-product nutrition highlights into a pantry-wide summary.

use serde::{Deserialize, Serialize};

/// Suggestions are only listed for the first few gaps
const MAX_SUGGESTIONS: usize = 4;
/// Fewer gaps than this reads as a "strong" foundation
const STRONG_THRESHOLD: usize = 5;
const FALLBACK_SOURCES: &str = "Various food sources available";

const FOOD_SOURCES: &[(&str, &str)] = &[
    ("Iron", "Spinach, lentils, lean red meat"),
    ("B12", "Fish, eggs, fortified cereals"),
    ("Zinc", "Nuts, seeds, whole grains"),
    ("Vitamin B6", "Bananas, chickpeas, tuna"),
    ("Magnesium", "Dark chocolate, almonds, avocados"),
    ("Phosphorus", "Dairy products, salmon, turkey"),
    ("Vitamin D", "Fatty fish, fortified milk, mushrooms"),
    ("Vitamin K", "Kale, broccoli, Brussels sprouts"),
    ("Prebiotics", "Garlic, onions, bananas"),
    ("Potassium", "Potatoes, beans, tomatoes"),
    ("Vitamin C", "Citrus fruits, bell peppers, strawberries"),
    ("Antioxidants", "Berries, dark leafy greens, tea"),
    ("Beta Carotene", "Carrots, sweet potatoes, cantaloupe"),
    ("Folate", "Leafy greens, legumes, asparagus"),
    ("Omega-3", "Fatty fish, walnuts, flax seeds"),
    ("Copper", "Cashews, dark chocolate, lobster"),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionHighlight {
    pub product_name: String,
    pub category: String,
    pub color: String,
    pub icon: String,
    pub benefits: String,
    pub nutrition_details: String,
    pub missing_nutrients: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub color: String,
    pub icon: String,
    pub benefits: String,
    pub products: Vec<String>,
}

impl CategoryGroup {
    /// `color` is a Bootstrap variant ("success", "warning"), not a CSS colour
    pub fn card_class(&self) -> String {
        if self.color.is_empty() {
            "card h-100".to_string()
        } else {
            format!("card h-100 border-{}", self.color)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub nutrient: String,
    pub sources: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionAnalysis {
    pub highlighted_items: usize,
    /// First-seen order
    pub categories: Vec<CategoryGroup>,
    pub available_nutrients: Vec<String>,
    pub missing_nutrients: Vec<String>,
}

impl NutritionAnalysis {
    pub fn from_highlights(highlights: &[NutritionHighlight]) -> Self {
        let mut analysis = Self {
            highlighted_items: highlights.len(),
            ..Default::default()
        };
        for h in highlights {
            match analysis.categories.iter_mut().find(|g| g.category == h.category) {
                Some(group) => group.products.push(h.product_name.clone()),
                None => analysis.categories.push(CategoryGroup {
                    category: h.category.clone(),
                    color: h.color.clone(),
                    icon: h.icon.clone(),
                    benefits: h.benefits.clone(),
                    products: vec![h.product_name.clone()],
                }),
            }
            for nutrient in h.nutrition_details.split_whitespace() {
                push_unique(&mut analysis.available_nutrients, nutrient);
            }
            for nutrient in h.missing_nutrients.split(',') {
                push_unique(&mut analysis.missing_nutrients, nutrient.trim());
            }
        }
        analysis
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.missing_nutrients
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|nutrient| Suggestion {
                nutrient: nutrient.clone(),
                sources: food_sources(nutrient),
            })
            .collect()
    }

    pub fn has_gaps(&self) -> bool {
        !self.missing_nutrients.is_empty()
    }

    /// "strong" or "good"
    pub fn foundation(&self) -> &'static str {
        if self.missing_nutrients.len() < STRONG_THRESHOLD {
            "strong"
        } else {
            "good"
        }
    }
}

pub fn food_sources(nutrient: &str) -> &'static str {
    FOOD_SOURCES
        .iter()
        .find(|(name, _)| *name == nutrient)
        .map(|(_, sources)| *sources)
        .unwrap_or(FALLBACK_SOURCES)
}

fn push_unique(set: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !set.iter().any(|v| v == value) {
        set.push(value.to_string());
    }
}
