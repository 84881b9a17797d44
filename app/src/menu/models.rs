use serde::{Deserialize, Serialize};
use url::Url;

use infra::ids::{Entity, Id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: Id<Pizza>,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub price: f64,
    pub image_url: Url,
    pub category_id: Id<Category>,
    pub available: bool,
    pub featured: bool,
    pub preparation_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    pub tags: Vec<String>,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id<Category>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub slug: String,
    pub order: u32,
    pub active: bool,
}

/// Per-slice figures; grams except for calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories_per_slice: u32,
    pub protein: u32,
    pub carbohydrates: u32,
    pub fat: u32,
    pub fiber: u32,
}

impl Entity for Pizza {
    const PREFIX: &'static str = "pizza";
}

impl Entity for Category {
    const PREFIX: &'static str = "category";
}
