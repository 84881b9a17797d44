mod catalog;
pub mod models;

pub use models::{Category, Nutrition, Pizza};

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use err_derive::Error;
use log::*;
use serde::Serialize;

use infra::ids::Id;

use crate::config::MenuConfig;
use crate::services::{Queryable, Request};

#[derive(Debug, Clone, Error)]
pub enum MenuError {
    #[error(display = "no such pizza: {}", _0)]
    UnknownPizza(Id<Pizza>),
    #[error(display = "no such category: {}", _0)]
    UnknownCategory(Id<Category>),
}

/// Read side of the storefront: an in-memory catalog behind cheap clones.
#[derive(Debug, Clone)]
pub struct Menu {
    pizzas: Arc<HashMap<Id<Pizza>, Pizza>>,
    categories: Arc<Vec<Category>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ShowMenu;

#[derive(Debug, Clone, Copy)]
pub struct PizzasByCategory(pub Id<Category>);

#[derive(Debug, Clone, Copy)]
pub struct FeaturedPizzas;

#[derive(Debug, Clone, Copy)]
pub struct PizzaDetails(pub Id<Pizza>);

#[derive(Debug, Clone, Copy)]
pub struct ShowCategories;

#[derive(Debug, Clone, Copy)]
pub struct Summarize;

#[derive(Debug, Clone, Serialize)]
pub struct MenuSummary {
    pub total_pizzas: usize,
    pub total_categories: usize,
    pub generated_at: DateTime<Utc>,
}

impl Menu {
    pub fn new(config: &MenuConfig) -> Result<Self> {
        let (categories, pizzas) = catalog::builtin()?;

        let mut map = HashMap::new();
        for pizza in pizzas {
            if !pizza.available && !config.include_unavailable {
                debug!("Skipping unavailable entry: {}", pizza.slug);
                continue;
            }
            Self::insert(&mut map, pizza);
        }

        let mut categories: Vec<Category> =
            categories.into_iter().filter(|c| c.active).collect();
        categories.sort_by_key(|c| c.order);

        debug!(
            "Loaded {} pizzas across {} categories",
            map.len(),
            categories.len()
        );
        Ok(Menu {
            pizzas: Arc::new(map),
            categories: Arc::new(categories),
        })
    }

    fn insert(map: &mut HashMap<Id<Pizza>, Pizza>, pizza: Pizza) {
        let prev_size = map.len();
        map.insert(pizza.id, pizza);
        assert!(map.len() > prev_size);
    }

    fn category(&self, id: &Id<Category>) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }
}

impl Request for ShowMenu {
    type Resp = Vec<(Id<Pizza>, Pizza)>;
}

impl Queryable<ShowMenu> for Menu {
    fn query(&self, _: ShowMenu) -> Result<Vec<(Id<Pizza>, Pizza)>> {
        info!("Show menu");
        let mut listing: Vec<(Id<Pizza>, Pizza)> = self
            .pizzas
            .iter()
            .map(|(id, pizza)| (*id, pizza.clone()))
            .collect();
        listing.sort_by(|(_, a), (_, b)| a.name.cmp(&b.name));
        Ok(listing)
    }
}

impl Request for PizzasByCategory {
    type Resp = Vec<Pizza>;
}

impl Queryable<PizzasByCategory> for Menu {
    fn query(&self, req: PizzasByCategory) -> Result<Vec<Pizza>> {
        let PizzasByCategory(category_id) = req;
        if self.category(&category_id).is_none() {
            return Err(MenuError::UnknownCategory(category_id).into());
        }

        let mut pizzas: Vec<Pizza> = self
            .pizzas
            .values()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect();
        // Featured entries lead, then alphabetical.
        pizzas.sort_by(|a, b| b.featured.cmp(&a.featured).then_with(|| a.name.cmp(&b.name)));
        debug!("Category {} has {} pizzas", category_id, pizzas.len());
        Ok(pizzas)
    }
}

impl Request for FeaturedPizzas {
    type Resp = Vec<Pizza>;
}

impl Queryable<FeaturedPizzas> for Menu {
    fn query(&self, _: FeaturedPizzas) -> Result<Vec<Pizza>> {
        let mut pizzas: Vec<Pizza> = self
            .pizzas
            .values()
            .filter(|p| p.featured)
            .cloned()
            .collect();
        pizzas.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(pizzas)
    }
}

impl Request for PizzaDetails {
    type Resp = Pizza;
}

impl Queryable<PizzaDetails> for Menu {
    fn query(&self, req: PizzaDetails) -> Result<Pizza> {
        let PizzaDetails(id) = req;
        let pizza = self.pizzas.get(&id).cloned();
        debug!("Load {} -> {:?}", id, pizza.as_ref().map(|p| &p.slug));
        pizza.ok_or_else(|| MenuError::UnknownPizza(id).into())
    }
}

impl Request for ShowCategories {
    type Resp = Vec<Category>;
}

impl Queryable<ShowCategories> for Menu {
    fn query(&self, _: ShowCategories) -> Result<Vec<Category>> {
        Ok(self.categories.as_ref().clone())
    }
}

impl Request for Summarize {
    type Resp = MenuSummary;
}

impl Queryable<Summarize> for Menu {
    fn query(&self, _: Summarize) -> Result<MenuSummary> {
        Ok(MenuSummary {
            total_pizzas: self.pizzas.len(),
            total_categories: self.categories.len(),
            generated_at: Utc::now(),
        })
    }
}
