use anyhow::{Context, Result};
use log::*;

pub mod cart;
pub mod config;
pub mod menu;
pub mod services;

/// Composition root; one instance per client session. Owns the catalog and
/// the cart so callers get state by injection rather than via globals.
pub struct Pizzeria {
    menu: menu::Menu,
    cart: cart::CartStore,
}

impl Pizzeria {
    pub fn new(config: &config::Config) -> Result<Self> {
        info!("Booting pizzeria");
        let menu = menu::Menu::new(&config.menu).context("Build menu")?;
        let cart = cart::CartStore::new();
        Ok(Pizzeria { menu, cart })
    }

    pub fn menu(&self) -> &menu::Menu {
        &self.menu
    }

    pub fn cart(&self) -> &cart::CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut cart::CartStore {
        &mut self.cart
    }
}
