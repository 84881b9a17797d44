mod models;

pub use models::{unit_price, CartLine, Dough, Size};

use std::fmt;

use log::*;
use serde::Serialize;

use infra::ids::Id;

use crate::menu::Pizza;

pub type Listener = Box<dyn FnMut(&CartSnapshot)>;

/// Immutable view of the cart; subscribers get one per mutation, so a
/// reader never observes a half-updated line list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub is_open: bool,
    pub total_items: u32,
    pub total_price: f64,
}

/// Single source of truth for cart contents and panel visibility. One per
/// client session, owned by the composition root.
pub struct CartStore {
    lines: Vec<CartLine>,
    is_open: bool,
    listeners: Vec<Listener>,
}

impl CartStore {
    pub fn new() -> Self {
        CartStore {
            lines: Vec::new(),
            is_open: false,
            listeners: Vec::new(),
        }
    }

    /// Merge into the matching (pizza, size, dough) line, or append a new
    /// line with quantity 1. New lines go at the end; order is stable.
    pub fn add_item(&mut self, pizza: &Pizza, size: Size, dough: Dough) {
        match self
            .lines
            .iter()
            .position(|line| line.matches(&pizza.id, size, dough))
        {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity += 1;
                debug!("Bump {} ({}, {}) to {}", pizza.slug, size, dough, line.quantity);
            }
            None => {
                debug!("New line: {} ({}, {})", pizza.slug, size, dough);
                self.lines.push(CartLine::new(pizza.clone(), size, dough));
            }
        }
        self.notify();
    }

    /// Drop the exactly-matching line. Absent lines are a no-op.
    pub fn remove_item(&mut self, id: &Id<Pizza>, size: Size, dough: Dough) {
        self.lines.retain(|line| !line.matches(id, size, dough));
        self.notify();
    }

    pub fn increase_quantity(&mut self, id: &Id<Pizza>, size: Size, dough: Dough) {
        if let Some(line) = self.line_mut(id, size, dough) {
            line.quantity += 1;
        }
        self.notify();
    }

    /// Quantity floors at 1; removal is always an explicit `remove_item`.
    pub fn decrease_quantity(&mut self, id: &Id<Pizza>, size: Size, dough: Dough) {
        if let Some(line) = self.line_mut(id, size, dough) {
            if line.quantity > 1 {
                line.quantity -= 1;
            }
        }
        self.notify();
    }

    pub fn clear(&mut self) {
        debug!("Clear cart ({} lines)", self.lines.len());
        self.lines.clear();
        self.notify();
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.notify();
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.notify();
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
        self.notify();
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            is_open: self.is_open,
            total_items: self.total_items(),
            total_price: self.total_price(),
        }
    }

    /// Register a listener called with a fresh snapshot after every
    /// mutation, and hand back the state as of subscription.
    pub fn subscribe<F: FnMut(&CartSnapshot) + 'static>(&mut self, listener: F) -> CartSnapshot {
        self.listeners.push(Box::new(listener));
        self.snapshot()
    }

    fn line_mut(&mut self, id: &Id<Pizza>, size: Size, dough: Dough) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.matches(id, size, dough))
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("CartStore")
            .field("lines", &self.lines)
            .field("is_open", &self.is_open)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const EPS: f64 = 1e-9;

    fn pizza(slug: &str, price: f64) -> Pizza {
        Pizza {
            id: Id::hashed(slug),
            name: slug.to_string(),
            description: String::new(),
            ingredients: Vec::new(),
            price,
            image_url: "https://images.sapore.example/test.jpg"
                .parse()
                .expect("parse url"),
            category_id: Id::hashed("salgadas"),
            available: true,
            featured: false,
            preparation_minutes: 15,
            nutrition: None,
            tags: Vec::new(),
            slug: slug.to_string(),
        }
    }

    fn margherita() -> Pizza {
        pizza("margherita-classica", 52.90)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {} within {} of {}",
            actual,
            EPS,
            expected
        );
    }

    #[test]
    fn adding_same_combination_twice_merges_into_one_line() {
        let mut cart = CartStore::new();
        let p = margherita();

        cart.add_item(&p, Size::Medium, Dough::Traditional);
        cart.add_item(&p, Size::Medium, Dough::Traditional);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn different_dough_gets_its_own_line() {
        let mut cart = CartStore::new();
        let p = margherita();

        cart.add_item(&p, Size::Medium, Dough::Traditional);
        cart.add_item(&p, Size::Medium, Dough::GlutenFree);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].dough, Dough::Traditional);
        assert_eq!(cart.lines()[1].dough, Dough::GlutenFree);
    }

    #[test]
    fn lines_keep_insertion_order_across_mutations() {
        let mut cart = CartStore::new();
        let first = pizza("margherita-classica", 52.90);
        let second = pizza("pepperoni-premium", 58.90);

        cart.add_item(&first, Size::Medium, Dough::Traditional);
        cart.add_item(&second, Size::Large, Dough::Traditional);
        cart.add_item(&first, Size::Medium, Dough::Traditional);
        cart.increase_quantity(&second.id, Size::Large, Dough::Traditional);

        let slugs: Vec<&str> = cart.lines().iter().map(|l| l.pizza.slug.as_str()).collect();
        assert_eq!(slugs, vec!["margherita-classica", "pepperoni-premium"]);
    }

    #[test]
    fn decrease_clamps_at_one_and_keeps_the_line() {
        let mut cart = CartStore::new();
        let p = margherita();

        cart.add_item(&p, Size::Small, Dough::WholeGrain);
        for _ in 0..5 {
            cart.decrease_quantity(&p.id, Size::Small, Dough::WholeGrain);
        }

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn quantity_operations_on_missing_lines_are_noops() {
        let mut cart = CartStore::new();
        let p = margherita();

        cart.increase_quantity(&p.id, Size::Medium, Dough::Traditional);
        cart.decrease_quantity(&p.id, Size::Medium, Dough::Traditional);
        cart.remove_item(&p.id, Size::Medium, Dough::Traditional);

        assert!(cart.lines().is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn total_items_sums_quantities() {
        let mut cart = CartStore::new();
        let p = margherita();
        let q = pizza("quattro-formaggi", 68.90);

        assert_eq!(cart.total_items(), 0);

        cart.add_item(&p, Size::Medium, Dough::Traditional);
        cart.add_item(&p, Size::Medium, Dough::Traditional);
        cart.add_item(&q, Size::Large, Dough::Traditional);

        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn large_gluten_free_unit_price() {
        let p = margherita();

        // 52.90 × 1.3 + 5
        assert_close(unit_price(&p, Size::Large, Dough::GlutenFree), 73.77);
    }

    #[test]
    fn line_total_scales_with_quantity() {
        let mut cart = CartStore::new();
        let p = margherita();

        cart.add_item(&p, Size::Large, Dough::GlutenFree);
        cart.add_item(&p, Size::Large, Dough::GlutenFree);

        assert_close(cart.total_price(), 147.54);
    }

    #[test]
    fn total_price_sums_across_lines() {
        let mut cart = CartStore::new();
        let p = margherita();
        let q = pizza("quattro-formaggi", 68.90);

        cart.add_item(&p, Size::Small, Dough::Traditional);
        cart.add_item(&q, Size::Medium, Dough::WholeGrain);

        assert_close(cart.total_price(), 52.90 * 0.8 + (68.90 + 3.0));
    }

    #[test]
    fn empty_cart_prices_to_zero() {
        let cart = CartStore::new();
        assert_close(cart.total_price(), 0.0);
    }

    #[test]
    fn remove_only_touches_the_exact_combination() {
        let mut cart = CartStore::new();
        let p = margherita();

        cart.add_item(&p, Size::Medium, Dough::Traditional);
        cart.add_item(&p, Size::Large, Dough::Traditional);
        cart.add_item(&p, Size::Medium, Dough::GlutenFree);

        cart.remove_item(&p.id, Size::Medium, Dough::Traditional);

        assert_eq!(cart.lines().len(), 2);
        assert!(cart
            .lines()
            .iter()
            .all(|l| !(l.size == Size::Medium && l.dough == Dough::Traditional)));
    }

    #[test]
    fn clear_empties_lines_but_not_visibility() {
        let mut cart = CartStore::new();
        let p = margherita();

        cart.open();
        cart.add_item(&p, Size::Medium, Dough::Traditional);
        cart.clear();

        assert_eq!(cart.total_items(), 0);
        assert_close(cart.total_price(), 0.0);
        assert!(cart.is_open());
    }

    #[test]
    fn visibility_is_orthogonal_to_lines() {
        let mut cart = CartStore::new();
        let p = margherita();
        cart.add_item(&p, Size::Medium, Dough::Traditional);
        let before = cart.lines().to_vec();
        let price_before = cart.total_price();

        cart.open();
        cart.toggle();
        cart.toggle();
        cart.close();

        assert_eq!(cart.lines(), &before[..]);
        assert_close(cart.total_price(), price_before);
        assert!(!cart.is_open());
    }

    #[test]
    fn toggle_flips_the_flag() {
        let mut cart = CartStore::new();
        assert!(!cart.is_open());
        cart.toggle();
        assert!(cart.is_open());
        cart.toggle();
        assert!(!cart.is_open());
    }

    #[test]
    fn subscribe_returns_the_current_snapshot() {
        let mut cart = CartStore::new();
        let p = margherita();
        cart.add_item(&p, Size::Medium, Dough::Traditional);

        let snapshot = cart.subscribe(|_| {});

        assert_eq!(snapshot.total_items, 1);
        assert_eq!(snapshot.lines.len(), 1);
        assert!(!snapshot.is_open);
    }

    #[test]
    fn subscribers_observe_every_mutation() {
        let mut cart = CartStore::new();
        let seen: Rc<RefCell<Vec<(u32, bool)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        cart.subscribe(move |snapshot| {
            sink.borrow_mut()
                .push((snapshot.total_items, snapshot.is_open));
        });

        let p = margherita();
        cart.add_item(&p, Size::Medium, Dough::Traditional);
        cart.add_item(&p, Size::Medium, Dough::Traditional);
        cart.open();
        cart.clear();

        assert_eq!(
            *seen.borrow(),
            vec![(1, false), (2, false), (2, true), (0, true)]
        );
    }

    #[test]
    fn snapshot_totals_agree_with_store_queries() {
        let mut cart = CartStore::new();
        let p = margherita();
        cart.add_item(&p, Size::Large, Dough::GlutenFree);
        cart.add_item(&p, Size::Small, Dough::Traditional);

        let snapshot = cart.snapshot();

        assert_eq!(snapshot.total_items, cart.total_items());
        assert_close(snapshot.total_price, cart.total_price());
        assert_eq!(snapshot.lines, cart.lines().to_vec());
    }
}
