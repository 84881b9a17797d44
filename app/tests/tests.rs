use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use maplit::hashset;

use infra::ids::Id;
use pizzeria::cart::{Dough, Size};
use pizzeria::config::{Config, MenuConfig};
use pizzeria::menu::{FeaturedPizzas, PizzaDetails, PizzasByCategory, ShowCategories, ShowMenu};
use pizzeria::services::Queryable;
use pizzeria::Pizzeria;

const EPS: f64 = 1e-9;

#[test]
fn customer_browses_the_menu_and_fills_a_cart() -> Result<()> {
    env_logger::try_init().unwrap_or_default();
    let mut pz = Pizzeria::new(&Config::default())?;

    let categories = pz.menu().query(ShowCategories)?;
    let slugs = categories
        .iter()
        .map(|c| c.slug.as_str())
        .collect::<std::collections::HashSet<_>>();
    assert_eq!(
        slugs,
        hashset! {"salgadas", "doces", "veganas", "especiais"}
    );

    let featured = pz.menu().query(FeaturedPizzas)?;
    assert!(!featured.is_empty(), "menu should highlight something");
    let pick = featured[0].clone();

    pz.cart_mut().add_item(&pick, Size::default(), Dough::default());
    pz.cart_mut().add_item(&pick, Size::default(), Dough::default());
    pz.cart_mut().add_item(&pick, Size::Large, Dough::GlutenFree);

    let cart = pz.cart();
    assert_eq!(cart.lines().len(), 2, "same combination should merge");
    assert_eq!(cart.total_items(), 3);

    let expected = pick.price * 2.0 + (pick.price * 1.3 + 5.0);
    assert!(
        (cart.total_price() - expected).abs() < EPS,
        "total {} should be {}",
        cart.total_price(),
        expected
    );
    Ok(())
}

#[test]
fn cart_survives_browsing_but_not_clearing() -> Result<()> {
    env_logger::try_init().unwrap_or_default();
    let mut pz = Pizzeria::new(&Config::default())?;

    let margherita = pz
        .menu()
        .query(PizzaDetails(Id::hashed("margherita-classica")))?;
    let quattro = pz
        .menu()
        .query(PizzaDetails(Id::hashed("quattro-formaggi")))?;

    pz.cart_mut()
        .add_item(&margherita, Size::Medium, Dough::Traditional);
    pz.cart_mut()
        .add_item(&quattro, Size::Small, Dough::WholeGrain);

    // Browsing around is read-only and leaves the cart alone.
    let _ = pz.menu().query(ShowMenu)?;
    let _ = pz.menu().query(PizzasByCategory(Id::hashed("doces")))?;
    assert_eq!(pz.cart().total_items(), 2);

    pz.cart_mut().open();
    pz.cart_mut().clear();
    assert_eq!(pz.cart().total_items(), 0);
    assert!(pz.cart().total_price().abs() < EPS);
    assert!(pz.cart().is_open(), "clear must not close the panel");
    Ok(())
}

#[test]
fn storefront_notifies_subscribers_of_cart_changes() -> Result<()> {
    env_logger::try_init().unwrap_or_default();
    let mut pz = Pizzeria::new(&Config::default())?;

    let seen: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let initial = pz
        .cart_mut()
        .subscribe(move |snapshot| sink.borrow_mut().push(snapshot.total_items));
    assert_eq!(initial.total_items, 0);

    let pick = pz
        .menu()
        .query(PizzaDetails(Id::hashed("salmao-defumado")))?;
    pz.cart_mut().add_item(&pick, Size::Large, Dough::Traditional);
    pz.cart_mut()
        .increase_quantity(&pick.id, Size::Large, Dough::Traditional);
    pz.cart_mut()
        .remove_item(&pick.id, Size::Large, Dough::Traditional);

    assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    Ok(())
}

#[test]
fn unavailable_entries_stay_off_the_menu_until_asked_for() -> Result<()> {
    env_logger::try_init().unwrap_or_default();
    let stock = Pizzeria::new(&Config::default())?;
    let config = Config {
        menu: MenuConfig {
            include_unavailable: true,
        },
    };
    let everything = Pizzeria::new(&config)?;

    let stock_count = stock.menu().query(ShowMenu)?.len();
    let full_count = everything.menu().query(ShowMenu)?.len();
    assert!(
        full_count > stock_count,
        "expected hidden entries: {} vs {}",
        full_count,
        stock_count
    );

    // The seasonal special is reachable by id once included.
    let truffle = everything
        .menu()
        .query(PizzaDetails(Id::hashed("tartufo-nero")))?;
    assert!(!truffle.available);
    Ok(())
}
