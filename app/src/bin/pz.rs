use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::SecondsFormat;
use log::*;
use serde::Deserialize;
use structopt::StructOpt;

use infra::ids::Id;
use pizzeria::cart::{Dough, Size};
use pizzeria::menu::{
    FeaturedPizzas, Pizza, PizzaDetails, PizzasByCategory, ShowCategories, ShowMenu, Summarize,
};
use pizzeria::services::Queryable;
use pizzeria::Pizzeria;

#[derive(Debug, StructOpt)]
#[structopt(name = "pz", about = "Pizzeria storefront CLI")]
struct Opt {
    /// Config file; without it, PIZZERIA_* environment variables apply.
    #[structopt(short = "c", long = "config", parse(from_os_str))]
    config: Option<PathBuf>,
    #[structopt(subcommand)]
    command: Commands,
}

#[derive(Debug, StructOpt)]
enum Commands {
    #[structopt(name = "menu", about = "Show the menu, grouped by category")]
    Menu {
        #[structopt(long = "json")]
        json: bool,
    },
    #[structopt(name = "categories", about = "List categories")]
    Categories,
    #[structopt(name = "featured", about = "List featured pizzas")]
    Featured,
    #[structopt(name = "show", about = "Show one pizza in detail")]
    Show { id: Id<Pizza> },
    #[structopt(name = "order", about = "Price an order via the cart")]
    Order {
        /// Items as pizza-id[:size[:dough]]; repeats merge into one line.
        items: Vec<ItemSpec>,
        #[structopt(long = "json")]
        json: bool,
    },
}

#[derive(Debug, Clone)]
struct ItemSpec {
    pizza_id: Id<Pizza>,
    size: Size,
    dough: Dough,
}

impl FromStr for ItemSpec {
    type Err = anyhow::Error;
    fn from_str(src: &str) -> Result<Self> {
        let mut parts = src.splitn(3, ':');
        let pizza_id = match parts.next() {
            Some(chunk) => chunk.parse()?,
            None => bail!("empty item spec"),
        };
        let size = parts.next().map(str::parse).transpose()?.unwrap_or_default();
        let dough = parts.next().map(str::parse).transpose()?.unwrap_or_default();
        Ok(ItemSpec {
            pizza_id,
            size,
            dough,
        })
    }
}

#[derive(Deserialize, Debug)]
struct Config {
    #[serde(flatten)]
    pizzeria: pizzeria::config::Config,
    #[serde(default)]
    env_logger: Option<pizzeria::config::EnvLogger>,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    let config = load_config(&opt)?;
    match &config.env_logger {
        Some(logger) => logger.builder().init(),
        None => env_logger::init(),
    }
    debug!("Options: {:?}", opt);

    let mut pz = Pizzeria::new(&config.pizzeria)?;

    match opt.command {
        Commands::Menu { json } => show_menu(&pz, json)?,
        Commands::Categories => {
            for category in pz.menu().query(ShowCategories)? {
                println!("{}: {} ({})", category.id, category.name, category.slug);
            }
        }
        Commands::Featured => {
            for pizza in pz.menu().query(FeaturedPizzas)? {
                println!("{}: {} - R$ {:.2}", pizza.id, pizza.name, pizza.price);
            }
        }
        Commands::Show { id } => show_pizza(&pz, id)?,
        Commands::Order { items, json } => order(&mut pz, &items, json)?,
    }

    Ok(())
}

fn load_config(opt: &Opt) -> Result<Config> {
    match &opt.config {
        Some(path) => {
            let mut buf = String::new();
            File::open(path)
                .with_context(|| format!("open config {:?}", path))?
                .read_to_string(&mut buf)?;
            Ok(toml::from_str(&buf)?)
        }
        None => {
            let menu = envy::prefixed("PIZZERIA_")
                .from_env()
                .context("read PIZZERIA_* environment")?;
            Ok(Config {
                pizzeria: pizzeria::config::Config { menu },
                env_logger: None,
            })
        }
    }
}

fn show_menu(pz: &Pizzeria, json: bool) -> Result<()> {
    if json {
        let pizzas: Vec<Pizza> = pz
            .menu()
            .query(ShowMenu)?
            .into_iter()
            .map(|(_, pizza)| pizza)
            .collect();
        println!("{}", serde_json::to_string_pretty(&pizzas)?);
        return Ok(());
    }

    for category in pz.menu().query(ShowCategories)? {
        println!("{}", category.name);
        for pizza in pz.menu().query(PizzasByCategory(category.id))? {
            let marker = if pizza.featured { "*" } else { " " };
            println!("  {} {} - R$ {:.2} ({})", marker, pizza.name, pizza.price, pizza.id);
        }
    }

    let summary = pz.menu().query(Summarize)?;
    println!(
        "{} pizzas across {} categories as of {}",
        summary.total_pizzas,
        summary.total_categories,
        summary.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    Ok(())
}

fn show_pizza(pz: &Pizzeria, id: Id<Pizza>) -> Result<()> {
    let pizza = pz.menu().query(PizzaDetails(id))?;
    println!("{} - R$ {:.2}", pizza.name, pizza.price);
    println!("{}", pizza.description);
    println!("Ingredients: {}", pizza.ingredients.join(", "));
    println!("Ready in ~{} min", pizza.preparation_minutes);
    if let Some(n) = &pizza.nutrition {
        println!(
            "Per slice: {} kcal, {}g protein, {}g carbs, {}g fat, {}g fibre",
            n.calories_per_slice, n.protein, n.carbohydrates, n.fat, n.fiber
        );
    }
    if !pizza.tags.is_empty() {
        println!("Tags: {}", pizza.tags.join(", "));
    }
    Ok(())
}

fn order(pz: &mut Pizzeria, items: &[ItemSpec], json: bool) -> Result<()> {
    if items.is_empty() {
        bail!("no items given");
    }

    for item in items {
        let pizza = pz.menu().query(PizzaDetails(item.pizza_id))?;
        pz.cart_mut().add_item(&pizza, item.size, item.dough);
    }

    let cart = pz.cart();
    if json {
        println!("{}", serde_json::to_string_pretty(&cart.snapshot())?);
        return Ok(());
    }

    for line in cart.lines() {
        println!(
            "{:>2}x {} ({}, {}) @ R$ {:.2} = R$ {:.2}",
            line.quantity,
            line.pizza.name,
            line.size,
            line.dough,
            line.unit_price(),
            line.line_total()
        );
    }
    println!("Items: {}", cart.total_items());
    println!("Total: R$ {:.2}", cart.total_price());
    Ok(())
}
