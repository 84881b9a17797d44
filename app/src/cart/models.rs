use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

use infra::ids::Id;

use crate::menu::Pizza;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dough {
    Traditional,
    WholeGrain,
    GlutenFree,
}

impl Default for Size {
    fn default() -> Self {
        Size::Medium
    }
}

impl Default for Dough {
    fn default() -> Self {
        Dough::Traditional
    }
}

impl Size {
    /// Scalar applied to the base price for this portion size.
    pub fn multiplier(self) -> f64 {
        match self {
            Size::Small => 0.8,
            Size::Medium => 1.0,
            Size::Large => 1.3,
        }
    }
}

impl Dough {
    /// Flat extra cost for non-default doughs, in whole currency units.
    pub fn surcharge(self) -> f64 {
        match self {
            Dough::Traditional => 0.0,
            Dough::WholeGrain => 3.0,
            Dough::GlutenFree => 5.0,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        };
        write!(fmt, "{}", name)
    }
}

impl fmt::Display for Dough {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Dough::Traditional => "traditional",
            Dough::WholeGrain => "whole-grain",
            Dough::GlutenFree => "gluten-free",
        };
        write!(fmt, "{}", name)
    }
}

impl FromStr for Size {
    type Err = anyhow::Error;
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            other => bail!("unknown size: {:?}", other),
        }
    }
}

impl FromStr for Dough {
    type Err = anyhow::Error;
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src {
            "traditional" => Ok(Dough::Traditional),
            "whole-grain" => Ok(Dough::WholeGrain),
            "gluten-free" => Ok(Dough::GlutenFree),
            other => bail!("unknown dough: {:?}", other),
        }
    }
}

/// One cart entry; a distinct (pizza, size, dough) combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub pizza: Pizza,
    pub quantity: u32,
    pub size: Size,
    pub dough: Dough,
}

impl CartLine {
    pub(super) fn new(pizza: Pizza, size: Size, dough: Dough) -> Self {
        CartLine {
            pizza,
            quantity: 1,
            size,
            dough,
        }
    }

    pub(super) fn matches(&self, id: &Id<Pizza>, size: Size, dough: Dough) -> bool {
        &self.pizza.id == id && self.size == size && self.dough == dough
    }

    pub fn unit_price(&self) -> f64 {
        unit_price(&self.pizza, self.size, self.dough)
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }
}

/// Effective price of a single pizza in the given configuration. No
/// rounding; display formatting happens at the presentation edge.
pub fn unit_price(pizza: &Pizza, size: Size, dough: Dough) -> f64 {
    pizza.price * size.multiplier() + dough.surcharge()
}
