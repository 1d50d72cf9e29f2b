use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::categories::categories_constants::*;

/// The fixed set of spending categories.
///
/// Both transactions and budgets reference this enumeration; it is the only
/// category vocabulary the system accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Bills,
    Shopping,
    Others,
}

impl Category {
    /// All categories in their fixed, canonical order.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Bills,
        Category::Shopping,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => CATEGORY_FOOD,
            Category::Transportation => CATEGORY_TRANSPORTATION,
            Category::Entertainment => CATEGORY_ENTERTAINMENT,
            Category::Bills => CATEGORY_BILLS,
            Category::Shopping => CATEGORY_SHOPPING,
            Category::Others => CATEGORY_OTHERS,
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            s if s == CATEGORY_FOOD => Ok(Category::Food),
            s if s == CATEGORY_TRANSPORTATION => Ok(Category::Transportation),
            s if s == CATEGORY_ENTERTAINMENT => Ok(Category::Entertainment),
            s if s == CATEGORY_BILLS => Ok(Category::Bills),
            s if s == CATEGORY_SHOPPING => Ok(Category::Shopping),
            s if s == CATEGORY_OTHERS => Ok(Category::Others),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
