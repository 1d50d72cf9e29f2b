//! Categories module - the fixed spending category enumeration.

mod categories_constants;
mod categories_model;


pub use categories_constants::*;
pub use categories_model::Category;
