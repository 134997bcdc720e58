//! Recipe document model and the shared recipe context
//!
//! The document has the shape
//!
//! ```json
//! { "recipes": [ { "name": "...",
//!                  "ingredients": [ { "item": "...", "quantity": "..." } ],
//!                  "instructions": [ "..." ] } ] }
//! ```
//!
//! Sequences that are absent stay `None` so that the screen needing them
//! can report a protocol error instead of showing an empty page.

pub mod book;
pub mod context;

pub use book::{
    CapacityError, Ingredient, Recipe, RecipeBook, ITEM_LEN, MAX_INGREDIENTS, MAX_RECIPES,
    MAX_STEPS, NAME_LEN, QUANTITY_LEN, STEP_LEN,
};
pub use context::RecipeContext;
