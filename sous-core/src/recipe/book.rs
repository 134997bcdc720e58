//! Fixed-capacity recipe document

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum recipes in a document
pub const MAX_RECIPES: usize = 8;

/// Maximum dish name length
pub const NAME_LEN: usize = 32;

/// Maximum ingredients per recipe
pub const MAX_INGREDIENTS: usize = 16;

/// Maximum ingredient name length
pub const ITEM_LEN: usize = 32;

/// Maximum quantity text length
pub const QUANTITY_LEN: usize = 16;

/// Maximum instruction steps per recipe
pub const MAX_STEPS: usize = 10;

/// Maximum instruction step length
pub const STEP_LEN: usize = 96;

/// Document does not fit the fixed capacities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CapacityError {
    /// Too many recipes
    Recipes,
    /// Too many ingredients in one recipe
    Ingredients,
    /// Too many steps in one recipe
    Steps,
    /// A text field is too long
    Text,
}

/// One ingredient line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ingredient {
    pub item: String<ITEM_LEN>,
    pub quantity: String<QUANTITY_LEN>,
}

/// One recipe
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recipe {
    pub name: String<NAME_LEN>,
    pub ingredients: Option<Vec<Ingredient, MAX_INGREDIENTS>>,
    pub instructions: Option<Vec<String<STEP_LEN>, MAX_STEPS>>,
}

impl Recipe {
    /// Recipe with no ingredient or instruction sequences
    pub fn new(name: &str) -> Result<Self, CapacityError> {
        Ok(Self {
            name: text(name)?,
            ingredients: None,
            instructions: None,
        })
    }

    /// Append an ingredient, creating the sequence if absent
    pub fn push_ingredient(&mut self, item: &str, quantity: &str) -> Result<(), CapacityError> {
        let entry = Ingredient {
            item: text(item)?,
            quantity: text(quantity)?,
        };
        self.ingredients
            .get_or_insert_with(Vec::new)
            .push(entry)
            .map_err(|_| CapacityError::Ingredients)
    }

    /// Append an instruction step, creating the sequence if absent
    pub fn push_step(&mut self, step: &str) -> Result<(), CapacityError> {
        let step = text(step)?;
        self.instructions
            .get_or_insert_with(Vec::new)
            .push(step)
            .map_err(|_| CapacityError::Steps)
    }

    /// Mark the ingredient sequence present even if it stays empty
    pub fn with_ingredient_list(mut self) -> Self {
        self.ingredients.get_or_insert_with(Vec::new);
        self
    }

    /// Mark the instruction sequence present even if it stays empty
    pub fn with_instruction_list(mut self) -> Self {
        self.instructions.get_or_insert_with(Vec::new);
        self
    }
}

/// Parsed recipe document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecipeBook {
    pub recipes: Option<Vec<Recipe, MAX_RECIPES>>,
}

impl RecipeBook {
    /// Document with an empty "recipes" sequence
    pub fn empty() -> Self {
        Self {
            recipes: Some(Vec::new()),
        }
    }

    pub fn push(&mut self, recipe: Recipe) -> Result<(), CapacityError> {
        self.recipes
            .get_or_insert_with(Vec::new)
            .push(recipe)
            .map_err(|_| CapacityError::Recipes)
    }

    /// All recipes in document order
    pub fn recipes(&self) -> &[Recipe] {
        self.recipes.as_deref().unwrap_or(&[])
    }

    /// First recipe whose name matches exactly
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes().iter().find(|r| r.name.as_str() == name)
    }

    pub fn len(&self) -> usize {
        self.recipes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes().is_empty()
    }
}

fn text<const N: usize>(s: &str) -> Result<String<N>, CapacityError> {
    String::try_from(s).map_err(|_| CapacityError::Text)
}
