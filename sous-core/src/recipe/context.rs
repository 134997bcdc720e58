//! Shared recipe context
//!
//! Holds the document and the selected dish. The navigation controller is
//! the only writer and only writes while executing a transition; screens
//! built afterwards read it.

use heapless::String;

use crate::error::ProtocolError;

use super::book::{Recipe, RecipeBook, NAME_LEN};

/// Selected dish plus the document it comes from
#[derive(Debug, Clone)]
pub struct RecipeContext<'a> {
    book: &'a RecipeBook,
    dish: Option<String<NAME_LEN>>,
}

impl<'a> RecipeContext<'a> {
    pub fn new(book: &'a RecipeBook) -> Self {
        Self { book, dish: None }
    }

    pub fn book(&self) -> &'a RecipeBook {
        self.book
    }

    pub fn dish(&self) -> Option<&str> {
        self.dish.as_deref()
    }

    /// Bind the context to the recipe named `name`
    pub fn select_dish(&mut self, name: &str) -> Result<(), ProtocolError> {
        let recipe = self.book.find(name).ok_or(ProtocolError::RecipeNotFound)?;
        self.dish = Some(recipe.name.clone());
        Ok(())
    }

    /// Restore a previous selection (used to roll back an aborted transition)
    pub fn restore_dish(&mut self, dish: Option<String<NAME_LEN>>) {
        self.dish = dish;
    }

    /// Take a copy of the current selection
    pub fn snapshot(&self) -> Option<String<NAME_LEN>> {
        self.dish.clone()
    }

    /// Recipe for the selected dish
    pub fn recipe(&self) -> Result<&'a Recipe, ProtocolError> {
        let dish = self.dish.as_deref().ok_or(ProtocolError::NoDishSelected)?;
        self.book.find(dish).ok_or(ProtocolError::RecipeNotFound)
    }
}
