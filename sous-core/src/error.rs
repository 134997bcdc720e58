//! Error taxonomy
//!
//! Protocol errors come from the recipe document and are recovered by
//! aborting the transition that needed the data. Resource errors are
//! fatal: the firmware logs them and halts the UI.

/// Missing or malformed recipe data for the screen being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// Document has no "recipes" sequence, or it is empty
    NoRecipes,
    /// Selected dish is not in the document
    RecipeNotFound,
    /// A recipe screen was requested before any dish was chosen
    NoDishSelected,
    /// Selected recipe has no "ingredients" sequence
    MissingIngredients,
    /// Selected recipe has no "instructions" sequence
    MissingInstructions,
}

impl ProtocolError {
    /// Short text for the on-screen fault notice
    pub fn notice(self) -> &'static str {
        match self {
            ProtocolError::NoRecipes => "No recipes",
            ProtocolError::RecipeNotFound => "Recipe missing",
            ProtocolError::NoDishSelected => "No dish chosen",
            ProtocolError::MissingIngredients => "No ingredients",
            ProtocolError::MissingInstructions => "No steps",
        }
    }
}

/// Task or memory exhaustion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceError {
    /// A screen is already live in the widget tree
    ScreenBusy,
    /// Handle does not name the live screen
    StaleHandle,
    /// Widget or text storage is full
    WidgetsExhausted,
    /// Poller task could not be spawned
    TaskSpawn,
}

/// Failure while executing a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionError {
    Protocol(ProtocolError),
    Resource(ResourceError),
}

impl From<ProtocolError> for TransitionError {
    fn from(e: ProtocolError) -> Self {
        TransitionError::Protocol(e)
    }
}

impl From<ResourceError> for TransitionError {
    fn from(e: ResourceError) -> Self {
        TransitionError::Resource(e)
    }
}
