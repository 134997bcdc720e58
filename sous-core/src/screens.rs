//! Screen content preparation and construction
//!
//! Building a screen is split in two. [`prepare`] reads the recipe context
//! and fails with a [`ProtocolError`] if the data the screen needs is
//! missing; nothing has been torn down at that point, so the caller can
//! keep the current screen. [`build`] then creates the widgets and can
//! only fail on resource exhaustion.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::config::UiConfig;
use crate::error::{ProtocolError, ResourceError};
use crate::nav::{NavigationState, ScrollState};
use crate::recipe::{Ingredient, Recipe, RecipeContext, MAX_RECIPES, STEP_LEN};
use crate::scale::UNIT;
use crate::state::{MenuEntry, ScreenId};
use crate::traits::{ScreenHandle, Tone, WidgetEngine, WidgetId};

/// Most selectable items on any screen
pub const MAX_ITEMS: usize = MAX_RECIPES;

/// Longest numbered instruction line
pub const LINE_LEN: usize = STEP_LEN + 8;

/// Content a screen will show, borrowed from the recipe document
#[derive(Debug, Clone, Copy)]
pub enum ScreenPlan<'a> {
    Menu {
        title: Option<&'a str>,
        entries: &'static [MenuEntry],
    },
    RecipeList {
        recipes: &'a [Recipe],
    },
    Ingredients {
        title: &'a str,
        ingredients: &'a [Ingredient],
    },
    Instructions {
        title: &'a str,
        steps: &'a [String<STEP_LEN>],
    },
    Timer,
    Scale,
}

/// Widgets of the timer screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerWidgets {
    pub setpoint: WidgetId,
    pub countdown: WidgetId,
    pub button: WidgetId,
}

/// A constructed screen and its screen-local state
#[derive(Debug, Clone)]
pub struct BuiltScreen {
    pub id: ScreenId,
    pub handle: ScreenHandle,
    /// Selectable buttons, in highlight order
    pub items: Vec<WidgetId, MAX_ITEMS>,
    pub nav: Option<NavigationState>,
    pub scroll: Option<ScrollState>,
    pub timer: Option<TimerWidgets>,
    /// Weight reading label
    pub reading: Option<WidgetId>,
}

/// Resolve what `screen` will show from the current context
pub fn prepare<'a>(screen: ScreenId, ctx: &RecipeContext<'a>) -> Result<ScreenPlan<'a>, ProtocolError> {
    match screen {
        ScreenId::Home => Ok(ScreenPlan::Menu {
            title: None,
            entries: ScreenId::Home.menu().unwrap_or(&[]),
        }),
        ScreenId::RecipeList => {
            let recipes = ctx.book().recipes.as_deref().ok_or(ProtocolError::NoRecipes)?;
            if recipes.is_empty() {
                return Err(ProtocolError::NoRecipes);
            }
            Ok(ScreenPlan::RecipeList { recipes })
        }
        ScreenId::RecipeInfo => {
            let recipe = ctx.recipe()?;
            Ok(ScreenPlan::Menu {
                title: Some(recipe.name.as_str()),
                entries: ScreenId::RecipeInfo.menu().unwrap_or(&[]),
            })
        }
        ScreenId::Ingredients => {
            let recipe = ctx.recipe()?;
            let ingredients = recipe
                .ingredients
                .as_deref()
                .ok_or(ProtocolError::MissingIngredients)?;
            Ok(ScreenPlan::Ingredients {
                title: recipe.name.as_str(),
                ingredients,
            })
        }
        ScreenId::Instructions => {
            let recipe = ctx.recipe()?;
            let steps = recipe
                .instructions
                .as_deref()
                .ok_or(ProtocolError::MissingInstructions)?;
            Ok(ScreenPlan::Instructions {
                title: recipe.name.as_str(),
                steps,
            })
        }
        ScreenId::Timer => Ok(ScreenPlan::Timer),
        ScreenId::Scale => Ok(ScreenPlan::Scale),
    }
}

/// Create the widget tree for a prepared screen
///
/// On failure the partially built screen is destroyed again.
pub fn build<W: WidgetEngine>(
    id: ScreenId,
    plan: &ScreenPlan<'_>,
    engine: &mut W,
    ui: &UiConfig,
) -> Result<BuiltScreen, ResourceError> {
    let handle = engine.create_screen(id.kind())?;
    let mut screen = BuiltScreen {
        id,
        handle,
        items: Vec::new(),
        nav: None,
        scroll: None,
        timer: None,
        reading: None,
    };

    match populate(&mut screen, plan, engine, ui) {
        Ok(()) => Ok(screen),
        Err(e) => {
            let _ = engine.destroy_screen(handle);
            Err(e)
        }
    }
}

fn populate<W: WidgetEngine>(
    screen: &mut BuiltScreen,
    plan: &ScreenPlan<'_>,
    engine: &mut W,
    ui: &UiConfig,
) -> Result<(), ResourceError> {
    let handle = screen.handle;

    match *plan {
        ScreenPlan::Menu { title, entries } => {
            if let Some(title) = title {
                engine.create_label(handle, title)?;
            }
            for entry in entries {
                let button = engine.create_button(handle, entry.label)?;
                push_item(screen, button)?;
            }
            select_first(screen, engine);
        }
        ScreenPlan::RecipeList { recipes } => {
            for recipe in recipes {
                let button = engine.create_button(handle, recipe.name.as_str())?;
                push_item(screen, button)?;
            }
            select_first(screen, engine);
        }
        ScreenPlan::Ingredients { title, ingredients } => {
            engine.create_label(handle, title)?;
            for ingredient in ingredients {
                engine.create_label(handle, ingredient.item.as_str())?;
                engine.create_label(handle, ingredient.quantity.as_str())?;
            }
            screen.scroll = Some(ScrollState::new(engine.max_scroll(handle), ui.scroll_step));
        }
        ScreenPlan::Instructions { title, steps } => {
            engine.create_label(handle, title)?;
            for (i, step) in steps.iter().enumerate() {
                let mut line: String<LINE_LEN> = String::new();
                write!(line, "{}. {}", i + 1, step).map_err(|_| ResourceError::WidgetsExhausted)?;
                engine.create_label(handle, &line)?;
            }
            screen.scroll = Some(ScrollState::new(engine.max_scroll(handle), ui.scroll_step));
        }
        ScreenPlan::Timer => {
            let setpoint = engine.create_label(handle, "00:00")?;
            let countdown = engine.create_label(handle, "00:00")?;
            let button = engine.create_button(handle, "Start")?;
            engine.set_tone(button, Tone::Go);
            screen.timer = Some(TimerWidgets {
                setpoint,
                countdown,
                button,
            });
        }
        ScreenPlan::Scale => {
            engine.create_label(handle, "Weight")?;
            screen.reading = Some(engine.create_label(handle, "0.0")?);
            engine.create_label(handle, UNIT)?;
        }
    }

    Ok(())
}

fn push_item(screen: &mut BuiltScreen, widget: WidgetId) -> Result<(), ResourceError> {
    screen
        .items
        .push(widget)
        .map_err(|_| ResourceError::WidgetsExhausted)
}

/// First item red, the rest white
fn select_first<W: WidgetEngine>(screen: &mut BuiltScreen, engine: &mut W) {
    for (i, &item) in screen.items.iter().enumerate() {
        engine.set_tone(item, if i == 0 { Tone::Highlight } else { Tone::Plain });
    }
    screen.nav = Some(NavigationState::new(screen.items.len()));
}
