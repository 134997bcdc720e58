//! Screen identities and the per-screen descriptor table

use super::events::LogicalButton;

/// One distinct navigable page of the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenId {
    /// Main menu: Recipes, Scale, Timer
    Home,
    /// One button per recipe in the document
    RecipeList,
    /// Chosen dish: Ingredients or Steps
    RecipeInfo,
    /// Scrollable item/quantity pairs
    Ingredients,
    /// Scrollable numbered steps
    Instructions,
    /// Live weight reading
    Scale,
    /// Countdown timer
    Timer,
}

/// Widget layout family of a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenKind {
    /// Centered column of fixed-size buttons
    Menu,
    /// Buttons stacked from the top at a fixed pitch
    List,
    /// Column of labels inside a vertically scrollable container
    Scroll,
    /// Setpoint, countdown and start/stop button
    Timer,
    /// Title, value and unit labels
    Scale,
}

/// Set of logical buttons a screen's poller watches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMask(u8);

impl ButtonMask {
    pub const ALL: ButtonMask = ButtonMask(0x0F);
    pub const NONE: ButtonMask = ButtonMask(0);

    /// Mask containing exactly `buttons`
    pub const fn of(buttons: &[LogicalButton]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < buttons.len() {
            bits |= buttons[i].bit();
            i += 1;
        }
        ButtonMask(bits)
    }

    pub const fn contains(self, button: LogicalButton) -> bool {
        self.0 & button.bit() != 0
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Menu button label and the screen it opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub target: ScreenId,
}

/// Home screen menu, in display order
pub const HOME_MENU: [MenuEntry; 3] = [
    MenuEntry {
        label: "Recipes",
        target: ScreenId::RecipeList,
    },
    MenuEntry {
        label: "Scale",
        target: ScreenId::Scale,
    },
    MenuEntry {
        label: "Timer",
        target: ScreenId::Timer,
    },
];

/// Recipe info menu, in display order
pub const INFO_MENU: [MenuEntry; 2] = [
    MenuEntry {
        label: "Ingredients",
        target: ScreenId::Ingredients,
    },
    MenuEntry {
        label: "Steps",
        target: ScreenId::Instructions,
    },
];

/// Static description of a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenDescriptor {
    pub id: ScreenId,
    pub kind: ScreenKind,
    /// Destination of Back, if any
    pub parent: Option<ScreenId>,
    /// Buttons the screen's poller samples
    pub buttons: ButtonMask,
}

const NAV_AND_BACK: ButtonMask = ButtonMask::of(&[
    LogicalButton::Next,
    LogicalButton::Prev,
    LogicalButton::Back,
]);

const NAV_AND_SELECT: ButtonMask = ButtonMask::of(&[
    LogicalButton::Next,
    LogicalButton::Prev,
    LogicalButton::Select,
]);

/// Descriptor table, indexed by [`ScreenId::index`]
pub static SCREENS: [ScreenDescriptor; 7] = [
    ScreenDescriptor {
        id: ScreenId::Home,
        kind: ScreenKind::Menu,
        parent: None,
        buttons: NAV_AND_SELECT,
    },
    ScreenDescriptor {
        id: ScreenId::RecipeList,
        kind: ScreenKind::List,
        parent: Some(ScreenId::Home),
        buttons: ButtonMask::ALL,
    },
    ScreenDescriptor {
        id: ScreenId::RecipeInfo,
        kind: ScreenKind::Menu,
        parent: Some(ScreenId::RecipeList),
        buttons: ButtonMask::ALL,
    },
    ScreenDescriptor {
        id: ScreenId::Ingredients,
        kind: ScreenKind::Scroll,
        parent: Some(ScreenId::RecipeInfo),
        buttons: NAV_AND_BACK,
    },
    ScreenDescriptor {
        id: ScreenId::Instructions,
        kind: ScreenKind::Scroll,
        parent: Some(ScreenId::RecipeInfo),
        buttons: NAV_AND_BACK,
    },
    ScreenDescriptor {
        id: ScreenId::Scale,
        kind: ScreenKind::Scale,
        parent: Some(ScreenId::Home),
        buttons: ButtonMask::of(&[LogicalButton::Back]),
    },
    ScreenDescriptor {
        id: ScreenId::Timer,
        kind: ScreenKind::Timer,
        parent: Some(ScreenId::Home),
        buttons: ButtonMask::ALL,
    },
];

impl ScreenId {
    /// Position in [`SCREENS`]
    pub const fn index(self) -> usize {
        match self {
            ScreenId::Home => 0,
            ScreenId::RecipeList => 1,
            ScreenId::RecipeInfo => 2,
            ScreenId::Ingredients => 3,
            ScreenId::Instructions => 4,
            ScreenId::Scale => 5,
            ScreenId::Timer => 6,
        }
    }

    pub fn descriptor(self) -> &'static ScreenDescriptor {
        &SCREENS[self.index()]
    }

    pub fn kind(self) -> ScreenKind {
        self.descriptor().kind
    }

    pub fn parent(self) -> Option<ScreenId> {
        self.descriptor().parent
    }

    /// Fixed menu entries for menu screens
    pub fn menu(self) -> Option<&'static [MenuEntry]> {
        match self {
            ScreenId::Home => Some(&HOME_MENU),
            ScreenId::RecipeInfo => Some(&INFO_MENU),
            _ => None,
        }
    }

    /// Check if Up/Down move a highlight on this screen
    pub fn is_selectable(self) -> bool {
        matches!(self.kind(), ScreenKind::Menu | ScreenKind::List)
    }
}
