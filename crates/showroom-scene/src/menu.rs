//! Menu navigation.

use std::fmt;

/// Screens reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Menu {
    #[default]
    Main,
    Garage,
    Customize,
    Settings,
    /// Not a screen: asks for confirmation and quits.
    Exit,
}

impl Menu {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Garage => "garage",
            Self::Customize => "customize",
            Self::Settings => "settings",
            Self::Exit => "exit",
        }
    }

    /// Element id of the panel shown for this menu.
    pub fn panel_id(&self) -> String {
        format!("{}-menu", self.as_str())
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys the showroom reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
}

/// Result of a menu switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTransition {
    Shown(Menu),
    /// Already on that menu.
    Unchanged,
    ExitRequested,
}

/// Which menu panel is visible.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    current: Menu,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `menu`. `Exit` leaves the current panel up and reports the
    /// request; quitting is up to the caller's confirmation hook.
    pub fn switch_menu(&mut self, menu: Menu) -> MenuTransition {
        if menu == Menu::Exit {
            return MenuTransition::ExitRequested;
        }
        if menu == self.current {
            return MenuTransition::Unchanged;
        }
        log::info!("menu: {} -> {}", self.current, menu);
        self.current = menu;
        MenuTransition::Shown(menu)
    }

    /// Escape goes back to the main menu from anywhere.
    pub fn handle_key(&mut self, key: Key) -> MenuTransition {
        match key {
            Key::Escape => self.switch_menu(Menu::Main),
            _ => MenuTransition::Unchanged,
        }
    }

    pub fn current(&self) -> Menu {
        self.current
    }

    pub fn main_visible(&self) -> bool {
        self.current == Menu::Main
    }

    /// Panel shown on top of the main menu, if any.
    pub fn active_panel(&self) -> Option<String> {
        (!self.main_visible()).then(|| self.current.panel_id())
    }
}
