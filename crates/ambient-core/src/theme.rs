//! Light/dark theme value and the accessor the animator reads every frame.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[inline]
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Supplies the theme in effect right now.
///
/// Implementations must not cache: the animator calls `current` once per
/// frame so a theme toggle shows up on the very next draw.
pub trait ThemeSource {
    fn current(&self) -> Theme;
}

impl ThemeSource for Theme {
    fn current(&self) -> Theme {
        *self
    }
}

/// Theme value shared between the animator and whatever owns the toggle.
#[derive(Clone, Debug, Default)]
pub struct SharedTheme(Rc<Cell<Theme>>);

impl SharedTheme {
    pub fn new(theme: Theme) -> Self {
        Self(Rc::new(Cell::new(theme)))
    }

    pub fn set(&self, theme: Theme) {
        self.0.set(theme);
    }

    pub fn toggle(&self) {
        self.0.set(self.0.get().toggled());
    }
}

impl ThemeSource for SharedTheme {
    fn current(&self) -> Theme {
        self.0.get()
    }
}
