#[cfg(test)]
#[path = "themes_test.rs"]
mod tests;

use std::str::FromStr;

use anyhow::Result;

use crate::domain::models::PreferenceStore;
use crate::domain::models::Theme;
use crate::domain::models::ThemeChange;

pub const THEME_STORAGE_KEY: &str = "theme";

/// Owns the light/dark state and its persisted override.
///
/// Every change is written to the store. While nothing is stored the system
/// preference drives the theme; the first change of any kind pins it.
pub struct ThemeManager<S: PreferenceStore> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Resolves the starting theme: the stored override, then the system
    /// preference when known, then light.
    pub fn init(store: S, system_prefers_dark: Option<bool>) -> Result<(ThemeManager<S>, ThemeChange)> {
        let mut manager = ThemeManager {
            store,
            current: Theme::default(),
        };

        if let Some(theme) = manager.stored_preference()? {
            manager.current = theme;
        } else if let Some(prefers_dark) = system_prefers_dark {
            manager.current = Theme::from_system(prefers_dark);
        }

        tracing::debug!(theme = %manager.current, "Theme initialized");
        let change = ThemeChange::new(manager.current, false);
        return Ok((manager, change));
    }

    pub fn current(&self) -> Theme {
        return self.current;
    }

    /// The user's pinned theme. Unknown stored values count as no preference.
    pub fn stored_preference(&self) -> Result<Option<Theme>> {
        let stored = self.store.get(THEME_STORAGE_KEY)?;
        if let Some(val) = stored {
            if let Ok(theme) = Theme::from_str(&val) {
                return Ok(Some(theme));
            }

            tracing::warn!(value = val, "Ignoring unknown stored theme");
        }

        return Ok(None);
    }

    pub fn toggle(&mut self) -> Result<ThemeChange> {
        return self.set(self.current.toggled());
    }

    /// Applies and pins an explicit user choice.
    pub fn set(&mut self, theme: Theme) -> Result<ThemeChange> {
        self.store.set(THEME_STORAGE_KEY, theme.as_ref())?;
        self.current = theme;

        return Ok(ThemeChange::new(theme, true));
    }

    /// Follows an OS light/dark switch and stores it, unless a theme is
    /// already stored.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> Result<Option<ThemeChange>> {
        if self.stored_preference()?.is_some() {
            return Ok(None);
        }

        let theme = Theme::from_system(prefers_dark);
        if theme == self.current {
            return Ok(None);
        }

        self.store.set(THEME_STORAGE_KEY, theme.as_ref())?;
        self.current = theme;
        return Ok(Some(ThemeChange::new(theme, false)));
    }

    /// Drops the pinned theme so the system preference applies again.
    pub fn reset(&mut self, system_prefers_dark: Option<bool>) -> Result<ThemeChange> {
        self.store.remove(THEME_STORAGE_KEY)?;
        self.current = system_prefers_dark
            .map(Theme::from_system)
            .unwrap_or_default();

        return Ok(ThemeChange::new(self.current, true));
    }

    pub fn dispose(self) -> S {
        return self.store;
    }
}
