#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;

use std::time::Duration;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::AsRefStr;
use strum::EnumString;
use strum::EnumVariantNames;

pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumString,
    EnumVariantNames,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_system(prefers_dark: bool) -> Theme {
        if prefers_dark {
            return Theme::Dark;
        }

        return Theme::Light;
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => return Theme::Dark,
            Theme::Dark => return Theme::Light,
        }
    }
}

/// Content of the floating theme toggle. The button always offers the
/// opposite theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleButton {
    pub icon: &'static str,
    pub label: &'static str,
}

impl ToggleButton {
    pub const CLASS: &'static str = "theme-toggle";

    pub fn for_theme(theme: Theme) -> ToggleButton {
        match theme {
            Theme::Dark => {
                return ToggleButton {
                    icon: "☀️",
                    label: "Mode clair",
                }
            }
            Theme::Light => {
                return ToggleButton {
                    icon: "🌙",
                    label: "Mode sombre",
                }
            }
        }
    }
}

/// Inline transition set on the page body while colors swap. The renderer
/// clears it once `duration` has passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyTransition {
    pub css: &'static str,
    pub duration: Duration,
}

impl Default for BodyTransition {
    fn default() -> BodyTransition {
        return BodyTransition {
            css: "background-color 0.3s ease, color 0.3s ease",
            duration: Duration::from_millis(300),
        };
    }
}

/// Everything a renderer has to apply after a theme transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub theme: Theme,
    pub button: ToggleButton,
    pub transition: Option<BodyTransition>,
}

impl ThemeChange {
    pub fn new(theme: Theme, animated: bool) -> ThemeChange {
        let mut transition = None;
        if animated {
            transition = Some(BodyTransition::default());
        }

        return ThemeChange {
            theme,
            button: ToggleButton::for_theme(theme),
            transition,
        };
    }

    pub fn root_attribute(&self) -> (&'static str, &str) {
        return (THEME_ATTRIBUTE, self.theme.as_ref());
    }
}
