#[cfg(test)]
#[path = "effects_test.rs"]
mod tests;

use std::collections::HashSet;

pub const REVEAL_CLASS: &str = "fade-in";
pub const REVEAL_SELECTORS: [&str; 3] = [".card", ".product-card", ".form-group"];
pub const PRIMARY_COLOR: &str = "var(--primary-color)";
pub const INVALID_COLOR: &str = "#dc3545";

/// One-shot scroll reveal. Observed elements get the reveal class the first
/// time at least `threshold` of them is inside the viewport shrunk by
/// `bottom_margin` pixels.
pub struct RevealTracker {
    threshold: f64,
    bottom_margin: f64,
    observed: HashSet<String>,
    revealed: HashSet<String>,
}

impl Default for RevealTracker {
    fn default() -> RevealTracker {
        return RevealTracker::new(0.1, 50.0);
    }
}

impl RevealTracker {
    pub fn new(threshold: f64, bottom_margin: f64) -> RevealTracker {
        return RevealTracker {
            threshold,
            bottom_margin,
            observed: HashSet::new(),
            revealed: HashSet::new(),
        };
    }

    pub fn observe(&mut self, id: &str) {
        self.observed.insert(id.to_string());
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        return self.revealed.contains(id);
    }

    /// Share of an element, positioned `top` pixels below the viewport's top
    /// edge, that sits inside the margin-adjusted viewport.
    pub fn intersection_ratio(&self, top: f64, height: f64, viewport_height: f64) -> f64 {
        if height <= 0.0 {
            return 0.0;
        }

        let root_bottom = (viewport_height - self.bottom_margin).max(0.0);
        let visible = (top + height).min(root_bottom) - top.max(0.0);

        return (visible / height).clamp(0.0, 1.0);
    }

    /// Returns the class to add when this intersection reveals the element.
    pub fn on_intersection(&mut self, id: &str, ratio: f64) -> Option<&'static str> {
        if !self.observed.contains(id) || ratio <= 0.0 || ratio < self.threshold {
            return None;
        }

        return self.reveal(id);
    }

    /// Images fade in once loaded, whether or not they are observed.
    pub fn on_image_loaded(&mut self, id: &str) -> Option<&'static str> {
        return self.reveal(id);
    }

    fn reveal(&mut self, id: &str) -> Option<&'static str> {
        if !self.revealed.insert(id.to_string()) {
            return None;
        }

        return Some(REVEAL_CLASS);
    }
}

/// Lift applied to cards while hovered.
pub struct HoverEffect {}

impl HoverEffect {
    pub fn enter() -> &'static str {
        return "translateY(-4px) scale(1.02)";
    }

    pub fn leave() -> &'static str {
        return "translateY(0) scale(1)";
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Password,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelStyle {
    pub transform: &'static str,
    pub color: &'static str,
}

impl LabelStyle {
    pub fn floating() -> LabelStyle {
        return LabelStyle {
            transform: "translateY(-20px) scale(0.9)",
            color: PRIMARY_COLOR,
        };
    }
}

/// Floating label and live validation for one form input.
#[derive(Clone, Debug)]
pub struct FormField {
    input_type: InputType,
    has_label: bool,
    value: String,
    pub label: LabelStyle,
    pub border_color: Option<&'static str>,
}

impl FormField {
    pub fn new(input_type: InputType, has_label: bool) -> FormField {
        return FormField {
            input_type,
            has_label,
            value: "".to_string(),
            label: LabelStyle::default(),
            border_color: None,
        };
    }

    pub fn value(&self) -> &str {
        return &self.value;
    }

    pub fn focus(&mut self) {
        if self.has_label {
            self.label = LabelStyle::floating();
        }
    }

    pub fn blur(&mut self) {
        if self.has_label && self.value.is_empty() {
            self.label = LabelStyle::default();
        }
    }

    pub fn input(&mut self, value: &str) {
        self.value = value.to_string();

        if self.input_type != InputType::Email {
            return;
        }

        if self.is_valid() {
            self.border_color = Some(PRIMARY_COLOR);
        } else {
            self.border_color = Some(INVALID_COLOR);
        }
    }

    pub fn is_valid(&self) -> bool {
        if self.input_type == InputType::Email {
            return is_valid_email(&self.value);
        }

        return true;
    }
}

fn is_valid_local_char(c: char) -> bool {
    return c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c);
}

fn is_valid_domain_label(label: &str) -> bool {
    if label.is_empty() || label.len() > 63 {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }

    return label.chars().all(|c| return c.is_ascii_alphanumeric() || c == '-');
}

/// Validity of an `<input type="email">` value. Empty values are valid, as
/// they are for a non-required input.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || !local.chars().all(is_valid_local_char) {
        return false;
    }

    return domain.split('.').all(is_valid_domain_label);
}
