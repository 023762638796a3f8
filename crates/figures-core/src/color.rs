//! Color handling for Figures shapes
//!
//! This module provides the [`Color`] type, a named color carried by every
//! shape. Colors are opaque names: they are displayed as given and never
//! parsed or validated.

use std::fmt;

/// The name reported by [`Color::none`].
const NO_COLOR: &str = "no color";

/// The name used by [`Color::default`].
const DEFAULT_COLOR: &str = "black";

/// A named color such as `"black"` or `"red"`.
///
/// [`Color::none`] is a sentinel returned by shapes that have no point to
/// take a color from, such as an empty polygon.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    name: String,
}

impl Color {
    /// Create a new `Color` from its name.
    ///
    /// # Examples
    ///
    /// ```
    /// use figures_core::color::Color;
    ///
    /// let red = Color::new("red");
    /// assert_eq!(red.as_str(), "red");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the "no color" sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use figures_core::color::Color;
    ///
    /// let none = Color::none();
    /// assert!(none.is_none());
    /// assert_eq!(none.to_string(), "no color");
    /// ```
    pub fn none() -> Self {
        Self::new(NO_COLOR)
    }

    /// Returns true if this is the [`Color::none`] sentinel.
    pub fn is_none(&self) -> bool {
        self.name == NO_COLOR
    }

    /// Returns the color name.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
        assert!(!color.is_none());
    }

    #[test]
    fn test_color_none() {
        let color = Color::none();
        assert!(color.is_none());
        assert_eq!(color.as_str(), "no color");
    }

    #[test]
    fn test_color_display_keeps_name() {
        let color = Color::new("dark olive");
        assert_eq!(format!("{color}"), "dark olive");
    }

    #[test]
    fn test_color_from() {
        assert_eq!(Color::from("red"), Color::new("red"));
        assert_eq!(Color::from(String::from("red")), Color::new("red"));
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("red");
        let color2 = Color::new("red");
        let color3 = Color::new("blue");

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
