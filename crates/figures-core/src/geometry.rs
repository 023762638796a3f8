//! Integer translation offsets.

use serde::Deserialize;

/// A translation by `dx` along the x axis and `dy` along the y axis.
///
/// Deserializes from a table such as `{ dx = 1, dy = 1 }`; a missing field
/// is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Offset {
    #[serde(default)]
    dx: i32,
    #[serde(default)]
    dy: i32,
}

impl Offset {
    /// Creates a new offset with the specified deltas
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Creates an offset that only moves along the x axis
    pub const fn along_x(dx: i32) -> Self {
        Self { dx, dy: 0 }
    }

    /// Creates an offset that only moves along the y axis
    pub const fn along_y(dy: i32) -> Self {
        Self { dx: 0, dy }
    }

    /// Returns the x delta
    pub fn dx(self) -> i32 {
        self.dx
    }

    /// Returns the y delta
    pub fn dy(self) -> i32 {
        self.dy
    }

    /// Checks if both deltas are zero
    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_axis_constructors() {
        assert_eq!(Offset::along_x(2), Offset::new(2, 0));
        assert_eq!(Offset::along_y(3), Offset::new(0, 3));
        assert!(Offset::default().is_zero());
        assert!(!Offset::along_x(-1).is_zero());
    }

    #[test]
    fn test_offset_deserialize() {
        let offset: Offset = toml::from_str("dx = 4\ndy = -2").unwrap();
        assert_eq!(offset, Offset::new(4, -2));

        let partial: Offset = toml::from_str("dy = 7").unwrap();
        assert_eq!(partial, Offset::along_y(7));
    }
}
