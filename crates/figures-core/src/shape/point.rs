use std::fmt;

use log::trace;

use crate::{color::Color, draw::Drawing, shape::Shape};

/// A point on the integer plane with a color.
///
/// Points built with [`Point::new`] are black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    x: i32,
    y: i32,
    color: Color,
}

impl Point {
    /// Creates a new black point at the specified coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self::with_color(x, y, Color::default())
    }

    /// Creates a new point with an explicit color
    pub fn with_color(x: i32, y: i32, color: impl Into<Color>) -> Self {
        Self {
            x,
            y,
            color: color.into(),
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(&self) -> i32 {
        self.y
    }
}

/// Formats the coordinates as `(x, y)`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Shape for Point {
    fn color(&self) -> Color {
        self.color.clone()
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw(&self) -> Drawing {
        Drawing::single(format!("Drawing point at {self} with color {}", self.color))
    }

    /// Coordinates wrap around on overflow.
    fn move_by(&mut self, dx: i32, dy: i32) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
        trace!(x = self.x, y = self.y; "Moved point");
    }
}

/// A point whose color is always given explicitly.
///
/// Behaves like [`Point`] except that it draws itself as a colored point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredPoint {
    point: Point,
}

impl ColoredPoint {
    pub fn new(x: i32, y: i32, color: impl Into<Color>) -> Self {
        Self {
            point: Point::with_color(x, y, color),
        }
    }

    pub fn x(&self) -> i32 {
        self.point.x()
    }

    pub fn y(&self) -> i32 {
        self.point.y()
    }
}

impl Shape for ColoredPoint {
    fn color(&self) -> Color {
        self.point.color()
    }

    fn set_color(&mut self, color: Color) {
        self.point.set_color(color);
    }

    fn draw(&self) -> Drawing {
        Drawing::single(format!(
            "Drawing colored point at {} with color {}",
            self.point,
            self.point.color
        ))
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.point.move_by(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_defaults_to_black() {
        let point = Point::new(1, 2);
        assert_eq!(point.color(), Color::new("black"));
    }

    #[test]
    fn test_point_draw_then_move() {
        let mut point = Point::new(1, 2);
        assert_eq!(
            point.draw().lines(),
            ["Drawing point at (1, 2) with color black"]
        );

        point.move_by(1, 1);
        assert_eq!(
            point.draw().lines(),
            ["Drawing point at (2, 3) with color black"]
        );
    }

    #[test]
    fn test_point_with_color() {
        let point = Point::with_color(0, -4, "teal");
        assert_eq!(
            point.draw().lines(),
            ["Drawing point at (0, -4) with color teal"]
        );
    }

    #[test]
    fn test_colored_point_draw() {
        let point = ColoredPoint::new(3, 4, "red");
        assert_eq!(
            point.draw().lines(),
            ["Drawing colored point at (3, 4) with color red"]
        );
    }

    #[test]
    fn test_colored_point_move_keeps_color() {
        let mut point = ColoredPoint::new(3, 4, "red");
        point.move_by(1, 1);

        assert_eq!((point.x(), point.y()), (4, 5));
        assert_eq!(point.color(), Color::new("red"));
    }

    #[test]
    fn test_point_move_wraps_on_overflow() {
        let mut point = Point::new(i32::MAX, i32::MIN);
        point.move_by(1, -1);

        assert_eq!(point.x(), i32::MIN);
        assert_eq!(point.y(), i32::MAX);

        point.move_by(i32::MAX, 0);
        assert_eq!(point.x(), -1);
    }

    #[test]
    fn test_point_set_color() {
        let mut point = Point::new(0, 0);
        point.set_color(Color::new("white"));
        assert_eq!(point.color(), Color::new("white"));
    }
}
