//! Shape definitions and the traits they share.
//!
//! This module provides the [`Shape`] trait implemented by every figure
//! ([`Point`], [`ColoredPoint`], [`Line`], [`ColoredLine`], [`Polygon`]) and
//! the [`AxisMovable`] capability that only some shapes offer.
//!
//! # Example
//!
//! ```
//! use figures_core::shape::{Line, Point, Shape};
//!
//! let mut line = Line::new(Point::new(0, 0), Point::new(5, 5));
//! line.move_by(1, 1);
//! assert_eq!(
//!     line.draw().to_string(),
//!     "Drawing line from (1, 1) to (6, 6) with color black\n"
//! );
//! ```

use std::fmt;

use crate::{color::Color, draw::Drawing};

mod line;
mod point;
mod polygon;

pub use line::{ColoredLine, Line};
pub use point::{ColoredPoint, Point};
pub use polygon::Polygon;

/// The capability set shared by every drawable, movable figure.
pub trait Shape: fmt::Debug {
    /// Returns the color this shape reports.
    ///
    /// Some shapes store it, others derive it from the points they own.
    fn color(&self) -> Color;

    /// Sets the color of this shape.
    fn set_color(&mut self, color: Color);

    /// Describes the shape in its current state.
    fn draw(&self) -> Drawing;

    /// Translates the shape by `dx` along x and `dy` along y.
    fn move_by(&mut self, dx: i32, dy: i32);

    /// Returns this shape as an [`AxisMovable`] if it supports single-axis moves.
    /// Default implementation returns `None`.
    fn as_axis_movable_mut(&mut self) -> Option<&mut dyn AxisMovable> {
        None
    }
}

/// Shapes that can be translated along a single axis.
pub trait AxisMovable {
    /// Translates along the x axis only.
    fn move_along_x(&mut self, dx: i32);

    /// Translates along the y axis only.
    fn move_along_y(&mut self, dy: i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<Box<dyn Shape>> {
        let mut shapes: Vec<Box<dyn Shape>> = Vec::new();
        shapes.push(Box::new(Point::new(1, 2)));
        shapes.push(Box::new(ColoredPoint::new(3, 4, "red")));
        shapes.push(Box::new(Line::new(Point::new(0, 0), Point::new(5, 5))));
        shapes.push(Box::new(ColoredLine::new(
            Point::new(0, 0),
            Point::new(1, 0),
            "green",
        )));
        shapes.push(Box::new(Polygon::new(vec![Point::new(1, 1)])));
        shapes
    }

    #[test]
    fn test_only_polygon_is_axis_movable() {
        let mut shapes = all_variants();
        let axis_movable: Vec<bool> = shapes
            .iter_mut()
            .map(|shape| shape.as_axis_movable_mut().is_some())
            .collect();

        assert_eq!(axis_movable, [false, false, false, false, true]);
    }

    #[test]
    fn test_set_color_through_trait_object() {
        for mut shape in all_variants() {
            shape.set_color(Color::new("purple"));
            assert_eq!(shape.color(), Color::new("purple"), "{shape:?}");
        }
    }

    #[test]
    fn test_every_shape_draws_something() {
        for shape in all_variants() {
            assert!(!shape.draw().is_empty(), "{shape:?}");
        }
    }
}
