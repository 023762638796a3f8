use log::debug;

use crate::{
    color::Color,
    draw::Drawing,
    shape::{AxisMovable, Point, Shape},
};

/// A polygon defined by an ordered sequence of owned points.
///
/// Points may carry different colors; only [`Shape::set_color`] brings them
/// back in sync. An empty polygon is valid and reports [`Color::none`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the points in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Shape for Polygon {
    /// Returns the first point's color, or [`Color::none`] if there are no points.
    fn color(&self) -> Color {
        self.points
            .first()
            .map_or_else(Color::none, |point| point.color())
    }

    fn set_color(&mut self, color: Color) {
        debug!(color:% = color, points = self.len(); "Recoloring polygon");
        for point in &mut self.points {
            point.set_color(color.clone());
        }
    }

    fn draw(&self) -> Drawing {
        let mut drawing = Drawing::single("Drawing polygon with points:");
        for point in &self.points {
            drawing.push_line(format!("{point} with color {}", point.color()));
        }
        drawing
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        debug!(dx, dy, points = self.len(); "Moving polygon");
        for point in &mut self.points {
            point.move_by(dx, dy);
        }
    }

    fn as_axis_movable_mut(&mut self) -> Option<&mut dyn AxisMovable> {
        Some(self)
    }
}

impl AxisMovable for Polygon {
    fn move_along_x(&mut self, dx: i32) {
        self.move_by(dx, 0);
    }

    fn move_along_y(&mut self, dy: i32) {
        self.move_by(0, dy);
    }
}
