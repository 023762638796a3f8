use log::debug;

use crate::{
    color::Color,
    draw::Drawing,
    shape::{Point, Shape},
};

/// A line segment between two owned points.
///
/// The color of a line is derived from its endpoints: reading returns the
/// start point's color and writing recolors both endpoints, so both always
/// agree after [`Shape::set_color`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns the start point
    pub fn start(&self) -> &Point {
        &self.start
    }

    /// Returns the end point
    pub fn end(&self) -> &Point {
        &self.end
    }

    /// Formats the line with the given label and color.
    fn describe(&self, label: &str, color: &Color) -> String {
        format!(
            "Drawing {label} from {} to {} with color {color}",
            self.start, self.end
        )
    }
}

impl Shape for Line {
    fn color(&self) -> Color {
        self.start.color()
    }

    fn set_color(&mut self, color: Color) {
        self.start.set_color(color.clone());
        self.end.set_color(color);
    }

    fn draw(&self) -> Drawing {
        Drawing::single(self.describe("line", &self.color()))
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        debug!(dx, dy; "Moving line");
        self.start.move_by(dx, dy);
        self.end.move_by(dx, dy);
    }
}

/// A line that carries its own color.
///
/// Unlike [`Line`], the color is stored independently: setting it leaves
/// the endpoint colors untouched and only changes what [`Shape::draw`]
/// reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredLine {
    line: Line,
    color: Color,
}

impl ColoredLine {
    pub fn new(start: Point, end: Point, color: impl Into<Color>) -> Self {
        Self {
            line: Line::new(start, end),
            color: color.into(),
        }
    }

    /// Returns the start point
    pub fn start(&self) -> &Point {
        self.line.start()
    }

    /// Returns the end point
    pub fn end(&self) -> &Point {
        self.line.end()
    }
}

impl Shape for ColoredLine {
    fn color(&self) -> Color {
        self.color.clone()
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw(&self) -> Drawing {
        Drawing::single(self.line.describe("colored line", &self.color))
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.line.move_by(dx, dy);
    }
}

#[cfg(test)]
fn length(start: &Point, end: &Point) -> f64 {
    let dx = f64::from(end.x()) - f64::from(start.x());
    let dy = f64::from(end.y()) - f64::from(start.y());
    dx.hypot(dy)
}
