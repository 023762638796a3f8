//! The scene driver.
//!
//! A [`Scene`] owns a list of shapes and runs the draw/move/draw sequence
//! over them, collecting everything drawn into one [`Drawing`].

use log::{debug, info};

use crate::{
    config::SceneConfig,
    draw::Drawing,
    shape::{ColoredPoint, Line, Point, Polygon, Shape},
};

/// An ordered collection of shapes.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<Box<dyn Shape>>,
}

impl Scene {
    pub fn new(shapes: Vec<Box<dyn Shape>>) -> Self {
        Self { shapes }
    }

    /// Builds the demo scene: a point, a colored point, a line and a triangle.
    pub fn demo() -> Self {
        let mut scene = Self::default();
        scene.push(Point::new(1, 2));
        scene.push(ColoredPoint::new(3, 4, "red"));
        scene.push(Line::new(Point::new(0, 0), Point::new(5, 5)));
        scene.push(Polygon::new(vec![
            Point::new(1, 1),
            Point::new(2, 2),
            Point::new(3, 1),
        ]));
        scene
    }

    /// Appends a shape to the end of the scene.
    pub fn push(&mut self, shape: impl Shape + 'static) {
        self.shapes.push(Box::new(shape));
    }

    /// Returns the shapes in scene order.
    pub fn shapes(&self) -> &[Box<dyn Shape>] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Drives every shape through the draw/move/draw sequence.
    ///
    /// Each shape is drawn, moved by the configured move offset and drawn
    /// again. Shapes that support axis moves are then moved along x and
    /// along y by the configured axis offset and drawn a third time.
    ///
    /// The shapes keep their final positions, so running twice continues
    /// from where the first run left off.
    pub fn run(&mut self, config: &SceneConfig) -> Drawing {
        let move_offset = config.move_offset();
        let axis_offset = config.axis_offset();
        info!(shapes = self.shapes.len(); "Running scene");

        let mut drawing = Drawing::new();
        for shape in &mut self.shapes {
            drawing.append(shape.draw());
            shape.move_by(move_offset.dx(), move_offset.dy());
            drawing.append(shape.draw());

            if let Some(axis_movable) = shape.as_axis_movable_mut() {
                if !axis_offset.is_zero() {
                    debug!(dx = axis_offset.dx(), dy = axis_offset.dy(); "Applying axis moves");
                }
                axis_movable.move_along_x(axis_offset.dx());
                axis_movable.move_along_y(axis_offset.dy());
                drawing.append(shape.draw());
            }
        }

        debug!(lines = drawing.len(); "Scene finished");
        drawing
    }
}
