//! Testing utilities for shape-box workspace
//!
//! Shared fixtures and float assertions.

#![allow(missing_docs)]

use shape_box::shapes::{handle, Circle, Rectangle, Square, Triangle};
use shape_box::{ShapeBox, ShapeHandle};

/// Tolerance for float comparisons in tests
pub const EPSILON: f64 = 1e-9;

pub fn circle(radius: f64) -> ShapeHandle {
    handle(Circle::new(radius))
}

pub fn square(side: f64) -> ShapeHandle {
    handle(Square::new(side))
}

pub fn rectangle(width: f64, height: f64) -> ShapeHandle {
    handle(Rectangle::new(width, height))
}

pub fn triangle(side: f64) -> ShapeHandle {
    handle(Triangle::new(side))
}

/// Box holding exactly `shapes`, sized to fit them
pub fn box_of(shapes: Vec<ShapeHandle>) -> ShapeBox {
    box_with_capacity(shapes.len(), shapes)
}

pub fn box_with_capacity(capacity: usize, shapes: Vec<ShapeHandle>) -> ShapeBox {
    let mut b = ShapeBox::new(capacity);
    for shape in shapes {
        b.add_shape(shape).unwrap();
    }
    b
}

/// Area of every stored shape, in order
pub fn areas(b: &ShapeBox) -> Vec<f64> {
    b.shapes().iter().map(|s| s.calc_area()).collect()
}

#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
