//! Reference shapes
//!
//! Plain value types implementing [`Shape`]. The box does not depend on
//! any of them; they exist for hosts and tests that need concrete shapes.

use crate::shape::{Shape, ShapeHandle, ShapeKind};
use std::f64::consts::PI;
use std::sync::Arc;

/// Circle with a radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Radius
    pub radius: f64,
}

impl Circle {
    /// Create circle
    #[inline]
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn calc_area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn calc_perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
}

/// Square with a side length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    /// Side length
    pub side: f64,
}

impl Square {
    /// Create square
    #[inline]
    #[must_use]
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Shape for Square {
    fn calc_area(&self) -> f64 {
        self.side * self.side
    }

    fn calc_perimeter(&self) -> f64 {
        4.0 * self.side
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rectangle {
    /// Create rectangle
    #[inline]
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn calc_area(&self) -> f64 {
        self.width * self.height
    }

    fn calc_perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

/// Equilateral triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Side length
    pub side: f64,
}

impl Triangle {
    /// Create triangle
    #[inline]
    #[must_use]
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Shape for Triangle {
    fn calc_area(&self) -> f64 {
        3.0_f64.sqrt() / 4.0 * self.side * self.side
    }

    fn calc_perimeter(&self) -> f64 {
        3.0 * self.side
    }
}

/// Wrap any shape into a [`ShapeHandle`]
#[inline]
#[must_use]
pub fn handle<S: Shape + 'static>(shape: S) -> ShapeHandle {
    Arc::new(shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn circle_formulas() {
        let c = Circle::new(1.0);
        assert!((c.calc_area() - PI).abs() < EPS);
        assert!((c.calc_perimeter() - 2.0 * PI).abs() < EPS);
        assert!(c.is_circle());
    }

    #[test]
    fn square_formulas() {
        let s = Square::new(2.0);
        assert!((s.calc_area() - 4.0).abs() < EPS);
        assert!((s.calc_perimeter() - 8.0).abs() < EPS);
        assert!(!s.is_circle());
    }

    #[test]
    fn rectangle_formulas() {
        let r = Rectangle::new(2.0, 3.0);
        assert!((r.calc_area() - 6.0).abs() < EPS);
        assert!((r.calc_perimeter() - 10.0).abs() < EPS);
    }

    #[test]
    fn triangle_formulas() {
        let t = Triangle::new(2.0);
        assert!((t.calc_area() - 3.0_f64.sqrt()).abs() < EPS);
        assert!((t.calc_perimeter() - 6.0).abs() < EPS);
        assert_eq!(t.kind(), ShapeKind::Other);
    }
}
