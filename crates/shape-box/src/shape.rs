//! Shape capability
//!
//! Defines the [`Shape`] trait the box stores. The container only ever
//! talks to shapes through this trait and never inspects concrete fields.

use std::fmt::Debug;
use std::sync::Arc;

/// Shared handle to a stored shape
///
/// Extraction and replacement hand the handle back to the caller; lookups
/// return a clone of it.
pub type ShapeHandle = Arc<dyn Shape>;

/// Variant classification used by filtering operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    /// Any shape the box has no special treatment for
    #[default]
    Other,

    /// Circle, targeted by [`ShapeBox::remove_all_circles`](crate::ShapeBox::remove_all_circles)
    Circle,
}

/// Minimal capability every stored shape must provide
///
/// # Example
/// ```rust
/// use shape_box::{Shape, ShapeKind};
///
/// #[derive(Debug)]
/// struct Dot;
///
/// impl Shape for Dot {
///     fn calc_area(&self) -> f64 { 0.0 }
///     fn calc_perimeter(&self) -> f64 { 0.0 }
/// }
///
/// assert_eq!(Dot.kind(), ShapeKind::Other);
/// ```
pub trait Shape: Debug + Send + Sync {
    /// Area of the shape
    fn calc_area(&self) -> f64;

    /// Perimeter of the shape
    fn calc_perimeter(&self) -> f64;

    /// Variant tag
    ///
    /// Only circles need to override this.
    fn kind(&self) -> ShapeKind {
        ShapeKind::Other
    }

    /// Whether this shape is a circle
    #[inline]
    fn is_circle(&self) -> bool {
        self.kind() == ShapeKind::Circle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Unit;

    impl Shape for Unit {
        fn calc_area(&self) -> f64 {
            1.0
        }

        fn calc_perimeter(&self) -> f64 {
            4.0
        }
    }

    #[derive(Debug)]
    struct Ring;

    impl Shape for Ring {
        fn calc_area(&self) -> f64 {
            0.0
        }

        fn calc_perimeter(&self) -> f64 {
            0.0
        }

        fn kind(&self) -> ShapeKind {
            ShapeKind::Circle
        }
    }

    #[test]
    fn default_kind_is_other() {
        assert_eq!(Unit.kind(), ShapeKind::Other);
        assert!(!Unit.is_circle());
    }

    #[test]
    fn overridden_kind_is_circle() {
        let handle: ShapeHandle = Arc::new(Ring);
        assert!(handle.is_circle());
    }
}
