//! Shape Box
//!
//! Fixed-capacity container for shapes with indexed access, replacement,
//! extraction, aggregate measurement and circle removal.
//!
//! # Overview
//!
//! - **ShapeBox**: unsynchronized box, mutation through `&mut self`
//! - **SharedShapeBox**: the same box behind a `parking_lot::Mutex`
//! - **Shape**: the area/perimeter capability stored in a box
//! - **BoxError**: `OutOfRange`, `NotFound`, `NothingRemoved`
//!
//! An index past the last stored shape but below capacity is a soft miss
//! and returns `Ok(None)`.
//!
//! # Example
//!
//! ```rust
//! use shape_box::prelude::*;
//! use shape_box::shapes::{handle, Circle, Square};
//!
//! let mut b = ShapeBox::new(2);
//! b.add_shape(handle(Circle::new(1.0))).unwrap();
//! b.add_shape(handle(Square::new(2.0))).unwrap();
//! assert!(b.add_shape(handle(Square::new(1.0))).is_err());
//!
//! assert!((b.sum_area() - (std::f64::consts::PI + 4.0)).abs() < 1e-9);
//! assert!(b.get_by_index(1).unwrap().is_some());
//!
//! b.remove_all_circles().unwrap();
//! assert_eq!(b.remove_all_circles(), Err(BoxError::NothingRemoved));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod container;
pub mod error;
pub mod shape;
pub mod shapes;
pub mod shared;

// Re-exports
pub use config::{BoxConfig, DEFAULT_CAPACITY};
pub use container::{BoxStats, ShapeBox, ShapeContainer, Slot};
pub use error::{BoxError, BoxResult};
pub use shape::{Shape, ShapeHandle, ShapeKind};
pub use shared::SharedShapeBox;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for box operations
    pub use crate::{
        BoxConfig, BoxError, BoxResult, Shape, ShapeBox, ShapeContainer, ShapeHandle, ShapeKind,
        SharedShapeBox, Slot,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
