//! Thread-safe box
//!
//! [`SharedShapeBox`] serializes every operation through one
//! `parking_lot::Mutex` over the whole box. Each method holds the guard for
//! its full duration; the guard drops on every return path.

use crate::config::BoxConfig;
use crate::container::{BoxStats, ShapeBox, ShapeContainer, Slot};
use crate::error::BoxResult;
use crate::shape::{Shape, ShapeHandle};
use parking_lot::Mutex;

/// Box shared between threads
///
/// Operations are linearizable at whole-box granularity.
#[derive(Debug)]
pub struct SharedShapeBox {
    inner: Mutex<ShapeBox>,
}

impl SharedShapeBox {
    /// Create empty shared box
    #[inline]
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::from_box(ShapeBox::new(capacity))
    }

    /// Create shared box from configuration
    ///
    /// # Errors
    /// `BoxError::ZeroCapacity` if the config rejects a zero capacity
    pub fn with_config(config: &BoxConfig) -> BoxResult<Self> {
        ShapeBox::with_config(config).map(Self::from_box)
    }

    /// Take ownership of an existing box
    #[inline]
    #[must_use]
    pub fn from_box(inner: ShapeBox) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Release the lock wrapper
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> ShapeBox {
        self.inner.into_inner()
    }

    /// Fixed capacity
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Number of slots in use
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if box is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Occupancy snapshot
    #[must_use]
    pub fn stats(&self) -> BoxStats {
        self.inner.lock().stats()
    }

    /// Stored shapes in order, vacant slots skipped
    #[must_use]
    pub fn shapes(&self) -> Vec<ShapeHandle> {
        self.inner.lock().shapes()
    }

    /// Classify `index`
    #[must_use]
    pub fn probe(&self, index: usize) -> Slot {
        self.inner.lock().probe(index)
    }

    /// Append a shape
    ///
    /// # Errors
    /// `BoxError::OutOfRange` if the box is full
    pub fn add_shape(&self, shape: ShapeHandle) -> BoxResult<()> {
        self.inner.lock().add_shape(shape)
    }

    /// Append a slot holding no shape
    ///
    /// # Errors
    /// `BoxError::OutOfRange` if the box is full
    pub fn add_vacant(&self) -> BoxResult<()> {
        self.inner.lock().add_vacant()
    }

    /// Shape at `index` without removing it
    ///
    /// # Errors
    /// Same as [`ShapeBox::get_by_index`]
    pub fn get_by_index(&self, index: usize) -> BoxResult<Option<ShapeHandle>> {
        self.inner.lock().get_by_index(index)
    }

    /// Remove and return the shape at `index`
    ///
    /// # Errors
    /// Same as [`ShapeBox::extract_by_index`]
    pub fn extract_by_index(&self, index: usize) -> BoxResult<Option<ShapeHandle>> {
        self.inner.lock().extract_by_index(index)
    }

    /// Overwrite the shape at `index`, returning the previous one
    ///
    /// # Errors
    /// Same as [`ShapeBox::replace_by_index`]
    pub fn replace_by_index(
        &self,
        index: usize,
        shape: ShapeHandle,
    ) -> BoxResult<Option<ShapeHandle>> {
        self.inner.lock().replace_by_index(index, shape)
    }

    /// Total perimeter of stored shapes
    #[must_use]
    pub fn sum_perimeter(&self) -> f64 {
        self.inner.lock().sum_perimeter()
    }

    /// Total area of stored shapes
    #[must_use]
    pub fn sum_area(&self) -> f64 {
        self.inner.lock().sum_area()
    }

    /// Remove every shape matching `predicate`
    ///
    /// `predicate` runs with the lock held and must not call back into
    /// this box.
    pub fn remove_where<F>(&self, predicate: F) -> usize
    where
        F: FnMut(&dyn Shape) -> bool,
    {
        self.inner.lock().remove_where(predicate)
    }

    /// Remove every circle
    ///
    /// # Errors
    /// `BoxError::NothingRemoved` if no circle was present
    pub fn remove_all_circles(&self) -> BoxResult<()> {
        self.inner.lock().remove_all_circles()
    }
}

impl From<ShapeBox> for SharedShapeBox {
    fn from(inner: ShapeBox) -> Self {
        Self::from_box(inner)
    }
}

impl ShapeContainer for SharedShapeBox {
    fn add_shape(&mut self, shape: ShapeHandle) -> BoxResult<()> {
        SharedShapeBox::add_shape(self, shape)
    }

    fn get_by_index(&self, index: usize) -> BoxResult<Option<ShapeHandle>> {
        SharedShapeBox::get_by_index(self, index)
    }

    fn extract_by_index(&mut self, index: usize) -> BoxResult<Option<ShapeHandle>> {
        SharedShapeBox::extract_by_index(self, index)
    }

    fn replace_by_index(
        &mut self,
        index: usize,
        shape: ShapeHandle,
    ) -> BoxResult<Option<ShapeHandle>> {
        SharedShapeBox::replace_by_index(self, index, shape)
    }

    fn sum_perimeter(&self) -> f64 {
        SharedShapeBox::sum_perimeter(self)
    }

    fn sum_area(&self) -> f64 {
        SharedShapeBox::sum_area(self)
    }

    fn remove_all_circles(&mut self) -> BoxResult<()> {
        SharedShapeBox::remove_all_circles(self)
    }
}
