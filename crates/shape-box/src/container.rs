//! Fixed-capacity shape container
//!
//! Provides [`ShapeBox`], the unsynchronized box, and the
//! [`ShapeContainer`] trait shared with [`SharedShapeBox`](crate::SharedShapeBox).
//!
//! # Index Contract
//! Index operations classify an index into one of four [`Slot`] outcomes:
//!
//! | Outcome           | Condition                         | Public result        |
//! |-------------------|-----------------------------------|----------------------|
//! | `Found`           | `index < len`, slot occupied      | `Ok(Some(shape))`    |
//! | `EmptySlot`       | `index < len`, slot vacant        | `Err(NotFound)`      |
//! | `BeyondOccupancy` | `len <= index < capacity`         | `Ok(None)`           |
//! | `OutOfRange`      | `index + 1 > capacity`            | `Err(OutOfRange)`    |
//!
//! The bound is checked against capacity, not occupancy, so an index past
//! the last stored shape is a soft miss rather than an error.

use crate::config::BoxConfig;
use crate::error::{BoxError, BoxResult};
use crate::shape::{Shape, ShapeHandle};
use std::sync::Arc;

/// Outcome of classifying an index against a box
#[derive(Debug, Clone)]
pub enum Slot {
    /// Occupied slot
    Found(ShapeHandle),

    /// Slot inside occupancy holding no shape
    EmptySlot,

    /// Index past occupancy but within capacity
    BeyondOccupancy,

    /// Index at or beyond capacity
    OutOfRange,
}

impl Slot {
    /// Collapse into the public lookup contract
    ///
    /// # Errors
    /// - `BoxError::OutOfRange` for [`Slot::OutOfRange`]
    /// - `BoxError::NotFound` for [`Slot::EmptySlot`]
    pub fn into_lookup(self, index: usize, capacity: usize) -> BoxResult<Option<ShapeHandle>> {
        match self {
            Self::Found(shape) => Ok(Some(shape)),
            Self::BeyondOccupancy => Ok(None),
            Self::EmptySlot => Err(BoxError::NotFound { index }),
            Self::OutOfRange => Err(BoxError::out_of_range(index, capacity)),
        }
    }

    /// Check if slot holds a shape
    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Occupancy snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxStats {
    /// Fixed capacity
    pub capacity: usize,
    /// Slots in use, vacant ones included
    pub occupancy: usize,
    /// Slots in use that hold no shape
    pub vacant: usize,
}

/// Operations every box policy provides
///
/// Implemented by [`ShapeBox`] and [`SharedShapeBox`](crate::SharedShapeBox)
/// so callers can be written once against either policy.
pub trait ShapeContainer {
    /// Append a shape
    ///
    /// # Errors
    /// `BoxError::OutOfRange` if the box is full
    fn add_shape(&mut self, shape: ShapeHandle) -> BoxResult<()>;

    /// Shape at `index` without removing it
    ///
    /// # Errors
    /// See the module-level index contract
    fn get_by_index(&self, index: usize) -> BoxResult<Option<ShapeHandle>>;

    /// Remove and return the shape at `index`
    ///
    /// # Errors
    /// See the module-level index contract
    fn extract_by_index(&mut self, index: usize) -> BoxResult<Option<ShapeHandle>>;

    /// Overwrite the shape at `index`, returning the previous one
    ///
    /// # Errors
    /// See the module-level index contract
    fn replace_by_index(&mut self, index: usize, shape: ShapeHandle)
        -> BoxResult<Option<ShapeHandle>>;

    /// Total perimeter of stored shapes
    fn sum_perimeter(&self) -> f64;

    /// Total area of stored shapes
    fn sum_area(&self) -> f64;

    /// Remove every circle
    ///
    /// # Errors
    /// `BoxError::NothingRemoved` if no circle was present
    fn remove_all_circles(&mut self) -> BoxResult<()>;
}

/// Fixed-capacity box of shapes
///
/// Not synchronized: mutation requires `&mut self`. Wrap in
/// [`SharedShapeBox`](crate::SharedShapeBox) to share between threads.
#[derive(Debug, Clone)]
pub struct ShapeBox {
    /// Maximum number of slots
    capacity: usize,

    /// Stored slots in insertion order; `None` is a vacant slot
    slots: Vec<Option<ShapeHandle>>,
}

impl ShapeBox {
    /// Create empty box
    ///
    /// A zero capacity is accepted; every later operation then fails with
    /// `OutOfRange`.
    #[inline]
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: Vec::new(),
        }
    }

    /// Create box from configuration
    ///
    /// # Errors
    /// `BoxError::ZeroCapacity` if the config rejects a zero capacity
    pub fn with_config(config: &BoxConfig) -> BoxResult<Self> {
        if config.reject_zero_capacity && config.capacity == 0 {
            tracing::debug!("rejected zero-capacity box");
            return Err(BoxError::ZeroCapacity);
        }
        Ok(Self::new(config.capacity))
    }

    /// Fixed capacity
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots in use
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if box is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check if another insert would fail
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Occupancy snapshot
    #[must_use]
    pub fn stats(&self) -> BoxStats {
        BoxStats {
            capacity: self.capacity,
            occupancy: self.slots.len(),
            vacant: self.slots.iter().filter(|slot| slot.is_none()).count(),
        }
    }

    /// Stored shapes in order, vacant slots skipped
    #[must_use]
    pub fn shapes(&self) -> Vec<ShapeHandle> {
        self.slots.iter().flatten().cloned().collect()
    }

    /// Append a shape
    ///
    /// # Errors
    /// `BoxError::OutOfRange` if the box is full; the box is unchanged
    pub fn add_shape(&mut self, shape: ShapeHandle) -> BoxResult<()> {
        self.push_slot(Some(shape))
    }

    /// Append a slot holding no shape
    ///
    /// Index operations on it report `NotFound`.
    ///
    /// # Errors
    /// `BoxError::OutOfRange` if the box is full
    pub fn add_vacant(&mut self) -> BoxResult<()> {
        self.push_slot(None)
    }

    fn push_slot(&mut self, slot: Option<ShapeHandle>) -> BoxResult<()> {
        if self.slots.len() + 1 > self.capacity {
            tracing::debug!(
                occupancy = self.slots.len(),
                capacity = self.capacity,
                "box full, insert rejected"
            );
            return Err(BoxError::out_of_range(self.slots.len(), self.capacity));
        }
        self.slots.push(slot);
        tracing::trace!(occupancy = self.slots.len(), "slot appended");
        Ok(())
    }

    /// Classify `index` without mutating the box
    #[must_use]
    pub fn probe(&self, index: usize) -> Slot {
        if index >= self.capacity {
            return Slot::OutOfRange;
        }
        match self.slots.get(index) {
            Some(Some(shape)) => Slot::Found(Arc::clone(shape)),
            Some(None) => Slot::EmptySlot,
            None => Slot::BeyondOccupancy,
        }
    }

    fn lookup(&self, op: &'static str, index: usize) -> BoxResult<Option<ShapeHandle>> {
        let result = self.probe(index).into_lookup(index, self.capacity);
        if let Err(err) = &result {
            tracing::debug!(op, index, capacity = self.capacity, %err, "index rejected");
        }
        result
    }

    /// Shape at `index` without removing it
    ///
    /// # Errors
    /// - `BoxError::OutOfRange` if `index + 1 > capacity`
    /// - `BoxError::NotFound` if the slot is vacant
    pub fn get_by_index(&self, index: usize) -> BoxResult<Option<ShapeHandle>> {
        self.lookup("get", index)
    }

    /// Remove and return the shape at `index`
    ///
    /// Later shapes shift down by one position.
    ///
    /// # Errors
    /// - `BoxError::OutOfRange` if `index + 1 > capacity`
    /// - `BoxError::NotFound` if the slot is vacant
    pub fn extract_by_index(&mut self, index: usize) -> BoxResult<Option<ShapeHandle>> {
        if self.lookup("extract", index)?.is_none() {
            return Ok(None);
        }
        let shape = self.slots.remove(index);
        tracing::trace!(index, occupancy = self.slots.len(), "shape extracted");
        Ok(shape)
    }

    /// Overwrite the shape at `index`, returning the previous one
    ///
    /// # Errors
    /// - `BoxError::OutOfRange` if `index + 1 > capacity`
    /// - `BoxError::NotFound` if the slot is vacant
    pub fn replace_by_index(
        &mut self,
        index: usize,
        shape: ShapeHandle,
    ) -> BoxResult<Option<ShapeHandle>> {
        if self.lookup("replace", index)?.is_none() {
            return Ok(None);
        }
        tracing::trace!(index, "shape replaced");
        Ok(self.slots[index].replace(shape))
    }

    /// Total perimeter of stored shapes, in stored order
    #[must_use]
    pub fn sum_perimeter(&self) -> f64 {
        self.slots
            .iter()
            .flatten()
            .fold(0.0, |sum, shape| sum + shape.calc_perimeter())
    }

    /// Total area of stored shapes, in stored order
    #[must_use]
    pub fn sum_area(&self) -> f64 {
        self.slots
            .iter()
            .flatten()
            .fold(0.0, |sum, shape| sum + shape.calc_area())
    }

    /// Remove every shape matching `predicate`
    ///
    /// Remaining slots keep their relative order and are compacted.
    /// Vacant slots are never matched.
    ///
    /// Returns number of shapes removed.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&dyn Shape) -> bool,
    {
        let before = self.slots.len();
        self.slots
            .retain(|slot| !slot.as_deref().is_some_and(|shape| predicate(shape)));
        before - self.slots.len()
    }

    /// Remove every circle
    ///
    /// # Errors
    /// `BoxError::NothingRemoved` if occupancy is unchanged afterwards
    pub fn remove_all_circles(&mut self) -> BoxResult<()> {
        let removed = self.remove_where(|shape| shape.is_circle());
        if removed == 0 {
            tracing::debug!(occupancy = self.slots.len(), "no circles to remove");
            return Err(BoxError::NothingRemoved);
        }
        tracing::trace!(removed, occupancy = self.slots.len(), "circles removed");
        Ok(())
    }
}

impl ShapeContainer for ShapeBox {
    fn add_shape(&mut self, shape: ShapeHandle) -> BoxResult<()> {
        ShapeBox::add_shape(self, shape)
    }

    fn get_by_index(&self, index: usize) -> BoxResult<Option<ShapeHandle>> {
        ShapeBox::get_by_index(self, index)
    }

    fn extract_by_index(&mut self, index: usize) -> BoxResult<Option<ShapeHandle>> {
        ShapeBox::extract_by_index(self, index)
    }

    fn replace_by_index(
        &mut self,
        index: usize,
        shape: ShapeHandle,
    ) -> BoxResult<Option<ShapeHandle>> {
        ShapeBox::replace_by_index(self, index, shape)
    }

    fn sum_perimeter(&self) -> f64 {
        ShapeBox::sum_perimeter(self)
    }

    fn sum_area(&self) -> f64 {
        ShapeBox::sum_area(self)
    }

    fn remove_all_circles(&mut self) -> BoxResult<()> {
        ShapeBox::remove_all_circles(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{handle, Circle, Square, Triangle};

    fn full_box() -> ShapeBox {
        let mut b = ShapeBox::new(3);
        b.add_shape(handle(Circle::new(1.0))).unwrap();
        b.add_shape(handle(Square::new(2.0))).unwrap();
        b.add_shape(handle(Circle::new(2.0))).unwrap();
        b
    }

    #[test]
    fn add_until_full() {
        let mut b = ShapeBox::new(2);
        b.add_shape(handle(Square::new(1.0))).unwrap();
        b.add_shape(handle(Square::new(1.0))).unwrap();
        assert!(b.is_full());

        let err = b.add_shape(handle(Square::new(1.0))).unwrap_err();
        assert_eq!(err, BoxError::out_of_range(2, 2));
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut b = ShapeBox::new(0);
        assert!(b.add_shape(handle(Square::new(1.0))).unwrap_err().is_out_of_range());
        assert!(b.get_by_index(0).unwrap_err().is_out_of_range());
        assert!(b.extract_by_index(0).unwrap_err().is_out_of_range());
    }

    #[test]
    fn with_config_honours_rejection() {
        let strict = BoxConfig::new()
            .with_capacity(0)
            .with_reject_zero_capacity(true);
        assert_eq!(ShapeBox::with_config(&strict).unwrap_err(), BoxError::ZeroCapacity);

        let lenient = BoxConfig::new().with_capacity(0);
        assert_eq!(ShapeBox::with_config(&lenient).unwrap().capacity(), 0);
    }

    #[test]
    fn probe_classifies_all_outcomes() {
        let mut b = ShapeBox::new(4);
        b.add_shape(handle(Square::new(1.0))).unwrap();
        b.add_vacant().unwrap();

        assert!(b.probe(0).is_found());
        assert!(matches!(b.probe(1), Slot::EmptySlot));
        assert!(matches!(b.probe(2), Slot::BeyondOccupancy));
        assert!(matches!(b.probe(4), Slot::OutOfRange));
    }

    #[test]
    fn get_returns_same_handle() {
        let shape = handle(Triangle::new(1.0));
        let mut b = ShapeBox::new(1);
        b.add_shape(Arc::clone(&shape)).unwrap();

        let found = b.get_by_index(0).unwrap().unwrap();
        assert!(Arc::ptr_eq(&found, &shape));
    }

    #[test]
    fn vacant_slot_is_not_found() {
        let mut b = ShapeBox::new(2);
        b.add_vacant().unwrap();

        assert_eq!(b.get_by_index(0).unwrap_err(), BoxError::NotFound { index: 0 });
        assert_eq!(b.extract_by_index(0).unwrap_err(), BoxError::NotFound { index: 0 });
        assert_eq!(
            b.replace_by_index(0, handle(Square::new(1.0))).unwrap_err(),
            BoxError::NotFound { index: 0 }
        );
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn extract_shifts_later_shapes() {
        let mut b = full_box();
        let square = b.get_by_index(1).unwrap().unwrap();

        let removed = b.extract_by_index(0).unwrap().unwrap();
        assert!(removed.is_circle());
        assert_eq!(b.len(), 2);

        let now_first = b.get_by_index(0).unwrap().unwrap();
        assert!(Arc::ptr_eq(&now_first, &square));
    }

    #[test]
    fn soft_miss_does_not_mutate() {
        let mut b = ShapeBox::new(3);
        b.add_shape(handle(Square::new(1.0))).unwrap();

        assert!(b.extract_by_index(2).unwrap().is_none());
        assert!(b.replace_by_index(1, handle(Square::new(5.0))).unwrap().is_none());
        assert_eq!(b.len(), 1);
        assert!((b.sum_area() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn replace_returns_previous() {
        let mut b = full_box();
        let previous = b
            .replace_by_index(1, handle(Triangle::new(2.0)))
            .unwrap()
            .unwrap();
        assert!((previous.calc_area() - 4.0).abs() < 1e-9);
        assert_eq!(b.len(), 3);
        assert!((b.get_by_index(1).unwrap().unwrap().calc_perimeter() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn sums_skip_vacant_slots() {
        let mut b = ShapeBox::new(3);
        b.add_shape(handle(Square::new(2.0))).unwrap();
        b.add_vacant().unwrap();
        b.add_shape(handle(Square::new(1.0))).unwrap();

        assert!((b.sum_area() - 5.0).abs() < 1e-9);
        assert!((b.sum_perimeter() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn empty_sums_are_zero() {
        let b = ShapeBox::new(5);
        assert_eq!(b.sum_area(), 0.0);
        assert_eq!(b.sum_perimeter(), 0.0);
    }

    #[test]
    fn remove_circles_then_nothing_removed() {
        let mut b = full_box();
        b.remove_all_circles().unwrap();
        assert_eq!(b.len(), 1);
        assert!(!b.get_by_index(0).unwrap().unwrap().is_circle());

        assert_eq!(b.remove_all_circles().unwrap_err(), BoxError::NothingRemoved);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn remove_where_keeps_vacant_slots() {
        let mut b = ShapeBox::new(4);
        b.add_shape(handle(Circle::new(1.0))).unwrap();
        b.add_vacant().unwrap();
        b.add_shape(handle(Square::new(1.0))).unwrap();

        assert_eq!(b.remove_where(|shape| shape.is_circle()), 1);
        assert_eq!(
            b.stats(),
            BoxStats {
                capacity: 4,
                occupancy: 2,
                vacant: 1,
            }
        );
        assert!(matches!(b.probe(0), Slot::EmptySlot));
    }

    #[test]
    fn shapes_snapshot_in_order() {
        let b = full_box();
        let kinds: Vec<bool> = b.shapes().iter().map(|s| s.is_circle()).collect();
        assert_eq!(kinds, vec![true, false, true]);
    }
}
