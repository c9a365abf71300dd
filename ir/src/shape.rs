//! Static tensor shapes.
//!
//! A [`Shape`] is the ordered list of per-axis element counts of a
//! tensor operand. The emitter derives aggregate quantities from it:
//! total element counts for buffer sizing and extent reductions for
//! kernel bounds.

use smallvec::SmallVec;

use crate::error::{EmptyShapeSnafu, Result};

/// Ordered per-axis extents of a tensor operand.
///
/// Uses SmallVec with inline capacity of 4 to avoid heap allocation for
/// common tensor ranks (1D-4D). Extents are non-negative element counts;
/// rank 0 is legal and denotes a scalar.
///
/// # Examples
///
/// ```rust
/// # use grist_ir::Shape;
/// let shape = Shape::from([2, 3, 4]);
/// assert_eq!(shape.size(), 3);
/// assert_eq!(shape.prod(), 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape(SmallVec<[i64; 4]>);

impl Shape {
    /// Construct from an explicit ordered list of extents.
    pub fn new(extents: impl IntoIterator<Item = i64>) -> Self {
        Self(extents.into_iter().collect())
    }

    /// Convenience constructor for rank-1 shapes.
    pub fn rank1(a: i64) -> Self {
        Self::new([a])
    }

    /// Convenience constructor for rank-2 shapes.
    pub fn rank2(a: i64, b: i64) -> Self {
        Self::new([a, b])
    }

    /// Number of axes.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// True for rank-0 (scalar) shapes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total element count - the product of all extents.
    ///
    /// The multiplicative identity is returned for rank 0, so a scalar
    /// counts as a single element.
    ///
    /// ```rust
    /// # use grist_ir::Shape;
    /// assert_eq!(Shape::new([]).prod(), 1);
    /// ```
    pub fn prod(&self) -> i64 {
        self.0.iter().product()
    }

    /// Largest extent.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyShape`](crate::Error::EmptyShape) for a
    /// rank-0 shape; there is no extent to return.
    pub fn max(&self) -> Result<i64> {
        self.0.iter().copied().max().ok_or_else(|| EmptyShapeSnafu.build())
    }

    /// Smallest extent.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyShape`](crate::Error::EmptyShape) for a
    /// rank-0 shape.
    pub fn min(&self) -> Result<i64> {
        self.0.iter().copied().min().ok_or_else(|| EmptyShapeSnafu.build())
    }

    /// Iterate over extents in axis order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }

    /// Extents as a contiguous slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

impl std::ops::Index<usize> for Shape {
    type Output = i64;

    fn index(&self, axis: usize) -> &i64 {
        &self.0[axis]
    }
}

impl std::ops::IndexMut<usize> for Shape {
    fn index_mut(&mut self, axis: usize) -> &mut i64 {
        &mut self.0[axis]
    }
}

impl<const N: usize> From<[i64; N]> for Shape {
    fn from(extents: [i64; N]) -> Self {
        Self::new(extents)
    }
}

impl From<&[i64]> for Shape {
    fn from(extents: &[i64]) -> Self {
        Self(extents.iter().copied().collect())
    }
}

impl FromIterator<i64> for Shape {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
