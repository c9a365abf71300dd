//! Strided axis slices.

use crate::error::{NegativeSliceSizeSnafu, Result, SliceOutOfBoundsSnafu, ZeroStrideSnafu};

/// A strided, possibly partial selection along one axis.
///
/// A negative `end` is an offset from the axis bound, with `-1` meaning
/// "through the last valid position". The slice holds no reference to
/// the axis it selects from; the bound is passed to [`Slice::size`] at
/// evaluation time.
///
/// # Examples
///
/// ```rust
/// # use grist_ir::Slice;
/// assert_eq!(Slice::ALL.size(10).unwrap(), 10);
/// assert_eq!(Slice::index(3).size(10).unwrap(), 1);
/// assert_eq!(Slice::range(2, -1).size(10).unwrap(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slice {
    pub start: i64,
    pub end: i64,
    pub stride: i64,
}

impl Slice {
    /// The entire axis, whatever its extent.
    pub const ALL: Slice = Slice { start: 0, end: -1, stride: 1 };

    /// Select exactly one element.
    pub fn index(i: i64) -> Self {
        Self { start: i, end: i + 1, stride: 1 }
    }

    /// Contiguous range with unit stride.
    pub fn range(start: i64, end: i64) -> Self {
        Self { start, end, stride: 1 }
    }

    /// Strided range.
    pub fn strided(start: i64, end: i64, stride: i64) -> Self {
        Self { start, end, stride }
    }

    /// Element count of this slice against an axis extent `bound`.
    ///
    /// A negative `end` resolves to `bound - (end + 1)` first; the count
    /// is then `(effective_end - start) / stride` with division
    /// truncating toward zero, so remainder elements of a stride that
    /// does not divide the span evenly are excluded. Generated loop
    /// bounds depend on that truncation.
    ///
    /// # Errors
    ///
    /// A slice whose `start` exceeds `bound`, whose `stride` is zero,
    /// or whose count would come out negative, is a contract violation
    /// by the caller and is rejected rather than clamped - clamping
    /// would emit kernels that silently iterate the wrong number of
    /// times.
    pub fn size(&self, bound: i64) -> Result<i64> {
        snafu::ensure!(
            self.start <= bound,
            SliceOutOfBoundsSnafu { start: self.start, bound }
        );
        snafu::ensure!(self.stride != 0, ZeroStrideSnafu { start: self.start, end: self.end });

        let effective_end = if self.end < 0 { bound - (self.end + 1) } else { self.end };
        let count = (effective_end - self.start) / self.stride;

        snafu::ensure!(
            count >= 0,
            NegativeSliceSizeSnafu { start: self.start, end: self.end, stride: self.stride, bound }
        );

        Ok(count)
    }
}
