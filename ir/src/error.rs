//! Error types for shape and slice arithmetic.

use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Extent reduction over a shape with no axes.
    #[snafu(display("cannot reduce extents of an empty shape"))]
    EmptyShape,

    /// Slice start lies past the axis extent it is evaluated against.
    #[snafu(display("slice start {start} exceeds axis bound {bound}"))]
    SliceOutOfBounds { start: i64, bound: i64 },

    /// Slice stride of zero never advances and has no element count.
    #[snafu(display("slice ({start}, {end}) has zero stride"))]
    ZeroStride { start: i64, end: i64 },

    /// Slice selects a negative number of elements against this bound.
    #[snafu(display(
        "slice ({start}, {end}, {stride}) has negative size against bound {bound}"
    ))]
    NegativeSliceSize { start: i64, end: i64, stride: i64, bound: i64 },
}
