//! Shape and slice arithmetic for the grist kernel generator.
//!
//! The kernel emitter sizes loops and element counts from two value
//! types defined here:
//!
//! - [`Shape`] - static per-axis extents of a tensor operand
//! - [`Slice`] - a strided, possibly partial selection along one axis
//!
//! Both are plain immutable values with no shared state; generation
//! tasks on different threads can construct and query them freely.

pub mod error;
pub mod shape;
pub mod slice;


pub use error::{Error, Result};
pub use shape::Shape;
pub use slice::Slice;
