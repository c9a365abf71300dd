//! Device and target descriptions for the grist kernel generator.
//!
//! This crate owns the backend discriminator ([`BackendKind`]) and the
//! device description ([`DeviceSpec`]) that carries it. The code
//! generation layer queries a device for its backend kind and keys every
//! keyword lookup on the answer; nothing here touches real hardware.

pub mod error;
pub mod spec;


pub use error::{Error, Result};
pub use spec::{BackendKind, DeviceSpec};
