//! Backend keyword resolution for the grist kernel generator.
//!
//! A single internal representation of a computation has to produce
//! literal kernel source for two structurally different execution
//! models: the OpenCL work-item/work-group model and the CUDA
//! thread/block/grid model. This crate is the single source of truth
//! mapping abstract kernel-construction concepts (entry-point
//! qualifier, memory-space qualifiers, index/size accessors, barrier,
//! cast/init/infinity/select expression builders) to the literal text
//! each backend requires. The external template engine splices the
//! returned fragments verbatim into compilable source, so every literal
//! here must match the target grammar exactly.
//!
//! # Usage
//!
//! ```rust
//! use grist_codegen::{KeywordId, KeywordRegistry};
//! use grist_device::BackendKind;
//!
//! let registry = KeywordRegistry::new(BackendKind::Cuda);
//! assert_eq!(registry.get(KeywordId::LocalBarrier)?, "__syncthreads()");
//! assert_eq!(registry.select("x>0", "y", "z")?, "(x>0)?y:z");
//! # Ok::<(), grist_codegen::Error>(())
//! ```

pub mod error;
pub mod keywords;


pub use error::{Error, Result};
pub use keywords::{Axis, Keyword, KeywordId, KeywordRegistry};
