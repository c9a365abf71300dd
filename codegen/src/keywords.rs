//! The backend keyword table.
//!
//! Every abstract kernel-construction concept the emitter knows is
//! listed once in [`KeywordId`], with its OpenCL and CUDA spellings
//! side by side in [`KeywordId::texts`]. Expression builders that take
//! run-time operands (cast, init, infinity, select) live on
//! [`KeywordRegistry`] next to the fixed table.
//!
//! All lookups are pure functions of backend kind and the supplied
//! parameters; nothing here parses, validates, or executes the text it
//! hands out.

use std::borrow::Cow;

use grist_device::{BackendKind, DeviceSpec};

use crate::error::{Result, UnsupportedBackendSnafu};

/// One of the three hardware axes an index/size accessor can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Numeric axis index (0, 1, 2).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Symbolic name of a fixed-pair keyword concept.
///
/// The variants with a trailing digit are the per-axis accessors; use
/// the [`KeywordId::global_idx`]-family constructors to pick one from
/// an [`Axis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeywordId {
    /// Kernel entry-point qualifier.
    KernelPrefix,
    /// Local/shared memory-space qualifier.
    Local,
    /// Global memory-space qualifier.
    Global,
    /// Qualifier on pointers into local memory.
    LocalPtr,

    GlobalIdx0,
    GlobalIdx1,
    GlobalIdx2,

    GlobalSize0,
    GlobalSize1,
    GlobalSize2,

    LocalIdx0,
    LocalIdx1,
    LocalIdx2,

    LocalSize0,
    LocalSize1,
    LocalSize2,

    GroupIdx0,
    GroupIdx1,
    GroupIdx2,

    GroupSize0,
    GroupSize1,
    GroupSize2,

    /// Work-group/block level synchronization barrier.
    LocalBarrier,
}

impl KeywordId {
    /// The (OpenCL, CUDA) literal pair for this concept.
    ///
    /// These are spliced verbatim into kernel source by the external
    /// template engine, so they must match the target grammar exactly;
    /// a wrong literal compiles into a kernel that computes the wrong
    /// answer silently.
    pub const fn texts(self) -> (&'static str, &'static str) {
        use KeywordId::*;
        match self {
            KernelPrefix => ("__kernel", "extern \"C\" __global__"),
            Local => ("__local", "__shared__"),
            Global => ("__global", ""),
            LocalPtr => ("__local", ""),

            GlobalIdx0 => ("get_global_id(0)", "(blockIdx.x*blockDim.x + threadIdx.x)"),
            GlobalIdx1 => ("get_global_id(1)", "(blockIdx.y*blockDim.y + threadIdx.y)"),
            GlobalIdx2 => ("get_global_id(2)", "(blockIdx.z*blockDim.z + threadIdx.z)"),

            GlobalSize0 => ("get_global_size(0)", "(blockDim.x*gridDim.x)"),
            GlobalSize1 => ("get_global_size(1)", "(blockDim.y*gridDim.y)"),
            GlobalSize2 => ("get_global_size(2)", "(blockDim.z*gridDim.z)"),

            LocalIdx0 => ("get_local_id(0)", "threadIdx.x"),
            LocalIdx1 => ("get_local_id(1)", "threadIdx.y"),
            LocalIdx2 => ("get_local_id(2)", "threadIdx.z"),

            LocalSize0 => ("get_local_size(0)", "blockDim.x"),
            LocalSize1 => ("get_local_size(1)", "blockDim.y"),
            LocalSize2 => ("get_local_size(2)", "blockDim.z"),

            GroupIdx0 => ("get_group_id(0)", "blockIdx.x"),
            GroupIdx1 => ("get_group_id(1)", "blockIdx.y"),
            GroupIdx2 => ("get_group_id(2)", "blockIdx.z"),

            GroupSize0 => ("get_ng(0)", "GridDim.x"),
            GroupSize1 => ("get_ng(1)", "GridDim.y"),
            GroupSize2 => ("get_ng(2)", "GridDim.z"),

            LocalBarrier => ("barrier(CLK_LOCAL_MEM_FENCE)", "__syncthreads()"),
        }
    }

    /// Global thread index accessor along `axis`.
    pub fn global_idx(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::GlobalIdx0,
            Axis::Y => Self::GlobalIdx1,
            Axis::Z => Self::GlobalIdx2,
        }
    }

    /// Global thread count accessor along `axis`.
    pub fn global_size(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::GlobalSize0,
            Axis::Y => Self::GlobalSize1,
            Axis::Z => Self::GlobalSize2,
        }
    }

    /// Thread-in-group index accessor along `axis`.
    pub fn local_idx(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::LocalIdx0,
            Axis::Y => Self::LocalIdx1,
            Axis::Z => Self::LocalIdx2,
        }
    }

    /// Group-local thread count accessor along `axis`.
    pub fn local_size(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::LocalSize0,
            Axis::Y => Self::LocalSize1,
            Axis::Z => Self::LocalSize2,
        }
    }

    /// Work-group/block index accessor along `axis`.
    pub fn group_idx(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::GroupIdx0,
            Axis::Y => Self::GroupIdx1,
            Axis::Z => Self::GroupIdx2,
        }
    }

    /// Work-group/block count accessor along `axis`.
    pub fn group_size(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::GroupSize0,
            Axis::Y => Self::GroupSize1,
            Axis::Z => Self::GroupSize2,
        }
    }
}

/// A resolved keyword: a backend kind plus its two candidate texts.
///
/// The accessor is a pure function of the backend kind fixed at
/// construction; the texts never mutate afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    backend: BackendKind,
    opencl: Cow<'static, str>,
    cuda: Cow<'static, str>,
}

impl Keyword {
    pub fn new(
        backend: BackendKind,
        opencl: impl Into<Cow<'static, str>>,
        cuda: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self { backend, opencl: opencl.into(), cuda: cuda.into() }
    }

    /// Keyword for a fixed-pair concept from the table.
    pub fn fixed(backend: BackendKind, id: KeywordId) -> Self {
        let (opencl, cuda) = id.texts();
        Self::new(backend, opencl, cuda)
    }

    /// The literal text for this keyword's backend.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedBackend`](crate::Error::UnsupportedBackend)
    /// when the backend kind has no keyword mapping.
    pub fn get(&self) -> Result<&str> {
        match self.backend {
            BackendKind::OpenCl => Ok(&self.opencl),
            BackendKind::Cuda => Ok(&self.cuda),
            backend => UnsupportedBackendSnafu { backend }.fail(),
        }
    }
}

/// Backend-keyed lookup service for kernel-construction keywords.
///
/// One registry is built per code-generation request from the target
/// device's backend kind; every lookup on it is pure and side-effect
/// free, so registries can be shared across generation threads without
/// synchronization.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRegistry {
    backend: BackendKind,
}

impl KeywordRegistry {
    pub fn new(backend: BackendKind) -> Self {
        Self { backend }
    }

    /// Registry for the backend a device executes.
    pub fn for_device(device: &DeviceSpec) -> Self {
        let backend = device.backend();
        tracing::debug!(device = %device.canonicalize(), ?backend, "keyword registry created");
        Self::new(backend)
    }

    /// Backend kind this registry resolves against.
    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    /// Literal text of a fixed-pair keyword concept.
    pub fn get(&self, id: KeywordId) -> Result<&'static str> {
        let (opencl, cuda) = id.texts();
        match self.backend {
            BackendKind::OpenCl => Ok(opencl),
            BackendKind::Cuda => Ok(cuda),
            backend => UnsupportedBackendSnafu { backend }.fail(),
        }
    }

    /// Function-call prefix converting a value to `datatype`.
    ///
    /// `convert_{datatype}` on OpenCL, `make_{datatype}` on CUDA; the
    /// emitter appends the parenthesized operand itself.
    pub fn cast_prefix(&self, datatype: &str) -> Result<String> {
        Keyword::new(self.backend, format!("convert_{datatype}"), format!("make_{datatype}"))
            .get()
            .map(str::to_owned)
    }

    /// Prefix for initializing a value of `datatype` from literals.
    ///
    /// OpenCL takes value literals directly, so its prefix is empty.
    pub fn init_prefix(&self, datatype: &str) -> Result<String> {
        Keyword::new(self.backend, "", format!("make_{datatype}")).get().map(str::to_owned)
    }

    /// Positive-infinity literal for `datatype`.
    pub fn infinity(&self, datatype: &str) -> Result<String> {
        Keyword::new(self.backend, "INFINITY", format!("infinity<{datatype}>()"))
            .get()
            .map(str::to_owned)
    }

    /// Three-operand conditional select.
    ///
    /// Callers always pass operands as (cond, if_value, else_value).
    /// The OpenCL `select` builtin takes its arguments in the opposite
    /// order, (else, if, cond), and the reordering happens here; a
    /// direct substitution would swap the true/false branches on that
    /// backend and generate kernels that compile but pick the wrong
    /// value.
    pub fn select(&self, cond: &str, if_value: &str, else_value: &str) -> Result<String> {
        Keyword::new(
            self.backend,
            format!("select({else_value},{if_value},{cond})"),
            format!("({cond})?{if_value}:{else_value}"),
        )
        .get()
        .map(str::to_owned)
    }

    /// Scalar integer type name for loop counters and sizes.
    ///
    /// Both supported backends currently use `int`, but the lookup
    /// stays keyed on backend kind so a third backend with a different
    /// index type is a table change, not an interface change.
    pub fn size_type(&self) -> Result<&'static str> {
        match self.backend {
            BackendKind::OpenCl => Ok("int"),
            BackendKind::Cuda => Ok("int"),
            backend => UnsupportedBackendSnafu { backend }.fail(),
        }
    }
}
