//! Backend discriminator and device description.

use crate::error::{InvalidDeviceSnafu, Result};

/// Which kernel-source dialect a device executes.
///
/// `OpenCl` uses the work-item/work-group addressing model, `Cuda` the
/// thread/block/grid model. `Cpu` exists at the driver layer but has no
/// GPU keyword mapping; the code generation layer rejects it with an
/// unsupported-backend error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BackendKind {
    Cpu,
    OpenCl,
    Cuda,
}

/// Description of a concrete compilation target.
///
/// This is the object the external emitter holds; the only query the
/// code generation layer makes against it is [`DeviceSpec::backend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceSpec {
    Cpu,
    OpenCl { platform_id: usize, device_id: usize },
    Cuda { device_id: usize },
}

impl DeviceSpec {
    /// Backend kind this device executes.
    pub fn backend(&self) -> BackendKind {
        match self {
            DeviceSpec::Cpu => BackendKind::Cpu,
            DeviceSpec::OpenCl { .. } => BackendKind::OpenCl,
            DeviceSpec::Cuda { .. } => BackendKind::Cuda,
        }
    }

    /// Canonical string form.
    ///
    /// Examples:
    /// - `DeviceSpec::Cpu` -> "CPU"
    /// - `DeviceSpec::OpenCl { platform_id: 0, device_id: 1 }` -> "OPENCL:0:1"
    /// - `DeviceSpec::Cuda { device_id: 0 }` -> "CUDA:0"
    pub fn canonicalize(&self) -> String {
        match self {
            DeviceSpec::Cpu => "CPU".to_string(),
            DeviceSpec::OpenCl { platform_id, device_id } => {
                format!("OPENCL:{platform_id}:{device_id}")
            }
            DeviceSpec::Cuda { device_id } => format!("CUDA:{device_id}"),
        }
    }

    /// Parse a device string into a DeviceSpec.
    ///
    /// Case insensitive; omitted ids default to 0:
    /// - "CPU" -> `DeviceSpec::Cpu`
    /// - "opencl" -> `DeviceSpec::OpenCl { platform_id: 0, device_id: 0 }`
    /// - "OPENCL:1:2" -> `DeviceSpec::OpenCl { platform_id: 1, device_id: 2 }`
    /// - "cuda:3" -> `DeviceSpec::Cuda { device_id: 3 }`
    pub fn parse(s: &str) -> Result<Self> {
        let upper = s.to_uppercase();
        let parts: Vec<&str> = upper.split(':').collect();

        let id = |part: Option<&&str>| -> Result<usize> {
            match part {
                Some(p) => p.parse().map_err(|_| InvalidDeviceSnafu { device: s.to_string() }.build()),
                None => Ok(0),
            }
        };

        match parts[0] {
            "CPU" => Ok(DeviceSpec::Cpu),
            "OPENCL" => Ok(DeviceSpec::OpenCl {
                platform_id: id(parts.get(1))?,
                device_id: id(parts.get(2))?,
            }),
            "CUDA" => Ok(DeviceSpec::Cuda { device_id: id(parts.get(1))? }),
            _ => InvalidDeviceSnafu { device: s.to_string() }.fail(),
        }
    }
}
