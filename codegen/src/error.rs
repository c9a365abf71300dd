//! Error types for keyword resolution.

use grist_device::BackendKind;
use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Keyword or type lookup against a backend with no keyword mapping.
    ///
    /// This is fatal for the requesting generation task: there is no
    /// sensible default literal to substitute, and retrying cannot help
    /// since the mapping itself is missing.
    #[snafu(display("no keyword mapping for backend {backend:?}"))]
    UnsupportedBackend { backend: BackendKind },
}
