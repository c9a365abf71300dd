use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Device string does not name a known device kind.
    #[snafu(display("invalid device: {device}"))]
    InvalidDevice { device: String },
}
