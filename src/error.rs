//! Provides the list of errors for `bluedog`.

use snafu::Snafu;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum Error {
    #[snafu(display("Failed to setup logger: {}", source))]
    Logger { source: log::SetLoggerError },

    #[snafu(display("Failed to open NV file '{}': {}", path.display(), source))]
    NvOpen { path: PathBuf, source: io::Error },

    #[snafu(display("Failed to seek to offset {} in NV file: {}", offset, source))]
    NvSeek { offset: u64, source: io::Error },

    #[snafu(display("Failed to read all {} bytes of the BD address: {}", len, source))]
    NvRead { len: usize, source: io::Error },

    #[snafu(display("Failed to open '{}' for writing: {}", path.display(), source))]
    BdaddrCreate { path: PathBuf, source: io::Error },

    #[snafu(display("Failed to write BD address to '{}': {}", path.display(), source))]
    BdaddrWrite { path: PathBuf, source: io::Error },
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
