//! The `BdAddr` type wraps the raw bytes of a Bluetooth device address and
//! knows how to read them out of the vendor NV file and publish them in the
//! textual form the Bluetooth stack expects.
//!
//! The NV file is in this format:
//! `01 01 06 ff ff 00 2d 65 94` for `94:65:2d:00:ff:ff`; the stored bytes
//! follow three header bytes and are reversed relative to display order.

use crate::error::{self, Result};
use snafu::ResultExt;
use std::fmt;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Length of a Bluetooth device address, in bytes.
const BDADDR_LEN: usize = 6;

/// Byte offset of the address record inside the NV file.
const NV_BDADDR_OFFSET: u64 = 3;

/// A Bluetooth device address (BD_ADDR).
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct BdAddr([u8; BDADDR_LEN]);

impl BdAddr {
    /// Reads the raw address bytes from the NV file on the persist partition.
    pub(crate) fn read_from_nv<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut f = File::open(path).context(error::NvOpenSnafu { path })?;
        Self::from_nv_reader(&mut f)
    }

    /// Reads the address record at its fixed offset from anything readable
    /// and seekable.  A source with fewer than 6 bytes past the offset is an
    /// error, never a partial address.
    fn from_nv_reader<R>(reader: &mut R) -> Result<Self>
    where
        R: Read + Seek,
    {
        reader
            .seek(SeekFrom::Start(NV_BDADDR_OFFSET))
            .context(error::NvSeekSnafu {
                offset: NV_BDADDR_OFFSET,
            })?;
        let mut addr = [0; BDADDR_LEN];
        reader
            .read_exact(&mut addr)
            .context(error::NvReadSnafu { len: BDADDR_LEN })?;
        Ok(Self(addr))
    }

    /// Swaps the byte order in place.  The NV record stores the address
    /// reversed relative to display order; applying this twice restores the
    /// original ordering.
    pub(crate) fn swap_byte_order(&mut self) {
        self.0.reverse();
    }

    /// Writes the address as a single text line to the given path, creating
    /// or truncating the file.  Parent directories are not created; a missing
    /// directory means the environment is misprovisioned and the write fails.
    pub(crate) fn publish<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut f = File::create(path).context(error::BdaddrCreateSnafu { path })?;
        self.write_to(&mut f)
            .context(error::BdaddrWriteSnafu { path })
    }

    // The formatted line is `xx:xx:xx:xx:xx:xx\n`, lowercase, no NUL.
    fn write_to<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        writer.write_all(format!("{}\n", self).as_bytes())
    }
}

impl fmt::Display for BdAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self.0.iter().map(|b| format!("{:02x}", b)).collect();
        write!(f, "{}", groups.join(":"))
    }
}
