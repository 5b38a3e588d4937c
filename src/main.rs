/*!
bluedog publishes the Bluetooth device address (BD_ADDR) during early boot.

The vendor provisioning mechanism stores the address as raw bytes inside an
NV file on the persist partition, in reversed byte order.  The Bluetooth HAL
expects to find the address as a colon-separated text line under `/data`.
bluedog reads the raw bytes, swaps them into display order, and writes the
text form where the HAL will look for it.

It runs exactly once per boot, before the Bluetooth stack starts.  Any
failure leaves the destination file untouched and exits non-zero so the
boot-time dependency ordering can react.
*/

mod bdaddr;
mod error;
#[cfg(test)]
mod main_test;

use crate::bdaddr::BdAddr;
use crate::error::Result;
use argh::FromArgs;
use log::debug;
use simplelog::{Config as LogConfig, LevelFilter, SimpleLogger};
use snafu::ResultExt;
use std::path::{Path, PathBuf};
use std::process;

/// Path to the vendor NV file holding the raw address bytes.
const PERSIST_BT_NV_PATH: &str = "/persist/bluetooth/.bt_nv.bin";

/// Path where the Bluetooth HAL reads the textual address.
const DATA_BDADDR_PATH: &str = "/data/misc/bluetooth/bdaddr";

/// Publish the Bluetooth device address for the Bluetooth stack.
#[derive(FromArgs, PartialEq, Debug)]
struct Args {
    /// log-level trace|debug|info|warn|error
    #[argh(option, default = "LevelFilter::Info")]
    log_level: LevelFilter,
    /// path to the vendor NV file
    #[argh(option, default = "PathBuf::from(PERSIST_BT_NV_PATH)")]
    nv_path: PathBuf,
    /// path where the textual address is published
    #[argh(option, default = "PathBuf::from(DATA_BDADDR_PATH)")]
    bdaddr_path: PathBuf,
}

/// Main entry point.
fn run() -> Result<()> {
    let args: Args = argh::from_env();
    SimpleLogger::init(args.log_level, LogConfig::default()).context(error::LoggerSnafu)?;
    publish_bdaddr(&args.nv_path, &args.bdaddr_path)
}

/// Reads the raw address from the NV file and republishes it in display
/// order.  The first failure aborts the pipeline; there are no retries.
// pub(crate) for testing.
pub(crate) fn publish_bdaddr<P1, P2>(nv_path: P1, bdaddr_path: P2) -> Result<()>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let mut addr = BdAddr::read_from_nv(&nv_path)?;
    addr.swap_byte_order();
    debug!(
        "Got BD address from {}: {}",
        nv_path.as_ref().display(),
        addr
    );
    addr.publish(bdaddr_path)
}

// Returning a Result from main makes it print a Debug representation of the error, but with Snafu
// we have nice Display representations of the error, so we wrap "main" (run) and print any error.
// https://github.com/shepmaster/snafu/issues/110
fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        process::exit(1);
    }
}
