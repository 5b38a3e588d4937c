use crate::error::Error;
use crate::publish_bdaddr;
use hex_literal::hex;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// NV file layout used by the vendor provisioning mechanism: three header
// bytes, then the six address bytes in reversed order.
const NV_CONTENTS: [u8; 9] = hex!("00 00 00 94 65 2d 00 ff ff");

// create the path to the NV file in the tempdir
fn nv_path(tempdir: &TempDir) -> PathBuf {
    tempdir.path().join("bt_nv.bin")
}

// create the path to the published address in the tempdir
fn bdaddr_path(tempdir: &TempDir) -> PathBuf {
    tempdir.path().join("bdaddr")
}

// create an NV file in the tempdir with the given contents and return its path
fn create_nv_file(tempdir: &TempDir, contents: &[u8]) -> PathBuf {
    let path = nv_path(tempdir);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn published_address_is_display_order_text() {
    let t = TempDir::new().unwrap();
    let nv = create_nv_file(&t, &NV_CONTENTS);
    let out = bdaddr_path(&t);
    publish_bdaddr(&nv, &out).unwrap();
    assert_eq!(fs::read(&out).unwrap(), b"ff:ff:00:2d:65:94\n");
}

#[test]
/// assert that re-running over an unchanged NV file produces byte-identical
/// output both times
fn republishing_is_idempotent() {
    let t = TempDir::new().unwrap();
    let nv = create_nv_file(&t, &NV_CONTENTS);
    let out = bdaddr_path(&t);
    publish_bdaddr(&nv, &out).unwrap();
    let first = fs::read(&out).unwrap();
    publish_bdaddr(&nv, &out).unwrap();
    assert_eq!(fs::read(&out).unwrap(), first);
}

#[test]
/// assert that a truncated NV file fails the pipeline before anything is
/// published
fn short_nv_file_publishes_nothing() {
    let t = TempDir::new().unwrap();
    let nv = create_nv_file(&t, &NV_CONTENTS[..7]);
    let out = bdaddr_path(&t);
    assert!(matches!(
        publish_bdaddr(&nv, &out),
        Err(Error::NvRead { .. })
    ));
    assert!(!out.exists());
}

#[test]
/// assert that a missing NV file leaves a pre-existing published address
/// untouched
fn missing_nv_file_leaves_existing_bdaddr_untouched() {
    let t = TempDir::new().unwrap();
    let out = bdaddr_path(&t);
    fs::write(&out, "00:00:00:00:00:00\n").unwrap();
    assert!(matches!(
        publish_bdaddr(nv_path(&t), &out),
        Err(Error::NvOpen { .. })
    ));
    assert_eq!(fs::read(&out).unwrap(), b"00:00:00:00:00:00\n");
}

#[test]
/// assert that the failure happens at the write step, after a successful
/// read and swap, when the destination directory does not exist
fn missing_destination_directory_fails_the_write() {
    let t = TempDir::new().unwrap();
    let nv = create_nv_file(&t, &NV_CONTENTS);
    let out = t.path().join("missing").join("bdaddr");
    assert!(matches!(
        publish_bdaddr(&nv, &out),
        Err(Error::BdaddrCreate { .. })
    ));
}
