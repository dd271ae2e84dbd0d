use log::{debug, warn};
use md5::{Digest, Md5};
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use crate::error::DigestError;

/// Number of bytes fed into the MD5 accumulator per read.
pub const CHUNK_SIZE: usize = 8192;

/// Reads `reader` to the end in `CHUNK_SIZE` pieces, updating `hasher` as it goes.
///
/// On error the hasher keeps every chunk read before the failure.
fn feed<R: Read>(hasher: &mut Md5, mut reader: R) -> io::Result<u64> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
        total += n as u64;
    }
    Ok(total)
}

/// Computes the lowercase hex MD5 of everything `reader` yields.
pub fn reader_checksum<R: Read>(reader: R) -> Result<String, DigestError> {
    let mut hasher = Md5::new();
    let total = feed(&mut hasher, reader)?;
    let checksum = format!("{:x}", hasher.finalize());

    debug!("MD5 over {} bytes is {}", total, checksum);
    Ok(checksum)
}

/// Hex MD5 of what `reader` yields before it ends or fails.
fn partial_checksum<R: Read>(reader: R) -> String {
    let mut hasher = Md5::new();
    if let Err(e) = feed(&mut hasher, reader) {
        warn!("Read failed part way, hashing partial data: {}", e);
    }
    format!("{:x}", hasher.finalize())
}

/// Computes the MD5 checksum of the file at `path`, streaming it in
/// `CHUNK_SIZE` chunks.
///
/// Returns `DigestError::Io` if the file cannot be opened or read; inspect the
/// inner error's `kind()` to tell `NotFound` from `PermissionDenied`.
pub fn file_checksum<P: AsRef<Path>>(path: P) -> Result<String, DigestError> {
    let path = path.as_ref();
    debug!("Computing MD5 checksum for file: {:?}", path);

    let file = File::open(path)?;
    let checksum = reader_checksum(file)?;

    debug!("MD5 checksum for file={:?} is {}", path, checksum);
    Ok(checksum)
}

/// Computes the MD5 checksum of the file at `path`, never failing.
///
/// A file that cannot be opened hashes as zero bytes, giving
/// `d41d8cd98f00b204e9800998ecf8427e`. A read error part way through finalizes
/// whatever was read before it. Both cases are logged at `warn`.
pub fn file_checksum_or_empty<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    debug!("Computing lenient MD5 checksum for file: {:?}", path);

    let checksum = match File::open(path) {
        Ok(file) => partial_checksum(file),
        Err(e) => {
            warn!("Could not open {:?}, hashing as empty input: {}", path, e);
            partial_checksum(io::empty())
        }
    };

    debug!("Lenient MD5 checksum for file={:?} is {}", path, checksum);
    checksum
}
