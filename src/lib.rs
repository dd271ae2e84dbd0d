pub mod file;
pub mod hash;
pub mod error;

pub use file::{file_checksum, file_checksum_or_empty, reader_checksum, CHUNK_SIZE};
pub use hash::{text_hash, text_hash_utf8};
pub use error::DigestError;
