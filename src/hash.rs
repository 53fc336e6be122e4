//! BLAKE3 content checksums for global component IDs

use blake3::Hasher;

/// Calculate the BLAKE3 checksum of a data blob, as lowercase hex
pub fn checksum_bytes(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Extend a previous checksum with more data.
///
/// The result is `hash(previous ++ data)`, where `previous` is the hex form of
/// the earlier checksum. Order matters: chaining A then B differs from B then A.
pub fn chain_checksum(previous: &str, data: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(previous.as_bytes());
    hasher.update(data);
    hasher.finalize().to_hex().to_string()
}
