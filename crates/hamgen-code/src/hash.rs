use hamgen_core::HamgenError;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::codebook::Codebook;
use crate::serde::to_canonical_json_bytes;

/// Computes the canonical structural hash of a codebook.
///
/// Covers the width and the ordered little-endian bytes of every codeword, so two
/// codebooks hash equal exactly when they hold the same words in the same order.
pub fn canonical_codebook_hash(codebook: &Codebook) -> String {
    let mut hasher = Sha256::new();
    hasher.update(u64::from(codebook.width()).to_le_bytes());
    hasher.update((codebook.len() as u64).to_le_bytes());
    for word in codebook.words() {
        let bytes = word.value().to_bytes_le();
        hasher.update((bytes.len() as u64).to_le_bytes());
        hasher.update(&bytes);
    }
    format!("{:x}", hasher.finalize())
}

/// Computes a stable SHA256 hash for the provided serializable value.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, HamgenError> {
    let bytes = to_canonical_json_bytes(value)?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}
