use sha2::{Digest, Sha256};

// @module: Content fingerprints for change detection

/// Length of a rendered fingerprint in hex characters
pub const FINGERPRINT_LEN: usize = 64;

/// Compute the SHA256 fingerprint of a document as lowercase hex
pub fn compute(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
