//! Content digest used to name saved exchanges.
//!
//! SHA-1 is used for addressing only (identical content lands on the same
//! path), not for integrity or security.

use sha1::{Digest, Sha1};

/// Hash `parts` as one contiguous stream and return the digest as lowercase hex.
pub fn sha1_hex<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut hasher = Sha1::new();
    for part in parts {
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}
