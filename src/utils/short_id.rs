//! Random short identifier generation.
//!
//! Identifiers are sampled uniformly from the 62-symbol alphanumeric
//! alphabet. Global uniqueness is not guaranteed here; the storage layer's
//! unique index is the authority, and the write path retries on collision.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Default identifier length used when none is configured.
pub const DEFAULT_SHORT_ID_LENGTH: usize = 8;

/// Generates a random short identifier of the given length.
///
/// Each character is drawn independently and uniformly from `A-Za-z0-9`
/// (62 symbols), sampling with replacement. At the default length of 8 the
/// per-pair collision probability is ~1/62^8, which is acceptable for
/// moderate write volumes but not cryptographically unguessable.
///
/// Pure function of the process RNG; no side effects.
///
/// # Examples
///
/// ```
/// use shortlink::utils::short_id::generate_short_id;
///
/// let id = generate_short_id(8);
/// assert_eq!(id.len(), 8);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_short_id(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
