//! Share-slug rules.
//!
//! A survey is shared through a short random slug drawn from a fixed
//! alphanumeric alphabet. Candidate generation lives in the application
//! layer; this module owns the alphabet, length, and validity rules.

/// Alphabet slugs are drawn from: upper, lower, digits (62 symbols).
pub const SLUG_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Fixed slug length.
pub const SLUG_LEN: usize = 8;

/// Check whether a string is a well-formed slug.
pub fn is_valid_slug(slug: &str) -> bool {
    slug.len() == SLUG_LEN && slug.bytes().all(|b| SLUG_ALPHABET.contains(&b))
}
