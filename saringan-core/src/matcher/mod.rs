//! Term matching primitives.
//!
//! * `compiler` turns a lexicon into one case-insensitive regex per term and caches the result.
//! * `word_boundary` enforces the whole-word rule on top of raw regex hits.
//! * `mask` implements the length-based masking rule used during redaction.

pub mod compiler;
pub mod mask;
pub mod word_boundary;
