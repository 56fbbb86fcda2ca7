// saringan-core/src/matcher/mask.rs
//! Length-based masking of matched surface text.

use crate::config::EngineOptions;

/// Masks the first `masked_prefix_len` characters of `surface` and keeps the rest
/// unchanged, case included. A surface no longer than the prefix is masked entirely.
///
/// Lengths are counted in characters, not bytes.
pub fn mask_surface(surface: &str, options: &EngineOptions) -> String {
    let masked = surface.chars().count().min(options.masked_prefix_len);
    let mut out = String::with_capacity(surface.len());
    out.extend(std::iter::repeat(options.mask_char).take(masked));
    out.extend(surface.chars().skip(masked));
    out
}
