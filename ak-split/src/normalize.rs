//! Diacritic- and case-insensitive text comparison.
//!
//! Station names on the website are Croatian. Search input is usually typed
//! without diacritics, so both sides are reduced to a comparable form before
//! matching.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Reduce text to its comparable form.
///
/// Lowercases, trims, spells `đ` as `dj` (it has no canonical
/// decomposition) and strips every other diacritical mark.
///
/// # Examples
///
/// ```
/// use ak_split::normalize::normalize;
///
/// assert_eq!(normalize(" Čakovec "), "cakovec");
/// assert_eq!(normalize("Đurđevac"), "djurdjevac");
/// ```
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .replace('đ', "dj")
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    folded.trim().to_string()
}

/// Fuzzy match user input against an already normalized candidate.
///
/// The query is normalized, then every one of its characters must appear in
/// the candidate in order. Contiguous substrings are the tightest case. An
/// empty query matches everything.
///
/// ```
/// use ak_split::normalize::{matches, normalize};
///
/// let name = normalize("Šibenik");
/// assert!(matches("sib", &name));
/// assert!(matches("SBNK", &name));
/// assert!(!matches("split", &name));
/// ```
pub fn matches(query: &str, normalized_candidate: &str) -> bool {
    let needle = normalize(query);
    let mut haystack = normalized_candidate.chars();
    needle.chars().all(|n| haystack.any(|h| h == n))
}
