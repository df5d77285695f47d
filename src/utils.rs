//! Common utility functions shared across the codebase.

/// Checks if a Dart string literal interpolates a value (`$name` or `${expr}`).
///
/// Such a literal builds its key at runtime, so it cannot be matched against
/// the definitions statically.
///
/// # Examples
///
/// ```
/// use textusage::utils::is_interpolated;
///
/// assert!(is_interpolated("item_$id"));
/// assert!(is_interpolated("title_${index + 1}"));
/// assert!(!is_interpolated("hello"));
/// assert!(!is_interpolated("price_usd"));
/// ```
pub fn is_interpolated(text: &str) -> bool {
    text.contains('$')
}

/// Percentage of `part` in `whole`, or 0 when `whole` is zero.
///
/// # Examples
///
/// ```
/// use textusage::utils::percentage;
///
/// assert_eq!(percentage(1, 2), 50.0);
/// assert_eq!(percentage(3, 0), 0.0);
/// ```
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
