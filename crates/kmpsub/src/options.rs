/// Configuration for [`Matcher::substitute`](crate::Matcher::substitute) and
/// [`substitute`](crate::substitute).
///
/// # Examples
///
/// ```rust
/// use kmpsub::{Matcher, ReplaceOptions};
///
/// let matcher = Matcher::new(b"Ni").unwrap();
/// let out = matcher.substitute(b"NiNiNi", b"AB", ReplaceOptions { limit: Some(2) });
/// assert_eq!(out.text, b"ABABNi");
/// assert_eq!(out.replacements, 2);
/// ```
///
/// # Default
///
/// Every occurrence is replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceOptions {
    /// Replace at most this many occurrences, leftmost first.
    ///
    /// Occurrences past the limit are copied through unchanged, in the same
    /// way as `str::replacen`.
    ///
    /// # Default
    ///
    /// `None` (no limit)
    pub limit: Option<usize>,
}

/// Configuration for [`Matcher::count_with`](crate::Matcher::count_with).
///
/// # Default
///
/// Occurrences are counted without overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountOptions {
    /// Whether occurrences may share elements.
    ///
    /// When `false`, a match consumes its elements and the next match can only
    /// start after it, which is the set of occurrences a substitution
    /// replaces. When `true`, the key cursor resumes from the key's longest
    /// border after each match, so `"aa"` occurs twice in `"aaa"`.
    ///
    /// # Default
    ///
    /// `false`
    pub overlapping: bool,
}
