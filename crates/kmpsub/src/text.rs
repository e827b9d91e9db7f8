//! Conveniences for narrow (UTF-8) and wide (UTF-16) text.
//!
//! The core routines work on any `&[T]` with `T: PartialEq`, so narrow text is
//! searched as `&[u8]` and wide text as `&[u16]` with the same code.

use alloc::{string::String, vec::Vec};

use bstr::ByteVec;

use crate::{
    error::Result,
    matcher::{count, replace},
};

/// Counts the non-overlapping occurrences of `key` in `text`, by bytes.
///
/// # Errors
///
/// Fails if `key` is empty.
pub fn str_count(text: &str, key: &str) -> Result<usize> {
    count(text.as_bytes(), key.as_bytes())
}

/// Replaces the non-overlapping occurrences of `key` in `text` by `value`.
///
/// Matching happens on UTF-8 bytes. A match of a well-formed key always
/// starts and ends on char boundaries, so splicing in a well-formed value
/// keeps the result well-formed.
///
/// ```rust
/// assert_eq!(kmpsub::str_replace("aNiNib", "Ni", "ü").unwrap(), "aüüb");
/// ```
///
/// # Errors
///
/// Fails if `key` is empty.
pub fn str_replace(text: &str, key: &str, value: &str) -> Result<String> {
    let bytes = replace(text.as_bytes(), key.as_bytes(), value.as_bytes())?;
    Ok(bytes.into_string_lossy())
}

/// Encodes `text` as UTF-16 code units.
#[must_use]
pub fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Decodes UTF-16 code units, replacing unpaired surrogates.
#[must_use]
pub fn narrow(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}

/// Counting and substitution as methods on slices.
///
/// ```rust
/// use kmpsub::{wide, Substitute};
///
/// let text = wide("Ni nI NI nI Ni");
/// assert_eq!(text.count_key(&wide("Ni")).unwrap(), 2);
/// assert_eq!(b"NiNi".replace_key(b"Ni", b"ABC").unwrap(), b"ABCABC");
/// ```
pub trait Substitute<T> {
    /// See [`count`](crate::count).
    ///
    /// # Errors
    ///
    /// Fails if `key` is empty.
    fn count_key(&self, key: &[T]) -> Result<usize>;

    /// See [`replace`](crate::replace).
    ///
    /// # Errors
    ///
    /// Fails if `key` is empty.
    fn replace_key(&self, key: &[T], value: &[T]) -> Result<Vec<T>>;
}

impl<T: PartialEq + Clone> Substitute<T> for [T] {
    #[inline]
    fn count_key(&self, key: &[T]) -> Result<usize> {
        count(self, key)
    }

    #[inline]
    fn replace_key(&self, key: &[T], value: &[T]) -> Result<Vec<T>> {
        replace(self, key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multibyte_keys_stay_char_aligned() {
        assert_eq!(str_count("größer größte", "öß").unwrap(), 2);
        assert_eq!(str_replace("größer größte", "öß", "oess").unwrap(), "groesser groesste");
        assert_eq!(str_replace("日本日本語", "日本", "").unwrap(), "語");
    }

    #[test]
    fn wide_roundtrip() {
        let text = wide("NiNi NI N ni NNi nI Niinii");
        let replaced = text.replace_key(&wide("Ni"), &wide("AB")).unwrap();
        assert_eq!(narrow(&replaced), "ABAB NI N ni NAB nI ABinii");
    }

    #[test]
    fn empty_key_is_an_error_for_every_width() {
        assert!(str_count("abc", "").is_err());
        assert!(str_replace("abc", "", "x").is_err());
        assert!(wide("abc").count_key(&[]).is_err());
    }
}
