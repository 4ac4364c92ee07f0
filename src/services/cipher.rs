//! Caesar shift cipher
//!
//! A fixed-offset code-point substitution. Reversible, deterministic, and
//! not cryptographically meaningful.

use thiserror::Error;

/// Default shift offset when none is configured
pub const DEFAULT_SHIFT: i32 = 3;

/// Errors produced by the cipher
///
/// A shift can push a character outside the space of valid Unicode scalar
/// values (negative, the surrogate range, or above `U+10FFFF`). Such input
/// is rejected rather than wrapped around, so a successful encrypt always
/// decrypts back to the original.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Shifting the character produced an invalid code point
    #[error("character {ch:?} shifted by {offset} is not a valid character")]
    Unrepresentable {
        /// The input character that could not be shifted
        ch: char,
        /// The offset that was applied
        offset: i32,
    },
}

/// Shift cipher service
///
/// Stateless apart from the immutable offset fixed at construction time.
/// Safe to share across tasks without synchronization.
#[derive(Debug, Clone)]
pub struct ShiftCipher {
    shift: i32,
}

impl ShiftCipher {
    /// Create a cipher with the given shift offset
    pub fn new(shift: i32) -> Self {
        Self { shift }
    }

    /// The configured shift offset
    pub fn shift(&self) -> i32 {
        self.shift
    }

    /// Shift every character forward by the configured offset
    ///
    /// Preserves character order and count exactly. Fails if any shifted
    /// code point is not a valid character.
    pub fn encrypt(&self, input: &str) -> Result<String, CipherError> {
        self.transform(input, self.shift)
    }

    /// Shift every character backward by the configured offset
    ///
    /// Inverse of [`encrypt`](Self::encrypt) for any string it accepts.
    pub fn decrypt(&self, input: &str) -> Result<String, CipherError> {
        self.transform(input, -self.shift)
    }

    fn transform(&self, input: &str, offset: i32) -> Result<String, CipherError> {
        input.chars().map(|ch| shift_char(ch, offset)).collect()
    }
}

impl Default for ShiftCipher {
    fn default() -> Self {
        Self::new(DEFAULT_SHIFT)
    }
}

fn shift_char(ch: char, offset: i32) -> Result<char, CipherError> {
    let shifted = ch as i64 + i64::from(offset);
    u32::try_from(shifted)
        .ok()
        .and_then(char::from_u32)
        .ok_or(CipherError::Unrepresentable { ch, offset })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_shifts_ascii() {
        let cipher = ShiftCipher::default();
        assert_eq!(cipher.encrypt("abc").unwrap(), "def");
        assert_eq!(cipher.encrypt("Hello, World!").unwrap(), "Khoor/#Zruog$");
    }

    #[test]
    fn test_decrypt_is_inverse() {
        let cipher = ShiftCipher::default();
        assert_eq!(cipher.decrypt("def").unwrap(), "abc");

        for input in ["abc", "Hello, World!", "çüé", "日本語", "  spaced  "] {
            let encrypted = cipher.encrypt(input).unwrap();
            assert_eq!(cipher.decrypt(&encrypted).unwrap(), input);
        }
    }

    #[test]
    fn test_length_preserved() {
        let cipher = ShiftCipher::default();
        for input in ["a", "abcdef", "日本語テキスト"] {
            let encrypted = cipher.encrypt(input).unwrap();
            assert_eq!(encrypted.chars().count(), input.chars().count());
        }
    }

    #[test]
    fn test_custom_shift() {
        let cipher = ShiftCipher::new(5);
        assert_eq!(cipher.encrypt("abc").unwrap(), "fgh");
        assert_eq!(cipher.decrypt("fgh").unwrap(), "abc");

        // Zero shift is the identity
        let identity = ShiftCipher::new(0);
        assert_eq!(identity.encrypt("abc").unwrap(), "abc");
    }

    #[test]
    fn test_encrypt_rejects_overflow_past_char_max() {
        let cipher = ShiftCipher::default();
        let result = cipher.encrypt("\u{10FFFF}");
        assert_eq!(
            result.unwrap_err(),
            CipherError::Unrepresentable {
                ch: '\u{10FFFF}',
                offset: 3,
            }
        );
    }

    #[test]
    fn test_shift_into_surrogate_range_rejected() {
        let cipher = ShiftCipher::default();
        // U+E000 - 3 lands in the surrogate range
        let result = cipher.decrypt("\u{E000}");
        assert!(matches!(
            result,
            Err(CipherError::Unrepresentable { ch: '\u{E000}', .. })
        ));
    }

    #[test]
    fn test_decrypt_rejects_underflow_below_zero() {
        let cipher = ShiftCipher::default();
        let result = cipher.decrypt("\u{0}");
        assert!(result.is_err());
    }

    #[test]
    fn test_error_reports_offending_character() {
        let cipher = ShiftCipher::default();
        let err = cipher.encrypt("ok\u{10FFFF}").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("not a valid character"), "got: {}", message);
    }
}
