//! Error types for the codec, the window manager, and input parsing.
//!
//! None of these are fatal. A failed decode means "no such password"; a
//! failed parse or reset leaves the cursor and window untouched.

use thiserror::Error;

/// A candidate string is not a well-formed password.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Symbol count outside `[min, max]`.
    #[error("password must be {min}-{max} symbols long, got {len}")]
    Length { len: usize, min: usize, max: usize },

    /// A character that is not part of the alphabet.
    #[error("unsupported symbol {symbol:?} at position {position}")]
    Symbol { symbol: char, position: usize },
}

/// User-supplied text or a start index was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Not one or more decimal digits after trimming.
    #[error("not a decimal integer: {text:?}")]
    NotANumber { text: String },

    /// Zero or negative.
    #[error("expected a positive integer")]
    NotPositive,
}

/// The symbol set handed to [`Codec::with_alphabet`](crate::codec::Codec::with_alphabet)
/// cannot serve as a digit alphabet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("alphabet needs at least 2 symbols, got {0}")]
    TooSmall(usize),

    #[error("alphabet symbol {0:?} is not ASCII")]
    NonAscii(char),

    #[error("alphabet symbol {0:?} appears more than once")]
    Duplicate(char),
}
