//! The 1-based global index that addresses one password in the stream.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::InputError;

/// An arbitrary-precision positive integer. Zero is unrepresentable.
///
/// Serialized as a decimal string, since most indices past the first
/// block already exceed what JSON numbers can carry exactly.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlobalIndex(BigUint);

impl GlobalIndex {
    /// Wrap `value`, or `None` if it is zero.
    pub fn new(value: BigUint) -> Option<Self> {
        if value.is_zero() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Index 1, the first password in the stream.
    pub fn first() -> Self {
        Self(BigUint::one())
    }

    /// Caller guarantees `value` is non-zero.
    pub(crate) fn from_nonzero(value: BigUint) -> Self {
        debug_assert!(!value.is_zero());
        Self(value)
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// The index immediately after this one.
    pub fn next(&self) -> Self {
        Self(&self.0 + 1u32)
    }
}

impl fmt::Display for GlobalIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<GlobalIndex> for BigUint {
    fn from(index: GlobalIndex) -> Self {
        index.0
    }
}

impl TryFrom<u64> for GlobalIndex {
    type Error = InputError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(BigUint::from(value)).ok_or(InputError::NotPositive)
    }
}

impl TryFrom<BigUint> for GlobalIndex {
    type Error = InputError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InputError::NotPositive)
    }
}

impl TryFrom<&BigInt> for GlobalIndex {
    type Error = InputError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        match value.sign() {
            Sign::Plus => Ok(Self(value.magnitude().clone())),
            Sign::Minus | Sign::NoSign => Err(InputError::NotPositive),
        }
    }
}

/// Strict parse: one or more ASCII digits, nothing else, value > 0.
///
/// Whitespace is *not* trimmed here; see
/// [`parse_positive_integer`](crate::lookup::parse_positive_integer).
impl FromStr for GlobalIndex {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotANumber { text: s.to_string() });
        }
        let value = BigUint::parse_bytes(s.as_bytes(), 10).ok_or_else(|| InputError::NotANumber {
            text: s.to_string(),
        })?;
        Self::try_from(value)
    }
}

impl Serialize for GlobalIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GlobalIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
