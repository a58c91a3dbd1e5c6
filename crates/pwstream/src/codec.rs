//! Bijective numeral codec between global indices and passwords.
//!
//! Passwords are grouped into blocks by length. Block `l` holds every string
//! of exactly `l` symbols, `A^l` of them, where `A` is the alphabet size.
//! Blocks are laid end to end starting at [`MIN_LEN`], so index 1 is the
//! first string of length 8 (`"aaaaaaaa"`), index `A^8 + 1` is the first
//! string of length 9, and so on. Inside a block a string is read as a
//! fixed-width, big-endian base-`A` number whose digit values are alphabet
//! positions.
//!
//! # The `MAX_LEN` boundary
//!
//! Length stops growing at [`MAX_LEN`]. Any index large enough to need a
//! longer string is still rendered with 20 symbols, keeping only the 20 low
//! base-`A` digits, so distinct indices alias onto the same password. Only
//! indices below [`Codec::capacity`] (the total size of blocks 8 through 19)
//! are guaranteed to round-trip. This boundary behavior is intentional and
//! stable; callers that need exactness should check
//! [`Codec::is_exact`] first.

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::trace;

use crate::error::{AlphabetError, FormatError};
use crate::index::GlobalIndex;

/// The standard 88-symbol alphabet. Digit value = position.
pub const ALPHABET: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "!@#$%^&*()-_=+[]{};:,.<>/?",
);

/// Shortest password length.
pub const MIN_LEN: usize = 8;

/// Longest password length.
pub const MAX_LEN: usize = 20;

/// Marks bytes with no digit value in the symbol lookup table.
const NO_DIGIT: u8 = u8::MAX;

/// Immutable index/password translator.
///
/// Everything that depends on the alphabet (the symbol lookup table, every
/// block size, and every block's starting offset) is computed once in the
/// constructor, so `encode` and `decode` only do O(length) big-integer work.
#[derive(Clone, Debug)]
pub struct Codec {
    /// Digit value → ASCII symbol.
    symbols: Vec<u8>,
    /// ASCII symbol → digit value, or `NO_DIGIT`.
    digits: [u8; 128],
    base: BigUint,
    /// `blocks[i]` = `A^(MIN_LEN + i)`.
    blocks: Vec<BigUint>,
    /// `offsets[i]` = number of strings shorter than `MIN_LEN + i`.
    offsets: Vec<BigUint>,
    capacity: BigUint,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec {
    /// Codec over the standard [`ALPHABET`].
    pub fn new() -> Self {
        match Self::with_alphabet(ALPHABET) {
            Ok(codec) => codec,
            Err(e) => unreachable!("standard alphabet is valid: {e}"),
        }
    }

    /// Codec over a custom alphabet.
    ///
    /// Symbols must be distinct ASCII characters, at least two of them.
    /// Their order defines digit values.
    pub fn with_alphabet(alphabet: &str) -> Result<Self, AlphabetError> {
        let mut digits = [NO_DIGIT; 128];
        let mut symbols = Vec::with_capacity(alphabet.len());

        for c in alphabet.chars() {
            if !c.is_ascii() {
                return Err(AlphabetError::NonAscii(c));
            }
            let byte = c as u8;
            if digits[usize::from(byte)] != NO_DIGIT {
                return Err(AlphabetError::Duplicate(c));
            }
            // At most 128 distinct ASCII symbols, so this fits below NO_DIGIT.
            digits[usize::from(byte)] = symbols.len() as u8;
            symbols.push(byte);
        }
        if symbols.len() < 2 {
            return Err(AlphabetError::TooSmall(symbols.len()));
        }

        let base = BigUint::from(symbols.len());
        let mut blocks = Vec::with_capacity(MAX_LEN - MIN_LEN + 1);
        let mut offsets = Vec::with_capacity(MAX_LEN - MIN_LEN + 1);
        let mut block = base.pow(MIN_LEN as u32);
        let mut offset = BigUint::zero();
        for _ in MIN_LEN..=MAX_LEN {
            offsets.push(offset.clone());
            offset += &block;
            blocks.push(block.clone());
            block *= &base;
        }
        let capacity = offsets[MAX_LEN - MIN_LEN].clone();

        Ok(Self {
            symbols,
            digits,
            base,
            blocks,
            offsets,
            capacity,
        })
    }

    /// Number of symbols in the alphabet.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Alphabet symbols in digit order.
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().map(|&b| char::from(b))
    }

    /// Whether `symbol` is part of the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.digit(symbol).is_some()
    }

    /// Number of distinct passwords of length `len`, or `None` outside
    /// `[MIN_LEN, MAX_LEN]`.
    pub fn block_size(&self, len: usize) -> Option<&BigUint> {
        len.checked_sub(MIN_LEN).and_then(|i| self.blocks.get(i))
    }

    /// Total size of blocks `MIN_LEN..MAX_LEN`. Every index strictly below
    /// this value round-trips through `encode`/`decode`.
    pub fn capacity(&self) -> &BigUint {
        &self.capacity
    }

    /// Whether `index` lies inside the guaranteed round-trip range.
    pub fn is_exact(&self, index: &GlobalIndex) -> bool {
        index.value() < &self.capacity
    }

    /// Render the password for `index`.
    pub fn encode(&self, index: &GlobalIndex) -> String {
        let mut n = index.value() - 1u32;
        let mut len = MIN_LEN;
        while len < MAX_LEN {
            let block = &self.blocks[len - MIN_LEN];
            if n < *block {
                break;
            }
            n -= block;
            len += 1;
        }
        self.render(&n, len)
    }

    /// Recover the index of `password`.
    pub fn decode(&self, password: &str) -> Result<GlobalIndex, FormatError> {
        let len = password.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return Err(FormatError::Length {
                len,
                min: MIN_LEN,
                max: MAX_LEN,
            });
        }

        // Horner's method, most significant symbol first.
        let mut n = BigUint::zero();
        for (position, symbol) in password.chars().enumerate() {
            let digit = self
                .digit(symbol)
                .ok_or(FormatError::Symbol { symbol, position })?;
            n *= &self.base;
            n += u32::from(digit);
        }

        let index = &self.offsets[len - MIN_LEN] + n + 1u32;
        trace!(password, %index, "decoded");
        Ok(GlobalIndex::from_nonzero(index))
    }

    fn digit(&self, symbol: char) -> Option<u8> {
        let byte = u8::try_from(symbol).ok().filter(u8::is_ascii)?;
        let digit = self.digits[usize::from(byte)];
        (digit != NO_DIGIT).then_some(digit)
    }

    /// Fixed-width big-endian rendering of `n`. Digits above `width` are
    /// dropped, which is where the `MAX_LEN` aliasing comes from.
    fn render(&self, n: &BigUint, width: usize) -> String {
        let mut out = vec![self.symbols[0]; width];
        // `base()` is in 2..=128, inside `to_radix_le`'s supported range.
        let low_first = n.to_radix_le(self.symbols.len() as u32);
        for (i, digit) in low_first.into_iter().take(width).enumerate() {
            out[width - 1 - i] = self.symbols[usize::from(digit)];
        }
        out.into_iter().map(char::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn idx(n: u64) -> GlobalIndex {
        GlobalIndex::try_from(n).unwrap()
    }

    fn big_idx(n: BigUint) -> GlobalIndex {
        GlobalIndex::try_from(n).unwrap()
    }

    /// (length, digit values) ordering key.
    fn order_key(codec: &Codec, password: &str) -> (usize, Vec<u8>) {
        let digits = password.chars().map(|c| codec.digit(c).unwrap()).collect();
        (password.len(), digits)
    }

    fn pow88(exp: u32) -> BigUint {
        BigUint::from(88u32).pow(exp)
    }

    #[test]
    fn standard_alphabet_shape() {
        let codec = Codec::new();
        assert_eq!(codec.base(), 88);
        let symbols: Vec<char> = codec.alphabet().collect();
        assert_eq!(symbols[0], 'a');
        assert_eq!(symbols[26], 'A');
        assert_eq!(symbols[52], '0');
        assert_eq!(symbols[62], '!');
        assert_eq!(symbols[87], '?');
        assert!(!codec.contains(' '));
        assert!(!codec.contains('~'));
    }

    #[test]
    fn first_indices() {
        let codec = Codec::new();
        assert_eq!(codec.encode(&idx(1)), "aaaaaaaa");
        assert_eq!(codec.encode(&idx(2)), "aaaaaaab");
        assert_eq!(codec.encode(&idx(88)), "aaaaaaa?");
        assert_eq!(codec.encode(&idx(89)), "aaaaaaba");
    }

    #[test]
    fn block_transition_8_to_9() {
        let codec = Codec::new();
        let last_of_8 = big_idx(pow88(8));
        let first_of_9 = last_of_8.next();
        assert_eq!(codec.encode(&last_of_8), "????????");
        assert_eq!(codec.encode(&first_of_9), "aaaaaaaaa");
        assert_eq!(codec.decode("aaaaaaaaa").unwrap(), first_of_9);
    }

    #[test]
    fn block_sizes_and_capacity() {
        let codec = Codec::new();
        assert_eq!(codec.block_size(8), Some(&pow88(8)));
        assert_eq!(codec.block_size(20), Some(&pow88(20)));
        assert_eq!(codec.block_size(7), None);
        assert_eq!(codec.block_size(21), None);

        let expected: BigUint = (8..=19).map(pow88).sum();
        assert_eq!(codec.capacity(), &expected);
    }

    #[test]
    fn round_trips_at_every_block_edge() {
        let codec = Codec::new();
        for len in MIN_LEN..MAX_LEN {
            let start = &codec.offsets[len - MIN_LEN] + 1u32;
            let end = codec.offsets[len - MIN_LEN + 1].clone();
            for value in [start.clone(), &start + 1u32, &end - 1u32, end] {
                let index = big_idx(value);
                let password = codec.encode(&index);
                assert_eq!(password.len(), len, "index {index}");
                assert_eq!(codec.decode(&password).unwrap(), index);
            }
        }
    }

    #[test]
    fn twenty_symbol_block_starts_at_capacity() {
        let codec = Codec::new();
        let below = big_idx(codec.capacity().clone());
        assert_eq!(codec.encode(&below), "?".repeat(19));
        assert!(!codec.is_exact(&below.next()));

        let first_of_20 = below.next();
        assert_eq!(codec.encode(&first_of_20), "a".repeat(20));
        assert_eq!(codec.decode(&"a".repeat(20)).unwrap(), first_of_20);
    }

    #[test]
    fn aliases_past_the_last_block() {
        let codec = Codec::new();
        let first_of_20 = big_idx(codec.capacity() + 1u32);
        let wrapped = big_idx(codec.capacity() + pow88(20) + 1u32);

        let password = codec.encode(&wrapped);
        assert_eq!(password.len(), MAX_LEN);
        assert_eq!(password, codec.encode(&first_of_20));
        assert_ne!(codec.decode(&password).unwrap(), wrapped);
    }

    #[test]
    fn decode_rejects_bad_lengths() {
        let codec = Codec::new();
        for candidate in [String::new(), "abc".into(), "a".repeat(7), "a".repeat(21)] {
            assert!(
                matches!(codec.decode(&candidate), Err(FormatError::Length { .. })),
                "{candidate:?}"
            );
        }
    }

    #[test]
    fn decode_rejects_foreign_symbols() {
        let codec = Codec::new();
        assert_eq!(
            codec.decode("abcd efgh"),
            Err(FormatError::Symbol {
                symbol: ' ',
                position: 4
            })
        );
        assert!(matches!(
            codec.decode("abcdefgé"),
            Err(FormatError::Symbol { symbol: 'é', .. })
        ));
        assert!(matches!(
            codec.decode("abcdefg~"),
            Err(FormatError::Symbol { symbol: '~', .. })
        ));
    }

    #[test]
    fn custom_alphabet() {
        let codec = Codec::with_alphabet("01").unwrap();
        assert_eq!(codec.encode(&idx(1)), "00000000");
        assert_eq!(codec.encode(&idx(256)), "11111111");
        assert_eq!(codec.encode(&idx(257)), "000000000");
        assert_eq!(codec.decode("000000000").unwrap(), idx(257));
    }

    #[test]
    fn invalid_alphabets() {
        assert_eq!(
            Codec::with_alphabet("a").unwrap_err(),
            AlphabetError::TooSmall(1)
        );
        assert_eq!(
            Codec::with_alphabet("aba").unwrap_err(),
            AlphabetError::Duplicate('a')
        );
        assert_eq!(
            Codec::with_alphabet("abé").unwrap_err(),
            AlphabetError::NonAscii('é')
        );
    }

    fn index_below_capacity() -> impl Strategy<Value = GlobalIndex> {
        let capacity = Codec::new().capacity().clone();
        prop::collection::vec(any::<u32>(), 1..=4).prop_map(move |words| {
            let value = BigUint::new(words) % (&capacity - 1u32) + 1u32;
            big_idx(value)
        })
    }

    fn password_below_max_len() -> impl Strategy<Value = String> {
        let alphabet: Vec<char> = ALPHABET.chars().collect();
        prop::collection::vec(0..alphabet.len(), MIN_LEN..MAX_LEN)
            .prop_map(move |digits| digits.into_iter().map(|d| alphabet[d]).collect())
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(index in index_below_capacity()) {
            let codec = Codec::new();
            let password = codec.encode(&index);
            prop_assert!((MIN_LEN..MAX_LEN).contains(&password.len()));
            prop_assert_eq!(codec.decode(&password).unwrap(), index);
        }

        #[test]
        fn prop_encode_inverts_decode(password in password_below_max_len()) {
            let codec = Codec::new();
            let index = codec.decode(&password).unwrap();
            prop_assert_eq!(codec.encode(&index), password);
        }

        #[test]
        fn prop_order_preserved(a in index_below_capacity(), b in index_below_capacity()) {
            prop_assume!(a != b);
            let codec = Codec::new();
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            let lo_key = order_key(&codec, &codec.encode(&lo));
            let hi_key = order_key(&codec, &codec.encode(&hi));
            prop_assert!(lo_key < hi_key);
        }

        #[test]
        fn prop_small_indices_round_trip(n in 1u64..) {
            let codec = Codec::new();
            let index = idx(n);
            prop_assert_eq!(codec.decode(&codec.encode(&index)).unwrap(), index);
        }
    }
}
