//! Human-readable index labels.

use num_bigint::BigUint;

/// Insert `,` between every group of three digits, counting from the right.
///
/// ```
/// use num_bigint::BigUint;
/// assert_eq!(pwstream::format::group_thousands(&BigUint::from(1234567u32)), "1,234,567");
/// ```
pub fn group_thousands(value: &BigUint) -> String {
    group_digits(&value.to_string())
}

/// Grouping on an already-rendered run of ASCII digits.
pub fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
