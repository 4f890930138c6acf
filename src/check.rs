//! Support for tests that check big integers against expected decimal text.
//!
//! ```edition2021
//! use bigint_core::{check, BigInt};
//!
//! let got = BigInt::from(41);
//! let mismatch = check::expect_decimal(&got, "42").unwrap_err();
//! assert_eq!(mismatch.to_string(), "Expected:\n\t42\nGot:\n\t41");
//! ```

use crate::bigint::BigInt;
use crate::lib::*;
#[cfg(feature = "std")]
use std::error;

/// A big integer that did not have the expected value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    expected: String,
    got: String,
}

impl Mismatch {
    /// The expected text, exactly as given.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The decimal form of the value that was checked.
    pub fn got(&self) -> &str {
        &self.got
    }
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Expected:\n\t{}\nGot:\n\t{}", self.expected, self.got)
    }
}

#[cfg(feature = "std")]
impl error::Error for Mismatch {}

/// Checks that `got` equals the integer written in `expected`.
///
/// The comparison is by value, so `"-0"` or `"007"` match as well as their
/// canonical forms. Text that does not parse never matches.
///
/// # Errors
///
/// Returns the [`Mismatch`] when the values differ.
pub fn expect_decimal(got: &BigInt, expected: &str) -> result::Result<(), Mismatch> {
    match got.compare_str(expected) {
        Ok(Ordering::Equal) => Ok(()),
        _ => Err(Mismatch {
            expected: String::from(expected),
            got: got.to_decimal_string(),
        }),
    }
}
