/// Asserts that a [`BigInt`](crate::BigInt) equals the integer written in a
/// decimal string.
///
/// On failure, panics with the expected text and the actual value:
///
/// ```text
/// Expected:
///     <expected>
/// Got:
///     <got>
/// ```
///
/// ```edition2021
/// use bigint_core::{assert_decimal, BigInt};
///
/// let x = BigInt::from(u64::MAX) * BigInt::from(u64::MAX);
/// assert_decimal!(x, "340282366920938463426481119284349108225");
/// ```
#[macro_export]
macro_rules! assert_decimal {
    ($got:expr, $expected:expr $(,)?) => {
        if let ::core::result::Result::Err(mismatch) =
            $crate::check::expect_decimal(&$got, $expected)
        {
            ::core::panic!("{}", mismatch);
        }
    };
}
