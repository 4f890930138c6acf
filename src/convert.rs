//! Conversions between big integers, decimal text, and native integers.

use crate::bigint::BigInt;
use crate::error::{Error, ErrorCode, Result};
use crate::lib::*;
use crate::math::{small, split_u128, split_u64, Limb, DIGITS_PER_LIMB, LIMB_BITS, POW10_LIMB};
use crate::sign::Sign;

// PARSING
// -------

/// Split `text` into its sign and digit bytes, checking every byte.
///
/// Returns the sign, the digits, and the byte offset the digits start at.
fn split_digits(text: &str) -> Result<(Sign, &[u8], usize)> {
    let bytes = text.as_bytes();
    let (sign, offset) = match bytes.first() {
        None => return Err(Error::syntax(ErrorCode::EmptyInput, 0)),
        Some(b'-') => (Sign::Negative, 1),
        Some(_) => (Sign::Positive, 0),
    };

    let digits = &bytes[offset..];
    if digits.is_empty() {
        return Err(Error::syntax(ErrorCode::MissingDigits, offset));
    }
    if let Some(position) = digits.iter().position(|b| !b.is_ascii_digit()) {
        let index = offset + position;
        // Everything before `index` is ASCII, so it is a char boundary.
        let c = text[index..].chars().next().unwrap_or_default();
        return Err(Error::syntax(ErrorCode::InvalidDigit(c), index));
    }
    Ok((sign, digits, offset))
}

impl BigInt {
    /// Parses an optionally negative decimal integer.
    ///
    /// The text is a `-` or nothing, followed by one or more ASCII digits.
    /// Leading zeros are allowed and `-0` is zero. Digits are folded in nine
    /// at a time, as `x = x * 10^9 + chunk`, in a single pass over the
    /// limbs.
    ///
    /// ```edition2021
    /// use bigint_core::BigInt;
    ///
    /// # fn main() -> bigint_core::Result<()> {
    /// let x = BigInt::parse("-000123456789012345678901234567890")?;
    /// assert_eq!(x.to_string(), "-123456789012345678901234567890");
    ///
    /// let err = BigInt::parse("-").unwrap_err();
    /// assert!(err.is_format());
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails on empty text, on a lone `-`, or on any character that is not a
    /// decimal digit. The error's [`index`](Error::index) is the byte offset
    /// of the problem.
    pub fn parse(text: &str) -> Result<Self> {
        let (sign, digits, _) = split_digits(text)?;

        // Each limb holds more than nine digits, so this is always enough.
        let mut out = BigInt::with_capacity(digits.len() / DIGITS_PER_LIMB + 1)?;
        for chunk in digits.chunks(DIGITS_PER_LIMB) {
            let value = chunk
                .iter()
                .fold(0, |acc: Limb, &b| acc * 10 + Limb::from(b - b'0'));
            out.imul_add_small(POW10_LIMB[chunk.len()], value)?;
        }
        out.set_sign(sign);
        out.normalize();
        Ok(out)
    }

    /// Replaces the value with the integer written in `text`.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse). The value is left unchanged on error.
    pub fn set_str(&mut self, text: &str) -> Result<()> {
        let parsed = BigInt::parse(text)?;
        self.copy_from(&parsed)
    }

    /// Fused `self = |self| * y + z`, keeping the sign.
    fn imul_add_small(&mut self, y: Limb, z: Limb) -> Result<()> {
        let len = self.len();
        let buf = self.buffer_for(len + 1)?;
        let carry = small::imul_add(&mut buf[..len], y, z);
        if carry != 0 {
            buf[len] = carry;
            self.set_len(len + 1);
        }
        Ok(())
    }
}

// FORMATTING
// ----------

impl BigInt {
    /// Decimal digits of the magnitude, most significant first.
    fn decimal_digits(&self) -> String {
        let magnitude = self.magnitude();
        if let [lo, hi @ ..] = magnitude {
            if hi.len() <= 1 {
                let hi = hi.first().copied().unwrap_or(0);
                let value = (u64::from(hi) << LIMB_BITS) | u64::from(*lo);
                let mut buffer = itoa::Buffer::new();
                return buffer.format(value).to_string();
            }
        }

        // Short-divide a scratch copy by 10 until nothing is left, one digit
        // per pass, least significant digit first.
        let mut scratch = magnitude.to_vec();
        let mut len = scratch.len();
        let mut digits = Vec::with_capacity(len * 10);
        loop {
            let rem = small::idiv(&mut scratch[..len], 10);
            digits.push(b'0' + rem as u8);
            len = small::normalized_len(&scratch[..len]);
            if len == 1 && scratch[0] == 0 {
                break;
            }
        }
        digits.iter().rev().map(|&d| char::from(d)).collect()
    }

    /// The value in decimal, with a leading `-` when negative.
    ///
    /// Zero is always `"0"`. This is the exact inverse of
    /// [`parse`](Self::parse) on canonical text.
    pub fn to_decimal_string(&self) -> String {
        let digits = self.decimal_digits();
        if self.is_negative() {
            let mut out = String::with_capacity(digits.len() + 1);
            out.push('-');
            out.push_str(&digits);
            out
        } else {
            digits
        }
    }

    /// Raw dump of the limb bits, for diagnostics.
    ///
    /// Each active limb is written as 32 binary digits, most significant limb
    /// first. This is the storage layout, not a base-2 numeral: there is no
    /// sign, and leading zero bits within the top limb are kept.
    ///
    /// ```edition2021
    /// use bigint_core::BigInt;
    ///
    /// let x = BigInt::from(-((1i64 << 32) + 5));
    /// assert_eq!(
    ///     x.to_binary_string(),
    ///     "0000000000000000000000000000000100000000000000000000000000000101",
    /// );
    /// ```
    pub fn to_binary_string(&self) -> String {
        let magnitude = self.magnitude();
        let mut out = String::with_capacity(magnitude.len() * LIMB_BITS);
        for limb in magnitude.iter().rev() {
            for shift in (0..LIMB_BITS).rev() {
                out.push(if (limb >> shift) & 1 == 1 { '1' } else { '0' });
            }
        }
        out
    }

    /// The value as a `u128`, if it is non-negative and fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.is_negative() {
            return None;
        }
        self.magnitude_u128()
    }

    /// The value as an `i128`, if it fits.
    pub fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude_u128()?;
        if self.is_negative() {
            // `i128::MIN` has no positive counterpart, negate in two's
            // complement instead.
            if magnitude > i128::MAX as u128 + 1 {
                None
            } else {
                Some((magnitude as i128).wrapping_neg())
            }
        } else {
            i128::try_from(magnitude).ok()
        }
    }

    fn magnitude_u128(&self) -> Option<u128> {
        let magnitude = self.magnitude();
        if magnitude.len() > 4 {
            return None;
        }
        Some(
            magnitude
                .iter()
                .rev()
                .fold(0, |acc, &limb| (acc << LIMB_BITS) | u128::from(limb)),
        )
    }
}

impl Display for BigInt {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.pad_integral(!self.is_negative(), "", &self.decimal_digits())
    }
}

impl str::FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::parse(s)
    }
}

// NATIVE INTEGERS
// ---------------

macro_rules! impl_from_unsigned {
    ($($ty:ty => $split:ident,)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(n: $ty) -> Self {
                    BigInt::from_parts(&$split(n.into()), Sign::Positive)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($ty:ty => $split:ident,)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(n: $ty) -> Self {
                    BigInt::from_parts(&$split(n.unsigned_abs().into()), Sign::of(n < 0))
                }
            }
        )*
    };
}

impl_from_unsigned! {
    u8 => split_u64,
    u16 => split_u64,
    u32 => split_u64,
    u64 => split_u64,
    u128 => split_u128,
}

impl_from_signed! {
    i8 => split_u64,
    i16 => split_u64,
    i32 => split_u64,
    i64 => split_u64,
    i128 => split_u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_small() {
        let x = BigInt::parse("4294967296").unwrap();
        assert_eq!(x.limbs(), [0, 1]);
        assert!(!x.is_negative());

        let x = BigInt::parse("-1").unwrap();
        assert_eq!(x.limbs(), [1]);
        assert!(x.is_negative());
    }

    #[test]
    fn parse_chunk_boundaries() {
        // 9, 10, 18 and 19 digits straddle the nine-digit fold.
        for text in ["999999999", "1000000000", "999999999999999999", "1000000000000000000"] {
            assert_eq!(BigInt::parse(text).unwrap().to_decimal_string(), text);
        }
    }

    #[test]
    fn parse_sizes_capacity_up_front() {
        let text = "9".repeat(200);
        let x = BigInt::parse(&text).unwrap();
        assert_eq!(x.capacity(), 200 / DIGITS_PER_LIMB + 1);
        assert_eq!(x.to_decimal_string(), text);
    }

    #[test]
    fn parse_errors() {
        let err = BigInt::parse("").unwrap_err();
        assert_eq!(*err.code(), ErrorCode::EmptyInput);
        assert_eq!(err.index(), 0);

        let err = BigInt::parse("-").unwrap_err();
        assert_eq!(*err.code(), ErrorCode::MissingDigits);
        assert_eq!(err.index(), 1);

        let err = BigInt::parse("12a").unwrap_err();
        assert_eq!(*err.code(), ErrorCode::InvalidDigit('a'));
        assert_eq!(err.index(), 2);

        let err = BigInt::parse("--5").unwrap_err();
        assert_eq!(*err.code(), ErrorCode::InvalidDigit('-'));
        assert_eq!(err.index(), 1);

        let err = BigInt::parse("+5").unwrap_err();
        assert_eq!(*err.code(), ErrorCode::InvalidDigit('+'));
        assert_eq!(err.index(), 0);

        let err = BigInt::parse("1é").unwrap_err();
        assert_eq!(*err.code(), ErrorCode::InvalidDigit('é'));
        assert_eq!(err.index(), 1);

        assert!(BigInt::parse(" 1").is_err());
        assert!(BigInt::parse("1 ").is_err());
    }

    #[test]
    fn set_str_keeps_value_on_error() {
        let mut x = BigInt::from(77);
        assert!(x.set_str("7x").is_err());
        assert_eq!(x.to_decimal_string(), "77");
        x.set_str("-12345678901234567890").unwrap();
        assert_eq!(x.to_decimal_string(), "-12345678901234567890");
    }

    #[test]
    fn decimal_long_path() {
        // 2^96, three limbs, past the itoa fast path.
        let x = BigInt::from_parts(&[0, 0, 0, 1], Sign::Negative);
        assert_eq!(x.to_decimal_string(), "-79228162514264337593543950336");
    }

    #[test]
    fn display_pads() {
        let x = BigInt::from(-42);
        assert_eq!(format!("{:>6}", x), "   -42");
        assert_eq!(format!("{:06}", x), "-00042");
        assert_eq!(format!("{:+}", BigInt::from(7u8)), "+7");
    }

    #[test]
    fn binary_dump() {
        assert_eq!(BigInt::new().to_binary_string(), "0".repeat(32));
        let x = BigInt::from(u64::MAX);
        assert_eq!(x.to_binary_string(), "1".repeat(64));
    }

    #[test]
    fn native_round_trip() {
        for n in [0i128, 1, -1, i64::MIN as i128, u64::MAX as i128, i128::MAX, i128::MIN] {
            assert_eq!(BigInt::from(n).to_i128(), Some(n));
        }
        assert_eq!(BigInt::from(u128::MAX).to_u128(), Some(u128::MAX));
        assert_eq!(BigInt::from(u128::MAX).to_i128(), None);
        assert_eq!(BigInt::from(-1).to_u128(), None);
        assert_eq!(BigInt::parse("340282366920938463463374607431768211456").unwrap().to_u128(), None);
    }
}
