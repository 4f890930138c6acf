//! Three-way comparison of big integers, and of big integers against native
//! integers and decimal text.

use crate::bigint::BigInt;
use crate::error::Result;
use crate::lib::*;
use crate::math::{large, small, split_u64, Limb};
use crate::sign::Sign;

/// Compare two signed magnitudes.
///
/// Signs decide first; zero is always positive, so two zeros never differ
/// here. With equal signs the magnitudes are compared, and the verdict is
/// flipped for negatives.
fn compare_signed(x_sign: Sign, x: &[Limb], y_sign: Sign, y: &[Limb]) -> Ordering {
    match (x_sign, y_sign) {
        (Sign::Positive, Sign::Negative) => Ordering::Greater,
        (Sign::Negative, Sign::Positive) => Ordering::Less,
        (Sign::Positive, Sign::Positive) => large::compare(x, y),
        (Sign::Negative, Sign::Negative) => large::compare(x, y).reverse(),
    }
}

impl BigInt {
    /// Three-way comparison by signed value.
    ///
    /// ```edition2021
    /// use bigint_core::BigInt;
    /// use std::cmp::Ordering;
    ///
    /// # fn main() -> bigint_core::Result<()> {
    /// let x = BigInt::parse("-5")?;
    /// assert_eq!(x.compare(&BigInt::parse("3")?), Ordering::Less);
    /// # Ok(())
    /// # }
    /// ```
    pub fn compare(&self, other: &BigInt) -> Ordering {
        compare_signed(self.sign(), self.magnitude(), other.sign(), other.magnitude())
    }

    /// Compares against the native value `magnitude` with the given sign.
    ///
    /// The limbs of the native value are laid out on the stack and go through
    /// the same comparison as two big integers. A zero magnitude compares as
    /// zero regardless of `sign`.
    pub fn compare_u64(&self, magnitude: u64, sign: Sign) -> Ordering {
        let limbs = split_u64(magnitude);
        let limbs = &limbs[..small::normalized_len(&limbs)];
        let sign = if magnitude == 0 { Sign::Positive } else { sign };
        compare_signed(self.sign(), self.magnitude(), sign, limbs)
    }

    /// Compares against the integer written in `text`.
    ///
    /// # Errors
    ///
    /// Fails if `text` is not a signed decimal integer.
    pub fn compare_str(&self, text: &str) -> Result<Ordering> {
        let other = BigInt::parse(text)?;
        Ok(self.compare(&other))
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &BigInt) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign().hash(state);
        self.magnitude().hash(state);
    }
}

macro_rules! impl_cmp_unsigned {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for BigInt {
                fn eq(&self, other: &$ty) -> bool {
                    self.compare_u64(*other as u64, Sign::Positive) == Ordering::Equal
                }
            }

            impl PartialOrd<$ty> for BigInt {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    Some(self.compare_u64(*other as u64, Sign::Positive))
                }
            }
        )*
    };
}

macro_rules! impl_cmp_signed {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for BigInt {
                fn eq(&self, other: &$ty) -> bool {
                    self.partial_cmp(other) == Some(Ordering::Equal)
                }
            }

            impl PartialOrd<$ty> for BigInt {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    let sign = Sign::of(*other < 0);
                    Some(self.compare_u64(other.unsigned_abs() as u64, sign))
                }
            }
        )*
    };
}

impl_cmp_unsigned!(u8 u16 u32 u64 usize);
impl_cmp_signed!(i8 i16 i32 i64 isize);
