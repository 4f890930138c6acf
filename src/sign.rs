//! The sign of a big integer.

use crate::lib::*;

/// Sign of a [`BigInt`](crate::BigInt).
///
/// Zero is always `Positive`; there is no negative zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum Sign {
    /// Strictly less than zero.
    Negative = -1,
    /// Zero or greater.
    #[default]
    Positive = 1,
}

impl Sign {
    /// `-1` or `+1`.
    #[inline]
    pub const fn signum(self) -> i8 {
        self as i8
    }

    /// Returns true for `Sign::Negative`.
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }

    #[inline]
    pub(crate) const fn of(negative: bool) -> Self {
        if negative {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

impl ops::Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl ops::Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, rhs: Sign) -> Sign {
        Sign::of(self != rhs)
    }
}
