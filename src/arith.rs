//! Sign-aware addition, subtraction, negation and multiplication.

use crate::bigint::BigInt;
use crate::error::Result;
use crate::lib::*;
use crate::math::{large, Limb};
use crate::sign::Sign;
use crate::store::LimbStore;

impl BigInt {
    /// Flips the sign. Zero stays positive.
    pub fn negate(&mut self) {
        if !self.is_zero() {
            let sign = -self.sign();
            self.set_sign(sign);
        }
    }

    /// `self += rhs`.
    ///
    /// # Errors
    ///
    /// Fails if either operand was released, or if `self` needs to grow and
    /// the allocation fails. `self` is unchanged on error.
    pub fn add(&mut self, rhs: &BigInt) -> Result<()> {
        rhs.check_live()?;
        self.add_signed(rhs.limbs(), rhs.sign())
    }

    /// `self -= rhs`.
    ///
    /// Adds the magnitude of `rhs` with its sign flipped; `rhs` itself is
    /// not copied.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn sub(&mut self, rhs: &BigInt) -> Result<()> {
        rhs.check_live()?;
        self.add_signed(rhs.limbs(), -rhs.sign())
    }

    /// `self *= rhs`.
    ///
    /// The product is built in a scratch buffer, then copied back, so the
    /// operand limbs are never read after being overwritten.
    ///
    /// # Errors
    ///
    /// Fails if either operand was released, or if the scratch buffer or
    /// `self` cannot be allocated. `self` is unchanged on error.
    pub fn mul(&mut self, rhs: &BigInt) -> Result<()> {
        self.check_live()?;
        rhs.check_live()?;
        if self.is_zero() || rhs.is_zero() {
            self.set_zero();
            return Ok(());
        }

        let mut scratch = LimbStore::zeroed(self.len() + rhs.len())?;
        let len = large::mul(scratch.as_mut_slice(), self.limbs(), rhs.limbs());
        let sign = self.sign() * rhs.sign();

        let buf = self.buffer_for(len)?;
        buf[..len].copy_from_slice(&scratch.as_slice()[..len]);
        self.set_len(len);
        self.set_sign(sign);
        self.normalize();
        Ok(())
    }

    /// `self + rhs` as a new value.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn checked_add(&self, rhs: &BigInt) -> Result<BigInt> {
        let mut out = self.duplicate()?;
        out.add(rhs)?;
        Ok(out)
    }

    /// `self - rhs` as a new value.
    ///
    /// # Errors
    ///
    /// Same as [`sub`](Self::sub).
    pub fn checked_sub(&self, rhs: &BigInt) -> Result<BigInt> {
        let mut out = self.duplicate()?;
        out.sub(rhs)?;
        Ok(out)
    }

    /// `self * rhs` as a new value.
    ///
    /// # Errors
    ///
    /// Same as [`mul`](Self::mul).
    pub fn checked_mul(&self, rhs: &BigInt) -> Result<BigInt> {
        let mut out = self.duplicate()?;
        out.mul(rhs)?;
        Ok(out)
    }

    /// Fallible deep copy sized to the active limbs.
    fn duplicate(&self) -> Result<BigInt> {
        self.check_live()?;
        let mut out = BigInt::with_capacity(self.len())?;
        out.copy_from(self)?;
        Ok(out)
    }

    /// Adds the magnitude `y` carrying sign `y_sign`.
    ///
    /// With equal signs the magnitudes add. Otherwise the smaller magnitude
    /// comes off the larger one and the result takes the larger one's sign,
    /// so equal magnitudes cancel to a positive zero.
    fn add_signed(&mut self, y: &[Limb], y_sign: Sign) -> Result<()> {
        self.check_live()?;
        let xlen = self.len();
        if self.sign() == y_sign {
            // Room for the final carry up front, so a failed allocation
            // cannot leave a half-written sum behind.
            let buf = self.buffer_for(xlen.max(y.len()) + 1)?;
            let len = large::iadd(buf, xlen, y);
            self.set_len(len);
        } else if large::compare(self.limbs(), y) == Ordering::Less {
            let buf = self.buffer_for(y.len())?;
            let len = large::rsub(buf, xlen, y);
            self.set_len(len);
            self.set_sign(y_sign);
        } else {
            let buf = self.buffer_for(xlen)?;
            let len = large::isub(buf, xlen, y);
            self.set_len(len);
        }
        self.normalize();
        Ok(())
    }
}

// OPERATORS
// ---------

#[track_caller]
fn or_panic(result: Result<()>) {
    if let Err(err) = result {
        panic!("{}", err);
    }
}

macro_rules! impl_binop {
    ($Op:ident $op:ident, $OpAssign:ident $op_assign:ident, $method:ident) => {
        impl<'a> ops::$OpAssign<&'a BigInt> for BigInt {
            #[track_caller]
            fn $op_assign(&mut self, rhs: &'a BigInt) {
                or_panic(BigInt::$method(self, rhs));
            }
        }

        impl ops::$OpAssign<BigInt> for BigInt {
            #[track_caller]
            fn $op_assign(&mut self, rhs: BigInt) {
                or_panic(BigInt::$method(self, &rhs));
            }
        }

        impl<'a> ops::$Op<&'a BigInt> for BigInt {
            type Output = BigInt;

            #[track_caller]
            fn $op(mut self, rhs: &'a BigInt) -> BigInt {
                or_panic(BigInt::$method(&mut self, rhs));
                self
            }
        }

        impl ops::$Op<BigInt> for BigInt {
            type Output = BigInt;

            #[track_caller]
            fn $op(mut self, rhs: BigInt) -> BigInt {
                or_panic(BigInt::$method(&mut self, &rhs));
                self
            }
        }

        impl<'a, 'b> ops::$Op<&'b BigInt> for &'a BigInt {
            type Output = BigInt;

            #[track_caller]
            fn $op(self, rhs: &'b BigInt) -> BigInt {
                let mut out = self.clone();
                or_panic(BigInt::$method(&mut out, rhs));
                out
            }
        }

        impl<'a> ops::$Op<BigInt> for &'a BigInt {
            type Output = BigInt;

            #[track_caller]
            fn $op(self, rhs: BigInt) -> BigInt {
                let mut out = self.clone();
                or_panic(BigInt::$method(&mut out, &rhs));
                out
            }
        }
    };
}

impl_binop!(Add add, AddAssign add_assign, add);
impl_binop!(Sub sub, SubAssign sub_assign, sub);
impl_binop!(Mul mul, MulAssign mul_assign, mul);

impl ops::Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl<'a> ops::Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let mut out = self.clone();
        out.negate();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(limbs: &[Limb], sign: Sign) -> BigInt {
        BigInt::from_parts(limbs, sign)
    }

    #[test]
    fn add_carries_into_new_limb() {
        let mut x = big(&[Limb::MAX, Limb::MAX], Sign::Positive);
        x.add(&big(&[1], Sign::Positive)).unwrap();
        assert_eq!(x.limbs(), [0, 0, 1]);
    }

    #[test]
    fn add_mixed_signs_takes_larger_sign() {
        let mut x = big(&[5], Sign::Negative);
        x.add(&big(&[3], Sign::Positive)).unwrap();
        assert_eq!(x.limbs(), [2]);
        assert!(x.is_negative());

        let mut x = big(&[3], Sign::Negative);
        x.add(&big(&[0, 1], Sign::Positive)).unwrap();
        assert_eq!(x.limbs(), [Limb::MAX - 2]);
        assert_eq!(x.sign(), Sign::Positive);
    }

    #[test]
    fn add_opposite_is_positive_zero() {
        let mut x = big(&[1, 2, 3], Sign::Negative);
        x.add(&big(&[1, 2, 3], Sign::Positive)).unwrap();
        assert!(x.is_zero());
        assert_eq!(x.len(), 1);
        assert_eq!(x.sign(), Sign::Positive);
    }

    #[test]
    fn sub_borrows_across_limbs() {
        let mut x = big(&[0, 0, 1], Sign::Positive);
        x.sub(&big(&[1], Sign::Positive)).unwrap();
        assert_eq!(x.limbs(), [Limb::MAX, Limb::MAX]);
    }

    #[test]
    fn sub_from_zero() {
        let mut x = BigInt::new();
        x.sub(&big(&[7, 1], Sign::Positive)).unwrap();
        assert_eq!(x.limbs(), [7, 1]);
        assert!(x.is_negative());
    }

    #[test]
    fn mul_signs() {
        let mut x = big(&[6], Sign::Negative);
        x.mul(&big(&[7], Sign::Negative)).unwrap();
        assert_eq!(x.limbs(), [42]);
        assert_eq!(x.sign(), Sign::Positive);

        x.mul(&big(&[Limb::MAX], Sign::Negative)).unwrap();
        assert_eq!(x.limbs(), [Limb::MAX - 41, 41]);
        assert!(x.is_negative());
    }

    #[test]
    fn mul_by_zero_is_positive_zero() {
        let mut x = big(&[1, 2, 3, 4], Sign::Negative);
        x.mul(&BigInt::new()).unwrap();
        assert!(x.is_zero());
        assert_eq!(x.sign(), Sign::Positive);
        assert_eq!(x.capacity(), 4);
    }

    #[test]
    fn negate_zero_stays_positive() {
        let mut x = BigInt::new();
        x.negate();
        assert_eq!(x.sign(), Sign::Positive);

        let mut x = big(&[1], Sign::Positive);
        x.negate();
        assert!(x.is_negative());
        x.negate();
        assert!(!x.is_negative());
    }

    #[test]
    fn released_operand() {
        let mut gone = big(&[1], Sign::Positive);
        gone.release();
        let mut x = big(&[2], Sign::Positive);
        assert!(x.add(&gone).unwrap_err().is_null());
        assert!(x.sub(&gone).unwrap_err().is_null());
        assert!(x.mul(&gone).unwrap_err().is_null());
        assert!(gone.add(&x).unwrap_err().is_null());
        assert_eq!(x.limbs(), [2]);
    }

    #[test]
    fn operators() {
        let a = big(&[10], Sign::Positive);
        let b = big(&[4], Sign::Negative);
        assert_eq!((&a + &b).limbs(), [6]);
        assert_eq!((&a - &b).limbs(), [14]);
        assert_eq!((&a * &b).limbs(), [40]);
        assert!((&a * &b).is_negative());
        assert!((-&a).is_negative());

        let mut c = a.clone();
        c += &b;
        c *= b;
        assert_eq!(c.limbs(), [24]);
        assert!(c.is_negative());
    }

    #[test]
    #[should_panic(expected = "operand has been released")]
    fn operator_on_released_panics() {
        let mut gone = BigInt::new();
        gone.release();
        let _ = BigInt::new() + gone;
    }
}
