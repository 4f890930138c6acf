//! Deserialize a big integer from decimal text or a native integer.

use crate::bigint::BigInt;
use crate::lib::*;
use serde_core::de::{self, Deserialize, Deserializer, Visitor};

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a string of decimal digits")
    }

    #[inline]
    fn visit_i64<E>(self, value: i64) -> result::Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    #[inline]
    fn visit_u64<E>(self, value: u64) -> result::Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    #[inline]
    fn visit_i128<E>(self, value: i128) -> result::Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    #[inline]
    fn visit_u128<E>(self, value: u128) -> result::Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    fn visit_str<E>(self, value: &str) -> result::Result<BigInt, E>
    where
        E: de::Error,
    {
        BigInt::parse(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    #[inline]
    fn deserialize<D>(deserializer: D) -> result::Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor)
    }
}
