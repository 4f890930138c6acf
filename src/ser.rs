//! Serialize a big integer as its decimal string.

use crate::bigint::BigInt;
use crate::lib::*;
use serde_core::ser::{Serialize, Serializer};

impl Serialize for BigInt {
    /// Written as a decimal string, so no precision is lost in formats
    /// whose native numbers are bounded.
    #[inline]
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_decimal_string())
    }
}
