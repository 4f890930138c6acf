//! # bigint_core
//!
//! Arbitrary-precision signed integers stored as little-endian runs of 32-bit
//! limbs.
//!
//! ```edition2021
//! use bigint_core::BigInt;
//!
//! # fn main() -> bigint_core::Result<()> {
//! let mut x = BigInt::parse("999999999999999999")?;
//! x.add(&BigInt::from(1u64))?;
//! assert_eq!(x.to_decimal_string(), "1000000000000000000");
//!
//! x.mul(&BigInt::parse("-3")?)?;
//! assert_eq!(x.to_string(), "-3000000000000000000");
//! # Ok(())
//! # }
//! ```
//!
//! # Representation
//!
//! A [`BigInt`] owns a buffer of [`Limb`]s, least-significant first, plus a
//! count of active limbs and a [`Sign`]. Every operation leaves the value
//! normalized: there is never a most-significant zero limb, and zero is always
//! stored as a single `0` limb with a positive sign, so `-0` cannot exist.
//!
//! Operations mutate their target in place and borrow their operands. A
//! target's buffer grows by doubling when it runs out of room and is never
//! shrunk, which keeps iterative loops whose values oscillate in size from
//! reallocating over and over.
//!
//! ```edition2021
//! use bigint_core::BigInt;
//!
//! # fn main() -> bigint_core::Result<()> {
//! let mut acc = BigInt::with_capacity(8)?;
//! let step = BigInt::parse("18446744073709551616")?;
//! for _ in 0..4 {
//!     acc.add(&step)?;
//! }
//! acc.sub(&step)?;
//! assert_eq!(acc, BigInt::parse("55340232221128654848")?);
//! assert_eq!(acc.capacity(), 8);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Nothing here panics on bad input. Parsing reports where the text went
//! wrong, and a failed allocation leaves the target exactly as it was:
//!
//! ```edition2021
//! use bigint_core::BigInt;
//!
//! let err = BigInt::parse("12x4").unwrap_err();
//! assert!(err.is_format());
//! assert_eq!(err.index(), 2);
//! ```
//!
//! The operator traits (`+`, `-`, `*`, unary `-`) are provided for
//! convenience and panic where the named methods would return an error, in the
//! same way `Vec` aborts when it cannot grow.
//!
//! # No-std support
//!
//! As long as there is a memory allocator, it is possible to use this crate
//! without the rest of the Rust standard library. Disable the default "std"
//! feature and enable the "alloc" feature:
//!
//! ```toml
//! [dependencies]
//! bigint_core = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```

#![doc(html_root_url = "https://docs.rs/bigint_core/0.1.0")]
// Ignored clippy lints
#![allow(
    // Limb counts are always far below the range where these casts lose bits.
    clippy::cast_possible_truncation,
    clippy::comparison_chain,
    // A big integer is never empty; `len` counts limbs.
    clippy::len_without_is_empty,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
)]
#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("bigint_core requires that either `std` (default) or `alloc` feature is enabled");

extern crate alloc;

/// A facade around all the types we need from the `std`, `core`, and `alloc`
/// crates. This avoids elaborate import wrangling having to happen in every
/// module.
mod lib {
    pub use core::cmp::Ordering;
    pub use core::fmt::{self, Debug, Display};
    pub use core::hash::{Hash, Hasher};
    pub use core::{mem, ops, result, str};

    pub use alloc::boxed::Box;
    pub use alloc::collections::TryReserveError;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec::Vec;
}

#[macro_use]
mod macros;

mod arith;
mod bigint;
pub mod check;
mod cmp;
mod convert;
mod de;
pub mod error;
mod math;
mod ser;
mod sign;
mod store;

pub use crate::bigint::BigInt;
#[doc(inline)]
pub use crate::error::{Error, Result};
pub use crate::math::{Limb, Wide};
pub use crate::sign::Sign;
