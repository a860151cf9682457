#![cfg_attr(not(test), no_std)]
//! This crate provides a correct, bit-exact, `no_std` software implementation of the IEEE 754
//! [binary16](https://en.wikipedia.org/wiki/Half-precision_floating-point_format) ("half
//! precision") floating point format.
//!
//! # Introduction
//!
//! A [`Half`] is 16 bits: 1 sign bit, 5 exponent bits, and 10 mantissa bits, with the usual IEEE
//! special values (signed zeros, subnormals, infinities, quiet and signaling NaNs). It is a
//! storage format first: arithmetic is carried out by widening to the working precision (`f64`),
//! computing there, and narrowing back.
//!
//! What this crate takes care of is the narrowing. Every conversion that may lose precision is
//! generic over a [rounding policy](round), a zero-sized type picked at compile time:
//!
//!   - [`Indeterminate`]: truncate, overflowing to infinity (cheapest).
//!   - [`TowardZero`], [`TowardInfinity`], [`TowardNegInfinity`]: the directed roundings.
//!   - [`ToNearest`]: round to nearest, with ties to even (or away from zero, see
//!     [`TIES_TO_EVEN`]).
//!
//! Operations without an explicit policy use [`DefaultRounding`], which is selected by Cargo
//! feature.
//!
//! # Usage
//!
//! ```
//! use soft_half::{Half, half, half_cast, RoundFrom, ToNearest, TowardZero};
//!
//! // Create halves from IEEE floats, ints, strings, literals, constants, or raw bits.
//! let a = Half::from_f32(2.5);
//! let b = Half::round_from_with::<ToNearest>(1000_i32);
//! let c: Half = "0.1".parse().unwrap();
//! let d = half!(3.14159265358979);
//! let e = Half::from_bits(0x3c00);
//! assert_eq!(d.to_bits(), 0x4248);
//! assert_eq!(e, Half::ONE);
//!
//! // Perform arithmetic and comparisons with the usual operators.
//! assert!(a + Half::ONE == Half::from_f32(3.5));
//! assert!(c < a && b > a);
//! assert!(Half::NAN != Half::NAN);
//!
//! // Convert back to floats (exactly) or ints (rounding and saturating).
//! assert_eq!(f64::from(a), 2.5);
//! assert_eq!(i32::round_from_with::<TowardZero>(a), 2);
//! let n: u8 = half_cast(Half::from_f32(1e4));
//! assert_eq!(n, 255);
//! ```
//!
//! # Features
//!
//!   - `ties-to-even` (default): [`ToNearest`] breaks ties to the even pattern, rather than away
//!     from zero.
//!   - `round-to-nearest`, `round-toward-zero`, `round-toward-infinity`,
//!     `round-toward-neg-infinity`: select [`DefaultRounding`]. With none, it is
//!     [`Indeterminate`].
//!   - `extended` (default): the x87 80-bit [`F80`] format and its conversions.
//!   - `num-traits`: implementations of the [`num-traits`](https://docs.rs/num-traits) traits.
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

mod half;
pub mod round;
mod underlying;
mod utl;

pub use half::Half;
pub use half::convert::{RoundFrom, RoundInto, half_cast, half_cast_with};
pub use round::{
  DefaultRounding,
  Indeterminate,
  RoundStyle,
  Rounding,
  TIES_TO_EVEN,
  ToNearest,
  TowardInfinity,
  TowardNegInfinity,
  TowardZero,
};
pub use underlying::Int;

/// The 80-bit x87 extended precision format, with feature `extended`.
#[cfg(feature = "extended")]
mod extended;

#[cfg(feature = "extended")]
pub use extended::F80;

/// A [`Half`] from a float literal, rounded to nearest at compile time.
///
/// The literal is first read as an `f64` by the compiler, so there are two roundings; see
/// [`FromStr for Half`](Half#impl-FromStr-for-Half).
///
/// ```
/// # use soft_half::{Half, half};
/// const TENTH: Half = half!(0.1);
/// assert_eq!(TENTH.to_bits(), 0x2e66);
/// assert_eq!(half!(-65504.).to_bits(), 0xfbff);
/// assert_eq!(half!(1e10), Half::INFINITY);
/// ```
#[macro_export]
macro_rules! half {
  ($lit:literal) => {{
    const H: $crate::Half = $crate::Half::from_f64_with::<$crate::ToNearest>($lit);
    H
  }};
}

/// Number of cases per proptest.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x10_0000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;
