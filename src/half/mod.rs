//! This module and its submodules contain a software implementation of the IEEE 754 binary16
//! ("half precision") floating point type.
//!
//! The conversion code is documented in some detail: the interesting part of a software float is
//! not the arithmetic (which we delegate to the host's `f64`) but getting every rounding decision
//! bit-exact, and that lives in [`decode`](self::decode) and [`encode`](self::encode).
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit N-1**: numbered least significant to most significant, starts at 0.
//!   - **ULP**: unit in the last place, the distance between a value and its successor.

/// An IEEE 754 binary16 floating point number.
///
/// The representation is exactly the 16-bit pattern:
///
/// ```text
///   bit 15    | bits 14..10                 | bits 9..0
///   sign      | biased exponent (bias 15)   | mantissa
/// ```
///
/// Arithmetic is carried out by widening to the working precision ([`f64`]), computing there, and
/// narrowing back with the [default rounding policy](crate::DefaultRounding).
///
/// ```
/// # use soft_half::*;
/// let a = Half::from_f32(2.5);
/// let b = Half::from_bits(0x3c00);  // 1.0
/// assert_eq!(f32::from(a + b), 3.5);
/// assert!(Half::NAN != Half::NAN);
/// ```
///
/// Mixing in an `f32` or `f64` keeps the result in that type, so a chain is narrowed only once:
///
/// ```
/// # use soft_half::*;
/// let tiny = Half::from_bits(0x1000);  // 2^-11
/// let mut acc = Half::ONE;
/// acc += f64::from(tiny) + tiny;
/// assert_eq!(acc.to_bits(), 0x3c01);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default)]
pub struct Half(u16);

/// A finite, nonzero value unpacked into sign, exponent and a normalised significand. This is the
/// common currency of the conversion engine: every wide format decodes into an `Unpacked`, and
/// every narrowing encodes one.
///
/// The value represented is
///
/// ```text
///   (-1)^sign × sig / 2^63 × 2^exp
/// ```
///
/// that is, `sig` is a fixed-point number with the binary point just right of bit 63, and the
/// leading 1 (bit 63) is always set.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unpacked {
  /// `true` if negative.
  pub sign: bool,
  /// Unbiased exponent.
  pub exp: i32,
  /// Significand, with the leading 1 at bit 63.
  pub sig: u64,
}

/// Basics
mod basics;

/// Constants (zero, infinity, epsilon, etc) and numeric limits.
mod consts;

/// Debug, Display, parsing.
mod fmt;

/// Widening: [`Half`] and wide formats into [`Unpacked`], and [`Half`] into wide formats.
mod decode;

/// Narrowing: [`Unpacked`] into [`Half`], with rounding.
mod encode;

/// Classification predicates.
mod classify;

/// frexp, ldexp, nextafter, and friends.
mod manip;

/// Comparison, equality, hashing.
mod cmp;

/// Negation, absolute value, increment and decrement.
mod unary;

/// Arithmetic operators.
mod ops;

/// Mathematical functions.
mod math;

/// Conversions and the cast facade.
pub(crate) mod convert;

/// [`num_traits`] implementations.
#[cfg(feature = "num-traits")]
mod traits;

/// Exact rational oracle, for testing.
#[cfg(test)]
mod rational;
