use super::*;
use crate::round::{DefaultRounding, Rounding};

/// Used to do value-to-value conversions between [`Half`] and the native arithmetic types, which
/// may *round* the input according to a [rounding policy](crate::round). It is the reciprocal of
/// [`RoundInto`].
///
/// The interface is like the standard [`From`], but unlike the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not necessarily lossless_: a value that does not fit is rounded with policy
/// `R` in [`round_from_with`](Self::round_from_with), or with [`DefaultRounding`] in
/// [`round_from`](Self::round_from).
///
/// The implementations form a closed set: one side is always [`Half`], and the other is a native
/// float (`f32`, `f64`), a native integer, [`F80`](crate::F80) (with feature `extended`), or
/// [`Half`] itself (a no-op). Anything else does not compile.
///
/// # Rounding
///
///   - Floats → `Half`: rounded as described in [`Half::from_f64_with`].
///   - Integers → `Half`: the exact integer is rounded; integers beyond the finite range overflow
///     as the policy dictates (to infinity or to [`Half::MAX`]).
///   - `Half` → floats: always exact, the policy is irrelevant.
///   - `Half` → integers: rounded to an integer per the policy, then *saturated* at the bounds of
///     the integer type. NaN gives the bound on the side of its sign bit.
///
/// # Examples
///
/// ```
/// # use soft_half::*;
/// assert_eq!(Half::round_from_with::<ToNearest>(3.14159265358979_f64).to_bits(), 0x4248);
/// assert_eq!(Half::round_from_with::<TowardZero>(100_000_u32), Half::MAX);
/// assert_eq!(i32::round_from_with::<TowardNegInfinity>(Half::from_f32(-2.5)), -3);
/// assert_eq!(u8::round_from(Half::from_f32(-7.)), 0);
/// assert_eq!(f64::round_from(Half::MIN_POSITIVE_SUBNORMAL), 2f64.powi(-24));
/// ```
pub trait RoundFrom<T>: Sized {
  /// Converts to this type from the input type, rounding with policy `R` if necessary.
  #[must_use]
  fn round_from_with<R: Rounding>(value: T) -> Self;

  /// Converts to this type from the input type, rounding with the [default
  /// policy](DefaultRounding) if necessary.
  #[must_use]
  #[inline]
  fn round_from(value: T) -> Self {
    Self::round_from_with::<DefaultRounding>(value)
  }
}

/// Used to do value-to-value conversions between [`Half`] and the native arithmetic types, which
/// may *round* the input according to a [rounding policy](crate::round). It is the reciprocal of
/// [`RoundFrom`], and implemented for every type for which the reverse [`RoundFrom`] is; see
/// there for the semantics.
///
/// # Examples
///
/// ```
/// # use soft_half::*;
/// let x: Half = 1.0004883_f64.round_into_with::<ToNearest>();
/// assert_eq!(x, Half::ONE.next_up());
/// let n: i64 = Half::MAX.round_into();
/// assert_eq!(n, 65504);
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) output type, rounding with policy `R` if
  /// necessary.
  #[must_use]
  fn round_into_with<R: Rounding>(self) -> T;

  /// Converts this type into the (usually inferred) output type, rounding with the [default
  /// policy](DefaultRounding) if necessary.
  #[must_use]
  fn round_into(self) -> T;
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  #[inline]
  fn round_into_with<R: Rounding>(self) -> U {
    U::round_from_with::<R>(self)
  }

  #[inline]
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

impl RoundFrom<Half> for Half {
  /// The identity: converting a half to a half never rounds.
  #[inline]
  fn round_from_with<R: Rounding>(value: Half) -> Self {
    value
  }
}

/// Convert `value` to `T`, where one of the two is [`Half`] and the other a native arithmetic
/// type (or both are [`Half`]), rounding with the [default policy](DefaultRounding). See
/// [`RoundFrom`] for the semantics.
///
/// ```
/// # use soft_half::{Half, half_cast};
/// let x: Half = half_cast(2.5_f32);
/// assert_eq!(half_cast::<f64, _>(x), 2.5);
/// assert_eq!(half_cast::<i16, _>(Half::INFINITY), i16::MAX);
/// ```
#[inline]
pub fn half_cast<T, U: RoundInto<T>>(value: U) -> T {
  value.round_into()
}

/// As [`half_cast`], but rounding with policy `R`.
///
/// ```
/// # use soft_half::{Half, half_cast_with, TowardInfinity, TowardZero};
/// let third = 1. / 3.;
/// assert_eq!(half_cast_with::<Half, TowardZero, _>(third).to_bits(), 0x3555);
/// assert_eq!(half_cast_with::<Half, TowardInfinity, _>(third).to_bits(), 0x3556);
/// assert_eq!(half_cast_with::<u32, TowardInfinity, _>(Half::from_f32(0.25)), 1);
/// ```
#[inline]
pub fn half_cast_with<T, R: Rounding, U: RoundInto<T>>(value: U) -> T {
  value.round_into_with::<R>()
}

mod float;
mod int;


/// Rejected conversions: neither side is a half, or the other side is not a native arithmetic
/// type.
mod tests_compile_fail {
  /// ```compile_fail
  /// use soft_half::half_cast;
  /// pub fn foo() -> f32 { half_cast::<f32, _>(1.0_f64) }
  /// ```
  #[allow(dead_code)]
  fn cast_fail_float_to_float() {}

  /// ```compile_fail
  /// use soft_half::half_cast;
  /// pub fn foo() -> i32 { half_cast::<i32, _>(1_u8) }
  /// ```
  #[allow(dead_code)]
  fn cast_fail_int_to_int() {}

  /// ```compile_fail
  /// use soft_half::{Half, half_cast};
  /// pub fn foo() -> Half { half_cast::<Half, _>("1.0") }
  /// ```
  #[allow(dead_code)]
  fn cast_fail_str() {}

  /// ```compile_fail
  /// use soft_half::{Half, half_cast};
  /// pub fn foo() -> char { half_cast::<char, _>(Half::ONE) }
  /// ```
  #[allow(dead_code)]
  fn cast_fail_char() {}

  /// ```compile_fail
  /// use soft_half::{Half, half_cast};
  /// pub fn foo() -> Half { half_cast::<Half, _>(true) }
  /// ```
  #[allow(dead_code)]
  fn cast_fail_bool() {}

  /// ```compile_fail
  /// use soft_half::{Half, half_cast_with};
  /// pub fn foo() -> Half { half_cast_with::<Half, u8, _>(1.0_f32) }
  /// ```
  #[allow(dead_code)]
  fn cast_fail_not_a_policy() {}
}
