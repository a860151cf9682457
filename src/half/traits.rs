//! Implementations of the [`num_traits`] numeric traits, with feature `num-traits`. Conversions
//! out of a half go through `f32` (which is exact) and take on its semantics; conversions in
//! round with the [default policy](crate::DefaultRounding).

use super::*;
use crate::RoundFrom;
use num_traits::{Bounded, FromPrimitive, Num, NumCast, One, ToPrimitive, Zero};

impl Zero for Half {
  #[inline]
  fn zero() -> Self {
    Half::ZERO
  }

  /// `true` for both `+0` and `-0`.
  #[inline]
  fn is_zero(&self) -> bool {
    Half::is_zero(*self)
  }
}

impl One for Half {
  #[inline]
  fn one() -> Self {
    Half::ONE
  }
}

impl Num for Half {
  type FromStrRadixErr = num_traits::ParseFloatError;

  fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
    <f64 as Num>::from_str_radix(str, radix).map(Half::from_f64)
  }
}

impl Bounded for Half {
  #[inline]
  fn min_value() -> Self {
    Half::LOWEST
  }

  #[inline]
  fn max_value() -> Self {
    Half::MAX
  }
}

impl ToPrimitive for Half {
  #[inline]
  fn to_i64(&self) -> Option<i64> {
    Half::to_f32(*self).to_i64()
  }

  #[inline]
  fn to_u64(&self) -> Option<u64> {
    Half::to_f32(*self).to_u64()
  }

  #[inline]
  fn to_i128(&self) -> Option<i128> {
    Half::to_f32(*self).to_i128()
  }

  #[inline]
  fn to_u128(&self) -> Option<u128> {
    Half::to_f32(*self).to_u128()
  }

  #[inline]
  fn to_f32(&self) -> Option<f32> {
    Some(Half::to_f32(*self))
  }

  #[inline]
  fn to_f64(&self) -> Option<f64> {
    Some(Half::to_f64(*self))
  }
}

/// Integers are rounded as exact values (no detour through `f64`), and never fail: values out of
/// range overflow as the default policy dictates.
impl FromPrimitive for Half {
  #[inline]
  fn from_i64(n: i64) -> Option<Self> {
    Some(Half::round_from(n))
  }

  #[inline]
  fn from_u64(n: u64) -> Option<Self> {
    Some(Half::round_from(n))
  }

  #[inline]
  fn from_i128(n: i128) -> Option<Self> {
    Some(Half::round_from(n))
  }

  #[inline]
  fn from_u128(n: u128) -> Option<Self> {
    Some(Half::round_from(n))
  }

  #[inline]
  fn from_f32(n: f32) -> Option<Self> {
    Some(Half::from_f32(n))
  }

  #[inline]
  fn from_f64(n: f64) -> Option<Self> {
    Some(Half::from_f64(n))
  }
}

impl NumCast for Half {
  /// Every integer that `f64` cannot hold exactly is far beyond the finite range of a half, so
  /// going through `f64` never rounds twice.
  #[inline]
  fn from<T: ToPrimitive>(n: T) -> Option<Self> {
    n.to_f64().map(Half::from_f64)
  }
}
