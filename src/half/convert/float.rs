use super::*;

impl Half {
  /// Convert an `f32` to a half, rounding with policy `R`.
  ///
  ///   - Infinities and zeros convert to infinities and zeros of the same sign.
  ///   - NaNs convert to *quiet* NaNs of the same sign, keeping the 9 highest bits of the payload
  ///     (the 10th being the quiet bit).
  ///   - Values too large in magnitude overflow to infinity, or to [`MAX`](Self::MAX), as the
  ///     policy dictates; values too small underflow to subnormals or zero of the same sign.
  ///   - Otherwise, the value is rounded to 11 significant bits.
  ///
  /// ```
  /// # use soft_half::{Half, ToNearest, TowardInfinity};
  /// assert_eq!(Half::from_f32_with::<ToNearest>(f32::INFINITY).to_bits(), 0x7c00);
  /// assert_eq!(Half::from_f32_with::<ToNearest>(65519.).to_bits(), 0x7bff);
  /// assert_eq!(Half::from_f32_with::<ToNearest>(65520.).to_bits(), 0x7c00);
  /// assert_eq!(Half::from_f32_with::<TowardInfinity>(1e-10).to_bits(), 0x0001);
  /// ```
  #[inline]
  pub const fn from_f32_with<R: Rounding>(value: f32) -> Self {
    let bits = value.to_bits() as u64;
    let sign = bits >> 31 != 0;
    Self::narrow_ieee::<R>(sign, bits & !(1 << 31), f32::MANTISSA_DIGITS - 1, 8)
  }

  /// Convert an `f64` to a half, rounding with policy `R`. The rules are the same as for
  /// [`from_f32_with`](Self::from_f32_with).
  ///
  /// ```
  /// # use soft_half::{Half, ToNearest, TowardZero};
  /// assert_eq!(Half::from_f64_with::<ToNearest>(3.14159265358979).to_bits(), 0x4248);
  /// assert_eq!(Half::from_f64_with::<TowardZero>(1e300).to_bits(), 0x7bff);
  /// assert_eq!(Half::from_f64_with::<ToNearest>(-1e300).to_bits(), 0xfc00);
  /// assert_eq!(Half::from_f64_with::<ToNearest>(-0.).to_bits(), 0x8000);
  /// ```
  #[inline]
  pub const fn from_f64_with<R: Rounding>(value: f64) -> Self {
    let bits = value.to_bits();
    let sign = bits >> 63 != 0;
    Self::narrow_ieee::<R>(sign, bits & !(1 << 63), f64::MANTISSA_DIGITS - 1, 11)
  }

  /// Convert an `f32` to a half, rounding with the [default policy](DefaultRounding). See
  /// [`from_f32_with`](Self::from_f32_with).
  #[inline]
  pub const fn from_f32(value: f32) -> Self {
    Self::from_f32_with::<DefaultRounding>(value)
  }

  /// Convert an `f64` to a half, rounding with the [default policy](DefaultRounding). See
  /// [`from_f64_with`](Self::from_f64_with).
  #[inline]
  pub const fn from_f64(value: f64) -> Self {
    Self::from_f64_with::<DefaultRounding>(value)
  }
}

impl From<Half> for f32 {
  /// Exact.
  #[inline]
  fn from(value: Half) -> Self {
    value.to_f32()
  }
}

impl From<Half> for f64 {
  /// Exact.
  #[inline]
  fn from(value: Half) -> Self {
    value.to_f64()
  }
}

macro_rules! make_impl {
  ($float:ty, $from_with:ident, $to:ident) => {
    impl RoundFrom<$float> for Half {
      #[doc = concat!("Convert an `", stringify!($float), "` into a `Half`, see [`Half::", stringify!($from_with), "`].")]
      #[inline]
      fn round_from_with<R: Rounding>(value: $float) -> Self {
        Half::$from_with::<R>(value)
      }
    }

    impl RoundFrom<Half> for $float {
      #[doc = concat!("Convert a `Half` into an `", stringify!($float), "`. This is exact, and `R` is irrelevant.")]
      #[inline]
      fn round_from_with<R: Rounding>(value: Half) -> Self {
        value.$to()
      }
    }
  }
}

make_impl!{f32, from_f32_with, to_f32}
make_impl!{f64, from_f64_with, to_f64}
