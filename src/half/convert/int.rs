use super::*;
use crate::underlying::Int;

impl Half {
  /// The kernel for converting an integer to a half: split it into sign and magnitude, and round
  /// the magnitude (which may be as wide as 128 bits, far beyond the finite range).
  #[inline]
  fn from_int_with<FromInt: Int, R: Rounding>(int: FromInt) -> Self {
    let (sign, magnitude) = int.to_sign_magnitude();
    if magnitude == 0 { return Half::ZERO }
    let (unpacked, sticky) = Unpacked::from_magnitude(sign, magnitude);
    unpacked.encode_round::<R>(sticky)
  }

  /// The kernel for converting a half to an integer: round to an integer-valued half with policy
  /// `R`, then saturate at the bounds of `ToInt`.
  ///
  /// Infinities saturate like any other out-of-range value. NaN has no value to saturate, so it
  /// goes to the bound on the side of its sign bit.
  #[inline]
  fn to_int_with<ToInt: Int, R: Rounding>(self) -> ToInt {
    let sign = self.sign_bit();
    if self.is_nan() || self.is_infinite() {
      return if sign {ToInt::MIN} else {ToInt::MAX}
    }
    let rounded = self.round_integral(|sign, odd, round, sticky|
      R::STYLE.round_up(sign, odd, round, sticky));
    // `rounded` is an integer with magnitude at most 65504, so this is exact.
    let magnitude = rounded.abs().to_f64() as u128;
    ToInt::of_sign_magnitude_saturating(sign, magnitude)
  }
}

macro_rules! make_impl {
  ($($int:ty),*) => {$(
    impl RoundFrom<$int> for Half {
      #[doc = concat!("Convert an `", stringify!($int), "` into a `Half`, rounding with policy `R` if it has more than 11 significant bits. Beyond ±65504, the result overflows as the policy dictates.")]
      #[inline]
      fn round_from_with<R: Rounding>(value: $int) -> Self {
        Half::from_int_with::<$int, R>(value)
      }
    }

    impl RoundFrom<Half> for $int {
      #[doc = concat!("Convert a `Half` into an `", stringify!($int), "`, rounding to an integer with policy `R` and saturating at [`", stringify!($int), "::MIN`] and [`", stringify!($int), "::MAX`]. NaN converts to `MIN` if its sign bit is set, `MAX` otherwise.")]
      #[inline]
      fn round_from_with<R: Rounding>(value: Half) -> Self {
        value.to_int_with::<$int, R>()
      }
    }
  )*}
}

make_impl!{i8, i16, i32, i64, i128, isize}
make_impl!{u8, u16, u32, u64, u128, usize}

impl From<i8> for Half {
  /// Exact: every `i8` is a half.
  #[inline]
  fn from(value: i8) -> Self {
    Half::round_from(value)
  }
}

impl From<u8> for Half {
  /// Exact: every `u8` is a half.
  #[inline]
  fn from(value: u8) -> Self {
    Half::round_from(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::half::rational;
  use crate::round::*;
  use malachite::rational::Rational;
  use proptest::prelude::*;

  /// Aux function: check that `int` is converted to a half with the correct rounding, under
  /// every policy.
  fn is_correct_rounded<FromInt: Int>(int: FromInt) -> bool
  where
    FromInt: Into<Rational>,
    Half: RoundFrom<FromInt>,
  {
    fn check<FromInt: Int + Into<Rational>, R: Rounding>(int: FromInt) -> bool
    where Half: RoundFrom<FromInt> {
      let half = Half::round_from_with::<R>(int);
      // Zero is always +0.
      rational::is_correct_rounded(int.into(), half, R::STYLE) && half.to_bits() != 0x8000
    }
    check::<FromInt, Indeterminate>(int)
    && check::<FromInt, TowardZero>(int)
    && check::<FromInt, ToNearest>(int)
    && check::<FromInt, TowardInfinity>(int)
    && check::<FromInt, TowardNegInfinity>(int)
  }

  /// The expected result of rounding `half` to an integer, as an `i128` (which holds every finite
  /// half). `None` for NaNs and infinities, which go to the bound on the side of their sign.
  fn expected_i128(half: Half, style: RoundStyle) -> Option<i128> {
    if half.is_nan() || half.is_infinite() { return None }
    let x = half.to_f32();
    let rounded = match style {
      RoundStyle::Indeterminate | RoundStyle::TowardZero => x.trunc(),
      RoundStyle::ToNearest if TIES_TO_EVEN => x.round_ties_even(),
      RoundStyle::ToNearest => x.round(),
      RoundStyle::TowardInfinity => x.ceil(),
      RoundStyle::TowardNegInfinity => x.floor(),
    };
    Some(rounded as i128)
  }

  /// Instantiate tests for converting halves to integer type `$int`.
  macro_rules! make_to_int_tests {
    ($($name:ident: $int:ty,)*) => {$(
      #[test]
      fn $name() {
        fn check<R: Rounding>(half: Half) {
          let result = <$int>::round_from_with::<R>(half);
          match expected_i128(half, R::STYLE) {
            Some(expected) => {
              let bound = if expected < 0 {<$int>::MIN} else {<$int>::MAX};
              let expected = <$int>::try_from(expected).unwrap_or(bound);
              assert_eq!(result, expected, "{half:?}")
            },
            None => {
              let bound = if half.sign_bit() {<$int>::MIN} else {<$int>::MAX};
              assert_eq!(result, bound, "{half:?}")
            },
          }
        }
        for half in Half::cases_exhaustive_all() {
          check::<Indeterminate>(half);
          check::<TowardZero>(half);
          check::<ToNearest>(half);
          check::<TowardInfinity>(half);
          check::<TowardNegInfinity>(half);
        }
      }
    )*}
  }

  make_to_int_tests!{
    to_i8_exhaustive: i8,
    to_i16_exhaustive: i16,
    to_i32_exhaustive: i32,
    to_i64_exhaustive: i64,
    to_i128_exhaustive: i128,
    to_isize_exhaustive: isize,
    to_u8_exhaustive: u8,
    to_u16_exhaustive: u16,
    to_u32_exhaustive: u32,
    to_u64_exhaustive: u64,
    to_u128_exhaustive: u128,
    to_usize_exhaustive: usize,
  }

  #[test]
  fn to_int_examples() {
    assert_eq!(i32::round_from_with::<ToNearest>(Half::from_f32(2.5)), if TIES_TO_EVEN {2} else {3});
    assert_eq!(i32::round_from_with::<TowardZero>(Half::from_f32(-2.75)), -2);
    assert_eq!(i32::round_from_with::<TowardNegInfinity>(Half::from_f32(-2.25)), -3);
    assert_eq!(u8::round_from_with::<TowardInfinity>(Half::from_f32(255.5)), 255);
    assert_eq!(i8::round_from(Half::MAX), i8::MAX);
    assert_eq!(u128::round_from(Half::NEG_INFINITY), 0);
    assert_eq!(i64::round_from(Half::NAN), i64::MAX);
    assert_eq!(i64::round_from(-Half::NAN), i64::MIN);
    assert_eq!(u16::round_from(-Half::ZERO), 0);
  }

  #[test]
  fn from_int_examples() {
    assert_eq!(Half::round_from_with::<ToNearest>(2049_i32).to_f32(), if TIES_TO_EVEN {2048.} else {2050.});
    assert_eq!(Half::round_from_with::<TowardInfinity>(2049_i32).to_f32(), 2050.);
    assert_eq!(Half::round_from_with::<TowardZero>(i128::MIN).to_bits(), 0xfbff);
    assert_eq!(Half::round_from_with::<Indeterminate>(u128::MAX).to_bits(), 0x7c00);
    assert_eq!(Half::round_from_with::<ToNearest>(65519_u32).to_bits(), 0x7bff);
    assert_eq!(Half::round_from_with::<ToNearest>(65520_u32).to_bits(), 0x7c00);
    assert_eq!(Half::round_from_with::<TowardNegInfinity>(-65505_i64).to_bits(), 0xfc00);
    assert_eq!(Half::round_from_with::<TowardNegInfinity>(65505_i64).to_bits(), 0x7bff);
    assert_eq!(Half::from(-128_i8).to_f32(), -128.);
    assert_eq!(Half::from(255_u8).to_f32(), 255.);
  }

  #[test]
  fn from_i16_exhaustive() {
    for int in i16::MIN ..= i16::MAX {
      assert!(is_correct_rounded(int), "{int:?}");
    }
  }

  #[test]
  fn from_u16_exhaustive() {
    for int in u16::MIN ..= u16::MAX {
      assert!(is_correct_rounded(int), "{int:?}");
    }
  }

  /// Integers that are exactly halves convert back to themselves, under every policy.
  #[test]
  fn roundtrip_exhaustive() {
    for int in -65504_i32 ..= 65504 {
      let half = Half::round_from_with::<TowardZero>(int);
      if half.to_f64() == int as f64 {
        assert_eq!(i32::round_from_with::<TowardInfinity>(half), int);
        assert_eq!(i32::round_from_with::<TowardNegInfinity>(half), int);
      }
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn from_i32_proptest(int in any::<i32>()) {
      assert!(is_correct_rounded(int), "{int:?}")
    }

    #[test]
    fn from_i64_proptest(int in any::<i64>()) {
      assert!(is_correct_rounded(int), "{int:?}")
    }

    #[test]
    fn from_i128_proptest(int in any::<i128>()) {
      assert!(is_correct_rounded(int), "{int:?}")
    }

    #[test]
    fn from_u64_proptest(int in any::<u64>()) {
      assert!(is_correct_rounded(int), "{int:?}")
    }

    #[test]
    fn from_u128_proptest(int in any::<u128>()) {
      assert!(is_correct_rounded(int), "{int:?}")
    }

    #[test]
    fn from_small_proptest(int in -70000_i32 .. 70000) {
      assert!(is_correct_rounded(int), "{int:?}")
    }
  }
}
