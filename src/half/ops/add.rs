use super::*;
use crate::round::DefaultRounding;

impl Half {
  /// Return `self + other`, rounded with policy `R`. The `+` operator is the same with
  /// [`DefaultRounding`].
  ///
  /// ```
  /// # use soft_half::{Half, TowardZero, TowardInfinity};
  /// let a = Half::from_f32(2048.);
  /// assert_eq!(a.add_with::<TowardZero>(Half::ONE).to_f32(), 2048.);
  /// assert_eq!(a.add_with::<TowardInfinity>(Half::ONE).to_f32(), 2050.);
  /// ```
  #[inline]
  pub fn add_with<R: Rounding>(self, other: Self) -> Self {
    self.binary::<R>(other, |a, b| a + b)
  }

  /// Return `self - other`, rounded with policy `R`. The `-` operator is the same with
  /// [`DefaultRounding`].
  #[inline]
  pub fn sub_with<R: Rounding>(self, other: Self) -> Self {
    self.binary::<R>(other, |a, b| a - b)
  }

  #[inline]
  pub(crate) fn add(self, other: Self) -> Self {
    self.add_with::<DefaultRounding>(other)
  }

  #[inline]
  pub(crate) fn sub(self, other: Self) -> Self {
    self.sub_with::<DefaultRounding>(other)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign; f32, f64}
super::mk_ops!{Sub, SubAssign, sub, sub_assign; f32, f64}

#[cfg(test)]
mod tests_add {
  super::mk_tests!{+, +=, add_with}

  #[test]
  fn examples() {
    assert_eq!((Half::ONE + Half::ONE).to_f32(), 2.);
    assert!((Half::INFINITY + Half::NEG_INFINITY).is_nan());
    assert_eq!((Half::INFINITY + Half::MAX).to_bits(), 0x7c00);
    assert_eq!(Half::MAX.add_with::<ToNearest>(Half::MAX).to_bits(), 0x7c00);
    assert_eq!(Half::MAX.add_with::<TowardZero>(Half::MAX).to_bits(), 0x7bff);
    assert_eq!((Half::NEG_ZERO + Half::NEG_ZERO).to_bits(), 0x8000);
    assert_eq!((Half::ZERO + Half::NEG_ZERO).to_bits(), 0x0000);
    assert!((Half::NAN + Half::ONE).is_nan());
  }

  #[test]
  fn chain_narrows_once() {
    // 1 + 2^-11 + 2^-11: each half-precision step is a tie, the exact sum is not
    let tiny = Half::from_bits(0x1000);
    assert_eq!(tiny.to_f64(), 2f64.powi(-11));
    let twice = Half::ONE.add_with::<ToNearest>(tiny).add_with::<ToNearest>(tiny);
    assert_eq!(twice.to_bits(), if TIES_TO_EVEN {0x3c00} else {0x3c02});

    let wide: f64 = f64::from(Half::ONE) + tiny + tiny;
    assert_eq!(Half::from_f64_with::<ToNearest>(wide).to_bits(), 0x3c01);
    let wide: f32 = Half::ONE + f32::from(tiny) + tiny;
    assert_eq!(Half::from_f32_with::<ToNearest>(wide).to_bits(), 0x3c01);

    let mut acc = Half::ONE;
    acc += tiny + 2f64.powi(-11);
    assert_eq!(acc.to_bits(), 0x3c01);
    acc -= 2f32.powi(-10);
    assert_eq!(acc, Half::ONE);
  }
}
