use super::*;
use crate::round::Rounding;

impl Half {
  /// Fused multiply-add: `self × a + b`, with a single rounding under policy `R`.
  ///
  /// ```
  /// # use soft_half::{Half, ToNearest, TowardZero};
  /// let (x, y) = (Half::from_f32(1. + 1. / 1024.), Half::from_f32(1. - 1. / 1024.));
  /// // The product 1 - 2^-20 is not a half, but the fused result is exact.
  /// assert_eq!(x.fma_with::<ToNearest>(y, -Half::ONE).to_f64(), -(2f64.powi(-20)));
  /// assert_eq!(x.fma_with::<TowardZero>(y, -Half::ONE).to_f64(), -(2f64.powi(-20)));
  /// ```
  pub fn fma_with<R: Rounding>(self, a: Self, b: Self) -> Self {
    // The product of two halves is exact in f64 (22 significant bits). The sum is not, in
    // general, but TwoSum recovers the exact error, and then the sum can be adjusted to the
    // "round to odd" result: the f64 nearest to the exact sum in the direction of zero, with its
    // lsb forced to 1 if inexact. Narrowing a round-to-odd value with at least 2 more bits of
    // precision than the target gives the same result as narrowing the exact value, for every
    // rounding policy.
    let product = self.to_f64() * a.to_f64();
    let addend = b.to_f64();
    let sum = product + addend;
    if !sum.is_finite() || sum == 0. {
      return Self::from_f64_with::<R>(sum)
    }

    let virtual_addend = sum - product;
    let virtual_product = sum - virtual_addend;
    let err = (product - virtual_product) + (addend - virtual_addend);
    let bits = sum.to_bits();
    let sum = if err != 0. && bits & 1 == 0 {
      // `sum` is even and inexact: step to the odd neighbour on the side of the exact value.
      if (err > 0.) == (sum > 0.) {f64::from_bits(bits + 1)} else {f64::from_bits(bits - 1)}
    } else {
      sum
    };
    Self::from_f64_with::<R>(sum)
  }

  /// Fused multiply-add: `self × a + b`, with a single rounding under the
  /// [default policy](crate::DefaultRounding).
  #[inline]
  pub fn fma(self, a: Self, b: Self) -> Self {
    self.fma_with::<crate::DefaultRounding>(a, b)
  }

  /// Same as [`fma`](Self::fma).
  #[inline]
  pub fn mul_add(self, a: Self, b: Self) -> Self {
    self.fma(a, b)
  }
}
