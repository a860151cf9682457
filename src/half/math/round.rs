use super::*;
use crate::round::{RoundStyle, Rounding};

impl Half {
  /// Round `self` to an integer-valued half. `round_up(sign, odd, round, sticky)` decides whether
  /// the integral part is incremented, given the lsb of the integral part, the first fractional
  /// bit, and whether any further fractional bit is set.
  ///
  /// The result is always exactly representable, so there is nothing left to round on the way
  /// back. Zeros, infinities and halves ≥ 1024 (which have no fractional bits) are returned as
  /// they are; NaNs are quieted.
  #[inline]
  pub(crate) fn round_integral(self, round_up: impl FnOnce(bool, bool, bool, bool) -> bool) -> Self {
    if self.is_nan() { return Self(self.0 | Self::QUIET_BIT) }
    if self.is_zero() || self.is_infinite() { return self }

    // The value is `m × 2^(exp - 10)`, with `m` the significand as an integer (hidden bit
    // included for normals) and `exp` the unbiased exponent. So there are `10 - exp` fractional
    // bits; if there are none, `self` is already an integer.
    //
    // Example (2.75 = 0b10.11):
    //
    //          m: 0b101_1000_0000
    //        exp: +1
    //   integral: 0b10
    //      round: 1
    //     sticky: true
    let sign = self.sign_bit();
    let biased = self.biased_exponent() as i32;
    let (m, exp) = if biased == 0 {
      (self.mantissa() as u32, 1 - Self::EXP_BIAS)
    } else {
      ((1 << Self::MANTISSA_BITS | self.mantissa()) as u32, biased - Self::EXP_BIAS)
    };
    let fractional_bits = Self::MANTISSA_BITS as i32 - exp;
    if fractional_bits <= 0 { return self }

    // At most 10 + 14 = 24 fractional bits, so all shifts are in range.
    let fractional_bits = fractional_bits as u32;
    let integral = m >> fractional_bits;
    let round = m >> (fractional_bits - 1) & 1 != 0;
    let sticky = m & ((1 << (fractional_bits - 1)) - 1) != 0;
    let integral = integral + round_up(sign, integral & 1 != 0, round, sticky) as u32;

    if integral == 0 { return Self::ZERO.copysign(self) }
    // Any integer up to 2048 is representable, so this never actually rounds.
    let (unpacked, sticky) = Unpacked::from_magnitude(sign, integral as u128);
    unpacked.encode_round::<crate::round::ToNearest>(sticky)
  }

  /// The smallest integer-valued half greater than or equal to `self`.
  ///
  /// ```
  /// # use soft_half::Half;
  /// assert_eq!(Half::from_f32(3.1).ceil().to_f32(), 4.);
  /// assert_eq!(Half::from_f32(-3.9).ceil().to_f32(), -3.);
  /// assert_eq!(Half::from_f32(-0.5).ceil().to_bits(), 0x8000);
  /// ```
  pub fn ceil(self) -> Self {
    self.round_integral(|sign, odd, round, sticky|
      RoundStyle::TowardInfinity.round_up(sign, odd, round, sticky))
  }

  /// The largest integer-valued half less than or equal to `self`.
  ///
  /// ```
  /// # use soft_half::Half;
  /// assert_eq!(Half::from_f32(3.9).floor().to_f32(), 3.);
  /// assert_eq!(Half::from_f32(-3.1).floor().to_f32(), -4.);
  /// ```
  pub fn floor(self) -> Self {
    self.round_integral(|sign, odd, round, sticky|
      RoundStyle::TowardNegInfinity.round_up(sign, odd, round, sticky))
  }

  /// The integer part of `self`, discarding the fractional part (rounding toward zero).
  pub fn trunc(self) -> Self {
    self.round_integral(|_, _, _, _| false)
  }

  /// The integer-valued half nearest to `self`, with ties rounded *away from zero* regardless of
  /// [`TIES_TO_EVEN`](crate::TIES_TO_EVEN).
  ///
  /// ```
  /// # use soft_half::Half;
  /// assert_eq!(Half::from_f32(2.5).round().to_f32(), 3.);
  /// assert_eq!(Half::from_f32(-2.5).round().to_f32(), -3.);
  /// assert_eq!(Half::from_f32(2.4).round().to_f32(), 2.);
  /// ```
  pub fn round(self) -> Self {
    self.round_integral(|_, _, round, _| round)
  }

  /// Round `self` to an integer-valued half with the [default policy](crate::DefaultRounding).
  pub fn rint(self) -> Self {
    self.round_integral(|sign, odd, round, sticky|
      crate::DefaultRounding::STYLE.round_up(sign, odd, round, sticky))
  }

  /// Same as [`rint`](Self::rint): there are no floating-point exceptions to suppress.
  #[inline]
  pub fn nearbyint(self) -> Self {
    self.rint()
  }

  /// [`round`](Self::round) to an integer. Infinities saturate at the `i64` bounds, NaN gives 0.
  #[inline]
  pub fn lround(self) -> i64 {
    self.round().to_f64() as i64
  }

  /// [`rint`](Self::rint) to an integer. Infinities saturate at the `i64` bounds, NaN gives 0.
  #[inline]
  pub fn lrint(self) -> i64 {
    self.rint().to_f64() as i64
  }
}
