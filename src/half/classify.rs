use super::*;

use core::num::FpCategory;

impl Half {
  /// Returns the floating point category of `self`, according to the exponent and mantissa
  /// fields:
  ///
  /// | exponent | mantissa | category                  |
  /// |----------|----------|---------------------------|
  /// | 0        | 0        | [`FpCategory::Zero`]      |
  /// | 0        | ≠ 0      | [`FpCategory::Subnormal`] |
  /// | 1..=30   | any      | [`FpCategory::Normal`]    |
  /// | 31       | 0        | [`FpCategory::Infinite`]  |
  /// | 31       | ≠ 0      | [`FpCategory::Nan`]       |
  #[inline]
  pub const fn classify(self) -> FpCategory {
    let abs = self.abs_bits();
    if abs == 0 {
      FpCategory::Zero
    } else if abs < Self::MIN_POSITIVE.0 {
      FpCategory::Subnormal
    } else if abs < Self::EXP_MASK {
      FpCategory::Normal
    } else if abs == Self::EXP_MASK {
      FpCategory::Infinite
    } else {
      FpCategory::Nan
    }
  }

  /// Returns `true` if `self` is a NaN (quiet or signaling).
  #[inline]
  pub const fn is_nan(self) -> bool {
    self.abs_bits() > Self::EXP_MASK
  }

  /// Returns `true` if `self` is a *signaling* NaN, i.e. a NaN with the top mantissa bit clear.
  #[inline]
  pub const fn is_signaling(self) -> bool {
    self.is_nan() && self.0 & Self::QUIET_BIT == 0
  }

  /// Returns `true` if `self` is positive or negative infinity.
  #[inline]
  pub const fn is_infinite(self) -> bool {
    self.abs_bits() == Self::EXP_MASK
  }

  /// Returns `true` if `self` is neither infinite nor NaN.
  #[inline]
  pub const fn is_finite(self) -> bool {
    self.abs_bits() < Self::EXP_MASK
  }

  /// Returns `true` if `self` is neither zero, infinite, subnormal, nor NaN.
  #[inline]
  pub const fn is_normal(self) -> bool {
    matches!(self.classify(), FpCategory::Normal)
  }

  /// Returns `true` if `self` is subnormal.
  #[inline]
  pub const fn is_subnormal(self) -> bool {
    matches!(self.classify(), FpCategory::Subnormal)
  }

  /// Returns `true` if `self` is `+0.0` or `-0.0`.
  #[inline]
  pub const fn is_zero(self) -> bool {
    self.abs_bits() == 0
  }

  /// Returns `true` if the sign bit is set. This includes `-0.0` and NaNs with the sign bit set.
  ///
  /// Same as [`sign_bit`](Self::sign_bit).
  #[inline]
  pub const fn signbit(self) -> bool {
    self.sign_bit()
  }

  /// Returns `true` if the sign bit is clear (including `+0.0`, `+∞`, and positive NaNs).
  #[inline]
  pub const fn is_sign_positive(self) -> bool {
    !self.sign_bit()
  }

  /// Returns `true` if the sign bit is set (including `-0.0`, `-∞`, and negative NaNs).
  #[inline]
  pub const fn is_sign_negative(self) -> bool {
    self.sign_bit()
  }
}
