use super::*;
use crate::round::{DefaultRounding, ToNearest};

impl Half {
  /// Returns `self` with the sign bit of `sign`. Works on NaNs and zeros too.
  #[inline]
  pub const fn copysign(self, sign: Self) -> Self {
    Self(self.abs_bits() | sign.0 & Self::SIGN_MASK)
  }

  /// Returns the next representable value after `self` in the direction of `to`.
  ///
  ///   - If either argument is NaN, the result is a quiet NaN.
  ///   - If `self == to` (including `+0.0` and `-0.0`), the result is `to`.
  ///   - From a zero, the result is the smallest subnormal with the sign of the direction.
  ///   - From the largest finite value away from zero, the result is infinity.
  ///
  /// ```
  /// # use soft_half::Half;
  /// assert_eq!(Half::ONE.nextafter(Half::INFINITY).to_bits(), 0x3c01);
  /// assert_eq!(Half::ZERO.nextafter(Half::NEG_ONE).to_bits(), 0x8001);
  /// ```
  #[inline]
  pub fn nextafter(self, to: Self) -> Self {
    self.nexttoward(to.to_f64())
  }

  /// As [`nextafter`](Self::nextafter), but the direction is given by an `f64`.
  pub fn nexttoward(self, to: f64) -> Self {
    if self.is_nan() {
      return Self(self.0 | Self::QUIET_BIT)
    }
    let from = self.to_f64();
    if to.is_nan() || from == to {
      // Exact, or a NaN: the policy does not matter.
      return Self::from_f64_with::<ToNearest>(to)
    }
    if self.is_zero() {
      return Self::from_parts(to < 0., 0, 1)
    }
    // Bit patterns are ordered like magnitudes, so moving away from zero is +1 and toward zero
    // is -1. Neither can wrap: zero is handled above, and `to` is strictly beyond `self`, so
    // `self` cannot be an infinity moving outward.
    let away_from_zero = (from < to) != self.sign_bit();
    if away_from_zero {Self(self.0 + 1)} else {Self(self.0 - 1)}
  }

  /// The least value greater than `self`. NaN and `+∞` are returned unchanged; the successor of
  /// `-0.0` and `+0.0` is the smallest positive subnormal.
  #[inline]
  pub const fn next_up(self) -> Self {
    if self.is_nan() || self.0 == Self::INFINITY.0 {
      self
    } else if self.is_zero() {
      Self::MIN_POSITIVE_SUBNORMAL
    } else if self.sign_bit() {
      Self(self.0 - 1)
    } else {
      Self(self.0 + 1)
    }
  }

  /// The greatest value less than `self`. NaN and `-∞` are returned unchanged; the predecessor of
  /// `-0.0` and `+0.0` is the smallest negative subnormal.
  #[inline]
  pub const fn next_down(self) -> Self {
    self.negate().next_up().negate()
  }

  /// Break `self` into a significand in `[0.5, 1)` and a power of 2, such that
  /// `self = significand × 2^exp`. Zeros, infinities and NaNs are returned unchanged, with an
  /// exponent of 0.
  ///
  /// ```
  /// # use soft_half::Half;
  /// let (significand, exp) = Half::from_f32(12.).frexp();
  /// assert_eq!((significand.to_f32(), exp), (0.75, 4));
  /// ```
  pub const fn frexp(self) -> (Self, i32) {
    if self.is_zero() || !self.is_finite() {
      return (self, 0)
    }
    // The unpacked `sig` is in `[1, 2)`; halving it gives `[0.5, 1)`, whose biased exponent field
    // is 14. The significand has at most 11 significant bits, so this is exact.
    let x = self.unpack();
    let mantissa = (x.sig >> (63 - Self::MANTISSA_BITS)) as u16 & Self::MANTISSA_MASK;
    let significand = Self::from_parts(x.sign, (Self::EXP_BIAS - 1) as u16, mantissa);
    (significand, x.exp + 1)
  }

  /// Multiply `self` by 2<sup>`exp`</sup>, rounding with the
  /// [default policy](crate::DefaultRounding) if the result is subnormal or overflows.
  #[inline]
  pub const fn ldexp(self, exp: i32) -> Self {
    self.scalbln(exp as i64)
  }

  /// Same as [`ldexp`](Self::ldexp).
  #[inline]
  pub const fn scalbn(self, exp: i32) -> Self {
    self.scalbln(exp as i64)
  }

  /// As [`ldexp`](Self::ldexp), with a wider exponent argument.
  pub const fn scalbln(self, exp: i64) -> Self {
    if self.is_zero() || !self.is_finite() {
      return if self.is_nan() {Self(self.0 | Self::QUIET_BIT)} else {self}
    }
    let mut x = self.unpack();
    // Anything beyond this range overflows or underflows to the same result.
    let scaled = (x.exp as i64).saturating_add(exp);
    x.exp = if scaled < -128 {-128} else if scaled > 128 {128} else {scaled as i32};
    x.encode_round::<DefaultRounding>(false)
  }

  /// The unbiased exponent of `self`, as an integer: `floor(log2(|self|))`. Subnormals are
  /// normalised first.
  ///
  /// Zero gives [`Self::ILOGB_ZERO`], NaN gives [`Self::ILOGB_NAN`], and infinity gives
  /// `i32::MAX`.
  pub const fn ilogb(self) -> i32 {
    if self.is_zero() {
      Self::ILOGB_ZERO
    } else if self.is_nan() {
      Self::ILOGB_NAN
    } else if self.is_infinite() {
      i32::MAX
    } else {
      self.unpack().exp
    }
  }

  /// The unbiased exponent of `self`, as a half: `floor(log2(|self|))`. Subnormals are
  /// normalised first.
  ///
  /// Zero gives `-∞`, infinity gives `+∞`, and NaN gives NaN.
  pub fn logb(self) -> Self {
    if self.is_zero() {
      Self::NEG_INFINITY
    } else if self.is_nan() {
      Self(self.0 | Self::QUIET_BIT)
    } else if self.is_infinite() {
      Self::INFINITY
    } else {
      // Exact: the exponent is at most 24 in magnitude.
      Self::from_f64_with::<ToNearest>(self.unpack().exp as f64)
    }
  }

  /// Split `self` into fractional and integral parts, both with the sign of `self`; returns
  /// `(fractional, integral)`.
  ///
  /// Infinities have a fractional part of zero, NaNs give NaN for both.
  ///
  /// ```
  /// # use soft_half::Half;
  /// let (fract, int) = Half::from_f32(-2.75).modf();
  /// assert_eq!((fract.to_f32(), int.to_f32()), (-0.75, -2.));
  /// ```
  pub fn modf(self) -> (Self, Self) {
    if self.is_nan() {
      let nan = Self(self.0 | Self::QUIET_BIT);
      return (nan, nan)
    }
    if self.is_infinite() {
      return (Self::ZERO.copysign(self), self)
    }
    let integral = self.trunc();
    // The difference is exactly representable, so the policy does not matter.
    let fractional = Self::from_f64_with::<ToNearest>(self.to_f64() - integral.to_f64());
    (fractional.copysign(self), integral)
  }
}
