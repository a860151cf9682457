use super::*;
use crate::round::{DefaultRounding, RoundStyle, Rounding};

impl Half {
  /// Positive zero (`+0.0`), the additive identity element.
  pub const ZERO: Self = Self(0x0000);

  /// Negative zero (`-0.0`). Compares equal to [`Self::ZERO`], but has the sign bit set.
  pub const NEG_ZERO: Self = Self(Self::SIGN_MASK);

  /// One (`1.0`), the multiplicative identity element.
  pub const ONE: Self = Self::from_parts(false, Self::EXP_BIAS as u16, 0);

  /// Negative one (`-1.0`).
  pub const NEG_ONE: Self = Self::from_parts(true, Self::EXP_BIAS as u16, 0);

  /// The difference between `1.0` and the next larger representable number, 2<sup>-10</sup>.
  pub const EPSILON: Self =
    Self::from_parts(false, (Self::EXP_BIAS - Self::MANTISSA_BITS as i32) as u16, 0);

  /// Smallest positive *normal* value, 2<sup>-14</sup>.
  pub const MIN_POSITIVE: Self = Self::from_parts(false, 1, 0);

  /// Smallest positive value, the smallest subnormal 2<sup>-24</sup>.
  pub const MIN_POSITIVE_SUBNORMAL: Self = Self::from_parts(false, 0, 1);

  /// Alias of [`Self::MIN_POSITIVE_SUBNORMAL`].
  pub const DENORM_MIN: Self = Self::MIN_POSITIVE_SUBNORMAL;

  /// Largest finite value, 65504.
  pub const MAX: Self =
    Self::from_parts(false, (Self::EXP_MASK >> Self::MANTISSA_BITS) - 1, Self::MANTISSA_MASK);

  /// Smallest finite value, -65504, equal to `-MAX`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::MIN_POSITIVE`]!
  pub const MIN: Self = Self(Self::MAX.0 | Self::SIGN_MASK);

  /// Alias of [`Self::MIN`].
  pub const LOWEST: Self = Self::MIN;

  /// Positive infinity (`+∞`).
  pub const INFINITY: Self = Self(Self::EXP_MASK);

  /// Negative infinity (`-∞`).
  pub const NEG_INFINITY: Self = Self(Self::EXP_MASK | Self::SIGN_MASK);

  /// Alias of [`Self::INFINITY`].
  pub const HUGE_VAL: Self = Self::INFINITY;

  /// A quiet NaN. Note that there are many NaN bit patterns; this is only the canonical one.
  //
  // Represented by the bit pattern `0_11111_1000000000`.
  pub const NAN: Self = Self(Self::EXP_MASK | Self::QUIET_BIT);

  /// A signaling NaN: the top mantissa bit is clear (and some other is set).
  //
  // Represented by the bit pattern `0_11111_0100000000`.
  pub const SIGNALING_NAN: Self = Self(Self::EXP_MASK | Self::QUIET_BIT >> 1);

  /// A quiet NaN carrying `payload` in its low mantissa bits. Only the 9 bits below the quiet bit
  /// fit; higher bits of `payload` are ignored.
  ///
  /// ```
  /// # use soft_half::Half;
  /// let nan = Half::nan_with_payload(0x2a);
  /// assert!(nan.is_nan() && !nan.is_signaling());
  /// assert_eq!(nan.to_bits(), 0x7e2a);
  /// assert_eq!(Half::nan_with_payload(0).to_bits(), Half::NAN.to_bits());
  /// ```
  #[inline]
  pub const fn nan_with_payload(payload: u16) -> Self {
    Self(Self::EXP_MASK | Self::QUIET_BIT | payload & (Self::QUIET_BIT - 1))
  }

  /// Number of significant binary digits, including the implicit leading bit.
  pub const MANTISSA_DIGITS: u32 = Self::MANTISSA_BITS + 1;

  /// Alias of [`Self::MANTISSA_DIGITS`] (the number of significant *binary* digits).
  pub const DIGITS: u32 = Self::MANTISSA_DIGITS;

  /// Number of decimal digits that survive a round trip decimal → half → decimal.
  pub const DIGITS10: u32 = 3;

  /// Number of decimal digits needed to print any half so that it can be parsed back exactly.
  pub const MAX_DIGITS10: u32 = 5;

  /// The radix of the representation.
  pub const RADIX: u32 = 2;

  /// One greater than the smallest normal exponent: [`Self::MIN_POSITIVE`] =
  /// 2<sup>`MIN_EXP - 1`</sup>.
  pub const MIN_EXP: i32 = 2 - Self::EXP_BIAS;

  /// One greater than the largest exponent: [`Self::MAX`] < 2<sup>`MAX_EXP`</sup>.
  pub const MAX_EXP: i32 = Self::EXP_BIAS + 1;

  /// The smallest `n` such that 10<sup>n</sup> is a normal half.
  pub const MIN_10_EXP: i32 = -4;

  /// The largest `n` such that 10<sup>n</sup> is finite.
  pub const MAX_10_EXP: i32 = 4;

  /// The style of the [default rounding policy](DefaultRounding).
  pub const ROUND_STYLE: RoundStyle = DefaultRounding::STYLE;

  /// The largest rounding error of the [default rounding policy](DefaultRounding), in ULPs: `0.5`
  /// when rounding to nearest, `1.0` otherwise.
  pub const ROUND_ERROR: Self =
    if matches!(Self::ROUND_STYLE, RoundStyle::ToNearest) {
      Self::from_parts(false, Self::EXP_BIAS as u16 - 1, 0)
    } else {
      Self::ONE
    };

  /// Returned by [`ilogb`](Self::ilogb) for a zero argument.
  pub const ILOGB_ZERO: i32 = i32::MIN;

  /// Returned by [`ilogb`](Self::ilogb) for a NaN argument.
  pub const ILOGB_NAN: i32 = i32::MIN;
}
