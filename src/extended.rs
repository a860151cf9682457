//! The x87 80-bit extended precision format, as a storage type: enough to widen halves and host
//! floats into it exactly, and to narrow it to a half with any rounding policy.
//!
//! ```text
//!   bit 79 | bits 78..64              | bit 63       | bits 62..0
//!   sign   | exponent (bias 16383)    | integer bit  | fraction
//! ```
//!
//! Unlike the other IEEE formats, the leading bit of the significand is explicit. The encodings
//! where it disagrees with the exponent (unnormals, pseudo-denormals) are read as the value they
//! spell out.

use crate::half::Unpacked;
use crate::round::Rounding;
use crate::{Half, RoundFrom};

/// An 80-bit x87 extended precision float, stored in the low 80 bits of a `u128`.
#[repr(transparent)]
#[derive(Clone, Copy, Default)]
pub struct F80(u128);

impl F80 {
  const MASK: u128 = (1 << 80) - 1;
  const SIGN: u128 = 1 << 79;
  const EXP_SHIFT: u32 = 64;
  const EXP_MAX: u128 = 0x7fff;
  const BIAS: i32 = 16383;
  const INTEGER_BIT: u64 = 1 << 63;
  const QUIET_BIT: u64 = 1 << 62;

  /// Positive zero.
  pub const ZERO: Self = F80(0);
  /// Negative zero: only the sign bit set.
  pub const NEG_ZERO: Self = F80(Self::SIGN);
  /// Positive infinity. Unlike the IEEE interchange formats, the integer bit is explicit and set.
  pub const INFINITY: Self = F80(Self::EXP_MAX << Self::EXP_SHIFT | Self::INTEGER_BIT as u128);
  /// Negative infinity.
  pub const NEG_INFINITY: Self = F80(Self::SIGN | Self::INFINITY.0);
  /// A quiet NaN, the "real indefinite" of the x87.
  pub const NAN: Self = F80(Self::SIGN | Self::INFINITY.0 | Self::QUIET_BIT as u128);

  /// Construct from the raw bits. Bits above the 80th are ignored.
  #[inline]
  pub const fn from_bits(bits: u128) -> Self {
    F80(bits & Self::MASK)
  }

  /// The raw bits, in the low 80 bits of the result.
  #[inline]
  pub const fn to_bits(self) -> u128 {
    self.0
  }

  /// Construct from the 10-byte little-endian memory layout of the x87.
  #[inline]
  pub const fn from_le_bytes(bytes: [u8; 10]) -> Self {
    let mut wide = [0; 16];
    let mut i = 0;
    while i < 10 {
      wide[i] = bytes[i];
      i += 1;
    }
    F80(u128::from_le_bytes(wide))
  }

  /// The 10-byte little-endian memory layout of the x87.
  #[inline]
  pub const fn to_le_bytes(self) -> [u8; 10] {
    let wide = self.0.to_le_bytes();
    let mut bytes = [0; 10];
    let mut i = 0;
    while i < 10 {
      bytes[i] = wide[i];
      i += 1;
    }
    bytes
  }

  /// `true` if the sign bit is set.
  #[inline]
  pub const fn sign_bit(self) -> bool {
    self.0 & Self::SIGN != 0
  }

  /// The 15-bit biased exponent field.
  #[inline]
  pub const fn biased_exponent(self) -> u16 {
    (self.0 >> Self::EXP_SHIFT) as u16 & Self::EXP_MAX as u16
  }

  /// The 64-bit significand, integer bit included.
  #[inline]
  pub const fn significand(self) -> u64 {
    self.0 as u64
  }

  /// `true` for NaNs: exponent field all ones, and a nonzero fraction.
  #[inline]
  pub const fn is_nan(self) -> bool {
    self.biased_exponent() as u128 == Self::EXP_MAX && self.significand() & !Self::INTEGER_BIT != 0
  }

  /// Encode a finite nonzero value. Every half, `f32`, and `f64` is well within range, so this is
  /// exact.
  const fn from_unpacked(x: Unpacked) -> Self {
    let sign = if x.sign {Self::SIGN} else {0};
    let biased = (x.exp + Self::BIAS) as u128;
    F80(sign | biased << Self::EXP_SHIFT | x.sig as u128)
  }

  /// Widen an IEEE binary format with `mantissa_bits` explicit mantissa bits and exponent bias
  /// `bias`, given by sign and magnitude bits. Exact; NaN payloads are left-justified.
  const fn widen_ieee(sign: bool, abs: u64, mantissa_bits: u32, bias: i32) -> Self {
    let exp_mask = ((bias as u64) * 2 + 1) << mantissa_bits;
    let sign_bits = if sign {Self::SIGN} else {0};
    if abs == 0 {
      F80(sign_bits)
    } else if abs >= exp_mask {
      let payload = (abs & !exp_mask) << (63 - mantissa_bits);
      F80(sign_bits | Self::INFINITY.0 | payload as u128)
    } else {
      Self::from_unpacked(Unpacked::from_ieee(sign, abs, mantissa_bits, bias))
    }
  }

  /// Convert an `f32`. This is exact.
  #[inline]
  pub const fn from_f32(value: f32) -> Self {
    let bits = value.to_bits() as u64;
    Self::widen_ieee(bits >> 31 != 0, bits & !(1 << 31), f32::MANTISSA_DIGITS - 1, 127)
  }

  /// Convert an `f64`. This is exact.
  #[inline]
  pub const fn from_f64(value: f64) -> Self {
    let bits = value.to_bits();
    Self::widen_ieee(bits >> 63 != 0, bits & !(1 << 63), f64::MANTISSA_DIGITS - 1, 1023)
  }
}

impl core::fmt::Debug for F80 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "F80({:#06x}_{:016x})", self.0 >> 64, self.0 as u64)
  }
}

impl From<f32> for F80 {
  #[inline]
  fn from(value: f32) -> Self {
    F80::from_f32(value)
  }
}

impl From<f64> for F80 {
  #[inline]
  fn from(value: f64) -> Self {
    F80::from_f64(value)
  }
}

impl From<Half> for F80 {
  #[inline]
  fn from(value: Half) -> Self {
    value.to_f80()
  }
}

impl Half {
  /// Widen to [`F80`]. This is exact; NaN payloads are left-justified.
  ///
  /// ```
  /// # use soft_half::{Half, F80};
  /// assert_eq!(Half::ONE.to_f80().to_bits(), 0x3fff_8000_0000_0000_0000);
  /// ```
  pub const fn to_f80(self) -> F80 {
    let sign = if self.sign_bit() {F80::SIGN} else {0};
    if self.is_zero() {
      F80(sign)
    } else if self.is_infinite() || self.is_nan() {
      let payload = (self.mantissa() as u64) << (63 - Half::MANTISSA_BITS);
      F80(sign | F80::INFINITY.0 | payload as u128)
    } else {
      F80::from_unpacked(self.unpack())
    }
  }

  /// Narrow an [`F80`], rounding with policy `R`. The rules are those of
  /// [`from_f64_with`](Half::from_f64_with).
  ///
  /// ```
  /// # use soft_half::{Half, F80, ToNearest};
  /// let x = F80::from_f64(1. / 3.);
  /// assert_eq!(Half::from_f80_with::<ToNearest>(x).to_bits(), 0x3555);
  /// ```
  pub const fn from_f80_with<R: Rounding>(value: F80) -> Self {
    let sign = value.sign_bit();
    let sign_bits = (sign as u16) << 15;
    let biased = value.biased_exponent() as i32;
    let sig = value.significand();
    if biased as u128 == F80::EXP_MAX {
      let fraction = sig & !F80::INTEGER_BIT;
      return if fraction == 0 {
        Half::from_bits(sign_bits | Half::EXP_MASK)
      } else {
        // The x87 quiet bit lines up with ours.
        let payload = (fraction >> (63 - Half::MANTISSA_BITS)) as u16;
        Half::from_bits(sign_bits | Half::EXP_MASK | Half::QUIET_BIT | payload)
      }
    }
    if sig == 0 {
      return Half::from_bits(sign_bits)
    }
    // Denormals have the exponent of the smallest normal; the integer bit, set or not, is taken
    // at face value.
    let lz = sig.leading_zeros();
    let biased = if biased == 0 {1} else {biased};
    let unpacked = Unpacked { sign, exp: biased - F80::BIAS - lz as i32, sig: sig << lz };
    unpacked.encode_round::<R>(false)
  }
}

impl RoundFrom<F80> for Half {
  /// Convert an [`F80`] into a `Half`, see [`Half::from_f80_with`].
  #[inline]
  fn round_from_with<R: Rounding>(value: F80) -> Self {
    Half::from_f80_with::<R>(value)
  }
}

impl RoundFrom<Half> for F80 {
  /// Convert a `Half` into an [`F80`]. This is exact, and `R` is irrelevant.
  #[inline]
  fn round_from_with<R: Rounding>(value: Half) -> Self {
    value.to_f80()
  }
}
