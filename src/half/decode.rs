use super::*;

impl Half {
  /// Unpack `self` into sign, exponent, and normalised significand.
  ///
  /// Normal halves have an implicit leading 1 and an exponent of `biased - 15`; subnormals have
  /// an implicit leading 0 and a fixed exponent of `-14`, so we normalise them here by shifting
  /// the first 1 up to bit 63 and compensating in the exponent.
  ///
  /// Examples:
  ///
  /// ```text
  ///     normal: 0_10000_1001000000 → sig: 0b1_1001000000_000…, exp: +1
  ///  subnormal: 0_00000_0000001101 → sig: 0b1_1010000000_000…, exp: -21
  /// ```
  ///
  /// # Safety
  ///
  /// `self` must be finite and nonzero, or the result is meaningless (but memory safe).
  #[inline]
  pub(crate) const fn unpack(self) -> Unpacked {
    debug_assert!(self.abs_bits() != 0 && self.abs_bits() < Self::EXP_MASK);
    let sign = self.sign_bit();
    let biased = self.biased_exponent() as i32;
    let mantissa = self.mantissa() as u64;
    if biased != 0 {
      const SHIFT: u32 = 63 - Half::MANTISSA_BITS;
      let sig = (mantissa | 1 << Half::MANTISSA_BITS) << SHIFT;
      Unpacked { sign, exp: biased - Self::EXP_BIAS, sig }
    } else {
      // The value is `mantissa × 2^-24`; the leading 1 of `mantissa` is at bit `63 - lz`.
      let lz = mantissa.leading_zeros();
      let sig = mantissa << lz;
      let exp = 63 - lz as i32 + (1 - Self::EXP_BIAS - Self::MANTISSA_BITS as i32);
      Unpacked { sign, exp, sig }
    }
  }

  /// Widen `self` to an IEEE binary format with `mantissa_bits` explicit mantissa bits and
  /// `exponent_bits` exponent bits (at most 64 bits in total). The conversion is always exact.
  ///
  /// Zero and infinity are passed through; NaN payloads are left-justified into the wider
  /// mantissa (so a quiet NaN stays quiet and a signaling NaN stays signaling).
  #[inline]
  pub(crate) const fn widen(self, mantissa_bits: u32, exponent_bits: u32) -> u64 {
    let sign = (self.sign_bit() as u64) << (mantissa_bits + exponent_bits);
    let abs = self.abs_bits();
    let exp_mask = ((1u64 << exponent_bits) - 1) << mantissa_bits;
    let bias = (1i32 << (exponent_bits - 1)) - 1;
    let magnitude = if abs >= Self::EXP_MASK {
      // Infinity or NaN
      exp_mask | (self.mantissa() as u64) << (mantissa_bits - Self::MANTISSA_BITS)
    } else if abs == 0 {
      0
    } else {
      // Every finite half is a normal number in any wider IEEE format, so the result always has
      // an implicit leading bit, which we drop.
      let x = self.unpack();
      let biased = (x.exp + bias) as u64;
      biased << mantissa_bits | (x.sig << 1) >> (64 - mantissa_bits)
    };
    sign | magnitude
  }

  /// Convert to `f32`. This is exact.
  #[inline]
  pub const fn to_f32(self) -> f32 {
    f32::from_bits(self.widen(f32::MANTISSA_DIGITS - 1, 8) as u32)
  }

  /// Convert to `f64`, the working precision. This is exact.
  #[inline]
  pub const fn to_f64(self) -> f64 {
    f64::from_bits(self.widen(f64::MANTISSA_DIGITS - 1, 11))
  }
}

impl Unpacked {
  /// Unpack the magnitude `abs` of a finite nonzero number in an IEEE binary format with
  /// `mantissa_bits` explicit mantissa bits and exponent bias `bias`.
  #[inline]
  pub(crate) const fn from_ieee(sign: bool, abs: u64, mantissa_bits: u32, bias: i32) -> Self {
    debug_assert!(abs != 0);
    let biased = (abs >> mantissa_bits) as i32;
    let mantissa = abs & ((1 << mantissa_bits) - 1);
    if biased != 0 {
      let sig = (mantissa | 1 << mantissa_bits) << (63 - mantissa_bits);
      Unpacked { sign, exp: biased - bias, sig }
    } else {
      // Subnormal: `mantissa × 2^(1 - bias - mantissa_bits)`.
      let lz = mantissa.leading_zeros();
      let sig = mantissa << lz;
      let exp = 63 - lz as i32 + (1 - bias - mantissa_bits as i32);
      Unpacked { sign, exp, sig }
    }
  }

  /// Unpack an integer given by sign and magnitude `abs` (nonzero). Returns the `Unpacked` and
  /// the sticky bit: whether any bits of `abs` did not fit in the 64-bit `sig`.
  #[inline]
  pub(crate) const fn from_magnitude(sign: bool, abs: u128) -> (Self, bool) {
    debug_assert!(abs != 0);
    let lz = abs.leading_zeros();
    let normalised = abs << lz;
    let sig = (normalised >> 64) as u64;
    let sticky = normalised as u64 != 0;
    (Unpacked { sign, exp: 127 - lz as i32, sig }, sticky)
  }
}
