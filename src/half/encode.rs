use super::*;
use crate::round::Rounding;
use crate::utl::{likely, unlikely};

impl Unpacked {
  /// Encode a half, rounding according to `R` if necessary.
  ///
  /// `sticky` is the sticky bit: it is `true` **if and only if** some nonzero bits of the exact
  /// value were already lost before reaching `self.sig` (e.g. when unpacking a 128-bit integer).
  ///
  /// # Safety
  ///
  /// [`self.is_normalised()`](Self::is_normalised) has to hold, or the result is meaningless (but
  /// memory safe).
  pub(crate) const fn encode_round<R: Rounding>(self, sticky: bool) -> Half {
    debug_assert!(self.is_normalised());
    let style = R::STYLE;
    let sign_bits = (self.sign as u16) << 15;

    // Overflow: the value is at least 2^16, which is beyond the largest finite half (65504) by
    // more than any rounding can absorb. Depending on the policy, the result is infinity or the
    // largest finite value.
    if unlikely(self.exp > Half::EXP_BIAS) {
      let abs = if style.overflows_to_infinity(self.sign) {Half::EXP_MASK} else {Half::MAX.0};
      return Half(sign_bits | abs)
    }

    // Now we have to pick the bits that make up the result, and the `round` and `sticky` bits
    // that tell us how to round them. There are two cases.
    //
    // Normal: the 11 leftmost bits of `sig` (the leading 1 plus the 10 mantissa bits) are kept,
    // the 12th is `round`, and all the rest accumulate into `sticky`.
    //
    //   sig:  1mmmmmmmmmm|r|ssssssss…
    //
    // Subnormal: the exponent field is fixed at 0, which stands for an exponent of -14; the
    // significand must be shifted right by the difference (at least 1 place, or more), so that
    // the leading 1 lands inside the mantissa field or falls off the end entirely.
    //
    //   sig:  0001mmmmmmm|r|ssssssss…   (exp = -17, shifted 3 places)
    //
    // In both cases the kept bits are laid out as `exponent_field << 10 | mantissa_field`.
    let (body, round, sticky) = if likely(self.exp >= 1 - Half::EXP_BIAS) {
      const SHIFT: u32 = 63 - Half::MANTISSA_BITS;
      let biased = (self.exp + Half::EXP_BIAS) as u16;
      let mantissa = (self.sig >> SHIFT) as u16 & Half::MANTISSA_MASK;
      let body = biased << Half::MANTISSA_BITS | mantissa;
      let round = self.sig >> (SHIFT - 1) & 1 != 0;
      let sticky = sticky | (self.sig & ((1 << (SHIFT - 1)) - 1) != 0);
      (body, round, sticky)
    } else {
      // The mantissa field holds `value / 2^-24`, so `sig` (whose binary point is at bit 63)
      // must be shifted right by `63 - (exp + 24)`, which is at least 54 here.
      let shift = (63 - Half::MANTISSA_BITS as i32 + 1 - Half::EXP_BIAS - self.exp) as u32;
      if shift < 64 {
        let body = (self.sig >> shift) as u16;
        let round = self.sig >> (shift - 1) & 1 != 0;
        let sticky = sticky | (self.sig & ((1 << (shift - 1)) - 1) != 0);
        (body, round, sticky)
      } else if shift == 64 {
        // The leading 1 is the round bit.
        (0, true, sticky | (self.sig << 1 != 0))
      } else {
        // Even the round bit is lost; everything is sticky.
        (0, false, true)
      }
    };

    // Round. Note that incrementing `body` may carry out of the mantissa field into the exponent
    // field: this is exactly right, because the bit patterns of halves are ordered like their
    // magnitudes. A carry out of the largest subnormal `0x03ff` gives the smallest normal
    // `0x0400`, and a carry out of the largest finite `0x7bff` gives infinity `0x7c00`.
    let odd = body & 1 != 0;
    let round_up = style.round_up(self.sign, odd, round, sticky);
    Half(sign_bits | (body + round_up as u16))
  }
}

impl Half {
  /// Narrow a number in an IEEE binary format, given by sign and magnitude bits `abs`, with
  /// `mantissa_bits` explicit mantissa bits and `exponent_bits` exponent bits.
  ///
  ///   - Infinities and zeros map to infinities and zeros of the same sign.
  ///   - NaNs map to quiet NaNs of the same sign, keeping the highest bits of the payload.
  ///   - Everything else is rounded according to `R`.
  #[inline]
  pub(crate) const fn narrow_ieee<R: Rounding>(
    sign: bool,
    abs: u64,
    mantissa_bits: u32,
    exponent_bits: u32,
  ) -> Self {
    let sign_bits = (sign as u16) << 15;
    let exp_mask = ((1u64 << exponent_bits) - 1) << mantissa_bits;
    if unlikely(abs >= exp_mask) {
      let payload = ((abs & !exp_mask) >> (mantissa_bits - Half::MANTISSA_BITS)) as u16;
      return if abs == exp_mask {
        Half(sign_bits | Half::EXP_MASK)
      } else {
        Half(sign_bits | Half::EXP_MASK | Half::QUIET_BIT | payload)
      }
    }
    if abs == 0 {
      return Half(sign_bits)
    }
    let bias = (1i32 << (exponent_bits - 1)) - 1;
    Unpacked::from_ieee(sign, abs, mantissa_bits, bias).encode_round::<R>(false)
  }
}
