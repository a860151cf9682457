use super::*;

impl Half {
  /// The size of this type in bits.
  pub const BITS: u32 = 16;

  /// Number of explicit mantissa bits (the leading bit of normal numbers is implicit).
  pub(crate) const MANTISSA_BITS: u32 = 10;

  /// Number of exponent bits.
  pub(crate) const EXPONENT_BITS: u32 = 5;

  /// The exponent bias: a biased exponent field `e` in `1..=30` means `2^(e - 15)`.
  pub(crate) const EXP_BIAS: i32 = (1 << (Self::EXPONENT_BITS - 1)) - 1;

  pub(crate) const SIGN_MASK: u16 = 1 << 15;
  pub(crate) const EXP_MASK: u16 = ((1 << Self::EXPONENT_BITS) - 1) << Self::MANTISSA_BITS;
  pub(crate) const MANTISSA_MASK: u16 = (1 << Self::MANTISSA_BITS) - 1;

  /// The top mantissa bit, which distinguishes quiet (set) from signaling (clear) NaNs.
  pub(crate) const QUIET_BIT: u16 = 1 << (Self::MANTISSA_BITS - 1);

  /// Construct a half from its raw bit representation. Every bit pattern is a valid half.
  #[inline]
  pub const fn from_bits(bits: u16) -> Self {
    Self(bits)
  }

  /// Return the raw bit representation of `self`.
  #[inline]
  pub const fn to_bits(self) -> u16 {
    self.0
  }

  /// Assemble a half from its three fields. Bits of `exponent` and `mantissa` beyond the width of
  /// their fields (5 and 10 bits respectively) are ignored.
  #[inline]
  pub const fn from_parts(sign: bool, exponent: u16, mantissa: u16) -> Self {
    Self(
      (sign as u16) << 15
      | (exponent << Self::MANTISSA_BITS) & Self::EXP_MASK
      | mantissa & Self::MANTISSA_MASK
    )
  }

  /// The sign bit (bit 15); `true` means negative. Also set for `-0.0` and negative NaNs.
  #[inline]
  pub const fn sign_bit(self) -> bool {
    self.0 & Self::SIGN_MASK != 0
  }

  /// The 5-bit biased exponent field (bits 14..10).
  #[inline]
  pub const fn biased_exponent(self) -> u16 {
    (self.0 & Self::EXP_MASK) >> Self::MANTISSA_BITS
  }

  /// The 10-bit mantissa field (bits 9..0), without the implicit leading bit.
  #[inline]
  pub const fn mantissa(self) -> u16 {
    self.0 & Self::MANTISSA_MASK
  }

  /// The bit pattern without the sign bit. Comparing these as integers compares magnitudes.
  #[inline]
  pub(crate) const fn abs_bits(self) -> u16 {
    self.0 & !Self::SIGN_MASK
  }

  /// Return the memory representation of `self` as a byte array in little-endian order.
  #[inline]
  pub const fn to_le_bytes(self) -> [u8; 2] {
    self.0.to_le_bytes()
  }

  /// Return the memory representation of `self` as a byte array in big-endian order.
  #[inline]
  pub const fn to_be_bytes(self) -> [u8; 2] {
    self.0.to_be_bytes()
  }

  /// Return the memory representation of `self` as a byte array in native byte order.
  #[inline]
  pub const fn to_ne_bytes(self) -> [u8; 2] {
    self.0.to_ne_bytes()
  }

  /// Create a half from its representation as a byte array in little-endian order.
  #[inline]
  pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
    Self(u16::from_le_bytes(bytes))
  }

  /// Create a half from its representation as a byte array in big-endian order.
  #[inline]
  pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
    Self(u16::from_be_bytes(bytes))
  }

  /// Create a half from its representation as a byte array in native byte order.
  #[inline]
  pub const fn from_ne_bytes(bytes: [u8; 2]) -> Self {
    Self(u16::from_ne_bytes(bytes))
  }
}

impl Unpacked {
  /// The leading bit of [`Unpacked::sig`].
  pub(crate) const HIDDEN_BIT: u64 = 1 << 63;

  /// Checks the invariant that the leading bit of `sig` is set.
  pub(crate) const fn is_normalised(self) -> bool {
    self.sig & Self::HIDDEN_BIT != 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fields() {
    let x = Half::from_bits(0b1_10101_1100110011);
    assert!(x.sign_bit());
    assert_eq!(x.biased_exponent(), 0b10101);
    assert_eq!(x.mantissa(), 0b1100110011);
    assert_eq!(Half::from_parts(true, 0b10101, 0b1100110011).to_bits(), x.to_bits());
  }

  #[test]
  fn from_parts_masks() {
    assert_eq!(Half::from_parts(false, 0xffff, 0).to_bits(), 0x7c00);
    assert_eq!(Half::from_parts(false, 0, 0xffff).to_bits(), 0x03ff);
  }

  #[test]
  fn fields_roundtrip_exhaustive() {
    for x in Half::cases_exhaustive_all() {
      let y = Half::from_parts(x.sign_bit(), x.biased_exponent(), x.mantissa());
      assert_eq!(x.to_bits(), y.to_bits());
    }
  }

  #[test]
  fn layout() {
    assert_eq!(core::mem::size_of::<Half>(), 2);
    assert_eq!(Half::EXP_BIAS, 15);
    assert_eq!(Half::EXP_MASK, 0x7c00);
    assert_eq!(Half::MANTISSA_MASK, 0x03ff);
    assert_eq!(Half::QUIET_BIT, 0x0200);
  }

  #[test]
  fn bytes() {
    let x = Half::from_bits(0x4248);
    assert_eq!(x.to_le_bytes(), [0x48, 0x42]);
    assert_eq!(x.to_be_bytes(), [0x42, 0x48]);
    assert_eq!(Half::from_le_bytes([0x48, 0x42]).to_bits(), 0x4248);
    assert_eq!(Half::from_be_bytes([0x42, 0x48]).to_bits(), 0x4248);
    assert_eq!(Half::from_ne_bytes(x.to_ne_bytes()).to_bits(), 0x4248);
  }
}
