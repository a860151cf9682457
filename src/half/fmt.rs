use super::*;

use core::fmt::{Debug, Display, LowerExp, UpperExp, Formatter, Result};
use core::str::FromStr;

impl Debug for Half {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    let sign = self.sign_bit() as u8;
    let exponent = self.biased_exponent();
    let mantissa = self.mantissa();
    f.debug_tuple("Half")
      .field(&format_args!("0b{sign:b}_{exponent:05b}_{mantissa:010b}"))
      .finish()
  }
}

impl Debug for Unpacked {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    let sign = if self.sign {'-'} else {'+'};
    let sig_hidden = self.sig >> 63;
    let sig_rest = self.sig & !Self::HIDDEN_BIT;
    f.debug_struct("Unpacked")
      .field("sign", &format_args!("{sign}"))
      .field("exp", &format_args!("{:+}", self.exp))
      .field("sig", &format_args!("0b{sig_hidden:b}_{sig_rest:063b}"))
      .finish()
  }
}

// Text output goes through the working precision. Since every half is exactly representable as an
// `f64`, and formatting flags (precision, width, sign) are forwarded, this prints the exact value
// of the half unless asked to do otherwise.

impl Display for Half {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(&self.to_f64(), f)
  }
}

impl LowerExp for Half {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    LowerExp::fmt(&self.to_f64(), f)
  }
}

impl UpperExp for Half {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    UpperExp::fmt(&self.to_f64(), f)
  }
}

/// Parse a decimal string, with the same syntax as [`f64`]'s `FromStr` (including `inf` and
/// `NaN`). The string is parsed into an `f64` and then narrowed with the
/// [default rounding policy](crate::DefaultRounding).
///
/// Note the rounding happens twice (decimal to `f64`, `f64` to half), so for round-to-nearest
/// a decimal lying extremely close to the midpoint between two halves may, rarely, land on the
/// farther one.
///
/// ```
/// # use soft_half::Half;
/// assert_eq!("1.5".parse::<Half>().map(Half::to_bits), Ok(0x3e00));
/// assert!("1.5.".parse::<Half>().is_err());
/// ```
impl FromStr for Half {
  type Err = core::num::ParseFloatError;

  fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
    s.parse::<f64>().map(Half::from_f64)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn debug() {
    assert_eq!(format!("{:?}", Half::ONE).as_str(), "Half(0b0_01111_0000000000)");
    assert_eq!(format!("{:?}", Half::from_bits(0xbc01)).as_str(), "Half(0b1_01111_0000000001)");
    assert_eq!(format!("{:?}", Half::NAN).as_str(), "Half(0b0_11111_1000000000)");
  }

  #[test]
  fn debug_unpacked() {
    assert_eq!(
      format!("{:?}", Half::from_bits(0x4248).unpack()).as_str(),
      "Unpacked { sign: +, exp: +1, sig: 0b1_100100100000000000000000000000000000000000000000000000000000000 }",
    );
    assert_eq!(
      format!("{:?}", Half::from_bits(0x8001).unpack()).as_str(),
      "Unpacked { sign: -, exp: -24, sig: 0b1_000000000000000000000000000000000000000000000000000000000000000 }",
    );
  }

  #[test]
  fn display() {
    assert_eq!(format!("{}", Half::ONE).as_str(), "1");
    assert_eq!(format!("{}", Half::NEG_ZERO).as_str(), "-0");
    assert_eq!(format!("{}", Half::MAX).as_str(), "65504");
    assert_eq!(format!("{}", Half::from_bits(0x4248)).as_str(), "3.140625");
    assert_eq!(format!("{:.2}", Half::from_bits(0x4248)).as_str(), "3.14");
    assert_eq!(format!("{:>8}", Half::from_bits(0x3800)).as_str(), "     0.5");
    assert_eq!(format!("{}", Half::INFINITY).as_str(), "inf");
    assert_eq!(format!("{}", Half::NEG_INFINITY).as_str(), "-inf");
    assert_eq!(format!("{}", Half::NAN).as_str(), "NaN");
  }

  #[test]
  fn exp() {
    assert_eq!(format!("{:e}", Half::from_bits(0x4248)).as_str(), "3.140625e0");
    assert_eq!(format!("{:E}", Half::MIN_POSITIVE).as_str(), "6.103515625E-5");
    assert_eq!(format!("{:.1e}", Half::MAX).as_str(), "6.6e4");
  }

  #[test]
  fn parse() {
    assert_eq!("1".parse::<Half>().map(Half::to_bits), Ok(0x3c00));
    assert_eq!("-2.5".parse::<Half>().map(Half::to_bits), Ok(0xc100));
    assert_eq!("65504".parse::<Half>().map(Half::to_bits), Ok(0x7bff));
    assert_eq!("5.960464477539063e-8".parse::<Half>().map(Half::to_bits), Ok(0x0001));
    assert_eq!("-inf".parse::<Half>().map(Half::to_bits), Ok(0xfc00));
    assert!("NaN".parse::<Half>().is_ok_and(Half::is_nan));
    assert!("".parse::<Half>().is_err());
    assert!("one".parse::<Half>().is_err());
  }

  #[test]
  fn display_parse_roundtrip_exhaustive() {
    for x in Half::cases_exhaustive() {
      let parsed = format!("{x}").parse::<Half>().map(Half::to_bits);
      assert_eq!(parsed, Ok(x.to_bits()), "{x:?}")
    }
  }
}
