use super::*;

use crate::round::{RoundStyle, TIES_TO_EVEN};

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{PowerOf2, Abs};

/// The error type returned when a [Half] cannot be converted to a [Rational] because it is an
/// infinity or a NaN.
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct IsNotFinite;

impl Half {
  /// Convert a **finite** half into a [Rational] value.
  ///
  /// This is a **super-explicit** and **super-obvious** rendition of the decoding rules, since
  /// this is what we will check our optimised implementations against!
  fn into_rational_finite(self) -> Rational {
    debug_assert!(self.abs_bits() < Half::EXP_MASK);
    let sign: i64 = if self.sign_bit() {-1} else {1};
    let biased = self.biased_exponent() as i64;
    let mantissa = self.mantissa() as i64;
    // Subnormals (biased exponent 0) have no hidden bit and the same scale as biased exponent 1.
    let (significand, exponent) =
      if biased == 0 {
        (mantissa, 1 - 15 - 10)
      } else {
        (mantissa + 1024, biased - 15 - 10)
      };
    Rational::from(sign * significand) * Rational::power_of_2(exponent)
  }
}

impl TryFrom<Half> for Rational {
  type Error = IsNotFinite;

  fn try_from(value: Half) -> Result<Self, Self::Error> {
    if value.abs_bits() >= Half::EXP_MASK {
      Err(IsNotFinite)
    } else {
      Ok(value.into_rational_finite())
    }
  }
}

/// The magnitude of the half with absolute bit pattern `abs`, where the pattern of infinity
/// (`0x7c00`) stands for 2^16, the value the next binade would start with. Every other pattern
/// must be finite.
fn magnitude(abs: u16) -> Rational {
  if abs == Half::EXP_MASK {
    Rational::power_of_2(16i64)
  } else {
    Half::from_bits(abs).into_rational_finite()
  }
}

/// Whether, on an exact tie between the half with absolute bit pattern `abs` and its neighbour
/// `other`, the tie is broken in favour of `abs`.
fn wins_tie(abs: u16, other: u16) -> bool {
  if TIES_TO_EVEN {abs & 1 == 0} else {abs > other}
}

/// Check whether the rational number `exact` should be rounded to `half` under `style`.
///
///   - Only the exact number 0 is rounded to a zero (of either sign), and nothing rounds to NaN.
///   - Otherwise the sign has to match (even for a zero result), and the magnitude of `half` has to be the right
///     neighbour of the magnitude of `exact`: the one below for truncation, the one above for
///     rounding away from zero, or the nearer one for rounding to nearest.
///
/// The directed styles truncate or round away from zero depending on the sign; e.g. rounding
/// toward +∞ rounds a negative value toward zero.
pub fn is_correct_rounded(exact: Rational, half: Half, style: RoundStyle) -> bool {
  if half.is_nan() { return false }
  let zero = Rational::from(0);
  if exact == zero { return half.abs_bits() == 0 }
  let negative = exact < zero;
  if half.sign_bit() != negative { return false }

  let a = (&exact).abs();
  let b = half.abs_bits();
  let infinity = Half::EXP_MASK;
  let max = Half::MAX.abs_bits();

  enum Mode { Down, Up, Nearest }
  let mode = match style {
    RoundStyle::Indeterminate | RoundStyle::TowardZero => Mode::Down,
    RoundStyle::ToNearest => Mode::Nearest,
    RoundStyle::TowardInfinity => if negative {Mode::Down} else {Mode::Up},
    RoundStyle::TowardNegInfinity => if negative {Mode::Up} else {Mode::Down},
  };

  match mode {
    Mode::Down => {
      // `magnitude(b) ≤ a < magnitude(b + 1)`. Beyond the largest finite value, only
      // `Indeterminate` overflows to infinity; the other truncating styles saturate.
      let overflows = style == RoundStyle::Indeterminate;
      if b == infinity {
        overflows && a >= magnitude(infinity)
      } else if b == max && !overflows {
        a >= magnitude(max)
      } else {
        magnitude(b) <= a && a < magnitude(b + 1)
      }
    },
    Mode::Up => {
      // `magnitude(b - 1) < a ≤ magnitude(b)`, where infinity covers everything above the
      // largest finite value.
      if b == infinity {
        a > magnitude(max)
      } else {
        a <= magnitude(b) && (b == 0 || magnitude(b - 1) < a)
      }
    },
    Mode::Nearest => {
      // `a` must lie between the midpoints to the neighbours below and above, inclusive of
      // either one only if the tie would be broken in favour of `b`.
      let curr = magnitude(b);
      let above_lower = if b == 0 {true} else {
        let mid = (magnitude(b - 1) + &curr) / Rational::from(2);
        mid < a || (mid == a && wins_tie(b, b - 1))
      };
      let below_upper = if b == infinity {true} else {
        let mid = (&curr + magnitude(b + 1)) / Rational::from(2);
        a < mid || (a == mid && wins_tie(b, b + 1))
      };
      above_lower && below_upper
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn examples() {
    assert_eq!(Rational::try_from(Half::from_bits(0x3c00)), Ok(Rational::from(1)));
    assert_eq!(Rational::try_from(Half::from_bits(0xc000)), Ok(Rational::from(-2)));
    assert_eq!(Rational::try_from(Half::from_bits(0x3555)), Ok(Rational::from_signeds(1365, 4096)));
    assert_eq!(Rational::try_from(Half::from_bits(0x7bff)), Ok(Rational::from(65504)));
    assert_eq!(Rational::try_from(Half::from_bits(0x0400)), Ok(Rational::from_signeds(1, 1 << 14)));
    assert_eq!(Rational::try_from(Half::from_bits(0x0001)), Ok(Rational::from_signeds(1, 1 << 24)));
    assert_eq!(Rational::try_from(Half::from_bits(0x83ff)), Ok(Rational::from_signeds(-1023, 1 << 24)));
    assert_eq!(Rational::try_from(Half::from_bits(0x8000)), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(Half::from_bits(0x7c00)), Err(IsNotFinite));
    assert_eq!(Rational::try_from(Half::from_bits(0xfe00)), Err(IsNotFinite));
  }

  #[test]
  fn monotonic_exhaustive() {
    let mut prev = Rational::from(0);
    for abs in 1 .. Half::EXP_MASK {
      let curr = magnitude(abs);
      assert!(prev < curr, "{abs:#06x}");
      prev = curr;
    }
  }

  #[test]
  fn oracle_sanity() {
    let one = Half::from_bits(0x3c00);
    let next = Half::from_bits(0x3c01);
    let half_ulp = Rational::from_signeds(1, 1 << 11);
    let tie = Rational::from(1) + &half_ulp;
    assert!(is_correct_rounded(Rational::from(1), one, RoundStyle::TowardInfinity));
    assert!(is_correct_rounded(tie.clone(), one, RoundStyle::TowardZero));
    assert!(!is_correct_rounded(tie.clone(), next, RoundStyle::TowardZero));
    assert!(is_correct_rounded(tie.clone(), next, RoundStyle::TowardInfinity));
    assert_eq!(is_correct_rounded(tie.clone(), one, RoundStyle::ToNearest), TIES_TO_EVEN);
    assert_eq!(is_correct_rounded(tie.clone(), next, RoundStyle::ToNearest), !TIES_TO_EVEN);
    assert!(is_correct_rounded(-tie.clone(), -one, RoundStyle::TowardInfinity));
    assert!(is_correct_rounded(-tie, -next, RoundStyle::TowardNegInfinity));

    let big = Rational::from(1 << 20);
    assert!(is_correct_rounded(big.clone(), Half::INFINITY, RoundStyle::Indeterminate));
    assert!(is_correct_rounded(big.clone(), Half::MAX, RoundStyle::TowardZero));
    assert!(is_correct_rounded(-big.clone(), Half::MIN, RoundStyle::TowardInfinity));
    assert!(!is_correct_rounded(-big, Half::NEG_INFINITY, RoundStyle::TowardZero));
    assert!(!is_correct_rounded(Rational::from(1), Half::NAN, RoundStyle::ToNearest));
  }
}
