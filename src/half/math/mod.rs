//! Mathematical functions. These all follow the same recipe: widen to the working precision,
//! compute with [`libm`], and narrow with the [default rounding policy](crate::DefaultRounding).
//!
//! The result is therefore as accurate as `libm`'s `f64` function plus one rounding. For the
//! functions whose exact result is always representable (`fmod`, `remainder`, `fmin`, `fdim`,
//! the integer roundings, etc) this is exact; [`sqrt`](Half::sqrt) and [`fma`](Half::fma) are
//! correctly rounded; for the transcendental functions the result is within 1 ULP.

use super::*;
use crate::round::DefaultRounding;

/// Integer rounding: ceil, floor, trunc, round, rint.
mod round;

/// Fused multiply-add.
mod fma;

/// Define a function of one argument, computed by the `f64` function `$f`.
macro_rules! unary {
  ($($(#[$doc:meta])* $name:ident = $f:path;)*) => {
    impl Half {
      $(
        $(#[$doc])*
        #[inline]
        pub fn $name(self) -> Self {
          Self::from_f64_with::<DefaultRounding>($f(self.to_f64()))
        }
      )*
    }
  };
}

/// Define a function of two arguments, computed by the `f64` function `$f`.
macro_rules! binary {
  ($($(#[$doc:meta])* $name:ident = $f:path;)*) => {
    impl Half {
      $(
        $(#[$doc])*
        #[inline]
        pub fn $name(self, other: Self) -> Self {
          self.binary::<DefaultRounding>(other, $f)
        }
      )*
    }
  };
}

unary!{
  /// e<sup>`self`</sup>.
  exp = libm::exp;
  /// 2<sup>`self`</sup>.
  exp2 = libm::exp2;
  /// e<sup>`self`</sup> - 1, accurate even if `self` is close to zero.
  exp_m1 = libm::expm1;
  /// Natural logarithm.
  ln = libm::log;
  /// Base 10 logarithm.
  log10 = libm::log10;
  /// Base 2 logarithm.
  log2 = libm::log2;
  /// ln(1 + `self`), accurate even if `self` is close to zero.
  ln_1p = libm::log1p;
  /// Square root. NaN for negative numbers other than `-0.0`.
  ///
  /// This is correctly rounded: the `f64` square root of a half is never close enough to a half,
  /// or to a midpoint between two, to flip a rounding decision.
  sqrt = libm::sqrt;
  /// Cube root.
  cbrt = libm::cbrt;
  /// Sine (in radians).
  sin = libm::sin;
  /// Cosine (in radians).
  cos = libm::cos;
  /// Tangent (in radians).
  tan = libm::tan;
  /// Arcsine, in radians in `[-π/2, π/2]`. NaN outside `[-1, 1]`.
  asin = libm::asin;
  /// Arccosine, in radians in `[0, π]`. NaN outside `[-1, 1]`.
  acos = libm::acos;
  /// Arctangent, in radians in `[-π/2, π/2]`.
  atan = libm::atan;
  /// Hyperbolic sine.
  sinh = libm::sinh;
  /// Hyperbolic cosine.
  cosh = libm::cosh;
  /// Hyperbolic tangent.
  tanh = libm::tanh;
  /// Inverse hyperbolic sine.
  asinh = libm::asinh;
  /// Inverse hyperbolic cosine.
  acosh = libm::acosh;
  /// Inverse hyperbolic tangent.
  atanh = libm::atanh;
  /// Error function.
  erf = libm::erf;
  /// Complementary error function, 1 - erf(`self`).
  erfc = libm::erfc;
  /// Natural logarithm of the absolute value of the gamma function.
  lgamma = libm::lgamma;
  /// Gamma function.
  tgamma = libm::tgamma;
}

binary!{
  /// IEEE remainder: `self - n × other`, with `n` the quotient rounded to nearest (ties to even).
  /// The result is exact.
  remainder = libm::remainder;
  /// The smaller of `self` and `other`, ignoring NaN: if one argument is NaN, the other is
  /// returned.
  fmin = libm::fmin;
  /// The larger of `self` and `other`, ignoring NaN: if one argument is NaN, the other is
  /// returned.
  fmax = libm::fmax;
  /// Positive difference: `self - other` if positive, `+0.0` otherwise.
  fdim = libm::fdim;
  /// sqrt(`self`² + `other`²), without undue overflow in the intermediate result.
  hypot = libm::hypot;
  /// `self` raised to the power `other`.
  powf = libm::pow;
  /// Four-quadrant arctangent of `self` (y) and `other` (x), in radians in `[-π, π]`.
  atan2 = libm::atan2;
}

impl Half {
  /// IEEE remainder, as [`remainder`](Self::remainder), and also the low 3 (at least) bits of the
  /// quotient `n`, with the sign of `self / other`.
  pub fn remquo(self, other: Self) -> (Self, i32) {
    let (rem, quo) = libm::remquo(self.to_f64(), other.to_f64());
    (Self::from_f64_with::<DefaultRounding>(rem), quo)
  }

  /// `self` raised to the integer power `n`.
  #[inline]
  pub fn powi(self, n: i32) -> Self {
    Self::from_f64_with::<DefaultRounding>(libm::pow(self.to_f64(), n as f64))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::round::{Rounding, RoundStyle};

  /// Rounding of an `f64` result under the default policy.
  fn narrow(x: f64) -> u16 {
    Half::from_f64(x).to_bits()
  }

  #[test]
  fn exp_log() {
    assert_eq!(Half::ZERO.exp().to_bits(), 0x3c00);
    assert_eq!(Half::ONE.exp().to_bits(), narrow(core::f64::consts::E));
    assert_eq!(Half::from_f32(10.).exp2().to_bits(), narrow(libm::exp2(10.)));
    assert_eq!(Half::from_f32(1024.).log2().to_bits(), narrow(libm::log2(1024.)));
    assert_eq!(Half::from_f32(1000.).log10().to_bits(), narrow(libm::log10(1000.)));
    assert_eq!(Half::ONE.ln().to_bits(), 0x0000);
    assert_eq!(Half::ZERO.ln().to_bits(), 0xfc00);
    assert!(Half::NEG_ONE.ln().is_nan());
    assert_eq!(Half::DENORM_MIN.exp_m1().to_bits(), narrow(libm::expm1(2f64.powi(-24))));
    assert_eq!(Half::DENORM_MIN.ln_1p().to_bits(), narrow(libm::log1p(2f64.powi(-24))));
    assert_eq!(Half::from_f32(20.).exp().to_bits(), narrow(libm::exp(20.)));
  }

  #[test]
  fn roots() {
    assert_eq!(Half::from_f32(16.).sqrt().to_f32(), 4.);
    assert_eq!(Half::NEG_ZERO.sqrt().to_bits(), 0x8000);
    assert!(Half::NEG_ONE.sqrt().is_nan());
    assert_eq!(Half::INFINITY.sqrt().to_bits(), 0x7c00);
    assert_eq!(Half::from_f32(-27.).cbrt().to_bits(), narrow(libm::cbrt(-27.)));
    assert_eq!(Half::from_f32(3.).hypot(Half::from_f32(4.)).to_bits(), narrow(libm::hypot(3., 4.)));
    assert_eq!(Half::MAX.hypot(Half::MAX).to_bits(), narrow(libm::hypot(65504., 65504.)));
  }

  /// `sqrt` is correctly rounded under the default policy: checked by squaring the neighbours,
  /// which is exact in `f64`.
  #[test]
  fn sqrt_exhaustive() {
    let style = DefaultRounding::STYLE;
    for x in Half::cases_exhaustive().filter(|x| !x.sign_bit()) {
      let root = x.sqrt();
      let (lo, hi) = (root.next_down(), root.next_up());
      let square = |h: Half| h.to_f64() * h.to_f64();
      let x = x.to_f64();
      let ok = match style {
        RoundStyle::Indeterminate | RoundStyle::TowardZero | RoundStyle::TowardNegInfinity =>
          square(root) <= x && x < square(hi),
        RoundStyle::TowardInfinity =>
          square(lo) < x && x <= square(root),
        RoundStyle::ToNearest => {
          let mid_lo = (lo.to_f64() + root.to_f64()) / 2.;
          let mid_hi = (root.to_f64() + hi.to_f64()) / 2.;
          // A square root is never exactly a midpoint.
          mid_lo * mid_lo < x && x < mid_hi * mid_hi
        },
      };
      assert!(ok, "{root:?}");
    }
  }

  #[test]
  fn trig() {
    assert_eq!(Half::ZERO.sin().to_bits(), 0x0000);
    assert_eq!(Half::NEG_ZERO.sin().to_bits(), 0x8000);
    assert_eq!(Half::ZERO.cos().to_bits(), 0x3c00);
    assert_eq!(Half::ONE.atan().to_bits(), narrow(core::f64::consts::FRAC_PI_4));
    assert_eq!(Half::NEG_ONE.acos().to_bits(), narrow(core::f64::consts::PI));
    assert!(Half::from_f32(2.).asin().is_nan());
    assert!(Half::INFINITY.sin().is_nan());
    assert_eq!(Half::ONE.atan2(Half::NEG_ONE).to_bits(), narrow(3. * core::f64::consts::FRAC_PI_4));
    assert_eq!(Half::ZERO.tanh().to_bits(), 0x0000);
    assert_eq!(Half::INFINITY.tanh().to_bits(), 0x3c00);
    assert_eq!(Half::ONE.asinh().to_bits(), narrow(libm::asinh(1.)));
    assert_eq!(Half::ONE.acosh().to_bits(), narrow(libm::acosh(1.)));
    assert_eq!(Half::ONE.atanh().to_bits(), 0x7c00);
    assert_eq!(Half::ONE.sinh().to_bits(), narrow(libm::sinh(1.)));
    assert_eq!(Half::ONE.cosh().to_bits(), narrow(libm::cosh(1.)));
    assert_eq!(Half::ONE.tan().to_bits(), narrow(libm::tan(1.)));
  }

  #[test]
  fn special_functions() {
    assert_eq!(Half::ZERO.erf().to_bits(), 0x0000);
    assert_eq!(Half::INFINITY.erf().to_bits(), 0x3c00);
    assert_eq!(Half::ZERO.erfc().to_bits(), 0x3c00);
    assert_eq!(Half::from_f32(5.).tgamma().to_bits(), narrow(libm::tgamma(5.)));
    assert_eq!(Half::ONE.lgamma().to_bits(), narrow(libm::lgamma(1.)));
    assert_eq!(Half::ZERO.tgamma().to_bits(), 0x7c00);
  }

  #[test]
  fn binary_functions() {
    let (a, b) = (Half::from_f32(7.), Half::from_f32(2.));
    assert_eq!(a.remainder(b).to_f32(), -1.);
    assert_eq!(a.remquo(b).0.to_f32(), -1.);
    assert_eq!(a.remquo(b).1 & 7, 4);
    assert_eq!(a.fmin(b).to_f32(), 2.);
    assert_eq!(a.fmax(b).to_f32(), 7.);
    assert_eq!(a.fmin(Half::NAN).to_f32(), 7.);
    assert_eq!(Half::NAN.fmax(b).to_f32(), 2.);
    assert_eq!(a.fdim(b).to_f32(), 5.);
    assert_eq!(b.fdim(a).to_bits(), 0x0000);
    assert_eq!(b.powf(Half::from_f32(10.)).to_bits(), narrow(libm::pow(2., 10.)));
    assert_eq!(b.powi(-2).to_bits(), narrow(libm::pow(2., -2.)));
    assert_eq!(Half::NAN.powi(0).to_bits(), 0x3c00);
  }
}
