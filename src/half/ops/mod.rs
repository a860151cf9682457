use super::*;
use crate::round::Rounding;

/// Addition and subtraction.
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Remainder.
mod rem;

impl Half {
  /// The kernel shared by all the binary operations: widen both operands to the working
  /// precision, apply `op` there, and narrow the result with policy `R`.
  ///
  /// For `+`, `-`, and `*`, the `f64` result is exact (11-bit significands, and exponents close
  /// enough together). For `/` it is rounded once, but a quotient of 11-bit significands can never
  /// lie within 2<sup>-53</sup> (relative) of a half or of a midpoint between two halves without
  /// being exactly equal to it, so narrowing the rounded quotient gives the same result as
  /// narrowing the exact one. Either way, the result is correctly rounded under every policy.
  #[inline]
  pub(crate) fn binary<R: Rounding>(self, other: Self, op: impl FnOnce(f64, f64) -> f64) -> Self {
    Self::from_f64_with::<R>(op(self.to_f64(), other.to_f64()))
  }
}

/// Helper macro for implementing operators for all combinations of value and reference, and
/// between halves and each of the host float types `$float`.
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident; $($float:ty),*) => {
    impl $trait<Half> for Half {
      type Output = Half;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl $trait<&Half> for Half {
      type Output = Half;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl $trait<Half> for &Half {
      type Output = Half;

      #[inline]
      fn $name(self, rhs: Half) -> Self::Output { (*self).$name(rhs) }
    }

    impl $trait<&Half> for &Half {
      type Output = Half;

      #[inline]
      fn $name(self, rhs: &Half) -> Self::Output { (*self).$name(*rhs) }
    }

    impl $trait_assign<Half> for Half {
      #[inline]
      fn $name_assign(&mut self, rhs: Half) { *self = self.$name(rhs) }
    }

    impl $trait_assign<&Half> for Half {
      #[inline]
      fn $name_assign(&mut self, rhs: &Half) { *self = self.$name(*rhs) }
    }

    // Mixed with host floats: the result stays in the host type, so that a chain of operations is
    // only narrowed once, when assigned back into a half.
    $(
      impl $trait<$float> for Half {
        type Output = $float;

        #[inline]
        fn $name(self, rhs: $float) -> Self::Output { <$float>::from(self).$name(rhs) }
      }

      impl $trait<Half> for $float {
        type Output = $float;

        #[inline]
        fn $name(self, rhs: Half) -> Self::Output { self.$name(<$float>::from(rhs)) }
      }

      impl $trait_assign<$float> for Half {
        #[inline]
        fn $name_assign(&mut self, rhs: $float) {
          *self = Half::from_f64(f64::from(*self).$name(f64::from(rhs)))
        }
      }
    )*
  }
}

pub(crate) use mk_ops;

/// Macro for instantating the suite of tests for a binary operator of halves. `$with` is the
/// name of the function performing the operation with an explicit policy.
#[cfg(test)]
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt, $with:ident) => {
    use crate::Half;
    use crate::round::*;
    use crate::half::rational;
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = Half::ONE;
      let mut b = Half::NEG_ONE;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
      let _: f32 = a $op 1f32;
      let _: f64 = 1f64 $op b;
      a $op_assign 1f32;
      b $op_assign 1f64;
    }

    /// Aux function: check that `a $op b` is rounded correctly under policy `R`.
    fn is_correct_rounded<R: Rounding>(a: Half, b: Half) -> bool {
      let half = a.$with::<R>(b);
      let is_div_by_zero = stringify!($op) == "/" && b.is_zero();
      match (Rational::try_from(a), Rational::try_from(b)) {
        (Ok(a), Ok(b)) if !is_div_by_zero => {
          let exact = a $op b;
          rational::is_correct_rounded(exact, half, R::STYLE)
        },
        _ => {
          // Infinities, NaNs and division by zero: the result is exact, an infinity, a zero, or
          // a NaN, which the host computes for us.
          let expected = a.to_f64() $op b.to_f64();
          if expected.is_nan() {
            half.is_nan()
          } else {
            half.to_f64() == expected && half.sign_bit() == expected.is_sign_negative()
          }
        },
      }
    }

    fn is_correct_rounded_all(a: Half, b: Half) -> bool {
      is_correct_rounded::<Indeterminate>(a, b)
      && is_correct_rounded::<TowardZero>(a, b)
      && is_correct_rounded::<ToNearest>(a, b)
      && is_correct_rounded::<TowardInfinity>(a, b)
      && is_correct_rounded::<TowardNegInfinity>(a, b)
    }

    /// The operator uses the default policy, and agrees with computing in `f64` and narrowing.
    fn is_default(a: Half, b: Half) -> bool {
      let expected = Half::from_f64(a.to_f64() $op b.to_f64());
      let result = a $op b;
      (result.is_nan() && expected.is_nan()) || result.to_bits() == expected.to_bits()
    }

    /// Mixed with a host float, the operation is the host's, and assigning narrows once with the
    /// default policy.
    fn is_mixed(a: Half, b: Half) -> bool {
      let same = |x: f64, y: f64| (x.is_nan() && y.is_nan()) || x.to_bits() == y.to_bits();
      let (x, y) = (a.to_f64(), b.to_f64());
      let mut assigned = a;
      assigned $op_assign y;
      same(a $op y, x $op y)
      && same(x $op b, x $op y)
      && same(f64::from(a $op b.to_f32()), f64::from(a.to_f32() $op b.to_f32()))
      && same(assigned.to_f64(), Half::from_f64(x $op y).to_f64())
    }

    #[test]
    fn exhaustive_vs_some() {
      let others = [0x3555, 0x0001, 0xc8a3, 0x7bff, 0x83ff].map(Half::from_bits);
      for a in Half::cases_exhaustive() {
        for &b in &others {
          assert!(is_correct_rounded_all(a, b), "{:?} ⋅ {:?}", a, b);
          assert!(is_correct_rounded_all(b, a), "{:?} ⋅ {:?}", b, a);
          assert!(is_default(a, b), "{:?} ⋅ {:?}", a, b);
          assert!(is_mixed(a, b), "{:?} ⋅ {:?}", a, b);
        }
      }
    }

    #[test]
    fn specials() {
      let specials = [
        Half::ZERO, Half::NEG_ZERO, Half::INFINITY, Half::NEG_INFINITY, Half::NAN,
        Half::SIGNALING_NAN, Half::ONE, Half::MAX, Half::MIN, Half::DENORM_MIN,
      ];
      for &a in &specials {
        for &b in &specials {
          assert!(is_correct_rounded_all(a, b), "{:?} ⋅ {:?}", a, b);
          assert!(is_default(a, b), "{:?} ⋅ {:?}", a, b);
        }
      }
    }

    proptest!{
      #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
      #[test]
      fn proptest(
        a in Half::cases_proptest_all(),
        b in Half::cases_proptest_all(),
      ) {
        assert!(is_correct_rounded_all(a, b), "{:?} ⋅ {:?}", a, b);
        assert!(is_default(a, b), "{:?} ⋅ {:?}", a, b);
        assert!(is_mixed(a, b), "{:?} ⋅ {:?}", a, b);
      }

      #[test]
      fn proptest_finite(
        a in Half::cases_proptest(),
        b in Half::cases_proptest(),
      ) {
        assert!(is_correct_rounded_all(a, b), "{:?} ⋅ {:?}", a, b)
      }
    }
  }
}

#[cfg(test)]
pub(crate) use mk_tests;
