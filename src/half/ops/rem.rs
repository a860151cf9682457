use super::*;

impl Half {
  /// Return the remainder of `self / other` truncated toward zero, `self - n × other` with `n`
  /// the truncated quotient, like C's `fmod`. The result has the sign of `self` and is always
  /// exact, so there is no rounding policy.
  ///
  /// NaN if `self` is infinite or `other` is zero.
  #[inline]
  pub fn fmod(self, other: Self) -> Self {
    // Exact: the remainder is representable whenever the operands are.
    self.binary::<crate::round::ToNearest>(other, libm::fmod)
  }

  #[inline]
  pub(crate) fn rem(self, other: Self) -> Self {
    self.fmod(other)
  }
}

use core::ops::{Rem, RemAssign};
super::mk_ops!{Rem, RemAssign, rem, rem_assign; f32, f64}
