use super::*;
use crate::round::DefaultRounding;

impl Half {
  /// Return `self * other`, rounded with policy `R`. The `*` operator is the same with
  /// [`DefaultRounding`].
  #[inline]
  pub fn mul_with<R: Rounding>(self, other: Self) -> Self {
    self.binary::<R>(other, |a, b| a * b)
  }

  #[inline]
  pub(crate) fn mul(self, other: Self) -> Self {
    self.mul_with::<DefaultRounding>(other)
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign; f32, f64}
