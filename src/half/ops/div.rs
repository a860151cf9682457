use super::*;
use crate::round::DefaultRounding;

impl Half {
  /// Return `self / other`, rounded with policy `R`. The `/` operator is the same with
  /// [`DefaultRounding`].
  ///
  /// Division of a nonzero number by a zero gives an infinity with the product of the signs; `0 /
  /// 0` gives NaN.
  #[inline]
  pub fn div_with<R: Rounding>(self, other: Self) -> Self {
    self.binary::<R>(other, |a, b| a / b)
  }

  #[inline]
  pub(crate) fn div(self, other: Self) -> Self {
    self.div_with::<DefaultRounding>(other)
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign; f32, f64}
