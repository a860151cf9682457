use super::*;

impl Half {
  /// Returns `-self`, flipping the sign bit. This is exact and never rounds; NaNs just get their
  /// sign flipped. Same as the `-` operator, but `const`.
  #[inline]
  pub const fn negate(self) -> Self {
    Self(self.0 ^ Self::SIGN_MASK)
  }

  /// Return the absolute value of `self`, clearing the sign bit. This is exact and never rounds.
  #[inline]
  pub const fn abs(self) -> Self {
    Self(self.abs_bits())
  }

  /// Returns `1.0` if the sign bit is clear (including `+0.0` and `+∞`), `-1.0` if it is set, and
  /// NaN if `self` is NaN.
  #[inline]
  pub const fn signum(self) -> Self {
    if self.is_nan() {self} else {Self::ONE.copysign(self)}
  }

  /// Prefix increment: add one to `self` (in the working precision, narrowing with the
  /// [default policy](crate::DefaultRounding)) and return the *new* value.
  ///
  /// ```
  /// # use soft_half::Half;
  /// let mut x = Half::ONE;
  /// assert_eq!(x.inc().to_f32(), 2.);
  /// assert_eq!(x.to_f32(), 2.);
  /// ```
  #[inline]
  pub fn inc(&mut self) -> Self {
    *self = Self::from_f64(self.to_f64() + 1.);
    *self
  }

  /// Prefix decrement: subtract one from `self` and return the *new* value. See
  /// [`inc`](Self::inc).
  #[inline]
  pub fn dec(&mut self) -> Self {
    *self = Self::from_f64(self.to_f64() - 1.);
    *self
  }

  /// Postfix increment: add one to `self` and return the *old* value. See [`inc`](Self::inc).
  ///
  /// ```
  /// # use soft_half::Half;
  /// let mut x = Half::ONE;
  /// assert_eq!(x.post_inc().to_f32(), 1.);
  /// assert_eq!(x.to_f32(), 2.);
  /// ```
  #[inline]
  pub fn post_inc(&mut self) -> Self {
    let old = *self;
    self.inc();
    old
  }

  /// Postfix decrement: subtract one from `self` and return the *old* value. See
  /// [`inc`](Self::inc).
  #[inline]
  pub fn post_dec(&mut self) -> Self {
    let old = *self;
    self.dec();
    old
  }
}

impl core::ops::Neg for Half {
  type Output = Half;

  #[inline]
  fn neg(self) -> Self::Output {
    self.negate()
  }
}

impl core::ops::Neg for &Half {
  type Output = Half;

  #[inline]
  fn neg(self) -> Self::Output {
    self.negate()
  }
}
