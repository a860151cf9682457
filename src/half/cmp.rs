use super::*;

use core::cmp::Ordering;

// Equality and ordering are IEEE: `+0.0 == -0.0`, and NaN is unordered with everything, itself
// included. So `Half` is `PartialEq` and `PartialOrd` but not `Eq` or `Ord`; use `total_cmp` for
// a total order.

impl PartialEq for Half {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.to_f64() == other.to_f64()
  }
}

impl PartialOrd for Half {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.to_f64().partial_cmp(&other.to_f64())
  }
}

/// Consistent with `==`: `+0.0` and `-0.0` hash the same. (NaNs are never equal to anything, so
/// they may hash however they like; they hash their bit pattern.)
impl core::hash::Hash for Half {
  #[inline]
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.hash_bits().hash(state);
  }
}

impl Half {
  /// The bit pattern that [`Hash`](core::hash::Hash) hashes: the raw bits, except that `-0.0` is
  /// replaced by `+0.0`.
  #[inline]
  pub const fn hash_bits(self) -> u16 {
    if self.is_zero() {0} else {self.0}
  }

  /// Total order on all bit patterns, as in IEEE 754 `totalOrder`:
  ///
  /// ```text
  ///   -NaN < -∞ < … < -0.0 < +0.0 < … < +∞ < +NaN
  /// ```
  ///
  /// Unlike `==`, this distinguishes `-0.0` from `+0.0`.
  #[inline]
  pub const fn total_cmp(self, other: Self) -> Ordering {
    // Flip the magnitude bits of negative numbers, so that larger magnitudes sort lower; then the
    // signed integer order is the total order.
    const fn key(x: Half) -> i16 {
      let bits = x.0 as i16;
      bits ^ (((bits >> 15) as u16) >> 1) as i16
    }
    let (a, b) = (key(self), key(other));
    if a < b {Ordering::Less} else if a > b {Ordering::Greater} else {Ordering::Equal}
  }

  /// `self > other`, false if either is NaN.
  #[inline]
  pub fn is_greater(self, other: Self) -> bool {
    self > other
  }

  /// `self >= other`, false if either is NaN.
  #[inline]
  pub fn is_greater_equal(self, other: Self) -> bool {
    self >= other
  }

  /// `self < other`, false if either is NaN.
  #[inline]
  pub fn is_less(self, other: Self) -> bool {
    self < other
  }

  /// `self <= other`, false if either is NaN.
  #[inline]
  pub fn is_less_equal(self, other: Self) -> bool {
    self <= other
  }

  /// `self < other || self > other`, false if either is NaN. Unlike `!=`, this is false for NaNs.
  #[inline]
  pub fn is_less_greater(self, other: Self) -> bool {
    self < other || self > other
  }

  /// True iff either argument is NaN.
  #[inline]
  pub const fn is_unordered(self, other: Self) -> bool {
    self.is_nan() || other.is_nan()
  }
}
