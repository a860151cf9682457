//! The native integer types that halves convert to and from. These are hidden from the end-user,
//! which only sees the sealed [`Int`] trait, implemented for `i8`, `i16`, `i32`, `i64`, `i128`,
//! `isize`, and their unsigned counterparts.

/// The trait for the native integer types that a [`Half`](crate::Half) can be converted to and
/// from.
///
/// This is a *sealed* type.
pub trait Int: Sealed {}

/// Actual operations implemented here.
pub trait Sealed: Copy + core::fmt::Debug + Eq + Ord {
  const MIN: Self;
  const MAX: Self;

  /// Split `self` into sign (`true` = negative) and magnitude.
  ///
  /// ```ignore
  /// assert_eq!((-5_i8).to_sign_magnitude(), (true, 5));
  /// assert_eq!(i8::MIN.to_sign_magnitude(), (true, 128));
  /// ```
  fn to_sign_magnitude(self) -> (bool, u128);

  /// The integer with sign `sign` and magnitude `magnitude`, or [`MIN`](Self::MIN) or
  /// [`MAX`](Self::MAX) if it is out of range.
  ///
  /// ```ignore
  /// assert_eq!(i8::of_sign_magnitude_saturating(true, 128), -128);
  /// assert_eq!(i8::of_sign_magnitude_saturating(false, 128), 127);
  /// assert_eq!(u8::of_sign_magnitude_saturating(true, 1), 0);
  /// ```
  fn of_sign_magnitude_saturating(sign: bool, magnitude: u128) -> Self;
}

macro_rules! impl_signed {
  ($($int:ty),*) => {$(
    impl Int for $int {}

    impl Sealed for $int {
      const MIN: Self = <$int>::MIN;
      const MAX: Self = <$int>::MAX;

      #[inline]
      fn to_sign_magnitude(self) -> (bool, u128) {
        (self < 0, self.unsigned_abs() as u128)
      }

      #[inline]
      fn of_sign_magnitude_saturating(sign: bool, magnitude: u128) -> Self {
        // `MIN` has a magnitude one greater than `MAX`.
        if sign {
          if magnitude > <$int>::MIN.unsigned_abs() as u128 { <$int>::MIN }
          else { 0u128.wrapping_sub(magnitude) as $int }
        } else if magnitude > <$int>::MAX as u128 {
          <$int>::MAX
        } else {
          magnitude as $int
        }
      }
    }
  )*}
}

macro_rules! impl_unsigned {
  ($($uint:ty),*) => {$(
    impl Int for $uint {}

    impl Sealed for $uint {
      const MIN: Self = <$uint>::MIN;
      const MAX: Self = <$uint>::MAX;

      #[inline]
      fn to_sign_magnitude(self) -> (bool, u128) {
        (false, self as u128)
      }

      #[inline]
      fn of_sign_magnitude_saturating(sign: bool, magnitude: u128) -> Self {
        if sign { return 0 }
        if magnitude > <$uint>::MAX as u128 { return <$uint>::MAX }
        magnitude as $uint
      }
    }
  )*}
}

impl_signed!{i8, i16, i32, i64, i128, isize}
impl_unsigned!{u8, u16, u32, u64, u128, usize}
