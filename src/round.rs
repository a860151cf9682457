//! Rounding policies. A policy is a *type*, selected at compile time, never a runtime value: every
//! narrowing conversion is generic over a [`Rounding`] type, and the compiler is free to remove
//! the branches belonging to the other policies.
//!
//! The five policies mirror the classic `float_round_style` values:
//!
//! | type                  | [`RoundStyle`]                  | behaviour                                   |
//! |-----------------------|---------------------------------|---------------------------------------------|
//! | [`Indeterminate`]     | [`RoundStyle::Indeterminate`]   | truncate, overflow to infinity (fastest)    |
//! | [`TowardZero`]        | [`RoundStyle::TowardZero`]      | truncate, saturate at the largest finite    |
//! | [`ToNearest`]         | [`RoundStyle::ToNearest`]       | nearest, ties per [`TIES_TO_EVEN`]          |
//! | [`TowardInfinity`]    | [`RoundStyle::TowardInfinity`]  | round up                                    |
//! | [`TowardNegInfinity`] | [`RoundStyle::TowardNegInfinity`] | round down                                |
//!
//! [`DefaultRounding`] is the policy used by arithmetic, parsing, and the no-policy cast entry
//! points. It is chosen by Cargo feature (`round-to-nearest`, `round-toward-zero`,
//! `round-toward-infinity`, `round-toward-neg-infinity`), and is [`Indeterminate`] if none is
//! enabled. If several are enabled, the first in that list wins.

/// Whether [`ToNearest`] breaks ties to the even bit pattern (feature `ties-to-even`, on by
/// default) or away from zero.
pub const TIES_TO_EVEN: bool = cfg!(feature = "ties-to-even");

/// The runtime-inspectable name of a rounding policy. The discriminants match the values of
/// C++'s `std::float_round_style`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum RoundStyle {
  /// Truncation, but overflowing values become infinity.
  Indeterminate = -1,
  /// Round toward zero; overflow saturates at the largest finite magnitude.
  TowardZero = 0,
  /// Round to nearest representable value.
  ToNearest = 1,
  /// Round toward positive infinity.
  TowardInfinity = 2,
  /// Round toward negative infinity.
  TowardNegInfinity = 3,
}

impl RoundStyle {
  /// The rounding decision. Given the `sign` of the value (`true` = negative), the lsb of the
  /// retained significand (`odd`), the first discarded bit (`round`), and whether any further
  /// discarded bit is set (`sticky`), returns whether the retained significand must be incremented
  /// by one unit in the last place.
  ///
  /// ```text
  ///   odd | round | sticky | ToNearest (ties to even)
  ///   ..x | 0     |  x     | +0
  ///   ..0 | 1     |  0     | +0
  ///   ..1 | 1     |  0     | +1
  ///   ..x | 1     |  1     | +1
  /// ```
  #[inline]
  pub const fn round_up(self, sign: bool, odd: bool, round: bool, sticky: bool) -> bool {
    match self {
      RoundStyle::Indeterminate | RoundStyle::TowardZero => false,
      RoundStyle::ToNearest => round & (sticky | odd | !TIES_TO_EVEN),
      RoundStyle::TowardInfinity => (round | sticky) & !sign,
      RoundStyle::TowardNegInfinity => (round | sticky) & sign,
    }
  }

  /// On overflow past the largest finite magnitude, whether the result is infinity (`true`) or
  /// the largest finite value of the same sign (`false`).
  #[inline]
  pub const fn overflows_to_infinity(self, sign: bool) -> bool {
    match self {
      RoundStyle::Indeterminate | RoundStyle::ToNearest => true,
      RoundStyle::TowardZero => false,
      RoundStyle::TowardInfinity => !sign,
      RoundStyle::TowardNegInfinity => sign,
    }
  }
}

mod sealed {
  pub trait Sealed {}
}

/// A rounding policy. This is a *sealed* trait, implemented only by [`Indeterminate`],
/// [`TowardZero`], [`ToNearest`], [`TowardInfinity`], and [`TowardNegInfinity`].
pub trait Rounding: sealed::Sealed + Copy + core::fmt::Debug {
  /// The style this policy rounds with.
  const STYLE: RoundStyle;
}

macro_rules! policy {
  ($(#[$doc:meta])* $name:ident, $style:ident) => {
    $(#[$doc])*
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct $name;

    impl sealed::Sealed for $name {}

    impl Rounding for $name {
      const STYLE: RoundStyle = RoundStyle::$style;
    }
  };
}

policy!{
  /// Truncate toward zero, but overflow to infinity. The cheapest policy.
  Indeterminate, Indeterminate
}
policy!{
  /// Round toward zero.
  TowardZero, TowardZero
}
policy!{
  /// Round to nearest; ties are broken according to [`TIES_TO_EVEN`].
  ToNearest, ToNearest
}
policy!{
  /// Round toward positive infinity.
  TowardInfinity, TowardInfinity
}
policy!{
  /// Round toward negative infinity.
  TowardNegInfinity, TowardNegInfinity
}

/// The policy used wherever none is given explicitly.
#[cfg(feature = "round-to-nearest")]
pub type DefaultRounding = ToNearest;

/// The policy used wherever none is given explicitly.
#[cfg(all(not(feature = "round-to-nearest"), feature = "round-toward-zero"))]
pub type DefaultRounding = TowardZero;

/// The policy used wherever none is given explicitly.
#[cfg(all(
  not(feature = "round-to-nearest"),
  not(feature = "round-toward-zero"),
  feature = "round-toward-infinity",
))]
pub type DefaultRounding = TowardInfinity;

/// The policy used wherever none is given explicitly.
#[cfg(all(
  not(feature = "round-to-nearest"),
  not(feature = "round-toward-zero"),
  not(feature = "round-toward-infinity"),
  feature = "round-toward-neg-infinity",
))]
pub type DefaultRounding = TowardNegInfinity;

/// The policy used wherever none is given explicitly.
#[cfg(not(any(
  feature = "round-to-nearest",
  feature = "round-toward-zero",
  feature = "round-toward-infinity",
  feature = "round-toward-neg-infinity",
)))]
pub type DefaultRounding = Indeterminate;
