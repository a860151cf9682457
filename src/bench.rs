//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::half::Unpacked;
use crate::{Half, RoundInto, Rounding, ToNearest, TowardZero};

impl Half {
  /// The unpacking kernel, as a tuple `(sign, exp, sig)`. `self` must be finite and nonzero.
  pub fn bench_unpack(self) -> (bool, i32, u64) {
    let Unpacked { sign, exp, sig } = self.unpack();
    (sign, exp, sig)
  }

  /// The rounding kernel. `sig` must have bit 63 set.
  pub fn bench_encode_round<R: Rounding>(sign: bool, exp: i32, sig: u64, sticky: bool) -> Half {
    Unpacked { sign, exp, sig }.encode_round::<R>(sticky)
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn half_unpack(arg: Half) -> (bool, i32, u64) {
  arg.bench_unpack()
}

#[unsafe(no_mangle)]
pub fn half_encode_round_nearest(sign: bool, exp: i32, sig: u64, sticky: bool) -> Half {
  Half::bench_encode_round::<ToNearest>(sign, exp, sig, sticky)
}

#[unsafe(no_mangle)]
pub fn half_encode_round_toward_zero(sign: bool, exp: i32, sig: u64, sticky: bool) -> Half {
  Half::bench_encode_round::<TowardZero>(sign, exp, sig, sticky)
}

//

#[unsafe(no_mangle)]
pub fn half_from_f32_nearest(num: f32) -> Half {
  Half::from_f32_with::<ToNearest>(num)
}

#[unsafe(no_mangle)]
pub fn half_from_f64_nearest(num: f64) -> Half {
  Half::from_f64_with::<ToNearest>(num)
}

#[unsafe(no_mangle)]
pub fn half_from_f64_toward_zero(num: f64) -> Half {
  Half::from_f64_with::<TowardZero>(num)
}

#[unsafe(no_mangle)]
pub fn half_to_f32(num: Half) -> f32 {
  num.to_f32()
}

#[unsafe(no_mangle)]
pub fn half_to_f64(num: Half) -> f64 {
  num.to_f64()
}

//

#[unsafe(no_mangle)]
pub fn round_i32_to_half(num: i32) -> Half {
  num.round_into()
}

#[unsafe(no_mangle)]
pub fn round_half_to_i32(num: Half) -> i32 {
  num.round_into()
}

//

#[unsafe(no_mangle)]
pub fn half_add(x: Half, y: Half) -> Half {
  x + y
}

#[unsafe(no_mangle)]
pub fn half_mul(x: Half, y: Half) -> Half {
  x * y
}

#[unsafe(no_mangle)]
pub fn half_div(x: Half, y: Half) -> Half {
  x / y
}

#[unsafe(no_mangle)]
pub fn half_fma(x: Half, y: Half, z: Half) -> Half {
  x.fma(y, z)
}
