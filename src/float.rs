/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! floor(log2) through the binary64 representation.
//!
//! Every function here first converts `x` to `f64`. Up to 2^53 this is exact,
//! above it the conversion rounds to nearest-even and inputs just below a power
//! of two may land on that power, which moves the result one bucket up.
//! The largest agreeing input in the top bucket is found by
//! [find_divergence](crate::find_divergence).
use crate::mlaf::f_fmla;

const EXPONENT_BIAS: i64 = 1023;

/// floor(log2) from the biased exponent of `x as f64`.
///
/// Exact when `x as f64` does not round up into the next power of two, in
/// particular for every `x <= 2^54 - 2`. Disagrees with the reference at
/// `2^k - 1` for `k` in `54..=64` and above [EXPONENT_DIVERGENCE](crate::EXPONENT_DIVERGENCE).
///
/// Returns `-1023` for `x == 0`.
#[inline]
pub const fn ilog2_exponent(x: u64) -> i64 {
    let bits = (x as f64).to_bits();
    (bits >> 52) as i64 - EXPONENT_BIAS
}

/// Same as [ilog2_exponent] but reads the exponent from the high word of
/// `(x | 1) as f64`.
///
/// Setting the low bit maps zero to one. It also lifts even inputs that sit
/// on a rounding tie, so `2^54 - 2` already fails here while it is exact for
/// [ilog2_exponent]. The divergence in the top bucket is the same.
///
/// Returns `0` for `x == 0`.
#[inline]
pub const fn ilog2_exponent_or1(x: u64) -> i64 {
    let hi = ((x | 1) as f64).to_bits() >> 32;
    (hi as u32 >> 20) as i64 - EXPONENT_BIAS
}

/// floor of the system `log2` of `x as f64`.
///
/// Besides the conversion rounding this also suffers from `log2` rounding to
/// the nearest integer when `x` is just below a power of two, so it breaks
/// from `2^49 - 1` onwards even though the conversion is still exact there.
///
/// Returns `i64::MIN` for `x == 0` (saturated `-inf`).
#[inline]
pub fn ilog2_float_log(x: u64) -> i64 {
    (x as f64).log2().floor() as i64
}

/// Coefficients of the odd polynomial in `t = (m - 1) / (m + 1)`, as a
/// polynomial in `t^2`, highest degree first.
const LOG2_POLY: [f64; 7] = [
    0.2122298095941129899e+0,
    0.2210493187503736762e+0,
    0.2623293115969893702e+0,
    0.3205986261348816382e+0,
    0.4121985850084821691e+0,
    0.5770780163490337802e+0,
    0.9617966939259845749e+0,
];

/// `2 / ln(2)`, the linear term.
const LOG2_LINEAR: f64 = 0.2885390081777926802e+1;

/// Polynomial log2 for positive finite `d`, ULP ~3.5.
#[inline]
fn log2_poly(d: f64) -> f64 {
    // Move the mantissa into [sqrt(2)/2, sqrt(2)) and the exponent along with it.
    let bits = d.to_bits();
    let hi = ((bits >> 32) as u32).wrapping_add(0x3ff00000 - 0x3fe6a09e);
    let e = (hi >> 20) as i32 - 0x3ff;
    let reduced = ((hi & 0x000fffff).wrapping_add(0x3fe6a09e) as u64) << 32 | (bits & 0xffffffff);
    let m = f64::from_bits(reduced);

    let t = (m - 1.) / (m + 1.);
    let t2 = t * t;
    let mut u = LOG2_POLY[0];
    for &c in &LOG2_POLY[1..] {
        u = f_fmla(u, t2, c);
    }
    f_fmla(t2 * t, u, f_fmla(t, LOG2_LINEAR, e as f64))
}

/// floor of a polynomial log2 of `x as f64`.
///
/// Exact on powers of two since the reduced mantissa is then exactly `1`.
/// Just below a power the linear term drops under half an ulp of the
/// exponent, so like [ilog2_float_log] it breaks from `2^49 - 1` onwards and
/// its top-bucket divergence is [FLOAT_LOG_DIVERGENCE](crate::FLOAT_LOG_DIVERGENCE),
/// fused or not.
///
/// Returns `-1023` for `x == 0`, the zero exponent field read as is.
#[inline]
pub fn ilog2_poly_log(x: u64) -> i64 {
    log2_poly(x as f64).floor() as i64
}
