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
//! Binary search for the largest input on which a candidate still agrees
//! with the oracle.
//!
//! The search assumes agreement is a prefix property of the searched
//! interval: once the candidate is wrong it stays wrong. This is a property of
//! the candidate, not something the search can establish. For the float
//! family it holds inside [2^63, 2^64), where the search lands after its first
//! probe, while inputs just below smaller powers of two may still fail.
//! Confirm the tail with [expect_disagreement](crate::expect_disagreement)
//! when it is small enough to enumerate.
use crate::Log2Error;
use crate::validate::compare;
use num_traits::ToPrimitive;

/// `ok_max` of [ilog2_float_log](crate::ilog2_float_log) and
/// [ilog2_poly_log](crate::ilog2_poly_log).
pub const FLOAT_LOG_DIVERGENCE: u64 = 0xffff_ffff_ffff_4bff;

/// `ok_max` of [ilog2_exponent](crate::ilog2_exponent), the last input
/// that does not round up to 2^64.
pub const EXPONENT_DIVERGENCE: u64 = 0xffff_ffff_ffff_fbff;

/// Result of the divergence search.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Divergence {
    /// Largest input known to agree.
    pub ok_max: u64,
    /// Smallest input known to disagree, always `ok_max + 1`.
    pub ng_min: u64,
    /// Number of midpoints evaluated.
    pub probes: u32,
}

/// Searches `[1, u64::MAX]`, see [find_divergence_in].
pub fn find_divergence<F, T, O, U>(f: F, oracle: O) -> Result<Divergence, Log2Error>
where
    F: Fn(u64) -> T,
    T: ToPrimitive,
    O: Fn(u64) -> U,
    U: ToPrimitive,
{
    find_divergence_in(f, oracle, 1, u64::MAX)
}

/// Finds `ok_max` in `[lo, hi]` such that `f` agrees with `oracle` at `ok_max`
/// and disagrees at `ok_max + 1`.
///
/// Fails without probing when `f` disagrees at `lo`, agrees at `hi`, or
/// `lo >= hi`. Evaluates at most 64 midpoints.
pub fn find_divergence_in<F, T, O, U>(
    f: F,
    oracle: O,
    lo: u64,
    hi: u64,
) -> Result<Divergence, Log2Error>
where
    F: Fn(u64) -> T,
    T: ToPrimitive,
    O: Fn(u64) -> U,
    U: ToPrimitive,
{
    if lo >= hi {
        return Err(Log2Error::EmptyInterval { lo, hi });
    }
    let (ok, got, want) = compare(&f, &oracle, lo);
    if !ok {
        return Err(Log2Error::LowerBoundDisagrees {
            input: lo,
            got,
            want,
        });
    }
    let (ok, value, _) = compare(&f, &oracle, hi);
    if ok {
        return Err(Log2Error::UpperBoundAgrees { input: hi, value });
    }

    log::debug!(target: "bitlog2", "searching divergence in [{lo:#x}, {hi:#x}]");

    let mut ok_max = lo;
    let mut ng_min = hi;
    let mut probes = 0u32;
    while ok_max < ng_min - 1 {
        let x = ok_max + (ng_min - ok_max) / 2;
        let (ok, got, want) = compare(&f, &oracle, x);
        probes += 1;
        log::trace!(target: "bitlog2", "probe {probes}: x={x:#x} got={got} want={want}");
        if ok {
            ok_max = x;
        } else {
            ng_min = x;
        }
    }

    log::debug!(target: "bitlog2", "divergence at ok_max={ok_max:#x} after {probes} probes");

    Ok(Divergence {
        ok_max,
        ng_min,
        probes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Algorithm, expect_disagreement, ilog2_exponent, ilog2_exponent_or1, ilog2_float_log,
        ilog2_lzcnt, ilog2_poly_log, ilog2_ref, validate,
    };

    #[test]
    fn test_float_log_divergence() {
        let _ = env_logger::builder().is_test(true).try_init();
        let divergence = find_divergence(ilog2_float_log, ilog2_ref).unwrap();
        assert_eq!(divergence.ok_max, FLOAT_LOG_DIVERGENCE);
        assert_eq!(divergence.ng_min, 0xffff_ffff_ffff_4c00);
        assert!(divergence.probes <= 64);
    }

    #[test]
    fn test_exponent_divergence() {
        for f in [ilog2_exponent, ilog2_exponent_or1] {
            let divergence = find_divergence(f, ilog2_ref).unwrap();
            assert_eq!(divergence.ok_max, EXPONENT_DIVERGENCE);
            assert_eq!(divergence.ng_min, EXPONENT_DIVERGENCE + 1);
            assert!(divergence.probes <= 64);
        }
    }

    #[test]
    fn test_poly_log_divergence() {
        let divergence = find_divergence(ilog2_poly_log, ilog2_ref).unwrap();
        assert_eq!(divergence.ok_max, FLOAT_LOG_DIVERGENCE);
        assert_eq!(divergence.ng_min, divergence.ok_max + 1);
        assert!(validate(ilog2_poly_log, ilog2_ref, divergence.ok_max));
        assert!(!validate(ilog2_poly_log, ilog2_ref, divergence.ng_min));
    }

    #[test]
    fn test_documented_divergences() {
        for algorithm in Algorithm::ALL {
            let result = find_divergence(|x| algorithm.eval(x), ilog2_ref);
            match algorithm.documented_divergence() {
                Some(ok_max) => {
                    let divergence = result.unwrap();
                    assert_eq!(divergence.ok_max, ok_max, "{algorithm}");
                    expect_disagreement(|x| algorithm.eval(x), ilog2_ref, ok_max + 1..=u64::MAX)
                        .unwrap();
                }
                None => {
                    assert!(algorithm.is_exact(), "{algorithm}");
                    assert_eq!(
                        result,
                        Err(Log2Error::UpperBoundAgrees {
                            input: u64::MAX,
                            value: 63,
                        }),
                        "{algorithm}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_rejects_exact_candidate() {
        let err = find_divergence(ilog2_lzcnt, ilog2_ref).unwrap_err();
        assert_eq!(
            err,
            Log2Error::UpperBoundAgrees {
                input: u64::MAX,
                value: 63,
            }
        );
    }

    #[test]
    fn test_rejects_wrong_lower_bound() {
        let err = find_divergence(|x| ilog2_ref(x) + 1, ilog2_ref).unwrap_err();
        assert_eq!(
            err,
            Log2Error::LowerBoundDisagrees {
                input: 1,
                got: 1,
                want: 0,
            }
        );
    }

    #[test]
    fn test_rejects_empty_interval() {
        assert_eq!(
            find_divergence_in(ilog2_exponent, ilog2_ref, 10, 10),
            Err(Log2Error::EmptyInterval { lo: 10, hi: 10 })
        );
    }

    #[test]
    fn test_sub_interval() {
        // 2^54 - 1 is a tie that rounds to the even neighbour 2^54.
        let divergence =
            find_divergence_in(ilog2_exponent, ilog2_ref, 1u64 << 53, (1u64 << 54) - 1).unwrap();
        assert_eq!(divergence.ok_max, (1u64 << 54) - 2);
        assert_eq!(divergence.ng_min, (1u64 << 54) - 1);
    }

    #[test]
    fn test_synthetic_threshold() {
        for threshold in [1u64, 2, 1000, 1 << 40, u64::MAX - 1] {
            let f = |x: u64| if x > threshold { -1 } else { ilog2_ref(x) };
            let divergence = find_divergence(f, ilog2_ref).unwrap();
            assert_eq!(divergence.ok_max, threshold);
            assert!(divergence.probes <= 64);
        }
    }
}
