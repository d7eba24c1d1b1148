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
use crate::{
    EXPONENT_DIVERGENCE, FLOAT_LOG_DIVERGENCE, Log2Error, ilog2_debruijn_isolate,
    ilog2_debruijn_spread, ilog2_exponent, ilog2_exponent_or1, ilog2_float_log, ilog2_lzcnt,
    ilog2_poly_log, ilog2_ref,
};
use std::fmt::Display;

/// Every floor(log2) implementation in the crate.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Algorithm {
    Reference,
    LeadingZeros,
    Exponent,
    ExponentOr1,
    FloatLog,
    PolyLog,
    DeBruijnSpread,
    DeBruijnIsolate,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Reference,
        Algorithm::LeadingZeros,
        Algorithm::Exponent,
        Algorithm::ExponentOr1,
        Algorithm::FloatLog,
        Algorithm::PolyLog,
        Algorithm::DeBruijnSpread,
        Algorithm::DeBruijnIsolate,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Reference => "reference",
            Algorithm::LeadingZeros => "lzcnt",
            Algorithm::Exponent => "exponent",
            Algorithm::ExponentOr1 => "exponent_or1",
            Algorithm::FloatLog => "float_log",
            Algorithm::PolyLog => "poly_log",
            Algorithm::DeBruijnSpread => "debruijn_spread",
            Algorithm::DeBruijnIsolate => "debruijn_isolate",
        }
    }

    /// Evaluates on `x`, zero gives the per-algorithm result documented on
    /// the underlying function.
    #[inline]
    pub fn eval(self, x: u64) -> i64 {
        match self {
            Algorithm::Reference => ilog2_ref(x),
            Algorithm::LeadingZeros => ilog2_lzcnt(x),
            Algorithm::Exponent => ilog2_exponent(x),
            Algorithm::ExponentOr1 => ilog2_exponent_or1(x),
            Algorithm::FloatLog => ilog2_float_log(x),
            Algorithm::PolyLog => ilog2_poly_log(x),
            Algorithm::DeBruijnSpread => ilog2_debruijn_spread(x) as i64,
            Algorithm::DeBruijnIsolate => ilog2_debruijn_isolate(x) as i64,
        }
    }

    /// [Algorithm::eval] that rejects zero for every algorithm.
    #[inline]
    pub fn checked_eval(self, x: u64) -> Result<i64, Log2Error> {
        if x == 0 {
            return Err(Log2Error::ZeroInput);
        }
        Ok(self.eval(x))
    }

    /// Whether the algorithm agrees with the reference on every `x >= 1`.
    pub const fn is_exact(self) -> bool {
        matches!(
            self,
            Algorithm::Reference
                | Algorithm::LeadingZeros
                | Algorithm::DeBruijnSpread
                | Algorithm::DeBruijnIsolate
        )
    }

    /// Largest `k` such that every input below `2^k` agrees, `64` for exact
    /// algorithms.
    pub const fn exact_below_bit(self) -> u32 {
        match self {
            Algorithm::Reference
            | Algorithm::LeadingZeros
            | Algorithm::DeBruijnSpread
            | Algorithm::DeBruijnIsolate => 64,
            Algorithm::Exponent | Algorithm::ExponentOr1 => 53,
            Algorithm::FloatLog | Algorithm::PolyLog => 48,
        }
    }

    /// Known `ok_max` of the divergence search, `None` for exact algorithms.
    pub const fn documented_divergence(self) -> Option<u64> {
        match self {
            Algorithm::Exponent | Algorithm::ExponentOr1 => Some(EXPONENT_DIVERGENCE),
            Algorithm::FloatLog | Algorithm::PolyLog => Some(FLOAT_LOG_DIVERGENCE),
            Algorithm::Reference
            | Algorithm::LeadingZeros
            | Algorithm::DeBruijnSpread
            | Algorithm::DeBruijnIsolate => None,
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_scenario() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.eval(1), 0, "{algorithm}");
            assert_eq!(algorithm.eval(2), 1, "{algorithm}");
            if algorithm.is_exact() {
                assert_eq!(algorithm.eval(u64::MAX), 63, "{algorithm}");
            } else {
                assert_eq!(algorithm.eval(u64::MAX), 64, "{algorithm}");
            }
        }
    }

    #[test]
    fn test_checked_eval_rejects_zero() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.checked_eval(0), Err(Log2Error::ZeroInput));
            assert_eq!(algorithm.checked_eval(1024), Ok(10));
        }
    }

    #[test]
    fn test_zero_is_not_harmonized() {
        assert_eq!(Algorithm::Reference.eval(0), -1);
        assert_eq!(Algorithm::LeadingZeros.eval(0), -1);
        assert_eq!(Algorithm::Exponent.eval(0), -1023);
        assert_eq!(Algorithm::ExponentOr1.eval(0), 0);
        assert_eq!(Algorithm::FloatLog.eval(0), i64::MIN);
        assert_eq!(Algorithm::PolyLog.eval(0), -1023);
        assert_eq!(Algorithm::DeBruijnSpread.eval(0), 0);
        assert_eq!(Algorithm::DeBruijnIsolate.eval(0), 0);
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in Algorithm::ALL.iter().enumerate() {
            for b in &Algorithm::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
