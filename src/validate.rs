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
//! Cross-validation of a candidate floor(log2) against an oracle.
//!
//! Results of any integer type are compared by value through [ToPrimitive],
//! so a `u32` candidate can be checked against an `i64` oracle.
use crate::Log2Error;
use num_traits::ToPrimitive;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::ops::RangeInclusive;

/// Input where a candidate and the oracle did not relate as expected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Mismatch {
    pub input: u64,
    pub got: i64,
    pub want: i64,
    /// `false` when the sweep expected the two to disagree.
    pub expected_equal: bool,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = if self.expected_equal {
            "mismatch"
        } else {
            "unexpected match"
        };
        write!(
            f,
            "log2 {what}, x={:#x}, got={}, want={}",
            self.input, self.got, self.want
        )
    }
}

/// Evaluates both sides at `x`. A result that does not fit `i64` never
/// agrees and is reported as `i64::MIN`.
#[inline]
pub(crate) fn compare<F, T, O, U>(f: &F, oracle: &O, x: u64) -> (bool, i64, i64)
where
    F: Fn(u64) -> T,
    T: ToPrimitive,
    O: Fn(u64) -> U,
    U: ToPrimitive,
{
    let got = f(x).to_i64();
    let want = oracle(x).to_i64();
    (
        got.is_some() && got == want,
        got.unwrap_or(i64::MIN),
        want.unwrap_or(i64::MIN),
    )
}

/// Whether `f(x) == oracle(x)`.
#[inline]
pub fn validate<F, T, O, U>(f: F, oracle: O, x: u64) -> bool
where
    F: Fn(u64) -> T,
    T: ToPrimitive,
    O: Fn(u64) -> U,
    U: ToPrimitive,
{
    compare(&f, &oracle, x).0
}

/// Same as [validate] but reports both values on disagreement.
#[inline]
pub fn check<F, T, O, U>(f: F, oracle: O, x: u64) -> Result<(), Mismatch>
where
    F: Fn(u64) -> T,
    T: ToPrimitive,
    O: Fn(u64) -> U,
    U: ToPrimitive,
{
    check_ref(&f, &oracle, x)
}

#[inline]
fn check_ref<F, T, O, U>(f: &F, oracle: &O, x: u64) -> Result<(), Mismatch>
where
    F: Fn(u64) -> T,
    T: ToPrimitive,
    O: Fn(u64) -> U,
    U: ToPrimitive,
{
    let (agrees, got, want) = compare(f, oracle, x);
    if !agrees {
        return Err(Mismatch {
            input: x,
            got,
            want,
            expected_equal: true,
        });
    }
    Ok(())
}

/// `2^i - 1, 2^i, 2^i + 1` for `i` in `1..max_bit`, then `u64::MAX` when
/// `max_bit >= 64`.
pub fn boundary_inputs(max_bit: u32) -> impl Iterator<Item = u64> {
    (1..max_bit.min(64))
        .flat_map(|i| {
            let p = 1u64 << i;
            [p - 1, p, p + 1]
        })
        .chain((max_bit >= 64).then_some(u64::MAX))
}

/// Sweeps `range` and fails on the first input where `f` and `oracle` agree.
///
/// Used on the tail above a divergence boundary, which must be wrong
/// everywhere for the boundary to be meaningful.
pub fn expect_disagreement<F, T, O, U>(
    f: F,
    oracle: O,
    range: RangeInclusive<u64>,
) -> Result<u64, Mismatch>
where
    F: Fn(u64) -> T,
    T: ToPrimitive,
    O: Fn(u64) -> U,
    U: ToPrimitive,
{
    let mut checked = 0u64;
    for x in range {
        let (agrees, got, want) = compare(&f, &oracle, x);
        if agrees {
            return Err(Mismatch {
                input: x,
                got,
                want,
                expected_equal: false,
            });
        }
        checked += 1;
    }
    Ok(checked)
}

/// Declares which strategies a [Validator] runs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ValidationOptions {
    /// Exhaustive sweep covers `1..dense_limit`.
    pub dense_limit: u64,
    /// Power-of-two boundaries are checked for `i` in `1..max_boundary_bit`,
    /// and `u64::MAX` as well when this is `64`.
    pub max_boundary_bit: u32,
    pub random_trials: usize,
    /// Inclusive lower bound of random draws, clamped to `1`.
    pub random_min: u64,
    /// Inclusive upper bound of random draws.
    pub random_max: u64,
    /// Random draws are reproducible for a given seed.
    pub seed: u64,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            dense_limit: 100_000,
            max_boundary_bit: 64,
            random_trials: 10_000,
            random_min: 1,
            random_max: u64::MAX,
            seed: 12345,
        }
    }
}

/// Counts of inputs checked by each strategy.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ValidationReport {
    pub dense: u64,
    pub boundaries: u64,
    pub random: u64,
}

impl ValidationReport {
    pub const fn total(&self) -> u64 {
        self.dense + self.boundaries + self.random
    }
}

/// Runs dense, boundary and random strategies. The first failure wins.
///
/// The default runs every strategy over the full domain.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    /// Fails when the random range is inverted while draws are requested, or
    /// when no strategy selects any input.
    pub fn new(options: ValidationOptions) -> Result<Self, Log2Error> {
        let lo = options.random_min.max(1);
        if options.random_trials > 0 && lo > options.random_max {
            return Err(Log2Error::EmptyRandomRange {
                lo,
                hi: options.random_max,
            });
        }
        let boundaries = boundary_inputs(options.max_boundary_bit).next().is_some();
        if options.dense_limit <= 1 && !boundaries && options.random_trials == 0 {
            return Err(Log2Error::NothingToValidate);
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    pub fn run<F, T, O, U>(&self, f: F, oracle: O) -> Result<ValidationReport, Mismatch>
    where
        F: Fn(u64) -> T,
        T: ToPrimitive,
        O: Fn(u64) -> U,
        U: ToPrimitive,
    {
        let report = ValidationReport {
            dense: self.dense(&f, &oracle)?,
            boundaries: self.boundaries(&f, &oracle)?,
            random: self.random(&f, &oracle)?,
        };
        log::debug!(target: "bitlog2",
            "validated {} inputs ({} dense, {} boundaries, {} random)",
            report.total(), report.dense, report.boundaries, report.random);
        Ok(report)
    }

    pub fn dense<F, T, O, U>(&self, f: &F, oracle: &O) -> Result<u64, Mismatch>
    where
        F: Fn(u64) -> T,
        T: ToPrimitive,
        O: Fn(u64) -> U,
        U: ToPrimitive,
    {
        let mut checked = 0u64;
        for x in 1..self.options.dense_limit {
            check_ref(f, oracle, x)?;
            checked += 1;
        }
        Ok(checked)
    }

    pub fn boundaries<F, T, O, U>(&self, f: &F, oracle: &O) -> Result<u64, Mismatch>
    where
        F: Fn(u64) -> T,
        T: ToPrimitive,
        O: Fn(u64) -> U,
        U: ToPrimitive,
    {
        let mut checked = 0u64;
        for x in boundary_inputs(self.options.max_boundary_bit) {
            check_ref(f, oracle, x)?;
            checked += 1;
        }
        Ok(checked)
    }

    pub fn random<F, T, O, U>(&self, f: &F, oracle: &O) -> Result<u64, Mismatch>
    where
        F: Fn(u64) -> T,
        T: ToPrimitive,
        O: Fn(u64) -> U,
        U: ToPrimitive,
    {
        let lo = self.options.random_min.max(1);
        let hi = self.options.random_max;
        if self.options.random_trials == 0 {
            return Ok(0);
        }
        let mut rng = StdRng::seed_from_u64(self.options.seed);
        for _ in 0..self.options.random_trials {
            let x = rng.random_range(lo..=hi);
            check_ref(f, oracle, x)?;
        }
        Ok(self.options.random_trials as u64)
    }
}
