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
//! Externally computed floor(log2) values.
//!
//! Text format: one `<input> <expected_log2>` pair per line, decimal,
//! whitespace separated. Order does not matter. Blank lines are skipped.
//! Repeating an input with the same value is allowed.
use crate::{Log2Error, Mismatch};
use num_traits::ToPrimitive;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Parsed reference table, ordered by input.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ReferenceTable {
    entries: BTreeMap<u64, i64>,
}

impl ReferenceTable {
    pub fn parse(text: &str) -> Result<ReferenceTable, Log2Error> {
        let mut entries = BTreeMap::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let mut fields = raw.split_whitespace();
            let Some(first) = fields.next() else {
                continue;
            };
            let (Some(second), None) = (fields.next(), fields.next()) else {
                return Err(Log2Error::MalformedReference { line });
            };
            let input = first
                .parse::<u64>()
                .map_err(|_| Log2Error::MalformedReference { line })?;
            let expected = second
                .parse::<i64>()
                .map_err(|_| Log2Error::MalformedReference { line })?;
            if let Some(previous) = entries.insert(input, expected) {
                if previous != expected {
                    return Err(Log2Error::ConflictingReference { input, line });
                }
            }
        }
        log::debug!(target: "bitlog2", "parsed {} reference entries", entries.len());
        Ok(ReferenceTable { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, input: u64) -> Option<i64> {
        self.entries.get(&input).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, i64)> + '_ {
        self.entries.iter().map(|(&k, &v)| (k, v))
    }

    /// Checks `f` on every entry, returns the number of entries checked.
    pub fn check<F, T>(&self, f: F) -> Result<usize, Mismatch>
    where
        F: Fn(u64) -> T,
        T: ToPrimitive,
    {
        for (input, want) in self.iter() {
            let got = f(input).to_i64();
            if got != Some(want) {
                return Err(Mismatch {
                    input,
                    got: got.unwrap_or(i64::MIN),
                    want,
                    expected_equal: true,
                });
            }
        }
        Ok(self.entries.len())
    }
}

impl FromStr for ReferenceTable {
    type Err = Log2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReferenceTable::parse(s)
    }
}
