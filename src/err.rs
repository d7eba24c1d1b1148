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
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Log2Error {
    /// log2(0) was requested through a checked entry point.
    ZeroInput,
    /// Candidate disagrees with the oracle at the low end of the searched interval.
    LowerBoundDisagrees { input: u64, got: i64, want: i64 },
    /// Candidate agrees with the oracle at the high end of the searched interval.
    UpperBoundAgrees { input: u64, value: i64 },
    EmptyInterval { lo: u64, hi: u64 },
    /// Random draws were requested from an inverted range.
    EmptyRandomRange { lo: u64, hi: u64 },
    /// Validation options select no input at all.
    NothingToValidate,
    MalformedReference { line: usize },
    /// Same input listed again with a different expected value.
    ConflictingReference { input: u64, line: usize },
}

impl fmt::Display for Log2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Log2Error::ZeroInput => write!(f, "log2(0) is undefined"),
            Log2Error::LowerBoundDisagrees { input, got, want } => write!(
                f,
                "Candidate must agree with oracle at lower bound {input:#x}, got {got}, want {want}"
            ),
            Log2Error::UpperBoundAgrees { input, value } => write!(
                f,
                "Candidate must disagree with oracle at upper bound {input:#x}, both returned {value}"
            ),
            Log2Error::EmptyInterval { lo, hi } => write!(
                f,
                "Search interval [{lo:#x}, {hi:#x}] must contain at least two values"
            ),
            Log2Error::EmptyRandomRange { lo, hi } => write!(
                f,
                "Random range [{lo:#x}, {hi:#x}] must not be empty when draws are requested"
            ),
            Log2Error::NothingToValidate => {
                write!(f, "Validation options must select at least one input")
            }
            Log2Error::MalformedReference { line } => write!(
                f,
                "Reference data line {line} must contain two decimal integers"
            ),
            Log2Error::ConflictingReference { input, line } => write!(
                f,
                "Reference data line {line} repeats input {input} with a different value"
            ),
        }
    }
}

impl Error for Log2Error {}
