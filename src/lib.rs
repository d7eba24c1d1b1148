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
//! Constant-time floor(log2) for `u64`, plus the harness that proves where
//! each implementation agrees with a trusted reference.
//!
//! Integer only implementations (leading zeros, de Bruijn lookup) are exact
//! for every `x >= 1`. Implementations going through `f64` are exact up to a
//! divergence point which [find_divergence] locates.
//!
//! `log2(0)` is undefined. Each function documents what it returns for zero,
//! the `checked_*` entry points reject it.
#![deny(unreachable_pub)]
#![allow(clippy::excessive_precision)]
mod algorithm;
mod boundary;
mod debruijn;
mod err;
mod float;
mod lzcnt;
mod mlaf;
mod reference;
mod reference_data;
mod validate;

pub use algorithm::Algorithm;
pub use boundary::{
    Divergence, EXPONENT_DIVERGENCE, FLOAT_LOG_DIVERGENCE, find_divergence, find_divergence_in,
};
pub use debruijn::{
    DeBruijn, HashPattern, ISOLATE_MAGIC, ISOLATE_TABLE, SPREAD_MAGIC, SPREAD_TABLE,
    build_isolated_table, build_table, ilog2_debruijn_isolate, ilog2_debruijn_spread,
    is_perfect_hash, isolate_highest, spread_bits,
};
pub use err::Log2Error;
pub use float::{ilog2_exponent, ilog2_exponent_or1, ilog2_float_log, ilog2_poly_log};
pub use lzcnt::ilog2_lzcnt;
pub use reference::{checked_ilog2_ref, ilog2_ref};
pub use reference_data::ReferenceTable;
pub use validate::{
    Mismatch, ValidationOptions, ValidationReport, Validator, boundary_inputs, check,
    expect_disagreement, validate,
};
