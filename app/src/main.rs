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
use bitlog2::{
    Algorithm, ReferenceTable, ValidationOptions, Validator, expect_disagreement, find_divergence,
    ilog2_ref,
};
use std::error::Error;
use std::fs;

/// Widest tail that is still swept exhaustively after a divergence search.
const MAX_TAIL: u64 = 1 << 20;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let reference = match std::env::args().nth(1) {
        Some(path) => Some(ReferenceTable::parse(&fs::read_to_string(&path)?)?),
        None => None,
    };

    for algorithm in Algorithm::ALL {
        let k = algorithm.exact_below_bit();
        let validator = Validator::new(ValidationOptions {
            max_boundary_bit: k,
            random_max: if k == 64 { u64::MAX } else { (1u64 << k) - 1 },
            ..ValidationOptions::default()
        })?;
        match validator.run(|x| algorithm.eval(x), ilog2_ref) {
            Ok(report) => log::info!("{algorithm}: {} inputs agree", report.total()),
            Err(mismatch) => log::error!("{algorithm}: {mismatch}"),
        }

        if let Some(table) = reference.as_ref() {
            match table.check(|x| algorithm.eval(x)) {
                Ok(n) => log::info!("{algorithm}: {n} reference entries agree"),
                Err(mismatch) => log::warn!("{algorithm}: reference {mismatch}"),
            }
        }

        match find_divergence(|x| algorithm.eval(x), ilog2_ref) {
            Ok(divergence) => {
                log::info!(
                    "{algorithm}: ok_max={:#x} after {} probes",
                    divergence.ok_max,
                    divergence.probes
                );
                let tail = u64::MAX - divergence.ok_max;
                if tail <= MAX_TAIL {
                    match expect_disagreement(
                        |x| algorithm.eval(x),
                        ilog2_ref,
                        divergence.ng_min..=u64::MAX,
                    ) {
                        Ok(n) => log::info!("{algorithm}: all {n} tail inputs disagree"),
                        Err(mismatch) => log::error!("{algorithm}: tail {mismatch}"),
                    }
                }
                if let Some(documented) = algorithm.documented_divergence() {
                    if documented != divergence.ok_max {
                        log::error!("{algorithm}: expected ok_max={documented:#x}");
                    }
                }
            }
            Err(e) => log::info!("{algorithm}: no divergence, {e}"),
        }
    }
    Ok(())
}
