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
/// floor(log2) through the leading zero count.
///
/// Lowers to `LZCNT`/`BSR` on x86 and `CLZ` on aarch64.
///
/// Returns `-1` for `x == 0`.
#[inline(always)]
pub const fn ilog2_lzcnt(x: u64) -> i64 {
    63 - x.leading_zeros() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ilog2_ref;

    #[test]
    fn test_lzcnt_known_values() {
        assert_eq!(ilog2_lzcnt(1), 0);
        assert_eq!(ilog2_lzcnt(2), 1);
        assert_eq!(ilog2_lzcnt(u64::MAX), 63);
        assert_eq!(ilog2_lzcnt(0), -1);
    }

    #[test]
    fn test_lzcnt_powers() {
        for i in 0..64u32 {
            let x = 1u64 << i;
            assert_eq!(ilog2_lzcnt(x), i as i64);
            assert_eq!(ilog2_lzcnt(x | (x - 1)), i as i64);
            assert_eq!(ilog2_lzcnt(x), ilog2_ref(x));
        }
    }
}
