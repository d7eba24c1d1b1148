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
//! De Bruijn multiply-and-shift floor(log2).
//!
//! Both variants first smear the highest set bit of `x` into every lower bit,
//! which leaves one of 64 possible words. A de Bruijn multiplier maps each of
//! those words (or the single highest bit recovered from them) to a distinct
//! value in the top 6 bits of the product, and a 64 entry table turns that
//! value back into the bit position.

/// Multiplier for the spread variant, applied to `2^(i+1) - 1`.
pub const SPREAD_MAGIC: u64 = 0x03f6eaf2cd271461;

/// Multiplier for the isolate variant, applied to `2^i`.
pub const ISOLATE_MAGIC: u64 = 0x022fdd63cc95386d;

const HASH_SHIFT: u32 = 58;

/// `build_table(SPREAD_MAGIC)`
#[rustfmt::skip]
pub static SPREAD_TABLE: [u8; 64] = [
    0, 58, 1, 59, 47, 53, 2, 60, 39, 48, 27, 54, 33, 42, 3, 61,
    51, 37, 40, 49, 18, 28, 20, 55, 30, 34, 11, 43, 14, 22, 4, 62,
    57, 46, 52, 38, 26, 32, 41, 50, 36, 17, 19, 29, 10, 13, 21, 56,
    45, 25, 31, 35, 16, 9, 12, 44, 24, 15, 8, 23, 7, 6, 5, 63,
];

/// `build_isolated_table(ISOLATE_MAGIC)`
#[rustfmt::skip]
pub static ISOLATE_TABLE: [u8; 64] = [
    0, 1, 2, 53, 3, 7, 54, 27, 4, 38, 41, 8, 34, 55, 48, 28,
    62, 5, 39, 46, 44, 42, 22, 9, 24, 35, 59, 56, 49, 18, 29, 11,
    63, 52, 6, 26, 37, 40, 33, 47, 61, 45, 43, 21, 23, 58, 17, 10,
    51, 25, 36, 32, 60, 20, 57, 16, 50, 31, 19, 15, 30, 14, 13, 12,
];

/// Sets every bit below the highest set bit.
///
/// Each shift is applied to the running value, so the top bit reaches every
/// offset `0..64` as a subset sum of 1, 2, 4, 8, 16, 32. The order of the
/// steps does not matter. OR-ing shifts of the original value instead leaves
/// gaps and the table lookup breaks.
#[inline(always)]
pub const fn spread_bits(x: u64) -> u64 {
    let mut x = x;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    x
}

/// Keeps only the highest bit of a word produced by [spread_bits].
///
/// For other inputs this clears every set bit that has a set bit directly
/// above it, which is not the highest bit in general.
#[inline(always)]
pub const fn isolate_highest(spread: u64) -> u64 {
    spread & !(spread >> 1)
}

#[inline(always)]
const fn hash(key: u64, multiplier: u64) -> usize {
    (key.wrapping_mul(multiplier) >> HASH_SHIFT) as usize
}

/// Which 64 words a multiplier is expected to hash perfectly.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum HashPattern {
    /// `2^(i+1) - 1`, output of [spread_bits].
    #[default]
    Spread,
    /// `2^i`, output of [isolate_highest].
    Isolated,
}

impl HashPattern {
    /// Word hashed for bit position `i`.
    #[inline(always)]
    pub const fn word(self, i: u32) -> u64 {
        let bit = 1u64 << i;
        match self {
            HashPattern::Spread => bit | (bit - 1),
            HashPattern::Isolated => bit,
        }
    }

    #[inline(always)]
    const fn key(self, x: u64) -> u64 {
        let spread = spread_bits(x);
        match self {
            HashPattern::Spread => spread,
            HashPattern::Isolated => isolate_highest(spread),
        }
    }
}

const fn build_table_for(multiplier: u64, pattern: HashPattern) -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut i = 0u32;
    while i < 64 {
        table[hash(pattern.word(i), multiplier)] = i as u8;
        i += 1;
    }
    table
}

/// Builds the lookup table of the spread variant for `multiplier`.
///
/// Collisions are not detected, later positions overwrite earlier ones.
/// Use [is_perfect_hash] to check a multiplier first.
pub const fn build_table(multiplier: u64) -> [u8; 64] {
    build_table_for(multiplier, HashPattern::Spread)
}

/// Builds the lookup table of the isolate variant for `multiplier`.
pub const fn build_isolated_table(multiplier: u64) -> [u8; 64] {
    build_table_for(multiplier, HashPattern::Isolated)
}

/// Whether `multiplier` maps all 64 words of `pattern` to distinct hashes.
pub const fn is_perfect_hash(multiplier: u64, pattern: HashPattern) -> bool {
    let mut seen = [false; 64];
    let mut i = 0u32;
    while i < 64 {
        let h = hash(pattern.word(i), multiplier);
        if seen[h] {
            return false;
        }
        seen[h] = true;
        i += 1;
    }
    true
}

/// floor(log2) with [SPREAD_MAGIC] and [SPREAD_TABLE].
///
/// Returns `0` for `x == 0`.
#[inline]
pub fn ilog2_debruijn_spread(x: u64) -> u32 {
    SPREAD_TABLE[hash(spread_bits(x), SPREAD_MAGIC)] as u32
}

/// floor(log2) with [ISOLATE_MAGIC] and [ISOLATE_TABLE].
///
/// Returns `0` for `x == 0`.
#[inline]
pub fn ilog2_debruijn_isolate(x: u64) -> u32 {
    ISOLATE_TABLE[hash(isolate_highest(spread_bits(x)), ISOLATE_MAGIC)] as u32
}

/// De Bruijn floor(log2) with a table built from an arbitrary multiplier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DeBruijn {
    multiplier: u64,
    pattern: HashPattern,
    table: [u8; 64],
}

impl DeBruijn {
    /// Builds the table for `multiplier`.
    ///
    /// The result is only meaningful when [is_perfect_hash] holds, see [DeBruijn::checked_new].
    pub const fn new(multiplier: u64, pattern: HashPattern) -> DeBruijn {
        DeBruijn {
            multiplier,
            pattern,
            table: build_table_for(multiplier, pattern),
        }
    }

    /// Returns `None` when `multiplier` is not a perfect hash over `pattern`.
    pub const fn checked_new(multiplier: u64, pattern: HashPattern) -> Option<DeBruijn> {
        if !is_perfect_hash(multiplier, pattern) {
            return None;
        }
        Some(DeBruijn::new(multiplier, pattern))
    }

    pub const fn multiplier(&self) -> u64 {
        self.multiplier
    }

    pub const fn pattern(&self) -> HashPattern {
        self.pattern
    }

    pub const fn table(&self) -> &[u8; 64] {
        &self.table
    }

    /// Returns `0` for `x == 0`.
    #[inline]
    pub const fn ilog2(&self, x: u64) -> u32 {
        self.table[hash(self.pattern.key(x), self.multiplier)] as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ilog2_ref;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_build_table_matches_hardcoded() {
        assert_eq!(build_table(SPREAD_MAGIC), SPREAD_TABLE);
        assert_eq!(build_isolated_table(ISOLATE_MAGIC), ISOLATE_TABLE);
    }

    #[test]
    fn test_magic_bits() {
        assert_eq!(
            format!("{:#066b}", SPREAD_MAGIC << 1),
            "0b0000011111101101110101011110010110011010010011100010100011000010"
        );
    }

    #[test]
    fn test_perfect_hashes() {
        assert!(is_perfect_hash(SPREAD_MAGIC, HashPattern::Spread));
        assert!(is_perfect_hash(ISOLATE_MAGIC, HashPattern::Isolated));
        // The spread multiplier happens to be a de Bruijn sequence too, the
        // isolate one does not survive the low run of ones.
        assert!(is_perfect_hash(SPREAD_MAGIC, HashPattern::Isolated));
        assert!(!is_perfect_hash(ISOLATE_MAGIC, HashPattern::Spread));
        assert!(!is_perfect_hash(0, HashPattern::Spread));
        assert!(!is_perfect_hash(1, HashPattern::Isolated));
    }

    #[test]
    fn test_tables_are_permutations() {
        for table in [&SPREAD_TABLE, &ISOLATE_TABLE] {
            let mut seen = [false; 64];
            for &v in table.iter() {
                assert!(!seen[v as usize]);
                seen[v as usize] = true;
            }
        }
    }

    #[test]
    fn test_tables_not_interchangeable() {
        let broken = DeBruijn::new(ISOLATE_MAGIC, HashPattern::Spread);
        let mismatches = (0..64u32)
            .map(|i| 1u64 << i)
            .filter(|&x| broken.ilog2(x) as i64 != ilog2_ref(x))
            .count();
        assert!(mismatches > 0);
        assert!(DeBruijn::checked_new(ISOLATE_MAGIC, HashPattern::Spread).is_none());
    }

    #[test]
    fn test_spread_and_isolate() {
        let x = 0x80000000000u64;
        let spread = spread_bits(x);
        assert_eq!(spread, 0xFFFFFFFFFFF);
        assert_eq!(isolate_highest(spread), x);
        assert_eq!(spread_bits(u64::MAX), u64::MAX);
        assert_eq!(spread_bits(1), 1);
        assert_eq!(spread_bits(0), 0);
    }

    fn spread_without_feedback(n: u64) -> u64 {
        n | n >> 1 | n >> 2 | n >> 4 | n >> 8 | n >> 16 | n >> 32
    }

    fn spread_reversed(n: u64) -> u64 {
        let mut n = n;
        for s in [32, 16, 8, 4, 2, 1] {
            n |= n >> s;
        }
        n
    }

    #[test]
    fn test_spread_must_accumulate() {
        let x = 0x80000000000u64;
        let gapped = spread_without_feedback(x);
        assert_eq!(gapped, 0xe8808000800);
        assert_ne!(gapped.wrapping_add(1) & gapped, 0);
        assert_eq!(spread_bits(x), 0xfffffffffff);
        assert_eq!(spread_reversed(x), 0xfffffffffff);

        let broken = (0..64u32)
            .filter(|&i| {
                let key = spread_without_feedback(1u64 << i);
                SPREAD_TABLE[hash(key, SPREAD_MAGIC)] as u32 != i
            })
            .count();
        assert_eq!(broken, 59);
        for i in 0..64u32 {
            assert_eq!(spread_reversed(1u64 << i), spread_bits(1u64 << i));
        }
    }

    #[test]
    fn test_spread_is_contiguous_run() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            let x = rng.random_range(1..=u64::MAX);
            let spread = spread_bits(x);
            let len = ilog2_ref(x) as u32 + 1;
            assert_eq!(spread.count_ones(), len);
            assert_eq!(spread.trailing_ones(), len);
            assert_eq!(isolate_highest(spread), 1u64 << (len - 1));
        }
    }

    #[test]
    fn test_known_values() {
        for f in [ilog2_debruijn_spread, ilog2_debruijn_isolate] {
            assert_eq!(f(1), 0);
            assert_eq!(f(2), 1);
            assert_eq!(f(u64::MAX), 63);
            assert_eq!(f(0), 0);
        }
    }

    #[test]
    fn test_rebuilt_tables_are_deterministic() {
        let spread = DeBruijn::new(SPREAD_MAGIC, HashPattern::Spread);
        let isolate = DeBruijn::checked_new(ISOLATE_MAGIC, HashPattern::Isolated).unwrap();
        assert_eq!(spread.table(), &SPREAD_TABLE);
        assert_eq!(isolate.table(), &ISOLATE_TABLE);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let x = rng.random_range(0..=u64::MAX);
            assert_eq!(spread.ilog2(x), ilog2_debruijn_spread(x));
            assert_eq!(isolate.ilog2(x), ilog2_debruijn_isolate(x));
        }
        for i in 0..64u32 {
            let x = 1u64 << i;
            assert_eq!(spread.ilog2(x), i);
            assert_eq!(isolate.ilog2(x), i);
        }
    }
}
