#![no_main]

use bitlog2::{DeBruijn, HashPattern, is_perfect_hash};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u64, u64)| {
    let (multiplier, x) = data;
    for pattern in [HashPattern::Spread, HashPattern::Isolated] {
        let table = DeBruijn::checked_new(multiplier, pattern);
        assert_eq!(table.is_some(), is_perfect_hash(multiplier, pattern));
        if let Some(table) = table {
            if x != 0 {
                assert_eq!(table.ilog2(x) as i64, 63 - x.leading_zeros() as i64);
            }
        }
    }
});
