#![no_main]

use bitlog2::{Algorithm, check, ilog2_ref};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: u64| {
    for algorithm in Algorithm::ALL {
        let value = algorithm.eval(data);
        if data == 0 {
            assert!(algorithm.checked_eval(data).is_err());
            continue;
        }
        let k = algorithm.exact_below_bit();
        if k == 64 || data < (1u64 << k) {
            if let Err(mismatch) = check(|x| algorithm.eval(x), ilog2_ref, data) {
                panic!("{algorithm}: {mismatch}");
            }
        } else {
            let want = ilog2_ref(data);
            assert!(
                value == want || value == want + 1,
                "{algorithm}: off by more than one at {data:#x}, got={value}, want={want}"
            );
        }
    }
});
