#![no_main]
use bigint_core::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(x) = BigInt::parse(s) {
            let printed = x.to_decimal_string();
            assert_eq!(BigInt::parse(&printed).unwrap(), x);
        }
    }
});
