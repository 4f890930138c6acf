#![no_main]
use bigint_core::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|pair: (i64, i64)| {
    let (a, b) = pair;
    let (x, y) = (BigInt::from(a), BigInt::from(b));
    let (a, b) = (i128::from(a), i128::from(b));
    assert_eq!(x.checked_add(&y).unwrap().to_i128(), Some(a + b));
    assert_eq!(x.checked_sub(&y).unwrap().to_i128(), Some(a - b));
    assert_eq!(x.checked_mul(&y).unwrap().to_i128(), Some(a * b));
    assert_eq!(x.cmp(&y), a.cmp(&b));
});
