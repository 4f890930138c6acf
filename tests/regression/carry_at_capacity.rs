use bigint_core::BigInt;

#[test]
fn test() {
    // Both limbs full and no spare slot for the carry.
    let mut x = BigInt::from(u64::MAX);
    assert_eq!(x.capacity(), x.len());
    x.add(&BigInt::from(1)).unwrap();
    assert_eq!(x.limbs(), [0, 0, 1]);
    assert_eq!(x.to_string(), "18446744073709551616");
}
