use bigint_core::BigInt;

#[test]
fn test() {
    // The result is longer than the target was.
    let mut x = BigInt::from(3);
    x.sub(&BigInt::parse("100000000000000000000000").unwrap())
        .unwrap();
    assert_eq!(x.to_string(), "-99999999999999999999997");
}
