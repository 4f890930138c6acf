use bigint_core::BigInt;

#[test]
fn test() {
    let mut x = BigInt::parse("-18446744073709551617").unwrap();
    let copy = x.clone();
    x.mul(&copy).unwrap();
    assert_eq!(x.to_string(), "340282366920938463500268095579187314689");
}
