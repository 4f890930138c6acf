use bigint_core::{BigInt, Sign};

#[test]
fn test() {
    // Opposite values of several limbs used to leave their length behind.
    let mut x = BigInt::parse("-79228162514264337593543950336").unwrap();
    x.add(&BigInt::parse("79228162514264337593543950336").unwrap())
        .unwrap();
    assert!(x.is_zero());
    assert_eq!(x.len(), 1);
    assert_eq!(x.sign(), Sign::Positive);
    assert_eq!(x.to_string(), "0");
}
