use bigint_core::{BigInt, Sign};
use indoc::indoc;

#[test]
fn bigint() {
    assert_eq!(format!("{:?}", BigInt::new()), "BigInt(0)");
    assert_eq!(format!("{:?}", BigInt::from(-1)), "BigInt(-1)");
    assert_eq!(
        format!("{:?}", BigInt::from(u128::MAX)),
        "BigInt(340282366920938463463374607431768211455)",
    );
}

#[test]
fn released() {
    let mut x = BigInt::from(7);
    x.release();
    assert_eq!(format!("{:?}", x), "BigInt(0)");
}

#[test]
fn sign() {
    assert_eq!(format!("{:?}", Sign::Positive), "Positive");
    assert_eq!(format!("{:?}", Sign::Negative), "Negative");
}

#[test]
fn error() {
    let err = BigInt::parse("12x4").unwrap_err();
    let expected = "Error(\"invalid digit 'x'\", index: 2)";
    assert_eq!(format!("{:?}", err), expected);

    let err = BigInt::parse("").unwrap_err();
    let expected = "Error(\"cannot parse integer from empty string\", index: 0)";
    assert_eq!(format!("{:?}", err), expected);
}

#[test]
fn error_code() {
    let err = BigInt::parse("-").unwrap_err();
    assert_eq!(format!("{:?}", err.code()), "MissingDigits");

    let err = BigInt::parse("9_000").unwrap_err();
    assert_eq!(format!("{:?}", err.code()), "InvalidDigit('_')");
}

#[test]
fn indented() {
    #[derive(Debug)]
    #[allow(dead_code)]
    struct Ledger {
        total: BigInt,
        entries: Vec<BigInt>,
    }

    let ledger = Ledger {
        total: BigInt::from(-5),
        entries: vec![BigInt::from(3), BigInt::from(-8)],
    };

    let expected = indoc! {"
        Ledger {
            total: BigInt(-5),
            entries: [
                BigInt(3),
                BigInt(-8),
            ],
        }"};
    assert_eq!(format!("{:#?}", ledger), expected);
}
