use super::*;

#[test]
fn widening_is_lossless() {
    assert_eq!(i8::MIN.to_i128(), -128);
    assert_eq!(i64::MIN.to_i128(), i128::from(i64::MIN));
    assert_eq!(u64::MAX.to_i128(), i128::from(u64::MAX));
    assert_eq!(usize::MAX.to_i128(), usize::MAX as i128);
}

#[test]
fn narrowing_is_checked() {
    assert_eq!(u8::from_i128(255), Some(255));
    assert_eq!(u8::from_i128(256), None);
    assert_eq!(u8::from_i128(-1), None);
    assert_eq!(i16::from_i128(-32_768), Some(i16::MIN));
    assert_eq!(i16::from_i128(32_768), None);
    assert_eq!(u64::from_i128(i128::from(u64::MAX)), Some(u64::MAX));
}

#[test]
fn signedness_and_width() {
    assert!(i32::SIGNED);
    assert!(!u32::SIGNED);
    assert_eq!(<u16 as Discriminant>::BITS, 16);
    assert_eq!(<i64 as Discriminant>::BITS, 64);
}
