use hamgen_code::{hamming_distance, Codeword, Representation};
use num_bigint::BigUint;
use proptest::prelude::*;

fn word(value: u128, width: u32) -> Codeword {
    let masked = if width >= 128 { value } else { value & ((1u128 << width) - 1) };
    Codeword::new(BigUint::from(masked), width).unwrap()
}

proptest! {
    #[test]
    fn distance_is_popcount_of_xor(a in any::<u128>(), b in any::<u128>(), width in 1u32..=128) {
        let (wa, wb) = (word(a, width), word(b, width));
        let mask = if width >= 128 { u128::MAX } else { (1u128 << width) - 1 };
        let expected = u64::from(((a ^ b) & mask).count_ones());
        prop_assert_eq!(hamming_distance(&wa, &wb).unwrap(), expected);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self(a in any::<u128>(), b in any::<u128>(), width in 1u32..=128) {
        let (wa, wb) = (word(a, width), word(b, width));
        prop_assert_eq!(hamming_distance(&wa, &wb).unwrap(), hamming_distance(&wb, &wa).unwrap());
        prop_assert_eq!(hamming_distance(&wa, &wa).unwrap(), 0);
    }

    #[test]
    fn renderings_round_trip(a in any::<u128>(), width in 1u32..=128) {
        let original = word(a, width);
        for representation in [Representation::Binary, Representation::Decimal, Representation::Hexadecimal] {
            let text = representation.render(&original);
            let parsed = representation.parse_value(&text, width).unwrap();
            prop_assert_eq!(&parsed, &original);
        }
    }

    #[test]
    fn padded_renderings_match_width(a in any::<u128>(), width in 1u32..=128) {
        let original = word(a, width);
        let binary = Representation::Binary.render(&original);
        prop_assert_eq!(binary.len(), width as usize);
        let hex = Representation::Hexadecimal.render(&original);
        prop_assert!(hex.starts_with("0x"));
        prop_assert_eq!(hex.len() - 2, width.div_ceil(4) as usize);
    }
}

#[test]
fn sixteen_bit_hex_always_has_four_digits() {
    for value in [0u32, 5, 0xff, 0x1000, 0xffff] {
        let text = Representation::Hexadecimal.render(&Codeword::new(BigUint::from(value), 16).unwrap());
        assert_eq!(text.len(), 6, "{text}");
    }
    let five = Codeword::new(BigUint::from(5u32), 16).unwrap();
    assert_eq!(Representation::Hexadecimal.render(&five), "0x0005");
}

#[test]
fn wide_codewords_do_not_truncate() {
    let bits_a = format!("1{}", "0".repeat(255));
    let bits_b = format!("0{}1", "0".repeat(254));
    let a = Codeword::from_bit_str(&bits_a).unwrap();
    let b = Codeword::from_bit_str(&bits_b).unwrap();
    assert_eq!(a.width(), 256);
    assert_eq!(hamming_distance(&a, &b).unwrap(), 2);
    let decimal = Representation::Decimal.render(&a);
    assert_eq!(Representation::Decimal.parse_value(&decimal, 256).unwrap(), a);
}
