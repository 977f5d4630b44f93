//! # Flags Register Tests

use ls8_core::common::Flags;
use ls8_core::common::flags::{FLAG_E, FLAG_G, FLAG_L};
use rstest::rstest;

#[rstest]
#[case(5, 5, true, false, false)]
#[case(7, 3, false, true, false)]
#[case(2, 9, false, false, true)]
#[case(0, 255, false, false, true)]
#[case(255, 0, false, true, false)]
fn compare_sets_exactly_one_flag(
    #[case] a: u8,
    #[case] b: u8,
    #[case] equal: bool,
    #[case] greater: bool,
    #[case] less: bool,
) {
    let flags = Flags::compare(a, b);
    assert_eq!(
        flags,
        Flags {
            equal,
            greater,
            less
        }
    );
    assert_eq!(flags.bits().count_ones(), 1);
}

#[test]
fn packed_layout_is_00000lge() {
    let all = Flags {
        equal: true,
        greater: true,
        less: true,
    };
    assert_eq!(all.bits(), 0b0000_0111);
    assert_eq!(Flags::compare(1, 1).bits(), FLAG_E);
    assert_eq!(Flags::compare(2, 1).bits(), FLAG_G);
    assert_eq!(Flags::compare(1, 2).bits(), FLAG_L);
}

#[test]
fn from_bits_ignores_upper_bits() {
    assert_eq!(Flags::from_bits(0b1111_1010), Flags::compare(9, 1));
    assert_eq!(Flags::from_bits(0), Flags::default());
}
