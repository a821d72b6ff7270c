#![cfg(not(target_arch = "wasm32"))]

use forge_checksum::{
    adjust, internet_checksum, ipv4_header_checksum, replace_u16, replace_u32, IPV4_CHECKSUM_OFFSET,
};
use proptest::prelude::*;

/// Word indexes of a 20-byte IPv4 header that may be rewritten: everything except the first word
/// (which pins the header to non-zero content) and the checksum word.
const MUTABLE_WORDS: [usize; 8] = [1, 2, 3, 4, 6, 7, 8, 9];

fn with_valid_checksum(mut header: [u8; 20]) -> [u8; 20] {
    header[0] = 0x45;
    let csum = ipv4_header_checksum(&header);
    header[IPV4_CHECKSUM_OFFSET..IPV4_CHECKSUM_OFFSET + 2].copy_from_slice(&csum.to_be_bytes());
    header
}

fn word(header: &[u8; 20], index: usize) -> u16 {
    u16::from_be_bytes([header[index * 2], header[index * 2 + 1]])
}

fn set_word(header: &mut [u8; 20], index: usize, value: u16) {
    header[index * 2..index * 2 + 2].copy_from_slice(&value.to_be_bytes());
}

fn stored_checksum(header: &[u8; 20]) -> [u8; 2] {
    [header[IPV4_CHECKSUM_OFFSET], header[IPV4_CHECKSUM_OFFSET + 1]]
}

fn rewrite_word(header: &mut [u8; 20], index: usize, value: u16) {
    let old = word(header, index);
    set_word(header, index, value);
    let mut check = stored_checksum(header);
    adjust(&mut check, i32::from(old) - i32::from(value));
    header[IPV4_CHECKSUM_OFFSET..IPV4_CHECKSUM_OFFSET + 2].copy_from_slice(&check);
}

#[test]
fn carry_boundaries_match_full_recompute() {
    let mut header = with_valid_checksum([
        0x45, 0x00, 0x00, 0x3c, 0xff, 0xff, 0x40, 0x00, 0x40, 0x06, 0x00, 0x00, 0x0a, 0x00, 0x00,
        0x01, 0x0a, 0x00, 0x00, 0x63,
    ]);

    rewrite_word(&mut header, 2, 0x0000);
    assert_eq!(word(&header, 2), 0x0000);
    assert_eq!(u16::from_be_bytes(stored_checksum(&header)), ipv4_header_checksum(&header));
    assert_eq!(internet_checksum(&header), 0);

    rewrite_word(&mut header, 2, 0xffff);
    assert_eq!(word(&header, 2), 0xffff);
    assert_eq!(u16::from_be_bytes(stored_checksum(&header)), ipv4_header_checksum(&header));
}

#[test]
fn zero_result_is_reached_like_a_full_recompute() {
    // Pick the identification value that makes the correct checksum exactly 0x0000.
    let mut header = with_valid_checksum([
        0x45, 0x00, 0x00, 0x3c, 0x00, 0x00, 0x40, 0x00, 0x40, 0x06, 0x00, 0x00, 0x0a, 0x00, 0x00,
        0x01, 0x0a, 0x00, 0x00, 0x63,
    ]);
    // Growing a zero word by the current checksum drives the folded sum to 0xffff.
    let target = u16::from_be_bytes(stored_checksum(&header));

    rewrite_word(&mut header, 2, target);
    assert_eq!(ipv4_header_checksum(&header), 0x0000);
    assert_eq!(stored_checksum(&header), [0x00, 0x00]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn incremental_equals_full_recompute(
        bytes in any::<[u8; 20]>(),
        index in prop::sample::select(MUTABLE_WORDS.to_vec()),
        value in any::<u16>(),
    ) {
        let mut header = with_valid_checksum(bytes);
        rewrite_word(&mut header, index, value);
        prop_assert_eq!(u16::from_be_bytes(stored_checksum(&header)), ipv4_header_checksum(&header));
    }

    #[test]
    fn rewrite_there_and_back_restores_checksum(
        bytes in any::<[u8; 20]>(),
        index in prop::sample::select(MUTABLE_WORDS.to_vec()),
        value in any::<u16>(),
    ) {
        let original = with_valid_checksum(bytes);
        let mut header = original;
        let old = word(&header, index);

        rewrite_word(&mut header, index, value);
        rewrite_word(&mut header, index, old);
        prop_assert_eq!(header, original);
    }

    #[test]
    fn zero_delta_never_changes_checksum(check in any::<u16>()) {
        let mut field = check.to_be_bytes();
        adjust(&mut field, 0);
        prop_assert_eq!(field, check.to_be_bytes());
    }

    #[test]
    fn replace_u32_equals_two_u16_replacements(check in any::<u16>(), old in any::<u32>(), new in any::<u32>()) {
        let by_halves = replace_u16(
            replace_u16(check, (old >> 16) as u16, (new >> 16) as u16),
            old as u16,
            new as u16,
        );
        prop_assert_eq!(replace_u32(check, old, new), by_halves);
    }
}
