//! Disassembler Tests.
//!
//! Verifies the text for every table entry, the no-op and unknown words,
//! and the program listing format.

use mipsim_core::isa::disasm::{decode_to_text, disassemble_program};
use mipsim_core::isa::encode::{self, assemble};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(encode::add(1, 2, 3), "add $1, $2, $3")]
#[case(encode::sub(4, 5, 6), "sub $4, $5, $6")]
#[case(encode::and(7, 8, 9), "and $7, $8, $9")]
#[case(encode::or(10, 11, 12), "or $10, $11, $12")]
#[case(encode::slt(13, 14, 15), "slt $13, $14, $15")]
#[case(encode::lw(1, 0, 0), "lw $1, 0($0)")]
#[case(encode::lw(2, -4, 29), "lw $2, -4($29)")]
#[case(encode::sw(31, 8, 3), "sw $31, 8($3)")]
#[case(encode::beq(1, 0, 3), "beq $1, $0, 3")]
#[case(encode::beq(2, 3, -2), "beq $2, $3, -2")]
#[case(encode::j(2), "j 2")]
fn text_for_each_instruction(#[case] word: u32, #[case] text: &str) {
    assert_eq!(decode_to_text(word), text);
}

#[test]
fn zero_word_is_nop() {
    assert_eq!(decode_to_text(0), "nop");
}

#[test]
fn j_address_is_printed_sign_extended() {
    assert_eq!(decode_to_text(encode::j(0x03FF_FFFF)), "j -1");
}

#[rstest]
#[case(0xFC00_0000, "unknown 0xfc000000")]
#[case(0x0000_0021, "unknown 0x00000021")]
#[case(0x2001_0005, "unknown 0x20010005")]
fn unmatched_words_are_unknown(#[case] word: u32, #[case] text: &str) {
    assert_eq!(decode_to_text(word), text);
}

#[test]
fn program_listing() {
    let program = assemble(&[encode::lw(1, 0, 0), encode::add(2, 1, 1), 0]);
    assert_eq!(
        disassemble_program(&program),
        vec![
            "0x00000000: 0x8c010000  lw $1, 0($0)",
            "0x00000004: 0x00211020  add $2, $1, $1",
            "0x00000008: 0x00000000  nop",
        ]
    );
}

#[test]
fn listing_pads_partial_word() {
    let lines = disassemble_program(&[0x8C, 0x01]);
    assert_eq!(lines, vec!["0x00000000: 0x8c010000  lw $1, 0($0)"]);
}

proptest! {
    #[test]
    fn disassembly_is_stable(word in any::<u32>()) {
        prop_assert_eq!(decode_to_text(word), decode_to_text(word));
        prop_assert!(!decode_to_text(word).is_empty());
    }
}
