//! Instruction Field Extraction Properties.
//!
//! Verifies that `decode_fields` and the `InstructionBits` accessors pull
//! each field from its fixed bit range.

use mipsim_core::isa::instruction::{Fields, InstructionBits, decode_fields};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::builder::instruction::InstructionBuilder;

#[test]
fn r_format_fields() {
    let word = InstructionBuilder::new().sub(7, 8, 9).build();
    assert_eq!(
        decode_fields(word),
        Fields {
            opcode: 0,
            rs: 8,
            rt: 9,
            rd: 7,
            funct: 0x22,
            imm16: word & 0xFFFF,
            addr26: word & 0x03FF_FFFF,
        }
    );
}

#[test]
fn i_format_immediate_is_raw() {
    let word = InstructionBuilder::new().lw(3, -8, 29).build();
    let f = decode_fields(word);
    assert_eq!(f.opcode, 0x23);
    assert_eq!(f.rs, 29);
    assert_eq!(f.rt, 3);
    assert_eq!(f.imm16, 0xFFF8);
}

#[test]
fn j_format_address() {
    let word = InstructionBuilder::new().j(0x0123_4567).build();
    assert_eq!(word.opcode(), 0x02);
    assert_eq!(word.addr26(), 0x0123_4567);
}

proptest! {
    #[test]
    fn accessors_agree_with_decode_fields(word in any::<u32>()) {
        let f = decode_fields(word);
        prop_assert_eq!(f.opcode, word.opcode());
        prop_assert_eq!(f.rs, word.rs());
        prop_assert_eq!(f.rt, word.rt());
        prop_assert_eq!(f.rd, word.rd());
        prop_assert_eq!(f.funct, word.funct());
        prop_assert!(f.rs < 32 && f.rt < 32 && f.rd < 32);
        prop_assert!(f.opcode < 64 && f.funct < 64);
    }

    #[test]
    fn decode_is_idempotent(word in any::<u32>()) {
        prop_assert_eq!(decode_fields(word), decode_fields(word));
    }
}
