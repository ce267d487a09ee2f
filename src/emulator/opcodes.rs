//! Implemented operations for the LC-3 subset.
//!
//! Diagrams give digit positions, digit 0 being the most significant bit.
use crate::emulator::instruction::Instruction;
use crate::errors::ExecutionError;
use crate::hardware::bit_string::BitString;
use crate::hardware::memory::Memory;
use crate::hardware::registers::Registers;

/// Supported opcodes, any other value of the top 4 bits is ignored.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, enumn::N)]
pub enum Opcode {
    Br = 0b0000,
    Add = 0b0001,
    Ld = 0b0010,
    And = 0b0101,
    Not = 0b1001,
    Trap = 0b1111,
}

/// ADD: Mathematical addition in 2 variants
/// - DR is set with result of SR 1 + SR 2
/// ```text
///  0____3__4_6___7_9__10__11_12_13_15
/// | 0001 |  DR | SR1 | 0 | 00 | SR2 |
///  ---------------------------------
/// ```
/// - DR is set with result of SR 1 + sign extended immediate
/// ```text
///  0____3__4_6___7_9__10__11___15
/// | 0001 |  DR | SR1 | 1 |  IMM5 |
///  ------------------------------
/// ```
/// The sum wraps around at 16 bits.
pub fn add(i: Instruction, r: &mut Registers) {
    let operand = if i.is_immediate() {
        i.get_immediate()
    } else {
        r.get(i.sr2_number()).get_signed()
    };
    let sum = r.get(i.sr1_number()).get_signed().wrapping_add(operand);
    r.set(i.dr_number(), BitString::from_signed(sum));
    r.update_conditional_register(i.dr_number());
}
/// AND: bit-wise AND in 2 variants
/// - DR is set with result of SR 1 AND SR 2
/// ```text
///  0____3__4_6___7_9__10__11_12_13_15
/// | 0101 |  DR | SR1 | 0 | 00 | SR2 |
///  ---------------------------------
/// ```
/// - DR is set with result of SR 1 AND sign extended immediate
/// ```text
///  0____3__4_6___7_9__10__11___15
/// | 0101 |  DR | SR1 | 1 |  IMM5 |
///  ------------------------------
/// ```
pub fn and(i: Instruction, r: &mut Registers) {
    let operand = if i.is_immediate() {
        BitString::from_signed(i.get_immediate())
    } else {
        r.get(i.sr2_number())
    };
    let digits = r
        .get(i.sr1_number())
        .digits()
        .zip(operand.digits())
        .map(|(a, b)| a && b)
        .collect::<Vec<_>>();
    let mut result = BitString::default();
    result.set_digits(&digits);
    r.set(i.dr_number(), result);
    r.update_conditional_register(i.dr_number());
}

/// NOT: bit-wise complement of the value in SR 1
/// ```text
///  0____3__4_6___7_9__10___15
/// | 1001 |  DR | SR1 | 111111 |
///  ---------------------------
/// ```
pub fn not(i: Instruction, r: &mut Registers) {
    let mut value = r.get(i.sr1_number());
    value.invert();
    r.set(i.dr_number(), value);
    r.update_conditional_register(i.dr_number());
}
/// BR: Conditional Branch
/// This opcode adds the value of the sign extended offset to the already incremented PC
/// if one of the set `nzp` bits matches the set bit of the condition code.
/// With none of the `nzp` bits set it never branches.
/// ```text
///  0____3__4__6___7_______15
/// | 0000 |  nzp | PCoffset9 |
///  -------------------------
/// ```
pub fn br(i: Instruction, r: &mut Registers) {
    let do_break = i
        .nzp()
        .digits()
        .zip(r.condition_code().digits())
        .any(|(requested, set)| requested && set);
    if do_break {
        let target = r.pc().get_signed().wrapping_add(i.pc_offset9());
        r.set_pc(BitString::from_signed(target));
    }
}

/// LD: Loads content of memory address of PC + sign extended offset into DR.
/// ```text
///  0____3__4__6___7_______15
/// | 0010 |  DR  | PCoffset9 |
///  -------------------------
/// ```
///
/// # Errors
/// - PC + offset is outside of memory
pub fn ld(i: Instruction, r: &mut Registers, memory: &Memory) -> Result<(), ExecutionError> {
    let pc = i32::from(r.pc().get_signed());
    let offset = i32::from(i.pc_offset9());
    let value = memory
        .get(pc + offset)
        .map_err(|_| ExecutionError::EffectiveAddressOutOfRange { pc, offset })?;
    r.set(i.dr_number(), value);
    r.update_conditional_register(i.dr_number());
    Ok(())
}
