use crate::hardware::bit_string::BitString;
use std::fmt::{Debug, Formatter};

/// Wrapper for a 16 bit LC-3 instruction held in IR.
///
/// Fields are addressed as `(start, width)` with digit 0 being the most significant bit,
/// format is: `OOOO_DDD_P_PPPP_PPPP`
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Instruction(BitString);

impl Instruction {
    /// Gives the value of only the specified digit range as a new [`BitString`].
    ///
    /// # Panics
    /// - `start + width` is greater than 16
    #[must_use]
    pub fn field(self, start: u8, width: u8) -> BitString {
        self.0.slice(start, width)
    }
    /// Unsigned value of a field of at most 8 digits, e.g. a register number.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "width is at most 8 digits"
    )]
    pub fn field_u8(self, start: u8, width: u8) -> u8 {
        debug_assert!(width <= 8, "field of width {width:?} does not fit into u8");
        self.field(start, width).get_unsigned() as u8
    }
    #[must_use]
    pub fn op_code(self) -> u8 {
        self.field_u8(0, 4)
    }
    #[must_use]
    pub fn dr_number(self) -> u8 {
        self.field_u8(4, 3)
    }
    #[must_use]
    pub fn sr1_number(self) -> u8 {
        self.field_u8(7, 3)
    }
    #[must_use]
    pub fn sr2_number(self) -> u8 {
        self.field_u8(13, 3)
    }
    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.0.bit(10)
    }
    /// The sign extended 5 bit immediate.
    #[must_use]
    pub fn get_immediate(self) -> i16 {
        self.field(11, 5).get_signed()
    }
    /// The `nzp` digits of BR, in the same order as the condition code.
    #[must_use]
    pub fn nzp(self) -> BitString {
        self.field(4, 3)
    }
    /// Offset to add to program counter PC.
    /// Can be positive or negative.
    #[must_use]
    pub fn pc_offset9(self) -> i16 {
        self.field(7, 9).get_signed()
    }
    #[must_use]
    pub fn trap_vector(self) -> u8 {
        self.field_u8(10, 6)
    }
}

impl Debug for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Op: {:04b}, DR: {:03b}, PC_Off: {}",
            self.op_code(),
            self.dr_number(),
            self.field(7, 9)
        )
    }
}

impl From<BitString> for Instruction {
    fn from(bits: BitString) -> Self {
        debug_assert!(bits.width() == 16, "instruction must be 16 bits wide");
        Self(bits)
    }
}
impl From<u16> for Instruction {
    fn from(bits: u16) -> Self {
        Self(BitString::from_unsigned(bits))
    }
}
