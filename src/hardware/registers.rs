use crate::hardware::bit_string::BitString;

pub const REGISTER_COUNT: usize = 8;
/// Width of the condition code (`NZP`).
pub const CC_BITS: u8 = 3;

/// General purpose registers plus PC, IR and the condition code CC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    general_purpose: [BitString; REGISTER_COUNT],
    pc: BitString,
    ir: BitString,
    cc: BitString,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Register `i` starts with the value `i`, PC and IR with 0, CC with `000`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            general_purpose: Self::initial_general_purpose(),
            pc: BitString::default(),
            ir: BitString::default(),
            cc: BitString::zero(CC_BITS),
        }
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "there are only 8 registers"
    )]
    fn initial_general_purpose() -> [BitString; REGISTER_COUNT] {
        std::array::from_fn(|i| BitString::from_unsigned(i as u16))
    }
    /// Restores the general purpose registers only, PC, IR and CC are kept.
    pub fn reset_general_purpose(&mut self) {
        self.general_purpose = Self::initial_general_purpose();
    }

    /// # Panics
    /// - `r` is not a register number in `0..8`
    #[must_use]
    pub fn get(&self, r: u8) -> BitString {
        assert!(r <= 7, "Invalid general purpose register get");
        self.general_purpose[usize::from(r)]
    }
    /// # Panics
    /// - `r` is not a register number in `0..8`
    pub fn set(&mut self, r: u8, value: BitString) {
        assert!(r <= 7, "Invalid general purpose register set");
        self.general_purpose[usize::from(r)] = value;
    }
    #[must_use]
    pub const fn general_purpose(&self) -> &[BitString; REGISTER_COUNT] {
        &self.general_purpose
    }
    #[must_use]
    pub const fn pc(&self) -> BitString {
        self.pc
    }
    pub const fn set_pc(&mut self, pc: BitString) {
        self.pc = pc;
    }
    pub const fn increment_pc(&mut self) {
        self.pc.increment_by_one();
    }
    #[must_use]
    pub const fn ir(&self) -> BitString {
        self.ir
    }
    pub const fn set_ir(&mut self, ir: BitString) {
        self.ir = ir;
    }
    #[must_use]
    pub const fn condition_code(&self) -> BitString {
        self.cc
    }
    /// The flag currently set, `None` before the first result defining instruction.
    #[must_use]
    pub fn condition_flag(&self) -> Option<ConditionFlag> {
        ConditionFlag::n(self.cc.get_unsigned())
    }
    pub(crate) fn update_conditional_register(&mut self, r: u8) {
        let val = self.get(r).get_signed();
        self.cc.set_unsigned(ConditionFlag::from(val) as u16);
    }
}

/// The one-hot flags of the condition code, digit 0 is `N`, digit 2 is `P`.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, enumn::N)]
pub enum ConditionFlag {
    Pos = 1 << 0, // Positive
    Zero = 1 << 1,
    Neg = 1 << 2, // Negative
}

impl From<i16> for ConditionFlag {
    fn from(value: i16) -> Self {
        match value {
            0 => Self::Zero,
            v if v < 0 => Self::Neg,
            _ => Self::Pos,
        }
    }
}
