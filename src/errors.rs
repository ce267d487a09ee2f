use std::error::Error;

/// Errors raised while loading words into or running the emulator.
#[derive(Debug, displaydoc::Display, PartialEq, Eq, Clone)]
pub enum ExecutionError {
    /// Address {address} is outside of memory, valid range: 0..50
    AddressOutOfRange { address: i32 },
    /// Effective address of PC {pc} with offset {offset} is outside of memory, valid range: 0..50
    EffectiveAddressOutOfRange { pc: i32, offset: i32 },
    /// Word must be 16 bits wide, got {width} bits
    WordWidthMismatch { width: u8 },
    /// Error during writing program output to Stdout: {0}
    IOInputOutputError(String),
}
impl Error for ExecutionError {}

/// Errors parsing a [`BitString`](crate::hardware::bit_string::BitString) from text.
#[derive(Debug, displaydoc::Display, PartialEq, Eq, Clone, Copy)]
pub enum ParseBitStringError {
    /// Invalid digit {digit:?} at position {position}, only '0', '1' and '_' are allowed
    InvalidDigit { digit: char, position: usize },
    /// Bit string must have 1 to 16 digits, got {actual_digits}
    InvalidLength { actual_digits: usize },
}
impl Error for ParseBitStringError {}
