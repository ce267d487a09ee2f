use crate::errors::ExecutionError;
use crate::hardware::bit_string::BitString;
use std::fmt::{Debug, Formatter};

pub const MEMORY_SIZE: usize = 50;

/// An abstraction for the LC-3 memory excluding registers.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    /// Index equals memory address
    data: [BitString; MEMORY_SIZE],
}

impl Debug for Memory {
    /// Only lists the cells which are not 0.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.data
                    .iter()
                    .enumerate()
                    .filter(|(_, word)| word.get_unsigned() != 0),
            )
            .finish()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: [BitString::default(); MEMORY_SIZE],
        }
    }
    /// Validates `address` and converts it to an index into the cells.
    ///
    /// # Errors
    /// - `address` is not in `0..50`
    pub fn index_of(address: i32) -> Result<usize, ExecutionError> {
        usize::try_from(address)
            .ok()
            .filter(|index| *index < MEMORY_SIZE)
            .ok_or(ExecutionError::AddressOutOfRange { address })
    }
    /// # Errors
    /// - `address` is not in `0..50`
    pub fn get(&self, address: i32) -> Result<BitString, ExecutionError> {
        Ok(self.data[Self::index_of(address)?])
    }
    /// Replaces the word at `address`.
    ///
    /// # Errors
    /// - `address` is not in `0..50`
    pub fn set(&mut self, address: i32, word: BitString) -> Result<(), ExecutionError> {
        self.data[Self::index_of(address)?] = word;
        Ok(())
    }
    /// All cells, index equals address.
    #[must_use]
    pub const fn cells(&self) -> &[BitString; MEMORY_SIZE] {
        &self.data
    }
    pub fn reset(&mut self) {
        self.data = [BitString::default(); MEMORY_SIZE];
    }
}
