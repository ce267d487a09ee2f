//! State of the simulated machine: binary words, registers and memory.
pub mod bit_string;
pub mod memory;
pub mod registers;
