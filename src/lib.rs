//! # LC-3 Simulator.
//!
//! `lc3-simulator` runs programs written for a reduced subset of the LC-3 system:
//! `BR`, `ADD`, `LD`, `AND`, `NOT` and the `OUT`/`HALT` traps over a memory of 50 words.
//! Usage starts with loading words via `emulator::Emulator::load_word`.
//!
//!  # Example
//! ```
//! use lc3_simulator::emulator::Emulator;
//! use lc3_simulator::hardware::bit_string::BitString;
//! let mut emu = Emulator::new();
//! // R1 = R2 + R3
//! emu.load_word(0, "0001_001_010_0_00_011".parse::<BitString>().unwrap()).unwrap();
//! // HALT
//! emu.load_word(1, "1111_0000_0010_0101".parse::<BitString>().unwrap()).unwrap();
//! emu.run_with_output(&mut Vec::<u8>::new()).unwrap();
//! assert_eq!(emu.registers()[1].get_unsigned(), 5);
//! ```
//! # Errors
//! - Address outside of the 50 memory cells, when loading or reading words
//! - `LD` with an effective address outside of memory
//! - Loading a word which is not 16 bits wide
//! - Writing trap output failed

pub mod emulator;
pub mod errors;
pub mod hardware;
