//! The fetch-decode-execute engine.
pub mod instruction;
pub mod opcodes;
pub mod trap_routines;

#[cfg(test)]
pub(crate) mod test_helpers;

use crate::emulator::instruction::Instruction;
use crate::emulator::opcodes::Opcode;
use crate::emulator::trap_routines::TrapVector;
use crate::errors::ExecutionError;
use crate::hardware::bit_string::{BitString, WORD_BITS};
use crate::hardware::memory::Memory;
use crate::hardware::registers::{REGISTER_COUNT, Registers};
use slog::{Discard, Logger, debug, o, trace, warn};
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::Write;
use std::ops::ControlFlow;

/// The public facing emulator used to run programs of the LC-3 subset.
///
/// Register `i` starts with the value `i`, memory, PC and IR with 0 and the condition code
/// with `000`.
pub struct Emulator {
    registers: Registers,
    memory: Memory,
    logger: Logger,
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Emulator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emulator")
            .field("registers", &self.registers)
            .field("memory", &self.memory)
            .finish_non_exhaustive()
    }
}

impl Emulator {
    /// Constructor method, the emulator does not log.
    #[must_use]
    pub fn new() -> Self {
        Self::with_logger(None::<Logger>)
    }
    /// Creates an emulator logging every executed instruction to `logger`.
    pub fn with_logger<L: Into<Option<Logger>>>(logger: L) -> Self {
        let logger = logger
            .into()
            .unwrap_or_else(|| Logger::root(Discard, o!()))
            .new(o!("component" => "emulator"));
        Self {
            registers: Registers::new(),
            memory: Memory::new(),
            logger,
        }
    }

    /// Writes `word`, an instruction or data, into memory at `address`.
    ///
    /// # Errors
    /// - `address` is not in `0..50`
    /// - `word` is not 16 bits wide
    pub fn load_word(&mut self, address: i32, word: BitString) -> Result<(), ExecutionError> {
        if word.width() != WORD_BITS {
            return Err(ExecutionError::WordWidthMismatch {
                width: word.width(),
            });
        }
        self.memory.set(address, word)
    }

    /// Runs instructions starting at PC until `HALT`, printing trap output to stdout.
    /// Programs without `HALT` run forever.
    ///
    /// # Errors
    /// - PC or an effective address is outside of memory
    /// - writing program output failed
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        self.run_with_output(&mut io::stdout().lock())
    }

    /// Like [`Emulator::run`] but writing trap output into `stdout`.
    ///
    /// # Errors
    /// See [`Emulator::run`]
    pub fn run_with_output(&mut self, stdout: &mut impl Write) -> Result<(), ExecutionError> {
        loop {
            if let ControlFlow::Break(res) = self.step(stdout) {
                return res;
            }
        }
    }

    /// Fetches the instruction at PC into IR, increments PC and executes the instruction.
    ///
    /// Returns `Break(Ok(()))` on `HALT`, `Break(Err(_))` on errors and `Continue(())` otherwise.
    /// Unsupported opcodes and trap vectors are ignored.
    pub fn step(&mut self, stdout: &mut impl Write) -> ControlFlow<Result<(), ExecutionError>> {
        let pc = i32::from(self.registers.pc().get_unsigned());
        let word = self.continue_or_break(self.memory.get(pc))?;
        self.registers.set_ir(word);
        self.registers.increment_pc();

        let i = Instruction::from(word);
        trace!(self.logger, "execute"; "pc" => pc, "instruction" => ?i);
        match Opcode::n(i.op_code()) {
            Some(Opcode::Br) => opcodes::br(i, &mut self.registers),
            Some(Opcode::Add) => opcodes::add(i, &mut self.registers),
            Some(Opcode::Ld) => {
                let res = opcodes::ld(i, &mut self.registers, &self.memory);
                self.continue_or_break(res)?;
            }
            Some(Opcode::And) => opcodes::and(i, &mut self.registers),
            Some(Opcode::Not) => opcodes::not(i, &mut self.registers),
            Some(Opcode::Trap) => return self.trap(i, stdout),
            None => {
                debug!(self.logger, "ignoring unsupported opcode"; "opcode" => i.op_code());
            }
        }
        ControlFlow::Continue(())
    }

    fn trap(
        &self,
        i: Instruction,
        stdout: &mut impl Write,
    ) -> ControlFlow<Result<(), ExecutionError>> {
        match TrapVector::n(i.trap_vector()) {
            Some(TrapVector::Halt) => {
                debug!(self.logger, "halted"; "pc" => self.registers.pc().get_unsigned());
                trap_routines::halt()
            }
            Some(TrapVector::Out) => {
                let res = trap_routines::out(&self.registers, stdout);
                if let ControlFlow::Break(Err(e)) = &res {
                    warn!(self.logger, "execution aborted"; "error" => %e);
                }
                res
            }
            None => {
                debug!(self.logger, "ignoring unsupported trap"; "vector" => i.trap_vector());
                ControlFlow::Continue(())
            }
        }
    }

    fn continue_or_break<T>(
        &self,
        res: Result<T, ExecutionError>,
    ) -> ControlFlow<Result<(), ExecutionError>, T> {
        match res {
            Ok(value) => ControlFlow::Continue(value),
            Err(e) => {
                warn!(self.logger, "execution aborted"; "error" => %e);
                ControlFlow::Break(Err(e))
            }
        }
    }

    /// Current condition code, digits `NZP`.
    #[must_use]
    pub const fn condition_code(&self) -> BitString {
        self.registers.condition_code()
    }
    #[must_use]
    pub const fn registers(&self) -> &[BitString; REGISTER_COUNT] {
        self.registers.general_purpose()
    }
    #[must_use]
    pub const fn pc(&self) -> BitString {
        self.registers.pc()
    }
    #[must_use]
    pub const fn ir(&self) -> BitString {
        self.registers.ir()
    }
    /// # Errors
    /// - `address` is not in `0..50`
    pub fn memory_cell(&self, address: i32) -> Result<BitString, ExecutionError> {
        self.memory.get(address)
    }
    /// Stores the two's complement representation of `value` at `address`.
    ///
    /// # Errors
    /// - `address` is not in `0..50`
    pub fn set_memory_cell(&mut self, address: i32, value: i16) -> Result<(), ExecutionError> {
        self.memory.set(address, BitString::from_signed(value))
    }
    /// Restores the general purpose registers and memory to their initial values.
    /// PC, IR and the condition code are kept.
    pub fn reset(&mut self) {
        self.registers.reset_general_purpose();
        self.memory.reset();
    }
}

impl Display for Emulator {
    /// Renders PC, IR, CC, all registers and all memory cells, three per line.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "PC {}   IR {}   CC {}",
            self.pc(),
            self.ir(),
            self.condition_code()
        )?;
        for (idx, r) in self.registers().iter().enumerate() {
            write!(f, "R{idx} {r}")?;
            f.write_str(if idx % 3 == 2 { "\n" } else { "   " })?;
        }
        writeln!(f)?;
        for (idx, word) in self.memory.cells().iter().enumerate() {
            write!(f, "{idx:3} {word}")?;
            f.write_str(if idx % 3 == 2 { "\n" } else { "   " })?;
        }
        writeln!(f)
    }
}
