use crate::errors::ExecutionError;
use crate::hardware::registers::Registers;
use std::io;
use std::io::Write;
use std::ops::ControlFlow;

/// Supported trap vectors, any other vector is ignored.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, enumn::N)]
pub enum TrapVector {
    Out = 0x21,
    Halt = 0x25,
}

/// OUT: Write a character in R0[7:0] to the console display.
pub fn out(regs: &Registers, stdout: &mut impl Write) -> ControlFlow<Result<(), ExecutionError>> {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "slice of 8 digits always fits into u8"
    )]
    let c = regs.get(0).slice(8, 8).get_unsigned() as u8 as char;
    write_str_out(&String::from(c), stdout)
}

/// HALT: End program.
pub const fn halt() -> ControlFlow<Result<(), ExecutionError>> {
    ControlFlow::Break(Ok(()))
}

fn write_str_out(
    message: &str,
    stdout: &mut impl Write,
) -> ControlFlow<Result<(), ExecutionError>> {
    match write!(stdout, "{message}").and_then(|()| stdout.flush()) {
        Ok(()) => ControlFlow::Continue(()),
        Err(e) => wrap_io_error_in_cf(&e),
    }
}

fn wrap_io_error_in_cf(error: &io::Error) -> ControlFlow<Result<(), ExecutionError>, ()> {
    ControlFlow::Break(Err(ExecutionError::IOInputOutputError(error.to_string())))
}
