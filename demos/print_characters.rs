use lc3_simulator::emulator::Emulator;
use lc3_simulator::hardware::bit_string::BitString;
use slog::{Drain, Logger, o};
use slog_term::{FullFormat, TermDecorator};
use std::error::Error;

/// Prints `HI` via the OUT trap and shows the final machine state.
fn main() -> Result<(), Box<dyn Error>> {
    let decorator = TermDecorator::new().build();
    let drain = FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let mut emu = Emulator::with_logger(Logger::root(drain, o!()));

    let program = [
        "0010_000_000001001", // R0 = mem[10]
        "1111_0000_0010_0001", // OUT
        "0001_000_000_1_00001", // R0 = R0 + 1
        "1111_0000_0010_0001", // OUT
        "0001_000_000_1_00001", // R0 = R0 + 1
        "1001_000_000_111111", // R0 = NOT R0
        "1111_0000_0010_0101", // HALT
    ];
    for (address, digits) in (0..).zip(program) {
        emu.load_word(address, digits.parse::<BitString>()?)?;
    }
    emu.set_memory_cell(10, i16::from(b'H'))?;
    emu.run()?;
    println!("\n{emu}");
    Ok(())
}
