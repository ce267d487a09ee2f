use crate::emulator::Emulator;
use crate::hardware::bit_string::BitString;
use std::io;
use std::io::Write;

pub struct StringWriter {
    vec: Vec<u8>,
}
impl Write for StringWriter {
    fn write(&mut self, data: &[u8]) -> Result<usize, io::Error> {
        self.vec.write(data)
    }
    fn flush(&mut self) -> Result<(), io::Error> {
        Ok(())
    }
}
impl StringWriter {
    pub fn new() -> Self {
        let vec = Vec::<u8>::with_capacity(120);
        Self { vec }
    }
    pub fn get_string(&self) -> String {
        String::from_utf8(self.vec.clone()).unwrap()
    }
}

/// Writer failing every write.
pub struct FailingWriter;
impl Write for FailingWriter {
    fn write(&mut self, _data: &[u8]) -> Result<usize, io::Error> {
        Err(io::Error::other("Error during write"))
    }
    fn flush(&mut self) -> Result<(), io::Error> {
        Ok(())
    }
}

/// Emulator with `program` loaded from address 0 on, words given as digit strings.
pub fn emulator_with_program(program: &[&str]) -> Emulator {
    let mut emu = Emulator::new();
    for (address, word) in program.iter().enumerate() {
        let word = word.parse::<BitString>().unwrap();
        emu.load_word(i32::try_from(address).unwrap(), word).unwrap();
    }
    emu
}
