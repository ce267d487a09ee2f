//! Fixed width binary digits every piece of simulator state is built from.
use crate::errors::ParseBitStringError;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Width of a memory word, a register, PC and IR.
pub const WORD_BITS: u8 = 16;

/// An ordered sequence of 1 to 16 binary digits.
///
/// Digit `0` is the most significant one, so for a 16 bit word digit `0` is the sign bit
/// and digit `15` is the least significant bit. This is the numbering all instruction
/// fields are given in:
/// ```text
///  0__3___4_6___7_9__10__11_________15
/// | 0001 |  DR | SR1 | 1 |   IMM5     |
///  -----------------------------------
/// ```
/// Values are `Copy`, so storing a `BitString` anywhere stores an independent duplicate.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct BitString {
    /// Digits right aligned, every bit above `width` is 0
    bits: u16,
    width: u8,
}

impl Default for BitString {
    fn default() -> Self {
        Self::zero(WORD_BITS)
    }
}

impl BitString {
    /// All digits `0`.
    ///
    /// # Panics
    /// - `width` is not in `1..=16`
    #[must_use]
    pub const fn zero(width: u8) -> Self {
        assert!(width >= 1 && width <= WORD_BITS, "width must be in 1..=16");
        Self { bits: 0, width }
    }
    /// 16 bit word holding the unsigned binary representation of `value`.
    #[must_use]
    pub const fn from_unsigned(value: u16) -> Self {
        Self {
            bits: value,
            width: WORD_BITS,
        }
    }
    /// 16 bit word holding the two's complement representation of `value`.
    #[must_use]
    pub const fn from_signed(value: i16) -> Self {
        Self {
            bits: value.cast_unsigned(),
            width: WORD_BITS,
        }
    }
    const fn mask(width: u8) -> u16 {
        if width >= WORD_BITS {
            u16::MAX
        } else {
            (1 << width) - 1
        }
    }
    #[must_use]
    pub const fn width(self) -> u8 {
        self.width
    }
    /// Writes the unsigned binary representation of `value`.
    /// `value` has to fit into the width, this is only checked in debug builds.
    pub fn set_unsigned(&mut self, value: u16) {
        debug_assert!(
            value & !Self::mask(self.width) == 0,
            "value {value} does not fit into {} bits",
            self.width
        );
        self.bits = value & Self::mask(self.width);
    }
    /// Writes the two's complement representation of `value`.
    /// `value` has to fit into the width, this is only checked in debug builds.
    pub fn set_signed(&mut self, value: i16) {
        debug_assert!(
            {
                let limit = 1i32 << (self.width - 1);
                (-limit..limit).contains(&i32::from(value))
            },
            "value {value} does not fit into {} bits",
            self.width
        );
        self.bits = value.cast_unsigned() & Self::mask(self.width);
    }
    #[must_use]
    pub const fn get_unsigned(self) -> u16 {
        self.bits
    }
    /// Two's complement interpretation, digit `0` carries the negative weight.
    #[must_use]
    pub const fn get_signed(self) -> i16 {
        let extended = if self.bits >> (self.width - 1) & 1 == 1 {
            // negative: 1-extend
            self.bits | !Self::mask(self.width)
        } else {
            self.bits
        };
        extended.cast_signed()
    }
    /// Value of the digit at `index`, `0` being the most significant one.
    ///
    /// # Panics
    /// - `index` is not smaller than the width
    #[must_use]
    pub fn bit(self, index: u8) -> bool {
        assert!(
            index < self.width,
            "index: {index:?} is out of range for width {:?}",
            self.width
        );
        (self.bits >> (self.width - 1 - index)) & 1 == 1
    }
    /// New, independent `BitString` holding the digits `start..start + width`.
    /// Digit `0` of the result is digit `start` of `self`.
    ///
    /// # Panics
    /// - `width` is 0
    /// - `start + width` is greater than the width of `self`
    #[must_use]
    pub fn slice(self, start: u8, width: u8) -> Self {
        assert!(width > 0, "slice of width 0 at {start:?}");
        assert!(
            u16::from(start) + u16::from(width) <= u16::from(self.width),
            "slice {start:?}..{:?} is out of range for width {:?}",
            u16::from(start) + u16::from(width),
            self.width
        );
        let shift = self.width - start - width;
        Self {
            bits: (self.bits >> shift) & Self::mask(width),
            width,
        }
    }
    /// Flips every digit (one's complement).
    pub const fn invert(&mut self) {
        self.bits = !self.bits & Self::mask(self.width);
    }
    /// Adds one, wrapping around on overflow.
    pub const fn increment_by_one(&mut self) {
        self.bits = self.bits.wrapping_add(1) & Self::mask(self.width);
    }
    /// The digits from most to least significant, `true` meaning `1`.
    pub fn digits(self) -> impl ExactSizeIterator<Item = bool> {
        (0..self.width).map(move |i| self.bit(i))
    }
    /// Replaces all digits, the width becomes the number of given `digits`.
    ///
    /// # Panics
    /// - number of `digits` is not in `1..=16`
    pub fn set_digits(&mut self, digits: &[bool]) {
        assert!(
            (1..=usize::from(WORD_BITS)).contains(&digits.len()),
            "Bit string must have 1 to 16 digits, got {}",
            digits.len()
        );
        #[expect(
            clippy::cast_possible_truncation,
            reason = "length is checked to be at most 16 above"
        )]
        {
            self.width = digits.len() as u8;
        }
        self.bits = digits
            .iter()
            .fold(0, |acc, &digit| (acc << 1) | u16::from(digit));
    }
}

impl From<u16> for BitString {
    fn from(value: u16) -> Self {
        Self::from_unsigned(value)
    }
}
impl From<i16> for BitString {
    fn from(value: i16) -> Self {
        Self::from_signed(value)
    }
}

impl FromStr for BitString {
    type Err = ParseBitStringError;

    /// Parses digits like `"0001_001_010_1_00011"`, `_` is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .chars()
            .enumerate()
            .filter(|(_, c)| *c != '_')
            .map(|(position, digit)| match digit {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(ParseBitStringError::InvalidDigit { digit, position }),
            })
            .collect::<Result<Vec<bool>, _>>()?;
        if !(1..=usize::from(WORD_BITS)).contains(&digits.len()) {
            return Err(ParseBitStringError::InvalidLength {
                actual_digits: digits.len(),
            });
        }
        let mut res = Self::default();
        res.set_digits(&digits);
        Ok(res)
    }
}

impl Display for BitString {
    /// Writes the digits, the alternate form `{:#}` appends the signed value.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for digit in self.digits() {
            f.write_str(if digit { "1" } else { "0" })?;
        }
        if f.alternate() {
            write!(f, " ({})", self.get_signed())?;
        }
        Ok(())
    }
}

impl Debug for BitString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitString({self:#})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use googletest::prelude::*;

    #[yare::parameterized(
        minus_sixteen = { -16 },
        minus_nine = { -9 },
        minus_one = { -1 },
        zero = { 0 },
        one = { 1 },
        seven = { 7 },
        fifteen = { 15 },
    )]
    fn test_signed_round_trip(value: i16) {
        let mut sut = BitString::default();
        sut.set_signed(value);
        assert_that!(sut.get_signed(), eq(value));
    }

    #[gtest]
    pub fn test_signed_round_trip_small_range() {
        for value in -16..=15 {
            let mut sut = BitString::default();
            sut.set_signed(value);
            expect_that!(sut.get_signed(), eq(value), "for {value}");
        }
    }
    #[gtest]
    pub fn test_signed_and_unsigned_are_same_bits() {
        let mut sut = BitString::default();
        sut.set_signed(-1);
        expect_that!(sut.get_unsigned(), eq(0xFFFF));
        sut.set_signed(i16::MIN);
        expect_that!(sut.get_unsigned(), eq(0x8000));
        sut.set_unsigned(0x7FFF);
        expect_that!(sut.get_signed(), eq(i16::MAX));
        sut.set_unsigned(0b1111_1111_1111_0110);
        expect_that!(sut.get_signed(), eq(-10));
    }
    #[gtest]
    pub fn test_double_inversion_is_identity() {
        for value in (0..=u16::MAX).step_by(7) {
            let mut sut = BitString::from_unsigned(value);
            sut.invert();
            expect_that!(sut.get_unsigned(), eq(!value));
            sut.invert();
            expect_that!(sut, eq(BitString::from_unsigned(value)));
        }
    }
    #[gtest]
    pub fn test_invert_keeps_width() {
        let mut sut: BitString = "010".parse().unwrap();
        sut.invert();
        expect_that!(sut.to_string(), eq("101"));
        expect_that!(sut.get_unsigned(), eq(5));
        expect_that!(sut.get_signed(), eq(-3));
    }
    #[gtest]
    pub fn test_increment_by_one_wraps() {
        let mut sut = BitString::from_unsigned(41);
        sut.increment_by_one();
        expect_that!(sut.get_unsigned(), eq(42));
        let mut sut = BitString::from_signed(-1);
        sut.increment_by_one();
        expect_that!(sut.get_unsigned(), eq(0));
        let mut sut = BitString::from_unsigned(0x7FFF);
        sut.increment_by_one();
        expect_that!(sut.get_signed(), eq(i16::MIN));
        let mut sut: BitString = "111".parse().unwrap();
        sut.increment_by_one();
        expect_that!(sut.to_string(), eq("000"));
    }
    #[gtest]
    pub fn test_slice() {
        let sut: BitString = "0001_001_010_1_00011".parse().unwrap();
        expect_that!(sut.slice(0, 4).get_unsigned(), eq(1));
        expect_that!(sut.slice(4, 3).get_unsigned(), eq(1));
        expect_that!(sut.slice(7, 3).get_unsigned(), eq(2));
        expect_that!(sut.slice(10, 1).get_unsigned(), eq(1));
        expect_that!(sut.slice(11, 5).get_signed(), eq(3));
        expect_that!(sut.slice(11, 5).width(), eq(5));
        expect_that!(sut.slice(0, 16), eq(sut));

        let negative_immediate: BitString = "0001_001_010_1_11110".parse().unwrap();
        expect_that!(negative_immediate.slice(11, 5).get_signed(), eq(-2));
        expect_that!(negative_immediate.slice(11, 5).get_unsigned(), eq(0b11110));
    }
    #[gtest]
    pub fn test_slice_is_independent() {
        let sut = BitString::from_unsigned(0b1010_0000_0000_0000);
        let mut slice = sut.slice(0, 4);
        slice.invert();
        expect_that!(slice.get_unsigned(), eq(0b0101));
        expect_that!(sut.get_unsigned(), eq(0b1010_0000_0000_0000));
    }
    #[gtest]
    #[should_panic(expected = "slice 14..17 is out of range for width 16")]
    pub fn test_slice_out_of_range() {
        let _ = BitString::default().slice(14, 3);
    }
    #[gtest]
    pub fn test_digits() {
        let mut sut = BitString::default();
        sut.set_digits(&[true, false, false]);
        expect_that!(sut.width(), eq(3));
        expect_that!(sut.get_unsigned(), eq(4));
        expect_that!(sut.digits().len(), eq(3));
        expect_that!(sut.to_string(), eq("100"));
        expect_that!(sut.bit(0), eq(true));
        expect_that!(sut.bit(2), eq(false));
    }
    #[gtest]
    pub fn test_parse_errors() {
        expect_that!(
            "0120".parse::<BitString>().unwrap_err(),
            eq(ParseBitStringError::InvalidDigit {
                digit: '2',
                position: 2
            })
        );
        expect_that!(
            "".parse::<BitString>().unwrap_err(),
            eq(ParseBitStringError::InvalidLength { actual_digits: 0 })
        );
        expect_that!(
            "1_0000_0000_0000_0000".parse::<BitString>().unwrap_err().to_string(),
            eq("Bit string must have 1 to 16 digits, got 17")
        );
    }
    #[gtest]
    pub fn test_display() {
        let sut = BitString::from_signed(-2);
        expect_that!(sut.to_string(), eq("1111111111111110"));
        expect_that!(format!("{sut:#}"), eq("1111111111111110 (-2)"));
        expect_that!(format!("{sut:?}"), eq("BitString(1111111111111110 (-2))"));
    }
}
