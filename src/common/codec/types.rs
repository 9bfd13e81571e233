use std::str::FromStr;

use crate::common::error::AztecError;

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mode {
    Upper = 0,
    Lower = 1,
    Digit = 2,
    Mixed = 3,
    Punct = 4,
}

pub const MODES: [Mode; 5] = [Mode::Upper, Mode::Lower, Mode::Digit, Mode::Mixed, Mode::Punct];

impl Mode {
    /// Width of one code in this mode
    #[inline]
    pub const fn bits(&self) -> usize {
        match self {
            Self::Digit => 4,
            _ => 5,
        }
    }

    /// Code of `byte` in this mode, or `None` if the mode can't represent it
    #[inline]
    pub fn code(&self, byte: u8) -> Option<u8> {
        match CHAR_MAP[*self as usize][byte as usize] {
            0 => None,
            c => Some(c),
        }
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        CHAR_MAP[*self as usize][byte as usize] > 0
    }

    /// Code pattern and width to permanently switch from `self` to `to`
    #[inline]
    pub fn latch(&self, to: Mode) -> (u16, usize) {
        let latch = LATCH_TABLE[*self as usize][to as usize];
        ((latch & 0xFFFF) as u16, (latch >> 16) as usize)
    }

    #[inline]
    pub fn latch_bits(&self, to: Mode) -> usize {
        (LATCH_TABLE[*self as usize][to as usize] >> 16) as usize
    }

    /// Code to switch from `self` to `to` for the next symbol only
    #[inline]
    pub fn shift(&self, to: Mode) -> Option<u8> {
        SHIFT_TABLE[*self as usize][to as usize]
    }
}

#[cfg(test)]
mod mode_tests {
    use test_case::test_case;

    use super::Mode;

    #[test_case(Mode::Upper, b'A', Some(2))]
    #[test_case(Mode::Upper, b'Z', Some(27))]
    #[test_case(Mode::Upper, b' ', Some(1))]
    #[test_case(Mode::Upper, b'a', None)]
    #[test_case(Mode::Lower, b'a', Some(2))]
    #[test_case(Mode::Lower, b'z', Some(27))]
    #[test_case(Mode::Digit, b'0', Some(2))]
    #[test_case(Mode::Digit, b'9', Some(11))]
    #[test_case(Mode::Digit, b',', Some(12))]
    #[test_case(Mode::Digit, b'.', Some(13))]
    #[test_case(Mode::Digit, b'A', None)]
    #[test_case(Mode::Mixed, b'\x01', Some(2))]
    #[test_case(Mode::Mixed, b'\r', Some(14))]
    #[test_case(Mode::Mixed, b'\x1b', Some(15))]
    #[test_case(Mode::Mixed, b'@', Some(20))]
    #[test_case(Mode::Mixed, b'\\', Some(21))]
    #[test_case(Mode::Mixed, b'\x7f', Some(27))]
    #[test_case(Mode::Mixed, b'\0', None)]
    #[test_case(Mode::Punct, b'\r', Some(1))]
    #[test_case(Mode::Punct, b'!', Some(6))]
    #[test_case(Mode::Punct, b'"', Some(7))]
    #[test_case(Mode::Punct, b'\'', Some(12))]
    #[test_case(Mode::Punct, b'.', Some(19))]
    #[test_case(Mode::Punct, b'}', Some(30))]
    #[test_case(Mode::Punct, b'\\', None)]
    fn test_code(mode: Mode, byte: u8, code: Option<u8>) {
        assert_eq!(mode.code(byte), code);
        assert_eq!(mode.contains(byte), code.is_some());
    }

    #[test]
    fn test_unmappable_bytes() {
        for b in [0u8, 0x80, 0xC3, 0xFF] {
            assert!(super::MODES.iter().all(|m| !m.contains(b)), "Byte {b} is mappable");
        }
    }

    #[test_case(Mode::Upper, Mode::Lower, (28, 5))]
    #[test_case(Mode::Upper, Mode::Punct, ((29 << 5) + 30, 10))]
    #[test_case(Mode::Lower, Mode::Upper, ((30 << 4) + 14, 9))]
    #[test_case(Mode::Digit, Mode::Upper, (14, 4))]
    #[test_case(Mode::Digit, Mode::Punct, ((14 << 10) + (29 << 5) + 30, 14))]
    #[test_case(Mode::Punct, Mode::Upper, (31, 5))]
    #[test_case(Mode::Mixed, Mode::Mixed, (0, 0))]
    fn test_latch(from: Mode, to: Mode, latch: (u16, usize)) {
        assert_eq!(from.latch(to), latch);
        assert_eq!(from.latch_bits(to), latch.1);
    }

    #[test]
    fn test_shift() {
        assert_eq!(Mode::Upper.shift(Mode::Punct), Some(0));
        assert_eq!(Mode::Lower.shift(Mode::Upper), Some(28));
        assert_eq!(Mode::Digit.shift(Mode::Upper), Some(15));
        assert_eq!(Mode::Upper.shift(Mode::Lower), None);
        assert_eq!(Mode::Punct.shift(Mode::Upper), None);
    }
}

// Hint
//------------------------------------------------------------------------------

/// Selects the data encoder
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum Hint {
    /// Optimal mix of text modes and binary shifts
    #[default]
    Dynamic,
    /// Every byte through binary shift
    Binary,
}

impl FromStr for Hint {
    type Err = AztecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dynamic" | "text" => Ok(Self::Dynamic),
            "binary" => Ok(Self::Binary),
            _ => Err(AztecError::InvalidHint),
        }
    }
}

// Tables
//------------------------------------------------------------------------------

// Bit width in the upper half, code pattern in the lower half
const LATCH_TABLE: [[u32; 5]; 5] = [
    // Upper
    [0, (5 << 16) + 28, (5 << 16) + 30, (5 << 16) + 29, (10 << 16) + (29 << 5) + 30],
    // Lower
    [(9 << 16) + (30 << 4) + 14, 0, (5 << 16) + 30, (5 << 16) + 29, (10 << 16) + (29 << 5) + 30],
    // Digit
    [
        (4 << 16) + 14,
        (9 << 16) + (14 << 5) + 28,
        0,
        (9 << 16) + (14 << 5) + 29,
        (14 << 16) + (14 << 10) + (29 << 5) + 30,
    ],
    // Mixed
    [(5 << 16) + 29, (5 << 16) + 28, (10 << 16) + (29 << 5) + 30, 0, (5 << 16) + 30],
    // Punct
    [
        (5 << 16) + 31,
        (10 << 16) + (31 << 5) + 28,
        (10 << 16) + (31 << 5) + 30,
        (10 << 16) + (31 << 5) + 29,
        0,
    ],
];

const SHIFT_TABLE: [[Option<u8>; 5]; 5] = [
    // Upper
    [None, None, None, None, Some(0)],
    // Lower
    [Some(28), None, None, None, Some(0)],
    // Digit
    [Some(15), None, None, None, Some(0)],
    // Mixed
    [None, None, None, None, Some(0)],
    // Punct
    [None; 5],
];

const MIXED_TABLE: [u8; 28] = [
    b'\0', b' ', 1, 2, 3, 4, 5, 6, 7, 8, b'\t', b'\n', 11, 12, b'\r', 27, 28, 29, 30, 31, b'@',
    b'\\', b'^', b'_', b'`', b'|', b'~', 127,
];

const PUNCT_TABLE: [u8; 31] = [
    b'\0', b'\r', b'\0', b'\0', b'\0', b'\0', b'!', b'"', b'#', b'$', b'%', b'&', b'\'', b'(',
    b')', b'*', b'+', b',', b'-', b'.', b'/', b':', b';', b'<', b'=', b'>', b'?', b'[', b']',
    b'{', b'}',
];

const CHAR_MAP: [[u8; 256]; 5] = build_char_map();

const fn build_char_map() -> [[u8; 256]; 5] {
    let mut map = [[0u8; 256]; 5];

    map[Mode::Upper as usize][b' ' as usize] = 1;
    map[Mode::Lower as usize][b' ' as usize] = 1;
    map[Mode::Digit as usize][b' ' as usize] = 1;
    let mut c = 0u8;
    while c < 26 {
        map[Mode::Upper as usize][(b'A' + c) as usize] = c + 2;
        map[Mode::Lower as usize][(b'a' + c) as usize] = c + 2;
        c += 1;
    }
    c = 0;
    while c < 10 {
        map[Mode::Digit as usize][(b'0' + c) as usize] = c + 2;
        c += 1;
    }
    map[Mode::Digit as usize][b',' as usize] = 12;
    map[Mode::Digit as usize][b'.' as usize] = 13;

    let mut i = 1;
    while i < MIXED_TABLE.len() {
        map[Mode::Mixed as usize][MIXED_TABLE[i] as usize] = i as u8;
        i += 1;
    }
    i = 0;
    while i < PUNCT_TABLE.len() {
        if PUNCT_TABLE[i] > 0 {
            map[Mode::Punct as usize][PUNCT_TABLE[i] as usize] = i as u8;
        }
        i += 1;
    }

    map
}
