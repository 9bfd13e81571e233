//! Galois fields GF(2^w) for the word sizes used by Aztec symbols.

use std::sync::OnceLock;

use crate::common::error::{AztecError, AztecResult};

// Galois field
//------------------------------------------------------------------------------

/// Precomputed exponent and logarithm tables for GF(2^w)
#[derive(Debug, PartialEq, Eq)]
pub struct GaloisField {
    word_size: usize,
    size: usize,
    exp: Vec<u16>,
    log: Vec<u16>,
}

impl GaloisField {
    pub fn new(word_size: usize) -> AztecResult<Self> {
        let primitive = Self::primitive(word_size)?;
        let size = 1usize << word_size;

        let mut exp = vec![0u16; size];
        let mut log = vec![0u16; size];
        let mut x = 1usize;
        for e in exp.iter_mut() {
            *e = x as u16;
            x <<= 1;
            if x >= size {
                x ^= primitive as usize;
                x &= size - 1;
            }
        }
        // exp[size - 1] wraps back to 1, so it's left out of the inverse
        for (i, &e) in exp.iter().take(size - 1).enumerate() {
            log[e as usize] = i as u16;
        }

        Ok(Self { word_size, size, exp, log })
    }

    fn primitive(word_size: usize) -> AztecResult<u16> {
        match word_size {
            4 => Ok(0x13),
            6 => Ok(0x43),
            8 => Ok(0x12D),
            10 => Ok(0x409),
            12 => Ok(0x1069),
            _ => Err(AztecError::InvalidWordSize),
        }
    }

    /// Shared field for `word_size`, built on first use.
    pub fn for_word_size(word_size: usize) -> AztecResult<&'static GaloisField> {
        static GF16: OnceLock<GaloisField> = OnceLock::new();
        static GF64: OnceLock<GaloisField> = OnceLock::new();
        static GF256: OnceLock<GaloisField> = OnceLock::new();
        static GF1024: OnceLock<GaloisField> = OnceLock::new();
        static GF4096: OnceLock<GaloisField> = OnceLock::new();

        let cell = match word_size {
            4 => &GF16,
            6 => &GF64,
            8 => &GF256,
            10 => &GF1024,
            12 => &GF4096,
            _ => return Err(AztecError::InvalidWordSize),
        };
        if let Some(gf) = cell.get() {
            return Ok(gf);
        }
        let gf = Self::new(word_size)?;
        Ok(cell.get_or_init(|| gf))
    }

    pub fn word_size(&self) -> usize {
        self.word_size
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn exp(&self, i: usize) -> u16 {
        self.exp[i % (self.size - 1)]
    }

    pub fn log(&self, a: u16) -> u16 {
        debug_assert!(a != 0, "Log of zero is undefined");
        self.log[a as usize]
    }

    #[inline]
    pub fn multiply(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_sum = self.log(a) as usize + self.log(b) as usize;
        self.exp[log_sum % (self.size - 1)]
    }

    pub fn inverse(&self, a: u16) -> AztecResult<u16> {
        if a == 0 {
            return Err(AztecError::ArithmeticDegenerate);
        }
        Ok(self.exp[self.size - 1 - self.log(a) as usize])
    }
}
