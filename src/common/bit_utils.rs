use std::{fmt::Display, mem};

use num_traits::PrimInt;

use super::error::{AztecError, AztecResult};

// Bit stream
//------------------------------------------------------------------------------

/// Append-only sequence of bits, written most significant bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    data: Vec<u8>,
    // Bit length
    len: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self { data: Vec::new(), len: 0 }
    }

    pub fn with_capacity(bit_capacity: usize) -> Self {
        Self { data: Vec::with_capacity((bit_capacity + 7) >> 3), len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// Push bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    /// Appends the low `size` bits of `bits`, at most 16 at a time.
    pub fn push_bits<T>(&mut self, bits: T, size: usize)
    where
        T: PrimInt + Display,
    {
        let max_bits = mem::size_of::<T>() * 8;
        debug_assert!(
            size >= max_bits - bits.leading_zeros() as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );

        let Some(bits) = bits.to_u16() else {
            panic!("Bits from only u8 and u16 can be pushed: Bits {bits}");
        };

        match size {
            0 => (),
            1..=8 => self.push_byte_bits(bits as u8, size),
            9..=16 => {
                self.push_byte_bits((bits >> 8) as u8, size - 8);
                self.push_byte_bits((bits & 0xFF) as u8, 8);
            }
            _ => panic!("Cannot push more than 16 bits at once: Size {size}"),
        }
    }

    fn push_byte_bits(&mut self, bits: u8, size: usize) {
        let offset = self.len & 7;
        if offset == 0 {
            self.data.push(0);
        }
        let pos = self.len >> 3;

        if offset + size <= 8 {
            self.data[pos] |= bits << (8 - size - offset);
        } else {
            self.data[pos] |= bits >> (size + offset - 8);
            self.data.push(bits << (16 - size - offset));
        }

        self.len += size;
    }

    pub fn push(&mut self, bit: bool) {
        let offset = self.len & 7;
        if offset == 0 {
            self.data.push(0);
        }
        if bit {
            let pos = self.len >> 3;
            self.data[pos] |= 0b10000000 >> offset;
        }

        self.len += 1;
    }
}


// Read bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    pub fn get(&self, index: usize) -> AztecResult<bool> {
        if index >= self.len {
            return Err(AztecError::OutOfRange);
        }

        let offset = index & 7;
        let pos = index >> 3;
        Ok((self.data[pos] << offset) >> 7 != 0)
    }

    pub fn iter(&self) -> BitIter<'_> {
        BitIter { bs: self, cursor: 0 }
    }
}

pub struct BitIter<'a> {
    bs: &'a BitStream,
    cursor: usize,
}

impl Iterator for BitIter<'_> {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.bs.get(self.cursor).ok()?;
        self.cursor += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.bs.len - self.cursor;
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for BitIter<'_> {}
