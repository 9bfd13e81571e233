use crate::common::BitStream;

// Bit stuffing
//------------------------------------------------------------------------------

/// Splits `bits` into words of `ws` bits, inserting a complement bit wherever
/// the first `ws - 1` bits of a word are all equal. Bits past the end read as 1.
pub fn stuff_bits(bits: &BitStream, ws: usize) -> BitStream {
    let n = bits.len();
    let mut out = BitStream::with_capacity(n + n / (ws - 1) + ws);
    let mask = (1u16 << ws) - 2;

    let mut i = 0;
    while i < n {
        let mut word = 0u16;
        for j in 0..ws {
            if bits.get(i + j).unwrap_or(true) {
                word |= 1 << (ws - 1 - j);
            }
        }

        if word & mask == mask {
            out.push_bits(word & mask, ws);
            i += ws - 1;
        } else if word & mask == 0 {
            out.push_bits(word | 1, ws);
            i += ws - 1;
        } else {
            out.push_bits(word, ws);
            i += ws;
        }
    }

    pad_to_word(&mut out, ws);
    out
}

/// Completes a trailing partial word with 1s, ending in a bit that keeps it
/// from being all 1s.
pub fn pad_to_word(bits: &mut BitStream, ws: usize) {
    let len = bits.len();
    let rem = len % ws;
    if rem == 0 {
        return;
    }

    let all_ones = (len - rem..len).all(|i| bits.get(i).unwrap_or(false));
    (rem..ws - 1).for_each(|_| bits.push(true));
    bits.push(!all_ones);
}

#[cfg(test)]
pub(crate) fn from_debug_str(s: &str) -> BitStream {
    let mut bs = BitStream::new();
    s.chars().filter(|c| !c.is_whitespace()).for_each(|c| bs.push(c == 'X'));
    bs
}
