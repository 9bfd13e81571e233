use super::{dynamic::MAX_BINARY_SHIFT, token::BINARY_SHIFT};
use crate::common::BitStream;

// Binary encoder
//------------------------------------------------------------------------------

/// Encodes every byte through binary shift, in runs of at most 2078 bytes.
pub fn encode_binary(data: &[u8]) -> BitStream {
    let mut bs = BitStream::with_capacity(data.len() * 8 + (data.len() / MAX_BINARY_SHIFT + 1) * 21);
    for chunk in data.chunks(MAX_BINARY_SHIFT) {
        bs.push_bits(BINARY_SHIFT, 5);
        if chunk.len() < 32 {
            bs.push_bits(chunk.len() as u8, 5);
        } else {
            bs.push_bits(0u8, 5);
            bs.push_bits((chunk.len() - 31) as u16, 11);
        }
        chunk.iter().for_each(|&b| bs.push_bits(b, 8));
    }
    bs
}

#[cfg(test)]
mod binary_tests {
    use test_case::test_case;

    use super::encode_binary;
    use crate::common::{codec::dynamic::MAX_BINARY_SHIFT, BitStream};

    #[test_case(0, 0)]
    #[test_case(1, 18)]
    #[test_case(31, 10 + 31 * 8)]
    #[test_case(32, 21 + 32 * 8)]
    #[test_case(40, 341)]
    #[test_case(MAX_BINARY_SHIFT, 21 + MAX_BINARY_SHIFT * 8)]
    #[test_case(MAX_BINARY_SHIFT + 1, 21 + 10 + (MAX_BINARY_SHIFT + 1) * 8)]
    #[test_case(MAX_BINARY_SHIFT + 40, 21 + 21 + (MAX_BINARY_SHIFT + 40) * 8)]
    fn test_len(len: usize, bits: usize) {
        assert_eq!(encode_binary(&vec![0x5Au8; len]).len(), bits);
    }

    #[test]
    fn test_short_run() {
        let mut exp = BitStream::new();
        exp.push_bits(31u8, 5);
        exp.push_bits(2u8, 5);
        exp.push_bits(b'h', 8);
        exp.push_bits(b'i', 8);
        assert_eq!(encode_binary(b"hi"), exp);
    }

    #[test]
    fn test_long_run_header() {
        let data = [0xFFu8; 40];
        let bs = encode_binary(&data);
        let header = bs.iter().take(21).map(|b| if b { '1' } else { '0' }).collect::<String>();
        // B/S, 0, then 40 - 31 in 11 bits
        assert_eq!(header, "111110000000000001001");
    }
}
