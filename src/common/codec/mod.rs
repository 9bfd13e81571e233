pub mod binary;
pub mod dynamic;
pub mod token;
pub mod types;

pub use binary::encode_binary;
pub use dynamic::DynamicEncoder;
pub use types::{Hint, Mode};

use log::debug;

use super::BitStream;

/// Encodes `data` into the Aztec high level bit sequence selected by `hint`
pub fn encode_data(data: &[u8], hint: Hint) -> BitStream {
    let bs = match hint {
        Hint::Dynamic => DynamicEncoder::new(data).encode(),
        Hint::Binary => encode_binary(data),
    };
    debug!("Encoded {} bytes into {} bits with {hint:?} encoder", data.len(), bs.len());
    bs
}

#[cfg(test)]
mod codec_tests {
    use test_case::test_case;

    use super::{encode_data, Hint};

    #[test_case(b"Hello World!", Hint::Dynamic, 75)]
    #[test_case(b"Hello World!", Hint::Binary, 106)]
    #[test_case(&[0u8; 40], Hint::Dynamic, 340)]
    #[test_case(&[0u8; 40], Hint::Binary, 341)]
    fn test_encode_data(data: &[u8], hint: Hint, bits: usize) {
        assert_eq!(encode_data(data, hint).len(), bits);
    }
}
