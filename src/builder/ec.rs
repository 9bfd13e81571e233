use crate::common::{
    error::{AztecError, AztecResult},
    metadata::Symbol,
    BitStream, GaloisField, ReedSolomonEncoder,
};

// Check words
//------------------------------------------------------------------------------

/// Packs `bits` into words of `ws` bits, padding the last word with 1s, into
/// a buffer of `total_words`.
pub fn bits_to_words(bits: &BitStream, ws: usize, total_words: usize) -> Vec<u16> {
    let mut words = vec![0u16; total_words];
    for (i, w) in words.iter_mut().enumerate().take(bits.len().div_ceil(ws)) {
        *w = (0..ws).fold(0, |acc, j| (acc << 1) | bits.get(i * ws + j).unwrap_or(true) as u16);
    }
    words
}

/// Appends Reed-Solomon check words to `bits` so they fill `total_bits`. The
/// leftover `total_bits % ws` bits go up front as zeros.
pub fn generate_check_words(
    bits: &BitStream,
    total_bits: usize,
    ws: usize,
) -> AztecResult<BitStream> {
    let message_words = bits.len().div_ceil(ws);
    let total_words = total_bits / ws;
    let ec_words = total_words.checked_sub(message_words).ok_or(AztecError::CapacityExceeded)?;

    let gf = GaloisField::for_word_size(ws)?;
    debug_assert!(gf.word_size() == ws, "Field mismatch: Word size {ws}");
    let mut rs = ReedSolomonEncoder::new(gf);
    let words = bits_to_words(bits, ws, total_words);
    let words = rs.encode_padded(&words, ec_words)?;

    let mut res = BitStream::with_capacity(total_bits);
    res.push_bits(0u16, total_bits % ws);
    words.into_iter().for_each(|w| res.push_bits(w, ws));
    Ok(res)
}

// Mode message
//------------------------------------------------------------------------------

/// Layer count and message word count, protected by GF(16) check words
pub fn generate_mode_message(symbol: Symbol, message_words: usize) -> AztecResult<BitStream> {
    if message_words == 0 || message_words > symbol.max_message_words() {
        return Err(AztecError::CapacityExceeded);
    }

    let mut mm = BitStream::with_capacity(symbol.mode_message_bits());
    let layers = symbol.layers() - 1;
    let words = message_words - 1;
    if symbol.is_compact() {
        mm.push_bits(layers as u8, 2);
        mm.push_bits(words as u8, 6);
    } else {
        mm.push_bits(layers as u8, 5);
        mm.push_bits(words as u16, 11);
    }
    generate_check_words(&mm, symbol.mode_message_bits(), 4)
}
