mod aztec;
mod ec;
mod stuff;

pub use aztec::AztecCode;

use log::{debug, trace};

use crate::common::{
    codec::{encode_data, Hint},
    error::{AztecError, AztecResult},
    matrix::BitMatrix,
    metadata::Symbol,
    BitStream,
};
use ec::{generate_check_words, generate_mode_message};
use stuff::stuff_bits;

pub struct AztecBuilder<'a> {
    data: &'a [u8],
    ecc_percent: u16,
    hint: Hint,
}

impl<'a> AztecBuilder<'a> {
    pub const DEFAULT_ECC_PERCENT: u16 = 33;

    pub fn new(data: &'a [u8]) -> Self {
        Self { data, ecc_percent: Self::DEFAULT_ECC_PERCENT, hint: Hint::Dynamic }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    /// Share of the data bits, in percent, added on top as check bits. Valid from 1 to 200.
    pub fn ecc_percent(&mut self, ecc_percent: u16) -> &mut Self {
        self.ecc_percent = ecc_percent;
        self
    }

    pub fn hint(&mut self, hint: Hint) -> &mut Self {
        self.hint = hint;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Data: {} bytes, Ecc percent: {}, Hint: {:?} }}",
            self.data.len(),
            self.ecc_percent,
            self.hint
        )
    }
}

#[cfg(test)]
mod aztec_builder_util_tests {
    use super::AztecBuilder;
    use crate::common::codec::Hint;

    #[test]
    fn test_metadata() {
        let mut builder = AztecBuilder::new(b"Hello, world!");
        assert_eq!(builder.metadata(), "{ Data: 13 bytes, Ecc percent: 33, Hint: Dynamic }");
        builder.ecc_percent(50).hint(Hint::Binary).data(b"Hi");
        assert_eq!(builder.metadata(), "{ Data: 2 bytes, Ecc percent: 50, Hint: Binary }");
    }
}

impl AztecBuilder<'_> {
    pub fn build(&self) -> AztecResult<AztecCode> {
        debug!("Generating Aztec code {}...", self.metadata());

        if self.data.is_empty() {
            return Err(AztecError::EmptyData);
        }
        if !(1..=200).contains(&self.ecc_percent) {
            return Err(AztecError::InvalidEccPercent);
        }

        let code = build_symbol(self.data, self.ecc_percent, self.hint)?;

        let total_modules = code.width() * code.width();
        let dark_modules = code.matrix().count_dark();
        debug!("Aztec code generated: {}", code.metadata());
        debug!(
            "Dark modules: {}, Light modules: {}, Balance: {}%",
            dark_modules,
            total_modules - dark_modules,
            dark_modules * 100 / total_modules
        );

        Ok(code)
    }
}

/// Encodes `content` into an Aztec matrix and returns it with its width.
///
/// `ecc_percent` is not range checked here, [`AztecBuilder`] validates it.
pub fn encode(content: &[u8], ecc_percent: u16, hint: Hint) -> AztecResult<(BitMatrix, usize)> {
    let code = build_symbol(content, ecc_percent, hint)?;
    let width = code.width();
    Ok((code.into_matrix(), width))
}

fn build_symbol(data: &[u8], ecc_percent: u16, hint: Hint) -> AztecResult<AztecCode> {
    if data.is_empty() {
        return Err(AztecError::EmptyData);
    }

    debug!("Encoding data...");
    let bits = encode_data(data, hint);

    debug!("Finding smallest symbol...");
    let (symbol, stuffed) = find_symbol(&bits, ecc_percent)?;
    let ws = symbol.word_size();
    let message_words = stuffed.len() / ws;

    debug!("Generating check words...");
    let payload = generate_check_words(&stuffed, symbol.total_bits(), ws)?;
    let mode_message = generate_mode_message(symbol, message_words)?;

    debug!("Drawing {symbol:?}...");
    let mut code = AztecCode::new(symbol, message_words);
    code.draw_data(&payload);
    code.draw_mode_message(&mode_message);
    code.draw_bullseye();
    code.draw_reference_grid();

    Ok(code)
}

/// Smallest symbol holding `bits` with the requested check bits, and the
/// bits stuffed for its word size.
fn find_symbol(bits: &BitStream, ecc_percent: u16) -> AztecResult<(Symbol, BitStream)> {
    let ecc_bits = bits.len() * ecc_percent as usize / 100 + 11;
    let total_bits = bits.len() + ecc_bits;

    let mut ws = 0;
    let mut stuffed = BitStream::new();
    for symbol in Symbol::candidates() {
        let capacity = symbol.total_bits();
        if total_bits > capacity {
            continue;
        }

        if ws != symbol.word_size() {
            ws = symbol.word_size();
            stuffed = stuff_bits(bits, ws);
        }
        trace!(
            "Trying {symbol:?}: Stuffed {}, Ecc {ecc_bits}, Capacity {capacity}",
            stuffed.len()
        );

        if stuffed.len() / ws > symbol.max_message_words() {
            continue;
        }
        if stuffed.len() + ecc_bits <= capacity {
            return Ok((symbol, stuffed));
        }
    }

    Err(AztecError::CapacityExceeded)
}
