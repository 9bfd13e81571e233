use super::{galois::GaloisField, poly::GfPoly};
use crate::common::error::{AztecError, AztecResult};

// Reed-Solomon encoder
//------------------------------------------------------------------------------

pub struct ReedSolomonEncoder<'a> {
    gf: &'a GaloisField,
    // Generator polynomials indexed by degree
    generators: Vec<GfPoly>,
}

impl<'a> ReedSolomonEncoder<'a> {
    pub fn new(gf: &'a GaloisField) -> Self {
        Self { gf, generators: vec![GfPoly::one()] }
    }

    /// Generator with roots a^1..=a^degree. Lower degrees already built are reused.
    pub fn build_generator(&mut self, degree: usize) -> &GfPoly {
        for d in self.generators.len()..=degree {
            let factor = GfPoly::new(&[1, self.gf.exp(d)]);
            let next = self.generators[d - 1].multiply(&factor, self.gf);
            self.generators.push(next);
        }
        &self.generators[degree]
    }

    /// Returns `data` followed by `ec_words` check words.
    pub fn encode(&mut self, data: &[u16], ec_words: usize) -> AztecResult<Vec<u16>> {
        if ec_words == 0 {
            return Err(AztecError::NoEcWords);
        }
        if data.is_empty() {
            return Err(AztecError::NoDataWords);
        }
        debug_assert!(
            data.iter().all(|&w| (w as usize) < self.gf.size()),
            "Data word exceeds the field size {}",
            self.gf.size()
        );

        let gf = self.gf;
        let generator = self.build_generator(ec_words).clone();
        let info = GfPoly::new(data).multiply_by_monomial(ec_words, 1, gf);
        let rem = info.rem(&generator, gf)?;

        let mut res = Vec::with_capacity(data.len() + ec_words);
        res.extend_from_slice(data);
        if rem.is_zero() {
            res.resize(data.len() + ec_words, 0);
        } else {
            res.resize(data.len() + ec_words - rem.coeffs().len(), 0);
            res.extend_from_slice(rem.coeffs());
        }
        Ok(res)
    }

    /// Same as [`encode`](Self::encode) for a buffer whose last `ec_words` slots are reserved.
    pub fn encode_padded(&mut self, padded: &[u16], ec_words: usize) -> AztecResult<Vec<u16>> {
        let data_len = padded.len().checked_sub(ec_words).ok_or(AztecError::NoDataWords)?;
        self.encode(&padded[..data_len], ec_words)
    }
}
