use super::galois::GaloisField;
use crate::common::error::{AztecError, AztecResult};

// Polynomial over a Galois field
//------------------------------------------------------------------------------

/// Coefficients are stored most significant first. The leading coefficient is
/// never zero, except for the zero polynomial itself which is `[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GfPoly {
    coeffs: Vec<u16>,
}

impl GfPoly {
    pub fn new(coeffs: &[u16]) -> Self {
        match coeffs.iter().position(|&c| c != 0) {
            Some(i) => Self { coeffs: coeffs[i..].to_vec() },
            None => Self::zero(),
        }
    }

    pub fn zero() -> Self {
        Self { coeffs: vec![0] }
    }

    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    pub fn coeffs(&self) -> &[u16] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs[0] == 0
    }

    pub fn lead(&self) -> u16 {
        self.coeffs[0]
    }

    pub fn add(&self, other: &GfPoly) -> GfPoly {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        let (larger, smaller) = if self.coeffs.len() >= other.coeffs.len() {
            (&self.coeffs, &other.coeffs)
        } else {
            (&other.coeffs, &self.coeffs)
        };
        let diff = larger.len() - smaller.len();
        let mut sum = larger.clone();
        for (s, &c) in sum[diff..].iter_mut().zip(smaller.iter()) {
            *s ^= c;
        }
        GfPoly::new(&sum)
    }

    pub fn multiply(&self, other: &GfPoly, gf: &GaloisField) -> GfPoly {
        if self.is_zero() || other.is_zero() {
            return GfPoly::zero();
        }

        let mut product = vec![0u16; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                product[i + j] ^= gf.multiply(a, b);
            }
        }
        GfPoly::new(&product)
    }

    /// Multiplies by `coeff * x^degree`
    pub fn multiply_by_monomial(&self, degree: usize, coeff: u16, gf: &GaloisField) -> GfPoly {
        if coeff == 0 {
            return GfPoly::zero();
        }

        let mut product = vec![0u16; self.coeffs.len() + degree];
        for (p, &c) in product.iter_mut().zip(self.coeffs.iter()) {
            *p = gf.multiply(c, coeff);
        }
        GfPoly::new(&product)
    }

    /// Remainder of long division by `divisor`
    pub fn rem(&self, divisor: &GfPoly, gf: &GaloisField) -> AztecResult<GfPoly> {
        if divisor.is_zero() {
            return Err(AztecError::ArithmeticDegenerate);
        }

        let inv_lead = gf.inverse(divisor.lead())?;
        let mut rem = self.clone();
        while rem.degree() >= divisor.degree() && !rem.is_zero() {
            let degree_diff = rem.degree() - divisor.degree();
            let scale = gf.multiply(rem.lead(), inv_lead);
            let term = divisor.multiply_by_monomial(degree_diff, scale, gf);
            rem = rem.add(&term);
        }
        Ok(rem)
    }

    /// Evaluates the polynomial at `x` with Horner's method
    #[cfg(test)]
    pub fn eval(&self, x: u16, gf: &GaloisField) -> u16 {
        self.coeffs.iter().fold(0, |acc, &c| gf.multiply(acc, x) ^ c)
    }
}
