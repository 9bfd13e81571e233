use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum AztecError {
    // Aztec builder
    EmptyData,
    InvalidEccPercent,
    InvalidHint,
    CapacityExceeded,

    // Reed-Solomon
    InvalidWordSize,
    NoEcWords,
    NoDataWords,
    ArithmeticDegenerate,

    // Bit stream
    OutOfRange,
}

/// Broad category of an [`AztecError`]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ErrorKind {
    InvalidInput,
    CapacityExceeded,
    ArithmeticDegenerate,
}

impl AztecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CapacityExceeded => ErrorKind::CapacityExceeded,
            Self::ArithmeticDegenerate => ErrorKind::ArithmeticDegenerate,
            _ => ErrorKind::InvalidInput,
        }
    }
}

impl Display for AztecError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            // Aztec builder
            Self::EmptyData => "Empty data",
            Self::InvalidEccPercent => "Invalid error correction percent, expected 1 to 200",
            Self::InvalidHint => "Invalid hint, expected \"dynamic\", \"text\" or \"binary\"",
            Self::CapacityExceeded => "Data too large",

            // Reed-Solomon
            Self::InvalidWordSize => "Invalid word size",
            Self::NoEcWords => "No error correction words",
            Self::NoDataWords => "No data words provided",
            Self::ArithmeticDegenerate => "Divide by zero polynomial",

            // Bit stream
            Self::OutOfRange => "Bit index out of range",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for AztecError {}

pub type AztecResult<T> = Result<T, AztecError>;
