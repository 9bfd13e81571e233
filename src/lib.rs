//! # aztecism
//!
//! A Rust library for generating Aztec 2D barcodes with optimal mode encoding and
//! Reed-Solomon error correction.
//!
//! ## Features
//!
//! - **Optimal Text Encoding**: Searches every mix of the five Aztec text modes, shifts and
//!   binary runs for the shortest bit sequence
//! - **Binary Encoding**: Encodes arbitrary bytes through binary shift runs
//! - **Automatic Sizing**: Picks the smallest compact (1-4 layers) or full range (1-32 layers)
//!   symbol that holds the data with the requested error correction
//! - **Reed-Solomon Error Correction**: Check words over GF(16) to GF(4096) depending on
//!   the symbol size
//!
//! ## Quick Start
//!
//! ### Simple Aztec Code Generation
//!
//! ```rust
//! use aztecism::AztecBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Provide only data, error correction defaults to 33% and the encoder to dynamic
//! let code = AztecBuilder::new(b"Hello World!").build()?;
//!
//! assert_eq!(code.width(), 19);
//! println!("{}", code.metadata());
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use aztecism::{AztecBuilder, Hint};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let code = AztecBuilder::new(b"\x00\x01\x02\x03")
//!     .ecc_percent(50)     // Check bits as a share of data bits, 1 to 200
//!     .hint(Hint::Binary)  // Skip the text mode search, every byte goes through binary shift
//!     .build()?;
//!
//! // Render the matrix, one character per module
//! let m = code.matrix();
//! for y in 0..m.width() {
//!     let row = (0..m.width()).map(|x| if m.get(x, y) { '#' } else { ' ' }).collect::<String>();
//!     println!("{row}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Core Entry Point
//!
//! ```rust
//! use aztecism::{encode, Hint};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (matrix, width) = encode(b"AZTEC", 33, "text".parse::<Hint>()?)?;
//! assert_eq!(width, 15);
//! assert_eq!(matrix.width(), width);
//! # Ok(())
//! # }
//! ```
//!
//! ## Aztec Code Components
//!
//! ### Symbols
//! - **Compact**: 1-4 layers, 15x15 to 27x27 modules, 5 ring bullseye
//! - **Full Range**: 1-32 layers, 19x19 to 151x151 modules, 7 ring bullseye and reference grid
//!
//! ### Error Correction
//! The ecc percent is the share of the data bits added as Reed-Solomon check bits, on top of
//! a fixed 11 bits. Whatever capacity the chosen symbol has left over is also filled with
//! check words.

pub mod builder;
pub(crate) mod common;

pub use builder::{encode, AztecBuilder, AztecCode};
pub use common::codec::{Hint, Mode};
pub use common::error::{AztecError, AztecResult, ErrorKind};
pub use common::matrix::BitMatrix;
pub use common::metadata::Symbol;
