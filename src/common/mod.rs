pub mod bit_utils;
pub mod codec;
pub mod ec;
pub mod error;
pub mod matrix;
pub mod metadata;

pub use bit_utils::*;
pub use ec::*;
