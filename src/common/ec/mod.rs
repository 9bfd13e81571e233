mod encoder;
mod galois;
mod poly;

pub use encoder::ReedSolomonEncoder;
pub use galois::GaloisField;
pub use poly::GfPoly;
