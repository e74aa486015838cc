pub mod buffer;
pub mod scalar;

pub use buffer::Buffer;
pub use scalar::Scalar;
