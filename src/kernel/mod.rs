pub mod error;
pub mod outcome;
pub mod saxpy;
pub mod transform;

pub use error::{KernelError, KernelResult, ValidationMismatch};
pub use outcome::Outcome;
pub use saxpy::{initialize, saxpy, validate, validate_against};
pub use transform::{transform_into, try_transform_into, zip_into};
