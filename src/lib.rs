pub mod math;
pub mod kernel;
pub mod run;

// Convenience re-exports
pub use math::buffer::Buffer;
pub use math::scalar::Scalar;
pub use kernel::error::{KernelError, KernelResult, ValidationMismatch};
pub use kernel::outcome::Outcome;
pub use kernel::saxpy::{initialize, saxpy, validate, validate_against};
pub use kernel::transform::{transform_into, try_transform_into, zip_into};
pub use run::config::KernelConfig;
pub use run::driver::run;
pub use run::report::RunReport;
pub use run::workspace::{Initialized, Transformed, Validation};
