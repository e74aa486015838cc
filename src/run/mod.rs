pub mod config;
pub mod driver;
pub mod report;
pub mod workspace;

pub use config::KernelConfig;
pub use driver::run;
pub use report::RunReport;
pub use workspace::{Initialized, Transformed, Validation};
