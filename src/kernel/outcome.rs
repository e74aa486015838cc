use serde::Serialize;
use std::fmt;

/// Result of validating an output buffer, printed verbatim by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Success,
    Fail,
}

impl Outcome {
    pub fn from_valid(valid: bool) -> Outcome {
        if valid { Outcome::Success } else { Outcome::Fail }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => f.write_str("Success"),
            Outcome::Fail => f.write_str("Fail"),
        }
    }
}
