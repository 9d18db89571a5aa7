//! Construction parameters for a stepper
//!
//! The only tunable is the stride. Validation lives here so every
//! constructor rejects a zero step the same way.

use crate::{Result, StepperError};

/// Stride used when none is given
pub const DEFAULT_STEP: usize = 1;

/// Validated stepper parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepperConfig {
    /// Positions advanced per call (must be positive)
    pub step: usize,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self { step: DEFAULT_STEP }
    }
}

impl StepperConfig {
    /// Configuration with an explicit stride
    pub fn with_step(step: usize) -> Self {
        Self { step }
    }

    /// Reject a zero stride
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(StepperError::InvalidArgument(
                "step must be a positive integer, got 0".to_string(),
            ));
        }
        Ok(())
    }
}
