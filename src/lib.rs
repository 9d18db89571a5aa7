//! # Cyclic stepping over a fixed sequence
//!
//! A stepper walks a non-empty sequence with a fixed stride, wrapping at the
//! end, and reports every call as an `(index, cycle, value)` triple.
//!
//! ## Core Arithmetic
//!
//! For the n-th call (0-based) over a sequence of length `len`:
//!
//! 1. **Position**: `(n * step) mod len`
//! 2. **Cycle**: `(n * step) / len + 1` (1-based traversal number)
//! 3. **Index**: `n`
//!
//! The product `n * step` is evaluated in `u128`, so it never overflows.
//!
//! ## Usage Example
//!
//! ```
//! use skipcycle::{CyclicStepper, Tick};
//!
//! let mut stepper = CyclicStepper::new(vec![1, 2, 3], 2)?;
//! assert_eq!(stepper.advance().into_tuple(), (0, 1, 1));
//! assert_eq!(stepper.advance().into_tuple(), (1, 1, 3));
//! assert_eq!(stepper.advance().into_tuple(), (2, 2, 2));
//! assert_eq!(stepper.advance(), Tick::new(3, 3, 1));
//! # Ok::<(), skipcycle::StepperError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod encodings; // Generator and closure forms
pub mod stepper; // Cyclic stepper, ticks and configuration

// Re-exports for convenience
pub use encodings::{skip_cycle, skip_cycle_fn};
pub use stepper::{CyclicStepper, StepperConfig, Tick};

use thiserror::Error;

/// Errors raised while building a stepper
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepperError {
    /// Empty sequence or non-positive step
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for stepper construction
pub type Result<T> = std::result::Result<T, StepperError>;
