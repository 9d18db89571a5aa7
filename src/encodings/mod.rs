//! Generator and closure forms of the stepper
//!
//! Both wrap a [`CyclicStepper`] and yield exactly the ticks it would:
//! - [`skip_cycle`]: lazy, infinite iterator
//! - [`skip_cycle_fn`]: callable returning one tick per invocation
//!
//! Arguments are validated up front, before anything is yielded.

use crate::{CyclicStepper, Result, Tick};
use std::sync::Arc;

/// Infinite iterator of ticks over `sequence` with stride `step`
pub fn skip_cycle<T: Clone>(
    sequence: impl Into<Arc<[T]>>,
    step: usize,
) -> Result<impl Iterator<Item = Tick<T>>> {
    let mut stepper = CyclicStepper::new(sequence, step)?;
    Ok(std::iter::repeat_with(move || stepper.advance()))
}

/// Closure returning the next tick on each call
pub fn skip_cycle_fn<T: Clone>(
    sequence: impl Into<Arc<[T]>>,
    step: usize,
) -> Result<impl FnMut() -> Tick<T>> {
    let mut stepper = CyclicStepper::new(sequence, step)?;
    Ok(move || stepper.advance())
}
