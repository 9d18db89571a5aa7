//! Cyclic stepper
//!
//! Holds `(sequence, step, count)` and nothing else:
//! - sequence: shared, immutable, non-empty
//! - step: positive stride fixed at construction
//! - count: call cursor, the only mutable state
//!
//! Every reported value is a pure function of those three, so two steppers
//! built from the same arguments and advanced the same number of times agree.

mod config;
mod tick;

pub use config::{StepperConfig, DEFAULT_STEP};
pub use tick::Tick;

use crate::{Result, StepperError};
use std::iter::FusedIterator;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Unbounded walk over a sequence with a fixed stride
///
/// Not restartable in place: use [`CyclicStepper::restarted`] or build a
/// new one. Calls need `&mut self`, so sharing one instance across threads
/// requires the caller to serialize access (e.g. a `Mutex`).
#[derive(Debug, Clone)]
pub struct CyclicStepper<T> {
    /// Elements being walked (length >= 1)
    sequence: Arc<[T]>,

    /// Positions advanced per call
    step: usize,

    /// Number of completed calls
    count: u64,
}

#[allow(clippy::len_without_is_empty)]
impl<T> CyclicStepper<T> {
    /// Create stepper over `sequence` advancing `step` positions per call
    pub fn new(sequence: impl Into<Arc<[T]>>, step: usize) -> Result<Self> {
        Self::with_config(sequence, StepperConfig::with_step(step))
    }

    /// Create stepper with the default stride of one
    pub fn unit(sequence: impl Into<Arc<[T]>>) -> Result<Self> {
        Self::with_config(sequence, StepperConfig::default())
    }

    /// Create stepper from validated parameters
    pub fn with_config(sequence: impl Into<Arc<[T]>>, config: StepperConfig) -> Result<Self> {
        let sequence = sequence.into();
        if sequence.is_empty() {
            return Err(StepperError::InvalidArgument(
                "sequence must contain at least one element".to_string(),
            ));
        }
        config.validate()?;

        debug!(len = sequence.len(), step = config.step, "created cyclic stepper");

        Ok(Self {
            sequence,
            step: config.step,
            count: 0,
        })
    }

    /// Fresh stepper over the same sequence and stride, cursor at zero
    pub fn restarted(&self) -> Self {
        Self {
            sequence: Arc::clone(&self.sequence),
            step: self.step,
            count: 0,
        }
    }

    /// Number of calls made so far (index of the next tick)
    ///
    /// Not `count`: on an owned stepper that name resolves to the consuming
    /// `Iterator::count`.
    pub fn calls(&self) -> u64 {
        self.count
    }

    /// Stride
    pub fn step(&self) -> usize {
        self.step
    }

    /// Sequence length (never zero)
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Walked elements
    pub fn sequence(&self) -> &[T] {
        &self.sequence
    }

    /// Parameters this stepper was built with
    pub fn config(&self) -> StepperConfig {
        StepperConfig::with_step(self.step)
    }

    /// Logical positions advanced by call `n`
    ///
    /// Widened to `u128`: the product of a `u64` and a `usize` always fits.
    fn offset(&self, n: u64) -> u128 {
        u128::from(n) * self.step as u128
    }

    /// Wrapped position read by call `n`, always in `[0, len)`
    pub fn position_at(&self, n: u64) -> usize {
        // remainder < len <= usize::MAX
        (self.offset(n) % self.sequence.len() as u128) as usize
    }

    /// 1-based traversal number reached by call `n`
    pub fn cycle_at(&self, n: u64) -> u128 {
        self.offset(n) / self.sequence.len() as u128 + 1
    }
}

impl<T: Clone> CyclicStepper<T> {
    /// Tick that call `n` produces, without touching the cursor
    pub fn tick_at(&self, n: u64) -> Tick<T> {
        let position = self.position_at(n);
        Tick::new(n, self.cycle_at(n), self.sequence[position].clone())
    }

    /// Tick the next [`advance`](Self::advance) will return
    pub fn peek(&self) -> Tick<T> {
        self.tick_at(self.count)
    }

    /// Report the current call, then move the cursor forward by one
    ///
    /// The cursor wraps to zero after `u64::MAX` calls.
    pub fn advance(&mut self) -> Tick<T> {
        let tick = self.peek();
        trace!(index = tick.index, cycle = %tick.cycle, "advance");

        self.skip_calls(1);
        tick
    }

    /// Move the cursor forward by `n` calls, wrapping past `u64::MAX`
    fn skip_calls(&mut self, n: u64) {
        let (count, wrapped) = self.count.overflowing_add(n);
        if wrapped {
            warn!("cyclic stepper cursor wrapped around");
        }
        self.count = count;
    }
}

impl<T: Clone> Iterator for CyclicStepper<T> {
    type Item = Tick<T>;

    fn next(&mut self) -> Option<Tick<T>> {
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }

    fn nth(&mut self, n: usize) -> Option<Tick<T>> {
        self.skip_calls(n as u64);
        Some(self.advance())
    }
}

impl<T: Clone> FusedIterator for CyclicStepper<T> {}
