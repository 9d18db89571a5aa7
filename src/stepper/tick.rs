//! One `(index, cycle, value)` triple
//!
//! The cycle is `u128`: with a large stride it outgrows the call index.

use std::fmt;

/// Result of a single stepper call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick<T> {
    /// Call number, starting at 0
    pub index: u64,
    /// 1-based traversal the call falls in
    pub cycle: u128,
    /// Element at the wrapped position
    pub value: T,
}

impl<T> Tick<T> {
    /// Construct a tick
    pub fn new(index: u64, cycle: u128, value: T) -> Self {
        Self {
            index,
            cycle,
            value,
        }
    }

    /// Split into a plain tuple
    pub fn into_tuple(self) -> (u64, u128, T) {
        (self.index, self.cycle, self.value)
    }

    /// Map the carried value, keeping index and cycle
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Tick<U> {
        Tick {
            index: self.index,
            cycle: self.cycle,
            value: f(self.value),
        }
    }
}

impl<T> From<Tick<T>> for (u64, u128, T) {
    fn from(tick: Tick<T>) -> Self {
        tick.into_tuple()
    }
}

impl<T: fmt::Display> fmt::Display for Tick<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.index, self.cycle, self.value)
    }
}
