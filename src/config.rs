use crate::{
    error::{Error, Result},
    leak::{LeakObserver, LogLeaks},
    stack::LeakyStack,
};

pub const DEFAULT_CAPACITY: usize = 128;

/// Construction parameters for a [`LeakyStack`].
///
/// A `buffer_size` below `capacity` (including the default of zero) is
/// raised to `capacity` when the stack is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackConfig {
    pub capacity: usize,
    pub buffer_size: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        StackConfig {
            capacity: DEFAULT_CAPACITY,
            buffer_size: 0,
        }
    }
}

impl StackConfig {
    pub fn new(capacity: usize) -> StackConfig {
        StackConfig {
            capacity,
            ..Default::default()
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> StackConfig {
        self.capacity = capacity;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> StackConfig {
        self.buffer_size = buffer_size;
        self
    }

    pub fn effective_buffer_size(&self) -> usize {
        self.capacity.max(self.buffer_size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(())
    }

    pub fn build<T: std::fmt::Debug>(&self) -> Result<LeakyStack<T, LogLeaks>> {
        self.build_with(LogLeaks)
    }

    pub fn build_with<T, O: LeakObserver<T>>(&self, observer: O) -> Result<LeakyStack<T, O>> {
        LeakyStack::with_observer(self.capacity, self.buffer_size, observer)
    }
}
