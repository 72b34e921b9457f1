use std::fmt::Debug;

use crate::{
    config::StackConfig,
    cursor,
    error::{Error, Result},
    leak::{LeakObserver, LogLeaks},
};


/// A bounded LIFO stack that leaks its oldest value instead of refusing a push.
///
/// Values live in a fixed ring of `buffer_size` slots between the `start`
/// cursor (oldest) and the `end` cursor (one past newest). Once `capacity`
/// values are held, each further push hands the value at `start` to the
/// observer and moves `start` forward.
///
/// `pop` takes the newest value but `top` looks at the oldest one, i.e. the
/// value that would be leaked next.
pub struct LeakyStack<T, O = LogLeaks> {
    slots: Box<[Option<T>]>,
    capacity: usize,
    start: usize,
    end: usize,
    // start == end for both an empty ring and a full one when capacity == buffer_size
    len: usize,
    observer: O,
}

impl<T: Debug> LeakyStack<T> {
    pub fn new(capacity: usize) -> Result<LeakyStack<T>> {
        Self::with_observer(capacity, 0, LogLeaks)
    }

    pub fn with_buffer_size(capacity: usize, buffer_size: usize) -> Result<LeakyStack<T>> {
        Self::with_observer(capacity, buffer_size, LogLeaks)
    }

    pub fn from_config(config: &StackConfig) -> Result<LeakyStack<T>> {
        config.build()
    }
}

impl<T, O: LeakObserver<T>> LeakyStack<T, O> {
    /// Creates a stack that reports leaked values to `observer`.
    ///
    /// `buffer_size` is raised to `capacity` if smaller. Extra slots only
    /// lengthen the ring; they never let the stack hold more than `capacity`.
    pub fn with_observer(capacity: usize, buffer_size: usize, observer: O) -> Result<LeakyStack<T, O>> {
        let config = StackConfig { capacity, buffer_size };
        config.validate()?;

        let buffer_size = config.effective_buffer_size();
        log::debug!(target: "leakystack", "new stack capacity={} buffer_size={}", capacity, buffer_size);

        Ok(LeakyStack {
            slots: std::iter::repeat_with(|| None).take(buffer_size).collect(),
            capacity,
            start: 0,
            end: 0,
            len: 0,
            observer,
        })
    }

    /// Pushes `value` as the newest element, leaking the oldest first if full.
    pub fn push(&mut self, value: T) -> () {
        let size = self.buffer_size();

        if self.is_full() {
            if let Some(old) = self.slots[self.start].take() {
                self.observer.leaked(old);
            }
            self.start = cursor::forward(self.start, size);
            self.len -= 1;
        }

        self.slots[self.end] = Some(value);
        self.end = cursor::forward(self.end, size);
        self.len += 1;
    }
}

impl<T, O> LeakyStack<T, O> {
    /// Removes and returns the most recently pushed value still held.
    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyStack);
        }

        let newest = cursor::back(self.end, self.buffer_size());
        let value = self.slots[newest].take().ok_or(Error::EmptyStack)?;
        self.end = newest;
        self.len -= 1;
        Ok(value)
    }

    /// Returns the oldest value still held, the next one in line to leak.
    pub fn top(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyStack);
        }

        self.slots[self.start].as_ref().ok_or(Error::EmptyStack)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn buffer_size(&self) -> usize {
        self.slots.len()
    }

    /// Drops everything held. Nothing is reported to the observer.
    pub fn clear(&mut self) -> () {
        let dropped = self.slots.iter_mut().filter_map(Option::take).count();
        log::trace!(target: "leakystack", "cleared {} values", dropped);

        self.start = 0;
        self.end = 0;
        self.len = 0;
    }

    /// Iterates over held values from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let size = self.buffer_size();
        (0..self.len).filter_map(move |i| self.slots[cursor::advance(self.start, i as isize, size)].as_ref())
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

impl<T: Debug, O> Debug for LeakyStack<T, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeakyStack")
            .field("capacity", &self.capacity)
            .field("buffer_size", &self.buffer_size())
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
