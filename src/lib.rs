//! A fixed-capacity stack that never blocks and never grows.
//!
//! Once a [`LeakyStack`] holds `capacity` values, pushing another one leaks
//! the oldest: it is handed to a [`LeakObserver`] and forgotten. By default
//! leaks are reported as `log` records.
//!
//! ```
//! use leakystack::{Error, LeakyStack};
//!
//! let mut stack = LeakyStack::new(2)?;
//! stack.push("a");
//! stack.push("b");
//! stack.push("c"); // "a" leaks
//!
//! assert_eq!(stack.top(), Ok(&"b"));
//! assert_eq!(stack.pop(), Ok("c"));
//! assert_eq!(stack.pop(), Ok("b"));
//! assert_eq!(stack.pop(), Err(Error::EmptyStack));
//! # Ok::<(), Error>(())
//! ```

pub mod config;
mod cursor;
pub mod error;
pub mod leak;
mod stack;

pub use config::StackConfig;
pub use error::{Error, Result};
pub use leak::{DropLeaks, LeakObserver, LogLeaks};
pub use stack::LeakyStack;
