//! Randomized containers.
//!
//! This module provides [`RandomizedQueue`], a sequential container whose
//! removal order is random rather than positional:
//!
//! - [`RandomizedQueue`]: tail insertion, uniform random removal and
//!   sampling, shuffled snapshot iteration
//!
//! # Uniformity
//!
//! Every operation that picks an element draws an index uniformly from the
//! live contents, so each of the `n` stored elements is chosen with
//! probability `1/n` regardless of insertion order or of how many removals
//! have already happened.
//!
//! # Randomness
//!
//! Each queue owns a private [`rand_pcg::Pcg64Mcg`] generator, seeded once at
//! construction from OS entropy. There is no global generator: two queues
//! never share random state, and cloning a queue reseeds the clone.
//!
//! # Examples
//!
//! ```rust
//! use randq::random::RandomizedQueue;
//!
//! let mut queue = RandomizedQueue::new();
//! queue.enqueue("a");
//! queue.enqueue("b");
//! queue.enqueue("c");
//!
//! // A snapshot iterator yields every element exactly once, shuffled.
//! let mut seen: Vec<&str> = queue.iter().collect();
//! seen.sort_unstable();
//! assert_eq!(seen, vec!["a", "b", "c"]);
//!
//! // The snapshot is fixed at creation time; later mutation is invisible
//! // to an in-flight iterator.
//! let iterator = queue.iter();
//! queue.enqueue("d");
//! assert_eq!(iterator.len(), 3);
//! ```

mod error;
mod queue;

pub use error::EmptyQueueError;
pub use queue::RandomizedQueue;
pub use queue::RandomizedQueueIntoIterator;
pub use queue::RandomizedQueueIterator;
