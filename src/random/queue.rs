//! Randomized queue backed by a growable array.
//!
//! # Overview
//!
//! `RandomizedQueue` is a sequential container whose removal order is random
//! rather than first-in-first-out:
//!
//! - O(1) amortized `enqueue` at the tail
//! - O(1) `dequeue` of a uniformly random element via swap-remove
//! - O(1) `sample` of a uniformly random element without removal
//! - O(n) snapshot iteration in a uniformly random permutation
//!
//! The element picked by `dequeue` and `sample` is drawn uniformly from the
//! live contents: each of the `n` stored elements has probability `1/n`,
//! independent of insertion order and of where it currently sits in storage.
//!
//! # Storage
//!
//! Elements live in a `Vec<T>`. Removal swaps the chosen element with the
//! last one and pops, so no re-linking or index rebuild is ever needed; the
//! storage order after a removal is arbitrary, which is harmless in a
//! structure that never exposes positional access. A store that falls to a
//! quarter of its capacity gives half of that capacity back.
//!
//! # Randomness
//!
//! Every queue owns a `Pcg64Mcg` generator seeded from OS entropy at
//! construction and reused for all of its draws. Snapshot iterators shuffle
//! with their own entropy-seeded generator, so independently created
//! iterators over the same queue state are uncorrelated. A clone of a queue
//! keeps the elements but reseeds, and therefore never replays the source's
//! draw sequence.
//!
//! # Examples
//!
//! ```rust
//! use randq::random::RandomizedQueue;
//!
//! let mut queue = RandomizedQueue::new();
//! queue.enqueue(10);
//! queue.enqueue(20);
//! queue.enqueue(30);
//!
//! assert_eq!(queue.len(), 3);
//!
//! let drawn = queue.dequeue().unwrap();
//! assert!([10, 20, 30].contains(&drawn));
//! assert_eq!(queue.len(), 2);
//! ```

use std::fmt;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use super::EmptyQueueError;

/// A queue that dequeues and samples its elements uniformly at random.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`       | O(1)       |
/// | `enqueue`   | O(1) amortized |
/// | `dequeue`   | O(1)       |
/// | `sample`    | O(1)       |
/// | `len`       | O(1)       |
/// | `is_empty`  | O(1)       |
/// | `iter`      | O(n) at creation, O(1) per step |
///
/// # Uniformity
///
/// `dequeue` and `sample` draw an index uniformly from `[0, len)` using the
/// queue's own generator. No position is favored: the element most recently
/// enqueued is exactly as likely to be drawn as the oldest one.
///
/// # Examples
///
/// ```rust
/// use randq::random::RandomizedQueue;
///
/// let mut queue: RandomizedQueue<i32> = (1..=5).collect();
/// assert_eq!(queue.len(), 5);
///
/// let sampled = *queue.sample().unwrap();
/// assert!((1..=5).contains(&sampled));
/// assert_eq!(queue.len(), 5);
/// ```
pub struct RandomizedQueue<T> {
    items: Vec<T>,
    rng: Pcg64Mcg,
}

impl<T> RandomizedQueue<T> {
    /// Creates a new empty queue with a generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            rng: Pcg64Mcg::from_entropy(),
        }
    }

    /// Creates a new empty queue with a deterministic generator.
    ///
    /// Two queues built from the same seed and fed the same operations draw
    /// the same elements, which makes randomized behavior reproducible in
    /// tests.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randq::random::RandomizedQueue;
    ///
    /// let mut first = RandomizedQueue::with_seed(7);
    /// let mut second = RandomizedQueue::with_seed(7);
    /// for value in 0..10 {
    ///     first.enqueue(value);
    ///     second.enqueue(value);
    /// }
    ///
    /// assert_eq!(first.dequeue(), second.dequeue());
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            items: Vec::new(),
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Creates a new empty queue with storage for at least `capacity`
    /// elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            rng: Pcg64Mcg::from_entropy(),
        }
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements in the queue.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of elements the queue can hold without
    /// reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Appends an element to the queue.
    ///
    /// Never fails; storage grows as needed.
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes all elements, leaving the queue empty and reusable.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Removes and returns a uniformly random element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueueError`] if the queue is empty; the queue is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randq::random::RandomizedQueue;
    ///
    /// let mut queue: RandomizedQueue<i32> = [10, 20, 30].into_iter().collect();
    /// let drawn = queue.dequeue().unwrap();
    /// assert!([10, 20, 30].contains(&drawn));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn dequeue(&mut self) -> Result<T, EmptyQueueError> {
        if self.items.is_empty() {
            return Err(EmptyQueueError {
                operation: "dequeue",
            });
        }

        let index = self.rng.gen_range(0..self.items.len());
        let item = self.items.swap_remove(index);

        // A quarter-full store gives half of its capacity back.
        let remaining = self.items.len();
        if remaining > 0 && remaining * 4 <= self.items.capacity() {
            self.items.shrink_to(self.items.capacity() / 2);
        }

        Ok(item)
    }

    /// Returns a reference to a uniformly random element without removing it.
    ///
    /// Repeated calls are independent draws, not a fixed sequence.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueueError`] if the queue is empty; the queue is left
    /// unchanged.
    pub fn sample(&mut self) -> Result<&T, EmptyQueueError> {
        if self.items.is_empty() {
            return Err(EmptyQueueError {
                operation: "sample",
            });
        }

        let index = self.rng.gen_range(0..self.items.len());
        Ok(&self.items[index])
    }

    /// Creates an iterator over a shuffled snapshot of the current elements.
    ///
    /// The snapshot is copied out and permuted when this method is called:
    /// the iterator yields every element present at that moment exactly once,
    /// in a uniformly random order, and is unaffected by later mutation of
    /// the queue. Each call shuffles with a fresh entropy-seeded generator,
    /// so separate iterators over the same state are uncorrelated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randq::random::RandomizedQueue;
    ///
    /// let mut queue: RandomizedQueue<i32> = [10, 20, 30].into_iter().collect();
    ///
    /// let iterator = queue.iter();
    /// queue.enqueue(40);
    ///
    /// let mut seen: Vec<i32> = iterator.collect();
    /// seen.sort_unstable();
    /// assert_eq!(seen, vec![10, 20, 30]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> RandomizedQueueIterator<T>
    where
        T: Clone,
    {
        let mut snapshot = self.items.clone();
        snapshot.shuffle(&mut Pcg64Mcg::from_entropy());
        RandomizedQueueIterator {
            shuffled: snapshot.into_iter(),
        }
    }
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RandomizedQueue<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            rng: Pcg64Mcg::from_entropy(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RandomizedQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for RandomizedQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.items {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            rng: Pcg64Mcg::from_entropy(),
        }
    }
}

impl<T> Extend<T> for RandomizedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for RandomizedQueue<T> {
    type Item = T;
    type IntoIter = RandomizedQueueIntoIterator<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut items = std::mem::take(&mut self.items);
        items.shuffle(&mut self.rng);
        RandomizedQueueIntoIterator {
            shuffled: items.into_iter(),
        }
    }
}

impl<'a, T: Clone> IntoIterator for &'a RandomizedQueue<T> {
    type Item = T;
    type IntoIter = RandomizedQueueIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over a shuffled snapshot of a [`RandomizedQueue`].
///
/// Created by [`RandomizedQueue::iter`]. Owns its elements: the queue may be
/// mutated or dropped while the iterator is in flight without affecting the
/// values it yields.
pub struct RandomizedQueueIterator<T> {
    shuffled: std::vec::IntoIter<T>,
}

impl<T> Iterator for RandomizedQueueIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.shuffled.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.shuffled.size_hint()
    }
}

impl<T> ExactSizeIterator for RandomizedQueueIterator<T> {}

/// A consuming iterator over a [`RandomizedQueue`].
///
/// Created by [`IntoIterator::into_iter`]. The contents are shuffled with
/// the queue's own generator, so a queue built with
/// [`RandomizedQueue::with_seed`] drains in a reproducible order.
pub struct RandomizedQueueIntoIterator<T> {
    shuffled: std::vec::IntoIter<T>,
}

impl<T> Iterator for RandomizedQueueIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.shuffled.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.shuffled.size_hint()
    }
}

impl<T> ExactSizeIterator for RandomizedQueueIntoIterator<T> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for RandomizedQueue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.items {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct RandomizedQueueVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> RandomizedQueueVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for RandomizedQueueVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = RandomizedQueue<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }
}

// The generator is never serialized; a deserialized queue seeds afresh from
// OS entropy.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for RandomizedQueue<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(RandomizedQueueVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property-Based Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_as_sequence() {
        let queue: RandomizedQueue<i32> = (1..=3).collect();
        let json = serde_json::to_string(&queue).unwrap();
        assert_eq!(json, "[1,2,3]");
    }

    #[rstest]
    fn test_serialize_empty() {
        let queue: RandomizedQueue<i32> = RandomizedQueue::new();
        let json = serde_json::to_string(&queue).unwrap();
        assert_eq!(json, "[]");
    }

    #[rstest]
    fn test_deserialize_restores_contents() {
        let mut queue: RandomizedQueue<i32> = serde_json::from_str("[4,5,6]").unwrap();
        assert_eq!(queue.len(), 3);

        let mut drained = Vec::new();
        while let Ok(value) = queue.dequeue() {
            drained.push(value);
        }
        drained.sort_unstable();
        assert_eq!(drained, vec![4, 5, 6]);
    }

    #[rstest]
    fn test_round_trip_preserves_multiset() {
        let queue: RandomizedQueue<i32> = (0..20).collect();
        let json = serde_json::to_string(&queue).unwrap();
        let restored: RandomizedQueue<i32> = serde_json::from_str(&json).unwrap();

        let mut original: Vec<i32> = queue.iter().collect();
        let mut round_tripped: Vec<i32> = restored.iter().collect();
        original.sort_unstable();
        round_tripped.sort_unstable();
        assert_eq!(original, round_tripped);
    }
}
