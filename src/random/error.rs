//! Error types for randomized containers.
//!
//! This module provides the error returned when an operation that needs at
//! least one element is called on an empty queue. Hitting it is a caller
//! precondition violation; the queue is left unchanged and the error is
//! always propagated, never swallowed.

/// Represents an attempt to draw from an empty randomized queue.
///
/// Returned by [`RandomizedQueue::dequeue`] and [`RandomizedQueue::sample`]
/// when the queue holds no elements. The failed call has no effect on the
/// queue.
///
/// # Examples
///
/// ```rust
/// use randq::random::EmptyQueueError;
///
/// let error = EmptyQueueError {
///     operation: "dequeue",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "dequeue on an empty randomized queue"
/// );
/// ```
///
/// [`RandomizedQueue::dequeue`]: super::RandomizedQueue::dequeue
/// [`RandomizedQueue::sample`]: super::RandomizedQueue::sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueueError {
    /// The name of the operation that required a non-empty queue.
    pub operation: &'static str,
}

impl std::fmt::Display for EmptyQueueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} on an empty randomized queue", self.operation)
    }
}

impl std::error::Error for EmptyQueueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_queue_error_display_dequeue() {
        let error = EmptyQueueError {
            operation: "dequeue",
        };
        assert_eq!(format!("{error}"), "dequeue on an empty randomized queue");
    }

    #[test]
    fn test_empty_queue_error_display_sample() {
        let error = EmptyQueueError {
            operation: "sample",
        };
        assert_eq!(format!("{error}"), "sample on an empty randomized queue");
    }

    #[test]
    fn test_empty_queue_error_is_error() {
        fn assert_error<E: std::error::Error>(_error: &E) {}

        let error = EmptyQueueError {
            operation: "dequeue",
        };
        assert_error(&error);
    }

    #[test]
    fn test_empty_queue_error_equality() {
        let first = EmptyQueueError {
            operation: "dequeue",
        };
        let second = EmptyQueueError {
            operation: "dequeue",
        };
        let third = EmptyQueueError {
            operation: "sample",
        };

        assert_eq!(first, second);
        assert_ne!(first, third);
    }
}
