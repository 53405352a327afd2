use thiserror::Error;

use crate::status::State;

/// Errors reported by [`RingBuffer`](crate::RingBuffer) operations.
///
/// A failed operation never leaves the buffer partially modified.
#[derive(Error, Debug)]
pub enum RingBufferError {
    #[error("capacity must be at least one slot")]
    InvalidCapacity,

    #[error("could not allocate backing store for {capacity} slots")]
    AllocationFailure { capacity: usize },

    #[error("cannot {operation} a buffer in state {state}")]
    InvalidState {
        state: State,
        operation: &'static str,
    },

    #[error("buffer is full ({capacity} slots occupied)")]
    BufferFull { capacity: usize },

    #[error("buffer is empty")]
    BufferEmpty,

    #[error("failed to write dump: {0}")]
    Sink(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RingBufferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failure() {
        let err = RingBufferError::InvalidState {
            state: State::Destroyed,
            operation: "write",
        };
        assert_eq!(err.to_string(), "cannot write a buffer in state destroyed");

        let err = RingBufferError::BufferFull { capacity: 4 };
        assert_eq!(err.to_string(), "buffer is full (4 slots occupied)");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: RingBufferError = io.into();
        assert!(matches!(err, RingBufferError::Sink(_)));
    }
}
