//! # circ_buff
//!
//! A fixed-capacity circular buffer of 32-bit words for contexts where the
//! storage must not grow and the caller reacts to overflow and underflow
//! itself.
//!
//! This library provides the following modules:
//! - `ring_buffer` for the buffer itself: lifecycle, write, read and occupancy.
//! - `status` for full/empty classification and the buffer lifecycle states.
//! - `snapshot` for the diagnostic rendering of slot contents.
//! - `error` for the error type shared by every operation.
//!
//! ```
//! use circ_buff::{RingBuffer, WriteStatus};
//!
//! let mut buf = RingBuffer::new(2)?;
//! buf.write(10)?;
//! buf.write(20)?;
//! assert_eq!(buf.check_full()?, WriteStatus::Full);
//! assert_eq!(buf.read()?, 10);
//! # Ok::<(), circ_buff::RingBufferError>(())
//! ```
//!
//! The buffer is single-threaded: wrap it in a mutex if a producer and a
//! consumer live on different threads.

pub mod error;
pub mod ring_buffer;
pub mod snapshot;
pub mod status;

// Re-export main types for convenience:
pub use error::*;
pub use ring_buffer::*;
pub use snapshot::*;
pub use status::*;
