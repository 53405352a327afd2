use std::fmt;
use std::io;

use tracing::{debug, trace, warn};

use crate::error::{Result, RingBufferError};
use crate::snapshot::Snapshot;
use crate::status::{ReadStatus, State, WriteStatus};

/// A fixed-capacity circular buffer of 32-bit words.
///
/// Slots are written at `write_cursor` and consumed from `read_cursor`; both
/// advance forward and wrap at `capacity`. Occupancy is counted explicitly, so
/// equal cursors are never ambiguous between full and empty.
///
/// Writes to a full buffer and reads from an empty one are rejected rather
/// than overwriting or blocking; callers poll with [`check_full`] and
/// [`check_empty`] if they need to wait.
///
/// [`check_full`]: RingBuffer::check_full
/// [`check_empty`]: RingBuffer::check_empty
#[derive(Default)]
pub struct RingBuffer {
    /// Backing store; empty unless the buffer is active.
    storage: Box<[u32]>,

    /// Number of unread slots, `0..=capacity`.
    occupied: usize,

    /// Index of the next slot to write.
    write_cursor: usize,

    /// Index of the next slot to read.
    read_cursor: usize,

    state: State,
}

impl RingBuffer {
    /// Creates an active buffer with room for `capacity` words.
    pub fn new(capacity: usize) -> Result<Self> {
        let mut buffer = Self::default();
        buffer.init(capacity)?;
        Ok(buffer)
    }

    /// Allocates the backing store of an uninitialized buffer and activates it.
    ///
    /// Fails with `InvalidCapacity` for a zero capacity, `AllocationFailure` if
    /// the store cannot be obtained, and `InvalidState` if the buffer was
    /// already initialized or destroyed.
    pub fn init(&mut self, capacity: usize) -> Result<()> {
        if self.state != State::Uninitialized {
            return Err(self.misuse("initialize"));
        }
        if capacity == 0 {
            return Err(RingBufferError::InvalidCapacity);
        }

        let mut storage = Vec::new();
        if storage.try_reserve_exact(capacity).is_err() {
            warn!(capacity, "ring buffer allocation failed");
            return Err(RingBufferError::AllocationFailure { capacity });
        }
        storage.resize(capacity, 0);

        self.storage = storage.into_boxed_slice();
        self.occupied = 0;
        self.write_cursor = 0;
        self.read_cursor = 0;
        self.state = State::Active;
        debug!(capacity, "ring buffer initialized");
        Ok(())
    }

    /// Releases the backing store and resets every field.
    ///
    /// The buffer is unusable afterwards. Destroying it again fails with
    /// `InvalidState` and changes nothing.
    pub fn destroy(&mut self) -> Result<()> {
        self.ensure_active("destroy")?;
        let capacity = self.storage.len();
        self.storage = Box::default();
        self.occupied = 0;
        self.write_cursor = 0;
        self.read_cursor = 0;
        self.state = State::Destroyed;
        debug!(capacity, "ring buffer destroyed");
        Ok(())
    }

    /// Reports whether a write would be accepted.
    pub fn check_full(&self) -> Result<WriteStatus> {
        self.ensure_active("check")?;
        Ok(self.full_status())
    }

    /// Reports whether a read would return data.
    pub fn check_empty(&self) -> Result<ReadStatus> {
        self.ensure_active("check")?;
        Ok(self.empty_status())
    }

    /// Stores `value` in the next free slot.
    pub fn write(&mut self, value: u32) -> Result<()> {
        self.ensure_active("write")?;
        if self.full_status() == WriteStatus::Full {
            trace!(capacity = self.storage.len(), "write rejected, buffer full");
            return Err(RingBufferError::BufferFull {
                capacity: self.storage.len(),
            });
        }

        self.storage[self.write_cursor] = value;
        self.write_cursor = self.advance(self.write_cursor);
        self.occupied += 1;
        trace!(
            value,
            write_cursor = self.write_cursor,
            occupied = self.occupied,
            "wrote slot"
        );
        Ok(())
    }

    /// Removes and returns the oldest unread value.
    pub fn read(&mut self) -> Result<u32> {
        self.ensure_active("read")?;
        if self.empty_status() == ReadStatus::Empty {
            trace!("read rejected, buffer empty");
            return Err(RingBufferError::BufferEmpty);
        }

        let value = self.storage[self.read_cursor];
        self.read_cursor = self.advance(self.read_cursor);
        self.occupied -= 1;
        trace!(
            value,
            read_cursor = self.read_cursor,
            occupied = self.occupied,
            "read slot"
        );
        Ok(value)
    }

    /// Number of slots holding unread data.
    pub fn occupancy(&self) -> Result<usize> {
        self.ensure_active("query")?;
        Ok(self.occupied)
    }

    /// Total number of slots.
    pub fn capacity(&self) -> Result<usize> {
        self.ensure_active("query")?;
        Ok(self.storage.len())
    }

    /// Index of the next slot to be read.
    pub fn read_cursor(&self) -> Result<usize> {
        self.ensure_active("query")?;
        Ok(self.read_cursor)
    }

    /// Index of the next slot to be written.
    pub fn write_cursor(&self) -> Result<usize> {
        self.ensure_active("query")?;
        Ok(self.write_cursor)
    }

    /// Current lifecycle state; valid in every state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Copies the slots and live range for inspection.
    pub fn snapshot(&self) -> Result<Snapshot> {
        self.ensure_active("dump")?;
        Ok(Snapshot::capture(
            &self.storage,
            self.read_cursor,
            self.occupied,
        ))
    }

    /// Writes the [`Snapshot`] rendering to `out`.
    pub fn dump<W: io::Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        let snapshot = self.snapshot()?;
        write!(out, "{snapshot}")?;
        Ok(())
    }

    fn full_status(&self) -> WriteStatus {
        if self.occupied == self.storage.len() {
            WriteStatus::Full
        } else {
            WriteStatus::CanWrite
        }
    }

    fn empty_status(&self) -> ReadStatus {
        if self.occupied == 0 {
            ReadStatus::Empty
        } else {
            ReadStatus::CanRead
        }
    }

    fn advance(&self, cursor: usize) -> usize {
        (cursor + 1) % self.storage.len()
    }

    fn ensure_active(&self, operation: &'static str) -> Result<()> {
        if self.state == State::Active {
            Ok(())
        } else {
            Err(self.misuse(operation))
        }
    }

    fn misuse(&self, operation: &'static str) -> RingBufferError {
        warn!(state = %self.state, operation, "ring buffer used in wrong state");
        RingBufferError::InvalidState {
            state: self.state,
            operation,
        }
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("state", &self.state)
            .field("capacity", &self.storage.len())
            .field("occupied", &self.occupied)
            .field("read_cursor", &self.read_cursor)
            .field("write_cursor", &self.write_cursor)
            .finish()
    }
}
