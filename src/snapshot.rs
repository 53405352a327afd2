use std::fmt;

/// Glyph rendered for slots that hold no live data.
pub const FREE_SLOT: &str = "*";

/// A point-in-time copy of a buffer's slots, taken for diagnostics.
///
/// Rendered through `Display` as three tab-aligned lines:
///
/// ```text
/// Region: 10  20  30  0
/// Buffer: 10  20  30  *
/// Index:  0   1   2   3
/// ```
///
/// `Region` is the raw slot contents, including stale values left behind by
/// reads. `Buffer` masks every slot outside the live range with [`FREE_SLOT`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    slots: Vec<u32>,
    live: Vec<bool>,
}

impl Snapshot {
    /// Marks the `occupied` slots starting at `read_cursor` as live,
    /// wrapping past the end of `slots`.
    pub(crate) fn capture(slots: &[u32], read_cursor: usize, occupied: usize) -> Self {
        let capacity = slots.len();
        let mut live = vec![false; capacity];
        for offset in 0..occupied {
            live[(read_cursor + offset) % capacity] = true;
        }
        Self {
            slots: slots.to_vec(),
            live,
        }
    }

    /// Raw slot contents in index order.
    pub fn slots(&self) -> &[u32] {
        &self.slots
    }

    /// Whether slot `index` holds unread data.
    pub fn is_live(&self, index: usize) -> bool {
        self.live.get(index).copied().unwrap_or(false)
    }

    /// Number of live slots.
    pub fn live_count(&self) -> usize {
        self.live.iter().filter(|&&l| l).count()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Region:")?;
        for value in &self.slots {
            write!(f, "\t{value}")?;
        }
        f.write_str("\nBuffer:")?;
        for (value, live) in self.slots.iter().zip(&self.live) {
            if *live {
                write!(f, "\t{value}")?;
            } else {
                write!(f, "\t{FREE_SLOT}")?;
            }
        }
        f.write_str("\nIndex:")?;
        for index in 0..self.slots.len() {
            write!(f, "\t{index}")?;
        }
        f.write_str("\n")
    }
}
