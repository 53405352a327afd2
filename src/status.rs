use std::fmt;

/// Outcome of a full check: whether a write would be accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteStatus {
    Full,
    CanWrite,
}

/// Outcome of an empty check: whether a read would return data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadStatus {
    Empty,
    CanRead,
}

/// Lifecycle of a buffer instance.
///
/// `Uninitialized -> Active` happens only through `init`,
/// `Active -> Destroyed` only through `destroy`. Destroyed is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Uninitialized,
    Active,
    Destroyed,
}

impl WriteStatus {
    pub fn can_write(self) -> bool {
        self == WriteStatus::CanWrite
    }
}

impl ReadStatus {
    pub fn can_read(self) -> bool {
        self == ReadStatus::CanRead
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Uninitialized => "uninitialized",
            State::Active => "active",
            State::Destroyed => "destroyed",
        };
        f.write_str(name)
    }
}
