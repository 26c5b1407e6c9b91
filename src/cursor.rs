use std::fmt;

/// A saved cursor position: byte offset plus the line and column that
/// offset corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// Error produced by snapshot-stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// `pop_state` or `discard_state` was called with nothing saved.
    #[error("no saved cursor state")]
    NoSavedState,
}

/// A character source with position tracking and backtracking support.
///
/// A cursor starts *before* its first character: `current()` is `None`
/// until the first `advance()`. Backtracking uses a LIFO snapshot stack:
/// `push_state` saves the position, `pop_state` rewinds to the most
/// recent save, and `discard_state` commits a tentative scan by dropping
/// the save without rewinding.
///
/// Any alternative character source (file-backed, streaming) can be
/// substituted by implementing this trait.
pub trait Cursor {
    /// Advances to the next character. Returns `false` and leaves the
    /// position unchanged if the input is exhausted.
    fn advance(&mut self) -> bool;

    /// The character at the current position, or `None` before the
    /// first `advance`.
    fn current(&self) -> Option<u8>;

    /// Saves the current position on the snapshot stack.
    fn push_state(&mut self);

    /// Rewinds to the most recently saved position and removes it from
    /// the stack.
    ///
    /// # Errors
    ///
    /// [`CursorError::NoSavedState`] if the stack is empty; the position
    /// is left unchanged.
    fn pop_state(&mut self) -> Result<(), CursorError>;

    /// Removes the most recently saved position without rewinding,
    /// committing a tentative scan.
    ///
    /// # Errors
    ///
    /// [`CursorError::NoSavedState`] if the stack is empty.
    fn discard_state(&mut self) -> Result<(), CursorError>;

    /// Line number of the current position, starting at 1.
    fn line(&self) -> usize;

    /// Column number of the current position. Column 0 is the position
    /// before the first character of a line.
    fn column(&self) -> usize;
}

/// A [`Cursor`] over a caller-owned byte slice.
///
/// The buffer is borrowed, never copied; it must outlive the cursor and
/// the borrow checker enforces exactly that. The initial position is
/// before byte 0 at line 1, column 0, so one `advance()` reaches the
/// first byte.
pub struct SliceCursor<'a> {
    input: &'a [u8],
    // Bytes consumed so far; the current byte is input[offset - 1].
    offset: usize,
    line: usize,
    column: usize,
    saved: Vec<Snapshot>,
}

impl<'a> SliceCursor<'a> {
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,
            column: 0,
            saved: Vec::new(),
        }
    }

    /// Number of snapshots currently on the stack.
    #[must_use]
    pub fn saved_states(&self) -> usize {
        self.saved.len()
    }
}

impl fmt::Debug for SliceCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("offset", &self.offset)
            .field("line", &self.line)
            .field("column", &self.column)
            .field("saved", &self.saved)
            .finish_non_exhaustive()
    }
}

impl Cursor for SliceCursor<'_> {
    fn advance(&mut self) -> bool {
        if self.offset >= self.input.len() {
            return false;
        }

        self.offset += 1;

        if self.input[self.offset - 1] == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        true
    }

    fn current(&self) -> Option<u8> {
        self.offset
            .checked_sub(1)
            .and_then(|i| self.input.get(i))
            .copied()
    }

    fn push_state(&mut self) {
        self.saved.push(Snapshot {
            offset: self.offset,
            line: self.line,
            column: self.column,
        });
    }

    fn pop_state(&mut self) -> Result<(), CursorError> {
        let snapshot = self.saved.pop().ok_or(CursorError::NoSavedState)?;
        self.offset = snapshot.offset;
        self.line = snapshot.line;
        self.column = snapshot.column;
        Ok(())
    }

    fn discard_state(&mut self) -> Result<(), CursorError> {
        self.saved.pop().map(|_| ()).ok_or(CursorError::NoSavedState)
    }

    fn line(&self) -> usize {
        self.line
    }

    fn column(&self) -> usize {
        self.column
    }
}
