//! Tile id generator.
//!
//! Each game session owns one generator. Ids are monotonic for the life of the session and
//! start over when the session is reset, so the same seed replays the same ids.

use crate::types::TileId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileIdGen {
    /// `None` once `u32::MAX` has been handed out
    next: Option<u32>,
}

impl TileIdGen {
    /// Create a generator whose first id is `#1`
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Create a generator that continues after the largest id already in use
    pub fn after<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = TileId>,
    {
        let max = ids.into_iter().map(|id| id.0).max().unwrap_or(0);
        Self {
            next: max.checked_add(1),
        }
    }

    /// Mint a fresh id, or `None` when the id space is used up
    pub fn next_id(&mut self) -> Option<TileId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(TileId(id))
    }

    /// Peek at the id the next call to [`next_id`](Self::next_id) returns
    pub fn peek(&self) -> Option<TileId> {
        self.next.map(TileId)
    }

    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    /// Start over from `#1` (new game)
    pub fn reset(&mut self) {
        self.next = Some(1);
    }
}

impl Default for TileIdGen {
    fn default() -> Self {
        Self::new()
    }
}
