//! Authoritative local board state: squares, the player registry, and this
//! client's own identity.
//!
//! Data flows into this layer from the network (the login snapshot, then
//! incremental change batches, then player-join broadcasts) and is read by
//! the renderer and the click-targeting path. The board is sparse: a cell
//! with no owner has no entry at all.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use std::collections::HashMap;

use protocol::{Color, PlayerId, Position, Snapshot, Square, SquareChange};

/// This client's own identity, fixed by the login message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfIdentity {
    pub id: PlayerId,
    pub spawn_point: Position,
}

/// In-memory store of board squares and known players.
///
/// All mutation entry points are idempotent where the wire protocol needs
/// them to be: re-adding an existing square replaces it, clearing an absent
/// square is a no-op, and a duplicate player join never alters the stored
/// color. A change whose owner is missing from the registry is a *desync*:
/// it is applied anyway, logged, and counted, but never crashes the session.
pub struct GridStore {
    squares: HashMap<Position, Square>,
    players: HashMap<PlayerId, Color>,
    identity: Option<SelfIdentity>,
    board_size: u32,
    cell_size: f64,
    desync_count: u64,
}

impl GridStore {
    /// Create an empty store. Board geometry is unset until the first
    /// snapshot arrives; the zero-size board renders and targets nothing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            squares: HashMap::new(),
            players: HashMap::new(),
            identity: None,
            board_size: 0,
            cell_size: 1.0,
            desync_count: 0,
        }
    }

    /// Replace the registry and board wholesale from a login snapshot, set
    /// this client's identity, and fix board geometry.
    ///
    /// The server sends this once per connection; a second call is treated
    /// as a full reset, not a merge.
    pub fn apply_snapshot(
        &mut self,
        snapshot: Snapshot,
        self_id: PlayerId,
        spawn_point: Position,
        board_size: u32,
        cell_size: f64,
    ) {
        self.players.clear();
        self.players.extend(snapshot.players);

        self.squares.clear();
        for (pos, square) in snapshot.squares {
            self.note_desync_if_unknown(square.owner, pos);
            self.squares.insert(pos, square);
        }

        self.identity = Some(SelfIdentity { id: self_id, spawn_point });
        self.board_size = board_size;
        self.cell_size = cell_size;
    }

    /// Apply a batch of incremental changes in list order, so the last entry
    /// for a position wins. A `None` owner clears the cell; clearing an
    /// already-empty cell is a silent no-op. An empty batch is a no-op.
    pub fn apply_changes(&mut self, changes: &[(Position, SquareChange)]) {
        for &(pos, change) in changes {
            match change.id {
                Some(owner) => {
                    self.note_desync_if_unknown(owner, pos);
                    self.squares.insert(pos, Square { owner, number: change.number });
                }
                None => {
                    self.squares.remove(&pos);
                }
            }
        }
    }

    /// Register a newly joined player. A duplicate join notification (e.g.
    /// a reconnect race) never alters the already-stored color.
    pub fn apply_player_join(&mut self, id: PlayerId, color: Color) {
        self.players.entry(id).or_insert(color);
    }

    /// Point lookup for the square at `pos`, if any cell owns it.
    #[must_use]
    pub fn square_at(&self, pos: Position) -> Option<Square> {
        self.squares.get(&pos).copied()
    }

    /// The registered color for a player, if known.
    #[must_use]
    pub fn player_color(&self, id: PlayerId) -> Option<Color> {
        self.players.get(&id).copied()
    }

    /// This client's identity, once logged in.
    #[must_use]
    pub fn identity(&self) -> Option<SelfIdentity> {
        self.identity
    }

    /// Cells per board side.
    #[must_use]
    pub fn board_size(&self) -> u32 {
        self.board_size
    }

    /// Display-unit size of one cell.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// How many applied squares referenced an owner missing from the player
    /// registry. Observable so the host can surface sync trouble.
    #[must_use]
    pub fn desync_count(&self) -> u64 {
        self.desync_count
    }

    /// Number of owned squares currently on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Returns `true` if no cell is owned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    fn note_desync_if_unknown(&mut self, owner: PlayerId, pos: Position) {
        if !self.players.contains_key(&owner) {
            self.desync_count += 1;
            log::warn!(
                "out of sync: square at ({}, {}) owned by unknown player {owner}",
                pos.x,
                pos.y
            );
        }
    }
}

impl Default for GridStore {
    fn default() -> Self {
        Self::new()
    }
}
