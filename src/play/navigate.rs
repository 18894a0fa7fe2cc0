/// Move validation and win detection over a compiled grid.
///
/// The grid is read-only here; the navigator owns nothing but the viewer
/// coordinate. Out-of-bounds and wall collisions are routine outcomes,
/// reported as `Blocked`, never as errors.

use crate::domain::coords::{Coordinates, Direction};
use crate::maze::grid::MazeGrid;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Moved,
    Blocked,
}

impl MoveOutcome {
    pub fn moved(self) -> bool {
        matches!(self, MoveOutcome::Moved)
    }
}

/// Tracks the viewer through the maze.
#[derive(Clone, Copy, Debug)]
pub struct Navigator {
    position: Coordinates,
}

impl Navigator {
    pub fn new(start: Coordinates) -> Self {
        Navigator { position: start }
    }

    pub fn position(&self) -> Coordinates {
        self.position
    }

    /// Try to step in `dir`. The move commits only when the target cell is
    /// passable; off-grid targets read as Wall and are rejected the same
    /// way, so repeated blocked attempts never change the position.
    pub fn attempt_move(&mut self, grid: &MazeGrid, dir: Direction) -> MoveOutcome {
        let candidate = self.position.step(dir);
        if !grid.get(candidate).is_passable() {
            return MoveOutcome::Blocked;
        }
        self.position = candidate;
        MoveOutcome::Moved
    }

    /// Has the viewer reached the End marker?
    pub fn has_won(&self, grid: &MazeGrid) -> bool {
        grid.get(self.position).is_end()
    }
}
