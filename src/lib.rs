//! Perfect-maze generation for tiny matrix displays.
//!
//! The pipeline runs strictly forward, once per maze, to completion:
//!
//! 1. [`NodeGrid`]: a dense arena of grid nodes with per-direction
//!    connection state.
//! 2. [`maze::generator`]: a randomized depth-first backtracker carves a
//!    spanning tree into the graph.
//! 3. [`MazeGrid::compile`]: expands the graph into a walled cell grid
//!    with a closed outer boundary.
//! 4. [`maze::solver`]: a breadth-first pass places the Start marker and
//!    puts End on the farthest reachable cell (tree-diameter endpoint).
//!
//! Afterwards the grid is read-only; [`Navigator`] validates moves against
//! it and [`Viewport`] computes the 8×8 window a small display shows around
//! the moving viewer. Rendering pixels, polling input and driving the screen
//! are the surrounding application's job.

pub mod config;
pub mod domain;
pub mod error;
pub mod maze;
pub mod play;

pub use config::MazeConfig;
pub use domain::cell::Cell;
pub use domain::coords::{Coordinates, Direction, Rotation};
pub use domain::graph::NodeGrid;
pub use error::MazeError;
pub use maze::generator::{carve, DirectionSource, ShuffledDirections};
pub use maze::grid::MazeGrid;
pub use maze::solver::Endpoints;
pub use play::navigate::{MoveOutcome, Navigator};
pub use play::viewport::{FramePixel, Viewport, VIEW_SIZE};

use maze::solver;

/// A generated, compiled and solved maze, ready for play.
#[derive(Clone, Debug)]
pub struct Maze {
    pub grid: MazeGrid,
    start: Coordinates,
    end: Coordinates,
}

impl Maze {
    /// Cell coordinate of the Start marker, where the viewer spawns.
    pub fn start_position(&self) -> Coordinates {
        self.start
    }

    /// Cell coordinate of the End marker.
    pub fn end_position(&self) -> Coordinates {
        self.end
    }

    /// A navigator spawned on the Start cell.
    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.start)
    }

    /// The display window around `viewer` for this maze's grid.
    pub fn viewport(&self, viewer: Coordinates) -> Viewport {
        Viewport::around(viewer, self.grid.width(), self.grid.height())
    }
}

/// Run the whole pipeline: carve a `width × height` node maze, compile it
/// to a cell grid and place the Start/End markers.
///
/// Dimensions are validated to be ≥ 1; callers wanting the device menu's
/// 4..=99 range go through [`MazeConfig`]. The caller owns the randomness via
/// `dirs` (see [`ShuffledDirections`]).
pub fn generate_maze<D: DirectionSource>(
    width: i32,
    height: i32,
    dirs: &mut D,
) -> Result<Maze, MazeError> {
    let mut nodes = NodeGrid::new(width, height)?;
    carve(&mut nodes, Coordinates::new(0, 0), dirs);

    let mut grid = MazeGrid::compile(&nodes);
    // compile() opens every node cell, so a validated graph always solves;
    // the fallback start is the first node cell.
    let endpoints = solver::place_markers(&mut grid).unwrap_or(Endpoints {
        start: Coordinates::new(1, 1),
        end: Coordinates::new(1, 1),
    });

    Ok(Maze {
        grid,
        start: endpoints.start,
        end: endpoints.end,
    })
}
