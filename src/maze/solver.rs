/// Start/End placement via the tree-diameter technique.
///
/// The compiled grid's open cells form a tree, so the farthest cell from any
/// fixed start is a diameter endpoint. One breadth-first pass from the first
/// open cell (row-major scan order) therefore yields the longest navigable
/// path's far end, which becomes the End marker.
///
/// Ties in the farthest-cell selection go to the earlier BFS visit. That
/// order is deterministic (it follows the fixed Up, Down, Left, Right
/// expansion) but implementation-defined, not meaningful.

use std::collections::VecDeque;

use crate::domain::cell::Cell;
use crate::domain::coords::{Coordinates, Direction};
use crate::maze::grid::MazeGrid;

/// The solved grid's marker positions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Endpoints {
    pub start: Coordinates,
    pub end: Coordinates,
}

/// Transient per-cell BFS bookkeeping, same shape as the grid.
/// Wall cells are pre-seeded as visited so the frontier never enters them.
struct DistanceField {
    width: i32,
    visited: Vec<bool>,
    distance: Vec<i32>,
}

impl DistanceField {
    fn new(grid: &MazeGrid) -> Self {
        let mut visited = Vec::with_capacity((grid.width() * grid.height()) as usize);
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                visited.push(grid.get(Coordinates::new(x, y)) == Cell::Wall);
            }
        }
        DistanceField {
            width: grid.width(),
            distance: vec![-1; visited.len()],
            visited,
        }
    }

    fn index(&self, c: Coordinates) -> usize {
        (c.y * self.width + c.x) as usize
    }

    fn is_visited(&self, c: Coordinates) -> bool {
        self.visited[self.index(c)]
    }

    fn visit(&mut self, c: Coordinates, dist: i32) {
        let i = self.index(c);
        self.visited[i] = true;
        self.distance[i] = dist;
    }

    fn distance(&self, c: Coordinates) -> i32 {
        self.distance[self.index(c)]
    }
}

/// Pick the Start and End cells and mark them in the grid.
///
/// Returns None only when the grid has no Open cell at all, which cannot
/// happen for a compiled grid (every node cell is carved open).
pub fn place_markers(grid: &mut MazeGrid) -> Option<Endpoints> {
    let start = first_open(grid)?;

    let mut field = DistanceField::new(grid);
    field.visit(start, 0);

    let mut best = start;
    let mut best_distance = 0;

    let mut frontier = VecDeque::from([start]);
    while let Some(current) = frontier.pop_front() {
        for dir in Direction::ALL {
            let next = current.step(dir);
            if !grid.in_bounds(next) || field.is_visited(next) {
                continue;
            }
            let dist = field.distance(current) + 1;
            field.visit(next, dist);
            if dist > best_distance {
                best_distance = dist;
                best = next;
            }
            frontier.push_back(next);
        }
    }

    grid.set(start, Cell::Start);
    // The single-open-cell grid degenerates to Start == End; the one cell
    // then reads as End and the maze is won immediately.
    grid.set(best, Cell::End);

    Some(Endpoints { start, end: best })
}

/// First Open cell in row-major order.
fn first_open(grid: &MazeGrid) -> Option<Coordinates> {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let c = Coordinates::new(x, y);
            if grid.get(c) == Cell::Open {
                return Some(c);
            }
        }
    }
    None
}
