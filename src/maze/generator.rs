/// Randomized depth-first maze carving ("recursive backtracker"),
/// run iteratively with an explicit stack.
///
/// The carve is total: every node is visited exactly once, the stack never
/// exceeds `width * height` entries, and the result is always a single
/// spanning tree: a perfect maze with no cycles and no unreachable nodes.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::coords::{Coordinates, Direction};
use crate::domain::graph::NodeGrid;

/// Supplies the direction order for each carving step.
///
/// The generator draws a freshly shuffled copy of the 4-direction set per
/// iteration and takes the first unvisited candidate. Keeping the shuffle
/// behind a trait lets callers own the RNG and lets tests pin the order.
pub trait DirectionSource {
    fn shuffled(&mut self) -> [Direction; 4];
}

/// Production source: Fisher-Yates shuffle over any `rand::Rng`.
pub struct ShuffledDirections<R: Rng> {
    rng: R,
}

impl<R: Rng> ShuffledDirections<R> {
    pub fn new(rng: R) -> Self {
        ShuffledDirections { rng }
    }
}

impl<R: Rng> DirectionSource for ShuffledDirections<R> {
    fn shuffled(&mut self) -> [Direction; 4] {
        let mut dirs = Direction::ALL;
        dirs.shuffle(&mut self.rng);
        dirs
    }
}

/// Carve a spanning tree into `grid`, starting from `start`.
///
/// Descend to a random unvisited neighbor while one exists, backtrack by
/// popping when none remain, stop when the stack empties.
pub fn carve<D: DirectionSource>(grid: &mut NodeGrid, start: Coordinates, dirs: &mut D) {
    if !grid.in_bounds(start) {
        return;
    }

    grid.mark_visited(start);
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        match unvisited_neighbor(grid, current, dirs) {
            Some(next) => {
                grid.connect(current, next);
                grid.mark_visited(next);
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }
}

/// First unvisited in-bounds neighbor of `current` in a freshly shuffled
/// direction order, or None when the node is exhausted.
fn unvisited_neighbor<D: DirectionSource>(
    grid: &NodeGrid,
    current: Coordinates,
    dirs: &mut D,
) -> Option<Coordinates> {
    dirs.shuffled()
        .iter()
        .map(|&dir| current.step(dir))
        .find(|&n| !grid.is_visited(n))
}
