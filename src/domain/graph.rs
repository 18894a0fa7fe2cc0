/// The node graph the maze is carved into.
///
/// ## Arena layout
///
/// Nodes live in one dense `width × height` arena and are addressed by
/// coordinate, row-major. Edges are not object references: each node keeps a
/// 4-slot connection mask keyed by `Direction`, and `connect` writes both
/// halves of the undirected edge. This keeps the structure free of ownership
/// cycles while preserving O(1) "is that wall open" queries.
///
/// After generation the graph holds exactly one spanning tree:
/// `width * height - 1` edges, every node reachable from every other.

use crate::domain::coords::{Coordinates, Direction};
use crate::error::MazeError;

#[derive(Clone, Copy, Default, Debug)]
struct Node {
    visited: bool,
    links: [bool; 4],
}

#[derive(Clone, Debug)]
pub struct NodeGrid {
    width: i32,
    height: i32,
    nodes: Vec<Node>,
}

impl NodeGrid {
    /// Allocate a `width × height` grid of unvisited, unconnected nodes.
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        if width < 1 || height < 1 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(NodeGrid {
            width,
            height,
            nodes: vec![Node::default(); (width * height) as usize],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, c: Coordinates) -> bool {
        c.in_bounds(self.width, self.height)
    }

    fn index(&self, c: Coordinates) -> usize {
        (c.y * self.width + c.x) as usize
    }

    /// Grid-adjacent coordinates of `c`, in the fixed order
    /// Up, Down, Left, Right, with off-grid candidates filtered out.
    pub fn neighbors(&self, c: Coordinates) -> Vec<Coordinates> {
        Direction::ALL
            .iter()
            .map(|&dir| c.step(dir))
            .filter(|&n| self.in_bounds(n))
            .collect()
    }

    /// Add a mutual connection between two grid-adjacent nodes.
    /// Rejects (returns false) non-adjacent or out-of-bounds pairs.
    pub fn connect(&mut self, a: Coordinates, b: Coordinates) -> bool {
        if !self.in_bounds(a) || !self.in_bounds(b) {
            return false;
        }
        let dir = match Direction::ALL.iter().find(|&&d| a.step(d) == b) {
            Some(&d) => d,
            None => return false,
        };
        let ia = self.index(a);
        let ib = self.index(b);
        self.nodes[ia].links[dir.index()] = true;
        self.nodes[ib].links[dir.opposite().index()] = true;
        true
    }

    /// Is the wall between `c` and its neighbor in `dir` open?
    /// Out-of-bounds queries read as unconnected.
    pub fn connected(&self, c: Coordinates, dir: Direction) -> bool {
        if !self.in_bounds(c) || !self.in_bounds(c.step(dir)) {
            return false;
        }
        self.nodes[self.index(c)].links[dir.index()]
    }

    pub fn is_visited(&self, c: Coordinates) -> bool {
        // Off-grid reads as visited so carving never walks out.
        !self.in_bounds(c) || self.nodes[self.index(c)].visited
    }

    pub fn mark_visited(&mut self, c: Coordinates) {
        if self.in_bounds(c) {
            let i = self.index(c);
            self.nodes[i].visited = true;
        }
    }

    /// Number of undirected edges (each edge is stored in both nodes).
    pub fn edge_count(&self) -> usize {
        let links: usize = self
            .nodes
            .iter()
            .map(|n| n.links.iter().filter(|&&l| l).count())
            .sum();
        links / 2
    }
}
