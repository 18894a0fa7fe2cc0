/// The compiled display grid: the sparse node graph expanded into a dense
/// wall/passage cell matrix suitable for tile-based navigation.
///
/// ## Cell layout
///
/// A `w × h` node graph compiles to a `(2w+1) × (2h+1)` grid. The node at
/// `(x, y)` occupies cell `(2x+1, 2y+1)`; the cell between two adjacent node
/// cells is Open iff those nodes are connected; everything else, including
/// the full outer boundary, stays Wall. Compilation is a pure function of
/// the finished graph; compiling twice yields identical grids.

use std::fmt;

use crate::domain::cell::Cell;
use crate::domain::coords::{Coordinates, Direction};
use crate::domain::graph::NodeGrid;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MazeGrid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl MazeGrid {
    /// Expand a finished node graph into the dense cell grid.
    ///
    /// Must only be called once generation is complete: the wall layout is
    /// read straight from the graph's connection state.
    pub fn compile(graph: &NodeGrid) -> Self {
        let width = graph.width() * 2 + 1;
        let height = graph.height() * 2 + 1;
        let mut grid = MazeGrid {
            width,
            height,
            cells: vec![Cell::Wall; (width * height) as usize],
        };

        for y in 0..graph.height() {
            for x in 0..graph.width() {
                let node = Coordinates::new(x, y);
                let cell = Coordinates::new(x * 2 + 1, y * 2 + 1);
                // The node's own cell is always carved open; passages only
                // where the graph holds a connection.
                grid.set(cell, Cell::Open);
                for dir in Direction::ALL {
                    if graph.connected(node, dir) {
                        grid.set(cell.step(dir), Cell::Open);
                    }
                }
            }
        }

        grid
    }

    /// Grid width in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, c: Coordinates) -> bool {
        c.in_bounds(self.width, self.height)
    }

    /// Cell at `c`; out of bounds reads as Wall.
    pub fn get(&self, c: Coordinates) -> Cell {
        if self.in_bounds(c) {
            self.cells[(c.y * self.width + c.x) as usize]
        } else {
            Cell::Wall
        }
    }

    pub(crate) fn set(&mut self, c: Coordinates, cell: Cell) {
        if self.in_bounds(c) {
            self.cells[(c.y * self.width + c.x) as usize] = cell;
        }
    }

    /// Build a grid from an ASCII diagram (the inverse of `Display`).
    /// Legend: '#'=Wall  ' '=Open  'S'=Start  'E'=End
    #[cfg(test)]
    pub fn from_diagram(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows[0].len() as i32;
        let mut cells = Vec::with_capacity((width * height) as usize);
        for row in rows {
            for ch in row.chars() {
                cells.push(match ch {
                    '#' => Cell::Wall,
                    'S' => Cell::Start,
                    'E' => Cell::End,
                    _ => Cell::Open,
                });
            }
        }
        MazeGrid { width, height, cells }
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.get(Coordinates::new(x, y)).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
