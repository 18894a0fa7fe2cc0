/// Compiled-grid cell types and their properties.
/// Properties are queried via methods, not stored as flags,
/// so cell semantics are centralized here.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Wall,
    Open,
    Start,
    End,
}

impl Cell {
    /// Can the viewer occupy this cell?
    pub fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// Is this the goal marker?
    pub fn is_end(self) -> bool {
        matches!(self, Cell::End)
    }

    /// Glyph used by the ASCII dump and the test diagrams.
    pub fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => ' ',
            Cell::Start => 'S',
            Cell::End => 'E',
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_walls_block() {
        assert!(!Cell::Wall.is_passable());
        assert!(Cell::Open.is_passable());
        assert!(Cell::Start.is_passable());
        assert!(Cell::End.is_passable());
    }

    #[test]
    fn out_of_band_defaults_to_wall() {
        assert_eq!(Cell::default(), Cell::Wall);
    }
}
