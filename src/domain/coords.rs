/// Grid coordinates, the four cardinal directions, and screen rotation.
/// Coordinates are signed so that off-grid candidates (neighbor probes,
/// viewport corners) can be represented before bounds filtering.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub fn new(x: i32, y: i32) -> Self {
        Coordinates { x, y }
    }

    /// The cell one step away in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Coordinates { x: self.x + dx, y: self.y + dy }
    }

    /// Is this coordinate inside `[0, width) × [0, height)`?
    pub fn in_bounds(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

/// The four cardinal directions. `ALL` fixes the canonical iteration
/// order (Up, Down, Left, Right) used by neighbor queries and the BFS.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset in grid space (y grows downward).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Slot index for per-node connection masks.
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Mounting rotation of the physical display, in quarter turns.
///
/// A rotated display means a rotated joystick: pressing "up" on a display
/// mounted at 180° must move the viewer down in grid space. `apply` maps a
/// pressed direction to the grid direction by walking the counter-clockwise
/// cycle Up → Left → Down → Right by the rotation amount.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

// Counter-clockwise direction cycle used by `apply`.
const CCW: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Down,
    Direction::Right,
];

impl Rotation {
    /// Quarter turns from an angle in degrees. Any integer is accepted;
    /// the angle is wrapped into [0, 360) and floored to a quarter turn.
    pub fn from_degrees(degrees: i32) -> Self {
        let wrapped = degrees.rem_euclid(360);
        match wrapped / 90 {
            0 => Rotation::R0,
            1 => Rotation::R90,
            2 => Rotation::R180,
            _ => Rotation::R270,
        }
    }

    fn quarter_turns(self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    /// Map a pressed stick direction to the grid direction it means
    /// under this mounting rotation.
    pub fn apply(self, pressed: Direction) -> Direction {
        let turns = self.quarter_turns();
        if turns == 0 {
            return pressed;
        }
        let idx = CCW.iter().position(|&d| d == pressed).unwrap_or(0);
        CCW[(idx + turns) % 4]
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::R0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_follows_delta() {
        let c = Coordinates::new(3, 3);
        assert_eq!(c.step(Direction::Up), Coordinates::new(3, 2));
        assert_eq!(c.step(Direction::Down), Coordinates::new(3, 4));
        assert_eq!(c.step(Direction::Left), Coordinates::new(2, 3));
        assert_eq!(c.step(Direction::Right), Coordinates::new(4, 3));
    }

    #[test]
    fn bounds_filtering() {
        assert!(Coordinates::new(0, 0).in_bounds(4, 4));
        assert!(Coordinates::new(3, 3).in_bounds(4, 4));
        assert!(!Coordinates::new(-1, 0).in_bounds(4, 4));
        assert!(!Coordinates::new(0, 4).in_bounds(4, 4));
    }

    #[test]
    fn opposite_is_involutive() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn rotation_from_degrees_wraps_and_floors() {
        assert_eq!(Rotation::from_degrees(0), Rotation::R0);
        assert_eq!(Rotation::from_degrees(180), Rotation::R180);
        assert_eq!(Rotation::from_degrees(450), Rotation::R90);
        assert_eq!(Rotation::from_degrees(-90), Rotation::R270);
        assert_eq!(Rotation::from_degrees(135), Rotation::R90);
    }

    #[test]
    fn rotation_identity_at_zero() {
        for dir in Direction::ALL {
            assert_eq!(Rotation::R0.apply(dir), dir);
        }
    }

    #[test]
    fn rotation_half_turn_flips() {
        assert_eq!(Rotation::R180.apply(Direction::Up), Direction::Down);
        assert_eq!(Rotation::R180.apply(Direction::Down), Direction::Up);
        assert_eq!(Rotation::R180.apply(Direction::Left), Direction::Right);
        assert_eq!(Rotation::R180.apply(Direction::Right), Direction::Left);
    }

    #[test]
    fn rotation_quarter_turn_follows_ccw_cycle() {
        assert_eq!(Rotation::R90.apply(Direction::Up), Direction::Left);
        assert_eq!(Rotation::R90.apply(Direction::Left), Direction::Down);
        assert_eq!(Rotation::R90.apply(Direction::Down), Direction::Right);
        assert_eq!(Rotation::R90.apply(Direction::Right), Direction::Up);
    }
}
