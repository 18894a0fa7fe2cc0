/// Viewport: the fixed 8×8 window a small matrix display shows of a maze
/// that is usually far larger than the display.
///
/// ## Placement
///
/// The window is biased rather than centered: 3 cells behind / 5 ahead
/// horizontally, 4 behind / 4 ahead vertically, so the viewer sits slightly
/// off-center with more forward visibility. After clamping to the grid edge
/// the window is re-normalized per axis so it stays exactly 8×8 whenever the
/// grid allows it; grids smaller than 8 in an axis yield a smaller in-bounds
/// window and `frame` pads the missing pixels with Wall.

use crate::domain::cell::Cell;
use crate::domain::coords::Coordinates;
use crate::maze::grid::MazeGrid;

/// Edge length of the physical display, in cells.
pub const VIEW_SIZE: i32 = 8;

const BEHIND_X: i32 = 3;
const AHEAD_X: i32 = 5;
const BEHIND_Y: i32 = 4;
const AHEAD_Y: i32 = 4;

/// One pixel of the display frame, ready for color mapping by the caller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FramePixel {
    Wall,
    Open,
    Start,
    End,
    Viewer,
}

/// A visible rectangle of the grid: `[min_x, max_x) × [min_y, max_y)`.
/// Computed fresh from the viewer position on every render request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Viewport {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Viewport {
    /// Compute the visible window around `viewer` for a `grid_w × grid_h`
    /// grid.
    pub fn around(viewer: Coordinates, grid_w: i32, grid_h: i32) -> Self {
        let mut min_x = (viewer.x - BEHIND_X).max(0);
        let mut min_y = (viewer.y - BEHIND_Y).max(0);
        let mut max_x = (viewer.x + AHEAD_X).min(grid_w);
        let mut max_y = (viewer.y + AHEAD_Y).min(grid_h);

        // Re-normalize each axis that lost span to edge clamping: pull the
        // near edge back, unless it already sits on 0, in which case push
        // the far edge out instead.
        if max_y - VIEW_SIZE < min_y {
            if min_y == 0 {
                max_y = VIEW_SIZE;
            } else {
                min_y = max_y - VIEW_SIZE;
            }
        }
        if max_x - VIEW_SIZE < min_x {
            if min_x == 0 {
                max_x = VIEW_SIZE;
            } else {
                min_x = max_x - VIEW_SIZE;
            }
        }

        // Grids smaller than the display would otherwise produce an
        // out-of-range window; clip and let `frame` pad.
        max_x = max_x.min(grid_w);
        max_y = max_y.min(grid_h);
        min_x = min_x.max(0);
        min_y = min_y.max(0);

        Viewport { min_x, min_y, max_x, max_y }
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// Does the window contain the grid coordinate `c`?
    pub fn contains(&self, c: Coordinates) -> bool {
        c.x >= self.min_x && c.x < self.max_x && c.y >= self.min_y && c.y < self.max_y
    }

    /// Sample the grid through this window into a row-major
    /// `VIEW_SIZE × VIEW_SIZE` pixel buffer, with the viewer overlaid on
    /// top of whatever cell it occupies and out-of-window slots padded
    /// with Wall. Color assignment is the caller's job.
    pub fn frame(&self, grid: &MazeGrid, viewer: Coordinates) -> [FramePixel; 64] {
        let mut pixels = [FramePixel::Wall; 64];
        for sy in 0..VIEW_SIZE {
            for sx in 0..VIEW_SIZE {
                let world = Coordinates::new(self.min_x + sx, self.min_y + sy);
                if !self.contains(world) {
                    continue; // padding stays Wall
                }
                let pixel = if world == viewer {
                    FramePixel::Viewer
                } else {
                    match grid.get(world) {
                        Cell::Wall => FramePixel::Wall,
                        Cell::Open => FramePixel::Open,
                        Cell::Start => FramePixel::Start,
                        Cell::End => FramePixel::End,
                    }
                };
                pixels[(sy * VIEW_SIZE + sx) as usize] = pixel;
            }
        }
        pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coordinates {
        Coordinates::new(x, y)
    }

    #[test]
    fn top_left_viewer_pins_the_window_to_origin() {
        let v = Viewport::around(c(0, 0), 10, 10);
        assert_eq!(v, Viewport { min_x: 0, min_y: 0, max_x: 8, max_y: 8 });
    }

    #[test]
    fn bottom_right_viewer_pins_the_window_to_the_far_edge() {
        let v = Viewport::around(c(9, 9), 10, 10);
        assert_eq!(v, Viewport { min_x: 2, min_y: 2, max_x: 10, max_y: 10 });
    }

    #[test]
    fn interior_viewer_keeps_the_forward_bias() {
        let v = Viewport::around(c(10, 10), 30, 30);
        assert_eq!(v, Viewport { min_x: 7, min_y: 6, max_x: 15, max_y: 14 });
    }

    #[test]
    fn window_is_always_8x8_and_in_bounds_on_big_grids() {
        for gw in [8, 9, 13, 21] {
            for gh in [8, 11, 17] {
                for y in 0..gh {
                    for x in 0..gw {
                        let v = Viewport::around(c(x, y), gw, gh);
                        assert_eq!(v.width(), VIEW_SIZE, "({x},{y}) in {gw}x{gh}");
                        assert_eq!(v.height(), VIEW_SIZE, "({x},{y}) in {gw}x{gh}");
                        assert!(v.min_x >= 0 && v.max_x <= gw);
                        assert!(v.min_y >= 0 && v.max_y <= gh);
                    }
                }
            }
        }
    }

    #[test]
    fn small_grids_clip_instead_of_overflowing() {
        let v = Viewport::around(c(1, 1), 3, 3);
        assert_eq!(v, Viewport { min_x: 0, min_y: 0, max_x: 3, max_y: 3 });

        // Only the vertical axis is short.
        let v = Viewport::around(c(4, 2), 12, 5);
        assert_eq!(v.width(), 8);
        assert_eq!((v.min_y, v.max_y), (0, 5));
    }

    #[test]
    fn frame_overlays_the_viewer_and_pads_with_wall() {
        let grid = MazeGrid::from_diagram(&[
            "###",
            "#S#",
            "###",
        ]);
        let v = Viewport::around(c(1, 1), grid.width(), grid.height());
        let frame = v.frame(&grid, c(1, 1));

        assert_eq!(frame[(1 * VIEW_SIZE + 1) as usize], FramePixel::Viewer);
        assert_eq!(frame[0], FramePixel::Wall);
        // Everything right of the 3-wide grid is padding.
        assert_eq!(frame[3], FramePixel::Wall);
        assert_eq!(frame[63], FramePixel::Wall);
        assert_eq!(frame.len(), 64);
    }

    #[test]
    fn frame_reports_markers_when_not_occupied() {
        let grid = MazeGrid::from_diagram(&[
            "########",
            "#S    E#",
            "########",
            "########",
            "########",
            "########",
            "########",
            "########",
        ]);
        let v = Viewport::around(c(3, 1), grid.width(), grid.height());
        let frame = v.frame(&grid, c(3, 1));

        assert_eq!(frame[(1 * VIEW_SIZE + 1) as usize], FramePixel::Start);
        assert_eq!(frame[(1 * VIEW_SIZE + 6) as usize], FramePixel::End);
        assert_eq!(frame[(1 * VIEW_SIZE + 3) as usize], FramePixel::Viewer);
        assert_eq!(frame[(1 * VIEW_SIZE + 2) as usize], FramePixel::Open);
    }
}
