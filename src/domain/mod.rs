pub mod cell;
pub mod coords;
pub mod graph;
