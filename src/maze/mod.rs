pub mod generator;
pub mod grid;
pub mod solver;
