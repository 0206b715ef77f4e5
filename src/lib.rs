pub mod config;
pub mod peg;
pub mod puzzle;
pub mod solver;
pub mod ui;
