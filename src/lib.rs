//! **perfect_mazes** generates perfect mazes on square grids with the recursive backtracker,
//! and answers path and layout queries about them.

#[macro_use]
extern crate error_chain;

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid_displays;
pub mod layout;
pub mod maze;
pub mod pathing;
pub mod random;
pub mod units;
mod utils;
