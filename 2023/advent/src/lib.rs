//! Pieces shared by the 2023 solvers.
//!
//! The heart of the crate is the reachability toolkit in [`reach`]: bounded
//! neighbor enumeration over a [`Grid`] and a lazy multi-target breadth-first
//! search. The remaining modules hold the small helpers every day reaches for
//! (input reading, integer math and logging setup).

pub mod grid;
pub mod input;
pub mod logging;
pub mod math;
pub mod reach;

pub use grid::{Direction, Grid, Position};
pub use reach::{distances, neighbors, Offsets, TargetSearch};
