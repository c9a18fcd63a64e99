//! Advent of Code 2021 puzzle solutions with automatic registration
//!
//! Each daily solver implements the `puzzle-solver` traits and submits
//! a plugin so binaries can collect every solver through the registry.
//! The reusable binary-diagnostic core that day 3 is built on lives in
//! [`diagnostic`].

pub mod diagnostic;
pub mod year_2021;
