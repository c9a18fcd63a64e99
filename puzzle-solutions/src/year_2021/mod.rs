//! Solvers for the 2021 puzzle calendar

pub mod day_1;
pub mod day_2;
pub mod day_3;
