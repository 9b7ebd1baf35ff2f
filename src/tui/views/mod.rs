//! Chart and detail views

pub mod chart;
pub mod detail;
