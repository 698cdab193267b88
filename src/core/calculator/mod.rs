//! Shift-time and performance-normalization engine.
//! Every function here is pure: no I/O, no clock reads, no shared state.

pub mod clock;
pub mod effective;
pub mod period;
pub mod score;
pub mod shift;
