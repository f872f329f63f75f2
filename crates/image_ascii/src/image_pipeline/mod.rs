pub mod geometry;
pub mod sample;
